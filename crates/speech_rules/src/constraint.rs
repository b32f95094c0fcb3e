//! Dynamic constraints used to pick one rule out of several sharing a key.

use core::fmt;
use std::collections::{BTreeMap, BTreeSet};

/// Separator between the domain and style halves of a serialized constraint.
pub const CONSTRAINT_SEPARATOR: char = '.';

/// A named dimension along which rules for the same key are disambiguated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConstraintAxis {
    /// Subject area, e.g. `default`, `trig`, `chemistry`.
    Domain,
    /// Verbosity or voice, e.g. `short`, `verbose`.
    Style,
}

impl ConstraintAxis {
    /// Every axis, in serialization order.
    pub const ALL: [Self; 2] = [Self::Domain, Self::Style];

    /// The axis name as it appears in rule data.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Style => "style",
        }
    }
}

impl fmt::Display for ConstraintAxis {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A concrete value for each constraint axis, supplied at lookup time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DynamicCstr {
    /// Value on the domain axis.
    pub domain: String,
    /// Value on the style axis.
    pub style: String,
}

impl DynamicCstr {
    /// Build a constraint from its two axis values.
    #[inline]
    pub fn new(domain: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            style: style.into(),
        }
    }

    /// Parse the `domain.style` form used when rules are defined.
    ///
    /// Only the first separator splits; a key without a separator is taken
    /// as a bare domain with an empty style.
    pub fn parse(key: &str) -> Self {
        match key.split_once(CONSTRAINT_SEPARATOR) {
            Some((domain, style)) => Self::new(domain, style),
            None => Self::new(key, ""),
        }
    }

    /// Value on the given axis.
    #[inline]
    pub fn get(&self, axis: ConstraintAxis) -> &str {
        match axis {
            ConstraintAxis::Domain => &self.domain,
            ConstraintAxis::Style => &self.style,
        }
    }

    /// The `domain.style` form.
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DynamicCstr {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}{CONSTRAINT_SEPARATOR}{}",
            self.domain, self.style
        )
    }
}

/// Distinct values observed per axis. Ordered so diagnostics are stable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DynamicConstraintValues {
    values: BTreeMap<ConstraintAxis, BTreeSet<String>>,
}

impl DynamicConstraintValues {
    /// No values on any axis.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every axis value of `constraint`.
    pub fn record(&mut self, constraint: &DynamicCstr) {
        for axis in ConstraintAxis::ALL {
            self.values
                .entry(axis)
                .or_default()
                .insert(constraint.get(axis).to_owned());
        }
    }

    /// Union `other` into `self`, deduplicating per axis.
    pub fn merge(&mut self, other: Self) {
        for (axis, values) in other.values {
            self.values.entry(axis).or_default().extend(values);
        }
    }

    /// Values seen on `axis`; `None` when nothing was recorded.
    pub fn axis(&self, axis: ConstraintAxis) -> Option<&BTreeSet<String>> {
        self.values.get(&axis)
    }

    /// Whether `value` was seen on `axis`.
    pub fn contains(&self, axis: ConstraintAxis, value: &str) -> bool {
        self.values
            .get(&axis)
            .is_some_and(|values| values.contains(value))
    }

    /// Whether no values were recorded at all.
    pub fn is_empty(&self) -> bool {
        self.values.values().all(BTreeSet::is_empty)
    }

    /// Iterate axes with their value sets.
    pub fn iter(&self) -> impl Iterator<Item = (ConstraintAxis, &BTreeSet<String>)> {
        self.values.iter().map(|(axis, values)| (*axis, values))
    }
}
