use std::fmt::Display;

use ordered_float::OrderedFloat;

/// `count` plates of `weight` on a single dumbbell.
///
/// Ordered by weight first, so a sorted list of usages with distinct weights has one canonical order.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub struct PlateSetUsage {
    weight: OrderedFloat<f64>,
    count: u32,
}

impl PlateSetUsage {
    #[must_use]
    pub fn new(weight: f64, count: u32) -> Self {
        PlateSetUsage {
            weight: OrderedFloat(weight),
            count,
        }
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight.into_inner()
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Weight this usage adds to one dumbbell.
    #[must_use]
    pub fn load(&self) -> f64 {
        self.weight() * f64::from(self.count)
    }

    #[must_use]
    pub fn same_plate(&self, other: &Self) -> bool {
        self.weight == other.weight
    }

    /// This usage with `other`'s plates added to it.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        PlateSetUsage {
            weight: self.weight,
            count: self.count + other.count,
        }
    }
}

impl Display for PlateSetUsage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}kg", self.count, self.weight)
    }
}
