use std::fmt::Display;

use itertools::Itertools;

use crate::plate_set_usage::PlateSetUsage;

/// One way to load a single dumbbell: the plates on it and what it weighs in the end.
#[derive(Clone, Debug, PartialEq)]
pub struct Combination {
    usages: Vec<PlateSetUsage>,
    total_weight: f64,
}

impl Combination {
    /// An unloaded dumbbell.
    #[must_use]
    pub fn empty(base_weight: f64) -> Self {
        Combination {
            usages: Vec::new(),
            total_weight: base_weight,
        }
    }

    #[must_use]
    pub fn usages(&self) -> &[PlateSetUsage] {
        &self.usages
    }

    #[must_use]
    pub fn usages_owned(self) -> Vec<PlateSetUsage> {
        self.usages
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.usages.is_empty()
    }

    /// Weight of the dumbbell once `unit` is added to it.
    #[must_use]
    pub fn weight_with(&self, unit: &PlateSetUsage) -> f64 {
        self.total_weight + unit.load()
    }

    /// A copy of this combination with `unit` added, merged into the usage of the same plate if there is one.
    #[must_use]
    pub fn with(&self, unit: PlateSetUsage) -> Self {
        let merged = self
            .usages
            .iter()
            .find(|usage| usage.same_plate(&unit))
            .map_or(unit, |usage| usage.merged(&unit));

        Combination {
            usages: self
                .usages
                .iter()
                .filter(|usage| !usage.same_plate(&unit))
                .copied()
                .chain(std::iter::once(merged))
                .sorted()
                .collect(),
            total_weight: self.weight_with(&unit),
        }
    }

    /// Drops usages that ended up with no plates.
    #[must_use]
    pub fn cleaned(self) -> Self {
        Combination {
            usages: self
                .usages
                .into_iter()
                .filter(|usage| usage.count() != 0)
                .collect(),
            total_weight: self.total_weight,
        }
    }
}

impl Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} for a total dumbbell weight of {}kg",
            self.usages.iter().join(" + "),
            self.total_weight
        )
    }
}
