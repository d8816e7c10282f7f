use std::cmp::Ordering;

use itertools::Itertools;
use log::{debug, trace};

use crate::{
    combination::Combination,
    plate_set_usage::PlateSetUsage,
    plate_type::{PLATES_PER_PAIR, PlateType},
    search_error::SearchError,
    task::Task,
};

/// How far a single added pair may take a dumbbell past the target before that branch is cut.
pub const SLACK: f64 = 1.0;

/// Finds every way to load dumbbells up to a target with the plates at hand.
pub struct Combinator {
    task: Task,
    units: Vec<PlateSetUsage>,
}

impl Combinator {
    ///
    /// # Errors
    /// If the task is incomplete, see [`Task::validate`].
    ///
    pub fn new(plates: &[PlateType], task: Task) -> Result<Self, SearchError> {
        task.validate()?;

        let units = Self::units_from(plates, task.dumbbell_count());
        debug!(
            "{} plate types expand to {} usable pairs for {} dumbbell(s)",
            plates.len(),
            units.len(),
            task.dumbbell_count()
        );

        Ok(Combinator { task, units })
    }

    #[must_use]
    pub fn task(&self) -> &Task {
        &self.task
    }

    /// One matched pair per entry, in inventory order. A plate type appears once for every pair
    /// set it can give to all dumbbells.
    #[must_use]
    pub fn units(&self) -> &[PlateSetUsage] {
        &self.units
    }

    #[must_use]
    pub fn seed(&self) -> Combination {
        Combination::empty(self.task.base_weight())
    }

    /// Adds `unit` to every candidate that can take it without overshooting, keeping the
    /// candidate without it as well.
    #[must_use]
    pub fn fold(&self, candidates: Vec<Combination>, unit: PlateSetUsage) -> Vec<Combination> {
        let ceiling = self.task.target_weight() + SLACK;

        candidates
            .into_iter()
            .flat_map(|candidate| {
                if candidate.weight_with(&unit) > ceiling {
                    trace!("adding {unit} to {}kg passes {ceiling}kg", candidate.total_weight());
                    vec![candidate]
                } else {
                    let loaded = candidate.with(unit);
                    vec![candidate, loaded]
                }
            })
            .collect()
    }

    /// Every candidate the fold produces, duplicates and all.
    #[must_use]
    pub fn candidates(&self) -> Vec<Combination> {
        self.units
            .iter()
            .fold(vec![self.seed()], |candidates, unit| {
                let candidates = self.fold(candidates, *unit);
                trace!("{} candidates after {unit}", candidates.len());
                candidates
            })
    }

    /// Distinct combinations reaching the target, lightest first.
    #[must_use]
    pub fn combinations(&self) -> Vec<Combination> {
        let candidates = self.candidates();
        debug!("fold produced {} candidates", candidates.len());

        let combinations = Self::rank(self.feasible(candidates));
        debug!(
            "{} distinct combinations reach {}kg",
            combinations.len(),
            self.task.target_weight()
        );

        combinations
    }

    fn units_from(plates: &[PlateType], dumbbell_count: u32) -> Vec<PlateSetUsage> {
        plates
            .iter()
            .flat_map(|plate| {
                let pair_sets = plate.pair_sets(dumbbell_count) as usize;
                vec![PlateSetUsage::new(plate.weight(), PLATES_PER_PAIR); pair_sets]
            })
            .collect()
    }

    /// Keeps the first of each distinct loadout that meets the target.
    fn feasible(&self, candidates: Vec<Combination>) -> Vec<Combination> {
        candidates
            .into_iter()
            .filter(|candidate| candidate.total_weight() >= self.task.target_weight())
            .map(Combination::cleaned)
            .filter(|candidate| !candidate.is_empty())
            .unique_by(|candidate| candidate.usages().to_vec())
            .collect()
    }

    /// Least overshoot first; among equal weights, combinations with more kinds of plate first.
    fn rank(combinations: Vec<Combination>) -> Vec<Combination> {
        combinations
            .into_iter()
            .sorted_by(|a, b| {
                a.total_weight()
                    .partial_cmp(&b.total_weight())
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| b.usages().len().cmp(&a.usages().len()))
            })
            .collect()
    }
}

///
/// # Errors
/// If the task is incomplete, see [`Task::validate`].
///
pub fn search(plates: &[PlateType], task: &Task) -> Result<Vec<Combination>, SearchError> {
    Ok(Combinator::new(plates, *task)?.combinations())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(weight: f64) -> PlateSetUsage {
        PlateSetUsage::new(weight, PLATES_PER_PAIR)
    }

    fn combinator(plates: &[(f64, u32)], target: f64, base: f64, dumbbells: u32) -> Combinator {
        Combinator::new(
            &PlateType::from_counts(plates),
            Task::new(target, base, dumbbells),
        )
        .unwrap()
    }

    #[test]
    fn units_follow_inventory_order() {
        let combinator = combinator(&[(5.0, 5), (1.25, 3)], 10.0, 2.0, 1);

        assert_eq!(combinator.units(), &[pair(5.0), pair(5.0), pair(1.25)]);
    }

    #[test]
    fn units_are_shared_between_dumbbells() {
        let combinator = combinator(&[(5.0, 9), (2.5, 3), (0.0, 8)], 10.0, 2.0, 2);

        assert_eq!(combinator.units(), &[pair(5.0), pair(5.0)]);
    }

    #[test]
    fn fold_keeps_skip_branch_before_include_branch() {
        let combinator = combinator(&[], 10.0, 2.0, 1);

        let candidates = combinator.fold(vec![combinator.seed()], pair(2.5));

        assert_eq!(
            candidates,
            vec![combinator.seed(), combinator.seed().with(pair(2.5))]
        );
    }

    #[test]
    fn fold_prunes_overshooting_branch() {
        let combinator = combinator(&[], 10.0, 2.0, 1);

        // 2 + 10 is 12, more than a kilogram over 10.
        let candidates = combinator.fold(vec![combinator.seed()], pair(5.0));

        assert_eq!(candidates, vec![combinator.seed()]);
    }

    #[test]
    fn fold_allows_overshoot_within_slack() {
        let combinator = combinator(&[], 11.0, 2.0, 1);

        let candidates = combinator.fold(vec![combinator.seed()], pair(5.0));

        assert_eq!(candidates.len(), 2);
        assert!((candidates[1].total_weight() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn candidates_double_until_pruned() {
        let combinator = combinator(&[(1.0, 8)], 100.0, 0.0, 1);

        assert_eq!(combinator.candidates().len(), 16);
    }

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        let combinator = combinator(&[(5.0, 5), (1.25, 3)], 12.0, 2.0, 1);

        assert_eq!(
            combinator.combinations(),
            vec![combinator.seed().with(pair(5.0))]
        );
    }

    #[test]
    fn more_plate_kinds_rank_first_at_equal_weight() {
        let combinator = combinator(&[(1.0, 2), (2.0, 2), (3.0, 2)], 6.0, 0.0, 1);

        let usages = combinator
            .combinations()
            .into_iter()
            .map(Combination::usages_owned)
            .collect::<Vec<_>>();

        assert_eq!(usages, vec![vec![pair(1.0), pair(2.0)], vec![pair(3.0)]]);
    }

    #[test]
    fn lighter_combinations_rank_first() {
        let combinator = combinator(&[(1.0, 4), (1.5, 2)], 3.0, 0.0, 1);

        let totals = combinator
            .combinations()
            .iter()
            .map(Combination::total_weight)
            .collect::<Vec<_>>();

        assert_eq!(totals, vec![3.0, 4.0]);
    }

    #[test]
    fn bare_handle_is_not_a_combination() {
        let combinator = combinator(&[(1.0, 2)], 2.0, 5.0, 1);

        assert!(combinator.combinations().is_empty());
    }

    #[test]
    fn search_rejects_incomplete_tasks() {
        let plates = PlateType::from_counts(&[(5.0, 5)]);

        assert_eq!(
            search(&plates, &Task::new(0.0, 2.0, 1)),
            Err(SearchError::ZeroTarget)
        );
    }
}
