use crate::search_error::SearchError;

/// What the lifter wants: `dumbbell_count` identical dumbbells of at least `target_weight` each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Task {
    pub target_weight: f64,
    pub base_weight: f64,
    pub dumbbell_count: u32,
}

impl Task {
    #[must_use]
    pub fn new(target_weight: f64, base_weight: f64, dumbbell_count: u32) -> Self {
        Task {
            target_weight,
            base_weight,
            dumbbell_count,
        }
    }

    #[must_use]
    pub fn target_weight(&self) -> f64 {
        self.target_weight
    }

    #[must_use]
    pub fn base_weight(&self) -> f64 {
        self.base_weight
    }

    #[must_use]
    pub fn dumbbell_count(&self) -> u32 {
        self.dumbbell_count
    }

    ///
    /// # Errors
    /// If the task is not complete enough to search: a missing or zero target, a missing empty
    /// dumbbell weight, or no dumbbells.
    ///
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.target_weight.is_finite() {
            Err(SearchError::NonFiniteTarget(self.target_weight))
        } else if !self.base_weight.is_finite() {
            Err(SearchError::NonFiniteBase(self.base_weight))
        } else if self.target_weight == 0.0 {
            Err(SearchError::ZeroTarget)
        } else if self.dumbbell_count == 0 {
            Err(SearchError::NoDumbbells)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn nan_target_is_rejected() {
        assert!(matches!(
            Task::new(f64::NAN, 2.0, 1).validate(),
            Err(SearchError::NonFiniteTarget(_))
        ));
    }

    #[test_case(0.0, 2.0, 1 => Err(SearchError::ZeroTarget); "zero target")]
    #[test_case(-0.0, 2.0, 1 => Err(SearchError::ZeroTarget); "negative zero target")]
    #[test_case(f64::INFINITY, 2.0, 1 => Err(SearchError::NonFiniteTarget(f64::INFINITY)); "infinite target")]
    #[test_case(10.0, f64::NEG_INFINITY, 1 => Err(SearchError::NonFiniteBase(f64::NEG_INFINITY)); "infinite base")]
    #[test_case(10.0, 2.0, 0 => Err(SearchError::NoDumbbells); "no dumbbells")]
    #[test_case(10.0, 2.0, 2 => Ok(()); "complete task")]
    #[test_case(10.0, 0.0, 1 => Ok(()); "weightless handle")]
    fn validate(target: f64, base: f64, dumbbells: u32) -> Result<(), SearchError> {
        Task::new(target, base, dumbbells).validate()
    }

    #[test]
    fn nan_base_is_rejected() {
        assert!(matches!(
            Task::new(10.0, f64::NAN, 1).validate(),
            Err(SearchError::NonFiniteBase(_))
        ));
    }
}
