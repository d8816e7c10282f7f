use thiserror::Error;

/// Why a task cannot be searched yet.
///
/// None of these are failures: they describe a task that is still being filled in, so a shell
/// shows no combinations at all rather than an error.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SearchError {
    #[error("Target weight {0} is not a number.")]
    NonFiniteTarget(f64),
    #[error("Empty dumbbell weight {0} is not a number.")]
    NonFiniteBase(f64),
    #[error("No target weight entered.")]
    ZeroTarget,
    #[error("At least one dumbbell is needed.")]
    NoDumbbells,
}
