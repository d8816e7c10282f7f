use std::fmt::Display;

use crate::{
    combination::Combination,
    combinator,
    plate_type::PlateType,
    search_error::SearchError,
    task::Task,
};

/// What a shell shows for a task: nothing while the task is incomplete, the ranked combinations
/// otherwise.
#[derive(Debug)]
pub struct Answer {
    outcome: Result<Vec<Combination>, SearchError>,
}

impl Answer {
    #[must_use]
    pub fn new(outcome: Result<Vec<Combination>, SearchError>) -> Self {
        Answer { outcome }
    }

    #[must_use]
    pub fn search(plates: Vec<PlateType>, task: &Task) -> Self {
        Answer::new(combinator::search(&plates, task))
    }

    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        self.outcome.is_err()
    }

    #[must_use]
    pub fn reason(&self) -> Option<SearchError> {
        self.outcome.as_ref().err().copied()
    }

    #[must_use]
    pub fn combinations(&self) -> Vec<Combination> {
        self.outcome.clone().unwrap_or_default()
    }
}

impl Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            Err(_) => Ok(()),
            Ok(combinations) if combinations.is_empty() => writeln!(f, "No possible combinations"),
            Ok(combinations) => {
                writeln!(f, "Possible combinations")?;
                for (i, combination) in combinations.iter().enumerate() {
                    writeln!(f, "{}) {combination}", i + 1)?;
                }
                Ok(())
            }
        }
    }
}
