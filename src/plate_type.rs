use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Plates go on a dumbbell in matched pairs, one per side.
pub const PLATES_PER_PAIR: u32 = 2;

/// One inventory row: plates of a single weight and how many of them exist in total.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlateType {
    pub weight: f64,
    pub count: u32,
}

impl PlateType {
    #[must_use]
    pub fn new(weight: f64, count: u32) -> Self {
        PlateType { weight, count }
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// How many times a matched pair can be put on every one of `dumbbell_count` dumbbells.
    ///
    /// Zero-weight plates never count, and neither do plates that cannot give each dumbbell a pair.
    #[must_use]
    pub fn pair_sets(&self, dumbbell_count: u32) -> u32 {
        let Some(per_set) = dumbbell_count.checked_mul(PLATES_PER_PAIR) else {
            return 0;
        };

        if self.weight == 0.0 || per_set == 0 || self.count < per_set {
            0
        } else {
            self.count / per_set
        }
    }

    pub fn from_counts(counts: &[(f64, u32)]) -> Vec<PlateType> {
        counts
            .iter()
            .map(|&(weight, count)| PlateType::new(weight, count))
            .collect()
    }
}

impl Display for PlateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}kg", self.count, self.weight)
    }
}

impl FromStr for PlateType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (count, weight) = s
            .to_lowercase()
            .split_once('x')
            .map(|(count, weight)| (count.trim().to_string(), weight.trim().to_string()))
            .ok_or_else(|| "Expected plates as COUNTxWEIGHT, e.g. 4x2.5".to_string())?;

        let count = count
            .parse::<u32>()
            .map_err(|_| format!("Invalid plate count: {count}"))?;
        let weight = weight
            .trim_end_matches("kg")
            .parse::<f64>()
            .map_err(|_| format!("Invalid plate weight: {weight}"))?;

        Ok(PlateType::new(weight, count))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(5.0, 5, 1 => 2; "five plates give two pairs")]
    #[test_case(1.25, 3, 1 => 1; "odd plate is left over")]
    #[test_case(5.0, 1, 1 => 0; "single plate is no pair")]
    #[test_case(5.0, 5, 2 => 1; "two dumbbells need four plates per set")]
    #[test_case(5.0, 3, 2 => 0; "three plates cannot load two dumbbells")]
    #[test_case(0.0, 10, 1 => 0; "zero weight plates are useless")]
    #[test_case(2.5, 12, 3 => 2; "three dumbbells")]
    #[test_case(2.5, 12, 0 => 0; "no dumbbells")]
    fn pair_sets(weight: f64, count: u32, dumbbells: u32) -> u32 {
        PlateType::new(weight, count).pair_sets(dumbbells)
    }

    #[test]
    fn parses_count_by_weight() {
        assert_eq!("4x2.5".parse::<PlateType>(), Ok(PlateType::new(2.5, 4)));
        assert_eq!(" 3 X 1.25kg ".parse::<PlateType>(), Ok(PlateType::new(1.25, 3)));
    }

    #[test]
    fn rejects_malformed_plates() {
        assert!("4".parse::<PlateType>().is_err());
        assert!("-1x5".parse::<PlateType>().is_err());
        assert!("2xheavy".parse::<PlateType>().is_err());
    }

    #[test]
    fn displays_like_an_inventory_row() {
        assert_eq!(PlateType::new(1.25, 3).to_string(), "3 x 1.25kg");
    }
}
