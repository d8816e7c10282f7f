use crate::answer::Answer;
use crate::combination::Combination;
use crate::plate_set_usage::PlateSetUsage;
use crate::plate_type::PlateType;
use crate::task::Task;

#[swift_bridge::bridge]
mod ffi {
    extern "Rust" {
        type PlateType;
        type Task;
        type Answer;
        type Combination;
        type PlateSetUsage;

        #[swift_bridge(init)]
        fn new(weight: f64, count: u32) -> PlateType;

        #[swift_bridge(init)]
        fn new(target_weight: f64, base_weight: f64, dumbbell_count: u32) -> Task;

        #[swift_bridge(associated_to = Answer)]
        fn search(plates: Vec<PlateType>, task: &Task) -> Answer;

        fn is_incomplete(self: &Answer) -> bool;
        fn combinations(self: &Answer) -> Vec<Combination>;

        fn total_weight(self: &Combination) -> f64;
        fn usages_owned(self: Combination) -> Vec<PlateSetUsage>;

        fn weight(self: &PlateSetUsage) -> f64;
        fn count(self: &PlateSetUsage) -> u32;
    }
}
