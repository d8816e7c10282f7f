#![warn(clippy::pedantic)]
#![allow(clippy::unnecessary_cast)]

pub mod answer;
#[cfg(feature = "swift")]
pub mod bridge;
pub mod combination;
pub mod combinator;
pub mod inventory;
pub mod inventory_error;
pub mod plate_set_usage;
pub mod plate_type;
pub mod search_error;
pub mod task;
