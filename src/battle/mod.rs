pub mod ai;
pub mod calculators;
pub mod state;
pub mod stats;
