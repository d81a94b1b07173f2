pub(crate) mod collectors;
pub(crate) mod pairs;
pub mod stats;
pub(crate) mod transform;

pub use stats::SummaryStats;
