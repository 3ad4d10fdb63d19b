//! Statistics for tile bookkeeping

pub mod metrics;

pub use metrics::TileStats;
