//! # ETA Cache
//!
//! 估算結果快取與髒標記追蹤（加速用，正確性不依賴它）

pub mod cache;
pub mod dirty_tracking;
pub mod snapshot;

pub use cache::EtaCache;
pub use dirty_tracking::DirtyTracker;
pub use snapshot::snapshot_fingerprint;
