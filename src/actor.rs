//! Actors
//!
//! Per-generation actor contracts (`legacy` is the v2 API, `current` is v3),
//! the bridging actor that merges them, and a snapshot-file backend that
//! implements both contracts.

pub mod bridge;
pub mod current;
pub mod legacy;
pub mod snapshot;

pub use bridge::{BridgeActor, MergedApplicationSummary, MANIFEST_FEATURE_MIN_VERSION};
pub use current::CurrentActor;
pub use legacy::LegacyActor;
pub use snapshot::{PlatformSnapshot, SnapshotActor};
