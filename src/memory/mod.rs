//! Trainable memory of named sketch patterns

/// Single learned symbol with mean ink weights
pub mod pattern;
/// Ordered pattern collection with recognition and persistence
pub mod store;

pub use pattern::Pattern;
pub use store::PatternStore;
