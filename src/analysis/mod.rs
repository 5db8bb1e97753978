//! Analysis modules for turning raw sketches into feature grids

/// Cropping and resampling of drawn content into fixed-size grids
pub mod normalizer;
