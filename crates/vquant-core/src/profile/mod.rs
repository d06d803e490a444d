// crates/vquant-core/src/profile/mod.rs

pub mod defaults;
pub mod format;
pub mod range;
