// crates/vquant-core/src/signal/mod.rs

pub mod quantize;
pub mod register;
