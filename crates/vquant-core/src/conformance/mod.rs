// crates/vquant-core/src/conformance/mod.rs

//! Reference-model scenarios a simulated converter is checked against.

pub mod level;
pub mod scenario;

pub use level::TestLevel;
pub use scenario::{evaluate, generic_scenarios, run, scenarios, Check, Outcome, Scenario};

/// Environment variable selecting the scenario tier.
pub const TEST_LEVEL_ENV: &str = "TEST_LEVEL";

