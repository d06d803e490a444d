// crates/vquant-cli/src/cmd/check.rs

use clap::Args;
use tracing::{info, warn};
use vquant_core::conformance::{self, Outcome, TestLevel, TEST_LEVEL_ENV};

use crate::io::profile_file;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Scenario tier: P1_BASIC, P2_INTERMEDIATE, P3_ADVANCED
    #[arg(long, env = TEST_LEVEL_ENV, default_value = "P1_BASIC")]
    pub level: TestLevel,

    /// Run the value-independent checks against this .vqp instead of the
    /// built-in scenario table
    #[arg(long)]
    pub profile_file: Option<String>,
}

pub fn run(a: CheckArgs) -> anyhow::Result<()> {
    let outcomes: Vec<Outcome> = match &a.profile_file {
        Some(path) => {
            let p = profile_file::load_vqp(path)?;
            conformance::generic_scenarios(p, a.level)
                .iter()
                .map(conformance::evaluate)
                .collect::<Result<_, _>>()?
        }
        None => conformance::run(a.level)?,
    };

    let mut failed = 0usize;
    for o in &outcomes {
        let mark = if o.passed { "PASS" } else { "FAIL" };
        println!(
            "{mark} {:<16} {:<11} {:<20} {}",
            o.level,
            o.profile_label(),
            o.name,
            o.detail
        );
        if !o.passed {
            failed += 1;
        }
    }

    if failed > 0 {
        warn!(level = %a.level, failed, total = outcomes.len(), "conformance failed");
        anyhow::bail!("{failed} of {} scenarios failed", outcomes.len());
    }
    info!(level = %a.level, total = outcomes.len(), "conformance ok");
    Ok(())
}
