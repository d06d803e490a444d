// crates/vquant-cli/src/cmd/mod.rs

pub mod check;
pub mod convert;
pub mod profile;
pub mod profiles;

use clap::Args;
use vquant_core::profile::defaults;
use vquant_core::profile::format::profile_id_hex;
use vquant_core::{Quantizer, RangeProfile};

use crate::io::profile_file;

/// Which range profile a command converts with.
#[derive(Args, Debug)]
pub struct ProfileSel {
    /// Built-in profile name (3v3, 5v0, 5v_bipolar)
    #[arg(long, default_value = "3v3")]
    pub profile: String,

    /// Profile file (.vqp). Overrides --profile.
    #[arg(long)]
    pub profile_file: Option<String>,
}

impl ProfileSel {
    pub fn resolve(&self) -> anyhow::Result<RangeProfile> {
        let p = match &self.profile_file {
            Some(path) => profile_file::load_vqp(path)?,
            None => defaults::lookup(&self.profile)?,
        };
        tracing::debug!(profile = %p, id = %profile_id_hex(&p), "profile resolved");
        Ok(p)
    }

    pub fn quantizer(&self) -> anyhow::Result<Quantizer> {
        Ok(Quantizer::new(self.resolve()?)?)
    }
}
