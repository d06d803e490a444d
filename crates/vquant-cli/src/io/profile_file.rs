// crates/vquant-cli/src/io/profile_file.rs

use anyhow::{Context, Result};
use vquant_core::profile::format as profile_format;
use vquant_core::RangeProfile;

/// Load a .vqp profile file.
pub fn load_vqp(path: &str) -> Result<RangeProfile> {
    let bytes = std::fs::read(path).with_context(|| format!("read profile {path}"))?;
    let profile = profile_format::decode(&bytes).with_context(|| format!("decode profile {path}"))?;
    Ok(profile)
}

/// Save a profile as a .vqp file.
pub fn save_vqp(path: &str, profile: &RangeProfile) -> Result<()> {
    let bytes = profile_format::encode(profile);
    std::fs::write(path, bytes).with_context(|| format!("write profile {path}"))?;
    Ok(())
}
