// crates/vquant-cli/src/io/bin.rs

use anyhow::Context;
use vquant_core::signal::register::register_bytes;

/// Register words, little-endian, `ceil(bits/8)` bytes each.
pub fn write_registers_file(path: &str, words: &[u32], bits: u32) -> anyhow::Result<()> {
    let width = register_bytes(bits);
    let mut out = Vec::with_capacity(words.len() * width);
    for w in words {
        out.extend_from_slice(&w.to_le_bytes()[..width]);
    }
    std::fs::write(path, out).with_context(|| format!("write registers bin: {path}"))?;
    Ok(())
}

/// Voltages as f64 little-endian, 8 bytes each.
pub fn write_volts_file(path: &str, volts: &[f64]) -> anyhow::Result<()> {
    let mut out = Vec::with_capacity(volts.len() * 8);
    for v in volts {
        out.extend_from_slice(&v.to_le_bytes());
    }
    std::fs::write(path, out).with_context(|| format!("write volts bin: {path}"))?;
    Ok(())
}
