// crates/vquant-cli/src/io/jsonl.rs

use std::fmt::Write as _;

use anyhow::Context;

/// One ADC conversion: {"v":V,"code":N,"reg":"0x...."}
pub struct AdcRecord {
    pub volts: f64,
    pub code: i32,
    pub reg_hex: String,
}

/// One DAC conversion: {"code":N,"v":V}
pub struct DacRecord {
    pub code: i32,
    pub volts: f64,
}

fn adc_lines(recs: &[AdcRecord]) -> String {
    let mut s = String::new();
    for r in recs {
        let _ = writeln!(
            s,
            "{{\"v\":{},\"code\":{},\"reg\":\"{}\"}}",
            r.volts, r.code, r.reg_hex
        );
    }
    s
}

fn dac_lines(recs: &[DacRecord]) -> String {
    let mut s = String::new();
    for r in recs {
        let _ = writeln!(s, "{{\"code\":{},\"v\":{}}}", r.code, r.volts);
    }
    s
}

pub fn write_adc_file(path: &str, recs: &[AdcRecord]) -> anyhow::Result<()> {
    std::fs::write(path, adc_lines(recs)).with_context(|| format!("write adc jsonl: {path}"))?;
    Ok(())
}

pub fn write_adc_stdout(recs: &[AdcRecord]) -> anyhow::Result<()> {
    print!("{}", adc_lines(recs));
    Ok(())
}

pub fn write_dac_file(path: &str, recs: &[DacRecord]) -> anyhow::Result<()> {
    std::fs::write(path, dac_lines(recs)).with_context(|| format!("write dac jsonl: {path}"))?;
    Ok(())
}

pub fn write_dac_stdout(recs: &[DacRecord]) -> anyhow::Result<()> {
    print!("{}", dac_lines(recs));
    Ok(())
}
