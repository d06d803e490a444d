// crates/vquant-cli/src/cmd/convert.rs

use anyhow::Context;
use clap::{Args, ValueEnum};
use tracing::{info, warn};
use vquant_core::signal::register::register_hex;

use crate::cmd::ProfileSel;
use crate::io::jsonl::{self, AdcRecord, DacRecord};
use crate::io::{bin, values};

#[derive(Args, Debug)]
pub struct ForwardArgs {
    #[command(flatten)]
    pub sel: ProfileSel,

    /// Input voltage
    #[arg(long, allow_hyphen_values = true)]
    pub volts: f64,
}

#[derive(Args, Debug)]
pub struct ReverseArgs {
    #[command(flatten)]
    pub sel: ProfileSel,

    /// Input code
    #[arg(long, allow_hyphen_values = true)]
    pub code: i32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    /// Voltages in, codes out
    Adc,
    /// Codes in, voltages out
    Dac,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutFmt {
    /// JSON lines
    Jsonl,
    /// adc: register words LE (ceil(bits/8) bytes); dac: f64 LE
    Bin,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub sel: ProfileSel,

    #[arg(long, value_enum, default_value_t = Direction::Adc)]
    pub direction: Direction,

    /// Input text file, one value per line
    #[arg(long = "in")]
    pub input: String,

    /// Output path (required for --fmt bin; jsonl defaults to stdout)
    #[arg(long)]
    pub out: Option<String>,

    #[arg(long, value_enum, default_value_t = OutFmt::Jsonl)]
    pub fmt: OutFmt,
}

pub fn run_forward(a: ForwardArgs) -> anyhow::Result<()> {
    let q = a.sel.quantizer()?;
    if q.saturates(a.volts) {
        warn!(volts = a.volts, "input outside profile range; saturating");
    }
    let code = q.forward(a.volts);
    let bits = q.profile().register_bits();
    println!("code = {code}");
    println!("reg  = {}", register_hex(q.forward_register(a.volts), bits));
    Ok(())
}

pub fn run_reverse(a: ReverseArgs) -> anyhow::Result<()> {
    let q = a.sel.quantizer()?;
    if !q.code_range().contains(&a.code) {
        warn!(code = a.code, "code outside profile range; extrapolating");
    }
    println!("volts = {:.6}", q.reverse(a.code));
    Ok(())
}

pub fn run_convert(a: ConvertArgs) -> anyhow::Result<()> {
    let q = a.sel.quantizer()?;
    let bits = q.profile().register_bits();

    match a.direction {
        Direction::Adc => {
            let vs = values::read_volts(&a.input)?;
            let saturated = vs.iter().filter(|&&v| q.saturates(v)).count();
            if saturated > 0 {
                warn!(saturated, "inputs outside profile range were saturated");
            }
            let recs: Vec<AdcRecord> = vs
                .iter()
                .map(|&v| {
                    let code = q.forward(v);
                    AdcRecord {
                        volts: v,
                        code,
                        reg_hex: register_hex(q.forward_register(v), bits),
                    }
                })
                .collect();

            match a.fmt {
                OutFmt::Jsonl => match a.out.as_deref() {
                    Some(path) => jsonl::write_adc_file(path, &recs)?,
                    None => jsonl::write_adc_stdout(&recs)?,
                },
                OutFmt::Bin => {
                    let path = a.out.as_deref().context("--out is required for --fmt bin")?;
                    let words: Vec<u32> = vs.iter().map(|&v| q.forward_register(v)).collect();
                    bin::write_registers_file(path, &words, bits)?;
                }
            }
            info!(count = recs.len(), "adc conversion ok");
        }
        Direction::Dac => {
            let codes: Vec<i32> = values::read_values(&a.input)?;
            let outside = codes.iter().filter(|&&c| !q.code_range().contains(&c)).count();
            if outside > 0 {
                warn!(outside, "codes outside profile range were extrapolated");
            }
            let recs: Vec<DacRecord> = codes
                .iter()
                .map(|&code| DacRecord {
                    code,
                    volts: q.reverse(code),
                })
                .collect();

            match a.fmt {
                OutFmt::Jsonl => match a.out.as_deref() {
                    Some(path) => jsonl::write_dac_file(path, &recs)?,
                    None => jsonl::write_dac_stdout(&recs)?,
                },
                OutFmt::Bin => {
                    let path = a.out.as_deref().context("--out is required for --fmt bin")?;
                    let volts: Vec<f64> = recs.iter().map(|r| r.volts).collect();
                    bin::write_volts_file(path, &volts)?;
                }
            }
            info!(count = recs.len(), "dac conversion ok");
        }
    }
    Ok(())
}
