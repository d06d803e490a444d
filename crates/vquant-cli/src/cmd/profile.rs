// crates/vquant-cli/src/cmd/profile.rs

use clap::{Args, Subcommand, ValueEnum};
use tracing::info;
use vquant_core::profile::defaults::{self, builtin_name};
use vquant_core::profile::format::profile_id_hex;
use vquant_core::{Quantizer, RangeProfile, Shape};

use crate::io::profile_file;

#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub cmd: ProfileCmd,
}

#[derive(Subcommand)]
pub enum ProfileCmd {
    /// Write a built-in or custom profile to a .vqp file
    Save(SaveArgs),
    /// Print a .vqp file's fields and derived values
    Inspect(InspectArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    Unipolar,
    Bipolar,
}

impl From<ShapeArg> for Shape {
    fn from(s: ShapeArg) -> Self {
        match s {
            ShapeArg::Unipolar => Shape::Unipolar,
            ShapeArg::Bipolar => Shape::Bipolar,
        }
    }
}

#[derive(Args)]
pub struct SaveArgs {
    /// Built-in profile to save. Mutually exclusive with --shape.
    #[arg(long, conflicts_with_all = ["shape", "full_scale", "max_code", "bits"])]
    pub profile: Option<String>,

    /// Custom profile shape
    #[arg(long, value_enum, requires = "full_scale")]
    pub shape: Option<ShapeArg>,

    /// Custom full-scale voltage (V)
    #[arg(long, requires = "shape")]
    pub full_scale: Option<f64>,

    /// Custom max code magnitude
    #[arg(long, default_value_t = defaults::MAX_CODE_16)]
    pub max_code: i32,

    /// Custom signed code width (2..=32); max code becomes 2^(bits-1) - 1.
    /// Mutually exclusive with --max-code.
    #[arg(long, requires = "shape", conflicts_with = "max_code")]
    pub bits: Option<u32>,

    /// Output path (.vqp)
    #[arg(long)]
    pub out: String,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Profile path (.vqp)
    #[arg(long)]
    pub path: String,
}

pub fn run(args: ProfileArgs) -> anyhow::Result<()> {
    match args.cmd {
        ProfileCmd::Save(a) => cmd_save(a),
        ProfileCmd::Inspect(a) => cmd_inspect(a),
    }
}

fn cmd_save(a: SaveArgs) -> anyhow::Result<()> {
    let p = match (a.profile.as_deref(), a.shape, a.full_scale) {
        (Some(name), _, _) => defaults::lookup(name)?,
        (None, Some(shape), Some(fs)) => match a.bits {
            Some(bits) => RangeProfile::signed_bits(shape.into(), fs, bits)?,
            None => RangeProfile::new(shape.into(), fs, a.max_code)?,
        },
        _ => anyhow::bail!("give --profile NAME, or --shape and --full-scale"),
    };
    profile_file::save_vqp(&a.out, &p)?;
    info!(path = %a.out, id = %profile_id_hex(&p), "profile saved");
    Ok(())
}

fn cmd_inspect(a: InspectArgs) -> anyhow::Result<()> {
    let p = profile_file::load_vqp(&a.path)?;
    let q = Quantizer::new(p)?;

    println!("profile_path = {}", a.path);
    println!("profile_id   = {}", profile_id_hex(&p));
    println!("builtin      = {}", builtin_name(&p).unwrap_or("-"));
    println!("shape        = {}", p.shape());
    println!("full_scale_v = {}", p.full_scale_voltage());
    println!("min_v        = {}", p.min_voltage());
    println!("max_code     = {}", p.max_code());
    println!("code_range   = {}..={}", p.min_code(), p.max_code());
    println!("reg_bits     = {}", p.register_bits());
    println!("scale        = {} codes/V", q.scale());
    println!("lsb          = {:e} V", q.lsb());
    Ok(())
}
