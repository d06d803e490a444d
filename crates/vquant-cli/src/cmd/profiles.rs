// crates/vquant-cli/src/cmd/profiles.rs

use clap::Args;
use vquant_core::profile::defaults::BUILTIN;
use vquant_core::profile::format::profile_id_hex;
use vquant_core::Quantizer;

#[derive(Args, Debug)]
pub struct ProfilesArgs {
    /// Also print the stable profile id
    #[arg(long)]
    pub ids: bool,
}

pub fn run(args: ProfilesArgs) -> anyhow::Result<()> {
    for (name, p) in BUILTIN {
        let q = Quantizer::new(*p)?;
        let mut line = format!(
            "{name:<12} {:<9} {:>6}..={:<5} V  max_code={}  scale={:.4}/V  lsb={:.3e} V",
            p.shape(),
            p.min_voltage(),
            p.full_scale_voltage(),
            p.max_code(),
            q.scale(),
            q.lsb(),
        );
        if args.ids {
            line.push_str("  id=");
            line.push_str(&profile_id_hex(p));
        }
        println!("{line}");
    }
    Ok(())
}
