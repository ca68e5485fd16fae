//! Display target command

use super::format_value;
use crate::TargetArgs;
use anyhow::{Context, Result};
use gsdf_transfer::target::DisplayRange;

pub fn run(args: TargetArgs, verbose: u8) -> Result<()> {
    let display = DisplayRange::new(args.min, args.max).context("Invalid display range")?;
    let target = display
        .target(args.bits)
        .with_context(|| format!("Cannot build {}-bit target", args.bits))?;

    if verbose > 0 {
        let (j_min, j_max) = display.jnd_span();
        println!(
            "Display {}..{} cd/m2, JND {:.3}..{:.3}, {:.4} JND per step",
            args.min,
            args.max,
            j_min,
            j_max,
            target.jnds_per_step()
        );
    }

    let contrast = if args.contrast {
        target.contrast_response()
    } else {
        Vec::new()
    };

    for (i, level) in target.levels.iter().enumerate() {
        let mut line = format!(
            "{:>5}  {:>12.6}  {:>22}",
            level.ddl,
            level.jnd,
            format_value(level.luminance, false)
        );
        if args.contrast {
            // Contrast of the step leading into this level
            match i.checked_sub(1).and_then(|k| contrast.get(k)) {
                Some(c) => line.push_str(&format!("  {:>10.6}", c)),
                None => line.push_str(&format!("  {:>10}", "-")),
            }
        }
        println!("{}", line);
    }
    Ok(())
}
