//! GSDF table command

use super::format_value;
use crate::TableArgs;
use anyhow::{bail, Result};
use gsdf_transfer::table::GsdfTable;

pub fn run(args: TableArgs, verbose: u8) -> Result<()> {
    if args.start < 1 || args.end > 1023 || args.start > args.end {
        bail!("JND range must satisfy 1 <= start <= end <= 1023, got {}..={}", args.start, args.end);
    }
    if args.step == 0 {
        bail!("step must be at least 1");
    }

    let table = GsdfTable::new();
    if verbose > 0 {
        println!("{:>5}  {:>22}", "jnd", "luminance");
    }
    for (j, l) in table
        .iter()
        .filter(|(j, _)| (args.start..=args.end).contains(j))
        .step_by(args.step as usize)
    {
        println!("{:>5}  {:>22}", j, format_value(l, false));
    }
    Ok(())
}
