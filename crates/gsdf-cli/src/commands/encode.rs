//! Luminance to code value command

use super::format_value;
use crate::EncodeArgs;
use anyhow::Result;
use gsdf_transfer::dicom_gsdf;

pub fn run(args: EncodeArgs, verbose: u8) -> Result<()> {
    let codes = dicom_gsdf::encode(args.values.as_slice(), args.int);

    if verbose > 0 {
        println!("{:>22}  {:>22}", "luminance", if args.int { "code" } else { "normalized" });
    }
    for (l, j) in args.values.iter().zip(&codes) {
        println!("{:>22}  {:>22}", format_value(*l, false), format_value(*j, args.int));
    }
    Ok(())
}
