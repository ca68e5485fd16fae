//! Code value to luminance command

use super::format_value;
use crate::DecodeArgs;
use anyhow::Result;
use gsdf_transfer::dicom_gsdf;

pub fn run(args: DecodeArgs, verbose: u8) -> Result<()> {
    let luminance = dicom_gsdf::decode(args.values.as_slice(), args.int);

    if verbose > 0 {
        println!("{:>22}  {:>22}", if args.int { "code" } else { "normalized" }, "luminance");
    }
    for (j, l) in args.values.iter().zip(&luminance) {
        println!("{:>22}  {:>22}", format_value(*j, args.int), format_value(*l, false));
    }
    Ok(())
}
