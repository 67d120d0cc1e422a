//! Frame spec serialization
//!
//! Renders a canonical frame list as the shortest spec string the parser
//! accepts: each maximal progression becomes `N`, `A-B` or `A-BxS`, joined
//! with commas.

use std::fmt::{self, Write};

use crate::progression;

/// Render a sorted frame list as a spec string
pub fn serialize(frames: &[i64]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_spec(&mut out, frames);
    out
}

/// Write the spec for `frames` into any formatter
pub fn write_spec<W: Write>(out: &mut W, frames: &[i64]) -> fmt::Result {
    for (i, run) in progression::partition(frames).iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        write_run(out, run)?;
    }
    Ok(())
}

fn write_run<W: Write>(out: &mut W, run: &[i64]) -> fmt::Result {
    match run {
        [] => Ok(()),
        [only] => write!(out, "{}", only),
        [first, .., last] => match progression::step(run) {
            Some(1) => write!(out, "{}-{}", first, last),
            Some(gap) => write!(out, "{}-{}x{}", first, last, gap),
            // Runs from `partition` always have a representable gap
            None => {
                for (i, frame) in run.iter().enumerate() {
                    if i > 0 {
                        out.write_char(',')?;
                    }
                    write!(out, "{}", frame)?;
                }
                Ok(())
            },
        },
    }
}
