//! Output helpers shared across CLI commands.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use super::args::OutputArgs;
use crate::log;

/// Write `value` as JSON to `--output` or stdout.
pub fn write_json<T: Serialize + ?Sized>(value: &T, args: &OutputArgs, module: &str) -> Result<()> {
    let formatted = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("failed to create `{}`", output_path.display()))?;
        writeln!(file, "{formatted}")?;
        log!(module; "wrote output to {}", output_path.display());
    } else {
        println!("{formatted}");
    }

    Ok(())
}

/// `"1 link"`, `"3 links"`.
pub fn count(n: usize, noun: &str) -> String {
    match n {
        1 => format!("1 {noun}"),
        _ => format!("{n} {noun}s"),
    }
}
