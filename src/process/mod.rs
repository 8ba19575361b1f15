// src/process/mod.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::io::{Read, Write};
use tracing::debug;

use crate::swatch::Swatch;

/// Render a normalized component as a float literal: shortest round-trip
/// decimal, with `.0` appended when the shortest form has no decimal point.
/// `1.0` stays a float literal, never `1`.
pub fn float_literal(value: f64) -> String {
    let s = value.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

/// One generated constant declaration, without trailing newline.
pub fn macro_line(swatch: &Swatch) -> String {
    format!(
        "impl_color!({}, {}, {}, {});",
        swatch.name,
        float_literal(swatch.r),
        float_literal(swatch.g),
        float_literal(swatch.b),
    )
}

/// Stream a two-column swatch table (name, `#RRGGBB`) from `input` to `out`,
/// one `impl_color!` line per row, preserving input order.
///
/// Every row is data; there is no header handling. The first malformed row
/// aborts the run with the row identified, and lines already written to `out`
/// stay written.
///
/// Returns the number of rows emitted.
pub fn transcode<R: Read, W: Write>(input: R, out: &mut W) -> Result<u64> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // field-count diagnostics belong to Swatch::from_fields
        .from_reader(input);

    let mut rows = 0u64;
    for (idx, result) in rdr.records().enumerate() {
        let record =
            result.with_context(|| format!("CSV parse error at record {}", idx + 1))?;
        let fields: Vec<&str> = record.iter().collect();
        let swatch = Swatch::from_fields(idx as u64 + 1, &fields)?;

        writeln!(out, "{}", macro_line(&swatch)).context("writing output line")?;
        rows += 1;
        debug!(row = idx + 1, name = %swatch.name, "emitted");
    }

    Ok(rows)
}
