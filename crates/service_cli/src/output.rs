//! Rendering of numeric results.

use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// Rows of numbers under named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<f64>>,
    precision: usize,
}

impl Table {
    /// Empty table; `precision` is the number of decimals in table output.
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>, precision: usize) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            precision,
        }
    }

    /// Appends a row.
    pub fn push_row(&mut self, row: Vec<f64>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Writes the table in `format`.
    pub fn write<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<()> {
        match format {
            OutputFormat::Table => self.write_boxed(out),
            OutputFormat::Csv => self.write_csv(out),
            OutputFormat::Json => write_json(out, &self.records()),
        }
    }

    fn cells(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|v| format!("{:.*}", self.precision, v))
                    .collect()
            })
            .collect()
    }

    fn write_boxed<W: Write>(&self, out: &mut W) -> Result<()> {
        let cells = self.cells();
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                cells
                    .iter()
                    .map(|row| row[i].len())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let rule = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}", left, segments.join(mid), right)
        };

        writeln!(out, "{}", rule("┌", "┬", "┐"))?;
        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!(" {:<w$} ", h, w = *w))
            .collect();
        writeln!(out, "│{}│", header.join("│"))?;
        writeln!(out, "{}", rule("├", "┼", "┤"))?;
        for row in &cells {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!(" {:>w$} ", c, w = *w))
                .collect();
            writeln!(out, "│{}│", line.join("│"))?;
        }
        writeln!(out, "{}", rule("└", "┴", "┘"))?;
        Ok(())
    }

    fn write_csv<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(|v| v.to_string()))?;
        }
        writer.flush()?;
        Ok(())
    }

    fn records(&self) -> Vec<serde_json::Map<String, serde_json::Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .cloned()
                    .zip(row.iter().map(|v| serde_json::Value::from(*v)))
                    .collect()
            })
            .collect()
    }
}

/// Pretty-prints `value` as JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
