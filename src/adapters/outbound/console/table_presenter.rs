use crate::adapters::outbound::filesystem::CSV_HEADER;
use crate::ports::outbound::ReportPresenter;
use crate::shared::Result;
use crate::size_reporting::domain::PackageInfo;
use std::io::{self, Write};

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

/// Alignment of each column; byte counts line up on the right
const COLUMN_ALIGN: [Align; 3] = [Align::Left, Align::Right, Align::Left];

/// ConsoleTablePresenter adapter for printing the size report as a table
///
/// Renders a bordered ASCII table with the same header and rows as the CSV
/// report, in the same order.
pub struct ConsoleTablePresenter;

impl ConsoleTablePresenter {
    pub fn new() -> Self {
        Self
    }

    /// Renders the table as a string
    pub fn render(packages: &[PackageInfo]) -> String {
        let rows: Vec<[String; 3]> = packages
            .iter()
            .map(|p| {
                [
                    p.name().to_string(),
                    p.raw_size_bytes().to_string(),
                    p.pretty_size().to_string(),
                ]
            })
            .collect();

        let mut widths = CSV_HEADER.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let border = Self::render_border(&widths);
        let mut output = String::new();
        output.push_str(&border);
        output.push_str(&Self::render_row(&CSV_HEADER, &widths, &[Align::Left; 3]));
        output.push_str(&border);
        for row in &rows {
            output.push_str(&Self::render_row(row, &widths, &COLUMN_ALIGN));
        }
        output.push_str(&border);
        output
    }

    fn render_border(widths: &[usize; 3]) -> String {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    }

    fn render_row<S: AsRef<str>>(cells: &[S; 3], widths: &[usize; 3], align: &[Align; 3]) -> String {
        let mut line = String::from("|");
        for ((cell, width), align) in cells.iter().zip(widths).zip(align) {
            let cell = cell.as_ref();
            let padded = match align {
                Align::Left => format!(" {:<width$} ", cell, width = width),
                Align::Right => format!(" {:>width$} ", cell, width = width),
            };
            line.push_str(&padded);
            line.push('|');
        }
        line.push('\n');
        line
    }
}

impl Default for ConsoleTablePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPresenter for ConsoleTablePresenter {
    fn present(&self, packages: &[PackageInfo]) -> Result<()> {
        io::stdout()
            .write_all(Self::render(packages).as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
