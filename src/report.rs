// File: src/report.rs
use crate::core::types::{FrequencyCount, Label, SummaryRow, Value};
use crossterm::queue;
use crossterm::style::{Print, PrintStyledContent, Stylize};
use serde::Serialize;
use std::io::{self, Write};

/// A ranked value with its label, as shown in the top-N section.
#[derive(Debug, Clone, Serialize)]
pub struct TopEntry {
    pub value: Value,
    pub label: String,
    pub count: usize,
}

impl TopEntry {
    pub fn new(fc: FrequencyCount, label: &Label) -> Self {
        Self {
            value: fc.value,
            label: label.to_string(),
            count: fc.count,
        }
    }
}

/// Everything the demo prints, in serializable form.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub sample_len: usize,
    pub top: Vec<TopEntry>,
    pub summary: Vec<SummaryRow>,
}

/// Writes reports as text lines, optionally colored through crossterm.
pub struct ReportWriter<W: Write> {
    out: W,
    styled: bool,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, styled: bool) -> Self {
        Self { out, styled }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn heading(&mut self, text: &str) -> io::Result<()> {
        if self.styled {
            queue!(self.out, PrintStyledContent(text.bold().cyan()), Print("\n"))
        } else {
            writeln!(self.out, "{}", text)
        }
    }

    /// First `limit` labels of a mapped sequence, comma separated.
    pub fn write_preview(&mut self, labels: &[Label], limit: usize) -> io::Result<()> {
        self.heading(&format!("Mapped {} values", labels.len()))?;
        let shown: Vec<&str> = labels.iter().take(limit).map(|l| l.as_ref()).collect();
        let ellipsis = if labels.len() > limit { ",..." } else { "" };
        writeln!(self.out, "{}{}", shown.join(","), ellipsis)
    }

    pub fn write_top(&mut self, top: &[TopEntry]) -> io::Result<()> {
        self.heading(&format!("Top {} by occurrence", top.len()))?;
        for (rank, entry) in top.iter().enumerate() {
            writeln!(
                self.out,
                "{:>2}. {:<6} ({}) x {}",
                rank + 1,
                entry.label,
                entry.value,
                entry.count
            )?;
        }
        Ok(())
    }

    /// One `value - label - count` line per row, label column padded to the widest label.
    pub fn write_summary(&mut self, rows: &[SummaryRow]) -> io::Result<()> {
        self.heading("Summary")?;
        let width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
        for r in rows {
            let line = format!("{:>2} - {:<width$} - {}", r.value, r.label, r.count, width = width);
            if self.styled {
                queue!(self.out, Print(line), Print("\n"))?;
            } else {
                writeln!(self.out, "{}", line)?;
            }
        }
        Ok(())
    }

    pub fn write_report(&mut self, report: &Report) -> io::Result<()> {
        self.write_top(&report.top)?;
        writeln!(self.out)?;
        self.write_summary(&report.summary)?;
        self.out.flush()
    }
}

/// Pretty-printed JSON of the whole report.
pub fn write_json<W: Write>(out: W, report: &Report) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(out, report)
}
