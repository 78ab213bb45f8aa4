//! Provides `Reporter`, the sink for everything the user sees: prompts,
//! menus, evaluation traces, results, and warnings.
//!
//! The `Reporter` writes to any `io::Write`, so tests can collect its output
//! in a `Vec<u8>`. It's separate from logging, which goes to stderr through
//! the `log` facade.
use std::fmt::Display;
use std::io::{self, Write};

use crate::calculate::{Evaluation, StepRecord};
use crate::style::StyleSheet;

/// How much of an evaluation to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail {
    /// Final answers and warnings only
    Quiet,
    /// Every step of the alternating sum
    Steps,
    /// Every step, then a subtotal for each order
    ByOrder,
}

/// Writes user-facing text to `W`, styled by a `StyleSheet`.
pub struct Reporter<W: Write> {
    out: W,
    style: StyleSheet,
    detail: Detail,
}

impl<W: Write> Reporter<W> {
    /// A reporter writing to `out`
    pub fn new(out: W, style: StyleSheet, detail: Detail) -> Self {
        Reporter { out, style, detail }
    }

    /// Uncolored, showing every step
    pub fn plain(out: W) -> Self {
        Reporter::new(out, StyleSheet::PLAIN, Detail::Steps)
    }

    /// Gives back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes `text` with no line terminator and flushes, so the question is
    /// visible before we block on input.
    pub fn prompt(&mut self, text: impl Display) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    /// One line of ordinary output
    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// A line that `Detail::Quiet` suppresses
    pub fn note(&mut self, text: impl Display) -> io::Result<()> {
        if self.detail == Detail::Quiet {
            return Ok(());
        }
        self.line(text)
    }

    /// A heading, preceded by a blank line
    pub fn title(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", self.style.title(text))
    }

    /// Something went wrong, but we're carrying on
    pub fn warning(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", self.style.warning(&text.to_string()))
    }

    /// A titled, numbered menu followed by a prompt
    pub fn menu(&mut self, title: &str, entries: &[&str], prompt: &str) -> io::Result<()> {
        self.title(title)?;
        for (number, entry) in (1..).zip(entries) {
            writeln!(self.out, "{} {entry}", self.style.item(&format!("{number}.")))?;
        }
        self.prompt(prompt)
    }

    /// The header printed before the first step
    pub fn evaluation_header<S: AsRef<str>>(&mut self, names: &[S]) -> io::Result<()> {
        let names: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
        self.note("Solving using Principle of Inclusion-Exclusion...")?;
        self.note(format!("Sets: {}", names.join(", ")))
    }

    /// One step of the alternating sum
    pub fn step(&mut self, step: &StepRecord) -> io::Result<()> {
        self.note(step)
    }

    /// The per-order subtotals (for `Detail::ByOrder`) and the final answer,
    /// or the warning if the answer is impossible.
    pub fn evaluation(&mut self, result: &Evaluation) -> io::Result<()> {
        if self.detail == Detail::ByOrder {
            let mut running = 0_i128;
            for subtotal in result.order_totals() {
                running += subtotal.sum;
                let (verb, sign) =
                    if subtotal.order % 2 == 1 { ("Add", '+') } else { ("Subtract", '-') };
                let what = match subtotal.order {
                    1 => "sizes of individual sets".to_string(),
                    2 => "pairwise intersections".to_string(),
                    n => format!("{n}-way intersections"),
                };
                let magnitude = subtotal.sum.unsigned_abs();
                let order = subtotal.order;
                let reached = format!("{sign}{magnitude} -> {running}");
                self.line(format!("Step {order}: {verb} {what} = {reached}"))?;
            }
        }
        if result.is_inconsistent() {
            self.warning("⚠ Invalid result! Union size cannot be negative.")
        } else {
            self.line(format!("Final Answer: Total elements in union = {}", result.total))
        }
    }
}
