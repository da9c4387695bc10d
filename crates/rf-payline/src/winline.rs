//! Winline entries and per-spin accumulators

use serde::{Deserialize, Serialize};

use crate::code::ResultCode;
use crate::error::PaylineResult;
use crate::wilds::SymbolId;

/// One evaluated payline as reported to the display layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinlineEntry {
    pub winline_id: u32,
    /// Number of matching symbols
    pub run_length: usize,
    /// Winning symbol
    pub symbol: SymbolId,
    pub win_amount: f64,
    /// Result code the entry was built from
    pub code: String,
}

/// Assemble an entry from a winline ID, its result code and the amount won
pub fn build_winline_entry(winline_id: u32, code: &ResultCode, win_amount: f64) -> WinlineEntry {
    WinlineEntry {
        winline_id,
        run_length: code.run_length,
        symbol: code.symbol,
        win_amount,
        code: code.to_string(),
    }
}

/// Decode `code` and return fresh one-element `(winlines, spin_wins)` sequences.
///
/// Malformed codes are rejected as a whole; nothing is returned for them.
pub fn extract_winline_spinwin_data(
    winline_id: u32,
    code: &str,
    win_amount: f64,
) -> PaylineResult<(Vec<WinlineEntry>, Vec<f64>)> {
    let decoded = ResultCode::parse(code).inspect_err(|e| log::warn!("Rejected winline code: {}", e))?;
    let entry = build_winline_entry(winline_id, &decoded, win_amount);
    Ok((vec![entry], vec![win_amount]))
}

/// Winlines and spin wins collected over the paylines of a spin.
///
/// Appending consumes the accumulator and hands it back, so the owner is
/// always explicit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpinAccumulator {
    winlines: Vec<WinlineEntry>,
    spin_wins: Vec<f64>,
}

impl SpinAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry and its amount
    pub fn push(mut self, entry: WinlineEntry) -> Self {
        self.spin_wins.push(entry.win_amount);
        self.winlines.push(entry);
        self
    }

    /// Decode `code` and append it
    pub fn push_code(self, winline_id: u32, code: &str, win_amount: f64) -> PaylineResult<Self> {
        let (winlines, _) = extract_winline_spinwin_data(winline_id, code, win_amount)?;
        Ok(winlines.into_iter().fold(self, Self::push))
    }

    /// Append everything from `other`, keeping order
    pub fn merge(mut self, other: SpinAccumulator) -> Self {
        self.winlines.extend(other.winlines);
        self.spin_wins.extend(other.spin_wins);
        self
    }

    pub fn winlines(&self) -> &[WinlineEntry] {
        &self.winlines
    }

    pub fn spin_wins(&self) -> &[f64] {
        &self.spin_wins
    }

    /// Sum of all spin wins
    pub fn total(&self) -> f64 {
        self.spin_wins.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.winlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.winlines.is_empty()
    }

    pub fn into_parts(self) -> (Vec<WinlineEntry>, Vec<f64>) {
        (self.winlines, self.spin_wins)
    }
}
