//! Pay table and payline patterns

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PaylineError, PaylineResult};
use crate::wilds::SymbolId;

/// A payline definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaylinePattern {
    /// Payline index (0-based)
    pub index: u8,
    /// Row positions for each reel (e.g., [1, 0, 0, 0, 1] for a "V" shape)
    pub positions: Vec<u8>,
}

impl PaylinePattern {
    /// Create a straight line (same row across all reels)
    pub fn straight(index: u8, row: u8, reel_count: u8) -> Self {
        Self {
            index,
            positions: vec![row; reel_count as usize],
        }
    }

    pub fn new(index: u8, positions: Vec<u8>) -> Self {
        Self { index, positions }
    }

    /// Winline identifier reported in results (1-based)
    pub fn winline_id(&self) -> u32 {
        self.index as u32 + 1
    }

    /// Read the symbols under this pattern from `matrix[reel][row]`.
    ///
    /// Returns `None` if the matrix has fewer reels than the pattern or a
    /// reel is too short for the requested row.
    pub fn read(&self, matrix: &[Vec<SymbolId>]) -> Option<Vec<SymbolId>> {
        if matrix.len() < self.positions.len() {
            return None;
        }
        self.positions
            .iter()
            .enumerate()
            .map(|(reel, &row)| matrix[reel].get(row as usize).copied())
            .collect()
    }
}

/// Standard payline patterns for a 5×3 grid
pub fn standard_paylines() -> Vec<PaylinePattern> {
    vec![
        // Straight lines
        PaylinePattern::straight(0, 1, 5), // Middle
        PaylinePattern::straight(1, 0, 5), // Top
        PaylinePattern::straight(2, 2, 5), // Bottom
        // V shapes
        PaylinePattern::new(3, vec![0, 1, 2, 1, 0]),
        PaylinePattern::new(4, vec![2, 1, 0, 1, 2]),
        // Zigzag
        PaylinePattern::new(5, vec![0, 0, 1, 2, 2]),
        PaylinePattern::new(6, vec![2, 2, 1, 0, 0]),
        PaylinePattern::new(7, vec![1, 0, 0, 0, 1]),
        PaylinePattern::new(8, vec![1, 2, 2, 2, 1]),
        // W shapes
        PaylinePattern::new(9, vec![0, 1, 0, 1, 0]),
        PaylinePattern::new(10, vec![2, 1, 2, 1, 2]),
        // Diagonal
        PaylinePattern::new(11, vec![0, 1, 1, 1, 0]),
        PaylinePattern::new(12, vec![2, 1, 1, 1, 2]),
        // Steps
        PaylinePattern::new(13, vec![1, 1, 0, 1, 1]),
        PaylinePattern::new(14, vec![1, 1, 2, 1, 1]),
        // Complex
        PaylinePattern::new(15, vec![0, 2, 0, 2, 0]),
        PaylinePattern::new(16, vec![2, 0, 2, 0, 2]),
        PaylinePattern::new(17, vec![1, 0, 1, 0, 1]),
        PaylinePattern::new(18, vec![1, 2, 1, 2, 1]),
        PaylinePattern::new(19, vec![0, 0, 2, 0, 0]),
    ]
}

/// Sparse pay table: symbol → run length → multiplier.
///
/// A missing (symbol, run length) pair pays nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayTable(BTreeMap<SymbolId, BTreeMap<usize, f64>>);

impl PayTable {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert
    pub fn with_pay(mut self, symbol: SymbolId, run_length: usize, multiplier: f64) -> Self {
        self.set(symbol, run_length, multiplier);
        self
    }

    pub fn set(&mut self, symbol: SymbolId, run_length: usize, multiplier: f64) {
        self.0.entry(symbol).or_default().insert(run_length, multiplier);
    }

    /// Multiplier for `run_length` of `symbol`, 0.0 when the table has no entry
    pub fn payout(&self, symbol: SymbolId, run_length: usize) -> f64 {
        match self.0.get(&symbol).and_then(|pays| pays.get(&run_length)) {
            Some(&multiplier) => multiplier,
            None => {
                log::trace!("No pay for symbol {} × {}", symbol, run_length);
                0.0
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|pays| pays.is_empty())
    }

    /// Check run lengths and multipliers
    pub fn validate(&self) -> PaylineResult<()> {
        for (symbol, pays) in &self.0 {
            for (&run_length, &multiplier) in pays {
                if run_length == 0 {
                    return Err(PaylineError::Config(format!(
                        "Symbol {}: run length must be at least 1",
                        symbol
                    )));
                }
                if !multiplier.is_finite() || multiplier.is_sign_negative() {
                    return Err(PaylineError::Config(format!(
                        "Symbol {} × {}: invalid multiplier {}",
                        symbol, run_length, multiplier
                    )));
                }
            }
        }
        Ok(())
    }
}
