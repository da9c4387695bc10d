//! Whole-spin evaluation over a set of payline patterns

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::evaluator::{Evaluator, LineEvaluation};
use crate::paytable::PaylinePattern;
use crate::ticket::{GameTicket, extract_game_detail};
use crate::wilds::SymbolId;
use crate::winline::SpinAccumulator;

/// Outcome of evaluating all paylines of one spin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Sum of all line wins
    pub total_win: f64,
    /// Winning lines only, in payline order
    pub accumulator: SpinAccumulator,
    /// Patterns that could not be read off the matrix
    pub skipped_lines: Vec<u32>,
}

impl SpinOutcome {
    pub fn is_win(&self) -> bool {
        self.total_win > 0.0
    }

    /// Build the display ticket for this spin
    pub fn into_ticket(self, trigger_type: &str, matrix: &[Vec<SymbolId>]) -> GameTicket {
        let (winlines, spin_wins) = self.accumulator.into_parts();
        extract_game_detail(self.total_win, trigger_type, matrix, &winlines, &spin_wins)
    }
}

impl Evaluator {
    /// Evaluate every pattern against `matrix[reel][row]`.
    ///
    /// Lines are evaluated in parallel and gathered in pattern order. Only
    /// winning lines are folded into the accumulator.
    pub fn evaluate_spin(&self, matrix: &[Vec<SymbolId>], patterns: &[PaylinePattern]) -> SpinOutcome {
        let results: Vec<Result<LineEvaluation, u32>> = patterns
            .par_iter()
            .map(|pattern| match pattern.read(matrix) {
                Some(line) => Ok(self.evaluate_line(pattern.winline_id(), &line)),
                None => Err(pattern.winline_id()),
            })
            .collect();

        let mut outcome = SpinOutcome::default();
        for result in results {
            match result {
                Ok(line) if line.is_win() => {
                    outcome.total_win += line.win_amount;
                    outcome.accumulator = line.fold_into(outcome.accumulator);
                }
                Ok(_) => {}
                Err(winline_id) => {
                    log::warn!("Payline {} does not fit the {}-reel matrix, skipped", winline_id, matrix.len());
                    outcome.skipped_lines.push(winline_id);
                }
            }
        }

        log::debug!(
            "Spin evaluated: {} winning lines, total {}",
            outcome.accumulator.len(),
            outcome.total_win
        );
        outcome
    }
}
