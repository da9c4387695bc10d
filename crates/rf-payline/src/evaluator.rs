//! Payline win evaluation
//!
//! Composes the pieces: wild mask → run match → pay table lookup → result
//! code → winline entry. Every call is a pure function of its inputs; the
//! pay table and wild set are borrowed immutably.

use serde::{Deserialize, Serialize};

use crate::code::{ResultCode, WinKind};
use crate::error::{PaylineError, PaylineResult};
use crate::matcher::match_run;
use crate::paytable::PayTable;
use crate::wilds::{SymbolId, WildMask, WildSet, detect_wilds, has_wild};
use crate::winline::{SpinAccumulator, WinlineEntry, build_winline_entry};

/// Evaluation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Kind written into result codes
    pub kind: WinKind,
    /// Also price a run of two or more leading wilds as a wild win and keep
    /// it when it pays more than the substituted run
    pub compare_leading_wilds: bool,
    /// Stake per line; win amount = multiplier × line bet
    pub line_bet: f64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            kind: WinKind::Base,
            compare_leading_wilds: true,
            line_bet: 1.0,
        }
    }
}

impl EvaluatorConfig {
    /// Trigger/free-game context (`TF` codes)
    pub fn trigger() -> Self {
        Self {
            kind: WinKind::Trigger,
            ..Self::default()
        }
    }

    pub fn with_line_bet(mut self, line_bet: f64) -> Self {
        self.line_bet = line_bet;
        self
    }

    pub fn validate(&self) -> PaylineResult<()> {
        if !self.line_bet.is_finite() || self.line_bet <= 0.0 {
            return Err(PaylineError::Config(format!(
                "Line bet must be positive, got {}",
                self.line_bet
            )));
        }
        Ok(())
    }
}

/// Result of evaluating one payline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineEvaluation {
    pub line_id: u32,
    /// Amount won on this line (0 for no win)
    pub win_amount: f64,
    /// `None` only for an empty line
    pub code: Option<ResultCode>,
    /// This line's entry (empty for an empty line)
    pub winlines: Vec<WinlineEntry>,
    /// This line's amount
    pub spin_wins: Vec<f64>,
}

impl LineEvaluation {
    fn empty(line_id: u32) -> Self {
        Self {
            line_id,
            win_amount: 0.0,
            code: None,
            winlines: Vec::new(),
            spin_wins: vec![0.0],
        }
    }

    pub fn is_win(&self) -> bool {
        self.win_amount > 0.0
    }

    /// Code string, empty when no symbol was established
    pub fn code_string(&self) -> String {
        self.code.map(|c| c.to_string()).unwrap_or_default()
    }

    /// Append this line's entries to `acc`
    pub fn fold_into(self, acc: SpinAccumulator) -> SpinAccumulator {
        self.winlines.into_iter().fold(acc, SpinAccumulator::push)
    }
}

/// Build the line result for an already resolved win: the result code, its
/// winline entry and the one-element `spin_wins`.
pub fn resolve_and_format(
    winline_id: u32,
    symbol: SymbolId,
    run_length: usize,
    wild: bool,
    multiplier: f64,
    win_amount: f64,
    kind: WinKind,
) -> LineEvaluation {
    let code = ResultCode::new(kind, run_length, wild, symbol, multiplier);
    let entry = build_winline_entry(winline_id, &code, win_amount);
    LineEvaluation {
        line_id: winline_id,
        win_amount,
        code: Some(code),
        winlines: vec![entry],
        spin_wins: vec![win_amount],
    }
}

/// Evaluate one payline with the default settings (base-game codes, line bet 1).
///
/// `wilds` must be the mask of `line` (see [`detect_wilds`]); a mask of a
/// different length is rejected.
pub fn check_win(
    line: &[SymbolId],
    line_id: u32,
    wilds: &WildMask,
    wild_ids: &WildSet,
    pay_table: &PayTable,
) -> PaylineResult<LineEvaluation> {
    check_win_with(line, line_id, wilds, wild_ids, pay_table, &EvaluatorConfig::default())
}

/// [`check_win`] with explicit settings
pub fn check_win_with(
    line: &[SymbolId],
    line_id: u32,
    wilds: &WildMask,
    wild_ids: &WildSet,
    pay_table: &PayTable,
    config: &EvaluatorConfig,
) -> PaylineResult<LineEvaluation> {
    if wilds.len() != line.len() {
        return Err(PaylineError::MaskLengthMismatch {
            line: line.len(),
            mask: wilds.len(),
        });
    }
    Ok(evaluate_masked(line, line_id, wilds, wild_ids, pay_table, config))
}

fn evaluate_masked(
    line: &[SymbolId],
    line_id: u32,
    wilds: &WildMask,
    wild_ids: &WildSet,
    pay_table: &PayTable,
    config: &EvaluatorConfig,
) -> LineEvaluation {
    let run = match_run(line, wilds);
    let Some(symbol) = run.symbol else {
        return LineEvaluation::empty(line_id);
    };

    let mut best = (
        symbol,
        run.length,
        has_wild(&line[..run.length], wild_ids),
        pay_table.payout(symbol, run.length),
    );

    if config.compare_leading_wilds && run.leading_wilds >= 2 && !run.is_all_wild() {
        let wild_symbol = line[0];
        let wild_multiplier = pay_table.payout(wild_symbol, run.leading_wilds);
        if wild_multiplier > best.3 {
            best = (wild_symbol, run.leading_wilds, true, wild_multiplier);
        }
    }

    let (symbol, run_length, wild, multiplier) = best;
    let result = resolve_and_format(
        line_id,
        symbol,
        run_length,
        wild,
        multiplier,
        multiplier * config.line_bet,
        config.kind,
    );
    log::debug!("Line {}: {} -> {}", line_id, result.code_string(), result.win_amount);
    result
}

/// Pay table, wild set and settings bundled for repeated evaluation
#[derive(Debug, Clone)]
pub struct Evaluator {
    pay_table: PayTable,
    wild_ids: WildSet,
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new(pay_table: PayTable, wild_ids: WildSet) -> Self {
        Self {
            pay_table,
            wild_ids,
            config: EvaluatorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EvaluatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn pay_table(&self) -> &PayTable {
        &self.pay_table
    }

    pub fn wild_ids(&self) -> &WildSet {
        &self.wild_ids
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluate one payline
    pub fn evaluate_line(&self, line_id: u32, line: &[SymbolId]) -> LineEvaluation {
        let mask = detect_wilds(line, &self.wild_ids);
        evaluate_masked(line, line_id, &mask, &self.wild_ids, &self.pay_table, &self.config)
    }
}
