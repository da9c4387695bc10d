//! Display ticket assembly

use serde::{Deserialize, Serialize};

use crate::wilds::SymbolId;
use crate::winline::WinlineEntry;

/// Display/transport record for one spin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameTicket {
    /// Total win of the spin
    pub win: f64,
    /// e.g. "normal", "bonus", "free_spin"
    pub trigger_type: String,
    /// Matrix flattened reel by reel
    pub reels: Vec<SymbolId>,
    pub spin_wins: Vec<f64>,
}

/// Build a ticket from the spin matrix and the accumulated line wins.
///
/// The ticket does not carry per-line entries; `_winlines` is accepted so
/// callers can pass their accumulator parts unchanged.
pub fn extract_game_detail(
    total_win: f64,
    trigger_type: &str,
    matrix: &[Vec<SymbolId>],
    _winlines: &[WinlineEntry],
    spin_wins: &[f64],
) -> GameTicket {
    GameTicket {
        win: total_win,
        trigger_type: trigger_type.to_string(),
        reels: matrix.iter().flatten().copied().collect(),
        spin_wins: spin_wins.to_vec(),
    }
}
