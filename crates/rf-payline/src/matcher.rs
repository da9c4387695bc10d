//! Left-anchored run matching with wild substitution

use serde::{Deserialize, Serialize};

use crate::wilds::{SymbolId, WildMask};

/// Longest run found on a payline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunMatch {
    /// Winning (base) symbol, `None` only for an empty line
    pub symbol: Option<SymbolId>,
    /// Matching positions from the left edge
    pub length: usize,
    /// Consecutive wilds at the left edge
    pub leading_wilds: usize,
}

impl RunMatch {
    /// No symbol established
    pub const NONE: RunMatch = RunMatch {
        symbol: None,
        length: 0,
        leading_wilds: 0,
    };

    /// The run is made of wilds only
    pub fn is_all_wild(&self) -> bool {
        self.length > 0 && self.leading_wilds >= self.length
    }
}

/// Find the longest left-anchored run on `line`.
///
/// The base symbol is the first non-wild symbol. A line made only of wilds
/// pays as its first wild (`line[0]`) for the full line length. Positions
/// beyond the mask are treated as non-wild.
pub fn match_run(line: &[SymbolId], mask: &WildMask) -> RunMatch {
    let Some(&first) = line.first() else {
        return RunMatch::NONE;
    };

    let leading_wilds = line
        .iter()
        .enumerate()
        .take_while(|&(i, _)| mask.is_wild(i))
        .count();

    let base = line.get(leading_wilds).copied().unwrap_or(first);

    let length = line
        .iter()
        .enumerate()
        .take_while(|&(i, &s)| s == base || mask.is_wild(i))
        .count();

    RunMatch {
        symbol: Some(base),
        length,
        leading_wilds,
    }
}
