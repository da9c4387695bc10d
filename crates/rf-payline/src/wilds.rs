//! Wild detection

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Symbol identifier as it appears on a payline. 0 is an ordinary symbol.
pub type SymbolId = u32;

/// Set of symbol IDs that substitute for any other symbol
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WildSet(BTreeSet<SymbolId>);

impl WildSet {
    /// Empty set (no wilds)
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Build from a list of IDs; duplicates collapse
    pub fn from_ids(ids: &[SymbolId]) -> Self {
        ids.iter().copied().collect()
    }

    pub fn contains(&self, symbol: SymbolId) -> bool {
        self.0.contains(&symbol)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<SymbolId> for WildSet {
    fn from_iter<I: IntoIterator<Item = SymbolId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Positional wild flags for one payline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WildMask(Vec<bool>);

impl WildMask {
    /// Wrap an explicit flag list (e.g. a mask received from a caller)
    pub fn from_flags(flags: Vec<bool>) -> Self {
        Self(flags)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Is position `index` wild? Out-of-range positions are not.
    pub fn is_wild(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// At least one wild on the line
    pub fn any(&self) -> bool {
        self.0.iter().any(|&w| w)
    }

    /// Consecutive wilds from the left edge
    pub fn leading(&self) -> usize {
        self.0.iter().take_while(|&&w| w).count()
    }

    /// Every position is wild (false for an empty mask)
    pub fn all(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&w| w)
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

/// Mark each position of `line` that holds a wild.
///
/// The mask always has the same length as the line.
pub fn detect_wilds(line: &[SymbolId], wild_ids: &WildSet) -> WildMask {
    WildMask(line.iter().map(|&s| wild_ids.contains(s)).collect())
}

/// True if any position of `line` holds a wild.
pub fn has_wild(line: &[SymbolId], wild_ids: &WildSet) -> bool {
    detect_wilds(line, wild_ids).any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_some_wilds() {
        let wilds = WildSet::from_ids(&[5, 10]);
        let mask = detect_wilds(&[1, 5, 3, 5, 2], &wilds);
        assert_eq!(mask.as_slice(), &[false, true, false, true, false]);
        assert!(has_wild(&[1, 5, 3, 5, 2], &wilds));
        assert_eq!(mask.leading(), 0);
    }

    #[test]
    fn test_detect_no_wilds() {
        let wilds = WildSet::from_ids(&[10, 11]);
        let mask = detect_wilds(&[1, 2, 3, 4, 5], &wilds);
        assert_eq!(mask.as_slice(), &[false; 5]);
        assert!(!mask.any());
    }

    #[test]
    fn test_detect_all_wilds() {
        let wilds = WildSet::from_ids(&[5, 10]);
        let mask = detect_wilds(&[5, 10, 5, 10, 5], &wilds);
        assert!(mask.all());
        assert_eq!(mask.leading(), 5);
    }

    #[test]
    fn test_empty_line() {
        let wilds = WildSet::from_ids(&[5, 10]);
        let mask = detect_wilds(&[], &wilds);
        assert!(mask.is_empty());
        assert!(!mask.all());
        assert!(!has_wild(&[], &wilds));
    }

    #[test]
    fn test_empty_wild_set() {
        assert!(!has_wild(&[1, 2, 3, 4], &WildSet::new()));
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let wilds = WildSet::from_ids(&[5, 5, 0, 5]);
        assert_eq!(wilds.len(), 2);
        // 0 is a regular ID and can be wild like any other
        assert!(wilds.contains(0));
    }

    #[test]
    fn test_is_wild_out_of_range() {
        let mask = WildMask::from_flags(vec![true]);
        assert!(mask.is_wild(0));
        assert!(!mask.is_wild(3));
    }
}
