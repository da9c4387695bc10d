//! Game definition loading
//!
//! A game definition bundles the wild set, the pay table, the payline
//! patterns and the evaluator settings. It can be written as JSON or YAML:
//!
//! ```yaml
//! name: Classic 5x3
//! wild_ids: [0]
//! pay_table:
//!   1: { 3: 30, 4: 60, 5: 120 }
//!   2: { 3: 25, 4: 50, 5: 100 }
//! evaluator:
//!   kind: B
//!   line_bet: 1.0
//! ```
//!
//! `paylines` defaults to the 20 standard 5×3 patterns.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PaylineError, PaylineResult};
use crate::evaluator::{Evaluator, EvaluatorConfig};
use crate::paytable::{PayTable, PaylinePattern, standard_paylines};
use crate::wilds::WildSet;

/// Parsing limits for security
#[derive(Debug, Clone)]
pub struct ConfigLimits {
    pub max_paylines: usize,
    pub max_reels: usize,
    pub max_name_length: usize,
}

impl Default for ConfigLimits {
    fn default() -> Self {
        Self {
            max_paylines: 1024,
            max_reels: 10,
            max_name_length: 256,
        }
    }
}

/// Complete game definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub wild_ids: WildSet,
    pub pay_table: PayTable,
    #[serde(default = "standard_paylines")]
    pub paylines: Vec<PaylinePattern>,
    #[serde(default)]
    pub evaluator: EvaluatorConfig,
}

impl GameConfig {
    pub fn new(pay_table: PayTable, wild_ids: WildSet) -> Self {
        Self {
            name: String::new(),
            wild_ids,
            pay_table,
            paylines: standard_paylines(),
            evaluator: EvaluatorConfig::default(),
        }
    }

    /// Parse and validate a JSON definition
    pub fn from_json(json: &str) -> PaylineResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate(&ConfigLimits::default())?;
        Ok(config)
    }

    /// Parse and validate a YAML definition
    pub fn from_yaml(yaml: &str) -> PaylineResult<Self> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate(&ConfigLimits::default())?;
        Ok(config)
    }

    /// Load from a `.json`, `.yaml` or `.yml` file
    pub fn from_path(path: impl AsRef<Path>) -> PaylineResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&text)?,
            Some("yaml") | Some("yml") => Self::from_yaml(&text)?,
            other => {
                return Err(PaylineError::Config(format!(
                    "Unsupported config extension {:?} for {}",
                    other,
                    path.display()
                )));
            }
        };
        log::info!(
            "Loaded game config {:?} from {} ({} paylines)",
            config.name,
            path.display(),
            config.paylines.len()
        );
        Ok(config)
    }

    /// Validate the definition against `limits`
    pub fn validate(&self, limits: &ConfigLimits) -> PaylineResult<()> {
        if self.name.len() > limits.max_name_length {
            return Err(PaylineError::Config(format!(
                "Game name too long: {} > {}",
                self.name.len(),
                limits.max_name_length
            )));
        }

        if self.paylines.len() > limits.max_paylines {
            return Err(PaylineError::Config(format!(
                "Too many paylines: {} > {}",
                self.paylines.len(),
                limits.max_paylines
            )));
        }

        for line in &self.paylines {
            if line.positions.is_empty() {
                return Err(PaylineError::Config(format!("Payline {} has no positions", line.index)));
            }
            if line.positions.len() > limits.max_reels {
                return Err(PaylineError::Config(format!(
                    "Payline {} spans too many reels: {} > {}",
                    line.index,
                    line.positions.len(),
                    limits.max_reels
                )));
            }
        }

        self.pay_table.validate()?;
        if self.pay_table.is_empty() {
            log::warn!("Game {:?} has an empty pay table; no line can pay", self.name);
        }
        self.evaluator.validate()
    }

    /// Evaluator for this game
    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new(self.pay_table.clone(), self.wild_ids.clone()).with_config(self.evaluator.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::WinKind;

    #[test]
    fn test_parse_minimal_json() {
        let json = r#"{ "pay_table": { "3": { "3": 10, "4": 25, "5": 50 } } }"#;
        let config = GameConfig::from_json(json).unwrap();
        assert!(config.wild_ids.is_empty());
        assert_eq!(config.paylines.len(), 20);
        assert_eq!(config.evaluator, EvaluatorConfig::default());
        assert_eq!(config.pay_table.payout(3, 4), 25.0);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
name: Classic
wild_ids: [0, 0, 11]
pay_table:
  1: { 3: 30, 4: 60 }
paylines:
  - { index: 0, positions: [1, 1, 1, 1, 1] }
evaluator:
  kind: TF
  line_bet: 0.25
"#;
        let config = GameConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.name, "Classic");
        assert_eq!(config.wild_ids.len(), 2);
        assert_eq!(config.paylines.len(), 1);
        assert_eq!(config.evaluator.kind, WinKind::Trigger);
        assert_eq!(config.evaluator.line_bet, 0.25);
        assert!(config.evaluator.compare_leading_wilds);
    }

    #[test]
    fn test_rejects_bad_values() {
        let negative = r#"{ "pay_table": { "1": { "3": -5 } } }"#;
        assert!(matches!(GameConfig::from_json(negative), Err(PaylineError::Config(_))));

        let negative_zero = r#"{ "pay_table": { "2": { "3": -0.0 } } }"#;
        assert!(matches!(GameConfig::from_json(negative_zero), Err(PaylineError::Config(_))));

        let zero_run = r#"{ "pay_table": { "1": { "0": 5 } } }"#;
        assert!(matches!(GameConfig::from_json(zero_run), Err(PaylineError::Config(_))));

        let empty_line = r#"{ "pay_table": {}, "paylines": [ { "index": 0, "positions": [] } ] }"#;
        assert!(matches!(GameConfig::from_json(empty_line), Err(PaylineError::Config(_))));

        let bad_bet = r#"{ "pay_table": {}, "evaluator": { "line_bet": 0 } }"#;
        assert!(matches!(GameConfig::from_json(bad_bet), Err(PaylineError::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(GameConfig::from_json("{"), Err(PaylineError::Json(_))));
    }

    #[test]
    fn test_evaluator_from_config() {
        let config = GameConfig::new(PayTable::new().with_pay(3, 3, 10.0), WildSet::from_ids(&[5]));
        let result = config.evaluator().evaluate_line(1, &[5, 3, 3, 7, 2]);
        assert_eq!(result.win_amount, 10.0);
    }
}
