//! Result codes
//!
//! A result code is a compact, hyphen-delimited description of one line win:
//!
//! ```text
//! <kind>-<run_length>-<wild_flag>-<symbol_id>-<multiplier>
//!   B   -     3      -    0      -    02     -     1
//! ```
//!
//! `kind` is `B` for base-game wins and `TF` for wins in a trigger/free-game
//! context. The symbol is zero-padded to two digits; the multiplier is
//! rendered as-is (no forced decimals).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PaylineError, PaylineResult};
use crate::wilds::SymbolId;

/// Game context a win was produced in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WinKind {
    /// Base game
    #[default]
    #[serde(rename = "B")]
    Base,
    /// Trigger / free-game context
    #[serde(rename = "TF")]
    Trigger,
}

impl WinKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WinKind::Base => "B",
            WinKind::Trigger => "TF",
        }
    }
}

impl fmt::Display for WinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WinKind {
    type Err = PaylineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" => Ok(WinKind::Base),
            "TF" => Ok(WinKind::Trigger),
            other => Err(PaylineError::invalid_code(
                s,
                format!("unknown kind {:?}, expected B or TF", other),
            )),
        }
    }
}

/// Decoded result code
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultCode {
    pub kind: WinKind,
    pub run_length: usize,
    /// Winning run used at least one wild
    pub wild: bool,
    pub symbol: SymbolId,
    pub multiplier: f64,
}

const FIELD_COUNT: usize = 5;

/// -0.0 renders as "-0", which would add a field separator
fn unsigned_zero(multiplier: f64) -> f64 {
    if multiplier == 0.0 { 0.0 } else { multiplier }
}

impl ResultCode {
    pub fn new(kind: WinKind, run_length: usize, wild: bool, symbol: SymbolId, multiplier: f64) -> Self {
        Self {
            kind,
            run_length,
            wild,
            symbol,
            multiplier: unsigned_zero(multiplier),
        }
    }

    /// `wild` as the 0/1 flag used on the wire
    pub fn wild_flag(&self) -> u8 {
        u8::from(self.wild)
    }

    /// Decode a code string. All five fields are required.
    pub fn parse(code: &str) -> PaylineResult<Self> {
        let fields: Vec<&str> = code.split('-').collect();
        if fields.len() != FIELD_COUNT {
            return Err(PaylineError::invalid_code(
                code,
                format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
            ));
        }

        let kind = fields[0]
            .parse::<WinKind>()
            .map_err(|_| PaylineError::invalid_code(code, format!("unknown kind {:?}", fields[0])))?;

        let run_length = fields[1]
            .parse::<usize>()
            .map_err(|e| PaylineError::invalid_code(code, format!("run length {:?}: {}", fields[1], e)))?;

        let wild = match fields[2] {
            "0" => false,
            "1" => true,
            other => {
                return Err(PaylineError::invalid_code(
                    code,
                    format!("wild flag must be 0 or 1, found {:?}", other),
                ));
            }
        };

        let symbol = fields[3]
            .parse::<SymbolId>()
            .map_err(|e| PaylineError::invalid_code(code, format!("symbol {:?}: {}", fields[3], e)))?;

        let multiplier = fields[4]
            .parse::<f64>()
            .ok()
            .filter(|m| m.is_finite())
            .ok_or_else(|| PaylineError::invalid_code(code, format!("multiplier {:?} is not a number", fields[4])))?;

        Ok(Self::new(kind, run_length, wild, symbol, multiplier))
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{:02}-{}",
            self.kind,
            self.run_length,
            self.wild_flag(),
            self.symbol,
            unsigned_zero(self.multiplier)
        )
    }
}

impl FromStr for ResultCode {
    type Err = PaylineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Format a result code string
pub fn format_code(kind: WinKind, run_length: usize, wild: bool, symbol: SymbolId, multiplier: f64) -> String {
    ResultCode::new(kind, run_length, wild, symbol, multiplier).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pads_symbol() {
        assert_eq!(format_code(WinKind::Base, 3, false, 2, 1.0), "B-3-0-02-1");
        assert_eq!(format_code(WinKind::Trigger, 5, true, 10, 2.0), "TF-5-1-10-2");
        assert_eq!(format_code(WinKind::Base, 4, true, 123, 2.5), "B-4-1-123-2.5");
        assert_eq!(format_code(WinKind::Base, 1, false, 0, 0.0), "B-1-0-00-0");
    }

    #[test]
    fn test_parse_valid() {
        let code = ResultCode::parse("B-3-0-02-1").unwrap();
        assert_eq!(code.kind, WinKind::Base);
        assert_eq!(code.run_length, 3);
        assert!(!code.wild);
        assert_eq!(code.symbol, 2);
        assert_eq!(code.multiplier, 1.0);

        let code: ResultCode = "TF-5-1-10-2.5".parse().unwrap();
        assert_eq!(code.kind, WinKind::Trigger);
        assert!(code.wild);
        assert_eq!(code.multiplier, 2.5);
    }

    #[test]
    fn test_parse_wrong_field_count() {
        for bad in ["B-3", "B-3-0-02", "B-3-0-02-1-7", "", "INVALID"] {
            let err = ResultCode::parse(bad).unwrap_err();
            assert!(matches!(err, PaylineError::InvalidCode { ref code, .. } if code == bad));
        }
    }

    #[test]
    fn test_parse_bad_fields() {
        assert!(ResultCode::parse("X-3-0-02-1").is_err());
        assert!(ResultCode::parse("B-three-0-02-1").is_err());
        assert!(ResultCode::parse("B-3-2-02-1").is_err());
        assert!(ResultCode::parse("B-3-0-ab-1").is_err());
        assert!(ResultCode::parse("B-3-0-02-x").is_err());
        assert!(ResultCode::parse("B-3-0-02-NaN").is_err());
    }

    #[test]
    fn test_round_trip() {
        let original = ResultCode::new(WinKind::Trigger, 4, true, 7, 12.75);
        let decoded = ResultCode::parse(&original.to_string()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_negative_zero_multiplier_stays_decodable() {
        let code = ResultCode::new(WinKind::Base, 3, false, 2, -0.0);
        assert!(code.multiplier.is_sign_positive());
        assert_eq!(code.to_string(), "B-3-0-02-0");

        let literal = ResultCode {
            multiplier: -0.0,
            ..code
        };
        assert_eq!(literal.to_string(), "B-3-0-02-0");
        assert_eq!(ResultCode::parse(&literal.to_string()).unwrap(), code);
    }

    #[test]
    fn test_kind_serde() {
        assert_eq!(serde_json::to_string(&WinKind::Trigger).unwrap(), "\"TF\"");
        let kind: WinKind = serde_json::from_str("\"B\"").unwrap();
        assert_eq!(kind, WinKind::Base);
    }
}
