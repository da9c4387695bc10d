//! # rf-payline — Payline Evaluator
//!
//! Computes line wins for slot paylines: which positions are wild, how long
//! the left-anchored run is, what the pay table pays for it, and a compact
//! result code describing the win.
//!
//! ## Architecture
//!
//! ```text
//! line + WildSet ──> detect_wilds ──> WildMask
//!                                        │
//!                                        v
//!                                    match_run ──> RunMatch (symbol, length)
//!                                        │
//!                         PayTable ──> payout
//!                                        │
//!                                        v
//!                     ResultCode "B-3-1-02-30" ──> WinlineEntry
//!                                        │
//!                                        v
//!                      SpinAccumulator ──> GameTicket
//! ```
//!
//! Everything is a pure function of its inputs. An [`Evaluator`] owns an
//! immutable pay table and wild set and can be shared across threads;
//! [`Evaluator::evaluate_spin`] fans paylines out with rayon.

pub mod code;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod matcher;
pub mod paytable;
pub mod spin;
pub mod ticket;
pub mod wilds;
pub mod winline;

pub use code::*;
pub use config::*;
pub use error::*;
pub use evaluator::*;
pub use matcher::*;
pub use paytable::*;
pub use spin::*;
pub use ticket::*;
pub use wilds::*;
pub use winline::*;
