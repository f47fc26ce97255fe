//! Gas Ledger
//!
//! Tracks gas-optimization analyses requested against target contracts.
//! Each analysis records an original gas figure, a placeholder optimized
//! estimate and a fixed set of recommendations. A report can later be
//! reconciled once against a measured value, and efficiency statistics are
//! available per caller and for the whole ledger.
//!
//! This crate provides the core implementation for the
//! `gas-ledger` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! gas-ledger init --owner admin --fee 1000
//! gas-ledger analyze --caller alice --target 0xabc --gas 1000 \
//!     --function "transfer(address,uint256)" --payment 1000
//! gas-ledger reconcile --caller alice --index 0 --actual 800
//! gas-ledger stats --caller alice
//! ```

pub mod commands;
pub mod estimator;
pub mod events;
pub mod gate;
pub mod ledger;
pub mod output;
pub mod recommend;
pub mod stats;
pub mod store;
pub mod utils;
