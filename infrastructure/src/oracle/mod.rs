//! Scoring oracle adapters

mod http;

pub use http::{HttpScoringOracle, OracleSettings};
