//! Rule-based news intelligence: keyword classification of articles into
//! impact, sentiment, and topic, plus the report builder and CSV export used
//! by the HTTP and command-line hosts.

pub mod config;
pub mod error;
pub mod intelligence;
pub mod telemetry;
