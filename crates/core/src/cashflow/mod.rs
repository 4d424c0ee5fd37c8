//! Monthly cash-flow projection with growth rates and one-off adjustments.

pub mod engine;
pub mod error;
pub mod types;


pub use engine::{CashflowEngine, MAX_PROJECTION_MONTHS};
pub use error::CashflowError;
pub use types::*;
