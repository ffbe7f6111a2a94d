//! Pure domain types and date/time helpers.

pub mod interval;
pub mod profitability;
pub mod staffing;

pub use interval::*;
pub use profitability::*;
pub use staffing::*;
