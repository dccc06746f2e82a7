//! Financial summaries derived from transactions.

pub mod profit_loss;

pub use profit_loss::ProfitAndLoss;
