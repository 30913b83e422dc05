pub mod settlement;
pub mod transaction;
pub mod window;

pub use settlement::SettlementResult;
pub use transaction::{Transaction, TransactionType};
pub use window::DateWindow;
