pub mod ledger_state;
pub mod weight_table;

pub use ledger_state::*;
pub use weight_table::*;
