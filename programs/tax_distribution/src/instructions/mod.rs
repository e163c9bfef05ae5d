pub mod initialize;
pub mod deposit;
pub mod withdraw;
pub mod set_beneficiaries;
pub mod change_admin;
pub mod emergency_withdraw;
pub mod queries;

pub use initialize::*;
pub use deposit::*;
pub use withdraw::*;
pub use set_beneficiaries::*;
pub use change_admin::*;
pub use emergency_withdraw::*;
pub use queries::*;
