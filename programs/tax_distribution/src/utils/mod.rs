pub mod gateway;
pub mod lamports;

pub use gateway::*;
pub use lamports::*;
