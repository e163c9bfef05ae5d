pub mod fixture;
pub mod memory_gateway;
pub mod test_ledger;
