use anchor_lang::prelude::*;
use crate::error::TaxDistributionError;
use crate::state::*;
use crate::test::memory_gateway::MemoryGateway;

/// Ledger with weights {A:300, B:500, C:200} at 3 decimal places
pub struct Fixture {
    pub admin: Pubkey,
    pub a: Pubkey,
    pub b: Pubkey,
    pub c: Pubkey,
    pub ledger: TaxLedger,
    pub gateway: MemoryGateway,
}

impl Fixture {
    pub fn new() -> Self {
        let admin = Pubkey::new_unique();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let c = Pubkey::new_unique();

        let ledger = TaxLedger::create(
            admin,
            1,
            255,
            254,
            &[weight(a, 300), weight(b, 500), weight(c, 200)],
            3,
        )
        .expect("Failed to create ledger");

        Self {
            admin,
            a,
            b,
            c,
            ledger,
            gateway: MemoryGateway::new(),
        }
    }

    pub fn balance_of(&self, address: &Pubkey) -> Result<u64> {
        self.ledger.entitlement(address, &self.gateway)
    }

    pub fn withdraw(&mut self, caller: &Pubkey, amount: Option<u64>) -> Result<u64> {
        let payout = self.ledger.withdraw(caller, amount, &mut self.gateway)?;
        assert_eq!(payout.receiver, *caller);
        Ok(payout.amount)
    }

    pub fn withdrawn(&self, address: &Pubkey) -> u64 {
        self.ledger.beneficiary(address).expect("Unknown beneficiary").withdrawn
    }
}

pub fn weight(address: Pubkey, weight: u64) -> BeneficiaryWeight {
    BeneficiaryWeight { address, weight }
}

/// Error code number of an anchor error result
pub fn error_number<T: std::fmt::Debug>(result: Result<T>) -> u32 {
    match result {
        Err(anchor_lang::error::Error::AnchorError(e)) => e.error_code_number,
        other => panic!("Expected anchor error, got {:?}", other),
    }
}

pub fn code(error: TaxDistributionError) -> u32 {
    u32::from(error)
}
