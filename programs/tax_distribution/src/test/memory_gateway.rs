use anchor_lang::prelude::*;
use crate::error::TaxDistributionError;
use crate::utils::AccountGateway;

/// In-memory stand-in for the vault.
/// Deposits credit the balance, transfers debit it and are recorded.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    balance: u64,
    payouts: Vec<(Pubkey, u64)>,
    fail_at: Option<usize>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deposit(&mut self, amount: u64) {
        self.balance += amount;
    }

    /// Makes the transfer with this zero-based index fail
    pub fn fail_at_transfer(&mut self, index: usize) {
        self.fail_at = Some(index);
    }

    /// Lamports currently in the vault
    pub fn held(&self) -> u64 {
        self.balance
    }

    pub fn payouts(&self) -> &[(Pubkey, u64)] {
        &self.payouts
    }

    pub fn paid_to(&self, address: &Pubkey) -> u64 {
        self.payouts
            .iter()
            .filter(|(to, _)| to == address)
            .map(|(_, amount)| amount)
            .sum()
    }
}

impl AccountGateway for MemoryGateway {
    fn balance(&self) -> Result<u64> {
        Ok(self.balance)
    }

    fn transfer(&mut self, amount: u64, to: &Pubkey) -> Result<()> {
        require!(amount > 0, TaxDistributionError::TransferFailed);
        require!(amount <= self.balance, TaxDistributionError::TransferFailed);
        require!(
            self.fail_at != Some(self.payouts.len()),
            TaxDistributionError::TransferFailed
        );

        self.balance -= amount;
        self.payouts.push((*to, amount));
        Ok(())
    }
}
