use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::utils::{transfer_lamports, vault_rent_reserve};

/**
 * Host capability the ledger settles through
 *
 * The ledger never owns funds directly: it asks the gateway how much is
 * held and instructs it to pay out. On-chain this is the vault PDA;
 * tests substitute an in-memory implementation.
 */
pub trait AccountGateway {
    /// Distributable native units currently held
    fn balance(&self) -> Result<u64>;

    /// Pays `amount` native units to `to`.
    /// Fails with `TransferFailed` for a zero amount, an amount above
    /// `balance()` or a recipient the host cannot reach.
    fn transfer(&mut self, amount: u64, to: &Pubkey) -> Result<()>;
}

/**
 * Gateway backed by the ledger's vault PDA
 *
 * - Balance is the vault's lamports above its rent-exempt reserve
 * - Transfers are system program CPIs signed with ["vault", ledger, bump]
 * - Only accounts handed over in `recipients` can be paid
 */
pub struct VaultGateway<'info> {
    ledger: Pubkey,
    vault_bump: u8,
    vault: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    recipients: Vec<AccountInfo<'info>>,
    rent_reserve: u64,
}

impl<'info> VaultGateway<'info> {
    pub fn new(
        ledger: Pubkey,
        vault_bump: u8,
        vault: AccountInfo<'info>,
        system_program: AccountInfo<'info>,
        recipients: Vec<AccountInfo<'info>>,
    ) -> Result<Self> {
        Ok(Self {
            ledger,
            vault_bump,
            vault,
            system_program,
            recipients,
            rent_reserve: vault_rent_reserve()?,
        })
    }
}

impl<'info> AccountGateway for VaultGateway<'info> {
    fn balance(&self) -> Result<u64> {
        Ok(self.vault.lamports().saturating_sub(self.rent_reserve))
    }

    fn transfer(&mut self, amount: u64, to: &Pubkey) -> Result<()> {
        require!(amount > 0, TaxDistributionError::TransferFailed);
        require!(amount <= self.balance()?, TaxDistributionError::TransferFailed);

        let recipient = self
            .recipients
            .iter()
            .find(|account| account.key == to)
            .ok_or_else(|| error!(TaxDistributionError::TransferFailed))?;
        require!(recipient.is_writable, TaxDistributionError::TransferFailed);

        let bump = [self.vault_bump];
        let seeds: &[&[u8]] = &[VAULT_SEED.as_bytes(), self.ledger.as_ref(), &bump];
        let signer = &[seeds];

        transfer_lamports(
            self.vault.clone(),
            recipient.clone(),
            self.system_program.clone(),
            amount,
            Some(signer),
        )
    }
}
