use anchor_lang::prelude::*;
use crate::error::*;
use crate::event::CoinReceived;
use crate::state::weight_table::*;
use crate::utils::AccountGateway;

/**
 * Tax distribution ledger account
 *
 * Splits the lamports flowing into the vault among the weighted
 * beneficiaries of the current weight table. Nothing is credited on
 * deposit; entitlements are derived on demand from
 *
 *   total_ever_received = vault balance + sum(withdrawn)
 *
 * which withdrawals leave unchanged (they move lamports from the vault
 * balance into `withdrawn`). Only deposits make it grow.
 *
 * Derivation: ["ledger", creator, seed_id]
 *
 * Lifecycle:
 * 1. Created by initialize; the initializing signer becomes admin
 * 2. Beneficiaries withdraw their accrued share at any time
 * 3. Admin replaces the weight table; old beneficiaries are settled first
 * 4. Admin may hand the role over or drain the vault in an emergency
 */
#[account]
#[derive(Debug, PartialEq)]
pub struct TaxLedger {
    /// Bump seed for the ledger PDA
    pub bump: u8,

    /// Bump seed for the vault PDA
    /// - Saved to sign payouts without recomputation
    pub vault_bump: u8,

    /// Creator-chosen id, part of the ledger PDA seeds
    pub seed_id: u64,

    /// Signer that created the ledger
    /// - Part of the PDA seeds, never changes
    pub creator: Pubkey,

    /// Account allowed to reconfigure, hand over admin and drain the vault
    pub admin: Pubkey,

    /// Lamports removed by emergency_withdraw in the current generation
    /// - Non-zero means the conservation identity no longer holds
    pub drained: u64,

    /// Current beneficiary generation
    pub weight_table: WeightTable,
}

impl TaxLedger {
    /// Calculate the space required for this account
    /// - 8-byte discriminator + fixed fields + weight table at full capacity
    pub const LEN: usize = 8 + 1 + 1 + 8 + 32 + 32 + 8 + WeightTable::LEN;

    /// Creates a ledger with a validated initial table
    pub fn create(
        creator: Pubkey,
        seed_id: u64,
        bump: u8,
        vault_bump: u8,
        beneficiaries: &[BeneficiaryWeight],
        decimal_places: u8,
    ) -> Result<Self> {
        Ok(Self {
            bump,
            vault_bump,
            seed_id,
            creator,
            admin: creator,
            drained: 0,
            weight_table: WeightTable::new(beneficiaries, decimal_places)?,
        })
    }

    pub fn assert_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, TaxDistributionError::NotAdmin);
        Ok(())
    }

    pub fn beneficiary(&self, address: &Pubkey) -> Result<&Beneficiary> {
        self.weight_table
            .get(address)
            .ok_or_else(|| error!(TaxDistributionError::UnknownBeneficiary))
    }

    /// vault balance + sum(withdrawn) for the current generation
    pub fn total_ever_received<G: AccountGateway>(&self, gateway: &G) -> Result<u64> {
        gateway
            .balance()?
            .checked_add(self.weight_table.total_withdrawn()?)
            .ok_or_else(|| error!(TaxDistributionError::ArithmeticOverflow))
    }

    /// Lamports `address` may withdraw right now
    pub fn entitlement<G: AccountGateway>(&self, address: &Pubkey, gateway: &G) -> Result<u64> {
        let beneficiary = self.beneficiary(address)?;
        let native_balance = gateway.balance()?;
        let total = self.total_ever_received(gateway)?;

        self.owed(beneficiary, total, native_balance)
    }

    /// share(total) - withdrawn, bounded by what the vault still holds.
    ///
    /// While conservation holds the share never falls below `withdrawn`
    /// and the bound is never reached. After an emergency drain both can
    /// happen; the owed amount is then clamped instead of failing.
    fn owed(&self, beneficiary: &Beneficiary, total: u64, available: u64) -> Result<u64> {
        let share = self.weight_table.fraction_of(&beneficiary.address, total)?;

        let owed = match share.checked_sub(beneficiary.withdrawn) {
            Some(owed) => owed,
            None if self.drained > 0 => 0,
            None => return err!(TaxDistributionError::InvariantViolation),
        };

        Ok(owed.min(available))
    }

    /**
     * Pays `caller` part or all of its entitlement
     *
     * - `requested` of None withdraws everything owed
     * - A zero entitlement fails with NothingToWithdraw
     * - `withdrawn` is only incremented once the transfer succeeded
     */
    pub fn withdraw<G: AccountGateway>(
        &mut self,
        caller: &Pubkey,
        requested: Option<u64>,
        gateway: &mut G,
    ) -> Result<CoinReceived> {
        let available = self.entitlement(caller, &*gateway)?;

        let amount = match requested {
            Some(amount) => {
                require!(
                    amount > 0 && amount <= available,
                    TaxDistributionError::InsufficientEntitlement
                );
                amount
            }
            None => {
                require!(available > 0, TaxDistributionError::NothingToWithdraw);
                available
            }
        };

        let new_withdrawn = self
            .beneficiary(caller)?
            .withdrawn
            .checked_add(amount)
            .ok_or_else(|| error!(TaxDistributionError::ArithmeticOverflow))?;

        gateway.transfer(amount, caller)?;

        let beneficiary = self
            .weight_table
            .get_mut(caller)
            .ok_or_else(|| error!(TaxDistributionError::UnknownBeneficiary))?;
        beneficiary.withdrawn = new_withdrawn;

        Ok(CoinReceived {
            receiver: *caller,
            amount,
        })
    }

    /**
     * Replaces the weight table after settling the current one
     *
     * Every current beneficiary is paid its full entitlement first, so no
     * accrued share is lost to the reconfiguration. Floor dust stays in
     * the vault and becomes income of the new generation. The new table
     * is only installed once every settlement transfer succeeded.
     */
    pub fn set_beneficiaries<G: AccountGateway>(
        &mut self,
        caller: &Pubkey,
        beneficiaries: &[BeneficiaryWeight],
        decimal_places: u8,
        gateway: &mut G,
    ) -> Result<Vec<CoinReceived>> {
        self.assert_admin(caller)?;
        let new_table = WeightTable::new(beneficiaries, decimal_places)?;

        // Withdrawals never change the total, so one snapshot covers the pass
        let mut remaining = gateway.balance()?;
        let total = self.total_ever_received(&*gateway)?;

        let mut payouts = Vec::with_capacity(self.weight_table.entries.len());
        for beneficiary in self.weight_table.entries.iter() {
            let amount = self.owed(beneficiary, total, remaining)?;
            if amount == 0 {
                continue;
            }

            gateway.transfer(amount, &beneficiary.address)?;
            remaining -= amount;

            payouts.push(CoinReceived {
                receiver: beneficiary.address,
                amount,
            });
        }

        // Old counters are discarded with the old generation
        self.weight_table = new_table;
        self.drained = 0;

        Ok(payouts)
    }

    pub fn change_admin(&mut self, caller: &Pubkey, new_admin: Pubkey) -> Result<()> {
        self.assert_admin(caller)?;
        self.admin = new_admin;
        Ok(())
    }

    /**
     * Sends the whole distributable balance to the admin
     *
     * Bypasses weight accounting: `withdrawn` counters are left untouched,
     * so entitlements read as zero until new deposits arrive.
     */
    pub fn emergency_withdraw<G: AccountGateway>(
        &mut self,
        caller: &Pubkey,
        gateway: &mut G,
    ) -> Result<CoinReceived> {
        self.assert_admin(caller)?;

        let amount = gateway.balance()?;
        require!(amount > 0, TaxDistributionError::NothingToWithdraw);

        let drained = self
            .drained
            .checked_add(amount)
            .ok_or_else(|| error!(TaxDistributionError::ArithmeticOverflow))?;

        gateway.transfer(amount, &self.admin)?;
        self.drained = drained;

        Ok(CoinReceived {
            receiver: self.admin,
            amount,
        })
    }

    /// Current generation in canonical order
    pub fn beneficiaries(&self) -> Vec<Beneficiary> {
        self.weight_table.entries.clone()
    }
}
