use anchor_lang::prelude::*;

declare_id!("7xTaxDsT6q3Ubt2dKq8mN1cWc4vR5yZpHfGj9LeA2Bs4");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::{Beneficiary, BeneficiaryWeight};

/**
 * Tax Distribution Program
 *
 * A Solana program that splits the native income of a vault among a
 * configurable set of weighted beneficiaries.
 *
 * Key Features:
 * - Fixed-point weights that must partition exactly 100% of income
 * - Pull-based payouts: each beneficiary withdraws its share on demand
 * - Floor rounding: the program never pays more than was received,
 *   leftover dust stays in the vault
 * - Reconfiguration settles every accrued share before the table changes
 * - Admin handover and an emergency drain for fund recovery
 *
 * Architecture:
 * - Ledger PDA: admin, weight table and per-beneficiary withdrawn counters
 * - Vault PDA: system-owned account holding the income
 *
 * Accounting:
 * - total_ever_received = vault balance + sum(withdrawn)
 * - entitlement = floor(total_ever_received * weight / 10^decimals) - withdrawn
 *
 * Workflow:
 * 1. Admin initializes the ledger with a weight table
 * 2. Income is sent to the vault (plain transfer or deposit)
 * 3. Beneficiaries withdraw their entitlement
 * 4. Admin may replace the table; current beneficiaries are settled first
 */
#[program]
pub mod tax_distribution {
    use super::*;

    /**
     * Creates a new ledger
     *
     * @param ctx - Account context containing ledger, vault and admin accounts
     * @param seed_id - Id distinguishing ledgers created by the same signer
     * @param beneficiaries - Initial weight table
     * @param decimal_places - Precision of the weights
     *
     * Access Control: Anyone; the signer becomes admin
     */
    pub fn initialize(
        ctx: Context<Initialize>,
        seed_id: u64,
        beneficiaries: Vec<BeneficiaryWeight>,
        decimal_places: u8,
    ) -> Result<()> {
        handle_initialize(ctx, seed_id, beneficiaries, decimal_places)
    }

    /**
     * Deposits income into the vault
     *
     * @param ctx - Account context containing ledger, vault and depositor accounts
     * @param amount - Lamports to deposit
     *
     * Access Control: Anyone
     */
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        handle_deposit(ctx, amount)
    }

    /**
     * Withdraws the signer's accrued share
     *
     * @param ctx - Account context containing ledger, vault and beneficiary accounts
     * @param amount - Lamports to withdraw; None withdraws the whole entitlement
     *
     * Access Control: Current beneficiaries only
     */
    pub fn withdraw(ctx: Context<Withdraw>, amount: Option<u64>) -> Result<()> {
        handle_withdraw(ctx, amount)
    }

    /**
     * Settles the current beneficiaries and installs a new weight table
     *
     * @param ctx - Account context; remaining accounts are the current beneficiaries in table order
     * @param beneficiaries - New weight table
     * @param decimal_places - Precision of the new weights
     *
     * Access Control: Admin only
     */
    pub fn set_beneficiaries<'info>(
        ctx: Context<'_, '_, 'info, 'info, SetBeneficiaries<'info>>,
        beneficiaries: Vec<BeneficiaryWeight>,
        decimal_places: u8,
    ) -> Result<()> {
        handle_set_beneficiaries(ctx, beneficiaries, decimal_places)
    }

    /**
     * Hands the admin role to another account
     *
     * Access Control: Admin only
     */
    pub fn change_admin(ctx: Context<ChangeAdmin>, new_admin: Pubkey) -> Result<()> {
        handle_change_admin(ctx, new_admin)
    }

    /**
     * Sends the whole distributable vault balance to the admin
     *
     * Access Control: Admin only
     * Note: Bypasses the weighted accounting
     */
    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
        handle_emergency_withdraw(ctx)
    }

    /// Returns the current weight table with withdrawn counters
    pub fn get_beneficiaries(ctx: Context<GetLedger>) -> Result<Vec<Beneficiary>> {
        handle_get_beneficiaries(ctx)
    }

    /// Returns the amount `address` could withdraw right now
    pub fn get_beneficiary_balance(
        ctx: Context<GetBeneficiaryBalance>,
        address: Pubkey,
    ) -> Result<u64> {
        handle_get_beneficiary_balance(ctx, address)
    }

    /// Returns the current admin
    pub fn get_admin(ctx: Context<GetLedger>) -> Result<Pubkey> {
        handle_get_admin(ctx)
    }
}
