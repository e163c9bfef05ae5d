use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::utils::VaultGateway;

/**
 * Account context for withdrawing an accrued share
 *
 * This instruction pays a beneficiary out of the vault, up to what the
 * beneficiary is entitled to under the current weight table.
 *
 * Access Control: Current beneficiaries only
 *
 * Business Logic:
 * - Without an amount, the whole entitlement is paid
 * - With an amount, it must be non-zero and within the entitlement
 * - A beneficiary with nothing accrued gets NothingToWithdraw
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// The ledger tracking the beneficiary's withdrawn amount
    #[account(mut)]
    pub ledger: Account<'info, TaxLedger>,

    /// Vault paying the beneficiary
    /// - Derived from: ["vault", ledger_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), ledger.key().as_ref()],
        bump = ledger.vault_bump
    )]
    pub vault: SystemAccount<'info>,

    /// The beneficiary withdrawing
    /// - Must be in the current weight table
    /// - Receives the lamports
    #[account(mut)]
    pub beneficiary: Signer<'info>,

    /// System program for the payout
    pub system_program: Program<'info, System>,
}

/**
 * Pays the signer its entitlement, or part of it
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Lamports to withdraw; None withdraws everything owed
 */
pub fn handle_withdraw(ctx: Context<Withdraw>, amount: Option<u64>) -> Result<()> {
    let beneficiary = ctx.accounts.beneficiary.key();

    let mut gateway = VaultGateway::new(
        ctx.accounts.ledger.key(),
        ctx.accounts.ledger.vault_bump,
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        vec![ctx.accounts.beneficiary.to_account_info()],
    )?;

    let payout = ctx.accounts.ledger.withdraw(&beneficiary, amount, &mut gateway)?;

    msg!("Withdrawn {} lamports to {}", payout.amount, payout.receiver);

    emit_cpi!(payout);

    Ok(())
}
