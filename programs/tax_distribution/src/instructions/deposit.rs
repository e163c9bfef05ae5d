use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_lamports;
use anchor_lang::prelude::*;

/**
 * Account context for depositing income into the vault
 *
 * A plain system transfer to the vault address has the same effect;
 * this instruction only adds a Deposited event for indexers.
 *
 * Access Control: Anyone
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// The ledger the income is for
    pub ledger: Account<'info, TaxLedger>,

    /// Vault receiving the lamports
    /// - Derived from: ["vault", ledger_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), ledger.key().as_ref()],
        bump = ledger.vault_bump
    )]
    pub vault: SystemAccount<'info>,

    /// Account paying the deposit
    #[account(mut)]
    pub depositor: Signer<'info>,

    /// System program for the transfer
    pub system_program: Program<'info, System>,
}

pub fn handle_deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(amount > 0, TaxDistributionError::InvalidAmount);

    transfer_lamports(
        ctx.accounts.depositor.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        amount,
        None,
    )?;

    emit_cpi!(Deposited {
        ledger: ctx.accounts.ledger.key(),
        depositor: ctx.accounts.depositor.key(),
        amount,
    });

    Ok(())
}
