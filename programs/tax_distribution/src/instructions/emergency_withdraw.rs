use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::utils::VaultGateway;

/**
 * Account context for draining the vault to the admin
 *
 * Escape hatch for fund recovery. The whole distributable balance goes
 * to the admin in one transfer, outside the weighted accounting.
 *
 * Access Control: Only the admin can drain the vault
 */
#[event_cpi]
#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    /// The ledger owning the vault
    #[account(mut)]
    pub ledger: Account<'info, TaxLedger>,

    /// Vault to drain
    /// - Derived from: ["vault", ledger_key]
    /// - Keeps its rent-exempt reserve
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), ledger.key().as_ref()],
        bump = ledger.vault_bump
    )]
    pub vault: SystemAccount<'info>,

    /// The admin, receiving the lamports
    #[account(mut)]
    pub admin: Signer<'info>,

    /// System program for the transfer
    pub system_program: Program<'info, System>,
}

pub fn handle_emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
    let admin = ctx.accounts.admin.key();

    let mut gateway = VaultGateway::new(
        ctx.accounts.ledger.key(),
        ctx.accounts.ledger.vault_bump,
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        vec![ctx.accounts.admin.to_account_info()],
    )?;

    let payout = ctx.accounts.ledger.emergency_withdraw(&admin, &mut gateway)?;

    msg!("Emergency withdraw of {} lamports to {}", payout.amount, payout.receiver);

    emit_cpi!(payout);

    Ok(())
}
