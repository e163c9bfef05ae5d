use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::utils::VaultGateway;

/**
 * Account context for read-only ledger queries
 *
 * Results are returned through the transaction return data, so these
 * are typically called through simulation.
 */
#[derive(Accounts)]
pub struct GetLedger<'info> {
    pub ledger: Account<'info, TaxLedger>,
}

/// Account context for querying a beneficiary's entitlement
#[derive(Accounts)]
pub struct GetBeneficiaryBalance<'info> {
    pub ledger: Account<'info, TaxLedger>,

    /// Vault whose balance the entitlement is derived from
    /// - Derived from: ["vault", ledger_key]
    #[account(
        seeds = [VAULT_SEED.as_bytes(), ledger.key().as_ref()],
        bump = ledger.vault_bump
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_get_beneficiaries(ctx: Context<GetLedger>) -> Result<Vec<Beneficiary>> {
    Ok(ctx.accounts.ledger.beneficiaries())
}

pub fn handle_get_admin(ctx: Context<GetLedger>) -> Result<Pubkey> {
    Ok(ctx.accounts.ledger.admin)
}

pub fn handle_get_beneficiary_balance(
    ctx: Context<GetBeneficiaryBalance>,
    address: Pubkey,
) -> Result<u64> {
    let gateway = VaultGateway::new(
        ctx.accounts.ledger.key(),
        ctx.accounts.ledger.vault_bump,
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        Vec::new(),
    )?;

    ctx.accounts.ledger.entitlement(&address, &gateway)
}
