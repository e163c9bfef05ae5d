use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;
use crate::utils::VaultGateway;

/**
 * Account context for replacing the weight table
 *
 * Before the new table is installed every current beneficiary is paid
 * its full entitlement, so reconfiguration never forfeits accrued income.
 *
 * Access Control: Only the admin can replace the table
 *
 * Remaining accounts:
 * - One writable account per current beneficiary, in table order
 * - Used as settlement payout destinations
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetBeneficiaries<'info> {
    /// The ledger whose table is replaced
    #[account(mut)]
    pub ledger: Account<'info, TaxLedger>,

    /// Vault paying the settlement
    /// - Derived from: ["vault", ledger_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), ledger.key().as_ref()],
        bump = ledger.vault_bump
    )]
    pub vault: SystemAccount<'info>,

    /// The admin replacing the table
    pub admin: Signer<'info>,

    /// System program for the settlement payouts
    pub system_program: Program<'info, System>,
}

/**
 * Settles the current generation and installs a new weight table
 *
 * @param ctx - The account context; remaining accounts are the current beneficiaries
 * @param beneficiaries - New weight table
 * @param decimal_places - Precision of the new weights
 *
 * Validation Rules:
 * - Signer must be the admin
 * - New weights must sum to exactly 10^decimal_places
 * - Remaining accounts must match the current beneficiaries one to one
 */
pub fn handle_set_beneficiaries<'info>(
    ctx: Context<'_, '_, 'info, 'info, SetBeneficiaries<'info>>,
    beneficiaries: Vec<BeneficiaryWeight>,
    decimal_places: u8,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let ledger_key = ctx.accounts.ledger.key();
    ctx.accounts.ledger.assert_admin(&admin)?;

    let current = &ctx.accounts.ledger.weight_table.entries;
    require!(
        ctx.remaining_accounts.len() == current.len(),
        TaxDistributionError::TransferFailed
    );
    for (account, beneficiary) in ctx.remaining_accounts.iter().zip(current.iter()) {
        require_keys_eq!(
            *account.key,
            beneficiary.address,
            TaxDistributionError::TransferFailed
        );
    }

    let mut gateway = VaultGateway::new(
        ledger_key,
        ctx.accounts.ledger.vault_bump,
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        ctx.remaining_accounts.to_vec(),
    )?;

    let payouts = ctx.accounts.ledger.set_beneficiaries(
        &admin,
        &beneficiaries,
        decimal_places,
        &mut gateway,
    )?;

    let mut settled_amount: u64 = 0;
    for payout in payouts {
        settled_amount = settled_amount
            .checked_add(payout.amount)
            .ok_or(TaxDistributionError::ArithmeticOverflow)?;
        emit_cpi!(payout);
    }

    msg!(
        "Ledger {} settled {} lamports, {} beneficiaries installed",
        ledger_key,
        settled_amount,
        beneficiaries.len()
    );

    emit_cpi!(BeneficiariesSet {
        ledger: ledger_key,
        admin,
        decimal_places,
        beneficiary_count: beneficiaries.len() as u8,
        settled_amount,
    });

    Ok(())
}
