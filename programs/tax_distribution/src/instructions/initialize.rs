use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{transfer_lamports, vault_rent_reserve};
use anchor_lang::prelude::*;

/**
 * Account context for creating a new tax distribution ledger
 *
 * This instruction initializes a ledger and its vault:
 * - Creates the ledger PDA holding the weight table and admin
 * - Tops the vault PDA up to its rent-exempt reserve
 * - Makes the signer the admin of the ledger
 *
 * Access Control: Anyone; the signer becomes admin
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(seed_id: u64)]
pub struct Initialize<'info> {
    /// The ledger account (PDA)
    /// - Sized once for MAX_BENEFICIARIES entries
    /// - Derived from: ["ledger", admin, seed_id]
    #[account(
        init,
        payer = admin,
        space = TaxLedger::LEN,
        seeds = [
            LEDGER_SEED.as_bytes(),
            admin.key().as_ref(),
            seed_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub ledger: Account<'info, TaxLedger>,

    /// Vault (PDA) that receives the income to distribute
    /// - System-owned, no data; deposits are plain lamport transfers
    /// - Derived from: ["vault", ledger_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), ledger.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    /// Creator and first admin of the ledger
    /// - Pays for the ledger account and the vault rent reserve
    #[account(mut)]
    pub admin: Signer<'info>,

    /// System program for account creation and transfers
    pub system_program: Program<'info, System>,
}

/**
 * Creates a new ledger with its initial weight table
 *
 * @param ctx - The account context containing all required accounts
 * @param seed_id - Creator-chosen id distinguishing ledgers of one creator
 * @param beneficiaries - Initial weight table
 * @param decimal_places - Precision the weights are expressed in
 */
pub fn handle_initialize(
    ctx: Context<Initialize>,
    seed_id: u64,
    beneficiaries: Vec<BeneficiaryWeight>,
    decimal_places: u8,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let ledger_key = ctx.accounts.ledger.key();

    // Validates the table before anything is paid
    let ledger = TaxLedger::create(
        admin,
        seed_id,
        ctx.bumps.ledger,
        ctx.bumps.vault,
        &beneficiaries,
        decimal_places,
    )?;
    ctx.accounts.ledger.set_inner(ledger);

    // The vault must stay rent exempt; lamports already sent to it count as income
    let shortfall = vault_rent_reserve()?.saturating_sub(ctx.accounts.vault.lamports());
    if shortfall > 0 {
        transfer_lamports(
            ctx.accounts.admin.to_account_info(),
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
            shortfall,
            None,
        )?;
    }

    msg!(
        "Ledger {} initialized: {} beneficiaries, {} decimal places",
        ledger_key,
        beneficiaries.len(),
        decimal_places
    );

    emit_cpi!(LedgerInitialized {
        ledger: ledger_key,
        vault: ctx.accounts.vault.key(),
        admin,
        seed_id,
        decimal_places,
        beneficiary_count: beneficiaries.len() as u8,
    });

    Ok(())
}
