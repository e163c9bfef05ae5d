use anchor_lang::prelude::*;
use crate::state::*;
use crate::event::*;

/**
 * Account context for handing the admin role to another account
 *
 * Beneficiary accounting is untouched; no settlement happens.
 *
 * Access Control: Only the admin can change the admin
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ChangeAdmin<'info> {
    /// The ledger to update
    #[account(mut)]
    pub ledger: Account<'info, TaxLedger>,

    /// The current admin
    pub admin: Signer<'info>,
}

pub fn handle_change_admin(ctx: Context<ChangeAdmin>, new_admin: Pubkey) -> Result<()> {
    let previous_admin = ctx.accounts.admin.key();
    let ledger = &mut ctx.accounts.ledger;

    ledger.change_admin(&previous_admin, new_admin)?;

    msg!("Admin changed from {} to {}", previous_admin, new_admin);

    emit_cpi!(AdminChanged {
        ledger: ledger.key(),
        previous_admin,
        new_admin,
    });

    Ok(())
}
