use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

/// Native lamport transfer through the system program.
/// Pass `signer_seeds` when `from` is a PDA owned by the system program.
pub fn transfer_lamports<'a>(
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    system_program: AccountInfo<'a>,
    amount: u64,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = Transfer { from, to };

    let cpi_ctx = if let Some(seeds) = signer_seeds {
        CpiContext::new_with_signer(system_program, cpi_accounts, seeds)
    } else {
        CpiContext::new(system_program, cpi_accounts)
    };

    transfer(cpi_ctx, amount)
}

/// Lamports a zero-data system account must keep to stay rent exempt.
/// This part of the vault balance is never distributed.
pub fn vault_rent_reserve() -> Result<u64> {
    Ok(Rent::get()?.minimum_balance(0))
}
