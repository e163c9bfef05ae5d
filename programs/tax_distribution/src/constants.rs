use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds and the limits that bound the size of a ledger account.
 */

#[constant]
/// ===== PDA SEED CONSTANTS =====

/// Seed for ledger PDA derivation
/// - Used in: ["ledger", creator, seed_id]
/// - seed_id lets one creator run several independent ledgers
pub const LEDGER_SEED: &str = "ledger";

/// Seed for vault PDA derivation
/// - Used in: ["vault", ledger_key]
/// - System-owned account holding the lamports being distributed
/// - Deposits are plain system transfers to this address
pub const VAULT_SEED: &str = "vault";

/// ===== WEIGHT TABLE LIMITS =====

/// Maximum number of beneficiaries in one weight table
/// - The ledger account is allocated once for this many entries
/// - Also bounds the number of transfers a settlement performs
pub const MAX_BENEFICIARIES: usize = 16;

/// Maximum decimal places used to express weights
/// - 10^18 is the largest power of ten that fits in a u64 weight
pub const MAX_DECIMAL_PLACES: u8 = 18;
