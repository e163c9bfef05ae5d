use anchor_lang::prelude::*;

/// Event emitted when a new ledger is created
#[event]
pub struct LedgerInitialized {
    /// The ledger account public key
    pub ledger: Pubkey,
    /// Vault holding the distributable lamports
    pub vault: Pubkey,
    /// Initial admin (the initializing signer)
    pub admin: Pubkey,
    /// Creator-chosen id used in the ledger PDA seeds
    pub seed_id: u64,
    /// Decimal places the weights are expressed in
    pub decimal_places: u8,
    /// Number of beneficiaries in the initial weight table
    pub beneficiary_count: u8,
}

/// Event emitted when lamports are deposited through the program
#[event]
pub struct Deposited {
    /// The ledger account public key
    pub ledger: Pubkey,
    /// Account the lamports came from
    pub depositor: Pubkey,
    /// Amount of lamports deposited
    pub amount: u64,
}

/// Event emitted for every payout out of the vault
/// - One per withdraw, one per settled beneficiary, one per emergency drain
#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct CoinReceived {
    /// Account that received the lamports
    pub receiver: Pubkey,
    /// Amount of lamports paid
    pub amount: u64,
}

/// Event emitted when the weight table is replaced
#[event]
pub struct BeneficiariesSet {
    /// The ledger account public key
    pub ledger: Pubkey,
    /// Admin who replaced the table
    pub admin: Pubkey,
    /// Decimal places of the new table
    pub decimal_places: u8,
    /// Number of beneficiaries in the new table
    pub beneficiary_count: u8,
    /// Total lamports paid to the previous beneficiaries during settlement
    pub settled_amount: u64,
}

/// Event emitted when the admin role moves to another account
#[event]
pub struct AdminChanged {
    /// The ledger account public key
    pub ledger: Pubkey,
    /// Admin before the change
    pub previous_admin: Pubkey,
    /// Admin after the change
    pub new_admin: Pubkey,
}
