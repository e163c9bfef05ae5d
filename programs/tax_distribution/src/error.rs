use anchor_lang::prelude::*;

#[error_code]
pub enum TaxDistributionError {
    // Access control errors
    #[msg("Address is not allowed to perform this operation")]
    NotAdmin,

    // Weight table errors
    #[msg("The sum of weights must be exactly 100%, with unique addresses and at least one beneficiary")]
    InvalidWeights,
    #[msg("The number of decimal places used in the weights is larger than supported")]
    UnsupportedDecimalPlaces,
    #[msg("Too many beneficiaries")]
    TooManyBeneficiaries,

    // Beneficiary errors
    #[msg("Cannot load beneficiary")]
    UnknownBeneficiary,
    #[msg("Requested amount exceeds the accrued entitlement")]
    InsufficientEntitlement,
    #[msg("Nothing to withdraw")]
    NothingToWithdraw,

    // Transfer errors
    #[msg("Native token transfer failed")]
    TransferFailed,
    #[msg("Invalid amount")]
    InvalidAmount,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Ledger accounting invariant violated")]
    InvariantViolation,
}
