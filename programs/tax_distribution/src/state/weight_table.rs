use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;

/**
 * Requested allocation for one beneficiary
 *
 * Instruction argument used by initialize and set_beneficiaries.
 * The weight is a fixed-point fraction scaled by 10^decimal_places.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeneficiaryWeight {
    pub address: Pubkey,
    pub weight: u64,
}

/**
 * Beneficiary entry stored in the ledger
 *
 * `withdrawn` counts the lamports paid to this address under the
 * current weight table generation. It never decreases while the
 * generation is active and restarts at 0 when the table is replaced.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Beneficiary {
    /// Account entitled to a share of the vault income
    pub address: Pubkey,
    /// Share of income, scaled by 10^decimal_places
    pub weight: u64,
    /// Cumulative lamports paid out in this generation
    pub withdrawn: u64,
}

impl Beneficiary {
    /// Serialized size: address + weight + withdrawn
    pub const LEN: usize = 32 + 8 + 8;
}

/**
 * Validated weight table
 *
 * Invariant: entries are non-empty, addresses are pairwise distinct and
 * the weights sum to exactly 10^decimal_places. Every constructor goes
 * through `validate`, so a stored table always partitions 100% of income.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct WeightTable {
    /// Fixed-point precision of the weights
    pub decimal_places: u8,
    /// Beneficiaries in canonical (insertion) order
    pub entries: Vec<Beneficiary>,
}

impl WeightTable {
    /// Serialized size for a table holding MAX_BENEFICIARIES entries
    /// - decimal_places (1) + vec length prefix (4) + entries
    pub const LEN: usize = 1 + 4 + MAX_BENEFICIARIES * Beneficiary::LEN;

    /// Returns 10^decimal_places
    pub fn scale_for(decimal_places: u8) -> Result<u64> {
        require!(
            decimal_places <= MAX_DECIMAL_PLACES,
            TaxDistributionError::UnsupportedDecimalPlaces
        );
        10u64
            .checked_pow(decimal_places as u32)
            .ok_or_else(|| error!(TaxDistributionError::UnsupportedDecimalPlaces))
    }

    /// Checks that `entries` partition exactly 100% at the given precision.
    /// No tolerance is applied to the sum.
    pub fn validate(entries: &[BeneficiaryWeight], decimal_places: u8) -> Result<()> {
        let scale = Self::scale_for(decimal_places)?;

        require!(!entries.is_empty(), TaxDistributionError::InvalidWeights);
        require!(
            entries.len() <= MAX_BENEFICIARIES,
            TaxDistributionError::TooManyBeneficiaries
        );

        for (i, entry) in entries.iter().enumerate() {
            let duplicated = entries[..i].iter().any(|e| e.address == entry.address);
            require!(!duplicated, TaxDistributionError::InvalidWeights);
        }

        // u64 weights cannot overflow a u128 sum at MAX_BENEFICIARIES entries
        let total_weight: u128 = entries.iter().map(|e| e.weight as u128).sum();
        require!(
            total_weight == scale as u128,
            TaxDistributionError::InvalidWeights
        );

        Ok(())
    }

    /// Builds a fresh generation: validated weights, every `withdrawn` at 0
    pub fn new(entries: &[BeneficiaryWeight], decimal_places: u8) -> Result<Self> {
        Self::validate(entries, decimal_places)?;

        Ok(Self {
            decimal_places,
            entries: entries
                .iter()
                .map(|e| Beneficiary {
                    address: e.address,
                    weight: e.weight,
                    withdrawn: 0,
                })
                .collect(),
        })
    }

    pub fn scale(&self) -> Result<u64> {
        Self::scale_for(self.decimal_places)
    }

    pub fn get(&self, address: &Pubkey) -> Option<&Beneficiary> {
        self.entries.iter().find(|b| b.address == *address)
    }

    pub fn get_mut(&mut self, address: &Pubkey) -> Option<&mut Beneficiary> {
        self.entries.iter_mut().find(|b| b.address == *address)
    }

    /// floor(amount * weight / scale) for the given beneficiary.
    /// The product is taken in u128 so it cannot overflow.
    pub fn fraction_of(&self, address: &Pubkey, amount: u64) -> Result<u64> {
        let beneficiary = self
            .get(address)
            .ok_or_else(|| error!(TaxDistributionError::UnknownBeneficiary))?;
        let scale = self.scale()?;

        let share = (amount as u128) * (beneficiary.weight as u128) / (scale as u128);
        u64::try_from(share).map_err(|_| error!(TaxDistributionError::ArithmeticOverflow))
    }

    /// Sum of `withdrawn` over the current entries
    pub fn total_withdrawn(&self) -> Result<u64> {
        self.entries.iter().try_fold(0u64, |acc, b| {
            acc.checked_add(b.withdrawn)
                .ok_or_else(|| error!(TaxDistributionError::ArithmeticOverflow))
        })
    }
}
