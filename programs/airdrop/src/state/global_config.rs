use anchor_lang::prelude::*;
use crate::constants::MAX_DISTRIBUTORS;
use crate::error::AirdropError;

/**
 * Global configuration account
 *
 * Holds the set of distributors whose signatures authorize claims.
 * Every distributor in the set must sign a claim message.
 *
 * Derivation: ["global_config"]
 *
 * Lifecycle:
 * 1. Created once by an authority
 * 2. Read by every claim, at claim time
 */
#[account]
#[derive(InitSpace, Debug)]
pub struct GlobalConfig {
    /// The authority that created the configuration
    pub authority: Pubkey,

    /// The distributor public keys (all must sign)
    #[max_len(MAX_DISTRIBUTORS)]
    pub distributors: Vec<Pubkey>,
}

impl GlobalConfig {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + max serialized size
    pub const LEN: usize = 8 + GlobalConfig::INIT_SPACE;

    /// Checks that a distributor set is non-empty, bounded and has no repeated key
    pub fn validate_distributors(distributors: &[Pubkey]) -> Result<()> {
        require!(!distributors.is_empty(), AirdropError::EmptyDistributorSet);
        require!(
            distributors.len() <= MAX_DISTRIBUTORS,
            AirdropError::TooManyDistributors
        );

        for (i, key) in distributors.iter().enumerate() {
            require!(
                !distributors[i + 1..].contains(key),
                AirdropError::DuplicateDistributor
            );
        }

        Ok(())
    }
}
