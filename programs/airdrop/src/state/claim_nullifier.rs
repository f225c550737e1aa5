use anchor_lang::prelude::*;
use crate::constants::NULLIFIER_SEED;

/**
 * Claim nullifier account
 *
 * Existence of this account proves that a (project, nonce) pair has been
 * consumed. It is created with `init`, so a second claim for the same pair
 * fails when the system program finds the address already in use.
 *
 * Derivation: ["nullifier", project_key, nonce_le]
 *
 * Lifecycle:
 * 1. Created by a successful claim
 * 2. Never updated or closed
 */
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct ClaimNullifier {
    /// The nonce that has been used
    pub nonce: u64,
    /// The project this nullifier belongs to
    pub project: Pubkey,
    /// The recipient who claimed with this nonce
    pub recipient: Pubkey,
    /// Timestamp when the nonce was used
    pub used_at: i64,
}

impl ClaimNullifier {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + ClaimNullifier::INIT_SPACE;

    /// Derives the nullifier address for a (project, nonce) pair
    pub fn find_address(project: &Pubkey, nonce: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[NULLIFIER_SEED, project.as_ref(), &nonce.to_le_bytes()],
            &crate::ID,
        )
    }
}
