use anchor_lang::prelude::*;
use crate::constants::PROJECT_SEED;

/**
 * Project account
 *
 * A project owns a token pool from which signed claims are paid out.
 * The project PDA is the token authority of the pool.
 *
 * Derivation: ["project", nonce_le]
 */
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Project {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when signing pool transfers
    pub bump: u8,

    /// The nonce used as a seed for the PDA
    /// - Also the project identity carried in signed messages
    pub nonce: u64,

    /// The authority that created this project
    pub authority: Pubkey,

    /// The mint of the token being distributed
    pub mint: Pubkey,

    /// Token pool (associated token account of the project PDA)
    pub token_account: Pubkey,
}

impl Project {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + Project::INIT_SPACE;

    /// Derives the project address and bump for a nonce
    pub fn find_address(nonce: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[PROJECT_SEED, &nonce.to_le_bytes()], &crate::ID)
    }
}
