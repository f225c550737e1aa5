use anchor_lang::prelude::*;

declare_id!("H3eYcELNCrf1iTxVukbkfxu1uzuzSbgeZqjAPjhZWQbe");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Airdrop Program
 *
 * Pays out tokens against claim messages that distributors sign off-chain.
 * Nobody has to execute the transfer at claim time: the recipient submits
 * the signed message and the program authorizes the payout itself.
 *
 * Key Features:
 * - Ed25519 precompile verification, read back through the instructions sysvar
 * - Multi-distributor quorum (every configured distributor must sign)
 * - Domain separation by program id and message version
 * - Signature deadlines checked against the cluster clock
 * - Exactly-once claims through per-(project, nonce) nullifier PDAs
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Global Config PDA: Distributor set, ["global_config"]
 * - Project PDA: Mint and token pool, ["project", nonce]
 * - Claim Nullifier PDAs: One per consumed nonce, ["nullifier", project, nonce]
 *
 * Workflow:
 * 1. Authority creates the global config with the distributor set
 * 2. Authority creates a project and funds its token pool
 * 3. Distributors sign a claim message for a recipient
 * 4. Recipient submits [Ed25519 verify, claim] in one transaction
 */
#[program]
pub mod airdrop {
    use super::*;

    /**
     * Creates the global distributor configuration
     *
     * @param ctx - Account context containing authority and global config
     * @param distributors - Distributor keys that must all sign each claim
     *
     * Access Control: First caller only (singleton PDA)
     */
    pub fn create_global_config(
        ctx: Context<CreateGlobalConfig>,
        distributors: Vec<Pubkey>,
    ) -> Result<()> {
        handle_create_global_config(ctx, distributors)
    }

    /**
     * Creates a project and its token pool
     *
     * @param ctx - Account context containing project, mint and pool accounts
     * @param nonce - Project identity used as the PDA seed
     *
     * Access Control: Any signer
     */
    pub fn create_project(ctx: Context<CreateProject>, nonce: u64) -> Result<()> {
        handle_create_project(ctx, nonce)
    }

    /**
     * Claims tokens with a distributor-signed message
     *
     * The Ed25519 verification instruction must immediately precede this
     * instruction in the same transaction.
     *
     * @param ctx - Account context containing project, pool, nullifier and sysvar accounts
     * @param nonce - Nonce of the signed message; each nonce can be claimed once per project
     *
     * Access Control: The recipient named in the signed message
     */
    pub fn claim(ctx: Context<Claim>, nonce: u64) -> Result<()> {
        handle_claim(ctx, nonce)
    }

    /**
     * Verifies a legacy `{ recipient, amount }` message
     *
     * @param ctx - Account context containing recipient, distributor(s) and sysvar
     *
     * Access Control: The recipient named in the signed message
     * Note: Attestation only, no tokens are transferred
     */
    pub fn verify_legacy_claim(ctx: Context<VerifyLegacyClaim>) -> Result<()> {
        handle_verify_legacy_claim(ctx)
    }
}
