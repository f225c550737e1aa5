use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions as ix_sysvar;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{transfer_from_project, verify_claim, ClaimContext, DistributorRequirement};

/**
 * Account context for claiming tokens
 *
 * This instruction redeems a claim message signed off-chain by every
 * configured distributor. The signatures are checked by an Ed25519
 * precompile instruction that must sit immediately before this one in the
 * same transaction.
 *
 * Access Control: The recipient named in the signed message
 *
 * Replay protection: the nullifier PDA is created with `init`. A second
 * claim for the same (project, nonce) fails because the address is already
 * in use, which aborts the whole transaction.
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(nonce: u64)]
pub struct Claim<'info> {
    /// The recipient of the airdrop
    /// - Must match the recipient in the signed message
    /// - Pays for the nullifier and, if needed, its token account
    #[account(mut)]
    pub recipient: Signer<'info>,

    /// Global config holding the distributor set
    /// - Read at claim time, so the current set is the one enforced
    #[account(
        seeds = [GLOBAL_CONFIG_SEED],
        bump
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// The project paying out the claim
    /// - Derived from: ["project", nonce_le]
    #[account(
        seeds = [PROJECT_SEED, project.nonce.to_le_bytes().as_ref()],
        bump = project.bump
    )]
    pub project: Account<'info, Project>,

    /// The project's token mint
    #[account(
        address = project.mint @ AirdropError::TokenMintMismatch,
        mint::token_program = token_program,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Token pool of the project
    #[account(
        mut,
        address = project.token_account @ AirdropError::TokenAccountMismatch,
        token::mint = mint,
        token::token_program = token_program,
    )]
    pub project_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Recipient's associated token account, created on first claim
    #[account(
        init_if_needed,
        payer = recipient,
        associated_token::mint = mint,
        associated_token::authority = recipient,
        associated_token::token_program = token_program,
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Nullifier marking (project, nonce) as consumed
    /// - Derived from: ["nullifier", project_key, nonce_le]
    #[account(
        init,
        payer = recipient,
        space = ClaimNullifier::LEN,
        seeds = [NULLIFIER_SEED, project.key().as_ref(), nonce.to_le_bytes().as_ref()],
        bump
    )]
    pub nullifier: Account<'info, ClaimNullifier>,

    /// The sysvar containing the full transaction's instructions
    /// CHECK: Validated by requiring its well-known address
    #[account(address = ix_sysvar::ID)]
    pub instruction_sysvar: AccountInfo<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Associated token program for the recipient account
    pub associated_token_program: Program<'info, AssociatedToken>,
}

/**
 * Processes a signed claim
 *
 * @param ctx - The account context containing all required accounts
 * @param nonce - Nonce signed into the message domain, seeds the nullifier
 *
 * Validation Process:
 * 1. Recover signers and message from the preceding Ed25519 instruction
 * 2. Require every configured distributor among the signers
 * 3. Check program id, version, deadline, nonce, recipient, mint, project and amount
 * 4. Record the nullifier and transfer `amount` from the project pool
 */
pub fn handle_claim(ctx: Context<Claim>, nonce: u64) -> Result<()> {
    // ===== VALIDATION PHASE =====

    let current_time = Clock::get()?.unix_timestamp;
    let project = &ctx.accounts.project;

    let claim_context = ClaimContext {
        program_id: crate::ID,
        current_time,
        nonce,
        recipient: ctx.accounts.recipient.key(),
        mint: project.mint,
        project_nonce: project.nonce,
    };
    let requirement = DistributorRequirement::Set(&ctx.accounts.global_config.distributors);

    let verified = verify_claim(&ctx.accounts.instruction_sysvar, &requirement, &claim_context)?;
    let amount = verified.message.data.amount;

    // ===== EFFECTS PHASE =====

    let project_key = project.key();
    ctx.accounts.nullifier.set_inner(ClaimNullifier {
        nonce,
        project: project_key,
        recipient: claim_context.recipient,
        used_at: current_time,
    });

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    transfer_from_project(
        &ctx.accounts.project,
        ctx.accounts.project_token_account.to_account_info(),
        ctx.accounts.recipient_token_account.to_account_info(),
        &ctx.accounts.mint,
        ctx.accounts.token_program.to_account_info(),
        amount,
    )?;

    emit_cpi!(TokensClaimed {
        project: project_key,
        recipient: claim_context.recipient,
        mint: claim_context.mint,
        amount,
        nonce,
        distributors: verified.distributors,
    });

    Ok(())
}
