use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for creating a project
 *
 * Creates the project PDA and its token pool, the project's associated
 * token account. Funding the pool is an ordinary token transfer done
 * outside this program.
 *
 * Access Control: Any signer; it becomes the project authority
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(nonce: u64)]
pub struct CreateProject<'info> {
    /// The authority that will manage this project
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The project PDA account to be created
    /// - Derived from: ["project", nonce_le]
    #[account(
        init,
        payer = authority,
        space = Project::LEN,
        seeds = [PROJECT_SEED, nonce.to_le_bytes().as_ref()],
        bump
    )]
    pub project: Account<'info, Project>,

    /// The mint of the token to be distributed
    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The token pool owned by the project PDA
    #[account(
        init,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = project,
        associated_token::token_program = token_program,
    )]
    pub project_token_account: InterfaceAccount<'info, TokenAccount>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Associated token program for the pool
    pub associated_token_program: Program<'info, AssociatedToken>,
}

/**
 * Creates a project identified by `nonce`
 *
 * @param ctx - The account context containing the project, mint and pool
 * @param nonce - Project identity, also signed into every claim message
 */
pub fn handle_create_project(ctx: Context<CreateProject>, nonce: u64) -> Result<()> {
    let project = &mut ctx.accounts.project;

    project.bump = ctx.bumps.project;
    project.nonce = nonce;
    project.authority = ctx.accounts.authority.key();
    project.mint = ctx.accounts.mint.key();
    project.token_account = ctx.accounts.project_token_account.key();

    emit_cpi!(ProjectCreated {
        project: project.key(),
        nonce,
        authority: project.authority,
        mint: project.mint,
        token_account: project.token_account,
    });

    Ok(())
}
