use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for creating the global config
 *
 * The global config is a singleton PDA. `init` makes a second creation
 * fail, so the distributor set can only be configured once.
 *
 * Access Control: Any signer may create it once; it becomes the authority
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateGlobalConfig<'info> {
    /// The authority that creates and pays for the configuration
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The global config PDA
    /// - Derived from: ["global_config"]
    #[account(
        init,
        payer = authority,
        space = GlobalConfig::LEN,
        seeds = [GLOBAL_CONFIG_SEED],
        bump
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Stores the distributor set that must sign every claim
 *
 * @param ctx - The account context containing the authority and global config
 * @param distributors - Distinct distributor public keys, 1 to MAX_DISTRIBUTORS
 */
pub fn handle_create_global_config(
    ctx: Context<CreateGlobalConfig>,
    distributors: Vec<Pubkey>,
) -> Result<()> {
    GlobalConfig::validate_distributors(&distributors)?;

    let authority = ctx.accounts.authority.key();
    ctx.accounts.global_config.set_inner(GlobalConfig {
        authority,
        distributors: distributors.clone(),
    });

    emit_cpi!(GlobalConfigCreated {
        global_config: ctx.accounts.global_config.key(),
        authority,
        distributors,
    });

    Ok(())
}
