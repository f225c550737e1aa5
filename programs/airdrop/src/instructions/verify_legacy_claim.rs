use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions as ix_sysvar;
use crate::event::*;
use crate::utils::{verify_legacy_claim, DistributorRequirement};

/**
 * Account context for verifying a legacy claim message
 *
 * Legacy messages carry only `{ recipient, amount }`. Without a nonce or
 * domain they cannot be made single-use, so this instruction only attests
 * that the distributor(s) signed the message. It moves no tokens.
 *
 * Access Control: The recipient named in the signed message
 */
#[event_cpi]
#[derive(Accounts)]
pub struct VerifyLegacyClaim<'info> {
    /// The recipient (must match the recipient in the signed message)
    pub recipient: Signer<'info>,

    /// Expected distributor pubkey
    /// CHECK: Compared against the keys recovered from the Ed25519 instruction
    pub expected_distributor: UncheckedAccount<'info>,

    /// Second distributor when the message must be signed by a pair
    /// CHECK: Compared against the keys recovered from the Ed25519 instruction
    pub co_distributor: Option<UncheckedAccount<'info>>,

    /// The sysvar containing the full transaction's instructions
    /// CHECK: Validated by requiring its well-known address
    #[account(address = ix_sysvar::ID)]
    pub instruction_sysvar: AccountInfo<'info>,
}

pub fn handle_verify_legacy_claim(ctx: Context<VerifyLegacyClaim>) -> Result<()> {
    let expected = ctx.accounts.expected_distributor.key();
    let requirement = match &ctx.accounts.co_distributor {
        Some(co_distributor) => DistributorRequirement::Pair(expected, co_distributor.key()),
        None => DistributorRequirement::Single(expected),
    };

    let (message, distributors) = verify_legacy_claim(
        &ctx.accounts.instruction_sysvar,
        &requirement,
        &ctx.accounts.recipient.key(),
    )?;

    emit_cpi!(LegacyClaimVerified {
        recipient: message.recipient,
        amount: message.amount,
        distributors,
    });

    Ok(())
}
