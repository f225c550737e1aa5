use anchor_lang::prelude::*;
use crate::constants::MESSAGE_VERSION;
use crate::error::AirdropError;
use crate::utils::authorization::{authorize_signers, DistributorRequirement};
use crate::utils::ed25519::{locate_ed25519_ix, parse_ed25519_ix_data, InstructionSource};
use crate::utils::message::*;

/// Execution-time facts a claim message is checked against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimContext {
    /// Identity of the deployed program
    pub program_id: Pubkey,
    /// Trusted clock reading
    pub current_time: i64,
    /// Nonce the nullifier will be derived from
    pub nonce: u64,
    /// Signer of the claim instruction
    pub recipient: Pubkey,
    /// Mint configured on the project
    pub mint: Pubkey,
    /// Identity of the project
    pub project_nonce: u64,
}

/// A claim that passed every check up to nullifier consumption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedClaim {
    pub message: ClaimMessage,
    pub distributors: Vec<Pubkey>,
}

/// Binds the message to this deployment and protocol version
pub fn validate_domain_separation(domain: &ClaimMessageDomain, program_id: &Pubkey) -> Result<()> {
    require_keys_eq!(domain.program_id, *program_id, AirdropError::ProgramIdMismatch);
    require!(domain.version == MESSAGE_VERSION, AirdropError::VersionMismatch);
    Ok(())
}

/// A deadline equal to the current time is still valid
pub fn validate_deadline(deadline: i64, current_time: i64) -> Result<()> {
    require!(current_time <= deadline, AirdropError::DeadlineExpired);
    Ok(())
}

pub fn validate_claim_data(data: &ClaimMessageData, context: &ClaimContext) -> Result<()> {
    require_keys_eq!(data.recipient, context.recipient, AirdropError::RecipientMismatch);
    require_keys_eq!(data.mint, context.mint, AirdropError::MintMismatch);
    require!(
        data.project_nonce == context.project_nonce,
        AirdropError::ProjectMismatch
    );
    require!(data.amount > 0, AirdropError::ZeroAmount);
    Ok(())
}

/// Runs every claim check in order, stopping at the first failure
pub fn validate_claim_message(message: &ClaimMessage, context: &ClaimContext) -> Result<()> {
    validate_domain_separation(&message.domain, &context.program_id)?;
    validate_deadline(message.domain.deadline, context.current_time)?;
    require!(
        message.domain.nonce == context.nonce,
        AirdropError::NonceMismatch
    );
    validate_claim_data(&message.data, context)
}

/**
 * Verifies a claim against the Ed25519 instruction that precedes it
 *
 * The precompile has already rejected the transaction if any signature is
 * invalid, so what remains is to recover which keys signed which bytes:
 * 1. Locate the Ed25519 instruction at `current_index - 1`
 * 2. Parse its signers and shared message
 * 3. Decode the message
 * 4. Check the signers satisfy the distributor requirement
 * 5. Validate the message against the execution context
 */
pub fn verify_claim(
    source: &impl InstructionSource,
    requirement: &DistributorRequirement,
    context: &ClaimContext,
) -> Result<VerifiedClaim> {
    let ed_ix = locate_ed25519_ix(source)?;
    let parsed = parse_ed25519_ix_data(&ed_ix.data)?;
    let message = SignedMessage::decode(parsed.message)?.into_claim()?;

    let distributors = authorize_signers(requirement, &parsed.signer_keys())?;
    validate_claim_message(&message, context)?;

    Ok(VerifiedClaim {
        message,
        distributors,
    })
}

/// Verifies a legacy `{ recipient, amount }` message signed by `requirement`
pub fn verify_legacy_claim(
    source: &impl InstructionSource,
    requirement: &DistributorRequirement,
    recipient: &Pubkey,
) -> Result<(LegacyClaimMessage, Vec<Pubkey>)> {
    let ed_ix = locate_ed25519_ix(source)?;
    let parsed = parse_ed25519_ix_data(&ed_ix.data)?;
    let message = SignedMessage::decode(parsed.message)?.into_legacy()?;

    let distributors = authorize_signers(requirement, &parsed.signer_keys())?;

    require_keys_eq!(message.recipient, *recipient, AirdropError::RecipientMismatch);
    require!(message.amount > 0, AirdropError::ZeroAmount);

    Ok((message, distributors))
}
