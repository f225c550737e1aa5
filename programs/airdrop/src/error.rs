use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    // Transaction shape and wire format errors
    #[msg("Invalid instruction sysvar")]
    InvalidInstructionSysvar,
    #[msg("Claim must be preceded by an Ed25519 verification instruction")]
    MissingPrecedingInstruction,
    #[msg("Expected Ed25519 program id")]
    BadSignatureProgram,
    #[msg("Ed25519 instruction must not reference accounts")]
    BadSignatureAccounts,
    #[msg("Malformed Ed25519 instruction data")]
    InvalidPrecompileData,
    #[msg("Ed25519 offsets must reference the precompile instruction itself")]
    CrossInstructionReference,
    #[msg("All signatures must cover the same message")]
    InconsistentMessage,
    #[msg("Signed message has an unexpected length")]
    MalformedMessage,

    // Authorization errors
    #[msg("Distributor public key mismatch")]
    DistributorMismatch,

    // Message content errors
    #[msg("Program ID mismatch")]
    ProgramIdMismatch,
    #[msg("Version mismatch")]
    VersionMismatch,
    #[msg("Signature deadline has expired")]
    DeadlineExpired,
    #[msg("Nonce mismatch - signature replay attack detected")]
    NonceMismatch,
    #[msg("Recipient mismatch in message")]
    RecipientMismatch,
    #[msg("Mint mismatch")]
    MintMismatch,
    #[msg("Project nonce mismatch")]
    ProjectMismatch,
    #[msg("Claim amount must be greater than zero")]
    ZeroAmount,

    // Configuration errors
    #[msg("Distributor set cannot be empty")]
    EmptyDistributorSet,
    #[msg("Too many distributors")]
    TooManyDistributors,
    #[msg("Distributor keys must be unique")]
    DuplicateDistributor,
    #[msg("Token mint does not match project's token mint")]
    TokenMintMismatch,
    #[msg("Token account does not match project's token pool")]
    TokenAccountMismatch,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
