use anchor_lang::prelude::*;

/// Event emitted when the global config is created
#[event]
pub struct GlobalConfigCreated {
    /// The global config account public key
    pub global_config: Pubkey,
    /// Authority that created the config
    pub authority: Pubkey,
    /// Distributors that must all sign a claim message
    pub distributors: Vec<Pubkey>,
}

/// Event emitted when a new project is created
#[event]
pub struct ProjectCreated {
    /// The project account public key
    pub project: Pubkey,
    /// Nonce of the project
    pub nonce: u64,
    /// Authority of the project
    pub authority: Pubkey,
    /// Token mint address
    pub mint: Pubkey,
    /// Token pool owned by the project PDA
    pub token_account: Pubkey,
}

/// Event emitted when a signed claim is redeemed
#[event]
pub struct TokensClaimed {
    /// The project the tokens were paid from
    pub project: Pubkey,
    /// Recipient of the tokens
    pub recipient: Pubkey,
    /// Token mint address
    pub mint: Pubkey,
    /// Amount transferred
    pub amount: u64,
    /// Nonce consumed by this claim
    pub nonce: u64,
    /// Distributors whose signatures authorized the claim
    pub distributors: Vec<Pubkey>,
}

/// Event emitted when a legacy claim message is verified
#[event]
pub struct LegacyClaimVerified {
    /// Recipient named in the message
    pub recipient: Pubkey,
    /// Amount named in the message
    pub amount: u64,
    /// Distributors whose signatures were checked
    pub distributors: Vec<Pubkey>,
}
