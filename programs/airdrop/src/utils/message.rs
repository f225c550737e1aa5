use anchor_lang::prelude::*;
use crate::error::AirdropError;

/// Domain fields that bind a signed message to one deployment and version
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClaimMessageDomain {
    pub program_id: Pubkey,
    pub version: u8,
    pub nonce: u64,
    pub deadline: i64,
}

/// Claim payload
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClaimMessageData {
    pub recipient: Pubkey,
    pub mint: Pubkey,
    pub project_nonce: u64,
    pub amount: u64,
}

/// The message distributors sign: domain followed by data, no padding
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClaimMessage {
    pub domain: ClaimMessageDomain,
    pub data: ClaimMessageData,
}

impl ClaimMessage {
    /// program_id(32) + version(1) + nonce(8) + deadline(8) + recipient(32) + mint(32) + project_nonce(8) + amount(8)
    pub const LEN: usize = 32 + 1 + 8 + 8 + 32 + 32 + 8 + 8;
}

/// Earlier protocol shape: recipient and amount only
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct LegacyClaimMessage {
    pub recipient: Pubkey,
    pub amount: u64,
}

impl LegacyClaimMessage {
    /// recipient(32) + amount(8)
    pub const LEN: usize = 32 + 8;
}

/// A decoded message, told apart by its exact length
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignedMessage {
    Claim(ClaimMessage),
    Legacy(LegacyClaimMessage),
}

impl SignedMessage {
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let decoded = match bytes.len() {
            ClaimMessage::LEN => ClaimMessage::try_from_slice(bytes).map(Self::Claim),
            LegacyClaimMessage::LEN => LegacyClaimMessage::try_from_slice(bytes).map(Self::Legacy),
            _ => return err!(AirdropError::MalformedMessage),
        };
        decoded.map_err(|_| error!(AirdropError::MalformedMessage))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let written = match self {
            Self::Claim(message) => message.serialize(&mut bytes),
            Self::Legacy(message) => message.serialize(&mut bytes),
        };
        written.map_err(|_| error!(AirdropError::MalformedMessage))?;
        Ok(bytes)
    }

    pub fn into_claim(self) -> Result<ClaimMessage> {
        match self {
            Self::Claim(message) => Ok(message),
            Self::Legacy(_) => err!(AirdropError::MalformedMessage),
        }
    }

    pub fn into_legacy(self) -> Result<LegacyClaimMessage> {
        match self {
            Self::Legacy(message) => Ok(message),
            Self::Claim(_) => err!(AirdropError::MalformedMessage),
        }
    }
}
