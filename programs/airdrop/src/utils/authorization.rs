use anchor_lang::prelude::*;
use crate::error::AirdropError;

/// Which distributors must have signed a claim message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributorRequirement<'a> {
    Single(Pubkey),
    Pair(Pubkey, Pubkey),
    /// Every member of the configured distributor set
    Set(&'a [Pubkey]),
}

impl DistributorRequirement<'_> {
    pub fn required_keys(&self) -> Vec<Pubkey> {
        match self {
            Self::Single(key) => vec![*key],
            Self::Pair(first, second) => vec![*first, *second],
            Self::Set(keys) => keys.to_vec(),
        }
    }
}

/// Checks that every required distributor is among the recovered signers
///
/// Order does not matter and extra signers are ignored. A recovered key
/// fills at most one required slot, so repeating a signature never stands
/// in for a missing distributor. Returns the required keys on success.
pub fn authorize_signers(
    requirement: &DistributorRequirement,
    signers: &[Pubkey],
) -> Result<Vec<Pubkey>> {
    let required = requirement.required_keys();
    require!(!required.is_empty(), AirdropError::DistributorMismatch);

    let mut available: Vec<Pubkey> = Vec::with_capacity(signers.len());
    for signer in signers {
        if !available.contains(signer) {
            available.push(*signer);
        }
    }

    for key in &required {
        let position = available
            .iter()
            .position(|signer| signer == key)
            .ok_or_else(|| error!(AirdropError::DistributorMismatch))?;
        available.swap_remove(position);
    }

    Ok(required)
}
