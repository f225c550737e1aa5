use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, Mint, TransferChecked};
use crate::constants::PROJECT_SEED;
use crate::state::Project;

/// Pays `amount` out of a project's token pool, signing as the project PDA
///
/// Uses `transfer_checked`, so it works for both SPL Token and Token 2022.
/// An insufficient pool balance fails inside the token program and is
/// returned unchanged.
pub fn transfer_from_project<'info>(
    project: &Account<'info, Project>,
    pool: AccountInfo<'info>,
    destination: AccountInfo<'info>,
    mint: &InterfaceAccount<'info, Mint>,
    token_program: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let nonce_bytes = project.nonce.to_le_bytes();
    let bump = [project.bump];
    let seeds: &[&[u8]] = &[PROJECT_SEED, nonce_bytes.as_ref(), bump.as_ref()];
    let signer = &[seeds];

    let cpi_accounts = TransferChecked {
        from: pool,
        mint: mint.to_account_info(),
        to: destination,
        authority: project.to_account_info(),
    };

    transfer_checked(
        CpiContext::new_with_signer(token_program, cpi_accounts, signer),
        amount,
        mint.decimals,
    )
}
