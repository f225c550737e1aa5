use anchor_lang::prelude::*;
use anchor_lang::solana_program::{instruction::Instruction, program_error::ProgramError};

use super::harness::*;
use crate::error::AirdropError;
use crate::utils::*;

const AMOUNT: u64 = 1_000_000;

fn memo_instruction() -> TxInstruction {
    TxInstruction::Raw(Instruction {
        program_id: Pubkey::new_unique(),
        accounts: vec![],
        data: b"memo".to_vec(),
    })
}

#[test]
fn test_sole_distributor_claim_pays_recipient() {
    let mut fixture = Fixture::new(1);
    let message = fixture.message(1, AMOUNT);

    fixture.submit(&message, 1).unwrap();

    assert_eq!(fixture.recipient_balance(), AMOUNT);
    assert_eq!(fixture.pool_balance(), POOL_BALANCE - AMOUNT);

    let nullifier = fixture.host.nullifier(&fixture.project, 1).unwrap();
    assert_eq!(nullifier.nonce, 1);
    assert_eq!(nullifier.project, fixture.project);
    assert_eq!(nullifier.recipient, fixture.recipient);
    assert_eq!(nullifier.used_at, NOW);
}

#[test]
fn test_replayed_transaction_fails_at_nullifier() {
    let mut fixture = Fixture::new(1);
    let message = fixture.message(1, AMOUNT);
    let transaction = fixture.transaction(&message, &fixture.all_signers(), 1);

    fixture.host.process_transaction(&transaction).unwrap();
    assert_program_error(
        fixture.host.process_transaction(&transaction),
        ProgramError::AccountAlreadyInitialized,
    );

    assert_eq!(fixture.recipient_balance(), AMOUNT);
    assert_eq!(fixture.pool_balance(), POOL_BALANCE - AMOUNT);
}

#[test]
fn test_resigned_message_for_used_nonce_fails() {
    let mut fixture = Fixture::new(1);
    fixture.submit(&fixture.message(5, AMOUNT), 5).unwrap();

    let mut resigned = fixture.message(5, 42);
    resigned.domain.deadline += 60;
    assert_program_error(
        fixture.submit(&resigned, 5),
        ProgramError::AccountAlreadyInitialized,
    );
    assert_eq!(fixture.recipient_balance(), AMOUNT);

    fixture.submit(&fixture.message(6, 42), 6).unwrap();
    assert_eq!(fixture.recipient_balance(), AMOUNT + 42);
}

#[test]
fn test_nonces_are_scoped_per_project() {
    let mut fixture = Fixture::new(1);
    let second_project = fixture
        .host
        .create_project(Pubkey::new_unique(), 2, fixture.mint, POOL_BALANCE)
        .unwrap();

    fixture.submit(&fixture.message(1, AMOUNT), 1).unwrap();

    let message = claim_message(fixture.recipient, fixture.mint, 2, 1, AMOUNT);
    let transaction = vec![
        TxInstruction::Raw(ed25519_instruction(&fixture.all_signers(), &encode(&message))),
        TxInstruction::Claim {
            recipient: fixture.recipient,
            project_nonce: 2,
            nonce: 1,
        },
    ];
    fixture.host.process_transaction(&transaction).unwrap();

    assert_eq!(fixture.recipient_balance(), 2 * AMOUNT);
    assert!(fixture.host.nullifier(&second_project, 1).is_some());
    assert!(fixture.host.nullifier(&fixture.project, 1).is_some());
}

#[test]
fn test_program_id_mismatch() {
    let mut fixture = Fixture::new(1);
    let mut message = fixture.message(1, AMOUNT);
    message.domain.program_id = Pubkey::new_unique();

    assert_airdrop_error(fixture.submit(&message, 1), AirdropError::ProgramIdMismatch);
    assert_eq!(fixture.recipient_balance(), 0);
    assert!(fixture.host.nullifier(&fixture.project, 1).is_none());
}

#[test]
fn test_claim_without_preceding_instruction() {
    let mut fixture = Fixture::new(1);

    assert_airdrop_error(
        fixture.host.process_transaction(&[fixture.claim_ix(1)]),
        AirdropError::MissingPrecedingInstruction,
    );
}

#[test]
fn test_verification_must_immediately_precede_claim() {
    let mut fixture = Fixture::new(1);
    let message = fixture.message(1, AMOUNT);
    let verify = TxInstruction::Raw(ed25519_instruction(&fixture.all_signers(), &encode(&message)));

    let separated = vec![verify.clone(), memo_instruction(), fixture.claim_ix(1)];
    assert_airdrop_error(
        fixture.host.process_transaction(&separated),
        AirdropError::BadSignatureProgram,
    );

    let after = vec![fixture.claim_ix(1), verify.clone()];
    assert_airdrop_error(
        fixture.host.process_transaction(&after),
        AirdropError::MissingPrecedingInstruction,
    );

    let after_memo = vec![memo_instruction(), fixture.claim_ix(1), verify];
    assert_airdrop_error(
        fixture.host.process_transaction(&after_memo),
        AirdropError::BadSignatureProgram,
    );

    assert_eq!(fixture.recipient_balance(), 0);
}

fn assert_rejected(tamper: fn(&mut ClaimMessage), expected: AirdropError) {
    let mut fixture = Fixture::new(1);
    let mut message = fixture.message(1, AMOUNT);
    tamper(&mut message);

    assert_airdrop_error(fixture.submit(&message, 1), expected);
    assert_eq!(fixture.recipient_balance(), 0);
    assert_eq!(fixture.pool_balance(), POOL_BALANCE);
    assert!(fixture.host.nullifier(&fixture.project, 1).is_none());
}

#[test]
fn test_signed_fields_that_disagree_with_execution() {
    assert_rejected(tamper_recipient, AirdropError::RecipientMismatch);
    assert_rejected(tamper_mint, AirdropError::MintMismatch);
    assert_rejected(tamper_project_nonce, AirdropError::ProjectMismatch);
    assert_rejected(tamper_amount, AirdropError::ZeroAmount);
    assert_rejected(tamper_program_id, AirdropError::ProgramIdMismatch);
    assert_rejected(tamper_version, AirdropError::VersionMismatch);
    assert_rejected(tamper_deadline, AirdropError::DeadlineExpired);
    assert_rejected(tamper_nonce, AirdropError::NonceMismatch);
}

fn tamper_recipient(message: &mut ClaimMessage) {
    message.data.recipient = Pubkey::new_unique();
}

fn tamper_mint(message: &mut ClaimMessage) {
    message.data.mint = Pubkey::new_unique();
}

fn tamper_project_nonce(message: &mut ClaimMessage) {
    message.data.project_nonce += 1;
}

fn tamper_amount(message: &mut ClaimMessage) {
    message.data.amount = 0;
}

fn tamper_program_id(message: &mut ClaimMessage) {
    message.domain.program_id = Pubkey::new_unique();
}

fn tamper_version(message: &mut ClaimMessage) {
    message.domain.version += 1;
}

fn tamper_deadline(message: &mut ClaimMessage) {
    message.domain.deadline = NOW - 1;
}

fn tamper_nonce(message: &mut ClaimMessage) {
    message.domain.nonce += 1;
}

#[test]
fn test_bytes_altered_after_signing_fail_verification() {
    let mut fixture = Fixture::new(1);
    let message = fixture.message(1, AMOUNT);
    let mut verify = ed25519_instruction(&fixture.all_signers(), &encode(&message));

    // Last byte of the message is the high byte of `amount`
    *verify.data.last_mut().unwrap() ^= 0x01;

    let transaction = vec![TxInstruction::Raw(verify), fixture.claim_ix(1)];
    assert_program_error(
        fixture.host.process_transaction(&transaction),
        ProgramError::InvalidArgument,
    );
    assert_eq!(fixture.recipient_balance(), 0);
}

#[test]
fn test_deadline_equal_to_clock_is_accepted() {
    let mut fixture = Fixture::new(1);

    let mut on_time = fixture.message(1, AMOUNT);
    on_time.domain.deadline = NOW;
    fixture.submit(&on_time, 1).unwrap();

    let mut late = fixture.message(2, AMOUNT);
    late.domain.deadline = NOW - 1;
    assert_airdrop_error(fixture.submit(&late, 2), AirdropError::DeadlineExpired);

    assert_eq!(fixture.recipient_balance(), AMOUNT);
}

#[test]
fn test_quorum_needs_every_distributor() {
    let mut fixture = Fixture::new(3);
    let message = fixture.message(1, AMOUNT);

    let subset = fixture.transaction(&message, &fixture.all_signers()[..2], 1);
    assert_airdrop_error(
        fixture.host.process_transaction(&subset),
        AirdropError::DistributorMismatch,
    );

    let first = &fixture.distributors[0];
    let repeated = fixture.transaction(&message, &[first, first, first], 1);
    assert_airdrop_error(
        fixture.host.process_transaction(&repeated),
        AirdropError::DistributorMismatch,
    );

    let reversed: Vec<_> = fixture.all_signers().into_iter().rev().collect();
    let transaction = fixture.transaction(&message, &reversed, 1);
    fixture.host.process_transaction(&transaction).unwrap();
    assert_eq!(fixture.recipient_balance(), AMOUNT);
}

#[test]
fn test_unknown_signer_does_not_satisfy_quorum() {
    let mut fixture = Fixture::new(2);
    let message = fixture.message(1, AMOUNT);
    let outsider = signing_key(200);

    let transaction = fixture.transaction(&message, &[&fixture.distributors[0], &outsider], 1);
    assert_airdrop_error(
        fixture.host.process_transaction(&transaction),
        AirdropError::DistributorMismatch,
    );
}

#[test]
fn test_insufficient_pool_balance_leaves_no_nullifier() {
    let mut fixture = Fixture::new(1);
    let message = fixture.message(1, POOL_BALANCE + 1);

    assert_program_error(fixture.submit(&message, 1), ProgramError::InsufficientFunds);
    assert!(fixture.host.nullifier(&fixture.project, 1).is_none());
    assert_eq!(fixture.pool_balance(), POOL_BALANCE);

    // The nonce is still available after the aborted attempt
    fixture.submit(&fixture.message(1, AMOUNT), 1).unwrap();
    assert_eq!(fixture.recipient_balance(), AMOUNT);
}

#[test]
fn test_failed_transaction_rolls_back_earlier_claims() {
    let mut fixture = Fixture::new(1);
    let good = fixture.message(1, AMOUNT);
    let mut bad = fixture.message(2, AMOUNT);
    bad.data.amount = 0;

    let mut transaction = fixture.transaction(&good, &fixture.all_signers(), 1);
    transaction.extend(fixture.transaction(&bad, &fixture.all_signers(), 2));

    assert_airdrop_error(
        fixture.host.process_transaction(&transaction),
        AirdropError::ZeroAmount,
    );
    assert_eq!(fixture.recipient_balance(), 0);
    assert!(fixture.host.nullifier(&fixture.project, 1).is_none());
}

#[test]
fn test_same_nonce_twice_in_one_transaction() {
    let mut fixture = Fixture::new(1);
    let message = fixture.message(1, AMOUNT);

    let mut transaction = fixture.transaction(&message, &fixture.all_signers(), 1);
    transaction.extend(fixture.transaction(&message, &fixture.all_signers(), 1));

    assert_program_error(
        fixture.host.process_transaction(&transaction),
        ProgramError::AccountAlreadyInitialized,
    );
    assert_eq!(fixture.recipient_balance(), 0);
}

#[test]
fn test_two_claims_in_one_transaction() {
    let mut fixture = Fixture::new(2);

    let mut transaction = fixture.transaction(&fixture.message(1, 100), &fixture.all_signers(), 1);
    transaction.extend(fixture.transaction(&fixture.message(2, 200), &fixture.all_signers(), 2));

    fixture.host.process_transaction(&transaction).unwrap();
    assert_eq!(fixture.recipient_balance(), 300);
    assert_eq!(fixture.pool_balance(), POOL_BALANCE - 300);
}

#[test]
fn test_legacy_message_cannot_claim() {
    let mut fixture = Fixture::new(1);
    let legacy = SignedMessage::Legacy(LegacyClaimMessage {
        recipient: fixture.recipient,
        amount: AMOUNT,
    })
    .to_bytes()
    .unwrap();

    let transaction = vec![
        TxInstruction::Raw(ed25519_instruction(&fixture.all_signers(), &legacy)),
        fixture.claim_ix(1),
    ];
    assert_airdrop_error(
        fixture.host.process_transaction(&transaction),
        AirdropError::MalformedMessage,
    );
}

#[test]
fn test_global_config_is_created_once() {
    let mut fixture = Fixture::new(1);

    assert_program_error(
        fixture
            .host
            .create_global_config(Pubkey::new_unique(), vec![Pubkey::new_unique()]),
        ProgramError::AccountAlreadyInitialized,
    );
}
