use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    ed25519_program,
    instruction::Instruction,
    sysvar::instructions as ix_sysvar,
};
use crate::constants::*;
use crate::error::AirdropError;

/// Read access to the ordered instruction list of the running transaction
pub trait InstructionSource {
    /// Index of the instruction currently executing
    fn current_index(&self) -> Result<usize>;

    /// Loads the instruction at `index`, executed or not
    fn load_instruction(&self, index: usize) -> Result<Instruction>;
}

/// The instructions sysvar account
impl<'info> InstructionSource for AccountInfo<'info> {
    fn current_index(&self) -> Result<usize> {
        ix_sysvar::load_current_index_checked(self)
            .map(usize::from)
            .map_err(|_| error!(AirdropError::InvalidInstructionSysvar))
    }

    fn load_instruction(&self, index: usize) -> Result<Instruction> {
        ix_sysvar::load_instruction_at_checked(index, self)
            .map_err(|_| error!(AirdropError::InvalidInstructionSysvar))
    }
}

/// An explicit instruction list together with the index of the caller
pub struct InstructionList<'a> {
    pub own_index: usize,
    pub instructions: &'a [Instruction],
}

impl InstructionSource for InstructionList<'_> {
    fn current_index(&self) -> Result<usize> {
        Ok(self.own_index)
    }

    fn load_instruction(&self, index: usize) -> Result<Instruction> {
        self.instructions
            .get(index)
            .cloned()
            .ok_or_else(|| error!(AirdropError::InvalidInstructionSysvar))
    }
}

/// Offsets of one signature entry in the Ed25519 instruction data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ed25519SignatureOffsets {
    pub signature_offset: u16,
    pub signature_instruction_index: u16,
    pub public_key_offset: u16,
    pub public_key_instruction_index: u16,
    pub message_data_offset: u16,
    pub message_data_size: u16,
    pub message_instruction_index: u16,
}

impl Ed25519SignatureOffsets {
    fn read(data: &[u8], entry: usize) -> Result<Self> {
        let start = OFFSETS_START + entry * OFFSETS_LEN;
        let field = |i: usize| read_u16(data, start + 2 * i);

        Ok(Self {
            signature_offset: field(0)?,
            signature_instruction_index: field(1)?,
            public_key_offset: field(2)?,
            public_key_instruction_index: field(3)?,
            message_data_offset: field(4)?,
            message_data_size: field(5)?,
            message_instruction_index: field(6)?,
        })
    }

    fn references_only_self(&self) -> bool {
        self.signature_instruction_index == THIS_INSTRUCTION
            && self.public_key_instruction_index == THIS_INSTRUCTION
            && self.message_instruction_index == THIS_INSTRUCTION
    }
}

/// A public key together with the signature the precompile verified for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedSignature {
    pub public_key: Pubkey,
    pub signature: [u8; SIGNATURE_LEN],
}

/// Everything recovered from an Ed25519 precompile instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPrecompile<'a> {
    /// Signers in the order they appear in the offsets table
    pub signatures: Vec<VerifiedSignature>,
    /// The single message all signatures cover
    pub message: &'a [u8],
}

impl ParsedPrecompile<'_> {
    pub fn signer_keys(&self) -> Vec<Pubkey> {
        self.signatures.iter().map(|s| s.public_key).collect()
    }
}

fn read_u16(data: &[u8], at: usize) -> Result<u16> {
    let bytes = data
        .get(at..at + 2)
        .ok_or_else(|| error!(AirdropError::InvalidPrecompileData))?;
    Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
}

fn read_region(data: &[u8], offset: u16, len: usize, min_offset: usize) -> Result<&[u8]> {
    let offset = usize::from(offset);
    require!(offset >= min_offset, AirdropError::InvalidPrecompileData);
    data.get(offset..offset + len)
        .ok_or_else(|| error!(AirdropError::InvalidPrecompileData))
}

/// Returns the Ed25519 instruction that immediately precedes the caller
///
/// Only position `current - 1` is inspected. A verification instruction
/// anywhere else in the transaction does not count.
pub fn locate_ed25519_ix(source: &impl InstructionSource) -> Result<Instruction> {
    let current_ix_index = source.current_index()?;
    require!(current_ix_index > 0, AirdropError::MissingPrecedingInstruction);

    let ed_ix = source.load_instruction(current_ix_index - 1)?;

    require_keys_eq!(
        ed_ix.program_id,
        ed25519_program::ID,
        AirdropError::BadSignatureProgram
    );
    require!(ed_ix.accounts.is_empty(), AirdropError::BadSignatureAccounts);

    Ok(ed_ix)
}

/// Parses Ed25519 instruction data into its signers and the shared message
///
/// Layout: `[count: u8][padding: u8][offsets; count]` followed by the
/// signatures, public keys and the message the offsets point at. Every
/// instruction index must be the self sentinel, and every entry must
/// reference the same message bytes.
pub fn parse_ed25519_ix_data(data: &[u8]) -> Result<ParsedPrecompile<'_>> {
    require!(data.len() >= OFFSETS_START, AirdropError::InvalidPrecompileData);

    let count = usize::from(data[0]);
    require!(count > 0, AirdropError::InvalidPrecompileData);

    let table_end = OFFSETS_START + count * OFFSETS_LEN;
    require!(data.len() >= table_end, AirdropError::InvalidPrecompileData);

    let first = Ed25519SignatureOffsets::read(data, 0)?;
    let mut signatures = Vec::with_capacity(count);

    for entry in 0..count {
        let offsets = Ed25519SignatureOffsets::read(data, entry)?;

        require!(
            offsets.references_only_self(),
            AirdropError::CrossInstructionReference
        );
        require!(
            offsets.message_data_offset == first.message_data_offset
                && offsets.message_data_size == first.message_data_size,
            AirdropError::InconsistentMessage
        );

        let signature = read_region(data, offsets.signature_offset, SIGNATURE_LEN, table_end)?;
        let public_key = read_region(data, offsets.public_key_offset, PUBKEY_LEN, table_end)?;

        signatures.push(VerifiedSignature {
            public_key: Pubkey::try_from(public_key)
                .map_err(|_| error!(AirdropError::InvalidPrecompileData))?,
            signature: signature
                .try_into()
                .map_err(|_| error!(AirdropError::InvalidPrecompileData))?,
        });
    }

    let message = read_region(
        data,
        first.message_data_offset,
        usize::from(first.message_data_size),
        table_end,
    )?;

    Ok(ParsedPrecompile { signatures, message })
}
