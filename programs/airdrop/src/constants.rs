use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Seeds used for PDA derivation, the supported signed-message version and the
 * fixed sizes of the Ed25519 precompile instruction layout.
 */

/// ===== PDA SEED CONSTANTS =====

/// Seed for the global config PDA
/// - Used in: ["global_config"]
/// - Singleton holding the authorized distributor set
#[constant]
pub const GLOBAL_CONFIG_SEED: &[u8] = b"global_config";

/// Seed for project PDA derivation
/// - Used in: ["project", nonce_le]
/// - The project PDA is also the authority of the project token pool
#[constant]
pub const PROJECT_SEED: &[u8] = b"project";

/// Seed for claim nullifier PDA derivation
/// - Used in: ["nullifier", project_key, nonce_le]
/// - At most one nullifier can ever exist per (project, nonce)
#[constant]
pub const NULLIFIER_SEED: &[u8] = b"nullifier";

/// ===== PROTOCOL CONSTANTS =====

/// Version carried in the signed message domain
#[constant]
pub const MESSAGE_VERSION: u8 = 1;

/// Maximum number of distributors in the global config
pub const MAX_DISTRIBUTORS: usize = 10;

/// ===== ED25519 PRECOMPILE LAYOUT =====

/// Size of an Ed25519 public key
pub const PUBKEY_LEN: usize = 32;

/// Size of an Ed25519 signature
pub const SIGNATURE_LEN: usize = 64;

/// Signature count (u8) followed by one padding byte
pub const OFFSETS_START: usize = 2;

/// Seven little-endian u16 fields per signature
pub const OFFSETS_LEN: usize = 14;

/// Instruction index sentinel meaning "the precompile instruction itself"
pub const THIS_INSTRUCTION: u16 = u16::MAX;
