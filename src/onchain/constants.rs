use solana_program::pubkey;
use solana_sdk::pubkey::Pubkey;

pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey =
    pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

/// Candidate seeds for the user-state PDA, in the order they are tried.
/// Reverse-engineered from observed transactions, not authoritative. The
/// claim path takes its PDAs from config; only diagnostics derive.
pub const USER_STATE_SEEDS: &[&str] = &["user_state", "state"];

/// Wider seed list used by the existence probe.
pub const PROBE_SEEDS: &[&str] = &["user_state", "state", "user", "farming", "farm"];
