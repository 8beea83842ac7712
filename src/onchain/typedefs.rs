use solana_sdk::pubkey::Pubkey;

/// Account set for the claim instruction. The ordering lives in
/// `Instructions::claim`; this struct only names the participants.
#[derive(Debug)]
pub struct ClaimArgs {
    pub program_id: Pubkey,
    pub user_state: Pubkey,
    pub global_state: Pubkey,
    pub config_state: Pubkey,
    pub token_mint: Pubkey,
    pub mint_authority: Pubkey,
    pub token_account: Pubkey,
    pub claimant: Pubkey,
    pub token_program: Pubkey,
    pub system_program: Pubkey,
    pub referral_state: Pubkey,
    pub referral_token_account: Pubkey,
    pub discriminator: Vec<u8>,
}

pub struct CreateAtaArgs {
    pub funding_address: Pubkey,
    pub associated_account_address: Pubkey,
    pub wallet_address: Pubkey,
    pub token_mint_address: Pubkey,
    pub token_program_id: Pubkey,
    pub instruction: u8,
}

/// Outcome of a single claim attempt. Logged, never persisted.
#[derive(Debug)]
pub enum ClaimOutcome {
    Success { signature: String },
    Failure { error: String },
}
