use std::str::FromStr;

use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};

use crate::{config::Config, wallet::load_keypair};

/// An `AccountProfile` resolved into typed values: decoded keypair, parsed
/// addresses, raw discriminator bytes. Read-only after resolution; switching
/// accounts produces a fresh context instead of mutating this one.
#[derive(Debug)]
pub struct ClaimContext {
    pub name: String,
    pub wallet: Keypair,
    pub contract: Pubkey,
    pub token_mint: Pubkey,
    pub user_state: Pubkey,
    pub global_state: Pubkey,
    pub config_state: Pubkey,
    pub mint_authority: Pubkey,
    pub referral_state: Pubkey,
    pub referral_token_account: Pubkey,
    pub token_program: Pubkey,
    pub system_program: Pubkey,
    pub discriminator: Vec<u8>,
}

fn parse_pubkey(label: &str, value: &str) -> eyre::Result<Pubkey> {
    Pubkey::from_str(value).map_err(|e| eyre::eyre!("Invalid {} `{}`: {}", label, value, e))
}

impl ClaimContext {
    pub fn resolve(config: &Config, name: &str) -> eyre::Result<Self> {
        let profile = config.profile(name)?;

        let wallet = load_keypair(&profile.private_key)?;

        let discriminator = hex::decode(&profile.instruction_discriminator).map_err(|e| {
            eyre::eyre!(
                "Invalid instruction discriminator `{}`: {}",
                profile.instruction_discriminator,
                e
            )
        })?;

        Ok(Self {
            name: name.to_string(),
            wallet,
            contract: parse_pubkey("contract address", &profile.contract_address)?,
            token_mint: parse_pubkey("token mint", &profile.token_mint)?,
            user_state: parse_pubkey("user state PDA", &profile.user_state_pda)?,
            global_state: parse_pubkey("global state PDA", &profile.global_state_pda)?,
            config_state: parse_pubkey("config PDA", &profile.config_pda)?,
            mint_authority: parse_pubkey("mint authority", &profile.mint_authority)?,
            referral_state: parse_pubkey("referral state PDA", &profile.referral_state_pda)?,
            referral_token_account: parse_pubkey(
                "referral token account PDA",
                &profile.referral_token_account_pda,
            )?,
            token_program: parse_pubkey("token program", &profile.token_program)?,
            system_program: parse_pubkey("system program", &profile.system_program)?,
            discriminator,
        })
    }

    pub fn wallet_pubkey(&self) -> Pubkey {
        self.wallet.pubkey()
    }
}
