use std::collections::HashMap;

use serde::Deserialize;

const CONFIG_PATH: &str = "data/config.toml";

#[derive(Deserialize, Clone)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Config {
    pub active_account: String,
    pub rpc_url: String,
    pub claim_interval_minutes: u64,
    pub compute_unit_price: u64,
    pub compute_unit_limit: u32,
    pub log_level: String,
    pub accounts: HashMap<String, AccountProfile>,
}

/// One named account bundle from `data/config.toml`. All addresses are kept
/// as strings here and parsed once when the profile is resolved into a
/// `ClaimContext`.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct AccountProfile {
    pub private_key: String,
    pub contract_address: String,
    pub token_mint: String,
    pub user_state_pda: String,
    pub global_state_pda: String,
    pub config_pda: String,
    pub mint_authority: String,
    pub referral_state_pda: String,
    pub referral_token_account_pda: String,
    pub token_program: String,
    pub system_program: String,
    pub instruction_discriminator: String,
}

impl Config {
    pub async fn read_default() -> eyre::Result<Self> {
        let content = tokio::fs::read_to_string(CONFIG_PATH).await.map_err(|e| {
            eyre::eyre!("Failed to read config at `{}`: {}", CONFIG_PATH, e)
        })?;

        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }

    pub fn profile(&self, name: &str) -> eyre::Result<&AccountProfile> {
        self.accounts.get(name).ok_or_else(|| {
            eyre::eyre!(
                "Account `{}` not found in config. Available accounts: {}",
                name,
                self.profile_names().join(", ")
            )
        })
    }

    pub fn profile_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.accounts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
