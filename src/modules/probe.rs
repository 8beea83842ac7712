use std::time::Duration;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey};

use crate::{
    config::Config,
    context::ClaimContext,
    onchain::{
        constants::PROBE_SEEDS,
        derive::{derive_user_state, derive_with_seeds},
    },
};

/// Derives a user-state candidate for every known seed pattern and checks
/// which of them exist on-chain. Derivation succeeding says nothing about
/// existence; each candidate gets its own account lookup.
pub async fn check_user_state(config: &Config, ctx: &ClaimContext) -> eyre::Result<()> {
    let provider = RpcClient::new_with_timeout_and_commitment(
        config.rpc_url.clone(),
        Duration::from_secs(60),
        CommitmentConfig::confirmed(),
    );

    tracing::info!("Wallet: `{}`", ctx.wallet_pubkey());
    tracing::info!("Contract: `{}`", ctx.contract);

    match derive_user_state(&ctx.wallet_pubkey(), &ctx.contract) {
        Ok((pda, _)) => tracing::info!("Primary user state candidate: `{}`", pda),
        Err(e) => tracing::warn!("{}", e),
    }

    let mut found: Option<Pubkey> = None;

    for seed in PROBE_SEEDS.iter().copied() {
        let (pda, _) = match derive_with_seeds(&ctx.wallet_pubkey(), &ctx.contract, &[seed]) {
            Ok(derived) => derived,
            Err(e) => {
                tracing::warn!("Seed `{}`: {}", seed, e);
                continue;
            }
        };

        match provider.get_account_data(&pda).await {
            Ok(data) => {
                tracing::info!("Seed `{}`: `{}` - EXISTS ({} bytes)", seed, pda, data.len());
                found.get_or_insert(pda);
            }
            Err(_) => tracing::info!("Seed `{}`: `{}` - NOT FOUND", seed, pda),
        }
    }

    if found.is_none() {
        tracing::warn!("No user state found. The wallet may need to register on-chain first");
    }

    Ok(())
}
