use std::time::Duration;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{commitment_config::CommitmentConfig, native_token::lamports_to_sol};

use crate::{config::Config, context::ClaimContext, onchain::derive::derive_ata};

/// Best-effort: a missing token account or RPC failure reads as zero.
pub async fn token_balance(provider: &RpcClient, ctx: &ClaimContext) -> f64 {
    let (token_account, _) = derive_ata(&ctx.wallet_pubkey(), &ctx.token_mint, &ctx.token_program);

    match provider.get_token_account_balance(&token_account).await {
        Ok(balance) => balance.ui_amount.unwrap_or(0.0),
        Err(_) => 0.0,
    }
}

pub async fn show_wallet_info(provider: &RpcClient, ctx: &ClaimContext) {
    let token = token_balance(provider, ctx).await;
    let sol = provider.get_balance(&ctx.wallet_pubkey()).await.unwrap_or(0);

    tracing::info!("Current token balance: {:.6}", token);
    tracing::info!("SOL balance: {:.6}", lamports_to_sol(sol));
    tracing::info!("Wallet: `{}` | Account: {}", ctx.wallet_pubkey(), ctx.name);
}

pub async fn check_balance(config: &Config, ctx: &ClaimContext) -> eyre::Result<()> {
    let provider = RpcClient::new_with_timeout_and_commitment(
        config.rpc_url.clone(),
        Duration::from_secs(60),
        CommitmentConfig::confirmed(),
    );

    let (token_account, _) = derive_ata(&ctx.wallet_pubkey(), &ctx.token_mint, &ctx.token_program);

    tracing::info!("Wallet: `{}`", ctx.wallet_pubkey());
    tracing::info!("Token account: `{}`", token_account);

    if provider.get_account_data(&token_account).await.is_err() {
        tracing::warn!("Token account does not exist");
        return Ok(());
    }

    let balance = provider.get_token_account_balance(&token_account).await?;
    tracing::info!(
        "Current token balance: {:.6}",
        balance.ui_amount.unwrap_or(0.0)
    );
    tracing::info!(
        "Raw balance: {} ({} decimals)",
        balance.amount,
        balance.decimals
    );

    let sol_balance = provider.get_balance(&ctx.wallet_pubkey()).await?;
    tracing::info!("SOL balance: {:.6}", lamports_to_sol(sol_balance));

    Ok(())
}
