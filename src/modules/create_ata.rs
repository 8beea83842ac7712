use std::time::Duration;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig, compute_budget::ComputeBudgetInstruction,
    transaction::Transaction,
};

use crate::{
    config::Config,
    context::ClaimContext,
    onchain::{
        derive::derive_ata, ixs::Instructions, tx::send_and_confirm_tx, typedefs::CreateAtaArgs,
    },
};

/// Explicit associated-token-account creation, payer = owner = wallet.
/// The claimer never creates the account implicitly.
pub async fn create_token_account(config: &Config, ctx: &ClaimContext) -> eyre::Result<()> {
    let provider = RpcClient::new_with_timeout_and_commitment(
        config.rpc_url.clone(),
        Duration::from_secs(60),
        CommitmentConfig::confirmed(),
    );

    let (token_account, _) = derive_ata(&ctx.wallet_pubkey(), &ctx.token_mint, &ctx.token_program);

    tracing::info!("Token account address: `{}`", token_account);

    if provider.get_account_data(&token_account).await.is_ok() {
        tracing::info!("Token account already exists");
        return Ok(());
    }

    let ixs = vec![
        ComputeBudgetInstruction::set_compute_unit_price(config.compute_unit_price),
        ComputeBudgetInstruction::set_compute_unit_limit(config.compute_unit_limit),
        Instructions::create_ata(CreateAtaArgs {
            funding_address: ctx.wallet_pubkey(),
            associated_account_address: token_account,
            wallet_address: ctx.wallet_pubkey(),
            token_mint_address: ctx.token_mint,
            token_program_id: ctx.token_program,
            instruction: 0,
        }),
    ];

    let recent_blockhash = provider.get_latest_blockhash().await?;

    let tx = Transaction::new_signed_with_payer(
        &ixs,
        Some(&ctx.wallet_pubkey()),
        &[&ctx.wallet],
        recent_blockhash,
    );

    let signature = send_and_confirm_tx(&provider, tx).await?;

    tracing::info!("Token account created! Signature: {}", signature);
    tracing::info!("Token account: `{}`", token_account);

    Ok(())
}
