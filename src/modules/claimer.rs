use std::{future::Future, time::Duration};

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig, compute_budget::ComputeBudgetInstruction,
    instruction::Instruction, pubkey::Pubkey, signature::Signature, transaction::Transaction,
};
use tokio::time::MissedTickBehavior;

use crate::{
    config::Config,
    context::ClaimContext,
    onchain::{
        derive::derive_ata,
        ixs::Instructions,
        tx::send_and_confirm_tx,
        typedefs::{ClaimArgs, ClaimOutcome},
    },
};

use super::balance::show_wallet_info;

/// Claims once immediately, then on every timer tick until ctrl-c. Attempts
/// are issued serially; a tick never overlaps an attempt still in flight.
pub async fn run_claimer(config: &Config, ctx: &ClaimContext) -> eyre::Result<()> {
    let provider = RpcClient::new_with_timeout_and_commitment(
        config.rpc_url.clone(),
        Duration::from_secs(60),
        CommitmentConfig::confirmed(),
    );

    tracing::info!("Claim bot started");
    tracing::info!("Claiming every {} minutes", config.claim_interval_minutes);
    tracing::info!("Wallet address: `{}`", ctx.wallet_pubkey());
    tracing::info!("Contract: `{}`", ctx.contract);

    let shutdown = async {
        tokio::signal::ctrl_c().await.ok();
    };

    run_claim_loop(&provider, ctx, config, shutdown).await
}

/// The shutdown future is pinned once and polled across the whole loop, so
/// a signal raised while an attempt is in flight is still observed at the
/// next await point instead of being dropped with a per-iteration future.
async fn run_claim_loop(
    provider: &RpcClient,
    ctx: &ClaimContext,
    config: &Config,
    shutdown: impl Future<Output = ()>,
) -> eyre::Result<()> {
    let period = Duration::from_secs(config.claim_interval_minutes.max(1) * 60);
    let mut timer = tokio::time::interval(period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = timer.tick() => {
                match attempt_claim(provider, ctx, config).await {
                    ClaimOutcome::Success { signature } => {
                        tracing::info!("Claim successful! Signature: {}", signature);
                    }
                    ClaimOutcome::Failure { error } => {
                        tracing::error!("Claim failed: {}", error);
                    }
                }
            }
            _ = &mut shutdown => {
                tracing::info!("Stopping claim bot");
                return Ok(());
            }
        }
    }
}

/// Attempt boundary: every error below is converted into a failure outcome
/// so the periodic loop survives to the next tick.
async fn attempt_claim(
    provider: &RpcClient,
    ctx: &ClaimContext,
    config: &Config,
) -> ClaimOutcome {
    tracing::info!("Attempting to claim rewards");
    show_wallet_info(provider, ctx).await;

    match try_claim(provider, ctx, config).await {
        Ok(signature) => {
            tracing::info!("Updated balance after claim:");
            show_wallet_info(provider, ctx).await;

            ClaimOutcome::Success {
                signature: signature.to_string(),
            }
        }
        Err(e) => ClaimOutcome::Failure {
            error: e.to_string(),
        },
    }
}

async fn try_claim(
    provider: &RpcClient,
    ctx: &ClaimContext,
    config: &Config,
) -> eyre::Result<Signature> {
    let ixs = get_ixs(provider, ctx, config).await?;

    // The provider's `confirmed` commitment is fresh enough here.
    let recent_blockhash = provider.get_latest_blockhash().await?;

    let tx = Transaction::new_signed_with_payer(
        &ixs,
        Some(&ctx.wallet_pubkey()),
        &[&ctx.wallet],
        recent_blockhash,
    );

    send_and_confirm_tx(provider, tx).await
}

/// Token account creation is a separate explicit operation; a missing ATA
/// fails the attempt before anything is submitted.
async fn get_ixs(
    provider: &RpcClient,
    ctx: &ClaimContext,
    config: &Config,
) -> eyre::Result<Vec<Instruction>> {
    let (token_account, _) = derive_ata(&ctx.wallet_pubkey(), &ctx.token_mint, &ctx.token_program);

    let token_account_exists = provider.get_account_data(&token_account).await.is_ok();
    if !token_account_exists {
        eyre::bail!(
            "Token account `{}` does not exist. Create it first via the menu",
            token_account
        );
    }

    Ok(build_claim_ixs(ctx, config, &token_account))
}

fn build_claim_ixs(ctx: &ClaimContext, config: &Config, token_account: &Pubkey) -> Vec<Instruction> {
    vec![
        ComputeBudgetInstruction::set_compute_unit_price(config.compute_unit_price),
        ComputeBudgetInstruction::set_compute_unit_limit(config.compute_unit_limit),
        Instructions::claim(ClaimArgs {
            program_id: ctx.contract,
            user_state: ctx.user_state,
            global_state: ctx.global_state,
            config_state: ctx.config_state,
            token_mint: ctx.token_mint,
            mint_authority: ctx.mint_authority,
            token_account: *token_account,
            claimant: ctx.wallet_pubkey(),
            token_program: ctx.token_program,
            system_program: ctx.system_program,
            referral_state: ctx.referral_state,
            referral_token_account: ctx.referral_token_account,
            discriminator: ctx.discriminator.clone(),
        }),
    ]
}
