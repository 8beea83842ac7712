use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{signature::Signature, transaction::Transaction};

/// Submits the transaction and waits for confirmation at the provider's
/// commitment level (the claimer builds its provider at `confirmed`).
pub async fn send_and_confirm_tx(
    provider: &RpcClient,
    tx: Transaction,
) -> eyre::Result<Signature> {
    let signature = provider.send_and_confirm_transaction(&tx).await?;

    Ok(signature)
}
