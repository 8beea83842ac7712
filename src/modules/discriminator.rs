use std::{str::FromStr, time::Duration};

use solana_client::{
    nonblocking::rpc_client::RpcClient, rpc_client::GetConfirmedSignaturesForAddress2Config,
    rpc_config::RpcTransactionConfig,
};
use solana_sdk::{commitment_config::CommitmentConfig, signature::Signature};
use solana_transaction_status::{
    EncodedTransaction, UiMessage, UiRawMessage, UiTransactionEncoding,
};

use crate::{config::Config, context::ClaimContext};

const SIGNATURE_SCAN_LIMIT: usize = 10;
const TRANSACTION_SCAN_LIMIT: usize = 3;

/// Scans the contract's recent transactions for an instruction owned by it
/// and prints the first 8 bytes of that instruction's payload. Useful when
/// the claim discriminator for a profile is still unknown.
pub async fn find_discriminator(config: &Config, ctx: &ClaimContext) -> eyre::Result<()> {
    let provider = RpcClient::new_with_timeout_and_commitment(
        config.rpc_url.clone(),
        Duration::from_secs(60),
        CommitmentConfig::confirmed(),
    );

    tracing::info!("Scanning recent transactions of `{}`", ctx.contract);

    let signatures = provider
        .get_signatures_for_address_with_config(
            &ctx.contract,
            GetConfirmedSignaturesForAddress2Config {
                limit: Some(SIGNATURE_SCAN_LIMIT),
                ..Default::default()
            },
        )
        .await?;

    tracing::info!("Found {} recent transactions", signatures.len());

    for sig_info in signatures.iter().take(TRANSACTION_SCAN_LIMIT) {
        let signature = Signature::from_str(&sig_info.signature)?;
        tracing::info!("Inspecting transaction: {}", signature);

        let tx = match provider
            .get_transaction_with_config(
                &signature,
                RpcTransactionConfig {
                    encoding: Some(UiTransactionEncoding::Json),
                    commitment: Some(CommitmentConfig::confirmed()),
                    max_supported_transaction_version: Some(0),
                },
            )
            .await
        {
            Ok(tx) => tx,
            Err(e) => {
                tracing::warn!("Failed to fetch transaction: {}", e);
                continue;
            }
        };

        let logs: Option<Vec<String>> = tx
            .transaction
            .meta
            .and_then(|meta| Option::from(meta.log_messages));

        let instruction_logs: Vec<String> = logs
            .unwrap_or_default()
            .into_iter()
            .filter(|log| log.contains("ClaimRewards") || log.contains("Instruction:"))
            .collect();

        if instruction_logs.is_empty() {
            continue;
        }

        tracing::info!("Instruction logs: {:?}", instruction_logs);

        if let EncodedTransaction::Json(ui_tx) = tx.transaction.transaction {
            if let UiMessage::Raw(message) = ui_tx.message {
                if let Some(discriminator) =
                    extract_discriminator(&message, &ctx.contract.to_string())
                {
                    tracing::info!("Discriminator (first 8 bytes, hex): {}", discriminator);
                    return Ok(());
                }
            }
        }
    }

    tracing::warn!("No matching instruction found in recent transactions");

    Ok(())
}

/// First instruction owned by the contract wins; its first 8 payload bytes
/// are the candidate discriminator.
fn extract_discriminator(message: &UiRawMessage, contract: &str) -> Option<String> {
    for ix in &message.instructions {
        let program_id = match message.account_keys.get(ix.program_id_index as usize) {
            Some(key) => key,
            None => continue,
        };

        if program_id != contract {
            continue;
        }

        let data = match solana_sdk::bs58::decode(&ix.data).into_vec() {
            Ok(data) => data,
            Err(_) => continue,
        };

        if data.len() < 8 {
            continue;
        }

        return Some(hex::encode(&data[..8]));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::{message::MessageHeader, pubkey::Pubkey};
    use solana_transaction_status::UiCompiledInstruction;

    fn raw_message(
        account_keys: Vec<String>,
        instructions: Vec<UiCompiledInstruction>,
    ) -> UiRawMessage {
        UiRawMessage {
            header: MessageHeader {
                num_required_signatures: 1,
                num_readonly_signed_accounts: 0,
                num_readonly_unsigned_accounts: 1,
            },
            account_keys,
            recent_blockhash: solana_sdk::hash::Hash::default().to_string(),
            instructions,
            address_table_lookups: None,
        }
    }

    fn instruction(program_id_index: u8, data: &[u8]) -> UiCompiledInstruction {
        UiCompiledInstruction {
            program_id_index,
            accounts: vec![],
            data: solana_sdk::bs58::encode(data).into_string(),
            stack_height: None,
        }
    }

    #[test]
    fn picks_the_first_contract_owned_instruction() {
        let contract = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let keys = vec![other.to_string(), contract.to_string()];

        let ixs = vec![
            instruction(0, &[0xff; 8]),
            instruction(1, &[0xa9, 0x20, 0x4f, 0x89, 0x88, 0xe8, 0x46, 0x89, 0x01]),
            instruction(1, &[0x00; 8]),
        ];
        let message = raw_message(keys, ixs);

        let discriminator = extract_discriminator(&message, &contract.to_string()).unwrap();

        assert_eq!(discriminator, "a9204f8988e84689");
    }

    #[test]
    fn skips_short_payloads() {
        let contract = Pubkey::new_unique();
        let keys = vec![contract.to_string()];

        let message = raw_message(keys, vec![instruction(0, &[0x01, 0x02])]);

        assert!(extract_discriminator(&message, &contract.to_string()).is_none());
    }

    #[test]
    fn ignores_other_programs() {
        let contract = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let keys = vec![other.to_string()];

        let message = raw_message(keys, vec![instruction(0, &[0xff; 8])]);

        assert!(extract_discriminator(&message, &contract.to_string()).is_none());
    }
}
