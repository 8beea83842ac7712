use solana_program::instruction::{AccountMeta, Instruction};

use super::constants::ASSOCIATED_TOKEN_PROGRAM_ID;
use super::typedefs::{ClaimArgs, CreateAtaArgs};

pub struct Instructions {}

impl Instructions {
    /// The account order and signer/writable flags are a compatibility
    /// contract with the on-chain program and must not be reordered.
    /// The payload is the raw discriminator; the instruction carries no
    /// parameters beyond it.
    pub fn claim(args: ClaimArgs) -> Instruction {
        let accounts = vec![
            AccountMeta::new(args.user_state, false),
            AccountMeta::new(args.global_state, false),
            AccountMeta::new(args.config_state, false),
            AccountMeta::new(args.token_mint, false),
            AccountMeta::new_readonly(args.mint_authority, false),
            AccountMeta::new(args.token_account, false),
            AccountMeta::new(args.claimant, true),
            AccountMeta::new_readonly(args.token_program, false),
            AccountMeta::new_readonly(args.system_program, false),
            AccountMeta::new(args.referral_state, false),
            AccountMeta::new(args.referral_token_account, false),
        ];

        Instruction {
            program_id: args.program_id,
            accounts,
            data: args.discriminator,
        }
    }

    pub fn create_ata(args: CreateAtaArgs) -> Instruction {
        Instruction {
            program_id: ASSOCIATED_TOKEN_PROGRAM_ID,
            accounts: vec![
                AccountMeta::new(args.funding_address, true),
                AccountMeta::new(args.associated_account_address, false),
                AccountMeta::new_readonly(args.wallet_address, false),
                AccountMeta::new_readonly(args.token_mint_address, false),
                AccountMeta::new_readonly(
                    solana_sdk::system_program::id(),
                    false,
                ),
                AccountMeta::new_readonly(args.token_program_id, false),
            ],
            data: vec![args.instruction],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;

    fn sample_args() -> ClaimArgs {
        ClaimArgs {
            program_id: Pubkey::new_unique(),
            user_state: Pubkey::new_unique(),
            global_state: Pubkey::new_unique(),
            config_state: Pubkey::new_unique(),
            token_mint: Pubkey::new_unique(),
            mint_authority: Pubkey::new_unique(),
            token_account: Pubkey::new_unique(),
            claimant: Pubkey::new_unique(),
            token_program: Pubkey::new_unique(),
            system_program: Pubkey::new_unique(),
            referral_state: Pubkey::new_unique(),
            referral_token_account: Pubkey::new_unique(),
            discriminator: vec![0xa9, 0x20, 0x4f, 0x89, 0x88, 0xe8, 0x46, 0x89],
        }
    }

    #[test]
    fn claim_has_eleven_accounts_in_contract_order() {
        let args = sample_args();
        let expected = [
            (args.user_state, false, true),
            (args.global_state, false, true),
            (args.config_state, false, true),
            (args.token_mint, false, true),
            (args.mint_authority, false, false),
            (args.token_account, false, true),
            (args.claimant, true, true),
            (args.token_program, false, false),
            (args.system_program, false, false),
            (args.referral_state, false, true),
            (args.referral_token_account, false, true),
        ];
        let program_id = args.program_id;

        let ix = Instructions::claim(args);

        assert_eq!(ix.program_id, program_id);
        assert_eq!(ix.accounts.len(), 11);
        for (meta, (pubkey, is_signer, is_writable)) in ix.accounts.iter().zip(expected) {
            assert_eq!(meta.pubkey, pubkey);
            assert_eq!(meta.is_signer, is_signer);
            assert_eq!(meta.is_writable, is_writable);
        }
    }

    #[test]
    fn claim_payload_is_the_raw_discriminator() {
        let args = sample_args();
        let discriminator = args.discriminator.clone();

        let ix = Instructions::claim(args);

        assert_eq!(ix.data, discriminator);
    }

    #[test]
    fn create_ata_marks_funder_as_signer() {
        let args = CreateAtaArgs {
            funding_address: Pubkey::new_unique(),
            associated_account_address: Pubkey::new_unique(),
            wallet_address: Pubkey::new_unique(),
            token_mint_address: Pubkey::new_unique(),
            token_program_id: Pubkey::new_unique(),
            instruction: 0,
        };

        let ix = Instructions::create_ata(args);

        assert_eq!(ix.program_id, ASSOCIATED_TOKEN_PROGRAM_ID);
        assert_eq!(ix.accounts.len(), 6);
        assert!(ix.accounts[0].is_signer);
        assert!(!ix.accounts[1].is_signer);
        assert_eq!(ix.data, vec![0]);
    }
}
