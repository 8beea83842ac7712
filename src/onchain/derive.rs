use solana_sdk::pubkey::Pubkey;

use super::constants::{ASSOCIATED_TOKEN_PROGRAM_ID, USER_STATE_SEEDS};

pub fn derive_ata(user: &Pubkey, token_mint: &Pubkey, token_program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            &user.to_bytes(),
            &token_program_id.to_bytes(),
            &token_mint.to_bytes(),
        ],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
}

/// Tries each seed in order against `[wallet, seed]` and returns the first
/// derivation that yields a valid program address. Success here only means
/// the derivation did not fail; existence on-chain is a separate lookup.
pub fn derive_with_seeds(
    wallet: &Pubkey,
    program_id: &Pubkey,
    seeds: &[&str],
) -> eyre::Result<(Pubkey, u8)> {
    for seed in seeds {
        if let Some(found) =
            Pubkey::try_find_program_address(&[&wallet.to_bytes(), seed.as_bytes()], program_id)
        {
            return Ok(found);
        }
    }

    eyre::bail!(
        "Could not derive a program address from seed patterns {:?}",
        seeds
    )
}

pub fn derive_user_state(wallet: &Pubkey, program_id: &Pubkey) -> eyre::Result<(Pubkey, u8)> {
    derive_with_seeds(wallet, program_id, USER_STATE_SEEDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ata_derivation_is_deterministic() {
        let user = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let token_program = Pubkey::new_unique();

        let (first, _) = derive_ata(&user, &mint, &token_program);
        let (second, _) = derive_ata(&user, &mint, &token_program);

        assert_eq!(first, second);
    }

    #[test]
    fn seed_list_tries_first_seed_first() {
        let wallet = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();

        let (derived, bump) = derive_user_state(&wallet, &program_id).unwrap();
        let (expected, expected_bump) =
            Pubkey::find_program_address(&[&wallet.to_bytes(), b"user_state"], &program_id);

        assert_eq!(derived, expected);
        assert_eq!(bump, expected_bump);
    }

    #[test]
    fn empty_seed_list_is_a_derivation_error() {
        let wallet = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();

        assert!(derive_with_seeds(&wallet, &program_id, &[]).is_err());
    }
}
