use std::{fs, io::Write, path::Path};

fn main() {
    let data_path = Path::new("./data");
    let config_path = data_path.join("config.toml");

    if !data_path.exists() {
        fs::create_dir_all(data_path).unwrap();
    }

    if !config_path.exists() {
        let mut config_file = fs::File::create(&config_path).unwrap();
        let config_content = r#"ACTIVE_ACCOUNT = "account1"
RPC_URL = "https://api.mainnet-beta.solana.com"
CLAIM_INTERVAL_MINUTES = 15
COMPUTE_UNIT_PRICE = 375000 # micro lamports per compute unit
COMPUTE_UNIT_LIMIT = 200000 # compute units
LOG_LEVEL = "info"

[ACCOUNTS.account1]
PRIVATE_KEY = ""                 # base58, JSON byte array or base64
CONTRACT_ADDRESS = ""
TOKEN_MINT = ""
USER_STATE_PDA = ""
GLOBAL_STATE_PDA = ""
CONFIG_PDA = ""
MINT_AUTHORITY = ""
REFERRAL_STATE_PDA = ""
REFERRAL_TOKEN_ACCOUNT_PDA = ""
TOKEN_PROGRAM = "TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb"
SYSTEM_PROGRAM = "11111111111111111111111111111111"
INSTRUCTION_DISCRIMINATOR = ""   # 8 bytes, hex
"#;
        config_file.write_all(config_content.as_bytes()).unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
}
