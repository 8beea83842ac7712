use base64::{prelude::BASE64_STANDARD, Engine};
use solana_sdk::signature::Keypair;

const SECRET_KEY_LEN: usize = 64;

/// Supported private key encodings, tried in order. Base58 is the Phantom
/// export format, the JSON byte array is what `solana-keygen` writes.
#[derive(Debug, Clone, Copy)]
enum KeyFormat {
    Base58,
    JsonArray,
    Base64,
}

impl KeyFormat {
    const ALL: [KeyFormat; 3] = [KeyFormat::Base58, KeyFormat::JsonArray, KeyFormat::Base64];

    fn decode(self, raw: &str) -> eyre::Result<Keypair> {
        let bytes = match self {
            KeyFormat::Base58 => solana_sdk::bs58::decode(raw).into_vec()?,
            KeyFormat::JsonArray => serde_json::from_str::<Vec<u8>>(raw)?,
            KeyFormat::Base64 => BASE64_STANDARD.decode(raw)?,
        };

        keypair_from_bytes(&bytes)
    }
}

fn keypair_from_bytes(bytes: &[u8]) -> eyre::Result<Keypair> {
    if bytes.len() != SECRET_KEY_LEN {
        eyre::bail!(
            "Secret key must be {} bytes, got {}",
            SECRET_KEY_LEN,
            bytes.len()
        );
    }

    Keypair::from_bytes(bytes).map_err(|e| eyre::eyre!("Invalid keypair bytes: {}", e))
}

pub fn load_keypair(raw: &str) -> eyre::Result<Keypair> {
    for format in KeyFormat::ALL {
        match format.decode(raw) {
            Ok(keypair) => {
                tracing::debug!("Private key decoded as {:?}", format);
                return Ok(keypair);
            }
            Err(e) => tracing::debug!("Private key is not {:?}: {}", format, e),
        }
    }

    eyre::bail!("Failed to load wallet. Supported formats: base58 (Phantom), JSON array, base64")
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signer::Signer;

    #[test]
    fn decodes_base58() {
        let keypair = Keypair::new();

        let decoded = load_keypair(&keypair.to_base58_string()).unwrap();

        assert_eq!(decoded.pubkey(), keypair.pubkey());
    }

    #[test]
    fn decodes_json_array() {
        let keypair = Keypair::new();
        let encoded = serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap();

        let decoded = load_keypair(&encoded).unwrap();

        assert_eq!(decoded.pubkey(), keypair.pubkey());
    }

    #[test]
    fn decodes_base64() {
        let keypair = Keypair::new();
        let encoded = BASE64_STANDARD.encode(keypair.to_bytes());

        let decoded = load_keypair(&encoded).unwrap();

        assert_eq!(decoded.pubkey(), keypair.pubkey());
    }

    #[test]
    fn rejects_wrong_length() {
        // Valid base58, but 32 bytes instead of 64.
        let pubkey_only = Keypair::new().pubkey().to_string();

        let err = load_keypair(&pubkey_only).unwrap_err().to_string();

        assert!(err.contains("Supported formats"));
    }

    #[test]
    fn rejects_garbage_in_all_formats() {
        let err = load_keypair("definitely not a key !!!").unwrap_err().to_string();

        assert!(err.contains("base58"));
        assert!(err.contains("JSON array"));
        assert!(err.contains("base64"));
    }
}
