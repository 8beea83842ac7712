mod balance;
mod claimer;
mod create_ata;
mod discriminator;
mod probe;

use dialoguer::{theme::ColorfulTheme, Select};

use crate::{config::Config, context::ClaimContext};

use balance::check_balance;
use claimer::run_claimer;
use create_ata::create_token_account;
use discriminator::find_discriminator;
use probe::check_user_state;

pub async fn menu(config: Config) -> eyre::Result<()> {
    let mut ctx = ClaimContext::resolve(&config, &config.active_account)?;

    tracing::info!("Active account: {}", ctx.name);
    tracing::info!("Wallet address: `{}`", ctx.wallet_pubkey());

    loop {
        let options = vec![
            "Run claim bot",
            "Check balance",
            "Check user state",
            "Create token account",
            "Find discriminator",
            "Switch account",
            "Exit",
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Choice:")
            .items(&options)
            .default(0)
            .interact()
            .unwrap();

        match selection {
            0 => run_claimer(&config, &ctx).await?,
            1 => {
                if let Err(e) = check_balance(&config, &ctx).await {
                    tracing::error!("{}", e);
                }
            }
            2 => {
                if let Err(e) = check_user_state(&config, &ctx).await {
                    tracing::error!("{}", e);
                }
            }
            3 => {
                if let Err(e) = create_token_account(&config, &ctx).await {
                    tracing::error!("{}", e);
                }
            }
            4 => {
                if let Err(e) = find_discriminator(&config, &ctx).await {
                    tracing::error!("{}", e);
                }
            }
            5 => {
                if let Some(new_ctx) = switch_account(&config, &ctx) {
                    ctx = new_ctx;
                }
            }
            6 => {
                return Ok(());
            }
            _ => tracing::error!("Invalid selection"),
        }
    }
}

/// Resolves a fresh context for the chosen profile. The current context is
/// kept untouched if resolution fails, and nothing is written back to the
/// config file.
fn switch_account(config: &Config, current: &ClaimContext) -> Option<ClaimContext> {
    let names = config.profile_names();
    let labels: Vec<String> = names
        .iter()
        .map(|name| {
            if *name == current.name {
                format!("{} (active)", name)
            } else {
                name.to_string()
            }
        })
        .collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Account:")
        .items(&labels)
        .default(0)
        .interact()
        .unwrap();

    match ClaimContext::resolve(config, names[selection]) {
        Ok(ctx) => {
            tracing::info!("Switched to account: {}", ctx.name);
            tracing::info!("Wallet address: `{}`", ctx.wallet_pubkey());
            Some(ctx)
        }
        Err(e) => {
            tracing::error!("{}", e);
            None
        }
    }
}
