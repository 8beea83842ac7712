mod config;
mod context;
mod modules;
mod onchain;
mod utils;
mod wallet;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = Config::read_default().await?;
    let _guard = utils::logger::init(&config.log_level);

    modules::menu(config).await
}
