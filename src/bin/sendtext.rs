use anyhow::Context;
use wasender_client::client::WaSenderClient;
use wasender_client::config::{Config, TEXT_MESSAGE};
use wasender_client::logging;

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = Config::from_env()?;
    let client = WaSenderClient::new(config)?;
    let resp = client
        .send_text(TEXT_MESSAGE)
        .context("Failed to send text message")?;

    println!("{}", resp.body);
    Ok(())
}
