use std::path::Path;

use anyhow::Context;
use wasender_client::client::WaSenderClient;
use wasender_client::config::{Config, IMAGE_CAPTION, IMAGE_PATH};
use wasender_client::logging;

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = Config::from_env()?;
    let client = WaSenderClient::new(config)?;
    let resp = client
        .send_image(Path::new(IMAGE_PATH), IMAGE_CAPTION)
        .context("Failed to send image")?;

    println!("{}", resp.body);
    Ok(())
}
