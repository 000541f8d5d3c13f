use std::path::Path;

use anyhow::Context;
use wasender_client::client::WaSenderClient;
use wasender_client::config::{Config, DOCUMENT_CAPTION, DOCUMENT_FILENAME, DOCUMENT_PATH};
use wasender_client::logging;

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = Config::from_env()?;
    let client = WaSenderClient::new(config)?;
    let resp = client
        .send_document(Path::new(DOCUMENT_PATH), DOCUMENT_CAPTION, DOCUMENT_FILENAME)
        .context("Failed to send document")?;

    println!("{}", resp.body);
    Ok(())
}
