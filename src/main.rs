use anyhow::Result;
use tracing::info;

use corvid_uci::UciEngine;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("corvid starting");
    UciEngine::new().run()?;
    Ok(())
}
