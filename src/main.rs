use std::error::Error;

use tracing::{debug, info};

mod telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Real environment variables win over `.env`; a missing file is fine.
    let dotenv = dotenvy::dotenv();

    telemetry::init("info")?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => debug!("no .env file, using process environment"),
        Err(e) => return Err(e.into()),
    }

    api::start().await?;

    Ok(())
}
