use std::time::Duration;

use anyhow::Result;
use azsign::azure::{default_config, SasTokenBuilder};
use azsign::Context;

fn main() -> Result<()> {
    env_logger::init();

    // Reads AZURE_SAS_CONNECTION_STRING, or AZURE_SAS_RESOURCE_URL,
    // AZURE_SAS_KEY_NAME and AZURE_SAS_KEY.
    let config = default_config();
    let Some(cred) = config.sas_credential()? else {
        println!("no SAS credential configured, set AZURE_SAS_CONNECTION_STRING");
        return Ok(());
    };

    let token = SasTokenBuilder::new(Context::new())
        .build_with_credential(&cred, Duration::from_secs(3600))?;

    // Send it as the `Authorization` header of the REST request.
    println!("{token}");
    Ok(())
}
