use anyhow::Result;
use azsign::azure::{default_config, CosmosTokenBuilder};
use azsign::Context;

fn main() -> Result<()> {
    env_logger::init();

    let config = default_config();
    let Some(cred) = config.cosmos_credential()? else {
        println!("no Cosmos DB credential configured, set AZURE_COSMOS_CONNECTION_STRING");
        return Ok(());
    };

    // Must match the `x-ms-date` header sent with the request.
    let date = "Thu, 27 Apr 2017 00:51:12 GMT";

    let token = CosmosTokenBuilder::new(Context::new())
        .with_config(&config)
        .build_with_credential(&cred, "GET", "dbs", "dbs/ToDoList", date)?;

    println!("GET {}dbs/ToDoList", cred.endpoint);
    println!("x-ms-date: {date}");
    println!("authorization: {token}");
    Ok(())
}
