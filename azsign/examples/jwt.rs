use anyhow::Result;
use azsign::jwt::{encode, Header};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    logged_in_as: String,
    iat: u64,
}

fn main() -> Result<()> {
    env_logger::init();

    let claims = Claims {
        logged_in_as: "admin".to_string(),
        iat: 1422779638,
    };
    let token = encode(b"secretkey", &Header::hs256(), &claims)?;

    println!("{token}");
    Ok(())
}
