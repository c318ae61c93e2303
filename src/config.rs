use anyhow::{Context, Result};

pub const DATABASE_NAME: &str = "splitapp";
pub const EXPENSES_COLLECTION: &str = "expenses";
pub const BIND_ADDRESS: (&str, u16) = ("0.0.0.0", 8080);

#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb_uri: String,
}

impl Config {
    /// Reads the configuration from the environment, after loading `.env` if there is one.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let mongodb_uri =
            std::env::var("MONGODB_URI").context("You need to add the MONGODB_URI to the env")?;
        Ok(Self { mongodb_uri })
    }
}
