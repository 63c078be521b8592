use anyhow::{Context, Result, anyhow};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub run_migrations: bool,
    pub port: u16,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let database_max_connections =
            parse_max_connections(std::env::var("DATABASE_MAX_CONNECTIONS").ok())?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        Ok(Self {
            database_url,
            database_max_connections,
            run_migrations,
            port,
        })
    }
}

/// DATABASE_MAX_CONNECTIONS is the one optional variable; absent means the
/// default pool size.
fn parse_max_connections(raw: Option<String>) -> Result<u32> {
    match raw {
        Some(value) => value
            .parse::<u32>()
            .context("DATABASE_MAX_CONNECTIONS must be a valid u32 integer"),
        None => Ok(DEFAULT_MAX_CONNECTIONS),
    }
}
