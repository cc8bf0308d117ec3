use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub application: ApplicationSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub path: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_connections: u32,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reads `.env`, an optional `configuration.{yaml,toml,json}` file (or the one named by
/// `TRIVIA_CONFIG`) and `TRIVIA_*` environment variables, in that order of precedence.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    dotenv::dotenv().ok();
    let file = dotenv::var("TRIVIA_CONFIG").unwrap_or_else(|_| "configuration".to_owned());
    load(File::with_name(&file).required(false), environment())
}

fn environment() -> Environment {
    Environment::with_prefix("TRIVIA")
        .prefix_separator("_")
        .separator("__")
}

fn load<S>(file: S, env: Environment) -> Result<Settings, ConfigError>
where
    S: Source + Send + Sync + 'static,
{
    Config::builder()
        .set_default("database.path", "trivia.db")?
        .set_default("database.max_connections", 5)?
        .set_default("application.host", "0.0.0.0")?
        .set_default("application.port", 8080)?
        .add_source(file)
        .add_source(env)
        .build()?
        .try_deserialize()
}
