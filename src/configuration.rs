use serde_valid::Validate;

#[derive(Debug, Clone, serde::Deserialize, Validate)]
pub struct Settings {
    #[validate]
    pub database: DatabaseSettings,
    pub app_port: u16,
    #[validate(min_length = 1)]
    pub app_host: String,
    #[serde(default)]
    pub store: StoreKind,
}

/// Which `ProductStore` backend the server is wired with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Postgres,
    Memory,
}

#[derive(Debug, Clone, serde::Deserialize, Validate)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    #[validate(min_length = 1)]
    pub host: String,
    pub port: u16,
    #[validate(min_length = 1)]
    pub database_name: String,
    #[serde(default = "default_max_connections")]
    #[validate(minimum = 1)]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // configuration.yaml first, then APP__* variables, e.g. APP__DATABASE__HOST
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: Settings = settings.try_deserialize()?;
    config
        .validate()
        .map_err(|errors| config::ConfigError::Message(errors.to_string()))?;

    Ok(config)
}
