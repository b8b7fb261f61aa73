#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_parse_or};

/// Database used when none is configured
pub const DEFAULT_DATABASE: &str = "gadget24";

/// Atlas application name used when composing a URL from credentials
pub const DEFAULT_APP_NAME: &str = "Cluster0";

/// MongoDB connection settings
///
/// Constructed manually or loaded from environment variables (with the `config` feature).
///
/// # Example
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "gadget24");
/// let config = MongoConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection string, e.g. `mongodb://[user:pass@]host[:port][/?options]`
    pub url: String,

    /// Database name to use
    pub database: String,

    /// Optional application name reported to the server
    pub app_name: Option<String>,

    /// Maximum number of connections in the pool
    pub max_pool_size: u32,

    /// Minimum number of connections in the pool
    pub min_pool_size: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    /// Config for `url` using the default `gadget24` database
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_database(url, DEFAULT_DATABASE)
    }

    /// Config for `url` and a specific database name
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }

    /// Compose an SRV connection string from Atlas-style credentials.
    ///
    /// User and password are percent-encoded so reserved characters survive.
    #[cfg(feature = "config")]
    pub fn from_credentials(user: &str, password: &str, host: &str, app_name: &str) -> Self {
        let url = format!(
            "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority&appName={}",
            urlencoding::encode(user),
            urlencoding::encode(password),
            host,
            app_name
        );
        Self::new(url).with_app_name(app_name)
    }

    /// Set the application name for server logs
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Get a reference to the MongoDB URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the database name
    pub fn database(&self) -> &str {
        &self.database
    }

    /// The URL with any password replaced by `***`, safe for logs
    pub fn redacted_url(&self) -> String {
        let Some((scheme, rest)) = self.url.split_once("://") else {
            return self.url.clone();
        };
        let authority_end = rest.find('/').unwrap_or(rest.len());
        let Some(at) = rest[..authority_end].rfind('@') else {
            return self.url.clone();
        };
        let user = rest[..at].split(':').next().unwrap_or_default();
        format!("{}://{}:***{}", scheme, user, &rest[at..])
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::new("mongodb://localhost:27017")
    }
}

/// Load MongoConfig from environment variables
///
/// The connection string comes from the first of:
/// - `MONGODB_URL` or `MONGO_URL`
/// - `DB_USER` + `DB_PASS` (+ `DB_HOST`, required in this mode), composed into an SRV URL
///
/// Other variables:
/// - `MONGODB_DATABASE` or `MONGO_DATABASE` (default: `gadget24`)
/// - `MONGODB_APP_NAME` (default: `Cluster0` for credential mode, unset otherwise)
/// - `MONGODB_MAX_POOL_SIZE` (default: 100), `MONGODB_MIN_POOL_SIZE` (default: 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (default: 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default: 30)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let explicit_url = std::env::var("MONGODB_URL")
            .or_else(|_| std::env::var("MONGO_URL"))
            .ok();
        let app_name = std::env::var("MONGODB_APP_NAME").ok();

        let mut config = match explicit_url {
            Some(url) => {
                let config = MongoConfig::new(url);
                match app_name {
                    Some(name) => config.with_app_name(name),
                    None => config,
                }
            }
            None => {
                let (Ok(user), Ok(password)) = (std::env::var("DB_USER"), std::env::var("DB_PASS"))
                else {
                    return Err(ConfigError::MissingEnvVar(
                        "MONGODB_URL, MONGO_URL or DB_USER/DB_PASS".to_string(),
                    ));
                };
                let host = core_config::env_required("DB_HOST")?;
                let app_name = app_name.unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
                MongoConfig::from_credentials(&user, &password, &host, &app_name)
            }
        };

        config.database = std::env::var("MONGODB_DATABASE")
            .or_else(|_| std::env::var("MONGO_DATABASE"))
            .unwrap_or_else(|_| DEFAULT_DATABASE.to_string());
        config.max_pool_size = env_parse_or("MONGODB_MAX_POOL_SIZE", config.max_pool_size)?;
        config.min_pool_size = env_parse_or("MONGODB_MIN_POOL_SIZE", config.min_pool_size)?;
        config.connect_timeout_secs =
            env_parse_or("MONGODB_CONNECT_TIMEOUT_SECS", config.connect_timeout_secs)?;
        config.server_selection_timeout_secs = env_parse_or(
            "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
            config.server_selection_timeout_secs,
        )?;

        Ok(config)
    }
}
