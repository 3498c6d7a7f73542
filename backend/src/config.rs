//! Application configuration read from the process environment.
//!
//! Configuration is built once at startup and passed down explicitly. Lookups
//! go through [`mockable::Env`] so tests never mutate the real environment.

use mockable::Env;
use url::Url;

const POSTGRES_HOST_ENV: &str = "POSTGRES_HOST";
const POSTGRES_PORT_ENV: &str = "POSTGRES_PORT";
const POSTGRES_USER_ENV: &str = "POSTGRES_USER";
const POSTGRES_PASSWORD_ENV: &str = "POSTGRES_PASSWORD";
const POSTGRES_DB_ENV: &str = "POSTGRES_DB";
const PORT_ENV: &str = "PORT";
const DB_POOL_MAX_SIZE_ENV: &str = "DB_POOL_MAX_SIZE";

const DEFAULT_POSTGRES_HOST: &str = "localhost";
const DEFAULT_POSTGRES_PORT: u16 = 5432;
const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Errors raised while reading configuration.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is missing or empty.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable is present but cannot be parsed.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    /// The assembled database URL is not valid.
    #[error("invalid database url: {message}")]
    DatabaseUrl { message: String },
}

/// Connection settings for PostgreSQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub pool_max_size: u32,
}

impl DatabaseConfig {
    /// Build the `postgres://` connection URL with percent-encoded credentials.
    ///
    /// # Examples
    /// ```
    /// use purchases::config::DatabaseConfig;
    ///
    /// let config = DatabaseConfig {
    ///     host: "db".into(),
    ///     port: 5432,
    ///     user: "app".into(),
    ///     password: "p@ss word".into(),
    ///     name: "purchases".into(),
    ///     pool_max_size: 10,
    /// };
    /// assert_eq!(
    ///     config.database_url().unwrap(),
    ///     "postgres://app:p%40ss%20word@db:5432/purchases"
    /// );
    /// ```
    pub fn database_url(&self) -> Result<String, ConfigError> {
        let invalid = |message: String| ConfigError::DatabaseUrl { message };
        let mut url = Url::parse(&format!("postgres://{}:{}", self.host, self.port))
            .map_err(|err| invalid(err.to_string()))?;
        url.set_username(&self.user)
            .map_err(|()| invalid("username rejected".to_owned()))?;
        url.set_password(Some(&self.password))
            .map_err(|()| invalid("password rejected".to_owned()))?;
        url.set_path(&self.name);
        Ok(url.into())
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub http_port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Read configuration from the given environment source.
    ///
    /// # Examples
    /// ```
    /// use mockable::MockEnv;
    /// use purchases::config::AppConfig;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|name| match name {
    ///     "POSTGRES_USER" => Some("app".into()),
    ///     "POSTGRES_PASSWORD" => Some("secret".into()),
    ///     "POSTGRES_DB" => Some("purchases".into()),
    ///     _ => None,
    /// });
    ///
    /// let config = AppConfig::from_env(&env).unwrap();
    /// assert_eq!(config.http_port, 8080);
    /// assert_eq!(config.database.host, "localhost");
    /// ```
    pub fn from_env<E: Env>(env: &E) -> Result<Self, ConfigError> {
        let database = DatabaseConfig {
            host: optional(env, POSTGRES_HOST_ENV)
                .unwrap_or_else(|| DEFAULT_POSTGRES_HOST.to_owned()),
            port: parsed(env, POSTGRES_PORT_ENV, "a TCP port", DEFAULT_POSTGRES_PORT)?,
            user: required(env, POSTGRES_USER_ENV)?,
            password: required(env, POSTGRES_PASSWORD_ENV)?,
            name: required(env, POSTGRES_DB_ENV)?,
            pool_max_size: parsed(
                env,
                DB_POOL_MAX_SIZE_ENV,
                "a positive integer",
                DEFAULT_POOL_MAX_SIZE,
            )?,
        };
        if database.pool_max_size == 0 {
            return Err(ConfigError::InvalidEnv {
                name: DB_POOL_MAX_SIZE_ENV,
                value: "0".to_owned(),
                expected: "a positive integer",
            });
        }

        Ok(Self {
            http_port: parsed(env, PORT_ENV, "a TCP port", DEFAULT_HTTP_PORT)?,
            database,
        })
    }
}

fn optional<E: Env>(env: &E, name: &'static str) -> Option<String> {
    env.string(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn required<E: Env>(env: &E, name: &'static str) -> Result<String, ConfigError> {
    optional(env, name).ok_or(ConfigError::MissingEnv { name })
}

fn parsed<E, T>(
    env: &E,
    name: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    E: Env,
    T: std::str::FromStr,
{
    match optional(env, name) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnv {
            name,
            value,
            expected,
        }),
    }
}
