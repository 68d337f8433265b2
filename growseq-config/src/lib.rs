//! Configuration loader for growseq.
//!
//! `defaults/growseq.default.toml` is embedded into the binary so the documented
//! defaults and runtime behavior stay in sync. Callers layer files, a `.env` file,
//! `GROWSEQ__*` environment variables, the bare `PORT` variable and explicit overrides
//! on top via [`Loader`], then call [`Loader::build`] to deserialize and validate into
//! [`GrowseqConfig`].
//!
//! Later layers win:
//! 1. embedded defaults
//! 2. configuration files, in the order added
//! 3. `GROWSEQ__SECTION__KEY` environment variables (`fruits.initial` is comma-separated)
//! 4. `PORT`
//! 5. key/value overrides
//!
//! Variables read from a `.env` file ([`Loader::with_dotenv`]) feed layers 3 and 4.
//! The process environment wins over the file, and the process environment is never
//! modified. Call `with_dotenv` before `with_environment` and `with_env_port`.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, Map, ValueKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

mod error;

pub use error::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/growseq.default.toml");

/// Prefix for structured environment overrides (`GROWSEQ__TOUR__NAME=...`).
pub const ENV_PREFIX: &str = "GROWSEQ";

/// Name of the bare port variable.
pub const PORT_VAR: &str = "PORT";

/// `.env` file looked up in the working directory when no path is given.
pub const DEFAULT_DOTENV: &str = ".env";

/// Keys whose environment values are split on `,` into lists.
const LIST_KEYS: &[&str] = &["fruits.initial"];

/// Upper limit for either loop bound.
pub const MAX_LOOP_BOUND: u32 = 1_000;

/// Upper limit for `tour.age`.
pub const MAX_AGE: u32 = 150;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GrowseqConfig {
    pub server: ServerConfig,
    pub tour: TourConfig,
    pub fruits: FruitConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub port: u16,
}

/// Values consumed by the walkthrough.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TourConfig {
    pub name: String,
    pub age: u32,
    pub voting_age: u32,
    pub initial_page_count: u32,
    pub revised_page_count: u32,
    pub counted_loop_bound: u32,
    pub while_loop_bound: u32,
    pub identifier: u64,
    pub forwarded_identifier: u64,
}

/// Starting contents and the appended value for the fruit demo.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FruitConfig {
    pub initial: Vec<String>,
    pub appended: String,
}

impl GrowseqConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port must not be 0".to_string(),
            ));
        }
        for (key, bound) in [
            ("tour.counted_loop_bound", self.tour.counted_loop_bound),
            ("tour.while_loop_bound", self.tour.while_loop_bound),
        ] {
            if bound > MAX_LOOP_BOUND {
                return Err(ConfigError::Validation(format!(
                    "{} is {}, maximum is {}",
                    key, bound, MAX_LOOP_BOUND
                )));
            }
        }
        if self.tour.age > MAX_AGE {
            return Err(ConfigError::Validation(format!(
                "tour.age is {}, maximum is {}",
                self.tour.age, MAX_AGE
            )));
        }
        Ok(())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
    dotenv: Map<String, String>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self {
            builder,
            dotenv: Map::new(),
        }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Read variables from a `.env` file.
    ///
    /// An explicit `path` must exist and parse. With `None`, [`DEFAULT_DOTENV`] in the
    /// working directory is read if present and skipped otherwise.
    pub fn with_dotenv(mut self, path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_DOTENV), false),
        };
        if !required && !path.is_file() {
            return Ok(self);
        }

        let env_file_error = |source| ConfigError::EnvFile {
            path: path.clone(),
            source,
        };
        for item in dotenvy::from_path_iter(&path).map_err(env_file_error)? {
            let (key, value) = item.map_err(env_file_error)?;
            self.dotenv.insert(key, value);
        }
        debug!(path = %path.display(), vars = self.dotenv.len(), "loaded env file");
        Ok(self)
    }

    /// Layer `GROWSEQ__SECTION__KEY` variables from the process environment.
    pub fn with_environment(self) -> Self {
        let vars: Map<String, String> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        self.with_environment_source(vars)
    }

    /// Layer `GROWSEQ__SECTION__KEY` variables from `vars` instead of the process
    /// environment.
    pub fn with_environment_vars<I, K, V>(self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map: Map<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.with_environment_source(map)
    }

    fn with_environment_source(mut self, mut vars: Map<String, String>) -> Self {
        for (key, value) in &self.dotenv {
            vars.entry(key.clone()).or_insert_with(|| value.clone());
        }
        let env = LIST_KEYS.iter().fold(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(",")
                .try_parsing(true),
            |env, key| env.with_list_parse_key(key),
        );
        let env = env.source(Some(vars));
        self.builder = self.builder.add_source(env);
        self
    }

    /// Apply a `PORT` value as the `server.port` override.
    ///
    /// `None` falls back to `PORT` from a loaded `.env` file, and otherwise leaves the
    /// port alone.
    pub fn with_port(self, value: Option<&str>) -> Result<Self, ConfigError> {
        let raw = match value.or_else(|| self.dotenv.get(PORT_VAR).map(String::as_str)) {
            Some(raw) => raw.to_string(),
            None => return Ok(self),
        };
        let port: u16 = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(raw.clone()))?;
        if port == 0 {
            return Err(ConfigError::InvalidPort(raw));
        }
        debug!(port, "applying {} override", PORT_VAR);
        self.set_override("server.port", i64::from(port))
    }

    /// Read `PORT` from the process environment and apply it.
    pub fn with_env_port(self) -> Result<Self, ConfigError> {
        let value = std::env::var(PORT_VAR).ok();
        self.with_port(value.as_deref())
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize and validate.
    pub fn build(self) -> Result<GrowseqConfig, ConfigError> {
        let config: GrowseqConfig = self.builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<GrowseqConfig, ConfigError> {
    Loader::new().build()
}
