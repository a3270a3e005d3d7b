mod defaults;
mod dispatch;
mod http;
mod validation;

use crate::cli::Args;
use crate::error::RouterError;
use crate::models::ToolSpec;
use crate::registry::builtin_tools;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use defaults::{
    default_extraction_values, default_user_agent, DEFAULT_FALLBACK_MESSAGE, DEFAULT_TIMEOUT_SECS,
};
pub use dispatch::DispatchConfig;
pub use http::{HttpConfig, HttpSettings};
pub use validation::{expand_env_var_in_string, expand_tool_endpoints, expand_with};

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

/// On-disk configuration, YAML or JSON.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JsonConfig {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub tools: Vec<ToolSpec>,
}

/// Values read from the environment that override the config file.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub timeout_secs: Option<u64>,
    pub verbose: Option<bool>,
    pub insecure: Option<bool>,
}

impl EnvOverrides {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            timeout_secs: lookup("TOOLROUTER_TIMEOUT").and_then(|s| s.parse::<u64>().ok()),
            verbose: lookup("TOOLROUTER_VERBOSE").map(|v| parse_flag(&v)),
            insecure: lookup("TOOLROUTER_INSECURE").map(|v| parse_flag(&v)),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}

/// Fail unless the API credential is set to something non-blank.
pub fn require_api_key<F>(lookup: F) -> crate::error::Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(API_KEY_VAR) {
        Some(key) if !key.trim().is_empty() => Ok(()),
        _ => Err(RouterError::MissingCredential(API_KEY_VAR.to_string())),
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub verbose: bool,
    pub http: HttpSettings,
    pub fallback_message: String,
    pub extraction_defaults: HashMap<String, String>,
    pub tools: Vec<ToolSpec>,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> crate::error::Result<Self> {
        Self::from_lookup(args, |name| env::var(name).ok())
    }

    pub fn from_lookup<F>(args: &Args, lookup: F) -> crate::error::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // The credential is checked before anything else is loaded
        require_api_key(&lookup)?;

        let json_config = JsonConfig::load(args.config.as_deref())?;

        Ok(Self::resolve(args, json_config, EnvOverrides::from_lookup(&lookup)))
    }

    /// Apply precedence: CLI args > env vars > config file > defaults
    pub fn resolve(
        args: &Args,
        json_config: JsonConfig,
        env_overrides: EnvOverrides,
    ) -> Self {
        let timeout_secs = args
            .timeout_secs
            .or(env_overrides.timeout_secs)
            .or(json_config.http.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let accept_invalid_certs = args.insecure
            || env_overrides
                .insecure
                .or(json_config.http.accept_invalid_certs)
                .unwrap_or(false);

        let verbose = args.verbose
            || env_overrides
                .verbose
                .or(json_config.session.verbose)
                .unwrap_or(false);

        let http = HttpSettings {
            timeout: Duration::from_secs(timeout_secs),
            accept_invalid_certs,
            user_agent: json_config
                .http
                .user_agent
                .clone()
                .unwrap_or_else(default_user_agent),
        };

        let fallback_message = json_config
            .dispatch
            .fallback_message
            .clone()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FALLBACK_MESSAGE.to_string());

        let mut extraction_defaults = default_extraction_values();
        extraction_defaults.extend(json_config.dispatch.defaults);

        let mut tools = if json_config.tools.is_empty() {
            builtin_tools()
        } else {
            json_config.tools
        };
        expand_tool_endpoints(&mut tools);

        Config {
            verbose,
            http,
            fallback_message,
            extraction_defaults,
            tools,
        }
    }
}

impl JsonConfig {
    /// Load from an explicit path, or the first config file found on the search path.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        // No config file found, return default
        Ok(JsonConfig::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: JsonConfig = if is_yaml(path) {
            serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config file: {}", path.display()))?
        } else {
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config file: {}", path.display()))?
        };

        Ok(config)
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Current directory (local override)
        paths.push(PathBuf::from(".toolrouter.yaml"));
        paths.push(PathBuf::from(".toolrouter.yml"));
        paths.push(PathBuf::from(".toolrouter.json"));

        // 2. User's config directory
        if let Some(config_dir) = Self::user_config_dir() {
            paths.push(config_dir.join("toolrouter.yaml"));
            paths.push(config_dir.join("toolrouter.yml"));
            paths.push(config_dir.join("toolrouter.json"));
        }

        paths
    }

    pub fn user_config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("toolrouter"))
    }

    /// Example configuration declaring the builtin tools.
    pub fn example() -> Self {
        JsonConfig {
            http: HttpConfig {
                timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
                accept_invalid_certs: Some(false),
                user_agent: None,
            },
            dispatch: DispatchConfig {
                fallback_message: Some(DEFAULT_FALLBACK_MESSAGE.to_string()),
                defaults: default_extraction_values(),
            },
            session: SessionConfig {
                verbose: Some(false),
            },
            tools: builtin_tools(),
        }
    }

    /// Write the example configuration to `path` unless a file already exists there.
    pub fn init_file(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists: {}", path.display());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory: {}", parent.display())
                })?;
            }
        }

        let contents = serde_yaml::to_string(&Self::example())
            .context("Failed to serialize example config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("yaml") | Some("yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn resolve_uses_builtin_tools_when_none_declared() {
        let config = Config::resolve(
            &Args::default(),
            JsonConfig::default(),
            EnvOverrides::default(),
        );

        assert_eq!(config.tools.len(), 3);
        assert_eq!(
            config.fallback_message,
            "I'm not sure what information you're looking for. You can ask for cat facts or age predictions."
        );
        assert_eq!(config.http.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(!config.http.accept_invalid_certs);
        assert_eq!(config.extraction_defaults.get("name").unwrap(), "meelad");
    }

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn api_key_missing_is_rejected_with_instructions() {
        let err = require_api_key(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, RouterError::MissingCredential(_)));
        assert_eq!(err.to_string(), "Please set your OPENAI_API_KEY in the .env file");
    }

    #[test]
    fn api_key_blank_is_rejected() {
        let err = require_api_key(lookup_from(&[("OPENAI_API_KEY", "   ")])).unwrap_err();
        assert_eq!(err.to_string(), "Please set your OPENAI_API_KEY in the .env file");
    }

    #[test]
    fn api_key_present_is_accepted() {
        assert!(require_api_key(lookup_from(&[("OPENAI_API_KEY", "sk-test")])).is_ok());
    }

    #[test]
    fn credential_is_checked_before_config_is_read() {
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/toolrouter.yaml")),
            ..Args::default()
        };
        let err = Config::from_lookup(&args, lookup_from(&[])).unwrap_err();
        assert!(matches!(err, RouterError::MissingCredential(_)));
    }

    #[test]
    fn config_load_failure_becomes_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let args = Args {
            config: Some(path),
            ..Args::default()
        };
        let err = Config::from_lookup(&args, lookup_from(&[("OPENAI_API_KEY", "sk-test")]))
            .unwrap_err();
        match err {
            RouterError::ConfigError(message) => {
                assert!(message.contains("Failed to parse JSON config file"))
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn from_lookup_applies_env_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("toolrouter.yaml");
        fs::write(&path, "http:\n  timeout_secs: 3\n").unwrap();

        let args = Args {
            config: Some(path),
            ..Args::default()
        };
        let config = Config::from_lookup(
            &args,
            lookup_from(&[("OPENAI_API_KEY", "sk-test"), ("TOOLROUTER_TIMEOUT", "9")]),
        )
        .unwrap();
        assert_eq!(config.http.timeout, Duration::from_secs(9));
    }

    #[test]
    fn resolve_precedence_args_over_env_over_file() {
        let mut json_config = JsonConfig::default();
        json_config.http.timeout_secs = Some(5);
        json_config.session.verbose = Some(true);

        let env_overrides = EnvOverrides {
            timeout_secs: Some(7),
            verbose: Some(false),
            insecure: None,
        };

        let config = Config::resolve(&Args::default(), json_config.clone(), env_overrides.clone());
        assert_eq!(config.http.timeout, Duration::from_secs(7));
        assert!(!config.verbose);

        let args = Args {
            timeout_secs: Some(2),
            ..Args::default()
        };
        let config = Config::resolve(&args, json_config, env_overrides);
        assert_eq!(config.http.timeout, Duration::from_secs(2));
    }

    #[test]
    fn dispatch_defaults_extend_builtin_table() {
        let mut json_config = JsonConfig::default();
        json_config
            .dispatch
            .defaults
            .insert("city".to_string(), "paris".to_string());

        let config = Config::resolve(&Args::default(), json_config, EnvOverrides::default());
        assert_eq!(config.extraction_defaults.get("city").unwrap(), "paris");
        assert_eq!(config.extraction_defaults.get("name").unwrap(), "meelad");
    }

    #[test]
    fn loads_yaml_tools() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("toolrouter.yaml");
        fs::write(
            &path,
            r#"
http:
  timeout_secs: 3
tools:
  - id: get_weather_report
    endpoint: https://weather.example/report
    args:
      - name: city
        description: City to report on
"#,
        )
        .unwrap();

        let config = JsonConfig::load(Some(&path)).unwrap();
        assert_eq!(config.http.timeout_secs, Some(3));
        assert_eq!(config.tools.len(), 1);
        assert_eq!(config.tools[0].args[0].name, "city");
    }

    #[test]
    fn loads_json_tools() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("toolrouter.json");
        fs::write(
            &path,
            r#"{"tools":[{"id":"get_facts_about_cats","url":"https://catfact.ninja/fact","kwargs":[]}]}"#,
        )
        .unwrap();

        let config = JsonConfig::load(Some(&path)).unwrap();
        assert_eq!(config.tools[0].endpoint, "https://catfact.ninja/fact");
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.yaml");
        fs::write(&path, "tools: [ {id: ").unwrap();

        let err = JsonConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse YAML config file"));
    }

    #[test]
    fn init_file_writes_loadable_example_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("toolrouter.yaml");

        JsonConfig::init_file(&path).unwrap();
        let loaded = JsonConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.tools, builtin_tools());

        assert!(JsonConfig::init_file(&path).is_err());
    }
}
