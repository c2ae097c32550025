use std::{path::PathBuf, str::FromStr, time::Duration};

use eyre::{OptionExt, Result};

use crate::misc::config::{Config, DEFAULT_RPC_URL, DEFAULT_TIMEOUT_MS};

pub fn config_path() -> Result<PathBuf> {
    Ok(home::home_dir()
        .ok_or_eyre("could not determine home directory")?
        .join(".blockview"))
}

pub fn log_file_path() -> Result<PathBuf> {
    Ok(config_path()?.join("blockview.log"))
}

#[derive(Clone, Debug, Default, clap::Parser)]
pub struct ConnOpts {
    #[arg(long, help = "The URL of the node JSON-RPC endpoint", env = "BITCOIN_RPC_URL")]
    pub rpc_url: Option<String>,

    #[arg(long, help = "RPC basic auth user", env = "BITCOIN_RPC_USER")]
    pub rpc_user: Option<String>,

    #[arg(long, help = "RPC basic auth password", env = "BITCOIN_RPC_PASSWORD")]
    pub rpc_password: Option<String>,

    #[arg(long, help = "Per-request timeout in milliseconds")]
    pub timeout_ms: Option<u64>,
}

/// Connection settings after merging CLI options over the config file.
#[derive(Clone, Debug, PartialEq)]
pub struct RpcOpts {
    pub rpc_url: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub timeout: Duration,
}

impl RpcOpts {
    pub fn resolve(conn_opts: &ConnOpts, config: &Config) -> Self {
        let rpc_url = conn_opts
            .rpc_url
            .clone()
            .or_else(|| config.rpc.url.clone())
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_string());
        let timeout_ms = conn_opts
            .timeout_ms
            .or(config.rpc.timeout_ms)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            rpc_url,
            user: conn_opts.rpc_user.clone().or_else(|| config.rpc.user.clone()),
            password: conn_opts
                .rpc_password
                .clone()
                .or_else(|| config.rpc.password.clone()),
            timeout: Duration::from_millis(timeout_ms),
        }
    }
}

#[derive(Debug, Clone, clap::ValueEnum, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = eyre::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(eyre::eyre!("Invalid output format")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let config = Config::parse(
            r#"
[rpc]
url = "http://config:8332"
user = "config-user"
timeout_ms = 1000
"#,
        )
        .unwrap();
        let conn_opts = ConnOpts {
            rpc_url: Some("http://cli:8332".to_string()),
            ..Default::default()
        };

        let opts = RpcOpts::resolve(&conn_opts, &config);
        assert_eq!(opts.rpc_url, "http://cli:8332");
        assert_eq!(opts.user.as_deref(), Some("config-user"));
        assert_eq!(opts.timeout, Duration::from_millis(1000));
    }

    #[test]
    fn test_defaults_without_config() {
        let opts = RpcOpts::resolve(&ConnOpts::default(), &Config::default());
        assert_eq!(opts.rpc_url, DEFAULT_RPC_URL);
        assert!(opts.user.is_none());
        assert_eq!(opts.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("yaml").is_err());
    }
}
