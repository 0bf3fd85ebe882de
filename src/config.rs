use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;

/// When collections are read from their source files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Re-read the file on every request; edits are visible immediately.
    #[default]
    PerRequest,
    /// Read once before the listener binds and serve that snapshot.
    Startup,
}

impl FromStr for LoadMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per_request" | "per-request" | "request" => Ok(Self::PerRequest),
            "startup" | "once" => Ok(Self::Startup),
            other => anyhow::bail!("unknown load mode '{other}' (expected per_request or startup)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub employees_path: PathBuf,
    pub products_path: PathBuf,
    pub load_mode: LoadMode,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            host: var("HOST", "127.0.0.1"),
            port: var("PORT", "3000")
                .parse()
                .context("PORT must be a valid number")?,
            employees_path: var("EMPLOYEES_PATH", "employees.json").into(),
            products_path: var("PRODUCTS_PATH", "products.json").into(),
            load_mode: match lookup("LOAD_MODE") {
                Some(raw) => raw.parse().context("LOAD_MODE is invalid")?,
                None => LoadMode::default(),
            },
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
