use anyhow::{bail, Context as _, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{cli::Args, platform::TargetPlatform};

pub const DEFAULT_CONFIG_FILE: &str = "jni-codegen.toml";

/// Contents of `jni-codegen.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub codegen: CodegenConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct CodegenConfig {
    #[serde(default)]
    pub library_name: Option<String>,

    /// Base name of the generated header, without `.h`.
    #[serde(default)]
    pub spec_name: Option<String>,

    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    #[serde(default)]
    pub platform: Option<TargetPlatform>,

    /// Schema files or glob patterns.
    #[serde(default)]
    pub schemas: Vec<String>,
}

impl Config {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file at {}", path.display()))?;
        let cfg: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse config file at {}", path.display()))?;
        Ok(cfg)
    }

    /// Config path precedence:
    /// 1) CLI --config (must exist)
    /// 2) ./jni-codegen.toml if present
    /// 3) none: flags only
    pub fn locate(cli_config: Option<&Path>) -> Result<Option<Self>> {
        if let Some(p) = cli_config {
            if !p.exists() {
                bail!("--config was provided but file does not exist: {}", p.display());
            }
            return Self::load_from_path(p).map(Some);
        }

        let p = Path::new(DEFAULT_CONFIG_FILE);
        if p.is_file() {
            return Self::load_from_path(p).map(Some);
        }

        Ok(None)
    }
}

/// Everything one run needs, after merging flags over config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub library_name: String,
    pub spec_name: String,
    pub output_dir: PathBuf,
    pub platform: TargetPlatform,
    pub schemas: Vec<String>,
}

impl RunSettings {
    /// Flags win over config values; `spec_name` falls back to
    /// `Native<Library>Spec`, `output_dir` to the current directory.
    pub fn resolve(args: &Args, cfg: Option<&Config>) -> Result<Self> {
        let c = cfg.map(|c| &c.codegen);

        let library_name = args
            .library
            .clone()
            .or_else(|| c.and_then(|c| c.library_name.clone()))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .context("no library name given (use --library or codegen.library_name)")?;

        let spec_name = args
            .spec_name
            .clone()
            .or_else(|| c.and_then(|c| c.spec_name.clone()))
            .unwrap_or_else(|| format!("Native{library_name}Spec"));

        let output_dir = args
            .output_dir
            .clone()
            .or_else(|| c.and_then(|c| c.output_dir.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        let platform = args
            .platform
            .clone()
            .map(TargetPlatform::new)
            .or_else(|| c.and_then(|c| c.platform.clone()))
            .unwrap_or_default();

        let schemas = if args.schema.is_empty() {
            c.map(|c| c.schemas.clone()).unwrap_or_default()
        } else {
            args.schema.clone()
        };
        if schemas.is_empty() {
            bail!("no schema inputs given (use --schema or codegen.schemas)");
        }

        Ok(Self {
            library_name,
            spec_name,
            output_dir,
            platform,
            schemas,
        })
    }
}
