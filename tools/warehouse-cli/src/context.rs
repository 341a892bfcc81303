//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use warehouse_observability::{LogLevel, SessionId, StructuredLogger};

use crate::config::{WarehouseConfig, CONFIG_FILE_NAMES};
use crate::output::Output;
use crate::store::Store;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: WarehouseConfig,
    /// Where the config was loaded from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Session logger.
    pub logger: StructuredLogger,
    store_override: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(
        config_path: Option<&str>,
        store_override: Option<&str>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_in(cwd, config_path, store_override, output)
    }

    /// Load context as if started in `cwd`.
    pub fn load_in(
        cwd: PathBuf,
        config_path: Option<&str>,
        store_override: Option<&str>,
        output: Output,
    ) -> Result<Self> {
        let (config, config_path) = match config_path {
            Some(path) => (WarehouseConfig::load(path)?, Some(PathBuf::from(path))),
            None => match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (WarehouseConfig::default(), None),
            },
        };

        let min_level = if output.is_verbose() {
            LogLevel::Debug
        } else {
            config.logging.min_level()
        };
        let logger = StructuredLogger::new(SessionId::generate())
            .with_min_level(min_level)
            .with_format(config.logging.format);

        let mut ctx = Self {
            config,
            config_path,
            output,
            cwd,
            logger,
            store_override: store_override.map(PathBuf::from),
        };
        let store_label = ctx.store_path().display().to_string();
        ctx.logger = ctx.logger.clone().with_store(store_label);
        Ok(ctx)
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(WarehouseConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = WarehouseConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Tag log entries with the command being run.
    pub fn set_command(&mut self, command: &str) {
        self.logger = self.logger.clone().with_command(command);
    }

    /// Directory config-relative paths resolve against.
    pub fn base_dir(&self) -> PathBuf {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .map(|dir| self.resolve_path(dir))
            .unwrap_or_else(|| self.cwd.clone())
    }

    /// Store file path. `--store` resolves against the working directory,
    /// `store.path` against the config file's directory.
    pub fn store_path(&self) -> PathBuf {
        match &self.store_override {
            Some(path) => self.resolve_path(path),
            None if self.config.store.path.is_absolute() => self.config.store.path.clone(),
            None => self.base_dir().join(&self.config.store.path),
        }
    }

    /// The store this session reads and writes.
    pub fn store(&self) -> Store {
        Store::new(self.store_path(), self.config.store.create_if_missing)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> Output {
        Output::new(false, true)
    }

    #[test]
    fn test_defaults_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::load_in(dir.path().to_path_buf(), None, None, quiet()).unwrap();
        assert!(ctx.config_path.is_none());
        assert_eq!(ctx.store_path(), dir.path().join("products.txt"));
    }

    #[test]
    fn test_finds_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("warehouse.toml"),
            "[store]\npath = \"data/stock.txt\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let ctx = Context::load_in(nested, None, None, quiet()).unwrap();
        assert_eq!(ctx.config_path, Some(dir.path().join("warehouse.toml")));
        assert_eq!(ctx.store_path(), dir.path().join("data").join("stock.txt"));
    }

    #[test]
    fn test_store_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::load_in(
            dir.path().to_path_buf(),
            None,
            Some("other.txt"),
            quiet(),
        )
        .unwrap();
        assert_eq!(ctx.store_path(), dir.path().join("other.txt"));
    }

    #[test]
    fn test_verbose_lowers_log_level() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::load_in(
            dir.path().to_path_buf(),
            None,
            None,
            Output::new(true, false),
        )
        .unwrap();
        assert!(ctx.logger.enabled(LogLevel::Debug));
    }
}
