//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shop_cart::catalog::Catalog;
use shop_cart::locale::Locale;
use shop_cart::page::CartPage;
use shop_kv::FileStore;

use crate::config::CliConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Directory relative paths in the config resolve against.
    pub base_dir: PathBuf,
    /// Display language.
    pub locale: Locale,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, lang: Option<Locale>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, base_dir) = if let Some(path) = config_path {
            let config = CliConfig::load(path)?;
            let base = Path::new(path)
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| cwd.join(p))
                .unwrap_or_else(|| cwd.clone());
            (config, base)
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_else(|| (CliConfig::default(), cwd.clone()))
        };

        output.debug(&format!("Config base directory: {}", base_dir.display()));
        let locale = lang.unwrap_or(config.language);

        Ok(Self {
            config,
            output,
            cwd,
            base_dir,
            locale,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some((config, current)),
                        Err(e) => tracing::warn!(
                            path = %config_path.display(),
                            "skipping unreadable config: {e:#}"
                        ),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory the cart file lives in.
    pub fn storage_dir(&self) -> PathBuf {
        let dir = PathBuf::from(&self.config.storage.dir);
        if dir.is_absolute() {
            dir
        } else {
            self.base_dir.join(dir)
        }
    }

    /// The product catalog.
    pub fn catalog(&self) -> Catalog {
        self.config.catalog()
    }

    /// Open the cart page over the file store.
    pub fn open_page(&self) -> Result<CartPage<FileStore>> {
        let dir = self.storage_dir();
        let store = FileStore::open(&dir)
            .with_context(|| format!("Failed to open cart storage: {}", dir.display()))?;
        Ok(CartPage::open(store, self.config.cart.clone(), self.locale))
    }
}
