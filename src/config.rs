//! Runtime settings assembled from command-line flags and the environment.

use std::path::PathBuf;

use catalog::Catalog;
use log::LevelFilter;

use crate::cli::Cli;
use crate::error::Result;

/// Where the catalog comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    /// The catalog compiled into the binary.
    Embedded,
    File(PathBuf),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub catalog: CatalogSource,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
    /// Emit colors and text attributes.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogSource::Embedded,
            log_file: None,
            log_level: LevelFilter::Info,
            color: true,
        }
    }
}

impl Config {
    /// Build the settings for one invocation.
    ///
    /// clap already folded `CODESHEETS_CATALOG` and `CODESHEETS_LOG` into the
    /// flags. Color is also turned off by a non-empty `NO_COLOR`.
    pub fn from_cli(cli: &Cli) -> Self {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            catalog: match &cli.catalog {
                Some(path) => CatalogSource::File(path.clone()),
                None => CatalogSource::Embedded,
            },
            log_file: cli.log_file.clone(),
            log_level: cli.log_level,
            color: !cli.no_color && !no_color_env,
        }
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        let catalog = match &self.catalog {
            CatalogSource::Embedded => Catalog::embedded()?,
            CatalogSource::File(path) => Catalog::load(path)?,
        };
        Ok(catalog)
    }
}
