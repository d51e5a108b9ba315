// Copyright 2024 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Snapshot configuration.
//!
//! Values come from, in increasing priority:
//! 1. built-in defaults, themselves overridable by plain environment
//!    variables such as `FBSTATS_SNAPSHOT_SKIP_UNAVAILABLE_SHARDS`;
//! 2. an optional `fbstats.toml` / `fbstats.yaml` file;
//! 3. layered environment variables, e.g. `FBSTATS__SNAPSHOT__SKIP_UNAVAILABLE_SHARDS`.

use config::{Config, Environment, File, FileFormat};
use fbstats_config::{
    DEFAULT_CONFIG_FILE, DEFAULT_SKIP_UNAVAILABLE_SHARDS, ENV_CONFIG_PREFIX, ENV_CONFIG_SEPARATOR,
    ENV_SNAPSHOT_SKIP_UNAVAILABLE_SHARDS, get_env_bool,
};
use serde::Deserialize;
use std::env;
use std::path::Path;
use tracing::{debug, warn};

/// Policy knobs for [`SnapshotBuilder`](crate::SnapshotBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SnapshotConfig {
    /// Leave out shards whose caches cannot be read instead of failing the scrape.
    #[serde(default = "default_skip_unavailable_shards")]
    pub skip_unavailable_shards: bool,
}

impl SnapshotConfig {
    /// Configuration that fails the scrape on the first unreadable shard.
    pub fn strict() -> Self {
        Self {
            skip_unavailable_shards: false,
        }
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            skip_unavailable_shards: default_skip_unavailable_shards(),
        }
    }
}

fn default_skip_unavailable_shards() -> bool {
    get_env_bool(ENV_SNAPSHOT_SKIP_UNAVAILABLE_SHARDS, DEFAULT_SKIP_UNAVAILABLE_SHARDS)
}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

/// Loads the configuration.
///
/// `path` may name a file with or without extension, or be `None` to use
/// `fbstats` in the current directory. Missing files are not an error.
/// Anything that cannot be parsed falls back to [`AppConfig::default`].
///
/// # Example
/// ```
/// use fbstats_metrics::load_config;
///
/// let config = load_config(None);
/// println!("skip unavailable shards: {}", config.snapshot.skip_unavailable_shards);
/// ```
pub fn load_config(path: Option<&str>) -> AppConfig {
    let base = match path.filter(|p| !p.is_empty()) {
        // the format is chosen below, so the extension is dropped here
        Some(path) => Path::new(path).with_extension("").to_string_lossy().into_owned(),
        None => match env::current_dir() {
            Ok(dir) => dir.join(DEFAULT_CONFIG_FILE).to_string_lossy().into_owned(),
            Err(e) => {
                warn!("failed to get current directory, using relative config path: {}", e);
                DEFAULT_CONFIG_FILE.to_string()
            }
        },
    };
    debug!(config_base = %base, "loading configuration");

    let built = Config::builder()
        .add_source(File::with_name(&base).format(FileFormat::Toml).required(false))
        .add_source(File::with_name(&base).format(FileFormat::Yaml).required(false))
        .add_source(
            Environment::default()
                .prefix(ENV_CONFIG_PREFIX)
                .prefix_separator(ENV_CONFIG_SEPARATOR)
                .separator(ENV_CONFIG_SEPARATOR)
                .try_parsing(true),
        )
        .build();

    let built = match built {
        Ok(built) => built,
        Err(e) => {
            warn!("failed to read configuration, using defaults: {}", e);
            return AppConfig::default();
        }
    };

    match built.try_deserialize::<AppConfig>() {
        Ok(config) => config,
        Err(e) => {
            warn!("failed to deserialize configuration, using defaults: {}", e);
            AppConfig::default()
        }
    }
}
