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

use fbstats_config::{DEFAULT_LOG_JSON, DEFAULT_LOG_LEVEL, ENV_OBS_LOG_JSON, ENV_OBS_LOGGER_LEVEL, get_env_bool, get_env_str};
use serde::Deserialize;

/// Logging settings.
///
/// Unset fields default from `FBSTATS_OBS_LOGGER_LEVEL` and
/// `FBSTATS_OBS_LOG_JSON`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObsConfig {
    /// Base level or directive list, e.g. `info` or `info,fbstats_metrics=debug`.
    #[serde(default = "default_logger_level")]
    pub logger_level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default = "default_json")]
    pub json: bool,
}

impl ObsConfig {
    pub fn new() -> Self {
        Self {
            logger_level: default_logger_level(),
            json: default_json(),
        }
    }

    /// Whether the level asks for transport crate chatter as well.
    pub fn is_verbose(&self) -> bool {
        matches!(self.logger_level.as_str(), "trace" | "debug")
    }
}

impl Default for ObsConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_logger_level() -> String {
    get_env_str(ENV_OBS_LOGGER_LEVEL, DEFAULT_LOG_LEVEL)
}

fn default_json() -> bool {
    get_env_bool(ENV_OBS_LOG_JSON, DEFAULT_LOG_JSON)
}
