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

/// Application name
/// Default value: fbstats
pub const APP_NAME: &str = "fbstats";

/// Default configuration file base name, looked up in the working directory.
/// The `.toml` and `.yaml` extensions are tried in that order.
/// Default value: fbstats
pub const DEFAULT_CONFIG_FILE: &str = APP_NAME;

/// Default configuration logger level
/// Default value: info
/// Environment variable: FBSTATS_OBS_LOGGER_LEVEL
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log output format
/// Default value: false (human readable)
/// Environment variable: FBSTATS_OBS_LOG_JSON
pub const DEFAULT_LOG_JSON: bool = false;

/// Default shard isolation policy
/// A shard whose cache cannot be read is left out of the scrape instead of failing it.
/// Default value: true
/// Environment variable: FBSTATS_SNAPSHOT_SKIP_UNAVAILABLE_SHARDS
pub const DEFAULT_SKIP_UNAVAILABLE_SHARDS: bool = true;
