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

/// Prefix and separator used by layered configuration sources,
/// e.g. `FBSTATS__SNAPSHOT__SKIP_UNAVAILABLE_SHARDS=false`.
pub const ENV_CONFIG_PREFIX: &str = "FBSTATS";
pub const ENV_CONFIG_SEPARATOR: &str = "__";

pub const ENV_OBS_LOGGER_LEVEL: &str = "FBSTATS_OBS_LOGGER_LEVEL";
pub const ENV_OBS_LOG_JSON: &str = "FBSTATS_OBS_LOG_JSON";

pub const ENV_SNAPSHOT_SKIP_UNAVAILABLE_SHARDS: &str = "FBSTATS_SNAPSHOT_SKIP_UNAVAILABLE_SHARDS";
