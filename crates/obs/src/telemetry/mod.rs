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

mod filter;

use crate::{ObsConfig, TelemetryError};
use filter::build_env_filter;
use std::io::IsTerminal;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global `tracing` subscriber described by `config`.
///
/// Fails with [`TelemetryError::AlreadyInitialized`] when another subscriber
/// has already been set for the process.
pub fn init_logging(config: &ObsConfig) -> Result<(), TelemetryError> {
    let env_filter = build_env_filter(&config.logger_level, None)?;
    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if config.json {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .with_current_span(true)
            .with_span_list(true);
        registry.with(fmt_layer).try_init()
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_ansi(std::io::stdout().is_terminal());
        registry.with(fmt_layer).try_init()
    };
    installed.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;

    info!("Init logging (level: {}, json: {})", config.logger_level, config.json);
    Ok(())
}
