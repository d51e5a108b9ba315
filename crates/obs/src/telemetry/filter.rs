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

//! `EnvFilter` construction for the logging subscriber.

use crate::TelemetryError;
use smallvec::SmallVec;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

/// Builds the filter for `logger_level`.
///
/// `RUST_LOG` takes precedence when it is set and parses. `default_level`,
/// when given, replaces `logger_level` as the base directive. Unless the
/// level is `trace` or `debug`, transport crates (`hyper`, `h2`, `tower`,
/// `reqwest`) are switched off.
pub(crate) fn build_env_filter(logger_level: &str, default_level: Option<&str>) -> Result<EnvFilter, TelemetryError> {
    let level = default_level.unwrap_or(logger_level);
    let mut filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| TelemetryError::invalid_directive(level, e))?,
    };

    if !matches!(logger_level, "trace" | "debug") {
        let crates: SmallVec<[&str; 4]> = smallvec::smallvec!["hyper", "h2", "tower", "reqwest"];
        for name in crates {
            let directive = format!("{name}=off");
            let parsed: Directive = directive
                .parse()
                .map_err(|e| TelemetryError::invalid_directive(directive.as_str(), e))?;
            filter = filter.add_directive(parsed);
        }
    }

    Ok(filter)
}
