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

//! Prometheus text exposition format renderer.
//!
//! Serving the output is left to the caller; this only turns a snapshot into
//! the text a scrape endpoint would return.

use crate::family::MetricFamily;
use std::fmt::Write;

/// Render metric families in Prometheus text exposition format.
///
/// `# HELP` and `# TYPE` are written for every family, including families
/// without samples.
pub fn render_families(families: &[MetricFamily]) -> String {
    let mut output = String::new();

    for family in families {
        let _ = writeln!(output, "# HELP {} {}", family.name(), escape_help(family.help()));
        let _ = writeln!(output, "# TYPE {} {}", family.name(), family.metric_type().as_str());

        for sample in family.samples() {
            if sample.label_values.is_empty() {
                let _ = writeln!(output, "{} {}", family.name(), format_value(sample.value));
                continue;
            }

            let labels: Vec<String> = family
                .label_names()
                .iter()
                .zip(&sample.label_values)
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label_value(v)))
                .collect();
            let _ = writeln!(output, "{}{{{}}} {}", family.name(), labels.join(","), format_value(sample.value));
        }
    }

    output
}

/// Escapes label values for the Prometheus text format.
fn escape_label_value(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Escape help text
fn escape_help(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Format float value for Prometheus
fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v.is_sign_positive() { "+Inf" } else { "-Inf" }.to_string()
    } else if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}
