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

//! # fbstats metrics
//!
//! Builds on-demand metric snapshots for a sharded bot. Each scrape combines
//! fleet-wide totals with the live cache sizes of every shard into three
//! metric families labeled by `scope` (`total` or a shard id) and `entity`.
//!
//! ```
//! use fbstats_metrics::{FleetTotals, ShardHandle, build_snapshot};
//! use std::sync::Arc;
//!
//! let totals = FleetTotals::new();
//! totals.set_total_guilds(10);
//!
//! let shards: Vec<Arc<dyn ShardHandle>> = Vec::new();
//! let families = build_snapshot(&totals, &shards).unwrap();
//! assert_eq!(families.len(), 3);
//! assert_eq!(families[0].value_of(&["total", "Guild"]), Some(10.0));
//! ```

mod collectors;
mod config;
mod entity;
mod error;
mod family;
mod format;
mod metric_type;
mod source;
mod totals;

pub use collectors::{FleetCollector, MetricsCollector, SnapshotBuilder, build_snapshot};
pub use config::{AppConfig, SnapshotConfig, load_config};
pub use entity::EntityType;
pub use error::{MetricsError, Result};
pub use family::{MetricFamily, Sample};
pub use format::render_families;
pub use metric_type::MetricType;
pub use source::{GlobalStatsSource, GlobalTotals, ShardCacheSizes, ShardHandle, ShardSource};
pub use totals::FleetTotals;
