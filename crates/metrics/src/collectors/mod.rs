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

//! Collectors that turn fleet statistics into metric families.
//!
//! - [`snapshot`]: assembles the families from a global stats source and a shard source
//! - [`collector`]: the [`MetricsCollector`] surface a scrape endpoint calls
//!
//! # Example
//!
//! ```
//! use fbstats_metrics::{FleetCollector, FleetTotals, MetricsCollector, ShardHandle, render_families};
//! use std::sync::Arc;
//!
//! let totals = FleetTotals::new();
//! totals.set_total_users(100);
//! totals.set_pull_count_bot(50);
//!
//! let shards: Vec<Arc<dyn ShardHandle>> = Vec::new();
//! let collector = FleetCollector::new(Arc::new(totals), Arc::new(shards));
//!
//! let families = collector.collect().unwrap();
//! assert_eq!(families[0].value_of(&["total", "User"]), Some(100.0));
//!
//! let output = render_families(&families);
//! assert!(output.contains("fb_docker_pulls{scope=\"total\",entity=\"Bot\"} 50"));
//! ```

mod collector;
mod snapshot;

pub use collector::{FleetCollector, MetricsCollector};
pub use snapshot::{SnapshotBuilder, build_snapshot};
