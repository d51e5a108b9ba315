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

use super::snapshot::SnapshotBuilder;
use crate::error::Result;
use crate::family::MetricFamily;
use crate::source::{GlobalStatsSource, ShardSource};
use std::sync::Arc;

/// Something a scrape endpoint can pull metric families from.
pub trait MetricsCollector: Send + Sync {
    /// Produces a fresh set of families for one scrape.
    fn collect(&self) -> Result<Vec<MetricFamily>>;
}

/// Collector for the fleet: global totals plus every live shard.
///
/// Delegates each [`collect`](MetricsCollector::collect) call straight to a
/// [`SnapshotBuilder`]. No caching, retries or rate limiting happen here;
/// those belong to whatever serves the scrape.
#[derive(Clone)]
pub struct FleetCollector {
    global: Arc<dyn GlobalStatsSource>,
    shards: Arc<dyn ShardSource>,
    builder: SnapshotBuilder,
}

impl FleetCollector {
    pub fn new(global: Arc<dyn GlobalStatsSource>, shards: Arc<dyn ShardSource>) -> Self {
        Self::with_builder(global, shards, SnapshotBuilder::default())
    }

    pub fn with_builder(global: Arc<dyn GlobalStatsSource>, shards: Arc<dyn ShardSource>, builder: SnapshotBuilder) -> Self {
        Self { global, shards, builder }
    }
}

impl MetricsCollector for FleetCollector {
    fn collect(&self) -> Result<Vec<MetricFamily>> {
        self.builder.build(self.global.as_ref(), self.shards.as_ref())
    }
}

impl std::fmt::Debug for FleetCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FleetCollector").field("builder", &self.builder).finish_non_exhaustive()
    }
}
