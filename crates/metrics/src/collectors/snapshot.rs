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

//! Snapshot assembly.
//!
//! [`SnapshotBuilder::build`] reads the global stats once and enumerates the
//! shards once, producing three families in a fixed order:
//!
//! - `fb_jda_entities` (gauge): seven `total` rows, then seven rows per shard
//! - `fb_playing_music_players` (gauge): one `total` row
//! - `fb_docker_pulls` (counter): up to two `total` rows, present only when positive
//!
//! Every sample carries the labels `[scope, entity]`.

use crate::error::Result;
use crate::family::MetricFamily;
use crate::source::{GlobalStatsSource, GlobalTotals, ShardCacheSizes, ShardSource};
use crate::{EntityType, SnapshotConfig};
use fbstats_config::{
    ENTITY_PLAYERS, ENTITY_PULLS_BOT, ENTITY_PULLS_DB, HELP_DOCKER_PULLS, HELP_JDA_ENTITIES, HELP_PLAYING_MUSIC_PLAYERS,
    LABEL_NAMES, METRIC_DOCKER_PULLS, METRIC_JDA_ENTITIES, METRIC_PLAYING_MUSIC_PLAYERS, SCOPE_TOTAL,
};
use std::borrow::Cow;
use tracing::{debug, warn};

/// Builds metric snapshots from a global stats source and a shard source.
///
/// Holds only configuration; every call to [`build`](Self::build) starts
/// from empty families, so one builder can serve concurrent scrapes.
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    config: SnapshotConfig,
}

impl SnapshotBuilder {
    pub fn new(config: SnapshotConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SnapshotConfig {
        &self.config
    }

    /// Assembles one snapshot.
    ///
    /// # Errors
    ///
    /// - [`crate::MetricsError::SourceUnavailable`] if the global stats cannot be read.
    /// - [`crate::MetricsError::ShardReadUnavailable`] only when shard skipping is
    ///   disabled; otherwise unreadable shards are left out.
    pub fn build(&self, global: &dyn GlobalStatsSource, shards: &dyn ShardSource) -> Result<Vec<MetricFamily>> {
        let totals = global.read_totals()?;

        let mut entities = MetricFamily::gauge(METRIC_JDA_ENTITIES, HELP_JDA_ENTITIES, LABEL_NAMES);
        let mut players = MetricFamily::gauge(METRIC_PLAYING_MUSIC_PLAYERS, HELP_PLAYING_MUSIC_PLAYERS, LABEL_NAMES);
        let mut pulls = MetricFamily::counter(METRIC_DOCKER_PULLS, HELP_DOCKER_PULLS, LABEL_NAMES);

        add_global_samples(&totals, &mut entities, &mut players, &mut pulls)?;
        let (included, skipped) = self.add_shard_samples(shards, &mut entities)?;

        debug!(
            shards = included,
            skipped_shards = skipped,
            entity_samples = entities.len(),
            pull_samples = pulls.len(),
            "metrics snapshot built"
        );

        Ok(vec![entities, players, pulls])
    }

    /// Appends seven rows per readable shard. Returns `(included, skipped)` shard counts.
    fn add_shard_samples(&self, shards: &dyn ShardSource, entities: &mut MetricFamily) -> Result<(usize, usize)> {
        let mut included = 0;
        let mut skipped = 0;

        for shard in shards.enumerate_shards() {
            // all seven sizes are read before any row is added, so a shard
            // never contributes a partial row set
            let sizes = match shard.read_sizes() {
                Ok(sizes) => sizes,
                Err(e) if e.is_shard_local() && self.config.skip_unavailable_shards => {
                    debug!(shard_id = shard.id(), error = %e, "skipping shard in metrics snapshot");
                    skipped += 1;
                    continue;
                }
                Err(e) => {
                    warn!(shard_id = shard.id(), error = %e, "shard read failed, aborting metrics snapshot");
                    return Err(e);
                }
            };

            add_shard_rows(&sizes, entities)?;
            included += 1;
        }

        Ok((included, skipped))
    }
}

/// Builds a snapshot with the default configuration.
pub fn build_snapshot(global: &dyn GlobalStatsSource, shards: &dyn ShardSource) -> Result<Vec<MetricFamily>> {
    SnapshotBuilder::default().build(global, shards)
}

fn add_global_samples(
    totals: &GlobalTotals,
    entities: &mut MetricFamily,
    players: &mut MetricFamily,
    pulls: &mut MetricFamily,
) -> Result<()> {
    for entity in EntityType::ALL {
        entities.record([SCOPE_TOTAL, entity.as_str()], totals.entity_total(entity) as f64)?;
    }

    players.record([SCOPE_TOTAL, ENTITY_PLAYERS], totals.playing as f64)?;

    // counter family: zero pull counts are suppressed by `record`
    pulls.record([SCOPE_TOTAL, ENTITY_PULLS_BOT], totals.pulls_bot as f64)?;
    pulls.record([SCOPE_TOTAL, ENTITY_PULLS_DB], totals.pulls_db as f64)?;

    Ok(())
}

fn add_shard_rows(sizes: &ShardCacheSizes, entities: &mut MetricFamily) -> Result<()> {
    let scope: Cow<'static, str> = Cow::Owned(sizes.shard_id.to_string());
    for entity in EntityType::ALL {
        entities.record([scope.clone(), Cow::Borrowed(entity.as_str())], sizes.get(entity) as f64)?;
    }
    Ok(())
}
