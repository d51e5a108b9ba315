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

//! Read-only views of the data a snapshot is assembled from.
//!
//! Both sources are owned and kept current elsewhere in the process; the
//! snapshot builder only reads them. Reads are point samples: values of one
//! shard may be taken at slightly different instants, and no consistency
//! with the global totals is implied.

use crate::EntityType;
use crate::error::Result;
use std::sync::Arc;

/// Fleet-wide totals maintained by the process.
///
/// Every accessor is a cheap, non-blocking read of an in-memory counter.
pub trait GlobalStatsSource: Send + Sync {
    fn total_users(&self) -> u64;
    fn total_guilds(&self) -> u64;
    fn total_text_channels(&self) -> u64;
    fn total_voice_channels(&self) -> u64;
    fn total_categories(&self) -> u64;
    fn total_emotes(&self) -> u64;
    fn total_roles(&self) -> u64;

    /// Number of music players currently playing.
    fn playing_count(&self) -> u64;

    /// Bot image pulls as reported by the registry; zero until first fetched.
    fn pull_count_bot(&self) -> u64;

    /// Database image pulls as reported by the registry; zero until first fetched.
    fn pull_count_db(&self) -> u64;

    /// Reads every value once.
    ///
    /// Sources that may be unreachable override this and return
    /// [`MetricsError::SourceUnavailable`](crate::MetricsError::SourceUnavailable),
    /// which fails the scrape.
    fn read_totals(&self) -> Result<GlobalTotals> {
        Ok(GlobalTotals {
            entities: [
                self.total_users(),
                self.total_guilds(),
                self.total_text_channels(),
                self.total_voice_channels(),
                self.total_categories(),
                self.total_emotes(),
                self.total_roles(),
            ],
            playing: self.playing_count(),
            pulls_bot: self.pull_count_bot(),
            pulls_db: self.pull_count_db(),
        })
    }
}

/// One read of a [`GlobalStatsSource`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalTotals {
    /// Totals indexed by [`EntityType::index`].
    pub entities: [u64; 7],
    pub playing: u64,
    pub pulls_bot: u64,
    pub pulls_db: u64,
}

impl GlobalTotals {
    pub fn entity_total(&self, entity: EntityType) -> u64 {
        self.entities[entity.index()]
    }
}

/// Read-only view of one live shard.
pub trait ShardHandle: Send + Sync {
    /// Shard index, unique among the shards of one enumeration.
    fn id(&self) -> u32;

    fn user_cache_size(&self) -> Result<u64>;
    fn guild_cache_size(&self) -> Result<u64>;
    fn text_channel_cache_size(&self) -> Result<u64>;
    fn voice_channel_cache_size(&self) -> Result<u64>;
    fn category_cache_size(&self) -> Result<u64>;
    fn emote_cache_size(&self) -> Result<u64>;
    fn role_cache_size(&self) -> Result<u64>;

    /// Cache size for `entity`.
    fn cache_size(&self, entity: EntityType) -> Result<u64> {
        match entity {
            EntityType::User => self.user_cache_size(),
            EntityType::Guild => self.guild_cache_size(),
            EntityType::TextChannel => self.text_channel_cache_size(),
            EntityType::VoiceChannel => self.voice_channel_cache_size(),
            EntityType::Category => self.category_cache_size(),
            EntityType::Emote => self.emote_cache_size(),
            EntityType::Role => self.role_cache_size(),
        }
    }

    /// Reads all seven cache sizes, stopping at the first unavailable one.
    fn read_sizes(&self) -> Result<ShardCacheSizes> {
        let mut sizes = [0u64; 7];
        for entity in EntityType::ALL {
            sizes[entity.index()] = self.cache_size(entity)?;
        }
        Ok(ShardCacheSizes {
            shard_id: self.id(),
            sizes,
        })
    }
}

/// One complete read of a shard's caches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShardCacheSizes {
    pub shard_id: u32,
    /// Sizes indexed by [`EntityType::index`].
    pub sizes: [u64; 7],
}

impl ShardCacheSizes {
    pub fn get(&self, entity: EntityType) -> u64 {
        self.sizes[entity.index()]
    }
}

/// Enumerates the shards known at the time of the call.
///
/// The returned set is materialized per call; it may be empty and may differ
/// between calls as shards are started or shut down. Its order carries no
/// meaning.
pub trait ShardSource: Send + Sync {
    fn enumerate_shards(&self) -> Vec<Arc<dyn ShardHandle>>;
}

impl ShardSource for Vec<Arc<dyn ShardHandle>> {
    fn enumerate_shards(&self) -> Vec<Arc<dyn ShardHandle>> {
        self.clone()
    }
}
