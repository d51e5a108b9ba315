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

//! In-memory fleet totals.

use crate::source::GlobalStatsSource;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared storage for fleet-wide totals.
///
/// Producers elsewhere in the process publish their latest counts through the
/// setters; scrapes read them through [`GlobalStatsSource`]. Clones share the
/// same counters.
#[derive(Clone, Debug, Default)]
pub struct FleetTotals {
    users: Arc<AtomicU64>,
    guilds: Arc<AtomicU64>,
    text_channels: Arc<AtomicU64>,
    voice_channels: Arc<AtomicU64>,
    categories: Arc<AtomicU64>,
    emotes: Arc<AtomicU64>,
    roles: Arc<AtomicU64>,
    playing: Arc<AtomicU64>,
    pulls_bot: Arc<AtomicU64>,
    pulls_db: Arc<AtomicU64>,
}

impl FleetTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_total_users(&self, value: u64) {
        self.users.store(value, Ordering::Relaxed);
    }

    pub fn set_total_guilds(&self, value: u64) {
        self.guilds.store(value, Ordering::Relaxed);
    }

    pub fn set_total_text_channels(&self, value: u64) {
        self.text_channels.store(value, Ordering::Relaxed);
    }

    pub fn set_total_voice_channels(&self, value: u64) {
        self.voice_channels.store(value, Ordering::Relaxed);
    }

    pub fn set_total_categories(&self, value: u64) {
        self.categories.store(value, Ordering::Relaxed);
    }

    pub fn set_total_emotes(&self, value: u64) {
        self.emotes.store(value, Ordering::Relaxed);
    }

    pub fn set_total_roles(&self, value: u64) {
        self.roles.store(value, Ordering::Relaxed);
    }

    pub fn set_playing_count(&self, value: u64) {
        self.playing.store(value, Ordering::Relaxed);
    }

    /// Registry pull counts only grow; a lower value than the stored one is ignored.
    pub fn set_pull_count_bot(&self, value: u64) {
        self.pulls_bot.fetch_max(value, Ordering::Relaxed);
    }

    /// Registry pull counts only grow; a lower value than the stored one is ignored.
    pub fn set_pull_count_db(&self, value: u64) {
        self.pulls_db.fetch_max(value, Ordering::Relaxed);
    }
}

impl GlobalStatsSource for FleetTotals {
    fn total_users(&self) -> u64 {
        self.users.load(Ordering::Relaxed)
    }

    fn total_guilds(&self) -> u64 {
        self.guilds.load(Ordering::Relaxed)
    }

    fn total_text_channels(&self) -> u64 {
        self.text_channels.load(Ordering::Relaxed)
    }

    fn total_voice_channels(&self) -> u64 {
        self.voice_channels.load(Ordering::Relaxed)
    }

    fn total_categories(&self) -> u64 {
        self.categories.load(Ordering::Relaxed)
    }

    fn total_emotes(&self) -> u64 {
        self.emotes.load(Ordering::Relaxed)
    }

    fn total_roles(&self) -> u64 {
        self.roles.load(Ordering::Relaxed)
    }

    fn playing_count(&self) -> u64 {
        self.playing.load(Ordering::Relaxed)
    }

    fn pull_count_bot(&self) -> u64 {
        self.pulls_bot.load(Ordering::Relaxed)
    }

    fn pull_count_db(&self) -> u64 {
        self.pulls_db.load(Ordering::Relaxed)
    }
}
