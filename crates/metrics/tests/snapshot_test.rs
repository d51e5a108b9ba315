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

use fbstats_metrics::{
    EntityType, FleetCollector, FleetTotals, MetricFamily, MetricType, MetricsCollector, MetricsError, Result, ShardHandle,
    ShardSource, SnapshotBuilder, SnapshotConfig, build_snapshot, render_families,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::thread;

/// Shard fixture with adjustable cache sizes, indexed like `EntityType::ALL`.
struct TestShard {
    id: u32,
    sizes: [AtomicU64; 7],
    unavailable: Option<EntityType>,
}

impl TestShard {
    fn new(id: u32, sizes: [u64; 7]) -> Self {
        Self {
            id,
            sizes: sizes.map(AtomicU64::new),
            unavailable: None,
        }
    }

    fn uniform(id: u32, size: u64) -> Self {
        Self::new(id, [size; 7])
    }

    fn initialising(id: u32, entity: EntityType) -> Self {
        Self {
            unavailable: Some(entity),
            ..Self::uniform(id, 1)
        }
    }

    fn size(&self, entity: EntityType) -> Result<u64> {
        if self.unavailable == Some(entity) {
            return Err(MetricsError::shard_unavailable(self.id, entity, "shard is still starting"));
        }
        Ok(self.sizes[entity.index()].load(Ordering::Relaxed))
    }
}

impl ShardHandle for TestShard {
    fn id(&self) -> u32 {
        self.id
    }
    fn user_cache_size(&self) -> Result<u64> {
        self.size(EntityType::User)
    }
    fn guild_cache_size(&self) -> Result<u64> {
        self.size(EntityType::Guild)
    }
    fn text_channel_cache_size(&self) -> Result<u64> {
        self.size(EntityType::TextChannel)
    }
    fn voice_channel_cache_size(&self) -> Result<u64> {
        self.size(EntityType::VoiceChannel)
    }
    fn category_cache_size(&self) -> Result<u64> {
        self.size(EntityType::Category)
    }
    fn emote_cache_size(&self) -> Result<u64> {
        self.size(EntityType::Emote)
    }
    fn role_cache_size(&self) -> Result<u64> {
        self.size(EntityType::Role)
    }
}

/// Shard registry fixture whose membership can change between scrapes.
#[derive(Default)]
struct TestRegistry {
    shards: RwLock<Vec<Arc<dyn ShardHandle>>>,
}

impl TestRegistry {
    fn add(&self, shard: TestShard) {
        self.shards.write().unwrap().push(Arc::new(shard));
    }

    fn remove(&self, id: u32) {
        self.shards.write().unwrap().retain(|s| s.id() != id);
    }
}

impl ShardSource for TestRegistry {
    fn enumerate_shards(&self) -> Vec<Arc<dyn ShardHandle>> {
        self.shards.read().unwrap().clone()
    }
}

fn lenient() -> SnapshotBuilder {
    SnapshotBuilder::new(SnapshotConfig {
        skip_unavailable_shards: true,
    })
}

fn totals(values: [u64; 7], playing: u64, bot: u64, db: u64) -> FleetTotals {
    let totals = FleetTotals::new();
    totals.set_total_users(values[0]);
    totals.set_total_guilds(values[1]);
    totals.set_total_text_channels(values[2]);
    totals.set_total_voice_channels(values[3]);
    totals.set_total_categories(values[4]);
    totals.set_total_emotes(values[5]);
    totals.set_total_roles(values[6]);
    totals.set_playing_count(playing);
    totals.set_pull_count_bot(bot);
    totals.set_pull_count_db(db);
    totals
}

fn rows_with_scope<'a>(family: &'a MetricFamily, scope: &str) -> Vec<(&'a str, f64)> {
    family
        .samples()
        .iter()
        .filter(|s| s.label_values[0] == scope)
        .map(|s| (&*s.label_values[1], s.value))
        .collect()
}

#[test]
fn test_documented_scenario() {
    let global = totals([100, 10, 5, 3, 2, 1, 0], 4, 50, 0);
    let shards: Vec<Arc<dyn ShardHandle>> = vec![Arc::new(TestShard::new(0, [1, 1, 1, 1, 1, 1, 0]))];

    let families = build_snapshot(&global, &shards).unwrap();
    assert_eq!(families.len(), 3);
    let (entities, players, pulls) = (&families[0], &families[1], &families[2]);

    assert_eq!(
        rows_with_scope(entities, "total"),
        [
            ("User", 100.0),
            ("Guild", 10.0),
            ("TextChannel", 5.0),
            ("VoiceChannel", 3.0),
            ("Category", 2.0),
            ("Emote", 1.0),
            ("Role", 0.0),
        ]
    );
    assert_eq!(
        rows_with_scope(entities, "0"),
        [
            ("User", 1.0),
            ("Guild", 1.0),
            ("TextChannel", 1.0),
            ("VoiceChannel", 1.0),
            ("Category", 1.0),
            ("Emote", 1.0),
            ("Role", 0.0),
        ]
    );
    assert_eq!(entities.len(), 14);

    assert_eq!(players.len(), 1);
    assert_eq!(players.value_of(&["total", "Players"]), Some(4.0));

    assert_eq!(pulls.len(), 1);
    assert_eq!(pulls.value_of(&["total", "Bot"]), Some(50.0));
    assert_eq!(pulls.value_of(&["total", "Db"]), None);
}

#[test]
fn test_seven_rows_per_shard() {
    let registry = TestRegistry::default();
    for id in 0..5 {
        registry.add(TestShard::uniform(id, u64::from(id) * 10));
    }

    let families = build_snapshot(&FleetTotals::new(), &registry).unwrap();
    let entities = &families[0];
    assert_eq!(entities.len(), 7 + 7 * 5);

    for id in 0..5u32 {
        let scope = id.to_string();
        let rows = rows_with_scope(entities, &scope);
        let labels: Vec<&str> = rows.iter().map(|(entity, _)| *entity).collect();
        assert_eq!(labels, EntityType::ALL.map(|e| e.as_str()));
        assert!(rows.iter().all(|(_, value)| *value == f64::from(id * 10)));
    }
}

#[test]
fn test_empty_shard_source() {
    let registry = TestRegistry::default();
    let families = build_snapshot(&totals([1; 7], 0, 0, 0), &registry).unwrap();

    assert_eq!(families[0].len(), 7);
    assert!(families[0].samples().iter().all(|s| s.label_values[0] == "total"));
}

#[test]
fn test_zero_sized_shard_caches_are_reported() {
    let shards: Vec<Arc<dyn ShardHandle>> = vec![Arc::new(TestShard::uniform(9, 0))];
    let families = build_snapshot(&FleetTotals::new(), &shards).unwrap();

    let rows = rows_with_scope(&families[0], "9");
    assert_eq!(rows.len(), 7);
    assert!(rows.iter().all(|(_, value)| *value == 0.0));
}

#[test]
fn test_pull_counters_present_only_when_positive() {
    let shards: Vec<Arc<dyn ShardHandle>> = Vec::new();

    let families = build_snapshot(&totals([0; 7], 0, 0, 0), &shards).unwrap();
    assert!(families[2].is_empty());

    let families = build_snapshot(&totals([0; 7], 0, 0, 7), &shards).unwrap();
    assert_eq!(families[2].len(), 1);
    assert_eq!(families[2].value_of(&["total", "Db"]), Some(7.0));

    let families = build_snapshot(&totals([0; 7], 0, 3, 7), &shards).unwrap();
    assert_eq!(families[2].len(), 2);
    assert_eq!(families[2].value_of(&["total", "Bot"]), Some(3.0));
}

#[test]
fn test_every_sample_has_scope_and_entity() {
    let registry = TestRegistry::default();
    registry.add(TestShard::uniform(0, 3));
    registry.add(TestShard::uniform(1, 4));

    let families = build_snapshot(&totals([5; 7], 2, 1, 1), &registry).unwrap();
    for family in &families {
        assert_eq!(family.label_names(), ["scope", "entity"]);
        assert!(family.samples().iter().all(|s| s.label_values.len() == 2));
    }
}

#[test]
fn test_unavailable_shard_does_not_abort_scrape() {
    let registry = TestRegistry::default();
    registry.add(TestShard::uniform(0, 2));
    registry.add(TestShard::initialising(1, EntityType::Emote));
    registry.add(TestShard::uniform(2, 3));

    let families = lenient().build(&totals([1; 7], 0, 0, 0), &registry).unwrap();
    let entities = &families[0];

    assert_eq!(entities.len(), 7 * 3);
    assert!(rows_with_scope(entities, "1").is_empty());
    assert_eq!(rows_with_scope(entities, "0").len(), 7);
    assert_eq!(rows_with_scope(entities, "2").len(), 7);
}

#[test]
fn test_strict_builder_fails_on_unavailable_shard() {
    let registry = TestRegistry::default();
    registry.add(TestShard::initialising(3, EntityType::User));

    let err = SnapshotBuilder::new(SnapshotConfig::strict())
        .build(&FleetTotals::new(), &registry)
        .unwrap_err();
    assert!(matches!(err, MetricsError::ShardReadUnavailable { shard_id: 3, .. }));
}

#[test]
fn test_collector_reflects_changes_between_scrapes() {
    let global = FleetTotals::new();
    let registry = Arc::new(TestRegistry::default());
    registry.add(TestShard::uniform(0, 1));

    let collector = FleetCollector::with_builder(Arc::new(global.clone()), registry.clone(), lenient());

    let first = collector.collect().unwrap();
    assert_eq!(first[0].value_of(&["total", "Guild"]), Some(0.0));
    assert_eq!(first[0].len(), 14);

    global.set_total_guilds(42);
    registry.add(TestShard::uniform(1, 5));
    registry.remove(0);

    let second = collector.collect().unwrap();
    assert_eq!(second[0].value_of(&["total", "Guild"]), Some(42.0));
    assert_eq!(second[0].len(), 14);
    assert!(rows_with_scope(&second[0], "0").is_empty());
    assert_eq!(second[0].value_of(&["1", "User"]), Some(5.0));

    // the first snapshot is owned by the caller and unaffected
    assert_eq!(first[0].value_of(&["total", "Guild"]), Some(0.0));
}

#[test]
fn test_concurrent_scrapes() {
    let registry = Arc::new(TestRegistry::default());
    for id in 0..16 {
        registry.add(TestShard::uniform(id, 1));
    }
    let collector = Arc::new(FleetCollector::with_builder(
        Arc::new(totals([1; 7], 1, 1, 1)),
        registry,
        lenient(),
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let collector = Arc::clone(&collector);
            thread::spawn(move || collector.collect().map(|families| families[0].len()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 7 + 7 * 16);
    }
}

#[test]
fn test_collector_is_usable_as_trait_object() {
    let shards: Vec<Arc<dyn ShardHandle>> = vec![Arc::new(TestShard::uniform(0, 1))];
    let collectors: Vec<Box<dyn MetricsCollector>> = vec![Box::new(FleetCollector::with_builder(
        Arc::new(FleetTotals::new()),
        Arc::new(shards),
        lenient(),
    ))];

    let families: Vec<MetricFamily> = collectors.iter().flat_map(|c| c.collect().unwrap()).collect();
    assert_eq!(families.len(), 3);
    assert_eq!(families[2].metric_type(), MetricType::Counter);
}

#[test]
fn test_rendered_snapshot() {
    let shards: Vec<Arc<dyn ShardHandle>> = vec![Arc::new(TestShard::new(0, [1, 1, 1, 1, 1, 1, 0]))];
    let families = build_snapshot(&totals([100, 10, 5, 3, 2, 1, 0], 4, 50, 0), &shards).unwrap();
    let output = render_families(&families);

    assert!(output.contains("# TYPE fb_jda_entities gauge\n"));
    assert!(output.contains("fb_jda_entities{scope=\"total\",entity=\"User\"} 100\n"));
    assert!(output.contains("fb_jda_entities{scope=\"0\",entity=\"Role\"} 0\n"));
    assert!(output.contains("fb_playing_music_players{scope=\"total\",entity=\"Players\"} 4\n"));
    assert!(output.contains("# TYPE fb_docker_pulls counter\n"));
    assert!(output.contains("fb_docker_pulls{scope=\"total\",entity=\"Bot\"} 50\n"));
    assert!(!output.contains("entity=\"Db\""));
}
