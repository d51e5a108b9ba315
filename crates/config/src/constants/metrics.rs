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

// Metric family names
pub const METRIC_JDA_ENTITIES: &str = "fb_jda_entities";
pub const METRIC_PLAYING_MUSIC_PLAYERS: &str = "fb_playing_music_players";
pub const METRIC_DOCKER_PULLS: &str = "fb_docker_pulls";

pub const HELP_JDA_ENTITIES: &str = "Amount of JDA entities";
pub const HELP_PLAYING_MUSIC_PLAYERS: &str = "Currently playing music players";
pub const HELP_DOCKER_PULLS: &str = "Total docker image pulls as reported by the docker hub.";

// Label keys, in the positional order every sample supplies them
pub const LABEL_SCOPE: &str = "scope";
pub const LABEL_ENTITY: &str = "entity";
pub const LABEL_NAMES: [&str; 2] = [LABEL_SCOPE, LABEL_ENTITY];

/// Scope label value for fleet-wide rows. Per-shard rows use the decimal shard id.
pub const SCOPE_TOTAL: &str = "total";

// Entity label values outside the cached entity types
pub const ENTITY_PLAYERS: &str = "Players";
pub const ENTITY_PULLS_BOT: &str = "Bot";
pub const ENTITY_PULLS_DB: &str = "Db";
