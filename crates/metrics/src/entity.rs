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

//! Entity types cached per shard.

use std::fmt;

/// A kind of entity each shard keeps a cache of.
///
/// The `Display` form is the `entity` label value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    User,
    Guild,
    TextChannel,
    VoiceChannel,
    Category,
    Emote,
    Role,
}

impl EntityType {
    /// All cached entity types, in exposition order.
    pub const ALL: [EntityType; 7] = [
        EntityType::User,
        EntityType::Guild,
        EntityType::TextChannel,
        EntityType::VoiceChannel,
        EntityType::Category,
        EntityType::Emote,
        EntityType::Role,
    ];

    /// Position of this type in [`EntityType::ALL`].
    pub const fn index(&self) -> usize {
        *self as usize
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Guild => "Guild",
            Self::TextChannel => "TextChannel",
            Self::VoiceChannel => "VoiceChannel",
            Self::Category => "Category",
            Self::Emote => "Emote",
            Self::Role => "Role",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
