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

use crate::EntityType;

/// Result alias used across the metrics crate.
pub type Result<T> = core::result::Result<T, MetricsError>;

/// Errors raised while assembling a metrics snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    /// A sample was added with a label-value count that does not match the
    /// family's declared label names. Indicates miswired code.
    #[error("metric family {family}: expected {expected} label values, got {actual}")]
    InvalidLabelArity {
        family: String,
        expected: usize,
        actual: usize,
    },

    /// A shard could not report one of its cache sizes, typically because it
    /// is still initialising.
    #[error("shard {shard_id}: {entity} cache unavailable: {reason}")]
    ShardReadUnavailable {
        shard_id: u32,
        entity: EntityType,
        reason: String,
    },

    /// The fleet-wide statistics could not be read at all.
    #[error("global stats source unavailable: {0}")]
    SourceUnavailable(String),
}

impl MetricsError {
    /// Shorthand for a [`MetricsError::ShardReadUnavailable`].
    pub fn shard_unavailable(shard_id: u32, entity: EntityType, reason: impl Into<String>) -> Self {
        Self::ShardReadUnavailable {
            shard_id,
            entity,
            reason: reason.into(),
        }
    }

    /// Whether the error only affects a single shard's contribution.
    pub fn is_shard_local(&self) -> bool {
        matches!(self, Self::ShardReadUnavailable { .. })
    }
}
