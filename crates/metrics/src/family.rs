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

//! Metric family model.
//!
//! A family is a named, typed set of samples that all share the same ordered
//! label keys. Families are built fresh for every scrape and handed to the
//! caller; nothing here is shared or mutated after construction.

use crate::error::{MetricsError, Result};
use crate::metric_type::MetricType;
use std::borrow::Cow;

/// A single labeled value within a [`MetricFamily`].
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Label values, positionally matching the family's label names.
    pub label_values: Vec<Cow<'static, str>>,
    /// The numeric value of this sample.
    pub value: f64,
}

/// A named, typed collection of label-tagged samples.
///
/// Name, help text and label keys are usually compile-time constants, so
/// they are held as `Cow<'static, str>` to avoid allocating per scrape.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricFamily {
    name: Cow<'static, str>,
    help: Cow<'static, str>,
    metric_type: MetricType,
    label_names: Vec<Cow<'static, str>>,
    samples: Vec<Sample>,
}

impl MetricFamily {
    /// Creates an empty family with a fixed, ordered set of label names.
    pub fn new<L>(
        name: impl Into<Cow<'static, str>>,
        help: impl Into<Cow<'static, str>>,
        metric_type: MetricType,
        label_names: impl IntoIterator<Item = L>,
    ) -> Self
    where
        L: Into<Cow<'static, str>>,
    {
        Self {
            name: name.into(),
            help: help.into(),
            metric_type,
            label_names: label_names.into_iter().map(Into::into).collect(),
            samples: Vec::new(),
        }
    }

    /// Creates an empty gauge family.
    pub fn gauge<L>(
        name: impl Into<Cow<'static, str>>,
        help: impl Into<Cow<'static, str>>,
        label_names: impl IntoIterator<Item = L>,
    ) -> Self
    where
        L: Into<Cow<'static, str>>,
    {
        Self::new(name, help, MetricType::Gauge, label_names)
    }

    /// Creates an empty counter family.
    pub fn counter<L>(
        name: impl Into<Cow<'static, str>>,
        help: impl Into<Cow<'static, str>>,
        label_names: impl IntoIterator<Item = L>,
    ) -> Self
    where
        L: Into<Cow<'static, str>>,
    {
        Self::new(name, help, MetricType::Counter, label_names)
    }

    /// Appends a sample.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::InvalidLabelArity`] when the number of label
    /// values differs from the number of declared label names. Nothing is
    /// appended in that case.
    pub fn add_sample<V>(&mut self, label_values: impl IntoIterator<Item = V>, value: f64) -> Result<()>
    where
        V: Into<Cow<'static, str>>,
    {
        let label_values: Vec<Cow<'static, str>> = label_values.into_iter().map(Into::into).collect();
        if label_values.len() != self.label_names.len() {
            return Err(MetricsError::InvalidLabelArity {
                family: self.name.to_string(),
                expected: self.label_names.len(),
                actual: label_values.len(),
            });
        }

        self.samples.push(Sample { label_values, value });
        Ok(())
    }

    /// Appends a sample if this family's type reports `value`.
    ///
    /// Gauges always record; counters skip values that are not strictly
    /// positive. The label arity is validated either way. Returns whether a
    /// sample was appended.
    pub fn record<V>(&mut self, label_values: impl IntoIterator<Item = V>, value: f64) -> Result<bool>
    where
        V: Into<Cow<'static, str>>,
    {
        if self.metric_type.reports(value) {
            self.add_sample(label_values, value)?;
            return Ok(true);
        }

        let actual = label_values.into_iter().count();
        if actual != self.label_names.len() {
            return Err(MetricsError::InvalidLabelArity {
                family: self.name.to_string(),
                expected: self.label_names.len(),
                actual,
            });
        }
        Ok(false)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn metric_type(&self) -> MetricType {
        self.metric_type
    }

    pub fn label_names(&self) -> &[Cow<'static, str>] {
        &self.label_names
    }

    /// Samples in insertion order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Value of the first sample whose label values equal `label_values`.
    pub fn value_of(&self, label_values: &[&str]) -> Option<f64> {
        self.samples
            .iter()
            .find(|sample| {
                sample.label_values.len() == label_values.len()
                    && sample.label_values.iter().zip(label_values).all(|(have, want)| have == want)
            })
            .map(|sample| sample.value)
    }
}
