// Benchres - Graph benchmark report toolkit
//
// Copyright (c) 2026 Benchres contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Record structures for parsed benchmark reports.

use std::collections::BTreeMap;

/// Measurements for one method within a section: attribute name to value.
///
/// Values are opaque strings at this layer; no numeric interpretation is
/// performed.
pub type MethodResult = BTreeMap<String, String>;

/// All measurements for one graph section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionRecord {
    /// Short name of the subject graph, derived from the boundary line.
    /// Not required to be unique across a report.
    pub graph: String,
    /// Per-method measurements, keyed by method name.
    pub methods: BTreeMap<String, MethodResult>,
}

impl SectionRecord {
    /// Create an empty record for the given graph.
    pub fn new(graph: impl Into<String>) -> Self {
        Self {
            graph: graph.into(),
            methods: BTreeMap::new(),
        }
    }

    /// Record a value for a (method, attribute) pair.
    ///
    /// A later write for the same pair overwrites the earlier value.
    pub fn record(
        &mut self,
        method: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.methods
            .entry(method.into())
            .or_default()
            .insert(attribute.into(), value.into());
    }

    /// Get the measurements for a method by name.
    pub fn method(&self, name: &str) -> Option<&MethodResult> {
        self.methods.get(name)
    }

    /// Get a single value by method and attribute name.
    pub fn value(&self, method: &str, attribute: &str) -> Option<&str> {
        self.methods
            .get(method)?
            .get(attribute)
            .map(String::as_str)
    }

    /// Whether no measurements have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Iterate over the method names in this section.
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }
}

/// A parsed benchmark report: one [`SectionRecord`] per section, in the
/// order the sections appeared in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    /// Sections in file order. Duplicate graph names are legal and simply
    /// produce multiple entries.
    pub sections: Vec<SectionRecord>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sealed section.
    pub fn push(&mut self, section: SectionRecord) {
        self.sections.push(section);
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the report has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Get a section by position.
    pub fn get(&self, index: usize) -> Option<&SectionRecord> {
        self.sections.get(index)
    }

    /// The first section, if any.
    pub fn first(&self) -> Option<&SectionRecord> {
        self.sections.first()
    }

    /// Iterate over sections in file order.
    pub fn iter(&self) -> impl Iterator<Item = &SectionRecord> {
        self.sections.iter()
    }

    /// Iterate over every section recorded for a given graph name.
    pub fn sections_for<'a>(&'a self, graph: &'a str) -> impl Iterator<Item = &'a SectionRecord> {
        self.sections.iter().filter(move |s| s.graph == graph)
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a SectionRecord;
    type IntoIter = std::slice::Iter<'a, SectionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
