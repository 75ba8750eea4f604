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

//! Core parser and data model for graph benchmark reports.
//!
//! This crate turns the line-oriented report text emitted by a
//! graph-processing experiment harness into a [`Report`]: an ordered
//! sequence of per-graph sections, each mapping method names to their
//! measured attribute/value pairs.
//!
//! See [`parse`] for the format grammar and [`ParseOptions`] for the
//! orphan-line policy.

mod error;
mod parser;
mod report;

pub use error::{BenchError, BenchErrorKind, BenchResult};
pub use parser::{parse, parse_reader, parse_with_options, ParseOptions};
pub use report::{MethodResult, Report, SectionRecord};
