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

//! CSV export for parsed benchmark reports.
//!
//! Converts a [`benchres_core::Report`] into tabular CSV, one row per
//! (graph, method, attribute, value) triple. The report is read-only input;
//! duplicate graph names produce multiple row groups rather than being
//! merged.
//!
//! # Example
//!
//! ```
//! use benchres_core::parse;
//! use benchres_csv::to_csv;
//!
//! let report = parse("graphs/x/g1.gr\ncost | 2app: 53, mst: 61\n").unwrap();
//! let csv = to_csv(&report).unwrap();
//! assert!(csv.starts_with("graph,method,attribute,value\n"));
//! assert!(csv.contains("g1,2app,cost,53\n"));
//! ```
//!
//! Delimiter, header row, and quoting are configurable through
//! [`ToCsvConfig`] with [`to_csv_with_config`]; [`to_csv_writer`] streams
//! to any [`std::io::Write`] sink.

mod error;
mod to_csv;

// Re-export public API
pub use error::{CsvError, Result};
pub use to_csv::{
    to_csv, to_csv_with_config, to_csv_writer, to_csv_writer_with_config, ToCsvConfig,
};
