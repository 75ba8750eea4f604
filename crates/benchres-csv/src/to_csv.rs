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

//! Convert parsed benchmark reports to CSV.
//!
//! Output is long form: one row per (graph, method, attribute, value)
//! triple, with sections in report order. Duplicate graph names in the
//! report simply produce more rows; no uniqueness is assumed.

use crate::error::{CsvError, Result};
use benchres_core::Report;
use std::io::Write;

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include header row (default: true)
    pub include_headers: bool,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            quote_style: csv::QuoteStyle::Necessary,
        }
    }
}

/// Convert a report to a CSV string.
///
/// # Example
/// ```
/// use benchres_core::parse;
/// use benchres_csv::to_csv;
///
/// let report = parse("graphs/x/g1.gr\ncost | mst: 61\n").unwrap();
/// let csv = to_csv(&report).unwrap();
/// assert_eq!(csv, "graph,method,attribute,value\ng1,mst,cost,61\n");
/// ```
pub fn to_csv(report: &Report) -> Result<String> {
    to_csv_with_config(report, ToCsvConfig::default())
}

/// Convert a report to a CSV string with custom configuration.
pub fn to_csv_with_config(report: &Report, config: ToCsvConfig) -> Result<String> {
    let mut buf = Vec::new();
    to_csv_writer_with_config(report, &mut buf, config)?;
    String::from_utf8(buf).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV serialization".to_string(),
    })
}

/// Write a report as CSV to the given writer.
pub fn to_csv_writer<W: Write>(report: &Report, writer: W) -> Result<()> {
    to_csv_writer_with_config(report, writer, ToCsvConfig::default())
}

/// Write a report as CSV to the given writer with custom configuration.
pub fn to_csv_writer_with_config<W: Write>(
    report: &Report,
    writer: W,
    config: ToCsvConfig,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .from_writer(writer);

    if config.include_headers {
        wtr.write_record(["graph", "method", "attribute", "value"])?;
    }

    for section in report {
        for (method, attributes) in &section.methods {
            for (attribute, value) in attributes {
                wtr.write_record([
                    section.graph.as_str(),
                    method.as_str(),
                    attribute.as_str(),
                    value.as_str(),
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
