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

//! Parser for benchmark report text.
//!
//! The report format is line-oriented. A line starting with `graphs` opens a
//! new section and names the subject graph via its last path segment (file
//! extension stripped). Every other non-blank line is an attribute line:
//!
//! ```text
//! graphs/steinlib/LIN/lin01.stp
//! cost | 2app: 53, mst: 61
//! time | 2app: 0.8, mst: 0.2
//! ```
//!
//! Attribute lines record `section[method][attribute] = value`. A section is
//! sealed and appended to the [`Report`] when the next boundary line is seen
//! or the input ends; sections with no attribute lines are dropped.
//!
//! Errors carry the 1-based line number and the raw line content. The parser
//! performs no local recovery: the first malformed line aborts the parse.

use crate::error::{BenchError, BenchResult};
use crate::report::{Report, SectionRecord};
use std::io::BufRead;

/// Leading token identifying a section boundary line.
const BOUNDARY_PREFIX: &str = "graphs";

/// Parsing options.
///
/// The one knob is the policy for attribute lines that appear before any
/// boundary line. The format gives such lines no section to belong to; in
/// strict mode (the default) they are rejected with
/// [`BenchErrorKind::OrphanAttribute`](crate::BenchErrorKind::OrphanAttribute),
/// otherwise they are parsed for validity and then dropped.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Reject attribute lines that precede the first boundary line.
    pub strict_orphans: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strict_orphans: true,
        }
    }
}

/// Parse a benchmark report with default options.
///
/// Empty input yields an empty report.
///
/// # Example
///
/// ```
/// let report = benchres_core::parse("graphs/x/g1.txt\ncost | mst: 61\n").unwrap();
/// assert_eq!(report.len(), 1);
/// assert_eq!(report.sections[0].value("mst", "cost"), Some("61"));
/// ```
pub fn parse(input: &str) -> BenchResult<Report> {
    parse_with_options(input, ParseOptions::default())
}

/// Parse a benchmark report with custom options.
pub fn parse_with_options(input: &str, options: ParseOptions) -> BenchResult<Report> {
    let mut parser = RecordParser::new(options);
    for (idx, line) in input.lines().enumerate() {
        parser.feed(line, idx + 1)?;
    }
    Ok(parser.finish())
}

/// Parse a benchmark report from a buffered reader.
///
/// The reader is consumed by the call and dropped on every exit path,
/// including on error. Read failures surface as
/// [`BenchErrorKind::Io`](crate::BenchErrorKind::Io).
pub fn parse_reader<R: BufRead>(reader: R, options: ParseOptions) -> BenchResult<Report> {
    let mut parser = RecordParser::new(options);
    for (idx, line) in reader.lines().enumerate() {
        let line =
            line.map_err(|e| BenchError::io(format!("failed to read line {}: {}", idx + 1, e)))?;
        parser.feed(&line, idx + 1)?;
    }
    Ok(parser.finish())
}

/// Line-by-line parser state.
///
/// Holds the one in-flight section accumulator. The accumulator is owned
/// here and moved into the report on flush, so a sealed section is never
/// aliased by a later one.
struct RecordParser {
    options: ParseOptions,
    report: Report,
    current: Option<SectionRecord>,
}

impl RecordParser {
    fn new(options: ParseOptions) -> Self {
        Self {
            options,
            report: Report::new(),
            current: None,
        }
    }

    /// Consume one line. `line_num` is 1-based.
    fn feed(&mut self, line: &str, line_num: usize) -> BenchResult<()> {
        if line.starts_with(BOUNDARY_PREFIX) {
            self.flush();
            self.current = Some(SectionRecord::new(graph_name(line)));
        } else if !line.is_empty() {
            let (attribute, pairs) = split_attribute_line(line, line_num)?;
            match self.current.as_mut() {
                Some(section) => {
                    for (method, value) in pairs {
                        section.record(method, attribute.as_str(), value);
                    }
                }
                None if self.options.strict_orphans => {
                    return Err(BenchError::orphan(
                        "attribute line before any section boundary",
                        line_num,
                    )
                    .with_content(line));
                }
                // Lenient mode: validated above, no section to record into.
                None => {}
            }
        }
        Ok(())
    }

    /// Seal the current section and append it, unless it is empty.
    fn flush(&mut self) {
        if let Some(section) = self.current.take() {
            if !section.is_empty() {
                self.report.push(section);
            }
        }
    }

    fn finish(mut self) -> Report {
        self.flush();
        self.report
    }
}

/// Derive the graph name from a boundary line: the text after the final
/// `/`, truncated at the first `.`.
fn graph_name(line: &str) -> &str {
    let tail = match line.rfind('/') {
        Some(pos) => &line[pos + 1..],
        None => line,
    };
    match tail.find('.') {
        Some(pos) => &tail[..pos],
        None => tail,
    }
}

/// Decompose an attribute line into its attribute name and (method, value)
/// pairs.
///
/// Grammar: `<attribute> | <method>: <value>, <method>: <value>, ...` —
/// split on the first `|`, trim the attribute name, split the method list
/// on `,`, and per entry remove all space characters before splitting on
/// the first `:`.
fn split_attribute_line(line: &str, line_num: usize) -> BenchResult<(String, Vec<(String, String)>)> {
    let (attr_part, methods_part) = line
        .split_once('|')
        .ok_or_else(|| BenchError::format("attribute line is missing '|'", line_num).with_content(line))?;

    let attribute = attr_part.trim();
    if attribute.is_empty() {
        return Err(BenchError::format("empty attribute name", line_num).with_content(line));
    }

    let mut pairs = Vec::new();
    for entry in methods_part.split(',') {
        let entry = entry.replace(' ', "");
        let (method, value) = entry
            .split_once(':')
            .ok_or_else(|| {
                BenchError::format("method entry is missing ':'", line_num).with_content(line)
            })?;
        if method.is_empty() {
            return Err(BenchError::format("empty method name", line_num).with_content(line));
        }
        if value.is_empty() {
            return Err(BenchError::format("empty value", line_num).with_content(line));
        }
        pairs.push((method.to_string(), value.to_string()));
    }

    Ok((attribute.to_string(), pairs))
}
