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

//! Structured error types for the benchres CLI.

use benchres_core::BenchError;
use benchres_csv::CsvError;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O operation failed (file open, read, or write).
    #[error("I/O error for '{}': {}", .path.display(), .message)]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Report parsing error.
    #[error("Parse error: {0}")]
    Parse(#[from] BenchError),

    /// CSV export error.
    #[error("CSV export error: {0}")]
    Csv(#[from] CsvError),
}

impl CliError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io_error(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
