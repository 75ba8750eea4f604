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

//! Error types for report parsing.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchErrorKind {
    /// An attribute line that does not match the grammar.
    Format,
    /// An attribute line before any section boundary.
    OrphanAttribute,
    /// I/O error (file operations, reading the source, etc).
    Io,
}

impl fmt::Display for BenchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format => write!(f, "FormatError"),
            Self::OrphanAttribute => write!(f, "OrphanAttributeError"),
            Self::Io => write!(f, "IOError"),
        }
    }
}

/// An error that occurred while parsing a benchmark report.
#[derive(Debug, Clone, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct BenchError {
    /// The kind of error.
    pub kind: BenchErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based; 0 for errors with no line, e.g. I/O).
    pub line: usize,
    /// The raw content of the offending line, when available.
    pub content: Option<String>,
}

impl BenchError {
    /// Create a new error.
    pub fn new(kind: BenchErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            content: None,
        }
    }

    /// Attach the raw line content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    // Convenience constructors for each error kind
    pub fn format(message: impl Into<String>, line: usize) -> Self {
        Self::new(BenchErrorKind::Format, message, line)
    }

    pub fn orphan(message: impl Into<String>, line: usize) -> Self {
        Self::new(BenchErrorKind::OrphanAttribute, message, line)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(BenchErrorKind::Io, message, 0)
    }
}

/// Result type for report operations.
pub type BenchResult<T> = Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== BenchErrorKind Display tests ====================

    #[test]
    fn test_error_kind_display_format() {
        assert_eq!(format!("{}", BenchErrorKind::Format), "FormatError");
    }

    #[test]
    fn test_error_kind_display_orphan() {
        assert_eq!(
            format!("{}", BenchErrorKind::OrphanAttribute),
            "OrphanAttributeError"
        );
    }

    #[test]
    fn test_error_kind_display_io() {
        assert_eq!(format!("{}", BenchErrorKind::Io), "IOError");
    }

    #[test]
    fn test_error_kind_equality() {
        assert_eq!(BenchErrorKind::Format, BenchErrorKind::Format);
        assert_ne!(BenchErrorKind::Format, BenchErrorKind::Io);
    }

    // ==================== BenchError Display tests ====================

    #[test]
    fn test_error_display() {
        let err = BenchError::new(BenchErrorKind::Format, "missing '|'", 42);
        let msg = format!("{}", err);
        assert!(msg.contains("FormatError"));
        assert!(msg.contains("line 42"));
        assert!(msg.contains("missing '|'"));
    }

    #[test]
    fn test_error_with_content() {
        let err = BenchError::format("missing '|'", 5).with_content("acc m1 0.5");
        assert_eq!(err.content, Some("acc m1 0.5".to_string()));
    }

    // ==================== Convenience constructor tests ====================

    #[test]
    fn test_error_format() {
        let err = BenchError::format("test", 1);
        assert_eq!(err.kind, BenchErrorKind::Format);
        assert_eq!(err.line, 1);
        assert_eq!(err.content, None);
    }

    #[test]
    fn test_error_orphan() {
        let err = BenchError::orphan("test", 2);
        assert_eq!(err.kind, BenchErrorKind::OrphanAttribute);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_error_io() {
        let err = BenchError::io("failed to read file");
        assert_eq!(err.kind, BenchErrorKind::Io);
        assert_eq!(err.line, 0);
    }

    // ==================== Error trait tests ====================

    #[test]
    fn test_error_is_std_error() {
        fn accepts_error<E: std::error::Error>(_: E) {}
        accepts_error(BenchError::format("test", 1));
    }

    #[test]
    fn test_error_clone() {
        let original = BenchError::format("message", 5).with_content("raw line");
        let cloned = original.clone();
        assert_eq!(original.kind, cloned.kind);
        assert_eq!(original.message, cloned.message);
        assert_eq!(original.line, cloned.line);
        assert_eq!(original.content, cloned.content);
    }

    #[test]
    fn test_error_debug() {
        let err = BenchError::format("test", 1);
        let debug = format!("{:?}", err);
        assert!(debug.contains("Format"));
        assert!(debug.contains("test"));
    }
}
