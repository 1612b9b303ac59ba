// Copyright 2024, The Horizen Foundation
// SPDX-License-Identifier: Apache-2.0
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

use core::fmt;

/// Reasons a single hex literal is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralError {
    /// The literal does not start with `0x`.
    MissingPrefix,
    /// No digits, or more digits than a byte can have.
    InvalidLength,
    /// A digit outside `0-9A-F`. Lowercase digits are rejected too.
    InvalidDigit,
    /// Two digits with a leading zero, e.g. `0x05`.
    NonCanonical,
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralError::MissingPrefix => write!(f, "missing `0x` prefix"),
            LiteralError::InvalidLength => write!(f, "expected one or two hex digits"),
            LiteralError::InvalidDigit => write!(f, "invalid digit, expected 0-9 or A-F"),
            LiteralError::NonCanonical => write!(f, "leading zero padding is not allowed"),
        }
    }
}

/// Reasons a whole dump is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpError {
    /// The text is not terminated by a newline.
    MissingNewline,
    /// The literal on `line` (1-based) is malformed.
    InvalidLiteral { line: usize, error: LiteralError },
}

impl fmt::Display for DumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DumpError::MissingNewline => write!(f, "dump must end with a newline"),
            DumpError::InvalidLiteral { line, error } => write!(f, "line {line}: {error}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LiteralError {}

#[cfg(feature = "std")]
impl std::error::Error for DumpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DumpError::MissingNewline => None,
            DumpError::InvalidLiteral { error, .. } => Some(error),
        }
    }
}
