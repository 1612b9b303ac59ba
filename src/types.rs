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

use core::{fmt, str::FromStr};

use crate::errors::LiteralError;

/// Prefix carried by every literal.
pub const PREFIX: &str = "0x";

/// A byte rendered as `0x` followed by its uppercase hex digits, without
/// zero padding: `0x0`, `0x5`, `0xAB`, `0xFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexLiteral(pub u8);

impl HexLiteral {
    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for HexLiteral {
    fn from(byte: u8) -> Self {
        HexLiteral(byte)
    }
}

impl From<HexLiteral> for u8 {
    fn from(literal: HexLiteral) -> Self {
        literal.0
    }
}

impl fmt::Display for HexLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}{:X}", self.0)
    }
}

impl FromStr for HexLiteral {
    type Err = LiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::utils::decode_literal(s).map(HexLiteral)
    }
}

/// The listing for a byte buffer: one [`HexLiteral`] per line, each line
/// terminated by `\n`. An empty buffer renders as a single `\n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing<'a>(pub &'a [u8]);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f);
        }
        for &byte in self.0 {
            writeln!(f, "{}", HexLiteral(byte))?;
        }
        Ok(())
    }
}
