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

//! Render the bytes of a buffer as `0x`-prefixed uppercase hex literals, one
//! per line.
//!
//! A literal carries no zero padding: `5` renders as `0x5` and `255` as
//! `0xFF`. The listing for `[0x00, 0xFF, 0x10]` is `"0x0\n0xFF\n0x10\n"`;
//! an empty buffer renders as a single `"\n"`.
//!
//! [`parse_dump`] and [`parse_literal`] only accept that exact output. They
//! are there to check generated fixtures against the bytes they came from,
//! not to read hex in general.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod errors;
mod types;
mod utils;

use errors::{DumpError, LiteralError};

pub use types::*;

extern crate alloc;
use alloc::{
    string::{String, ToString},
    vec::Vec,
};

/// Returns the literal for a single byte.
pub fn literal(byte: u8) -> HexLiteral {
    HexLiteral(byte)
}

/// Builds the full listing for `data`: one literal per byte joined by `\n`,
/// followed by a trailing `\n`.
pub fn to_text(data: &[u8]) -> String {
    Listing(data).to_string()
}

/// Writes the listing for `data` to `w`. Produces the same bytes as
/// [`to_text`].
#[cfg(feature = "std")]
pub fn dump<W: std::io::Write>(w: &mut W, data: &[u8]) -> std::io::Result<()> {
    write!(w, "{}", Listing(data))
}

/// Parses one literal in the exact form produced by [`literal`]. Lowercase
/// digits, padding and a missing `0x` are rejected.
pub fn parse_literal(s: &str) -> Result<u8, LiteralError> {
    utils::decode_literal(s)
}

/// Recovers the bytes behind a listing produced by [`to_text`] or [`dump`],
/// e.g. to check a checked-in fixture against its source file.
pub fn parse_dump(text: &str) -> Result<Vec<u8>, DumpError> {
    let body = text.strip_suffix('\n').ok_or(DumpError::MissingNewline)?;
    if body.is_empty() {
        return Ok(Vec::new());
    }

    body.split('\n')
        .enumerate()
        .map(|(i, line)| {
            parse_literal(line).map_err(|error| DumpError::InvalidLiteral { line: i + 1, error })
        })
        .collect()
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use rstest::rstest;

    fn all_bytes() -> Vec<u8> {
        (0..=u8::MAX).collect()
    }

    #[rstest]
    #[case(0x00, "0x0")]
    #[case(0x05, "0x5")]
    #[case(0x0A, "0xA")]
    #[case(0x10, "0x10")]
    #[case(0xAB, "0xAB")]
    #[case(0xFF, "0xFF")]
    fn formats_literal(#[case] byte: u8, #[case] expected: &str) {
        assert_eq!(literal(byte).to_string(), expected);
    }

    #[rstest]
    #[case(&[0x00, 0xFF, 0x10], "0x0\n0xFF\n0x10\n")]
    #[case(&[], "\n")]
    #[case(&[0xAB], "0xAB\n")]
    fn formats_listing(#[case] data: &[u8], #[case] expected: &str) {
        assert_eq!(to_text(data), expected);

        assert_eq!(Listing(data).to_string(), expected);

        let mut out = Vec::new();
        dump(&mut out, data).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    struct FullWriter;

    impl std::io::Write for FullWriter {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::WriteZero.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn dump_propagates_write_errors() {
        let err = dump(&mut FullWriter, &[0x01, 0x02]).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::WriteZero);
    }

    #[test]
    fn literals_are_unpadded_and_uppercase() {
        for byte in all_bytes() {
            let text = literal(byte).to_string();
            let digits = text.strip_prefix(PREFIX).unwrap();

            assert!(!digits.chars().any(|c| c.is_ascii_lowercase()), "{text}");
            assert_eq!(digits.len(), if byte < 0x10 { 1 } else { 2 }, "{text}");
        }
    }

    #[test]
    fn one_line_per_byte() {
        let data = all_bytes();
        let text = to_text(&data);

        assert_eq!(text.lines().count(), data.len());
        assert!(text.ends_with("0xFE\n0xFF\n"));
    }

    #[test]
    fn round_trip() {
        let data: Vec<u8> = all_bytes().into_iter().rev().chain([0x00, 0x00, 0x7F]).collect();

        assert_eq!(parse_dump(&to_text(&data)).unwrap(), data);
        assert_eq!(parse_dump("\n").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn literal_from_str() {
        let parsed: HexLiteral = "0xC3".parse().unwrap();
        assert_eq!(parsed.value(), 0xC3);
        assert_eq!("0xc3".parse::<HexLiteral>(), Err(LiteralError::InvalidDigit));
    }

    #[test]
    fn dump_without_trailing_newline() {
        assert_eq!(parse_dump("0x1\n0x2"), Err(DumpError::MissingNewline));
        assert_eq!(parse_dump(""), Err(DumpError::MissingNewline));
    }

    #[test]
    fn dump_reports_bad_line() {
        assert_eq!(
            parse_dump("0x1\n0x02\n0x3\n"),
            Err(DumpError::InvalidLiteral {
                line: 2,
                error: LiteralError::NonCanonical
            })
        );
        assert_eq!(
            parse_dump("0x1\n\n"),
            Err(DumpError::InvalidLiteral {
                line: 2,
                error: LiteralError::MissingPrefix
            })
        );
        assert_eq!(
            DumpError::InvalidLiteral {
                line: 3,
                error: LiteralError::InvalidDigit
            }
            .to_string(),
            "line 3: invalid digit, expected 0-9 or A-F"
        );
    }
}
