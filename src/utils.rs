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

use crate::{errors::LiteralError, types::PREFIX};

const fn is_upper_hex_digit(c: u8) -> bool {
    matches!(c, b'0'..=b'9' | b'A'..=b'F')
}

/// Decodes a literal in the exact form produced by `HexLiteral`'s `Display`.
pub(crate) fn decode_literal(s: &str) -> Result<u8, LiteralError> {
    let digits = s
        .strip_prefix(PREFIX)
        .ok_or(LiteralError::MissingPrefix)?
        .as_bytes();

    if digits.is_empty() || digits.len() > 2 {
        return Err(LiteralError::InvalidLength);
    }
    if !digits.iter().all(|&c| is_upper_hex_digit(c)) {
        return Err(LiteralError::InvalidDigit);
    }
    if digits.len() == 2 && digits[0] == b'0' {
        return Err(LiteralError::NonCanonical);
    }

    // `hex` wants whole bytes, so put back the padding the literal omits.
    let mut padded = [b'0'; 2];
    padded[2 - digits.len()..].copy_from_slice(digits);

    let mut out = [0u8; 1];
    hex::decode_to_slice(padded, &mut out).map_err(|_| LiteralError::InvalidDigit)?;
    Ok(out[0])
}
