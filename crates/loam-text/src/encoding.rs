// Copyright 2025 eraflo
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

//! Decoding of legacy Chinese text.

use thiserror::Error;

/// Errors from decoding legacy encodings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextError {
    /// The input held a byte sequence that is not valid GBK.
    #[error("input is not valid GBK")]
    InvalidGbk,
}

/// Decodes GBK bytes into a UTF-8 string.
///
/// Malformed sequences are an error rather than being replaced with
/// U+FFFD. ASCII passes through unchanged.
pub fn gbk_to_utf8(bytes: &[u8]) -> Result<String, TextError> {
    encoding_rs::GBK
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or(TextError::InvalidGbk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn decodes_encoded_chinese() -> Result<()> {
        let original = "你好, 世界";
        let (bytes, _, had_errors) = encoding_rs::GBK.encode(original);
        assert!(!had_errors);
        assert_eq!(&bytes[..4], &[0xC4, 0xE3, 0xBA, 0xC3]);

        assert_eq!(gbk_to_utf8(&bytes)?, original);
        Ok(())
    }

    #[test]
    fn ascii_and_empty_pass_through() -> Result<()> {
        assert_eq!(gbk_to_utf8(b"plain text")?, "plain text");
        assert_eq!(gbk_to_utf8(b"")?, "");
        Ok(())
    }

    #[test]
    fn truncated_sequence_is_rejected() {
        assert_eq!(gbk_to_utf8(&[0xC4, 0xE3, 0xBA]), Err(TextError::InvalidGbk));
        assert_eq!(gbk_to_utf8(&[0x81]), Err(TextError::InvalidGbk));
    }
}
