//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


use crate::consts::ESC;
use crate::scanner::{Scanner, Segment};
use std::borrow::Cow;

/// Removes SGR sequences from a string, leaving the plain text.
///
/// Exactly the sequences the renderer would interpret are removed: `ESC [`
/// followed by digit groups separated by `;` and terminated by `m`. Every
/// other escape sequence, and every malformed one, stays in the output
/// byte for byte, the same way the renderer keeps it as literal text.
///
/// # Performance
///
/// Input without an escape byte is returned borrowed. Otherwise a new
/// `String` is allocated for the result.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use ansimark_markup::strip_sgr;
///
/// assert_eq!(strip_sgr("\x1b[1;31mRed Text\x1b[0m"), "Red Text");
/// assert!(matches!(strip_sgr("Plain Text"), Cow::Borrowed(_)));
///
/// // Cursor movement is not SGR and is left alone.
/// assert_eq!(strip_sgr("\x1b[2Kline"), "\x1b[2Kline");
/// ```
pub fn strip_sgr(text: &str) -> Cow<'_, str> {
    if !text.contains(ESC) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    for segment in Scanner::new(text) {
        if let Segment::Text(literal) = segment {
            result.push_str(literal);
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_colors() {
        assert_eq!(
            strip_sgr("\x1b[1mBold\x1b[0m and \x1b[4mUnderlined\x1b[0m"),
            "Bold and Underlined"
        );
    }

    #[test]
    fn test_strip_keeps_malformed() {
        assert_eq!(strip_sgr("a\x1b[31"), "a\x1b[31");
        assert_eq!(strip_sgr("\x1b[m\x1b[;1m"), "\x1b[m\x1b[;1m");
    }

    #[test]
    fn test_strip_keeps_line_endings() {
        assert_eq!(strip_sgr("\x1b[32mok\r\n\tnext"), "ok\r\n\tnext");
    }

    #[test]
    fn test_strip_only_sequences() {
        assert_eq!(strip_sgr("\x1b[1m\x1b[0m"), "");
    }
}
