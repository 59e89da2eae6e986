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


use crate::consts::MAX_TAB_WIDTH;
use std::borrow::Cow;

/// Canonicalizes line endings and tabs ahead of scanning.
///
/// `\r\n` and a lone `\r` both become `\n`, and every `\t` becomes
/// `tab_width` spaces, at most [`MAX_TAB_WIDTH`]. Every other character, including stray control bytes
/// such as an unmatched `ESC`, is left exactly as it was.
///
/// Returns the input unchanged (borrowed) when it contains neither `\r` nor `\t`.
pub fn normalize(text: &str, tab_width: usize) -> Cow<'_, str> {
    if !text.contains(['\r', '\t']) {
        return Cow::Borrowed(text);
    }

    let tab_width = tab_width.min(MAX_TAB_WIDTH);
    let mut result = String::with_capacity(text.len().saturating_add(tab_width));
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                result.push('\n');
            }
            '\t' => result.extend(std::iter::repeat_n(' ', tab_width)),
            _ => result.push(ch),
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_borrowed() {
        let result = normalize("hello\nworld", 4);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "hello\nworld");
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(normalize("a\r\nb", 4), "a\nb");
        assert_eq!(normalize("a\rb", 4), "a\nb");
        assert_eq!(normalize("a\nb", 4), "a\nb");
    }

    #[test]
    fn test_carriage_return_runs() {
        assert_eq!(normalize("a\r\r\nb", 4), "a\n\nb");
        assert_eq!(normalize("a\n\rb", 4), "a\n\nb");
        assert_eq!(normalize("\r", 4), "\n");
    }

    #[test]
    fn test_tabs() {
        assert_eq!(normalize("\tx", 4), "    x");
        assert_eq!(normalize("a\t\tb", 2), "a    b");
        assert_eq!(normalize("a\tb", 0), "ab");
    }

    #[test]
    fn test_tab_width_clamped() {
        let expected = format!("a{}b", " ".repeat(MAX_TAB_WIDTH));
        assert_eq!(normalize("a\tb", MAX_TAB_WIDTH + 1), expected);
        assert_eq!(normalize("a\tb", usize::MAX), expected);
    }

    #[test]
    fn test_control_bytes_untouched() {
        assert_eq!(normalize("\x1b[\t\x07", 4), "\x1b[    \x07");
    }
}
