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


//! Splits text into literal spans and SGR sequences.
//!
//! Exactly one grammar is recognized: `ESC [ D (; D)* m`, where `D` is one or
//! more ASCII digits. An escape byte that does not open a sequence of exactly
//! that shape stays in the surrounding literal span. Scanning never fails.

use crate::consts::ESC;
use tracing::trace;

/// One piece of scanned input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text between sequences. Never empty.
    Text(&'a str),
    /// The parameters of a recognized SGR sequence, in order.
    Sgr(Vec<u32>),
}

/// Matcher state while walking a candidate sequence.
///
/// The scanner itself sits in the literal state between candidates; see
/// [`Scanner::next`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    /// Saw `ESC`, expecting `[`.
    Escape,
    /// Inside the parameter list. `digits` counts the digits of the current
    /// group so that empty groups (`ESC[m`, `ESC[1;m`) are rejected.
    Parameter { digits: usize },
}

/// An iterator over the [`Segment`]s of a text, in input order.
///
/// The concatenation of every [`Segment::Text`] equals the input with the
/// recognized sequences removed.
///
/// # Examples
///
/// ```
/// use ansimark_markup::{Scanner, Segment};
///
/// let segments: Vec<_> = Scanner::new("\x1b[1;31mhi\x1b[0m").collect();
/// assert_eq!(
///     segments,
///     vec![Segment::Sgr(vec![1, 31]), Segment::Text("hi"), Segment::Sgr(vec![0])]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    text: &'a str,
    position: usize,
    pending: Option<Vec<u32>>,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            position: 0,
            pending: None,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if let Some(codes) = self.pending.take() {
            return Some(Segment::Sgr(codes));
        }

        let text = self.text;
        let bytes = text.as_bytes();
        let start = self.position;
        let mut cursor = start;
        while let Some(offset) = bytes[cursor..].iter().position(|&b| b == ESC as u8) {
            let escape = cursor + offset;
            match match_sequence(bytes, escape) {
                Some((codes, end)) => {
                    self.position = end;
                    if escape > start {
                        self.pending = Some(codes);
                        return Some(Segment::Text(&text[start..escape]));
                    }
                    return Some(Segment::Sgr(codes));
                }
                None => {
                    trace!(position = escape, "escape byte kept as literal text");
                    cursor = escape + 1;
                }
            }
        }

        self.position = bytes.len();
        if start < bytes.len() {
            Some(Segment::Text(&text[start..]))
        } else {
            None
        }
    }
}

/// Tries to match a full SGR sequence whose `ESC` sits at `start`.
///
/// Returns the parsed parameters and the byte offset just past the final `m`.
/// Digit groups saturate at `u32::MAX` instead of overflowing.
fn match_sequence(bytes: &[u8], start: usize) -> Option<(Vec<u32>, usize)> {
    let mut state = State::Escape;
    let mut codes = Vec::new();
    let mut current: u32 = 0;

    for (index, &byte) in bytes.iter().enumerate().skip(start + 1) {
        state = match (state, byte) {
            (State::Escape, b'[') => State::Parameter { digits: 0 },
            (State::Parameter { digits }, b'0'..=b'9') => {
                current = current
                    .saturating_mul(10)
                    .saturating_add(u32::from(byte - b'0'));
                State::Parameter { digits: digits + 1 }
            }
            (State::Parameter { digits }, b';') if digits > 0 => {
                codes.push(current);
                current = 0;
                State::Parameter { digits: 0 }
            }
            (State::Parameter { digits }, b'm') if digits > 0 => {
                codes.push(current);
                return Some((codes, index + 1));
            }
            _ => return None,
        };
    }

    None
}
