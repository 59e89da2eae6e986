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


//! The SGR style table.
//!
//! Every SGR code this crate understands maps to exactly one [`StyleEffect`].
//! The mapping is a closed `match`, so it is fixed at compile time and shared
//! by every conversion without synchronization. Each effect carries the CSS
//! declaration used by the HTML renderer.

const STANDARD_FOREGROUND: [&str; 8] = [
    "color: #000",
    "color: #A00",
    "color: #0A0",
    "color: #A50",
    "color: #00A",
    "color: #A0A",
    "color: #0AA",
    "color: #AAA",
];

const BRIGHT_FOREGROUND: [&str; 8] = [
    "color: #555",
    "color: #F55",
    "color: #5F5",
    "color: #FF5",
    "color: #55F",
    "color: #F5F",
    "color: #5FF",
    "color: #FFF",
];

const STANDARD_BACKGROUND: [&str; 8] = [
    "background-color: #000",
    "background-color: #A00",
    "background-color: #0A0",
    "background-color: #A50",
    "background-color: #00A",
    "background-color: #A0A",
    "background-color: #0AA",
    "background-color: #AAA",
];

const BRIGHT_BACKGROUND: [&str; 8] = [
    "background-color: #555",
    "background-color: #F55",
    "background-color: #5F5",
    "background-color: #FF5",
    "background-color: #55F",
    "background-color: #F5F",
    "background-color: #5FF",
    "background-color: #FFF",
];

/// One of the eight basic terminal colors.
///
/// The discriminant is the color's offset inside its SGR block, so `Red` is
/// `31` as a foreground, `41` as a background, `91` and `101` when bright.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl Color {
    /// Offset of this color inside an SGR color block.
    pub fn to_u8(&self) -> u8 {
        *self as u8
    }

    /// Color for an offset inside an SGR color block, if the offset is in `0..8`.
    pub fn from_u8(value: u8) -> Option<Color> {
        match value {
            0 => Some(Color::Black),
            1 => Some(Color::Red),
            2 => Some(Color::Green),
            3 => Some(Color::Yellow),
            4 => Some(Color::Blue),
            5 => Some(Color::Magenta),
            6 => Some(Color::Cyan),
            7 => Some(Color::White),
            _ => None,
        }
    }
}

/// A text attribute toggled by a single SGR code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// SGR 1
    Bold,
    /// SGR 2, rendered as reduced opacity
    Dim,
    /// SGR 3
    Italic,
    /// SGR 4
    Underline,
    /// SGR 7, rendered as fixed black on white
    Inverse,
}

impl Attribute {
    pub fn to_u8(&self) -> u8 {
        match self {
            Attribute::Bold => 1,
            Attribute::Dim => 2,
            Attribute::Italic => 3,
            Attribute::Underline => 4,
            Attribute::Inverse => 7,
        }
    }

    pub fn from_u8(value: u8) -> Option<Attribute> {
        match value {
            1 => Some(Attribute::Bold),
            2 => Some(Attribute::Dim),
            3 => Some(Attribute::Italic),
            4 => Some(Attribute::Underline),
            7 => Some(Attribute::Inverse),
            _ => None,
        }
    }

    /// CSS declaration for this attribute.
    pub fn declaration(&self) -> &'static str {
        match self {
            Attribute::Bold => "font-weight: bold",
            Attribute::Dim => "opacity: 0.8",
            Attribute::Italic => "font-style: italic",
            Attribute::Underline => "text-decoration: underline",
            Attribute::Inverse => "color: #000; background-color: #FFF",
        }
    }
}

/// The effect of one SGR code that has an entry in the style table.
///
/// Codes outside the table (for example `38`, `39` or `49`) have no
/// `StyleEffect`; the scanner still consumes them but they change nothing.
///
/// # Examples
///
/// ```
/// use ansimark_markup::{Color, StyleEffect};
///
/// let effect = StyleEffect::from_code(91).unwrap();
/// assert_eq!(effect, StyleEffect::Foreground { color: Color::Red, bright: true });
/// assert_eq!(effect.code(), 91);
/// assert_eq!(effect.declaration(), "color: #F55");
/// assert_eq!(StyleEffect::from_code(38), None);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleEffect {
    /// SGR 0, clears every active style
    Reset,
    /// SGR 1-4 and 7
    Attribute(Attribute),
    /// SGR 30-37 and 90-97
    Foreground { color: Color, bright: bool },
    /// SGR 40-47 and 100-107
    Background { color: Color, bright: bool },
}

impl StyleEffect {
    /// Looks up the table entry for an SGR code.
    pub fn from_code(code: u32) -> Option<StyleEffect> {
        let block = |base: u32| Color::from_u8((code - base) as u8);
        match code {
            0 => Some(StyleEffect::Reset),
            1..=7 => Attribute::from_u8(code as u8).map(StyleEffect::Attribute),
            30..=37 => block(30).map(|color| StyleEffect::Foreground {
                color,
                bright: false,
            }),
            40..=47 => block(40).map(|color| StyleEffect::Background {
                color,
                bright: false,
            }),
            90..=97 => block(90).map(|color| StyleEffect::Foreground {
                color,
                bright: true,
            }),
            100..=107 => block(100).map(|color| StyleEffect::Background {
                color,
                bright: true,
            }),
            _ => None,
        }
    }

    /// The SGR code this effect was read from.
    pub fn code(&self) -> u8 {
        match self {
            StyleEffect::Reset => 0,
            StyleEffect::Attribute(attribute) => attribute.to_u8(),
            StyleEffect::Foreground { color, bright } => {
                color.to_u8() + if *bright { 90 } else { 30 }
            }
            StyleEffect::Background { color, bright } => {
                color.to_u8() + if *bright { 100 } else { 40 }
            }
        }
    }

    /// CSS declaration emitted for this effect.
    pub fn declaration(&self) -> &'static str {
        match self {
            StyleEffect::Reset => "color: inherit; background-color: inherit",
            StyleEffect::Attribute(attribute) => attribute.declaration(),
            StyleEffect::Foreground { color, bright } => {
                let table = if *bright {
                    &BRIGHT_FOREGROUND
                } else {
                    &STANDARD_FOREGROUND
                };
                table[color.to_u8() as usize]
            }
            StyleEffect::Background { color, bright } => {
                let table = if *bright {
                    &BRIGHT_BACKGROUND
                } else {
                    &STANDARD_BACKGROUND
                };
                table[color.to_u8() as usize]
            }
        }
    }

    pub fn is_reset(&self) -> bool {
        matches!(self, StyleEffect::Reset)
    }
}

/// CSS declaration for a raw SGR code, or `None` when the code has no entry.
pub fn declaration(code: u32) -> Option<&'static str> {
    StyleEffect::from_code(code).map(|effect| effect.declaration())
}
