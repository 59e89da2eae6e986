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


//! Tracks which SGR styles are active while text is scanned.
//!
//! The model records every table code switched on since the last reset, in
//! the order it was seen. A later color does not replace an earlier one and
//! the per-category resets (`22`, `39`, `49`, ...) are not modeled; only `0`
//! clears anything. Renderers see the full list and emit one declaration per
//! entry, so with CSS the last declaration of a property wins.

use crate::scanner::{Scanner, Segment};
use crate::style::StyleEffect;

/// The ordered list of style effects switched on since the last reset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ActiveStyles {
    effects: Vec<StyleEffect>,
}

impl ActiveStyles {
    /// An empty style set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the style set that results from processing one sequence's codes.
    ///
    /// A `0` anywhere in `codes` yields the empty set. Otherwise every code
    /// with a table entry is appended in order and the rest are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use ansimark_markup::ActiveStyles;
    ///
    /// let bold_red = ActiveStyles::new().apply(&[1, 31, 38]);
    /// assert_eq!(bold_red.codes().collect::<Vec<_>>(), vec![1, 31]);
    /// assert!(bold_red.apply(&[32, 0]).is_empty());
    /// ```
    pub fn apply(&self, codes: &[u32]) -> ActiveStyles {
        let mut next = self.clone();
        next.apply_in_place(codes);
        next
    }

    /// In-place form of [`ActiveStyles::apply`].
    pub fn apply_in_place(&mut self, codes: &[u32]) {
        if codes.contains(&0) {
            self.effects.clear();
            return;
        }
        self.effects
            .extend(codes.iter().filter_map(|&code| StyleEffect::from_code(code)));
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn effects(&self) -> &[StyleEffect] {
        &self.effects
    }

    /// The active SGR codes in the order they were switched on.
    pub fn codes(&self) -> impl Iterator<Item = u8> + '_ {
        self.effects.iter().map(StyleEffect::code)
    }

    /// The CSS declarations of the active codes, in order.
    pub fn declarations(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.effects.iter().map(StyleEffect::declaration)
    }

    /// All declarations joined with `separator`.
    pub fn css(&self, separator: &str) -> String {
        self.declarations().collect::<Vec<_>>().join(separator)
    }
}

/// A literal text fragment together with the styles active when it was read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledRun<'a> {
    pub text: &'a str,
    pub styles: ActiveStyles,
}

impl<'a> StyledRun<'a> {
    pub fn new(text: &'a str, styles: ActiveStyles) -> Self {
        Self { text, styles }
    }

    pub fn is_styled(&self) -> bool {
        !self.styles.is_empty()
    }
}

/// Scans `text` and pairs each literal span with a snapshot of the active styles.
///
/// Runs come back in input order. Neighbouring runs with equal styles are kept
/// separate, and empty spans between adjacent sequences produce no run.
pub fn styled_runs(text: &str) -> Vec<StyledRun<'_>> {
    let mut active = ActiveStyles::new();
    let mut runs = Vec::new();
    for segment in Scanner::new(text) {
        match segment {
            Segment::Text(text) => runs.push(StyledRun::new(text, active.clone())),
            Segment::Sgr(codes) => active.apply_in_place(&codes),
        }
    }
    runs
}
