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


//! Rendering and decoding configuration.
//!
//! ```
//! use ansimark_markup::RenderConfig;
//!
//! let config = RenderConfig::default()
//!     .with_tab_width(8)
//!     .with_line_break("<br/>")
//!     .with_trim_trailing_newlines(true);
//! assert!(config.validate().is_ok());
//! ```

use crate::consts::{DEFAULT_LINE_BREAK, DEFAULT_MAX_CHUNK_LENGTH, DEFAULT_TAB_WIDTH, MAX_TAB_WIDTH};
use crate::{MarkupError, MarkupResult};

/// Settings for [`HtmlRenderer`](crate::HtmlRenderer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Number of spaces each tab expands to
    pub tab_width: usize,
    /// Markup emitted in place of every line break
    pub line_break: String,
    /// Drop trailing `\r` and `\n` from the input before rendering
    pub trim_trailing_newlines: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            line_break: DEFAULT_LINE_BREAK.to_string(),
            trim_trailing_newlines: false,
        }
    }
}

impl RenderConfig {
    /// Set the tab width
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    /// Set the line break markup
    pub fn with_line_break(mut self, line_break: impl Into<String>) -> Self {
        self.line_break = line_break.into();
        self
    }

    /// Enable or disable trimming of trailing newlines
    pub fn with_trim_trailing_newlines(mut self, enabled: bool) -> Self {
        self.trim_trailing_newlines = enabled;
        self
    }

    /// Checks that every setting is in range.
    pub fn validate(&self) -> MarkupResult<()> {
        if self.tab_width > MAX_TAB_WIDTH {
            return Err(MarkupError::InvalidConfig {
                name: "tab_width",
                value: self.tab_width.to_string(),
                reason: format!("must be at most {}", MAX_TAB_WIDTH),
            });
        }
        if self.line_break.contains(['\n', '\r']) {
            return Err(MarkupError::InvalidConfig {
                name: "line_break",
                value: self.line_break.escape_debug().to_string(),
                reason: "must not contain a raw line ending".to_string(),
            });
        }
        Ok(())
    }
}

/// Settings for [`OutputDecoder`](crate::OutputDecoder).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Buffered bytes after which a chunk without a newline is flushed.
    /// Values below [`MAX_SEQUENCE_LENGTH`](crate::consts::MAX_SEQUENCE_LENGTH)
    /// are raised to it by the decoder.
    pub max_chunk_length: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_chunk_length: DEFAULT_MAX_CHUNK_LENGTH,
        }
    }
}

impl DecoderConfig {
    /// Set the maximum chunk length
    pub fn with_max_chunk_length(mut self, length: usize) -> Self {
        self.max_chunk_length = length;
        self
    }
}
