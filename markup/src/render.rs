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


//! Safe HTML rendering of styled runs.
//!
//! Literal text is always HTML-escaped, so no byte of the remote output can
//! reach the page as markup. Styled runs are wrapped in a `<span>` whose
//! `style` attribute holds the declarations of the active codes in order.

use crate::accumulator::{StyledRun, styled_runs};
use crate::config::RenderConfig;
use crate::consts::DECLARATION_SEPARATOR;
use crate::normalize::normalize;
use std::borrow::Cow;

/// Escapes the characters HTML reserves: `&`, `<`, `>`, `"` and `'`.
///
/// `&` is handled like every other character in a single pass, so entities
/// produced here are never escaped a second time by the same call. Escaping
/// already-escaped text does escape the `&` of each entity again.
///
/// ```
/// use ansimark_markup::escape_html;
///
/// assert_eq!(escape_html("<b>&1</b>"), "&lt;b&gt;&amp;1&lt;/b&gt;");
/// assert_eq!(escape_html("&lt;"), "&amp;lt;");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + text.len() / 4);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Converts terminal output into display-safe HTML.
#[derive(Clone, Debug, Default)]
pub struct HtmlRenderer {
    config: RenderConfig,
}

impl HtmlRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders one complete text blob.
    ///
    /// Normalizes line endings and tabs, scans the SGR sequences, renders the
    /// resulting runs and finally maps every newline to the configured line
    /// break. Empty input returns an empty string without scanning.
    pub fn render(&self, text: &str) -> String {
        let text = if self.config.trim_trailing_newlines {
            text.trim_end_matches(['\r', '\n'])
        } else {
            text
        };
        if text.is_empty() {
            return String::new();
        }

        let normalized = normalize(text, self.config.tab_width);
        let runs = styled_runs(&normalized);
        self.render_runs(&runs)
    }

    /// Renders an already scanned list of runs.
    pub fn render_runs(&self, runs: &[StyledRun<'_>]) -> String {
        let mut html = String::new();
        for run in runs {
            let text = escape_html(run.text);
            if run.is_styled() {
                html.push_str("<span style=\"");
                html.push_str(&run.styles.css(DECLARATION_SEPARATOR));
                html.push_str("\">");
                html.push_str(&text);
                html.push_str("</span>");
            } else {
                html.push_str(&text);
            }
        }

        if html.contains('\n') {
            html = html.replace('\n', &self.config.line_break);
        }
        html
    }
}

/// Renders `text` with the default configuration.
///
/// ```
/// use ansimark_markup::render;
///
/// assert_eq!(
///     render("\x1b[31mred\x1b[0m plain"),
///     "<span style=\"color: #A00\">red</span> plain"
/// );
/// ```
pub fn render(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    HtmlRenderer::default().render(text)
}
