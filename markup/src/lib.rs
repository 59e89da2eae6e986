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


//! Converts terminal output carrying SGR escape codes into safe, styled HTML.
//!
//! The pipeline is normalize, scan, accumulate, render:
//!
//! ```
//! use ansimark_markup::render;
//!
//! let html = render("\x1b[1;31mfailed\x1b[0m: <stdin>\r\ndone");
//! assert_eq!(
//!     html,
//!     "<span style=\"font-weight: bold; color: #A00\">failed</span>: &lt;stdin&gt;<br>done"
//! );
//! ```
//!
//! Rendering is a total function. Malformed or unsupported escape sequences
//! degrade to literal (escaped) text and nothing is carried between calls.

mod accumulator;
mod codec;
mod config;
pub mod consts;
mod normalize;
mod render;
mod result;
mod scanner;
mod style;
pub mod utility;

pub use self::accumulator::{ActiveStyles, StyledRun, styled_runs};
pub use self::codec::{MarkupCodec, OutputDecoder};
pub use self::config::{DecoderConfig, RenderConfig};
pub use self::normalize::normalize;
pub use self::render::{HtmlRenderer, escape_html, render};
pub use self::result::{MarkupError, MarkupResult};
pub use self::scanner::{Scanner, Segment};
pub use self::style::{Attribute, Color, StyleEffect, declaration};
pub use self::utility::strip_sgr;
