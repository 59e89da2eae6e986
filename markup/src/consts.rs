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


/// The escape byte that opens a control sequence.
pub const ESC: char = '\x1b';

/// Maximum length of a pending SGR sequence in bytes.
///
/// A streaming decoder holds back a trailing partial sequence until it either
/// completes or grows past this limit. Past the limit the bytes are released as
/// literal text so a stray escape byte can never stall the stream.
pub const MAX_SEQUENCE_LENGTH: usize = 256;

/// Number of spaces a horizontal tab expands to by default.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Largest tab width accepted by [`RenderConfig::validate`](crate::RenderConfig::validate).
/// Wider settings are clamped to it during normalization.
pub const MAX_TAB_WIDTH: usize = 16;

/// Markup emitted for every line break in the rendered output by default.
pub const DEFAULT_LINE_BREAK: &str = "<br>";

/// Separator placed between style declarations inside a `style` attribute.
pub const DECLARATION_SEPARATOR: &str = "; ";

/// Default number of buffered bytes after which a decoder flushes a chunk
/// that has not yet seen a newline.
pub const DEFAULT_MAX_CHUNK_LENGTH: usize = 8192;
