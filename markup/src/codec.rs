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


//! Framing of raw command output for rendering.
//!
//! Remote output arrives in arbitrary chunks that may end in the middle of an
//! SGR sequence or a UTF-8 code point. [`OutputDecoder`] buffers the stream
//! and yields complete text blobs: one per line, or a bounded chunk when a
//! line grows too long. A chunk never ends inside a sequence that could still
//! complete, so every blob can be rendered on its own.

use crate::config::{DecoderConfig, RenderConfig};
use crate::consts::{ESC, MAX_SEQUENCE_LENGTH};
use crate::render::HtmlRenderer;
use crate::{MarkupError, MarkupResult};
use tokio_util::bytes::BytesMut;
use tokio_util::codec::Decoder;
use tracing::{debug, instrument};

/// Splits a byte stream into renderable text blobs.
///
/// Each `\n` ends a blob; the terminator and a `\r` right before it are
/// removed. A line that reaches `max_chunk_length` bytes (never less than
/// [`MAX_SEQUENCE_LENGTH`]) without a newline is flushed in pieces of at most
/// that size. Invalid UTF-8 is replaced with U+FFFD.
#[derive(Clone, Debug, Default)]
pub struct OutputDecoder {
    config: DecoderConfig,
    /// Offset up to which the buffer is known to hold no newline.
    next_index: usize,
}

impl OutputDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            next_index: 0,
        }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    fn take_line(&mut self, src: &mut BytesMut, newline: usize) -> String {
        self.next_index = 0;
        let line = src.split_to(newline + 1);
        let mut line = &line[..newline];
        if let [rest @ .., b'\r'] = line {
            line = rest;
        }
        String::from_utf8_lossy(line).into_owned()
    }
}

impl Decoder for OutputDecoder {
    type Item = String;
    type Error = MarkupError;

    #[instrument(skip_all)]
    fn decode(&mut self, src: &mut BytesMut) -> MarkupResult<Option<String>> {
        let limit = self.config.max_chunk_length.max(MAX_SEQUENCE_LENGTH);
        let window = src.len().min(limit);
        let start = self.next_index.min(window);
        if let Some(offset) = src[start..window].iter().position(|&b| b == b'\n') {
            let newline = start + offset;
            return Ok(Some(self.take_line(src, newline)));
        }
        self.next_index = window;

        if src.len() < limit {
            return Ok(None);
        }

        let mut split = split_point(&src[..limit]);
        if split == 0 {
            debug!(length = limit, "abandoning unterminated sequence");
            split = limit;
        }
        debug!(
            buffered = src.len(),
            emitted = split,
            "flushing chunk without line ending"
        );
        self.next_index = 0;
        let chunk = src.split_to(split);
        Ok(Some(String::from_utf8_lossy(&chunk).into_owned()))
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> MarkupResult<Option<String>> {
        if let Some(frame) = self.decode(src)? {
            return Ok(Some(frame));
        }
        self.next_index = 0;
        if src.is_empty() {
            return Ok(None);
        }
        let rest = src.split();
        Ok(Some(String::from_utf8_lossy(&rest).into_owned()))
    }
}

/// Decodes a byte stream straight into rendered markup, one blob per frame.
///
/// ```
/// use ansimark_markup::{MarkupCodec, RenderConfig};
/// use tokio_util::bytes::BytesMut;
/// use tokio_util::codec::Decoder;
///
/// let mut codec = MarkupCodec::new(RenderConfig::default());
/// let mut buffer = BytesMut::from("\x1b[32mok\x1b[0m\r\n");
/// assert_eq!(
///     codec.decode(&mut buffer).unwrap(),
///     Some("<span style=\"color: #0A0\">ok</span>".to_string())
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct MarkupCodec {
    decoder: OutputDecoder,
    renderer: HtmlRenderer,
}

impl MarkupCodec {
    pub fn new(config: RenderConfig) -> Self {
        Self::with_decoder(config, DecoderConfig::default())
    }

    pub fn with_decoder(render: RenderConfig, decoder: DecoderConfig) -> Self {
        Self {
            decoder: OutputDecoder::new(decoder),
            renderer: HtmlRenderer::new(render),
        }
    }

    /// Get a reference to the inner decoder
    pub fn decoder(&self) -> &OutputDecoder {
        &self.decoder
    }

    /// Get a reference to the renderer
    pub fn renderer(&self) -> &HtmlRenderer {
        &self.renderer
    }
}

impl Decoder for MarkupCodec {
    type Item = String;
    type Error = MarkupError;

    fn decode(&mut self, src: &mut BytesMut) -> MarkupResult<Option<String>> {
        Ok(self
            .decoder
            .decode(src)?
            .map(|text| self.renderer.render(&text)))
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> MarkupResult<Option<String>> {
        Ok(self
            .decoder
            .decode_eof(src)?
            .map(|text| self.renderer.render(&text)))
    }
}

/// Length of the longest prefix of `bytes` that is safe to render now.
///
/// The prefix stops before a trailing partial SGR sequence unless that
/// sequence is already longer than [`MAX_SEQUENCE_LENGTH`], and never ends
/// inside a UTF-8 code point. A result of `0` means the whole slice is one
/// pending sequence.
fn split_point(bytes: &[u8]) -> usize {
    let mut split = bytes.len();
    if let Some(escape) = bytes.iter().rposition(|&b| b == ESC as u8) {
        let tail = &bytes[escape..];
        if is_sequence_prefix(tail) {
            if tail.len() > MAX_SEQUENCE_LENGTH {
                debug!(length = tail.len(), "abandoning unterminated sequence");
            } else {
                split = escape;
            }
        }
    }
    split - incomplete_utf8_suffix(&bytes[..split])
}

/// Whether `tail`, starting at an escape byte, could still grow into
/// `ESC [ D (; D)* m`.
fn is_sequence_prefix(tail: &[u8]) -> bool {
    match tail {
        [_] => true,
        [_, b'[', parameters @ ..] => {
            let mut previous = b'[';
            for &byte in parameters {
                match byte {
                    b'0'..=b'9' => {}
                    b';' if previous.is_ascii_digit() => {}
                    _ => return false,
                }
                previous = byte;
            }
            true
        }
        _ => false,
    }
}

/// Number of trailing bytes that start a UTF-8 code point the buffer does not
/// yet hold completely.
fn incomplete_utf8_suffix(bytes: &[u8]) -> usize {
    for back in 1..=bytes.len().min(3) {
        let byte = bytes[bytes.len() - back];
        let width = match byte {
            0x80..=0xBF => continue,
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return 0,
        };
        return if width > back { back } else { 0 };
    }
    0
}
