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


//! Error types for the markup crate.
//!
//! Rendering itself is total and has no error path. Errors only come from
//! validating a configuration and from the I/O underneath a streaming decoder.

use thiserror::Error;

/// Result type alias for operations that may fail with a [`MarkupError`].
pub type MarkupResult<T> = Result<T, MarkupError>;

/// Errors raised around the rendering pipeline.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// I/O error from the stream feeding a decoder
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value is out of range
    #[error("Invalid configuration value '{value}' for '{name}': {reason}")]
    InvalidConfig {
        /// Name of the setting
        name: &'static str,
        /// The rejected value
        value: String,
        /// Why it was rejected
        reason: String,
    },
}

impl MarkupError {
    /// Check if the error came from the underlying stream
    pub fn is_io_error(&self) -> bool {
        matches!(self, MarkupError::Io(_))
    }
}
