// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 the vsmile-bridge authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Bridge error types
use thiserror::Error;

use crate::core_api::CoreError;

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Main error type for the bridge
///
/// These never cross the host boundary as values: entry points report
/// failures as `false` after logging the error message.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("invalid cartridge ROM size: {got} bytes (expected 1..={max})")]
    InvalidCartridgeSize { got: usize, max: usize },

    #[error("invalid system ROM size: {got} bytes (expected {expected})")]
    InvalidSystemRomSize { got: usize, expected: usize },

    #[error("core error: {0}")]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
