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

//! Bridge components
//!
//! - Session lifecycle and frame pump ([`session`])
//! - ROM ingestion and validation ([`rom`])
//! - Pixel/audio format conversion ([`convert`])
//! - Input marshalling ([`input`])
//! - FPS accounting ([`fps`])
//! - Error taxonomy ([`error`])

pub mod convert;
pub mod error;
pub mod fps;
pub mod input;
pub mod rom;
pub mod session;

// Re-export commonly used types
pub use error::{BridgeError, Result};
pub use fps::FpsCounter;
pub use input::ControllerInput;
pub use rom::{CartridgeRom, SystemRom};
pub use session::EmulatorSession;
