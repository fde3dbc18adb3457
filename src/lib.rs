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

//! Host bridge for a V.Smile emulator core
//!
//! This library sits between a host application and an external V.Smile
//! emulation core. The core does the emulating (CPU, memory map, video and
//! audio synthesis); the bridge owns session lifecycle, per-frame pixel and
//! audio format translation, input marshalling and FPS accounting, and
//! exposes the whole thing through one session handle.
//!
//! # Example
//!
//! ```
//! use vsmile_bridge::bridge::EmulatorSession;
//! use vsmile_bridge::core_api::stub::StubCoreFactory;
//! use vsmile_bridge::core_api::VideoTiming;
//!
//! // Real hosts pass the actual core's factory here.
//! let mut session = EmulatorSession::new(Box::new(StubCoreFactory::new()));
//!
//! let cart = vec![0u8; 4096];
//! assert!(session.initialize(None, &cart, VideoTiming::Ntsc));
//!
//! session.run_frame();
//! assert_eq!(session.frame_buffer().len(), 320 * 240);
//! ```

pub mod bridge;
pub mod core_api;
