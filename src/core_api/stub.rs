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

//! Headless stand-in core
//!
//! [`StubCore`] satisfies the [`ConsoleCore`](super::ConsoleCore) contract
//! without emulating anything: each frame step paints a deterministic RGB555
//! test pattern and emits midpoint (silent) unsigned audio. It exists so the
//! demo binary and integration tests can drive the full bridge pipeline
//! without linking the real core.

use super::{
    ConsoleCore, CoreConfig, CoreError, CoreFactory, JoyInput, VideoTiming, DISPLAY_WIDTH,
    FRAME_PIXELS,
};

/// Interleaved stereo samples the stub emits per frame step.
const STUB_AUDIO_SAMPLES: usize = 1470 * 2;

/// Unsigned midpoint, i.e. silence.
const SILENCE: u16 = 0x8000;

/// Deterministic stand-in for the real emulator core.
pub struct StubCore {
    timing: VideoTiming,
    frame: u64,
    picture: Vec<u16>,
    audio: Vec<u16>,
    joystick: JoyInput,
    on_button: bool,
}

impl StubCore {
    fn new(timing: VideoTiming) -> Self {
        Self {
            timing,
            frame: 0,
            picture: vec![0; FRAME_PIXELS],
            audio: vec![SILENCE; STUB_AUDIO_SAMPLES],
            joystick: JoyInput::default(),
            on_button: false,
        }
    }

    /// Video timing selected at construction.
    pub fn timing(&self) -> VideoTiming {
        self.timing
    }

    /// Number of frame steps executed since construction or reset.
    pub fn frames_run(&self) -> u64 {
        self.frame
    }

    /// Last joystick snapshot delivered to the stub.
    pub fn joystick(&self) -> JoyInput {
        self.joystick
    }

    /// Current ON-button state as the stub sees it.
    pub fn on_button(&self) -> bool {
        self.on_button
    }
}

impl ConsoleCore for StubCore {
    fn run_frame(&mut self) {
        self.frame += 1;
        // Scrolling grey ramp so consecutive frames differ.
        let phase = (self.frame & 0x1F) as usize;
        for (i, px) in self.picture.iter_mut().enumerate() {
            let x = i % DISPLAY_WIDTH;
            let y = i / DISPLAY_WIDTH;
            let shade = ((x + y + phase) & 0x1F) as u16;
            *px = (shade << 10) | (shade << 5) | shade;
        }
        self.audio.fill(SILENCE);
    }

    fn reset(&mut self) {
        self.frame = 0;
        self.picture.fill(0);
        self.audio.fill(SILENCE);
        self.joystick = JoyInput::default();
        self.on_button = false;
    }

    fn picture(&self) -> &[u16] {
        &self.picture
    }

    fn audio(&self) -> &[u16] {
        &self.audio
    }

    fn update_joystick(&mut self, input: JoyInput) {
        self.joystick = input;
    }

    fn update_on_button(&mut self, pressed: bool) {
        self.on_button = pressed;
    }
}

/// Factory producing [`StubCore`] instances.
///
/// Accepts any (already validated) configuration; ROM contents are ignored.
#[derive(Debug, Default)]
pub struct StubCoreFactory;

impl StubCoreFactory {
    pub fn new() -> Self {
        Self
    }
}

impl CoreFactory for StubCoreFactory {
    fn construct(&self, config: CoreConfig) -> Result<Box<dyn ConsoleCore>, CoreError> {
        log::debug!(
            "stub core constructed ({:?} timing, region 0x{:02X})",
            config.timing,
            config.region
        );
        Ok(Box::new(StubCore::new(config.timing)))
    }
}
