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

//! Shared test fixtures: an observable mock core and its factory.
//!
//! The mock records everything the bridge does to it (constructions, frame
//! steps, resets, input deliveries) in shared state the test can inspect,
//! and lets the test script construction failures and output contents.

use std::cell::RefCell;
use std::rc::Rc;
use vsmile_bridge::core_api::{
    ConsoleCore, CoreConfig, CoreError, CoreFactory, JoyInput, VideoTiming, FRAME_PIXELS,
};

/// Interleaved stereo samples the mock emits per frame.
pub const MOCK_AUDIO_SAMPLES: usize = 1470;

/// Snapshot of one construction call as the factory saw it.
pub struct ConstructionRecord {
    pub sys_rom: Box<[u8]>,
    pub cart_rom: Box<[u8]>,
    pub region: u8,
    pub show_boot_logo: bool,
    pub timing: VideoTiming,
}

/// Shared observable state for mock cores and their factory.
#[derive(Default)]
pub struct MockState {
    pub constructions: Vec<ConstructionRecord>,
    /// When set, the next construct call fails (and clears the flag).
    pub fail_next_construct: bool,
    pub frames_run: u32,
    pub resets: u32,
    pub last_joystick: Option<JoyInput>,
    pub last_on_button: Option<bool>,
    /// When set, every frame's picture is filled with this RGB555 word;
    /// otherwise the fill value tracks the frame counter so frames differ.
    pub picture_fill: Option<u16>,
    /// Same knob for the unsigned audio samples.
    pub audio_fill: Option<u16>,
}

pub struct MockCore {
    state: Rc<RefCell<MockState>>,
    frame: u16,
    picture: Vec<u16>,
    audio: Vec<u16>,
}

impl ConsoleCore for MockCore {
    fn run_frame(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        let mut state = self.state.borrow_mut();
        state.frames_run += 1;
        let px = state.picture_fill.unwrap_or(self.frame & 0x7FFF);
        let sample = state.audio_fill.unwrap_or(0x8000 | self.frame);
        self.picture.fill(px);
        self.audio.fill(sample);
    }

    fn reset(&mut self) {
        self.frame = 0;
        self.state.borrow_mut().resets += 1;
    }

    fn picture(&self) -> &[u16] {
        &self.picture
    }

    fn audio(&self) -> &[u16] {
        &self.audio
    }

    fn update_joystick(&mut self, input: JoyInput) {
        self.state.borrow_mut().last_joystick = Some(input);
    }

    fn update_on_button(&mut self, pressed: bool) {
        self.state.borrow_mut().last_on_button = Some(pressed);
    }
}

pub struct MockCoreFactory {
    state: Rc<RefCell<MockState>>,
}

impl MockCoreFactory {
    /// Build a factory plus the shared state handle the test inspects.
    pub fn new() -> (Self, Rc<RefCell<MockState>>) {
        let state = Rc::new(RefCell::new(MockState::default()));
        (
            Self {
                state: Rc::clone(&state),
            },
            state,
        )
    }
}

impl CoreFactory for MockCoreFactory {
    fn construct(&self, config: CoreConfig) -> Result<Box<dyn ConsoleCore>, CoreError> {
        let mut state = self.state.borrow_mut();
        if state.fail_next_construct {
            state.fail_next_construct = false;
            return Err(CoreError::Construction("mock construction failure".into()));
        }
        state.constructions.push(ConstructionRecord {
            sys_rom: config.sys_rom,
            cart_rom: config.cart_rom,
            region: config.region,
            show_boot_logo: config.show_boot_logo,
            timing: config.timing,
        });
        Ok(Box::new(MockCore {
            state: Rc::clone(&self.state),
            frame: 0,
            picture: vec![0; FRAME_PIXELS],
            audio: vec![0; MOCK_AUDIO_SAMPLES],
        }))
    }
}
