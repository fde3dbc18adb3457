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

//! Controller input marshalling
//!
//! Hosts hand the bridge a flat snapshot of button and joystick state;
//! [`ControllerInput::to_joy_input`] maps it field-for-field onto the core's
//! input structure. No clamping or debouncing happens here - the core
//! enforces its own axis range.

use crate::core_api::JoyInput;

/// Controller state as the host reports it.
///
/// A stateless snapshot: nothing is persisted between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerInput {
    pub enter: bool,
    pub help: bool,
    pub back: bool,
    pub abc: bool,
    pub red: bool,
    pub yellow: bool,
    pub blue: bool,
    pub green: bool,
    /// Joystick X deflection; the core clamps to -5..=+5.
    pub joystick_x: i32,
    /// Joystick Y deflection; the core clamps to -5..=+5.
    pub joystick_y: i32,
}

impl ControllerInput {
    /// Map the snapshot onto the core's input structure.
    pub fn to_joy_input(&self) -> JoyInput {
        JoyInput {
            enter: self.enter,
            help: self.help,
            back: self.back,
            abc: self.abc,
            red: self.red,
            yellow: self.yellow,
            blue: self.blue,
            green: self.green,
            x: self.joystick_x,
            y: self.joystick_y,
        }
    }
}
