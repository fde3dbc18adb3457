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

//! Contract with the external emulation core
//!
//! The bridge does not implement emulation. The CPU interpreter, memory map
//! and video/audio synthesis live in an external core crate that is consumed
//! exclusively through the traits in this module:
//!
//! - [`ConsoleCore`] - one constructed emulator instance (stepping, output
//!   retrieval, input delivery)
//! - [`CoreFactory`] - constructs instances from a [`CoreConfig`]
//!
//! Construction is fallible for reasons outside the bridge's control (bad
//! board data, allocation failure inside the core). Those failures surface as
//! an opaque [`CoreError`]; the bridge never inspects them beyond logging.

pub mod stub;

use thiserror::Error;

/// Width of the emulated display in pixels.
pub const DISPLAY_WIDTH: usize = 320;

/// Height of the emulated display in pixels.
pub const DISPLAY_HEIGHT: usize = 240;

/// Packed 16-bit pixels in one full frame.
pub const FRAME_PIXELS: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;

/// System ROM slot size in bytes (2 MiB).
///
/// The core maps this buffer 1:1 into the emulated CPU address space, so a
/// supplied image must match this size exactly rather than merely fit.
pub const SYS_ROM_SIZE: usize = 2 * 1024 * 1024;

/// Cartridge ROM slot size in bytes (8 MiB). Smaller images are zero-padded.
pub const MAX_CART_SIZE: usize = 8 * 1024 * 1024;

/// Region code handed to the core at construction (UK English).
///
/// Fixed by the bridge; the core accepts other regions but the bridge does
/// not expose the knob.
pub const REGION_UK_ENGLISH: u8 = 0x0E;

/// Video timing of the emulated console, fixed for the instance's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoTiming {
    /// 50 Hz timing.
    Pal,
    /// 60 Hz timing.
    Ntsc,
}

impl VideoTiming {
    /// Map the host's boolean timing flag onto the typed enum.
    pub fn from_pal_flag(use_pal: bool) -> Self {
        if use_pal {
            VideoTiming::Pal
        } else {
            VideoTiming::Ntsc
        }
    }
}

/// Cartridge board type.
///
/// The bridge always constructs standard boards; the variant exists because
/// the core's constructor requires it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CartType {
    #[default]
    Standard,
}

/// Controller state in the core's own layout.
///
/// Eight independent buttons plus two joystick axes. The core clamps the
/// axes to its supported range (-5..=+5); the bridge passes them through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoyInput {
    pub enter: bool,
    pub help: bool,
    pub back: bool,
    pub abc: bool,
    pub red: bool,
    pub yellow: bool,
    pub blue: bool,
    pub green: bool,
    pub x: i32,
    pub y: i32,
}

/// Construction failure reported by the core.
///
/// The core's own failure taxonomy is not exposed; whatever goes wrong
/// during construction arrives here as a message.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("core construction failed: {0}")]
    Construction(String),
}

/// Everything the core needs at construction time.
///
/// `sys_rom` is always exactly [`SYS_ROM_SIZE`] bytes and `cart_rom` exactly
/// [`MAX_CART_SIZE`] bytes; the bridge performs the padding and validation
/// before building this value.
pub struct CoreConfig {
    /// System ROM image (real BIOS or the bridge's dummy image).
    pub sys_rom: Box<[u8]>,
    /// Cartridge ROM image, zero-padded to the full slot.
    pub cart_rom: Box<[u8]>,
    /// Cartridge board type.
    pub cart_type: CartType,
    /// Art Studio NVRAM contents. The bridge never supplies one.
    pub art_nvram: Option<Box<[u8]>>,
    /// Console region code.
    pub region: u8,
    /// Whether the core plays the boot logo sequence.
    pub show_boot_logo: bool,
    /// Video timing.
    pub timing: VideoTiming,
}

/// One constructed emulator instance.
pub trait ConsoleCore {
    /// Advance emulation by exactly one frame step.
    fn run_frame(&mut self);

    /// Force the console to its power-on state, preserving loaded ROMs.
    fn reset(&mut self);

    /// Picture produced by the last frame step.
    ///
    /// Exactly [`FRAME_PIXELS`] packed RGB555 words, row-major. The slice
    /// contents are overwritten by the next `run_frame` call.
    fn picture(&self) -> &[u16];

    /// Audio produced by the last frame step.
    ///
    /// Unsigned 16-bit samples, interleaved stereo. Length varies with the
    /// configured timing; the slice is overwritten by the next `run_frame`.
    fn audio(&self) -> &[u16];

    /// Deliver a controller snapshot.
    fn update_joystick(&mut self, input: JoyInput);

    /// Press or release the console power ON button.
    fn update_on_button(&mut self, pressed: bool);
}

/// Constructs [`ConsoleCore`] instances.
///
/// Hosts hand the bridge a factory for the real core; tests hand it mocks.
pub trait CoreFactory {
    fn construct(&self, config: CoreConfig) -> Result<Box<dyn ConsoleCore>, CoreError>;
}

impl<F> CoreFactory for F
where
    F: Fn(CoreConfig) -> Result<Box<dyn ConsoleCore>, CoreError>,
{
    fn construct(&self, config: CoreConfig) -> Result<Box<dyn ConsoleCore>, CoreError> {
        self(config)
    }
}
