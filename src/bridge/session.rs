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

//! Emulation session
//!
//! [`EmulatorSession`] is the handle a host holds for one emulation session:
//! it owns the core instance, the converted output buffers and the pause/FPS
//! state, and its public methods are the bridge's entry points. Hosts that
//! want the classic one-console behavior keep a single session; nothing
//! stops them from keeping several.
//!
//! # Call discipline
//!
//! All methods take `&self`/`&mut self`, so calls into one session are
//! serialized by the borrow checker, as is buffer validity: the slices
//! returned by [`frame_buffer`] and [`audio_samples`] borrow the session and
//! cannot outlive the next [`run_frame`] call.
//!
//! Every operation other than [`initialize`] is a safe no-op (or returns an
//! empty/stale view) while no core exists. Failures never panic across the
//! host boundary; entry points report `false` after logging.
//!
//! [`frame_buffer`]: EmulatorSession::frame_buffer
//! [`audio_samples`]: EmulatorSession::audio_samples
//! [`run_frame`]: EmulatorSession::run_frame
//! [`initialize`]: EmulatorSession::initialize

use super::convert;
use super::error::Result;
use super::fps::FpsCounter;
use super::input::ControllerInput;
use super::rom::{CartridgeRom, SystemRom};
use crate::core_api::{
    CartType, ConsoleCore, CoreConfig, CoreFactory, VideoTiming, FRAME_PIXELS, REGION_UK_ENGLISH,
};

/// One emulation session.
pub struct EmulatorSession {
    factory: Box<dyn CoreFactory>,
    core: Option<Box<dyn ConsoleCore>>,
    /// RGB565 frame, overwritten by every frame step.
    framebuffer: Vec<u16>,
    /// Signed interleaved stereo samples, refilled by every frame step.
    audio: Vec<i16>,
    paused: bool,
    fps: FpsCounter,
}

impl EmulatorSession {
    /// Create an uninitialized session around a core factory.
    ///
    /// Output buffers are pre-allocated; no core exists until
    /// [`EmulatorSession::initialize`] succeeds.
    pub fn new(factory: Box<dyn CoreFactory>) -> Self {
        Self {
            factory,
            core: None,
            framebuffer: vec![0; FRAME_PIXELS],
            audio: Vec::with_capacity(4096),
            paused: false,
            fps: FpsCounter::new(),
        }
    }

    /// Initialize (or re-initialize) the session with ROM data.
    ///
    /// `sys_rom` must be exactly 2 MiB when supplied; `None` selects the
    /// dummy BIOS. `cart_rom` is required and must be 1..=8 MiB; its slice
    /// length is the cartridge size. After construction the core receives a
    /// mandatory reset so the program counter and CPU registers start from a
    /// defined state.
    ///
    /// Returns `true` on success. On failure the session is left exactly as
    /// it was, including any previously initialized core.
    pub fn initialize(
        &mut self,
        sys_rom: Option<&[u8]>,
        cart_rom: &[u8],
        timing: VideoTiming,
    ) -> bool {
        match self.try_initialize(sys_rom, cart_rom, timing) {
            Ok(()) => true,
            Err(err) => {
                log::error!("failed to initialize emulator: {err}");
                false
            }
        }
    }

    fn try_initialize(
        &mut self,
        sys_rom: Option<&[u8]>,
        cart_rom: &[u8],
        timing: VideoTiming,
    ) -> Result<()> {
        // Validate both images before touching the factory so a bad buffer
        // cannot disturb a running session.
        let sys_rom = match sys_rom {
            Some(bytes) => {
                let rom = SystemRom::from_bytes(bytes)?;
                log::info!("system ROM loaded ({} bytes)", bytes.len());
                rom
            }
            None => {
                log::info!("no system ROM supplied, using dummy BIOS");
                SystemRom::dummy()
            }
        };
        let cart = CartridgeRom::from_bytes(cart_rom)?;
        log::info!("cartridge ROM loaded ({} bytes)", cart.payload_len());

        let config = CoreConfig {
            sys_rom: sys_rom.into_bytes(),
            cart_rom: cart.into_bytes(),
            cart_type: CartType::Standard,
            art_nvram: None,
            region: REGION_UK_ENGLISH,
            show_boot_logo: true,
            timing,
        };
        let mut core = self.factory.construct(config)?;

        // The core comes out of construction with undefined CPU state; reset
        // before the first frame step.
        core.reset();

        self.core = Some(core);
        self.framebuffer.fill(0);
        self.audio.clear();
        self.paused = false;
        log::info!("emulator initialized ({timing:?} timing)");
        Ok(())
    }

    /// Whether a core instance currently exists.
    pub fn is_initialized(&self) -> bool {
        self.core.is_some()
    }

    /// Drive one frame step.
    ///
    /// No-op while paused or uninitialized. Otherwise steps the core exactly
    /// once, converts its picture and audio into the session's output
    /// buffers (overwriting the previous frame) and ticks the FPS counter.
    /// The host provides the cadence; this never sleeps.
    pub fn run_frame(&mut self) {
        if self.paused {
            return;
        }
        let Some(core) = self.core.as_mut() else {
            return;
        };

        core.run_frame();
        convert::convert_frame(core.picture(), &mut self.framebuffer);
        convert::convert_audio(core.audio(), &mut self.audio);
        self.fps.tick();
    }

    /// Deliver a controller snapshot to the core. No-op when uninitialized.
    pub fn send_input(&mut self, input: ControllerInput) {
        if let Some(core) = self.core.as_mut() {
            core.update_joystick(input.to_joy_input());
        }
    }

    /// Press or release the console power ON button. No-op when
    /// uninitialized.
    pub fn press_on_button(&mut self, pressed: bool) {
        if let Some(core) = self.core.as_mut() {
            core.update_on_button(pressed);
        }
    }

    /// Force the core back to its power-on state, preserving loaded ROMs.
    /// No-op when uninitialized.
    pub fn reset(&mut self) {
        if let Some(core) = self.core.as_mut() {
            core.reset();
            log::info!("emulator reset");
        }
    }

    /// Stop stepping frames. The core's clock state is untouched; it simply
    /// stops being stepped.
    pub fn pause(&mut self) {
        self.paused = true;
        log::info!("emulation paused");
    }

    /// Resume stepping frames.
    pub fn resume(&mut self) {
        self.paused = false;
        log::info!("emulation resumed");
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Release the core instance. Idempotent; safe before initialization.
    /// The session can be re-initialized afterwards.
    pub fn shutdown(&mut self) {
        if self.core.take().is_some() {
            log::info!("emulator destroyed");
        }
    }

    /// The last converted frame: 320x240 packed RGB565, row-major.
    ///
    /// Borrowed view into session storage; copy it out if it must survive
    /// the next [`EmulatorSession::run_frame`] call. All zeros until the
    /// first frame step after initialization.
    pub fn frame_buffer(&self) -> &[u16] {
        &self.framebuffer
    }

    /// The last converted frame as raw bytes: 320x240x2, native-endian,
    /// row-major, no padding.
    ///
    /// Same storage as [`EmulatorSession::frame_buffer`], reinterpreted for
    /// hosts that consume byte buffers.
    pub fn frame_buffer_bytes(&self) -> &[u8] {
        // u8 alignment is 1, so the reinterpretation has no prefix/suffix.
        let (_, bytes, _) = unsafe { self.framebuffer.align_to::<u8>() };
        bytes
    }

    /// Copy the frame into a host byte buffer (native-endian, 2 bytes per
    /// pixel, row-major, no padding). Returns the number of bytes written.
    pub fn copy_frame_into(&self, out: &mut [u8]) -> usize {
        let pixels = (out.len() / 2).min(self.framebuffer.len());
        for (chunk, px) in out.chunks_exact_mut(2).zip(&self.framebuffer[..pixels]) {
            chunk.copy_from_slice(&px.to_ne_bytes());
        }
        pixels * 2
    }

    /// The last converted audio slice: signed 16-bit interleaved stereo.
    ///
    /// Borrowed view, refilled by every frame step. Empty until the first
    /// frame step after initialization.
    pub fn audio_samples(&self) -> &[i16] {
        &self.audio
    }

    /// Most recently measured frame rate. See [`FpsCounter`] for the
    /// sampling policy.
    pub fn fps(&self) -> f32 {
        self.fps.current()
    }
}
