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

//! Frame-rate accounting
//!
//! Frames are counted per measurement window; the published rate is
//! recomputed only when at least [`WINDOW_MS`] of wall-clock time has passed
//! since the last recomputation and is held constant in between. This is a
//! sampling policy, not an instantaneous rate.

use std::time::Instant;

/// Measurement window in milliseconds.
const WINDOW_MS: u64 = 1000;

/// Running frames-per-second counter.
#[derive(Debug)]
pub struct FpsCounter {
    frames: u32,
    window_start: Instant,
    current: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: 0,
            window_start: Instant::now(),
            current: 0.0,
        }
    }

    /// Record one frame at the current wall-clock time.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Record one frame at an explicit timestamp.
    ///
    /// Split out from [`FpsCounter::tick`] so tests can drive the window
    /// with a synthetic clock.
    pub fn tick_at(&mut self, now: Instant) {
        self.frames += 1;
        let elapsed_ms = now.duration_since(self.window_start).as_millis() as u64;
        if elapsed_ms >= WINDOW_MS {
            self.current = self.frames as f32 * 1000.0 / elapsed_ms as f32;
            self.frames = 0;
            self.window_start = now;
        }
    }

    /// Most recently computed rate; 0.0 until the first window closes.
    pub fn current(&self) -> f32 {
        self.current
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
