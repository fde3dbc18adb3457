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

//! Pixel and audio format conversion
//!
//! The core produces packed RGB555 pixels and unsigned 16-bit PCM; hosts
//! consume RGB565 and signed 16-bit PCM. These are pure, total functions
//! applied to every pixel/sample of every frame.

/// Convert one packed RGB555 pixel to RGB565.
///
/// RGB555: `XRRRRRGGGGGBBBBB` (top bit unused, discarded).
/// RGB565: `RRRRRGGGGGGBBBBB`.
///
/// Green expands from 5 to 6 bits by duplicating its most significant bit
/// into the new low bit, which tracks full-scale values better than
/// zero-padding (0x1F maps to 0x3F, not 0x3E).
#[inline]
pub fn rgb555_to_rgb565(px: u16) -> u16 {
    let r = (px >> 10) & 0x1F;
    let g = (px >> 5) & 0x1F;
    let b = px & 0x1F;
    let g6 = (g << 1) | (g >> 4);
    (r << 11) | (g6 << 5) | b
}

/// Convert a full frame of RGB555 pixels into `dst`.
///
/// Both slices must hold one full frame; every pixel is rewritten, there are
/// no partial updates.
pub fn convert_frame(src: &[u16], dst: &mut [u16]) {
    debug_assert_eq!(src.len(), dst.len());
    for (out, &px) in dst.iter_mut().zip(src) {
        *out = rgb555_to_rgb565(px);
    }
}

/// Convert one unsigned 16-bit sample to signed.
///
/// Flipping the sign bit is numerically the same as subtracting 32768 but
/// cannot overflow.
#[inline]
pub fn sample_to_signed(sample: u16) -> i16 {
    (sample ^ 0x8000) as i16
}

/// Convert a frame's worth of unsigned samples into `dst`, replacing its
/// contents. Interleaved stereo ordering and sample count are preserved.
pub fn convert_audio(src: &[u16], dst: &mut Vec<i16>) {
    dst.clear();
    dst.extend(src.iter().map(|&s| sample_to_signed(s)));
}
