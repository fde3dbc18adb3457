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

//! ROM image ingestion
//!
//! Turns host-supplied byte buffers into the fixed-size slot images the core
//! expects. Validation happens here, before any core construction, so a bad
//! buffer can never leave the bridge in a half-initialized state.
//!
//! # Dummy BIOS
//!
//! The core boots fine without a real system ROM as long as the reset-vector
//! region contains a minimal stub. When the host supplies no BIOS,
//! [`SystemRom::dummy`] synthesizes a zero-filled image with the stub word
//! `0x0031` at every odd word index in `0xFFFC0..0xFFFDC`, which is enough
//! for the core to fall through into cartridge execution.

use super::error::{BridgeError, Result};
use crate::core_api::{MAX_CART_SIZE, SYS_ROM_SIZE};
use std::path::Path;

/// First word index of the dummy-BIOS boot stub region.
const BOOT_STUB_START: usize = 0xFFFC0;
/// One past the last word index of the boot stub region.
const BOOT_STUB_END: usize = 0xFFFDC;
/// Word written at each odd word index of the stub range.
const BOOT_STUB_WORD: u16 = 0x0031;

/// System ROM image, always exactly [`SYS_ROM_SIZE`] bytes.
///
/// The core maps this buffer directly into the emulated CPU address space,
/// which is why a supplied image must match the slot size exactly instead of
/// merely fitting inside it.
pub struct SystemRom(Box<[u8]>);

impl SystemRom {
    /// Build a system ROM from a host-supplied image.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::InvalidSystemRomSize`] unless `data` is exactly
    /// [`SYS_ROM_SIZE`] bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() != SYS_ROM_SIZE {
            return Err(BridgeError::InvalidSystemRomSize {
                got: data.len(),
                expected: SYS_ROM_SIZE,
            });
        }
        Ok(Self(data.to_vec().into_boxed_slice()))
    }

    /// Synthesize the dummy BIOS image.
    ///
    /// The core sees the ROM as an array of 16-bit little-endian words; the
    /// stub word goes at every odd word index of the boot-vector range.
    pub fn dummy() -> Self {
        let mut data = vec![0u8; SYS_ROM_SIZE].into_boxed_slice();
        for word in (BOOT_STUB_START..BOOT_STUB_END).step_by(2).map(|i| i + 1) {
            data[2 * word..2 * word + 2].copy_from_slice(&BOOT_STUB_WORD.to_le_bytes());
        }
        Self(data)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Box<[u8]> {
        self.0
    }
}

/// Cartridge ROM image, zero-padded to [`MAX_CART_SIZE`] bytes.
pub struct CartridgeRom {
    data: Box<[u8]>,
    payload_len: usize,
}

impl CartridgeRom {
    /// Build a cartridge ROM from a host-supplied image.
    ///
    /// The image is copied into a full-size slot buffer; the remainder stays
    /// zero. Immutable once built.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::InvalidCartridgeSize`] when `data` is empty or
    /// larger than [`MAX_CART_SIZE`].
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.is_empty() || data.len() > MAX_CART_SIZE {
            return Err(BridgeError::InvalidCartridgeSize {
                got: data.len(),
                max: MAX_CART_SIZE,
            });
        }
        let mut slot = vec![0u8; MAX_CART_SIZE].into_boxed_slice();
        slot[..data.len()].copy_from_slice(data);
        Ok(Self {
            data: slot,
            payload_len: data.len(),
        })
    }

    /// Read a cartridge ROM image from a file.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures and the same size validation as
    /// [`CartridgeRom::from_bytes`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Size of the image as supplied by the host, before padding.
    pub fn payload_len(&self) -> usize {
        self.payload_len
    }

    /// The image as supplied by the host, without the zero padding.
    pub fn payload(&self) -> &[u8] {
        &self.data[..self.payload_len]
    }

    /// Full padded slot contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Box<[u8]> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_system_rom_exact_size() {
        let rom = SystemRom::from_bytes(&vec![0xAB; SYS_ROM_SIZE]).unwrap();
        assert_eq!(rom.as_bytes().len(), SYS_ROM_SIZE);
        assert!(rom.as_bytes().iter().all(|&b| b == 0xAB));
    }

    #[test]
    fn test_system_rom_rejects_short_buffer() {
        let result = SystemRom::from_bytes(&[0u8; 1024]);
        assert!(matches!(
            result,
            Err(BridgeError::InvalidSystemRomSize {
                got: 1024,
                expected: SYS_ROM_SIZE
            })
        ));
    }

    #[test]
    fn test_system_rom_rejects_oversized_buffer() {
        let result = SystemRom::from_bytes(&vec![0u8; SYS_ROM_SIZE + 1]);
        assert!(result.is_err());
    }

    #[test]
    fn test_dummy_bios_boot_stub() {
        let rom = SystemRom::dummy();
        let bytes = rom.as_bytes();
        assert_eq!(bytes.len(), SYS_ROM_SIZE);

        // Odd word indices in the range carry the little-endian stub word;
        // even word indices stay zero.
        for i in (BOOT_STUB_START..BOOT_STUB_END).step_by(2) {
            assert_eq!(bytes[2 * i], 0x00, "even word {i:#X}");
            assert_eq!(bytes[2 * i + 1], 0x00, "even word {i:#X}");
            assert_eq!(bytes[2 * (i + 1)], 0x31, "odd word {:#X}", i + 1);
            assert_eq!(bytes[2 * (i + 1) + 1], 0x00, "odd word {:#X}", i + 1);
        }

        // Everything around the stub stays zero.
        assert_eq!(bytes[2 * (BOOT_STUB_START - 1)], 0);
        assert_eq!(bytes[2 * (BOOT_STUB_START - 1) + 1], 0);
        assert_eq!(bytes[2 * BOOT_STUB_END], 0);
        assert_eq!(bytes[2 * BOOT_STUB_END + 1], 0);
        assert_eq!(bytes[0], 0);
        assert_eq!(bytes[SYS_ROM_SIZE - 1], 0);
    }

    #[test]
    fn test_cartridge_rom_padding() {
        let payload = [0x11u8, 0x22, 0x33, 0x44];
        let rom = CartridgeRom::from_bytes(&payload).unwrap();
        assert_eq!(rom.payload_len(), 4);
        assert_eq!(rom.payload(), &payload);
        assert_eq!(rom.as_bytes().len(), MAX_CART_SIZE);
        assert_eq!(&rom.as_bytes()[..4], &payload);
        assert!(rom.as_bytes()[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_cartridge_rom_full_slot() {
        let rom = CartridgeRom::from_bytes(&vec![0x5Au8; MAX_CART_SIZE]).unwrap();
        assert_eq!(rom.payload_len(), MAX_CART_SIZE);
    }

    #[test]
    fn test_cartridge_rom_rejects_empty() {
        assert!(matches!(
            CartridgeRom::from_bytes(&[]),
            Err(BridgeError::InvalidCartridgeSize { got: 0, .. })
        ));
    }

    #[test]
    fn test_cartridge_rom_rejects_oversized() {
        let result = CartridgeRom::from_bytes(&vec![0u8; MAX_CART_SIZE + 1]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cartridge_rom_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
        file.flush().unwrap();

        let rom = CartridgeRom::from_file(file.path()).unwrap();
        assert_eq!(rom.payload_len(), 4);
        assert_eq!(&rom.as_bytes()[..4], &[0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_cartridge_rom_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CartridgeRom::from_file(dir.path().join("nope.bin"));
        assert!(matches!(result, Err(BridgeError::Io(_))));
    }
}
