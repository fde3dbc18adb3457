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

//! Headless bridge runner
//!
//! Drives the full bridge pipeline (ROM ingestion, frame pump, format
//! conversion, FPS accounting) from the command line using the stub core.
//! Useful for smoke-testing the bridge without a host application or the
//! real emulation core linked in.

use clap::Parser;
use log::{error, info};
use vsmile_bridge::bridge::{CartridgeRom, EmulatorSession};
use vsmile_bridge::core_api::stub::StubCoreFactory;
use vsmile_bridge::core_api::VideoTiming;

/// Headless V.Smile bridge runner
#[derive(Parser)]
#[command(name = "vsmile-bridge")]
#[command(about = "Run the bridge pipeline headless against a cartridge image", long_about = None)]
struct Args {
    /// Path to the cartridge ROM image (up to 8 MiB)
    cart_file: String,

    /// Path to a 2 MiB system ROM; omitted = dummy BIOS
    #[arg(short = 'b', long)]
    bios: Option<String>,

    /// Use PAL (50 Hz) timing instead of NTSC
    #[arg(long)]
    pal: bool,

    /// Number of frames to run
    #[arg(short = 'n', long, default_value = "600")]
    frames: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional .env for log-level configuration during development.
    if let Err(e) = dotenvy::dotenv() {
        if !e.to_string().contains("not found") {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize logger with default level INFO
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("vsmile-bridge v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    info!("Loading cartridge ROM from: {}", args.cart_file);
    let cart = CartridgeRom::from_file(&args.cart_file)?;
    info!("Cartridge ROM loaded ({} bytes)", cart.payload_len());

    let bios = match &args.bios {
        Some(path) => {
            info!("Loading system ROM from: {}", path);
            Some(std::fs::read(path)?)
        }
        None => None,
    };

    let timing = VideoTiming::from_pal_flag(args.pal);
    let mut session = EmulatorSession::new(Box::new(StubCoreFactory::new()));

    if !session.initialize(bios.as_deref(), cart.payload(), timing) {
        error!("Bridge initialization failed");
        return Err("initialization failed".into());
    }

    // Hosts press ON once after boot; mirror that here.
    session.press_on_button(true);
    session.press_on_button(false);

    info!("Running {} frames...", args.frames);
    for _ in 0..args.frames {
        session.run_frame();
    }

    info!(
        "Done: {} audio samples in last frame, measured {:.1} fps (host-paced)",
        session.audio_samples().len(),
        session.fps()
    );

    session.shutdown();
    Ok(())
}
