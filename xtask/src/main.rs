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

//! Development automation for vsmile-bridge.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "x")]
#[command(about = "Development automation for vsmile-bridge")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all CI checks (fmt, clippy, build, test)
    Ci,
    /// Format code
    Fmt {
        #[arg(long)]
        check: bool,
    },
    /// Run clippy
    Clippy {
        #[arg(long)]
        fix: bool,
    },
    /// Run tests
    Test {
        /// Run doc tests instead of the regular suite
        #[arg(long)]
        doc: bool,
    },
    /// Run benchmarks
    Bench,
    /// Run the headless bridge against a cartridge image
    Smoke {
        /// Path to a cartridge ROM image
        rom: String,
        /// Number of frames to pump
        #[arg(short = 'n', long, default_value = "600")]
        frames: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci => run_ci(),
        Commands::Fmt { check } => {
            if check {
                cargo(&["fmt", "--all", "--", "--check"])
            } else {
                cargo(&["fmt", "--all"])
            }
        }
        Commands::Clippy { fix } => {
            if fix {
                cargo(&["clippy", "--all-targets", "--fix"])
            } else {
                cargo(&["clippy", "--all-targets", "--", "-D", "warnings"])
            }
        }
        Commands::Test { doc } => {
            if doc {
                cargo(&["test", "--doc"])
            } else {
                cargo(&["test"])
            }
        }
        Commands::Bench => cargo(&["bench"]),
        Commands::Smoke { rom, frames } => {
            let frames = frames.to_string();
            cargo(&[
                "run",
                "--bin",
                "vsmile-bridge",
                "--",
                &rom,
                "--frames",
                &frames,
            ])
        }
    }
}

fn run_ci() -> Result<()> {
    println!("{}", "=== Running CI ===".bold().blue());
    let start = Instant::now();

    cargo(&["fmt", "--all", "--", "--check"])?;
    cargo(&["clippy", "--all-targets", "--", "-D", "warnings"])?;
    cargo(&["build", "--all-targets"])?;
    cargo(&["test"])?;

    println!(
        "\n{} {:.2}s",
        "✓ CI passed in".green().bold(),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn cargo(args: &[&str]) -> Result<()> {
    println!("{} cargo {}", "→".blue(), args.join(" "));
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        bail!("cargo {} failed", args.join(" "));
    }
    Ok(())
}
