// Benchres - Graph benchmark report toolkit
//
// Copyright (c) 2026 Benchres contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Benchres command line interface.
//!
//! Parses a benchmark results file and prints its first section; the whole
//! report can additionally be exported as CSV with `--csv`.

mod error;

use benchres_core::{parse_reader, ParseOptions, SectionRecord};
use benchres_csv::to_csv;
use clap::Parser;
use colored::Colorize;
use error::CliError;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

/// Results file used when no input path is given.
const DEFAULT_INPUT: &str = "ppResults_2app.txt";

/// Parse graph benchmark reports and export them as tables.
#[derive(Parser)]
#[command(name = "benchres")]
#[command(author, version, about = "Parse graph benchmark reports and export them as tables", long_about = None)]
struct Cli {
    /// Path to the benchmark results file.
    input: Option<PathBuf>,

    /// Write the full report as CSV to this file.
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let input = match cli.input {
        Some(path) => path,
        None => {
            println!(
                "{} no input file given, using {}",
                "warning:".yellow().bold(),
                DEFAULT_INPUT
            );
            PathBuf::from(DEFAULT_INPUT)
        }
    };

    let file = File::open(&input).map_err(|e| CliError::io_error(&input, e))?;
    let report = parse_reader(BufReader::new(file), ParseOptions::default())?;

    if let Some(path) = &cli.csv {
        let csv = to_csv(&report)?;
        std::fs::write(path, csv).map_err(|e| CliError::io_error(path, e))?;
        println!("wrote CSV to {}", path.display());
    }

    match report.first() {
        Some(section) => print_section(section),
        None => println!("report is empty"),
    }

    Ok(())
}

/// Render one section in indented human-readable form.
fn print_section(section: &SectionRecord) {
    println!("{}", section.graph.bold());
    for (method, attributes) in &section.methods {
        println!("  {}", method.cyan());
        for (attribute, value) in attributes {
            println!("    {} = {}", attribute, value);
        }
    }
}
