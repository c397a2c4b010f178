/*
 * Copyright (c) 2021 Works Applications Co., Ltd.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use structopt::StructOpt;

use denormalizator::config::{Config, Features};
use denormalizator::prelude::*;

/// A Slovene text denormalizer
#[derive(StructOpt)]
#[structopt(name = "denormalizator")]
struct Cli {
    /// Input text file: If not present, read from STDIN
    #[structopt(parse(from_os_str))]
    file: Option<PathBuf>,

    /// Config preset: "default", "technical" or "everyday"
    #[structopt(short = "c", long = "config", default_value = "default")]
    preset: String,

    /// Path to the setting file in JSON format, overrides the preset
    #[structopt(short = "r", long = "config-file", parse(from_os_str))]
    config_file: Option<PathBuf>,

    // Output text file: If not present, use stdout
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output_file: Option<PathBuf>,

    /// Input lines are already tokenized, split only on whitespace
    #[structopt(short = "t", long = "tokenized")]
    tokenized: bool,

    /// Prints the JSON record instead of the string
    #[structopt(short = "j", long = "json")]
    json: bool,

    /// Debug mode: Log every pass
    #[structopt(short = "d", long = "debug")]
    enable_debug: bool,
}

fn main() {
    let args: Cli = Cli::from_args();

    let log_level = if args.enable_debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(args: &Cli) -> DenormResult<()> {
    let config = match &args.config_file {
        Some(path) => Config::from_file(path)?,
        None => args.preset.parse::<Config>()?,
    };
    let config = if args.tokenized {
        config.with(Features::PROPER_TOKENIZATION, true)
    } else {
        config
    };
    log::info!("running with {:?}", config.features());
    let denormalizer = Denormalizer::new(config);

    // input: stdin or file
    let reader: Box<dyn BufRead> = match &args.file {
        Some(input_path) => Box::new(BufReader::new(File::open(input_path).map_err(|e| {
            DenormError::Io {
                cause: e,
                context: format!("Failed to open input file {:?}", input_path),
            }
        })?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    // output: stdout or file
    let mut writer: Box<dyn Write> = match &args.output_file {
        Some(output_path) => Box::new(BufWriter::new(File::create(output_path).map_err(
            |e| DenormError::Io {
                cause: e,
                context: format!("Failed to open output file {:?}", output_path),
            },
        )?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    for line in reader.lines() {
        let input = line?;
        let result = denormalizer.denormalize(input.as_str())?;
        write_result(&mut writer, &result, args.json)?;
    }
    writer.flush()?;
    Ok(())
}

/// Format and write one denormalized line into writer
fn write_result(writer: &mut Box<dyn Write>, result: &Denormalized, json: bool) -> DenormResult<()> {
    if json {
        serde_json::to_writer(&mut *writer, result)?;
        writeln!(writer)?;
    } else {
        writeln!(
            writer,
            "{}",
            result.denormalized_string.as_deref().unwrap_or_default()
        )?;
    }
    Ok(())
}
