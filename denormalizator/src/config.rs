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

use std::fmt::{Debug, Formatter};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use bitflags::bitflags;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_PRESET: &str = "default";

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config file not found: {0}")]
    FileNotFound(String),

    #[error("Unknown config preset: {0}")]
    UnknownPreset(String),

    #[error("Config must be a preset name or a mapping of flags, got {0}")]
    InvalidType(String),
}

bitflags! {
    /// A set of enabled rewrite features
    #[repr(transparent)]
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Features: u32 {
        /** Input is already split into tokens on whitespace. */
        const PROPER_TOKENIZATION = (1 << 0);
        /** Spelled-out numbers become digits. */
        const INCLUDE_NUMBERS = (1 << 1);
        /** Numerals inside compound words, "20-odstotni". */
        const INCLUDE_NUMBERS_PART_TOKEN = (1 << 2);
        /** Years spoken in two halves. */
        const COL_YEARS = (1 << 3);
        /** Unit words become SI symbols. */
        const INCLUDE_UNITS = (1 << 4);
        /** Denominator words become fraction glyphs. */
        const INCLUDE_FRACTIONS = (1 << 5);
        /** Context-dependent choice between digits and words. */
        const INCLUDE_STYLISTIC = (1 << 6);
        const INCLUDE_SLASH = (1 << 7);
        const INCLUDE_EMAIL = (1 << 8);
        const INCLUDE_SYMBOLS = (1 << 9);
        const INCLUDE_ALNUM = (1 << 10);
        /** Quantities with a trailing fraction, "dva kilograma in pol". */
        const MERGE_SEP_NUMBERS = (1 << 11);
        const INCLUDE_TITLE = (1 << 12);
        const INCLUDE_ABBR = (1 << 13);
        /** Runs of single digits are concatenated. */
        const PUNCT_IS_INCLUDED = (1 << 14);
    }
}

impl Debug for Features {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Struct corresponds with a raw flag mapping.
/// Every key is optional and overrides the default preset.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    proper_tokenization: Option<bool>,
    include_numbers: Option<bool>,
    include_numbers_part_token: Option<bool>,
    col_years: Option<bool>,
    include_units: Option<bool>,
    include_fractions: Option<bool>,
    include_stylistic: Option<bool>,
    include_slash: Option<bool>,
    include_email: Option<bool>,
    include_symbols: Option<bool>,
    include_alnum: Option<bool>,
    merge_sep_numbers: Option<bool>,
    include_title: Option<bool>,
    include_abbr: Option<bool>,
    punct_is_included: Option<bool>,
}

impl RawConfig {
    fn overrides(&self) -> [(Option<bool>, Features); 15] {
        [
            (self.proper_tokenization, Features::PROPER_TOKENIZATION),
            (self.include_numbers, Features::INCLUDE_NUMBERS),
            (
                self.include_numbers_part_token,
                Features::INCLUDE_NUMBERS_PART_TOKEN,
            ),
            (self.col_years, Features::COL_YEARS),
            (self.include_units, Features::INCLUDE_UNITS),
            (self.include_fractions, Features::INCLUDE_FRACTIONS),
            (self.include_stylistic, Features::INCLUDE_STYLISTIC),
            (self.include_slash, Features::INCLUDE_SLASH),
            (self.include_email, Features::INCLUDE_EMAIL),
            (self.include_symbols, Features::INCLUDE_SYMBOLS),
            (self.include_alnum, Features::INCLUDE_ALNUM),
            (self.merge_sep_numbers, Features::MERGE_SEP_NUMBERS),
            (self.include_title, Features::INCLUDE_TITLE),
            (self.include_abbr, Features::INCLUDE_ABBR),
            (self.punct_is_included, Features::PUNCT_IS_INCLUDED),
        ]
    }
}

/// Set of features the denormalizer runs with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    features: Features,
}

impl Config {
    pub fn new(features: Features) -> Self {
        Self { features }
    }

    /// Resolves one of the named presets: "default", "technical" or "everyday"
    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        let default = default_features();
        let features = match name {
            "default" => default,
            "technical" => {
                (default | Features::INCLUDE_NUMBERS_PART_TOKEN) - Features::INCLUDE_STYLISTIC
            }
            "everyday" => {
                default
                    - Features::INCLUDE_UNITS
                    - Features::INCLUDE_SYMBOLS
                    - Features::INCLUDE_SLASH
                    - Features::INCLUDE_ALNUM
            }
            _ => return Err(ConfigError::UnknownPreset(name.to_owned())),
        };
        Ok(Self::new(features))
    }

    /// Builds a config from a JSON value.
    ///
    /// A string names a preset, an object overrides single flags of the default
    /// preset and null gives the default preset.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        match value {
            Value::Null => Self::preset(DEFAULT_PRESET),
            Value::String(name) => Self::preset(name),
            Value::Object(_) => {
                let raw: RawConfig = serde_json::from_value(value.clone())?;
                Ok(Self::preset(DEFAULT_PRESET)?.apply(&raw))
            }
            other => Err(ConfigError::InvalidType(json_type_name(other).to_owned())),
        }
    }

    /// Reads a config value from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        let reader = BufReader::new(File::open(path)?);
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(&value)
    }

    fn apply(mut self, raw: &RawConfig) -> Self {
        for (value, flag) in raw.overrides() {
            if let Some(on) = value {
                self.features.set(flag, on);
            }
        }
        self
    }

    pub fn with(mut self, flag: Features, on: bool) -> Self {
        self.features.set(flag, on);
        self
    }

    pub fn features(&self) -> Features {
        self.features
    }

    #[inline]
    pub fn is_enabled(&self, flag: Features) -> bool {
        self.features.contains(flag)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(default_features())
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::preset(s)
    }
}

fn default_features() -> Features {
    Features::all() - Features::PROPER_TOKENIZATION - Features::INCLUDE_NUMBERS_PART_TOKEN
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
