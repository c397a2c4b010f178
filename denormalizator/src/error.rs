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

use thiserror::Error;

use crate::config::ConfigError;

pub type DenormResult<T> = Result<T, DenormError>;

/// Denormalizator error
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DenormError {
    #[error("{context}: {cause}")]
    ErrWithContext {
        context: String,
        cause: Box<DenormError>,
    },

    #[error("{context}: {cause}")]
    Io {
        cause: std::io::Error,
        context: String,
    },

    #[error("Regex error")]
    RegexError(#[from] fancy_regex::Error),

    #[error("Csv error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serde error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config Error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Invalid data format: {1} at line {0}")]
    InvalidDataFormat(usize, String),

    #[error("Invalid range: {0}..{1}")]
    InvalidRange(usize, usize),
}

impl From<std::io::Error> for DenormError {
    fn from(e: std::io::Error) -> Self {
        DenormError::Io {
            cause: e,
            context: String::from("IO Error"),
        }
    }
}

impl DenormError {
    pub fn with_context<S: Into<String>>(self, ctx: S) -> Self {
        match self {
            DenormError::Io { cause, .. } => DenormError::Io {
                cause,
                context: ctx.into(),
            },
            cause => DenormError::ErrWithContext {
                cause: Box::new(cause),
                context: ctx.into(),
            },
        }
    }
}
