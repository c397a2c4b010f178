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

//! Rule-based denormalizer for Slovene text.
//!
//! Turns spelled-out words, as produced by speech recognition, back into
//! their written form: numbers, dates, hours, units, fractions, symbols,
//! e-mail addresses, titles and abbreviations.
//!
//! The main entry point is the [`Denormalizer`](denormalizer/struct.Denormalizer.html)
//! struct, or the [`denormalize`](denormalizer/fn.denormalize.html) function
//! for one-off calls with a JSON config.

pub mod classify;
pub mod config;
pub mod denormalizer;
pub mod dic;
pub mod error;
pub mod pass;
pub mod sentence;
pub mod style;
pub mod util;

pub mod prelude {
    pub use crate::{
        config::Config,
        denormalizer::{denormalize, Denormalized, Denormalizer},
        error::{DenormError, DenormResult},
        sentence::input::Input,
    };
}
