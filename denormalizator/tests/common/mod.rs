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

#![allow(dead_code)]

extern crate denormalizator;
use denormalizator::prelude::*;
use denormalizator::sentence::Sentence;

lazy_static! {
    pub static ref DENORMALIZER: Denormalizer<'static> = Denormalizer::new(Config::default());
}

/// Output string of the default denormalizer
pub fn denormalized(text: &str) -> String {
    DENORMALIZER
        .denormalize(text)
        .expect("Failed to denormalize")
        .denormalized_string
        .unwrap_or_default()
}

/// Sentence after all passes of the default denormalizer
pub fn processed<I: Into<Input>>(input: I) -> Sentence {
    DENORMALIZER.process(input).expect("Failed to process")
}

/// Pre-tokenized input with pauses
pub fn with_pauses(tokens: &[&str], pauses: &[f64]) -> Input {
    Input::Tokens {
        tokens: tokens.iter().map(|t| t.to_string()).collect(),
        pauses: Some(pauses.to_vec()),
    }
}

/// Number of tokens the input splits into
pub fn token_count(text: &str) -> usize {
    Input::from(text)
        .into_sentence(false)
        .expect("Failed to tokenize")
        .len()
}
