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

//! Rewrite passes over a sentence
//!
//! Every pass recognizes one family of spelled-out patterns, collapses the
//! matched words into their leftmost word and writes the written form into
//! `denormalized`. Passes run in a fixed order, see
//! [`Denormalizer`](crate::denormalizer::Denormalizer).

use crate::dic::Lexicon;
use crate::prelude::*;
use crate::sentence::Sentence;

pub mod alnum;
pub mod combo;
pub mod email;
pub mod fraction;
pub mod hour;
pub mod number;
pub mod slash;
pub mod symbol;
pub mod title;
pub mod unit;

/// Trait of a pass rewriting the sentence
pub trait RewritePass: Sync + Send {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Returns the rewritten sentence
    fn rewrite(&self, lexicon: &Lexicon, sentence: Sentence) -> DenormResult<Sentence>;
}

/// Lowercase forms of up to `n` untyped words starting at `pos`
pub(crate) fn untyped_window(sentence: &Sentence, pos: usize, n: usize) -> Vec<String> {
    sentence.words()[pos..]
        .iter()
        .take(n)
        .take_while(|w| w.kind.is_none() && !w.is_done())
        .map(|w| w.lower())
        .collect()
}
