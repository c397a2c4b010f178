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

use crate::dic::Lexicon;
use crate::pass::RewritePass;
use crate::prelude::*;
use crate::sentence::{Sentence, WordType};
use crate::util::numeric::{is_integer, is_ordinal};

const THROUGH: &str = "skozi";
const PER: &str = "na";

/// "tri skozi štiri" to "3/4", "km na h" to "km/h"
#[derive(Default)]
pub struct SlashPass;

impl SlashPass {
    /// Units and numbers that are not ordinals
    fn is_quantity(&self, sentence: &Sentence, pos: usize) -> bool {
        sentence.get(pos).map_or(false, |w| {
            w.is(WordType::Unit) || (w.is(WordType::Num) && !is_ordinal(&w.denormalized))
        })
    }

    fn slash(&self, sentence: &mut Sentence, pos: usize) -> DenormResult<()> {
        let left = &sentence[pos - 1];
        let right = &sentence[pos + 1];
        let kind = if left.is(WordType::Num) && right.is(WordType::Num) {
            WordType::Num
        } else {
            WordType::Unit
        };
        let form = format!("{}/{}", left.denormalized, right.denormalized);
        let word = sentence.collapse(pos - 1..pos + 2)?;
        word.denormalized = form;
        word.kind = Some(kind);
        word.subtype = None;
        Ok(())
    }
}

impl RewritePass for SlashPass {
    fn name(&self) -> &'static str {
        "slashes"
    }

    fn rewrite(&self, lex: &Lexicon, mut sentence: Sentence) -> DenormResult<Sentence> {
        let mut i = 1;
        while i + 1 < sentence.len() {
            let lower = sentence.lower(i);
            if lower == THROUGH
                && is_integer(sentence.form(i - 1))
                && is_integer(sentence.form(i + 1))
            {
                self.slash(&mut sentence, i)?;
                continue;
            }
            if lower == PER
                && self.is_quantity(&sentence, i - 1)
                && self.is_quantity(&sentence, i + 1)
                && !sentence
                    .right(i, 3)
                    .iter()
                    .any(|w| lex.words.currency.contains(&w.lower()))
            {
                // "km na h na s" keeps folding into the same word
                self.slash(&mut sentence, i)?;
                continue;
            }
            i += 1;
        }
        Ok(sentence)
    }
}
