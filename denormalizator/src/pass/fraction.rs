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
use crate::sentence::{Sentence, Subtype, WordType};
use crate::util::numeric::{is_integer, value_of};

/// Denominator words become fraction glyphs, "ena tretjina" to "⅓"
#[derive(Default)]
pub struct FractionPass;

impl RewritePass for FractionPass {
    fn name(&self) -> &'static str {
        "fractions"
    }

    fn rewrite(&self, lex: &Lexicon, mut sentence: Sentence) -> DenormResult<Sentence> {
        let mut i = 0;
        while i < sentence.len() {
            let word = &sentence[i];
            let numerator = if word.is(WordType::Num)
                && word.subtype.is_none()
                && is_integer(&word.denormalized)
            {
                value_of(&word.denormalized)
            } else {
                None
            };

            match (numerator, lex.denominators.get(&sentence.lower(i + 1))) {
                (Some(n), Some(&d)) => {
                    let word = sentence.collapse(i..i + 2)?;
                    word.set_number(lex.fraction(n, d));
                    word.subtype = Some(Subtype::Fraction);
                }
                _ => {
                    if sentence[i].kind.is_none() {
                        if let Some(&d) = lex.denominators.get(&sentence.lower(i)) {
                            let word = &mut sentence[i];
                            word.set_number(lex.fraction(1, d));
                            word.subtype = Some(Subtype::Fraction);
                        }
                    }
                }
            }
            i += 1;
        }
        Ok(sentence)
    }
}
