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
use crate::util::numeric::is_integer;

const MILLION_ZEROS: &str = "000000";

/// Word emitted after a decimal number of millions
const MILLION_WORD: &str = "milijona";

/// "dvajset celih pet" to "20,5"
#[derive(Default)]
pub struct DecimalPass;

impl DecimalPass {
    fn is_integer_at(&self, sentence: &Sentence, pos: usize) -> bool {
        sentence
            .get(pos)
            .map_or(false, |w| w.is(WordType::Num) && is_integer(&w.denormalized))
    }

    /// Rewrites the decimal starting at `pos` if there is one
    fn rewrite_at(&self, lex: &Lexicon, sentence: &mut Sentence, pos: usize) -> DenormResult<()> {
        if !self.is_integer_at(sentence, pos)
            || !lex.words.decimal_markers.contains(&sentence.lower(pos + 1))
        {
            return Ok(());
        }
        let int_part = sentence[pos].denormalized.clone();

        // "dvajset cela pet-odstotni" to "20,5-odstotni"
        if sentence
            .get(pos + 2)
            .map_or(false, |w| w.is(WordType::NumPartToken))
        {
            let tail = sentence[pos + 2].denormalized.clone();
            let word = sentence.collapse(pos..pos + 3)?;
            word.denormalized = format!("{},{}", int_part, tail);
            word.subtype = Some(Subtype::Decimal);
            word.kind = Some(WordType::NumPartToken);
            return Ok(());
        }

        let mut end = pos + 2;
        while self.is_integer_at(sentence, end) {
            end += 1;
        }
        if end == pos + 2 {
            return Ok(());
        }
        let digits: String = sentence.words()[pos + 2..end]
            .iter()
            .map(|w| w.denormalized.as_str())
            .collect();

        let millions = digits.len() > MILLION_ZEROS.len()
            && digits.ends_with(MILLION_ZEROS)
            && sentence[end - 1].is_compound();
        if millions {
            // the scale word leaves the number and becomes "milijona"
            let at = sentence[end - 1].index().len() - 1;
            sentence.split_word(end - 1, at)?;
            let fraction = &digits[..digits.len() - MILLION_ZEROS.len()];
            let word = sentence.collapse(pos..end)?;
            word.set_number(format!("{},{}", int_part, fraction));
            word.subtype = Some(Subtype::Decimal);
            let mio = &mut sentence[pos + 1];
            mio.denormalized = MILLION_WORD.to_owned();
            mio.kind = Some(WordType::Mio);
            return Ok(());
        }

        let word = sentence.collapse(pos..end)?;
        word.set_number(format!("{},{}", int_part, digits));
        word.subtype = Some(Subtype::Decimal);
        Ok(())
    }
}

impl RewritePass for DecimalPass {
    fn name(&self) -> &'static str {
        "decimals"
    }

    fn rewrite(&self, lex: &Lexicon, mut sentence: Sentence) -> DenormResult<Sentence> {
        let mut i = 0;
        while i < sentence.len() {
            self.rewrite_at(lex, &mut sentence, i)?;
            i += 1;
        }
        Ok(sentence)
    }
}
