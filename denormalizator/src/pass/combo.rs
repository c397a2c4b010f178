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
use crate::util::numeric::{format_decimal, is_fraction, is_integer, is_slash_fraction, value_of};

/// Quantities closed by a fraction, "dva kilograma in pol" to "2,5 kg"
#[derive(Default)]
pub struct ComboPass;

impl ComboPass {
    fn is_unit(&self, sentence: &Sentence, pos: usize) -> bool {
        sentence.get(pos).map_or(false, |w| w.is(WordType::Unit))
    }

    /// Fractional part starting at `pos` and the number of words it spans
    fn fraction_at(&self, lex: &Lexicon, sentence: &Sentence, pos: usize) -> Option<(f64, usize)> {
        let form = sentence.form(pos);
        if is_fraction(form) || is_slash_fraction(form) {
            return Some((lex.fraction_value(form)?, 1));
        }
        if let Some(&d) = lex.risky_denominators.get(&sentence.lower(pos)) {
            return Some((1.0 / d as f64, 1));
        }
        if is_integer(form) {
            let d = *lex.denominators.get(&sentence.lower(pos + 1))?;
            return Some((value_of(form)? as f64 / d as f64, 2));
        }
        None
    }

    /// Combined quantity at `pos`: value, unit symbol and words consumed
    fn combo_at(&self, lex: &Lexicon, sentence: &Sentence, pos: usize) -> Option<(f64, String, usize)> {
        let whole = sentence.get(pos)?;
        if !whole.is(WordType::Num) || !is_integer(&whole.denormalized) {
            return None;
        }
        if !self.is_unit(sentence, pos + 1)
            || !lex.words.conjunctions.contains(&sentence.lower(pos + 2))
        {
            return None;
        }
        let (fraction, width) = self.fraction_at(lex, sentence, pos + 3)?;
        let unit = sentence[pos + 1].denormalized.clone();
        let mut end = pos + 3 + width;
        if self.is_unit(sentence, end) {
            // a repeated unit is absorbed, any other unit belongs elsewhere
            if sentence.form(end) != unit {
                return None;
            }
            end += 1;
        }
        let value = value_of(&whole.denormalized)? as f64 + fraction;
        Some((value, unit, end))
    }
}

impl RewritePass for ComboPass {
    fn name(&self) -> &'static str {
        "quantity combos"
    }

    fn rewrite(&self, lex: &Lexicon, mut sentence: Sentence) -> DenormResult<Sentence> {
        let mut i = 0;
        while i < sentence.len() {
            if let Some((value, unit, end)) = self.combo_at(lex, &sentence, i) {
                let word = sentence.collapse(i..end)?;
                word.denormalized = format!("{} {}", format_decimal(value), unit);
                word.kind = Some(WordType::ComboUnit);
                word.subtype = None;
            }
            i += 1;
        }
        Ok(sentence)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dic::LEXICON;
    use crate::pass::number::SpelledNumberPass;
    use crate::pass::unit::UnitPass;
    use crate::sentence::input::Input;

    fn run(text: &str) -> Sentence {
        let sentence = Input::from(text).into_sentence(false).unwrap();
        let sentence = SpelledNumberPass.rewrite(&LEXICON, sentence).unwrap();
        let sentence = UnitPass::new(true, true).rewrite(&LEXICON, sentence).unwrap();
        ComboPass.rewrite(&LEXICON, sentence).unwrap()
    }

    #[test]
    fn risky_half() {
        let s = run("dva kilograma in pol");
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].denormalized, "2,5 kg");
        assert_eq!(s[0].kind, Some(WordType::ComboUnit));
    }

    #[test]
    fn repeated_unit() {
        let s = run("dva kilograma in pol kilograma");
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].denormalized, "2,5 kg");
        assert_eq!(s[0].index(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn spelled_fraction() {
        let s = run("tri metre in ena četrtina");
        assert_eq!(s[0].denormalized, "3,25 m");
    }

    #[test]
    fn no_fraction() {
        let s = run("dva kilograma in jabolko");
        assert_eq!(s.len(), 4);
    }
}
