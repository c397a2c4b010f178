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
use crate::util::numeric::is_number;

const CELSIUS: &str = "celzija";
const CELSIUS_SYMBOL: &str = "°C";
const DEGREE_STEM: &str = "stopinj";
const PER: &str = "na";

/// Tags unit words after a quantity and optionally rewrites them to symbols
pub struct UnitPass {
    /// Write the symbol instead of only tagging the word
    emit: bool,
    /// Materialize "pol" and "četrt" in front of a unit
    fractions: bool,
}

impl UnitPass {
    pub fn new(emit: bool, fractions: bool) -> Self {
        Self { emit, fractions }
    }

    fn celsius(&self, sentence: &mut Sentence) -> DenormResult<()> {
        let mut i = 1;
        while i < sentence.len() {
            if sentence.lower(i) == CELSIUS && sentence.lower(i - 1).starts_with(DEGREE_STEM) {
                sentence[i - 1].kind = Some(WordType::Unit);
                if self.emit {
                    sentence.collapse(i - 1..i + 1)?.denormalized = CELSIUS_SYMBOL.to_owned();
                    continue;
                }
            }
            i += 1;
        }
        Ok(())
    }

    fn attaches(&self, lex: &Lexicon, sentence: &Sentence, pos: usize) -> bool {
        if pos == 0 {
            return false;
        }
        let after_quantity = is_number(sentence.form(pos - 1), true);
        let per_unit = pos > 1
            && sentence.lower(pos - 1) == PER
            && (sentence[pos - 2].is(WordType::Num) || sentence[pos - 2].is(WordType::Unit));
        after_quantity || per_unit || lex.risky_denominators.contains_key(&sentence.lower(pos - 1))
    }
}

impl RewritePass for UnitPass {
    fn name(&self) -> &'static str {
        "units"
    }

    fn rewrite(&self, lex: &Lexicon, mut sentence: Sentence) -> DenormResult<Sentence> {
        self.celsius(&mut sentence)?;
        for i in 0..sentence.len() {
            if sentence[i].kind.is_some() || sentence[i].is_done() {
                continue;
            }
            let unit = match lex.units.parse(&sentence.lower(i)) {
                Some(unit) => unit,
                None => continue,
            };
            if !self.attaches(lex, &sentence, i) {
                continue;
            }

            if let Some(&d) = lex.risky_denominators.get(&sentence.lower(i - 1)) {
                if self.fractions && sentence[i - 1].kind.is_none() {
                    let half = &mut sentence[i - 1];
                    half.set_number(lex.fraction(1, d));
                    half.subtype = Some(Subtype::Fraction);
                }
            }

            let word = &mut sentence[i];
            word.kind = Some(WordType::Unit);
            if self.emit {
                word.denormalized = unit.symbol;
            }
        }
        Ok(sentence)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dic::LEXICON;
    use crate::pass::number::SpelledNumberPass;
    use crate::sentence::input::Input;

    fn run(text: &str, emit: bool, fractions: bool) -> Sentence {
        let sentence = Input::from(text).into_sentence(false).unwrap();
        let sentence = SpelledNumberPass.rewrite(&LEXICON, sentence).unwrap();
        UnitPass::new(emit, fractions)
            .rewrite(&LEXICON, sentence)
            .unwrap()
    }

    #[test]
    fn unit_after_number() {
        let s = run("pet kilogramov", true, true);
        assert_eq!(s[1].denormalized, "kg");
        assert_eq!(s[1].kind, Some(WordType::Unit));
    }

    #[test]
    fn tag_only() {
        let s = run("pet kilogramov", false, true);
        assert_eq!(s[1].denormalized, "kilogramov");
        assert_eq!(s[1].kind, Some(WordType::Unit));
    }

    #[test]
    fn no_quantity() {
        let s = run("meter je dolg", true, true);
        assert_eq!(s[0].denormalized, "meter");
        assert_eq!(s[0].kind, None);
    }

    #[test]
    fn celsius() {
        let s = run("dvajset stopinj celzija", true, true);
        assert_eq!(s.len(), 2);
        assert_eq!(s[1].denormalized, "°C");
        assert_eq!(s[1].index(), &[1, 2]);
        assert_eq!(s[1].kind, Some(WordType::Unit));
    }

    #[test]
    fn per_unit() {
        let s = run("sto kilometrov na uro", true, true);
        assert_eq!(s[1].denormalized, "km");
        assert_eq!(s[3].denormalized, "h");
    }

    #[test]
    fn risky_fraction() {
        let s = run("pol litra", true, true);
        assert_eq!(s[0].denormalized, "½");
        assert_eq!(s[1].denormalized, "l");
        let s = run("pol litra", true, false);
        assert_eq!(s[0].denormalized, "pol");
        assert_eq!(s[1].denormalized, "l");
    }
}
