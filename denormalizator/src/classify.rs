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

//! Span tags for numbers that carry structure: dates, years and times of day

use crate::dic::Lexicon;
use crate::pass::RewritePass;
use crate::prelude::*;
use crate::sentence::{Microtype, Sentence, Subtype, WordType};
use crate::util::numeric::{is_integer, value_of};

/// Plausible range of a year written with four digits
const YEARS: std::ops::RangeInclusive<u64> = 1000..=2100;

const DAYS: std::ops::RangeInclusive<u64> = 1..=31;

fn is_year_form(s: &str) -> bool {
    s.len() == 4 && is_integer(s) && value_of(s).map_or(false, |v| YEARS.contains(&v))
}

/// Assigns microtypes and spreads them over the words of one span
#[derive(Default)]
pub struct ClassifyPass;

impl ClassifyPass {
    fn is_day(&self, sentence: &Sentence, pos: usize) -> bool {
        let word = &sentence[pos];
        word.is(WordType::Num)
            && word.subtype == Some(Subtype::Ordinal)
            && value_of(&word.denormalized).map_or(false, |d| DAYS.contains(&d))
    }

    fn classify(&self, lex: &Lexicon, sentence: &mut Sentence) {
        for i in 0..sentence.len() {
            if sentence[i].microtype.is_some() {
                continue;
            }
            let kind = sentence[i].kind;
            let microtype = match kind {
                Some(WordType::Hour) => Some(Microtype::Hour),
                Some(WordType::Year) | Some(WordType::ColYear) => Some(Microtype::Year),
                Some(WordType::Num) => self.number(lex, sentence, i),
                _ => None,
            };
            sentence[i].microtype = microtype;
        }
    }

    fn number(&self, lex: &Lexicon, sentence: &mut Sentence, pos: usize) -> Option<Microtype> {
        let next = sentence.lower(pos + 1);
        if self.is_day(sentence, pos) && lex.words.months.contains(&next) {
            return Some(Microtype::Date);
        }
        let word = &sentence[pos];
        if word.subtype.is_none() && is_year_form(&word.denormalized) {
            if pos > 0 && lex.words.year_words.contains(&sentence.lower(pos - 1)) {
                sentence[pos].kind = Some(WordType::Year);
            }
            return Some(Microtype::Year);
        }
        if lex.words.time_units.contains(&next) {
            return Some(Microtype::Time);
        }
        None
    }

    /// Month and year follow the day, qualifiers follow the hour
    fn inherit(&self, lex: &Lexicon, sentence: &mut Sentence) {
        for i in 0..sentence.len() {
            let microtype = sentence[i].microtype;
            match microtype {
                Some(Microtype::Date) if lex.words.months.contains(&sentence.lower(i + 1)) => {
                    sentence[i + 1].microtype = Some(Microtype::Date);
                    let year = sentence.get(i + 2).map_or(false, |w| {
                        w.is(WordType::Num) || w.is(WordType::Year) || w.is(WordType::ColYear)
                    });
                    if year && is_year_form(sentence.form(i + 2)) {
                        sentence[i + 2].microtype = Some(Microtype::Date);
                    }
                }
                Some(Microtype::Hour) => {
                    let next = sentence.lower(i + 1);
                    if lex.words.hour_words.contains(&next) || lex.words.day_parts.contains(&next) {
                        sentence[i + 1].microtype = Some(Microtype::Hour);
                    }
                }
                _ => {}
            }
        }
    }
}

impl RewritePass for ClassifyPass {
    fn name(&self) -> &'static str {
        "classifier"
    }

    fn rewrite(&self, lex: &Lexicon, mut sentence: Sentence) -> DenormResult<Sentence> {
        self.classify(lex, &mut sentence);
        self.inherit(lex, &mut sentence);
        Ok(sentence)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dic::LEXICON;
    use crate::pass::hour::HourPass;
    use crate::pass::number::{NumberResolverPass, SpelledNumberPass};
    use crate::sentence::input::Input;

    fn classified(text: &str) -> Sentence {
        let mut sentence = Input::from(text).into_sentence(false).unwrap();
        let passes: Vec<Box<dyn RewritePass>> = vec![
            Box::new(SpelledNumberPass),
            Box::new(NumberResolverPass),
            Box::new(HourPass),
            Box::new(ClassifyPass),
        ];
        for pass in passes {
            sentence = pass.rewrite(&LEXICON, sentence).unwrap();
        }
        sentence
    }

    #[test]
    fn date_spans_day_month_year() {
        let s = classified("petega maja dva tisoč dvaindvajset");
        assert_eq!(s[0].denormalized, "5.");
        assert_eq!(s[0].microtype, Some(Microtype::Date));
        assert_eq!(s[1].microtype, Some(Microtype::Date));
        assert_eq!(s[2].denormalized, "2022");
        assert_eq!(s[2].microtype, Some(Microtype::Date));
    }

    #[test]
    fn year_after_year_word() {
        let s = classified("leta dva tisoč dvaindvajset");
        assert_eq!(s[1].kind, Some(WordType::Year));
        assert_eq!(s[1].microtype, Some(Microtype::Year));
    }

    #[test]
    fn bare_year() {
        let s = classified("tisoč devetsto petinosemdeset");
        assert_eq!(s[0].denormalized, "1985");
        assert_eq!(s[0].kind, Some(WordType::Num));
        assert_eq!(s[0].microtype, Some(Microtype::Year));
    }

    #[test]
    fn hour_qualifier() {
        let s = classified("ob osmih petnajst zvečer");
        assert_eq!(s[1].kind, Some(WordType::Hour));
        assert_eq!(s[2].microtype, Some(Microtype::Hour));
    }

    #[test]
    fn plain_number() {
        let s = classified("pet jabolk");
        assert_eq!(s[0].microtype, None);
    }
}
