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

use std::collections::HashSet;

use crate::dic::Lexicon;
use crate::pass::RewritePass;
use crate::prelude::*;
use crate::sentence::{Sentence, Subtype, Word, WordType};
use crate::util::numeric::{is_integer, is_num, is_ordinal, value_of, with_dot, zero_pad};

const HALF: &str = "pol";
const HOUR_AT: &str = "uri";

/// Minutes allowed for an approximate time, "okrog osmih zvečer"
const APPROX_MINUTES: [&str; 3] = ["00", "0", "30"];

/// Times of day: "ob osmih petnajst" to "8.15", "ob pol treh" to "2.30"
#[derive(Default)]
pub struct HourPass;

impl HourPass {
    fn hour_value(&self, sentence: &Sentence, pos: usize) -> Option<u64> {
        let word = sentence.get(pos)?;
        if !word.is(WordType::Num) || !is_num(&word.denormalized) {
            return None;
        }
        value_of(&word.denormalized).filter(|h| *h <= 24)
    }

    fn minutes_value(&self, sentence: &Sentence, pos: usize) -> Option<u64> {
        let word = sentence.get(pos)?;
        if !word.is(WordType::Num) || !is_integer(&word.denormalized) {
            return None;
        }
        value_of(&word.denormalized).filter(|m| *m < 60)
    }

    fn any_in(&self, words: &[Word], set: &HashSet<String>) -> bool {
        words.iter().any(|w| set.contains(&w.lower()))
    }

    /// "ob osmih (in) petnajst", optionally "nič pet" as minutes
    fn hour_and_minutes(
        &self,
        lex: &Lexicon,
        sentence: &mut Sentence,
        pos: usize,
    ) -> DenormResult<bool> {
        if self.hour_value(sentence, pos).is_none() {
            return Ok(false);
        }
        let mut minutes_pos = pos + 1;
        if lex.words.conjunctions.contains(&sentence.lower(minutes_pos)) {
            minutes_pos += 1;
        }
        if self.minutes_value(sentence, minutes_pos).is_none() {
            return Ok(false);
        }
        let minutes = sentence[minutes_pos].denormalized.clone();

        let words = &lex.words;
        let left = sentence.left(pos, 2);
        let in_context = self.any_in(left, &words.hour_left)
            || (self.any_in(sentence.left(pos, 1), &words.hour_approx)
                && (self.any_in(left, &words.day_parts)
                    || self.any_in(sentence.right(minutes_pos, 2), &words.day_parts))
                && APPROX_MINUTES.contains(&minutes.as_str()))
            || self.any_in(sentence.right(minutes_pos, 2), &words.hour_right);
        if !in_context {
            return Ok(false);
        }

        let hour_digits = sentence[pos].denormalized.clone();
        let single_digit_follows = sentence.get(minutes_pos + 1).map_or(false, |w| {
            w.is(WordType::Num) && w.denormalized.len() == 1 && is_integer(&w.denormalized)
        });
        let (end, minutes) = if minutes == "0" && single_digit_follows {
            (minutes_pos + 2, format!("0{}", sentence[minutes_pos + 1].denormalized))
        } else {
            (minutes_pos + 1, zero_pad(&minutes))
        };
        let word = sentence.collapse(pos..end)?;
        word.denormalized = format!("{}{}", with_dot(&hour_digits), minutes);
        word.kind = Some(WordType::Hour);
        word.subtype = None;
        Ok(true)
    }

    /// "ob pol treh" to "2.30"
    fn half_hour(&self, lex: &Lexicon, sentence: &mut Sentence, pos: usize) -> DenormResult<bool> {
        if sentence.lower(pos) != HALF {
            return Ok(false);
        }
        let hour = match self.hour_value(sentence, pos + 1) {
            Some(h) if h >= 1 => h,
            _ => return Ok(false),
        };
        let words = &lex.words;
        let left = sentence.left(pos, 2);
        let in_context = self.any_in(left, &words.hour_left)
            || self.any_in(left, &words.hour_approx)
            || self.any_in(sentence.right(pos + 1, 2), &words.hour_words)
            || self.any_in(sentence.right(pos + 1, 2), &words.hour_right);
        if !in_context {
            return Ok(false);
        }
        let word = sentence.collapse(pos..pos + 2)?;
        word.denormalized = format!("{}30", with_dot(&(hour - 1).to_string()));
        word.kind = Some(WordType::Hour);
        word.subtype = None;
        Ok(true)
    }

    /// "ob osmi uri in petnajst minut" to "8.15"
    fn spelled_hour(
        &self,
        lex: &Lexicon,
        sentence: &mut Sentence,
        pos: usize,
    ) -> DenormResult<bool> {
        if pos + 4 >= sentence.len() {
            return Ok(false);
        }
        let ordinal = &sentence[pos];
        if ordinal.subtype != Some(Subtype::Ordinal) || !is_ordinal(&ordinal.denormalized) {
            return Ok(false);
        }
        let text_at = |p: usize| sentence[p].text.to_lowercase();
        if text_at(pos + 1) != HOUR_AT
            || !lex.words.conjunctions.contains(&text_at(pos + 2))
            || !lex.words.minute_words.contains(&text_at(pos + 4))
        {
            return Ok(false);
        }
        if self.minutes_value(sentence, pos + 3).is_none() {
            return Ok(false);
        }
        let minutes = zero_pad(&sentence[pos + 3].denormalized);
        let hour = sentence[pos].denormalized.clone();
        let word = sentence.collapse(pos..pos + 5)?;
        word.denormalized = format!("{}{}", with_dot(&hour), minutes);
        word.kind = Some(WordType::Hour);
        word.subtype = None;
        Ok(true)
    }
}

impl RewritePass for HourPass {
    fn name(&self) -> &'static str {
        "hours"
    }

    fn rewrite(&self, lex: &Lexicon, mut sentence: Sentence) -> DenormResult<Sentence> {
        let mut i = 0;
        while i < sentence.len() {
            // first form that applies wins
            if self.spelled_hour(lex, &mut sentence, i)? {
                log::trace!("spelled hour at {}", i);
            } else if self.half_hour(lex, &mut sentence, i)? {
                log::trace!("half hour at {}", i);
            } else if self.hour_and_minutes(lex, &mut sentence, i)? {
                log::trace!("hour and minutes at {}", i);
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
    use crate::sentence::input::Input;

    fn run(text: &str) -> Sentence {
        let sentence = Input::from(text).into_sentence(false).unwrap();
        let sentence = SpelledNumberPass.rewrite(&LEXICON, sentence).unwrap();
        HourPass.rewrite(&LEXICON, sentence).unwrap()
    }

    #[test]
    fn hour_with_conjunction() {
        let s = run("ob osmih in petnajst");
        assert_eq!(s.len(), 2);
        assert_eq!(s[1].denormalized, "8.15");
        assert_eq!(s[1].kind, Some(WordType::Hour));
        assert_eq!(s[1].index(), &[1, 2, 3]);
    }

    #[test]
    fn padded_minutes() {
        let s = run("do devetih pet");
        assert_eq!(s[1].denormalized, "9.05");
        let s = run("ob desetih nič pet");
        assert_eq!(s[1].denormalized, "10.05");
    }

    #[test]
    fn right_context() {
        let s = run("sedem trideset jutri");
        assert_eq!(s[0].denormalized, "7.30");
    }

    #[test]
    fn approximate_time() {
        let s = run("okrog osmih trideset zvečer");
        assert_eq!(s[1].denormalized, "8.30");
        let s = run("okrog osmih petnajst zvečer");
        assert_eq!(s[1].denormalized, "8");
    }

    #[test]
    fn no_context() {
        let s = run("osem petnajst");
        assert_eq!(s[0].denormalized, "8");
        assert_eq!(s[1].denormalized, "15");
    }

    #[test]
    fn half_past() {
        let s = run("ob pol treh");
        assert_eq!(s[1].denormalized, "2.30");
        assert_eq!(s[1].kind, Some(WordType::Hour));
        let s = run("pol treh");
        assert_eq!(s[0].denormalized, "pol");
    }

    #[test]
    fn spelled_minutes() {
        let s = run("ob osmi uri in petnajst minut");
        assert_eq!(s.len(), 2);
        assert_eq!(s[1].denormalized, "8.15");
    }
}
