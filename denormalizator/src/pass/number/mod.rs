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

//! Assembly of spelled-out numbers

use crate::dic::table::PhraseTable;
use crate::dic::Lexicon;
use crate::pass::{untyped_window, RewritePass};
use crate::prelude::*;
use crate::sentence::{Sentence, Subtype, Word, WordType};
use crate::util::numeric::{is_decimal, is_integer, is_ordinal, value_of, with_dot, zero_pad};

mod decimal;
mod resolver;
#[cfg(test)]
mod test;

pub use self::decimal::DecimalPass;
pub use self::resolver::{shared_token_side, NumberResolverPass, Side};

/// Replaces numeral words with digits: special years, scale phrases,
/// scale words and single cardinals or ordinals
#[derive(Default)]
pub struct SpelledNumberPass;

impl SpelledNumberPass {
    fn special_years(&self, lex: &Lexicon, sentence: &mut Sentence) -> DenormResult<()> {
        let mut i = 0;
        while i < sentence.len() {
            if sentence[i].kind.is_none() {
                if let Some(&century) = lex.numerals.special_years.get(&sentence.lower(i)) {
                    match lex.numerals.declined.get(&sentence.lower(i + 1)) {
                        Some(&rest) => {
                            let word = sentence.collapse(i..i + 2)?;
                            word.denormalized = (century + rest).to_string();
                            word.kind = Some(WordType::Year);
                        }
                        None => {
                            sentence[i].denormalized = century.to_string();
                            sentence[i].kind = Some(WordType::Year);
                        }
                    }
                }
            }
            i += 1;
        }
        Ok(())
    }

    fn phrases(&self, table: &PhraseTable<u64>, sentence: &mut Sentence) -> DenormResult<()> {
        let mut i = 0;
        while i < sentence.len() {
            let window = untyped_window(sentence, i, table.max_words());
            if let Some((n, &value)) = table.longest_match(&window) {
                sentence.collapse(i..i + n)?.set_number(value.to_string());
            }
            i += 1;
        }
        Ok(())
    }

    fn single_words(&self, lex: &Lexicon, sentence: &mut Sentence) {
        let numerals = &lex.numerals;
        for i in 0..sentence.len() {
            if sentence[i].kind.is_some() || sentence[i].is_done() {
                continue;
            }
            let lower = sentence.lower(i);
            if let Some(&value) = numerals.declined.get(&lower) {
                let before_time = sentence
                    .right(i, 3)
                    .iter()
                    .any(|w| lex.words.is_time_context(&w.lower()));
                if before_time && !(1..=4).contains(&value) {
                    set_ordinal(sentence, i, value);
                } else {
                    sentence[i].set_number(value.to_string());
                }
            } else if let Some(&value) = numerals.ordinals.get(&lower) {
                set_ordinal(sentence, i, value);
            } else if let Some(&value) = numerals.bare.get(&lower) {
                sentence[i].set_number(value.to_string());
            } else if is_integer(&lower) {
                sentence[i].kind = Some(WordType::Num);
            } else if is_decimal(&lower) {
                sentence[i].kind = Some(WordType::Num);
                sentence[i].subtype = Some(Subtype::Decimal);
            } else if is_ordinal(&lower) {
                sentence[i].kind = Some(WordType::Num);
                sentence[i].subtype = Some(Subtype::Ordinal);
            }
        }
    }
}

fn set_ordinal(sentence: &mut Sentence, pos: usize, value: u64) {
    let word = &mut sentence[pos];
    word.set_number(with_dot(&value.to_string()));
    word.subtype = Some(Subtype::Ordinal);
}

impl RewritePass for SpelledNumberPass {
    fn name(&self) -> &'static str {
        "spelled numbers"
    }

    fn rewrite(&self, lex: &Lexicon, mut sentence: Sentence) -> DenormResult<Sentence> {
        self.special_years(lex, &mut sentence)?;
        self.phrases(&lex.numerals.large_phrases, &mut sentence)?;
        self.phrases(&lex.numerals.large, &mut sentence)?;
        self.single_words(lex, &mut sentence);
        Ok(sentence)
    }
}

/// Numerals glued to a word, "dvajsetodstotni" to "20-odstotni"
#[derive(Default)]
pub struct PartTokenPass;

impl RewritePass for PartTokenPass {
    fn name(&self) -> &'static str {
        "numeral part tokens"
    }

    fn rewrite(&self, lex: &Lexicon, mut sentence: Sentence) -> DenormResult<Sentence> {
        for i in 0..sentence.len() {
            if sentence[i].kind.is_some() || sentence[i].is_done() {
                continue;
            }
            let lower = sentence.lower(i);
            if !lower.chars().all(char::is_alphabetic) {
                continue;
            }
            if let Some((value, rest)) = lex.numerals.split_combining(&lower) {
                if lex.words.part_suffixes.iter().any(|s| rest.starts_with(s.as_str())) {
                    let word = &mut sentence[i];
                    word.denormalized = format!("{}-{}", value, rest);
                    word.kind = Some(WordType::NumPartToken);
                }
            }
        }
        Ok(sentence)
    }
}

/// Joins a round number with a following ordinal, "dva tisoč prvi" to "2001."
#[derive(Default)]
pub struct CompoundOrdinalPass;

impl CompoundOrdinalPass {
    /// Value of the round number and ordinal at `pos`, `pos + 1`
    fn combine(&self, sentence: &Sentence, pos: usize) -> Option<u64> {
        let head = &sentence[pos];
        let tail = sentence.get(pos + 1)?;
        if !head.is(WordType::Num) || !is_integer(&head.denormalized) {
            return None;
        }
        if tail.subtype != Some(Subtype::Ordinal) || !is_ordinal(&tail.denormalized) {
            return None;
        }
        let base = value_of(&head.denormalized)?;
        let digits = tail.denormalized.trim_end_matches('.');
        let zeros = head.denormalized.len() - head.denormalized.trim_end_matches('0').len();
        if base < 100 || zeros < digits.len() {
            return None;
        }
        base.checked_add(value_of(digits)?)
    }
}

impl RewritePass for CompoundOrdinalPass {
    fn name(&self) -> &'static str {
        "compound ordinals"
    }

    fn rewrite(&self, _lex: &Lexicon, mut sentence: Sentence) -> DenormResult<Sentence> {
        let mut i = sentence.len();
        while i > 0 {
            i -= 1;
            let total = match self.combine(&sentence, i) {
                Some(total) => total,
                None => continue,
            };
            let base = value_of(&sentence[i].denormalized).unwrap_or(0);
            let multiplier = match i.checked_sub(1).map(|p| &sentence[p]) {
                Some(w) if base == 1000 || base == 1_000_000 => {
                    value_of(&w.denormalized).filter(|m| {
                        is_integer(&w.denormalized) && w.is(WordType::Num) && (2..1000).contains(m)
                    })
                }
                _ => None,
            };
            let (begin, value) = match multiplier {
                Some(m) => match m
                    .checked_mul(base)
                    .and_then(|scaled| scaled.checked_add(total - base))
                {
                    Some(value) => (i - 1, value),
                    None => (i, total),
                },
                None => (i, total),
            };
            let word = sentence.collapse(begin..i + 2)?;
            word.set_number(with_dot(&value.to_string()));
            word.subtype = Some(Subtype::Ordinal);
            i = begin;
        }
        Ok(sentence)
    }
}

/// Years spoken in two halves, "leta dvajset dvaindvajset" to "2022"
#[derive(Default)]
pub struct ColloquialYearPass;

impl ColloquialYearPass {
    /// A year word or a day and month stand right before `pos`
    fn has_year_head(&self, lex: &Lexicon, sentence: &Sentence, pos: usize) -> bool {
        if pos > 0 && lex.words.year_words.contains(&sentence.lower(pos - 1)) {
            return true;
        }
        (pos.saturating_sub(2)..pos).any(|j| {
            j > 0
                && lex.words.months.contains(&sentence.lower(j))
                && value_of(sentence.form(j - 1)).map_or(false, |d| (1..=31).contains(&d))
        })
    }

    fn year(&self, sentence: &Sentence, pos: usize) -> Option<String> {
        let first = sentence.get(pos)?;
        let second = sentence.get(pos + 1)?;
        let plain = |w: &Word| {
            w.is(WordType::Num) && !w.is_compound() && is_integer(&w.denormalized)
        };
        if !plain(first) || !plain(second) {
            return None;
        }
        let (hi, lo) = (value_of(&first.denormalized)?, value_of(&second.denormalized)?);
        match (hi, lo) {
            (2, 1..=49) => Some(format!("20{}", zero_pad(&lo.to_string()))),
            (11..=20, 10..=99) => Some(format!("{}{}", hi, lo)),
            _ => None,
        }
    }
}

impl RewritePass for ColloquialYearPass {
    fn name(&self) -> &'static str {
        "colloquial years"
    }

    fn rewrite(&self, lex: &Lexicon, mut sentence: Sentence) -> DenormResult<Sentence> {
        let mut i = 0;
        while i + 1 < sentence.len() {
            if self.has_year_head(lex, &sentence, i) {
                if let Some(year) = self.year(&sentence, i) {
                    let word = sentence.collapse(i..i + 2)?;
                    word.denormalized = year;
                    word.kind = Some(WordType::ColYear);
                }
            }
            i += 1;
        }
        Ok(sentence)
    }
}

/// Concatenates runs of single digits, "ena dva tri" to "123"
#[derive(Default)]
pub struct SoloDigitPass;

impl SoloDigitPass {
    fn is_digit(&self, sentence: &Sentence, pos: usize) -> bool {
        sentence.get(pos).map_or(false, |w| {
            w.is(WordType::Num) && w.denormalized.len() == 1 && is_integer(&w.denormalized)
        })
    }
}

impl RewritePass for SoloDigitPass {
    fn name(&self) -> &'static str {
        "solo digits"
    }

    fn rewrite(&self, _lex: &Lexicon, mut sentence: Sentence) -> DenormResult<Sentence> {
        let mut i = 0;
        while i < sentence.len() {
            let mut end = i;
            while self.is_digit(&sentence, end) {
                end += 1;
            }
            if end - i >= 2 {
                let digits: String = sentence.words()[i..end]
                    .iter()
                    .map(|w| w.denormalized.as_str())
                    .collect();
                sentence.collapse(i..end)?.set_number(digits);
            }
            i += 1;
        }
        Ok(sentence)
    }
}
