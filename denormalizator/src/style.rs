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

//! Choice between digits and words for the final form.
//!
//! Small, round or isolated cardinals read better as words. Numbers with
//! structure around them (dates, decimals, long runs of digits, explicit
//! quantities) stay in digits. [`stays_number`] is the predicate deciding
//! this and is usable on its own.

use crate::dic::Lexicon;
use crate::pass::RewritePass;
use crate::prelude::*;
use crate::sentence::{Sentence, Subtype, WordType};
use crate::util::numeric::{has_leading_zero, is_fraction, is_integer, value_of};

/// Round values which read better as a word
const ROUND: [u64; 3] = [100, 1000, 1_000_000];

const MILLION_ZEROS: &str = "000000";

/// Six-zero forms which are not a count of millions
const NOT_MILLIONS: [&str; 3] = ["1000000", "000000", "0000000"];

const CELSIUS_SYMBOL: &str = "°C";

/// Reach of the "°C" context, in words on each side
const CELSIUS_WINDOW: usize = 7;

/// Reach of the digit run context, in words on each side
const SEQUENCE_WINDOW: usize = 3;

/// Ordinals which change meaning with their form, "2." and "5."
const AMBIGUOUS_ORDINALS: [&str; 2] = ["2.", "5."];

fn is_millions(s: &str) -> bool {
    s.ends_with(MILLION_ZEROS) && !NOT_MILLIONS.contains(&s)
}

/// "5000000" spelled "pet milijonov" is written "5 milijonov"
fn millions_form(digits: &str, text: &str) -> Option<String> {
    let count = digits.strip_suffix(MILLION_ZEROS)?;
    let scale = text.split_whitespace().last()?;
    Some(format!("{} {}", count, scale))
}

fn celsius_near(sentence: &Sentence, pos: usize) -> bool {
    let begin = pos.saturating_sub(CELSIUS_WINDOW);
    let end = (pos + CELSIUS_WINDOW + 1).min(sentence.len());
    sentence.words()[begin..end]
        .iter()
        .any(|w| w.denormalized == CELSIUS_SYMBOL)
}

/// Within a run of three or more integers
fn in_sequence(sentence: &Sentence, pos: usize) -> bool {
    let plain = |p: usize| {
        let form = sentence.form(p);
        is_integer(form) && !is_fraction(form)
    };
    let mut begin = pos;
    while begin > pos.saturating_sub(SEQUENCE_WINDOW) && plain(begin - 1) {
        begin -= 1;
    }
    let mut end = pos;
    while end < pos + SEQUENCE_WINDOW && plain(end + 1) {
        end += 1;
    }
    plain(pos) && end - begin + 1 >= 3
}

/// Decides whether the number at `pos` keeps its digits.
///
/// Only `num` words are considered, every other word returns `false`.
pub fn stays_number(lex: &Lexicon, sentence: &Sentence, pos: usize) -> bool {
    stays(lex, sentence, pos, true)
}

fn stays(lex: &Lexicon, sentence: &Sentence, pos: usize, with_neighbours: bool) -> bool {
    let word = match sentence.get(pos) {
        Some(w) if w.is(WordType::Num) => w,
        _ => return false,
    };
    if word.microtype.is_some() || word.is_compound() {
        return true;
    }
    if matches!(word.subtype, Some(Subtype::Decimal) | Some(Subtype::Fraction)) {
        return true;
    }
    let value = match value_of(&word.denormalized) {
        Some(v) => v,
        None => return true,
    };
    let digits = word.denormalized.trim_end_matches('.');
    if has_leading_zero(digits) || is_millions(&word.denormalized) {
        return true;
    }

    let ordinal = word.subtype == Some(Subtype::Ordinal);
    let round = ROUND.contains(&value);
    if !ordinal && value > 10 && !round {
        return true;
    }
    if ordinal && value <= 10 && word.text.to_lowercase().ends_with("ič") {
        return false;
    }
    if !ordinal && celsius_near(sentence, pos) {
        return true;
    }
    if in_sequence(sentence, pos) {
        return true;
    }
    // "tisoč milijonov"
    if pos > 0 && (value == 1000 || value == 1_000_000) {
        let prev = &sentence[pos - 1];
        if prev.is(WordType::Num) && !is_fraction(&prev.denormalized) {
            return false;
        }
    }
    if ordinal && value > 10 && !round {
        return true;
    }
    let beside_symbol = (pos > 0 && sentence[pos - 1].is(WordType::Symbol))
        || sentence.get(pos + 1).map_or(false, |w| w.is(WordType::Symbol));
    if beside_symbol || lex.words.references.contains(&sentence.lower(pos + 1)) {
        return true;
    }

    with_neighbours
        && (pos.saturating_sub(2)..(pos + 3).min(sentence.len()))
            .filter(|&j| j != pos)
            .any(|j| {
                let other = &sentence[j];
                let matching = match word.subtype {
                    None => matches!(other.subtype, None | Some(Subtype::Decimal)),
                    subtype => other.subtype == subtype,
                };
                other.is(WordType::Num) && matching && stays(lex, sentence, j, false)
            })
}

/// Final form of the word at `pos`
fn styled(lex: &Lexicon, sentence: &Sentence, pos: usize) -> String {
    let word = &sentence[pos];
    match word.kind {
        Some(WordType::Num) => {
            if is_millions(&word.denormalized) {
                if let Some(form) = millions_form(&word.denormalized, &word.text) {
                    return form;
                }
            }
            if stays_number(lex, sentence, pos) {
                word.denormalized.clone()
            } else {
                word.text.clone()
            }
        }
        Some(WordType::Unit) => {
            let after_words = pos > 0
                && sentence[pos - 1].is(WordType::Num)
                && !stays_number(lex, sentence, pos - 1);
            if after_words && !word.is_compound() {
                word.text.clone()
            } else {
                word.denormalized.clone()
            }
        }
        Some(WordType::ComboUnit) => combo_form(lex, &word.denormalized, &word.text)
            .unwrap_or_else(|| word.denormalized.clone()),
        Some(WordType::NumPartToken) => {
            let count = word.denormalized.split('-').next().unwrap_or_default();
            let small = value_of(count).map_or(false, |v| v <= 10);
            if small && !word.is_compound() {
                word.text.clone()
            } else {
                word.denormalized.clone()
            }
        }
        _ => word.denormalized.clone(),
    }
}

/// "2,5 kg" from "dva kilograma in pol" becomes "2,5 kilograma"
fn combo_form(lex: &Lexicon, denormalized: &str, text: &str) -> Option<String> {
    let (quantity, symbol) = denormalized.rsplit_once(' ')?;
    let unit = text
        .split_whitespace()
        .filter_map(|w| lex.units.parse(&w.to_lowercase()))
        .find(|unit| unit.symbol == symbol)?;
    Some(format!("{} {}", quantity, lex.units.genitive(&unit)?))
}

/// Writes the final form of every word
#[derive(Default)]
pub struct StylePass;

impl RewritePass for StylePass {
    fn name(&self) -> &'static str {
        "styler"
    }

    fn rewrite(&self, lex: &Lexicon, mut sentence: Sentence) -> DenormResult<Sentence> {
        let forms: Vec<String> = (0..sentence.len())
            .map(|i| styled(lex, &sentence, i))
            .collect();
        for (word, form) in sentence.words_mut().iter_mut().zip(forms) {
            word.final_form = Some(form);
        }
        Ok(sentence)
    }
}

/// Keeps the rewritten forms, styling only the ambiguous ordinals
#[derive(Default)]
pub struct MinimalStylePass;

impl RewritePass for MinimalStylePass {
    fn name(&self) -> &'static str {
        "minimal styler"
    }

    fn rewrite(&self, lex: &Lexicon, mut sentence: Sentence) -> DenormResult<Sentence> {
        let forms: Vec<String> = (0..sentence.len())
            .map(|i| {
                if AMBIGUOUS_ORDINALS.contains(&sentence.form(i)) {
                    styled(lex, &sentence, i)
                } else {
                    sentence[i].denormalized.clone()
                }
            })
            .collect();
        for (word, form) in sentence.words_mut().iter_mut().zip(forms) {
            word.final_form = Some(form);
        }
        Ok(sentence)
    }
}
