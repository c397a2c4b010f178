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

use crate::dic::table::read_records;
use crate::prelude::*;

/// Closed word classes that patterns look for around a token
#[derive(Debug, Default)]
pub struct WordLists {
    pub months: HashSet<String>,
    /// Generic time words, "ura", "stoletje"
    pub time_units: HashSet<String>,
    /// Legal references, "člen", "odstavek"
    pub references: HashSet<String>,
    /// Declensions of "cel" that mark a decimal comma
    pub decimal_markers: HashSet<String>,
    pub year_words: HashSet<String>,
    /// Words left of a time that make it an hour, "ob", "do"
    pub hour_left: HashSet<String>,
    pub hour_approx: HashSet<String>,
    pub hour_right: HashSet<String>,
    pub day_parts: HashSet<String>,
    pub hour_words: HashSet<String>,
    pub minute_words: HashSet<String>,
    pub conjunctions: HashSet<String>,
    pub currency: HashSet<String>,
    pub mail_suffixes: HashSet<String>,
    /// Stems that may follow a numeral inside one word
    pub part_suffixes: Vec<String>,
}

impl WordLists {
    pub fn load(data: &str) -> DenormResult<Self> {
        let mut lists = WordLists::default();
        for record in read_records(data)? {
            let words = record.rest(1)?.iter().map(|w| w.to_lowercase());
            let target = match record.get(0)? {
                "month" => &mut lists.months,
                "time_unit" => &mut lists.time_units,
                "reference" => &mut lists.references,
                "decimal_marker" => &mut lists.decimal_markers,
                "year_word" => &mut lists.year_words,
                "hour_left" => &mut lists.hour_left,
                "hour_approx" => &mut lists.hour_approx,
                "hour_right" => &mut lists.hour_right,
                "day_part" => &mut lists.day_parts,
                "hour_word" => &mut lists.hour_words,
                "minute_word" => &mut lists.minute_words,
                "conjunction" => &mut lists.conjunctions,
                "currency" => &mut lists.currency,
                "mail_suffix" => &mut lists.mail_suffixes,
                "part_suffix" => {
                    lists.part_suffixes.extend(words);
                    continue;
                }
                other => {
                    return Err(DenormError::InvalidDataFormat(
                        record.line,
                        format!("unknown word list {}", other),
                    ))
                }
            };
            target.extend(words);
        }
        Ok(lists)
    }

    /// Month or generic time word
    pub fn is_time_context(&self, word: &str) -> bool {
        self.months.contains(word) || self.time_units.contains(word)
    }
}

/// Reads a list with one word per line
pub fn read_word_set(data: &str) -> DenormResult<HashSet<String>> {
    Ok(read_records(data)?
        .iter()
        .map(|r| r.get(0).map(str::to_lowercase))
        .collect::<DenormResult<_>>()?)
}
