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

use std::collections::HashMap;

use crate::dic::table::{read_records, PhraseTable, Record};
use crate::prelude::*;

/// Adjective endings of ordinal numerals
const ORDINAL_ENDINGS: &[&str] = &[
    "i", "a", "o", "ega", "emu", "em", "im", "e", "ih", "ima", "imi",
];

/// Spelled numerals and their values
#[derive(Debug, Default)]
pub struct Numerals {
    /// Declined cardinals within 1..99, compounds included
    pub declined: HashMap<String, u64>,
    /// Cardinals outside 1..99: zero and the hundreds
    pub bare: HashMap<String, u64>,
    pub ordinals: HashMap<String, u64>,
    /// Scale words and two-word hundreds, "dvesto tri"
    pub large: PhraseTable<u64>,
    /// Fractional multiples of scales, "pol milijona"
    pub large_phrases: PhraseTable<u64>,
    pub special_years: HashMap<String, u64>,
    /// Forms used as the first part of a compound word, longest first
    combining: Vec<(String, u64)>,
}

struct CardinalRow {
    value: u64,
    stem: Option<String>,
    forms: Vec<String>,
}

impl CardinalRow {
    fn from_record(record: &Record) -> DenormResult<Self> {
        let stem = match record.get(1)? {
            "-" => None,
            s => Some(s.to_owned()),
        };
        Ok(Self {
            value: record.parse(0)?,
            stem,
            forms: record.rest(2)?.to_vec(),
        })
    }

    fn is_tens(&self) -> bool {
        self.value >= 20 && self.value < 100 && self.value % 10 == 0
    }
}

pub struct NumeralData<'a> {
    pub cardinals: &'a str,
    pub ordinals: &'a str,
    pub scales: &'a str,
    pub phrases: &'a str,
    pub special_years: &'a str,
    pub combining: &'a str,
}

impl Numerals {
    pub fn load(data: &NumeralData) -> DenormResult<Self> {
        let mut numerals = Numerals::default();

        let rows = read_records(data.cardinals)?
            .iter()
            .map(CardinalRow::from_record)
            .collect::<DenormResult<Vec<_>>>()?;
        numerals.add_cardinals(&rows);

        let ordinal_stems = read_records(data.ordinals)?
            .iter()
            .map(|r| Ok((r.parse::<u64>(0)?, r.get(1)?.to_owned())))
            .collect::<DenormResult<Vec<_>>>()?;
        numerals.add_ordinals(&rows, &ordinal_stems);

        for record in read_records(data.scales)? {
            let value: u64 = record.parse(0)?;
            for form in record.rest(1)? {
                numerals.large.insert(form, value);
            }
        }
        numerals.add_hundreds_compounds(&rows);

        for record in read_records(data.phrases)? {
            numerals
                .large_phrases
                .insert(record.get(1)?, record.parse(0)?);
        }

        for record in read_records(data.special_years)? {
            numerals
                .special_years
                .insert(record.get(0)?.to_owned(), record.parse(1)?);
        }

        for record in read_records(data.combining)? {
            let value: u64 = record.parse(0)?;
            for form in record.rest(1)? {
                numerals.combining.push((form.clone(), value));
            }
        }
        numerals.add_combining(&rows);

        Ok(numerals)
    }

    fn add_cardinals(&mut self, rows: &[CardinalRow]) {
        for row in rows {
            let table = if (1..100).contains(&row.value) {
                &mut self.declined
            } else {
                &mut self.bare
            };
            for form in &row.forms {
                table.entry(form.clone()).or_insert(row.value);
            }
        }

        // "petindvajset", "petindvajsetih", ...
        for tens in rows.iter().filter(|r| r.is_tens()) {
            for unit in rows.iter().filter(|r| (1..10).contains(&r.value)) {
                if let Some(stem) = &unit.stem {
                    for form in &tens.forms {
                        self.declined
                            .insert(format!("{}in{}", stem, form), tens.value + unit.value);
                    }
                }
            }
        }
    }

    fn add_ordinals(&mut self, rows: &[CardinalRow], stems: &[(u64, String)]) {
        for (value, stem) in stems {
            for ending in ORDINAL_ENDINGS {
                self.ordinals.insert(format!("{}{}", stem, ending), *value);
            }
            if *value <= 10 {
                self.ordinals.insert(format!("{}ič", stem), *value);
            }
        }

        // "enaindvajseti", "dvaindvajsetega", ...
        for (tens, tens_stem) in stems.iter().filter(|(v, _)| *v >= 20 && *v < 100) {
            for unit in rows.iter().filter(|r| (1..10).contains(&r.value)) {
                if let Some(stem) = &unit.stem {
                    for ending in ORDINAL_ENDINGS {
                        self.ordinals.insert(
                            format!("{}in{}{}", stem, tens_stem, ending),
                            tens + unit.value,
                        );
                    }
                }
            }
        }
    }

    fn add_hundreds_compounds(&mut self, rows: &[CardinalRow]) {
        let hundreds: Vec<_> = rows
            .iter()
            .filter(|r| r.value >= 100 && r.value < 1000 && r.value % 100 == 0)
            .collect();
        let declined: Vec<_> = self.declined.iter().map(|(f, v)| (f.clone(), *v)).collect();
        for hundred in hundreds {
            for hundred_form in &hundred.forms {
                for (form, value) in &declined {
                    self.large
                        .insert(&format!("{} {}", hundred_form, form), hundred.value + value);
                }
            }
        }
    }

    fn add_combining(&mut self, rows: &[CardinalRow]) {
        for row in rows.iter().filter(|r| r.value >= 5) {
            if let Some(nominative) = row.forms.first() {
                self.combining.push((nominative.clone(), row.value));
            }
        }
        for tens in rows.iter().filter(|r| r.is_tens()) {
            for unit in rows.iter().filter(|r| (1..10).contains(&r.value)) {
                if let (Some(stem), Some(nominative)) = (&unit.stem, tens.forms.first()) {
                    self.combining
                        .push((format!("{}in{}", stem, nominative), tens.value + unit.value));
                }
            }
        }
        self.combining
            .sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
    }

    /// Value of a declined or bare cardinal
    pub fn cardinal(&self, word: &str) -> Option<u64> {
        self.declined
            .get(word)
            .or_else(|| self.bare.get(word))
            .copied()
    }

    /// Splits a compound word into its leading numeral and the remainder,
    /// "dvajsetodstotni" gives (20, "odstotni")
    pub fn split_combining<'w>(&self, word: &'w str) -> Option<(u64, &'w str)> {
        self.combining.iter().find_map(|(form, value)| {
            word.strip_prefix(form.as_str())
                .filter(|rest| !rest.is_empty())
                .map(|rest| (*value, rest))
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dic::LEXICON;

    fn numerals() -> &'static Numerals {
        &LEXICON.numerals
    }

    #[test]
    fn cardinals() {
        let n = numerals();
        assert_eq!(n.cardinal("pet"), Some(5));
        assert_eq!(n.cardinal("dvaindvajset"), Some(22));
        assert_eq!(n.cardinal("petinštiridesetih"), Some(45));
        assert_eq!(n.cardinal("dvesto"), Some(200));
        assert_eq!(n.cardinal("nič"), Some(0));
        assert_eq!(n.cardinal("miza"), None);
        assert!(!n.declined.contains_key("dvesto"));
    }

    #[test]
    fn ordinals() {
        let n = numerals();
        assert_eq!(n.ordinals.get("peti"), Some(&5));
        assert_eq!(n.ordinals.get("drugega"), Some(&2));
        assert_eq!(n.ordinals.get("enaindvajseti"), Some(&21));
        assert_eq!(n.ordinals.get("prvič"), Some(&1));
        assert_eq!(n.ordinals.get("tisoči"), Some(&1000));
    }

    #[test]
    fn large() {
        let n = numerals();
        assert_eq!(n.large.get("milijonov"), Some(&1_000_000));
        assert_eq!(n.large.get("dvesto tri"), Some(&203));
        assert_eq!(n.large.get("tisoč"), Some(&1000));
        assert_eq!(n.large_phrases.get("pol milijona"), Some(&500_000));
        assert_eq!(n.special_years.get("devetnajststo"), Some(&1900));
    }

    #[test]
    fn combining() {
        let n = numerals();
        assert_eq!(n.split_combining("dvajsetodstotni"), Some((20, "odstotni")));
        assert_eq!(n.split_combining("petkrat"), Some((5, "krat")));
        assert_eq!(n.split_combining("petindvajsetletnica"), Some((25, "letnica")));
        assert_eq!(n.split_combining("pet"), None);
    }
}
