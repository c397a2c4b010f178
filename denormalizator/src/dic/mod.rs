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

//! Read-only lexical tables, loaded once from the bundled resources

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::dic::numerals::{NumeralData, Numerals};
use crate::dic::table::{read_inverse, read_records, PhraseTable};
use crate::dic::unit::Units;
use crate::dic::word_list::{read_word_set, WordLists};
use crate::prelude::*;

pub mod numerals;
pub mod table;
pub mod unit;
pub mod word_list;

/// Alphanumeric pairs seen fewer times than this are not joined
pub const ALNUM_MIN_FREQUENCY: u32 = 10;

macro_rules! resource {
    ($name:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/", $name))
    };
}

lazy_static! {
    pub static ref LEXICON: Lexicon = Lexicon::load().expect("bundled lexicon is malformed");
}

/// All lexical tables used by the rewrite passes
#[derive(Debug, Default)]
pub struct Lexicon {
    pub numerals: Numerals,
    pub units: Units,
    /// Declined title to its short form, "doktorica" to "dr."
    pub titles: HashMap<String, String>,
    pub abbreviations: PhraseTable<String>,
    pub denominators: HashMap<String, u64>,
    /// "pol" and "četrt", fractions only in front of a unit
    pub risky_denominators: HashMap<String, u64>,
    glyphs: HashMap<(u64, u64), String>,
    glyph_values: HashMap<String, (u64, u64)>,
    /// Spoken email characters, "afna" to "@"
    pub email: HashMap<String, String>,
    pub symbols: PhraseTable<String>,
    alnum: HashMap<(String, String), (String, u32)>,
    pub names: HashSet<String>,
    pub fields: HashSet<String>,
    pub words: WordLists,
}

impl Lexicon {
    pub fn load() -> DenormResult<Self> {
        let numerals = Numerals::load(&NumeralData {
            cardinals: resource!("numerals/cardinals.csv"),
            ordinals: resource!("numerals/ordinals.csv"),
            scales: resource!("numerals/scales.csv"),
            phrases: resource!("numerals/phrases.csv"),
            special_years: resource!("numerals/special_years.csv"),
            combining: resource!("numerals/combining.csv"),
        })
        .map_err(|e| e.with_context("numerals"))?;

        let mut lexicon = Lexicon {
            numerals,
            units: Units::load(resource!("units.csv"), resource!("prefixes.csv"))
                .map_err(|e| e.with_context("units"))?,
            titles: read_inverse(resource!("titles.csv"), |r| Ok(r.get(0)?.to_owned()))?,
            email: read_inverse(resource!("email.csv"), |r| Ok(r.get(0)?.to_owned()))?,
            names: read_word_set(resource!("names.csv"))?,
            fields: read_word_set(resource!("fields.csv"))?,
            words: WordLists::load(resource!("context.csv"))
                .map_err(|e| e.with_context("context words"))?,
            ..Default::default()
        };

        for record in read_records(resource!("abbreviations.csv"))? {
            lexicon
                .abbreviations
                .insert(record.get(1)?, record.get(0)?.to_owned());
        }
        for record in read_records(resource!("symbols.csv"))? {
            lexicon
                .symbols
                .insert(record.get(1)?, record.get(0)?.to_owned());
        }

        for record in read_records(resource!("fractions.csv"))? {
            let table = match record.get(0)? {
                "safe" => &mut lexicon.denominators,
                "risky" => &mut lexicon.risky_denominators,
                other => {
                    return Err(DenormError::InvalidDataFormat(
                        record.line,
                        format!("unknown fraction kind {}", other),
                    ))
                }
            };
            let denominator: u64 = record.parse(1)?;
            for form in record.rest(2)? {
                table.insert(form.to_lowercase(), denominator);
            }
        }

        for record in read_records(resource!("glyphs.csv"))? {
            let key = (record.parse(0)?, record.parse(1)?);
            let glyph = record.get(2)?.to_owned();
            lexicon.glyph_values.insert(glyph.clone(), key);
            lexicon.glyphs.insert(key, glyph);
        }

        for record in read_records(resource!("alnum.csv"))? {
            lexicon.alnum.insert(
                (record.get(0)?.to_lowercase(), record.get(1)?.to_owned()),
                (record.get(2)?.to_owned(), record.parse(3)?),
            );
        }

        Ok(lexicon)
    }

    /// Written fraction: a glyph if one exists, "n/m" otherwise
    pub fn fraction(&self, numerator: u64, denominator: u64) -> String {
        match self.glyphs.get(&(numerator, denominator)) {
            Some(glyph) => glyph.clone(),
            None => format!("{}/{}", numerator, denominator),
        }
    }

    /// Numeric value of a fraction glyph or of "n/m"
    pub fn fraction_value(&self, s: &str) -> Option<f64> {
        let (num, den) = match self.glyph_values.get(s) {
            Some(pair) => *pair,
            None => {
                let (n, d) = s.split_once('/')?;
                (n.parse().ok()?, d.parse().ok()?)
            }
        };
        if den == 0 {
            return None;
        }
        Some(num as f64 / den as f64)
    }

    /// Compound form of a frequent alphanumeric pair, "covid" + "19"
    pub fn alnum(&self, prefix: &str, digits: &str) -> Option<&str> {
        self.alnum
            .get(&(prefix.to_lowercase(), digits.to_owned()))
            .filter(|(_, freq)| *freq >= ALNUM_MIN_FREQUENCY)
            .map(|(compound, _)| compound.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn loads_bundled_tables() {
        let lex = &*LEXICON;
        assert_eq!(lex.titles.get("doktorica").map(String::as_str), Some("dr."));
        assert_eq!(lex.email.get("afna").map(String::as_str), Some("@"));
        assert_eq!(lex.abbreviations.get("in tako dalje").map(String::as_str), Some("itd."));
        assert_eq!(lex.symbols.get("je enako").map(String::as_str), Some("="));
        assert_eq!(lex.denominators.get("tretjina"), Some(&3));
        assert_eq!(lex.risky_denominators.get("pol"), Some(&2));
        assert!(lex.names.contains("janez"));
        assert!(lex.fields.contains("pediatrije"));
        assert!(lex.words.months.contains("maja"));
    }

    #[test]
    fn fractions() {
        let lex = &*LEXICON;
        assert_eq!(lex.fraction(1, 3), "⅓");
        assert_eq!(lex.fraction(2, 7), "2/7");
        assert_eq!(lex.fraction_value("½"), Some(0.5));
        assert_eq!(lex.fraction_value("3/4"), Some(0.75));
        assert_eq!(lex.fraction_value("1/0"), None);
    }

    #[test]
    fn alnum_threshold() {
        let lex = &*LEXICON;
        assert_eq!(lex.alnum("COVID", "19"), Some("covid-19"));
        assert_eq!(lex.alnum("b", "52"), None);
        assert_eq!(lex.alnum("x", "1"), None);
    }
}
