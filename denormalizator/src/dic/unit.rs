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

use crate::dic::table::read_records;
use crate::prelude::*;

/// A unit word resolved to its symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitMatch {
    /// Spelled SI prefix, "kilo"
    pub prefix: Option<String>,
    /// Symbol of the unit without prefix, "g"
    pub base: String,
    /// Full symbol, "kg"
    pub symbol: String,
}

/// Unit words, SI prefixes and genitive forms of units
#[derive(Debug, Default)]
pub struct Units {
    roots: HashMap<String, String>,
    genitives: HashMap<String, String>,
    prefixes: Vec<(String, String)>,
}

impl Units {
    pub fn load(units: &str, prefixes: &str) -> DenormResult<Self> {
        let mut table = Units::default();
        for record in read_records(units)? {
            let symbol = record.get(0)?.to_owned();
            let genitive = record.get(1)?.to_owned();
            table.genitives.entry(symbol.clone()).or_insert(genitive);
            for form in record.rest(2)? {
                table.roots.insert(form.to_lowercase(), symbol.clone());
            }
        }
        for record in read_records(prefixes)? {
            table
                .prefixes
                .push((record.get(0)?.to_owned(), record.get(1)?.to_owned()));
        }
        Ok(table)
    }

    /// Resolves a lowercase word as a unit, optionally with an SI prefix
    pub fn parse(&self, word: &str) -> Option<UnitMatch> {
        if let Some(base) = self.roots.get(word) {
            return Some(UnitMatch {
                prefix: None,
                base: base.clone(),
                symbol: base.clone(),
            });
        }
        self.prefixes.iter().find_map(|(spelled, short)| {
            let rest = word.strip_prefix(spelled.as_str())?;
            let base = self.roots.get(rest)?;
            Some(UnitMatch {
                prefix: Some(spelled.clone()),
                base: base.clone(),
                symbol: format!("{}{}", short, base),
            })
        })
    }

    /// Genitive singular of a spelled unit, "kilograma" for "kilogramov"
    pub fn genitive(&self, unit: &UnitMatch) -> Option<String> {
        let genitive = self.genitives.get(&unit.base)?;
        Some(match &unit.prefix {
            Some(prefix) => format!("{}{}", prefix, genitive),
            None => genitive.clone(),
        })
    }
}

#[cfg(test)]
mod test {
    use crate::dic::LEXICON;

    #[test]
    fn plain_unit() {
        let unit = LEXICON.units.parse("litra").unwrap();
        assert_eq!(unit.symbol, "l");
        assert_eq!(unit.prefix, None);
        assert_eq!(LEXICON.units.parse("odstotkov").unwrap().symbol, "%");
    }

    #[test]
    fn prefixed_unit() {
        let unit = LEXICON.units.parse("kilogramov").unwrap();
        assert_eq!(unit.symbol, "kg");
        assert_eq!(LEXICON.units.genitive(&unit).unwrap(), "kilograma");
        assert_eq!(LEXICON.units.parse("centimetrov").unwrap().symbol, "cm");
    }

    #[test]
    fn not_a_unit() {
        assert_eq!(LEXICON.units.parse("miza"), None);
        assert_eq!(LEXICON.units.parse("kilo"), None);
    }
}
