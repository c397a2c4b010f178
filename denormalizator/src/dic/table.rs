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
use std::hash::Hash;
use std::str::FromStr;

use csv::{ReaderBuilder, Trim};

use crate::prelude::*;

/// One non-comment line of a bundled table
#[derive(Debug, Clone)]
pub struct Record {
    pub line: usize,
    fields: Vec<String>,
}

impl Record {
    pub fn get(&self, idx: usize) -> DenormResult<&str> {
        self.fields.get(idx).map(String::as_str).ok_or_else(|| {
            DenormError::InvalidDataFormat(self.line, format!("missing column {}", idx))
        })
    }

    pub fn parse<T: FromStr>(&self, idx: usize) -> DenormResult<T> {
        let raw = self.get(idx)?;
        raw.parse().map_err(|_| {
            DenormError::InvalidDataFormat(self.line, format!("{} is not a valid value", raw))
        })
    }

    /// Fields from `idx` to the end of the record
    pub fn rest(&self, idx: usize) -> DenormResult<&[String]> {
        match self.fields.get(idx..) {
            Some(rest) if !rest.is_empty() => Ok(rest),
            _ => Err(DenormError::InvalidDataFormat(
                self.line,
                format!("expected values from column {}", idx),
            )),
        }
    }
}

/// Reads a comma separated table, skipping `#` comments and empty fields
pub fn read_records(data: &str) -> DenormResult<Vec<Record>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(data.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line() as usize);
        let fields: Vec<String> = record
            .iter()
            .filter(|f| !f.is_empty())
            .map(str::to_owned)
            .collect();
        if fields.is_empty() {
            continue;
        }
        records.push(Record { line, fields });
    }
    Ok(records)
}

/// Table of word sequences, looked up by the longest match
#[derive(Debug, Clone)]
pub struct PhraseTable<V> {
    entries: HashMap<String, V>,
    max_words: usize,
}

impl<V> Default for PhraseTable<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            max_words: 0,
        }
    }
}

impl<V> PhraseTable<V> {
    pub fn insert(&mut self, phrase: &str, value: V) {
        let words: Vec<_> = phrase.split_whitespace().collect();
        self.max_words = self.max_words.max(words.len());
        self.entries.insert(words.join(" ").to_lowercase(), value);
    }

    pub fn get(&self, phrase: &str) -> Option<&V> {
        self.entries.get(phrase)
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.entries.contains_key(phrase)
    }

    /// Word count of the longest phrase
    pub fn max_words(&self) -> usize {
        self.max_words
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest phrase at the start of `words`, with its length in words.
    /// `words` are expected in lowercase.
    pub fn longest_match<S: AsRef<str>>(&self, words: &[S]) -> Option<(usize, &V)> {
        let upper = self.max_words.min(words.len());
        (1..=upper).rev().find_map(|n| {
            let key = words[..n]
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(" ");
            self.entries.get(&key).map(|v| (n, v))
        })
    }
}

/// Reads `key,value...` records where every value maps to the key
pub fn read_inverse<K, F>(data: &str, mut key: F) -> DenormResult<HashMap<String, K>>
where
    K: Clone + Eq + Hash,
    F: FnMut(&Record) -> DenormResult<K>,
{
    let mut table = HashMap::new();
    for record in read_records(data)? {
        let k = key(&record)?;
        for form in record.rest(1)? {
            table.entry(form.to_lowercase()).or_insert_with(|| k.clone());
        }
    }
    Ok(table)
}
