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
use crate::pass::{untyped_window, RewritePass};
use crate::prelude::*;
use crate::sentence::{Sentence, Word, WordType};
use crate::util::numeric::is_abbreviation;

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn write_final(word: &mut Word, form: String, kind: WordType) {
    word.denormalized = form.clone();
    word.final_form = Some(form);
    word.kind = Some(kind);
}

/// Shortens academic and professional titles next to a name
#[derive(Default)]
pub struct TitlePass;

impl TitlePass {
    fn supports(&self, lex: &Lexicon, sentence: &Sentence, pos: usize) -> bool {
        if pos > 0 && sentence[pos - 1].is(WordType::Title) {
            return true;
        }
        if pos + 1 >= sentence.len() {
            return false;
        }
        let next = sentence.lower(pos + 1);
        lex.titles.contains_key(&next)
            || lex.names.contains(&next)
            || lex.fields.contains(&next)
            || is_abbreviation(&next)
    }
}

impl RewritePass for TitlePass {
    fn name(&self) -> &'static str {
        "titles"
    }

    fn rewrite(&self, lex: &Lexicon, mut sentence: Sentence) -> DenormResult<Sentence> {
        for i in 0..sentence.len() {
            if sentence[i].kind.is_some() {
                continue;
            }
            let short = match lex.titles.get(&sentence.lower(i)) {
                Some(short) => short,
                None => continue,
            };
            if !self.supports(lex, &sentence, i) {
                continue;
            }
            let capital = sentence[i].text.chars().next().map_or(false, char::is_uppercase);
            let form = if capital { capitalize(short) } else { short.clone() };
            write_final(&mut sentence[i], form, WordType::Title);
        }
        Ok(sentence)
    }
}

/// Replaces closed phrases with their abbreviation
#[derive(Default)]
pub struct AbbreviationPass;

impl RewritePass for AbbreviationPass {
    fn name(&self) -> &'static str {
        "abbreviations"
    }

    fn rewrite(&self, lex: &Lexicon, mut sentence: Sentence) -> DenormResult<Sentence> {
        let mut i = 0;
        while i < sentence.len() {
            let window = untyped_window(&sentence, i, lex.abbreviations.max_words());
            let (width, abbr) = match lex.abbreviations.longest_match(&window) {
                Some((width, abbr)) => (width, abbr.clone()),
                None => {
                    i += 1;
                    continue;
                }
            };

            let parts: Vec<&str> = abbr.split_whitespace().collect();
            if parts.len() > 1 && parts.len() == width {
                // "tako imenovani" keeps one abbreviation part per word
                for (offset, part) in parts.into_iter().enumerate() {
                    write_final(&mut sentence[i + offset], part.to_owned(), WordType::Abbr);
                }
                i += width;
            } else {
                let word = sentence.collapse(i..i + width)?;
                write_final(word, abbr, WordType::Abbr);
                i += 1;
            }
        }
        Ok(sentence)
    }
}
