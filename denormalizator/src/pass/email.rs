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
use crate::pass::RewritePass;
use crate::prelude::*;
use crate::sentence::{Sentence, Status};

const AT: &str = "afna";
const DOT: &str = "pika";

/// Farthest a domain may reach right of "afna", in words
const MAX_DOMAIN_WORDS: usize = 8;

/// Spoken addresses, "janez pika novak afna gmail pika com"
#[derive(Default)]
pub struct EmailPass;

impl EmailPass {
    fn is_special(&self, lex: &Lexicon, sentence: &Sentence, pos: usize) -> bool {
        let lower = sentence.lower(pos);
        lower != AT && lex.email.contains_key(&lower)
    }

    fn mapped(&self, lex: &Lexicon, sentence: &Sentence, pos: usize) -> String {
        let word = &sentence[pos];
        lex.email
            .get(&word.lower())
            .cloned()
            .unwrap_or_else(|| word.denormalized.clone())
    }

    /// First word and text of the local part. It alternates words and
    /// separators and never starts with a separator. A separator spoken
    /// right before "afna" goes between the two words in front of it.
    fn local_part(&self, lex: &Lexicon, sentence: &Sentence, at: usize) -> Option<(usize, String)> {
        let trailing = at > 0 && self.is_special(lex, sentence, at - 1);
        let end = if trailing { at - 1 } else { at };
        if end == 0 || self.is_special(lex, sentence, end - 1) {
            return None;
        }
        let mut start = end - 1;
        while start >= 2
            && self.is_special(lex, sentence, start - 1)
            && !self.is_special(lex, sentence, start - 2)
        {
            start -= 2;
        }
        let mut local: String = (start..end)
            .map(|p| self.mapped(lex, sentence, p))
            .collect();
        if trailing && start + 1 == end && start > 0 && !self.is_special(lex, sentence, start - 1)
        {
            let separator = self.mapped(lex, sentence, at - 1);
            local = format!("{}{}{}", sentence[start - 1].denormalized, separator, local);
            start -= 1;
        }
        Some((start, local))
    }

    /// Position of the suffix closing the domain
    fn window_end(&self, lex: &Lexicon, sentence: &Sentence, at: usize) -> Option<usize> {
        let limit = (at + MAX_DOMAIN_WORDS).min(sentence.len());
        (at + 2..limit).find_map(|p| {
            let closes = sentence.lower(p) == DOT
                && lex.words.mail_suffixes.contains(&sentence.lower(p + 1));
            if closes {
                Some(p + 1)
            } else {
                None
            }
        })
    }
}

impl RewritePass for EmailPass {
    fn name(&self) -> &'static str {
        "emails"
    }

    fn rewrite(&self, lex: &Lexicon, mut sentence: Sentence) -> DenormResult<Sentence> {
        let mut i = 1;
        while i < sentence.len() {
            if sentence.lower(i) != AT {
                i += 1;
                continue;
            }
            let end = match self.window_end(lex, &sentence, i) {
                Some(end) => end,
                None => {
                    i += 1;
                    continue;
                }
            };
            let (start, local) = match self.local_part(lex, &sentence, i) {
                Some(local) => local,
                None => {
                    i += 1;
                    continue;
                }
            };
            let domain: String = (i + 1..=end)
                .map(|p| self.mapped(lex, &sentence, p))
                .collect();
            let address = format!("{}@{}", local, domain);
            let word = sentence.collapse(start..end + 1)?;
            word.denormalized = address;
            word.kind = None;
            word.subtype = None;
            word.status = Some(Status::Done);
            i = start + 1;
        }
        Ok(sentence)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dic::LEXICON;
    use crate::sentence::input::Input;

    fn run(text: &str) -> Sentence {
        let sentence = Input::from(text).into_sentence(false).unwrap();
        EmailPass.rewrite(&LEXICON, sentence).unwrap()
    }

    #[test]
    fn full_address() {
        let s = run("piši na janez pika novak afna gmail pika com hvala");
        assert_eq!(s.tokens().len(), 4);
        assert_eq!(s[2].denormalized, "janez.novak@gmail.com");
        assert!(s[2].is_done());
        assert_eq!(s[2].index(), &[2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn special_characters() {
        let s = run("ana podčrtaj kos afna arnes pika si");
        assert_eq!(s[0].denormalized, "ana_kos@arnes.si");
    }

    #[test]
    fn separator_before_at_sign() {
        let s = run("janez novak pika afna gmail pika com");
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].denormalized, "janez.novak@gmail.com");
        assert_eq!(s[0].index(), &[0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn local_part_never_starts_with_separator() {
        let s = run("pika afna gmail pika com");
        assert_eq!(s.len(), 5);
        let s = run("pika ana afna gmail pika com");
        assert_eq!(s[0].denormalized, "pika");
        assert_eq!(s[1].denormalized, "ana@gmail.com");
    }

    #[test]
    fn no_suffix() {
        let s = run("janez afna gmail");
        assert_eq!(s.len(), 3);
    }
}
