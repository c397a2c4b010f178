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
use crate::util::numeric::is_integer;

/// Longest prefix word of an alphanumeric code
const MAX_PREFIX_CHARS: usize = 6;

/// Frequent letter and number pairs, "covid devetnajst" to "covid-19"
#[derive(Default)]
pub struct AlnumPass;

impl AlnumPass {
    fn compound<'a>(&self, lex: &'a Lexicon, sentence: &Sentence, pos: usize) -> Option<&'a str> {
        let prefix = sentence.get(pos - 1)?;
        let digits = sentence.get(pos)?;
        if prefix.kind.is_some() || prefix.is_done() || !is_integer(&digits.denormalized) {
            return None;
        }
        let lower = prefix.lower();
        if lower.chars().count() > MAX_PREFIX_CHARS || !lower.chars().all(char::is_alphabetic) {
            return None;
        }
        lex.alnum(&lower, &digits.denormalized)
    }
}

impl RewritePass for AlnumPass {
    fn name(&self) -> &'static str {
        "alphanumeric combos"
    }

    fn rewrite(&self, lex: &Lexicon, mut sentence: Sentence) -> DenormResult<Sentence> {
        let mut i = 1;
        while i < sentence.len() {
            if let Some(compound) = self.compound(lex, &sentence, i) {
                let word = sentence.collapse(i - 1..i + 1)?;
                word.denormalized = compound.to_owned();
                word.status = Some(Status::Done);
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
        AlnumPass.rewrite(&LEXICON, sentence).unwrap()
    }

    #[test]
    fn frequent_pair() {
        let s = run("okužba s covid devetnajst");
        assert_eq!(s.len(), 3);
        assert_eq!(s[2].denormalized, "covid-19");
        assert!(s[2].is_done());
    }

    #[test]
    fn rare_pair() {
        let s = run("bombnik b dvainpetdeset");
        assert_eq!(s.len(), 3);
        assert_eq!(s[2].denormalized, "52");
    }
}
