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
use crate::sentence::{Sentence, Status, WordType};
use crate::util::numeric::is_number;

/// Arithmetic words next to numbers, "pet plus tri" to "5 + 3"
#[derive(Default)]
pub struct SymbolPass;

impl SymbolPass {
    fn number_at(&self, sentence: &Sentence, pos: Option<usize>) -> bool {
        pos.and_then(|p| sentence.get(p))
            .map_or(false, |w| is_number(&w.denormalized, true))
    }
}

impl RewritePass for SymbolPass {
    fn name(&self) -> &'static str {
        "symbols"
    }

    fn rewrite(&self, lex: &Lexicon, mut sentence: Sentence) -> DenormResult<Sentence> {
        let mut i = 0;
        while i < sentence.len() {
            let window = untyped_window(&sentence, i, lex.symbols.max_words());
            let (n, symbol) = match lex.symbols.longest_match(&window) {
                Some((n, symbol)) => (n, symbol.clone()),
                None => {
                    i += 1;
                    continue;
                }
            };
            let number_before = self.number_at(&sentence, i.checked_sub(1));
            let number_after = self.number_at(&sentence, Some(i + n));

            if n > 1 || (number_before && number_after) {
                if !number_before && !number_after {
                    i += 1;
                    continue;
                }
                // binary form keeps the operands apart
                let word = sentence.collapse(i..i + n)?;
                word.denormalized = symbol;
                word.kind = Some(WordType::Symbol);
                word.status = Some(Status::Done);
            } else if number_before {
                let operand = sentence[i - 1].denormalized.clone();
                let word = sentence.collapse(i - 1..i + 1)?;
                word.denormalized = format!("{}{}", operand, symbol);
                word.kind = Some(WordType::Symbol);
                word.subtype = None;
                i -= 1;
            } else if number_after {
                let operand = sentence[i + 1].denormalized.clone();
                let word = sentence.collapse(i..i + 2)?;
                word.denormalized = format!("{}{}", symbol, operand);
                word.kind = Some(WordType::Symbol);
                word.subtype = None;
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
        SymbolPass.rewrite(&LEXICON, sentence).unwrap()
    }

    #[test]
    fn binary() {
        let s = run("pet plus tri je enako osem");
        let forms: Vec<_> = s.iter().map(|w| w.denormalized.as_str()).collect();
        assert_eq!(forms, vec!["5", "+", "3", "=", "8"]);
        assert_eq!(s[1].kind, Some(WordType::Symbol));
        assert_eq!(s[3].kind, Some(WordType::Symbol));
        assert_eq!(s[3].index(), &[3, 4]);
    }

    #[test]
    fn prefix_and_postfix() {
        let s = run("minus pet stopinj");
        assert_eq!(s[0].denormalized, "-5");
        let s = run("ocena pet plus");
        assert_eq!(s[1].denormalized, "5+");
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn plus_minus() {
        let s = run("deset plus minus dva");
        assert_eq!(s[1].denormalized, "±");
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn without_numbers() {
        let s = run("plus je enako minus");
        assert_eq!(s.len(), 4);
        assert_eq!(s[0].denormalized, "plus");
    }
}
