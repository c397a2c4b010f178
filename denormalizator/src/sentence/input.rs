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

use fancy_regex::Regex;
use lazy_static::lazy_static;
use unicode_normalization::UnicodeNormalization;

use crate::prelude::*;
use crate::sentence::Sentence;

lazy_static! {
    /// Words keep inner punctuation ("20,5", "janez.novak", "km/h"),
    /// any other non-space character is a token of its own
    static ref TOKEN: Regex = Regex::new(r"\w+(?:[.,@_'’/-]\w+)*|[^\w\s]").unwrap();
}

/// Text handed to the denormalizer
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Running text, tokenized internally
    Text(String),
    /// Already tokenized text with optional per-token pauses
    Tokens {
        tokens: Vec<String>,
        pauses: Option<Vec<f64>>,
    },
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_owned())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<Vec<String>> for Input {
    fn from(tokens: Vec<String>) -> Self {
        Input::Tokens {
            tokens,
            pauses: None,
        }
    }
}

impl Input {
    /// Builds the sentence, splitting plain text on whitespace when
    /// `whitespace_only` is set and on word boundaries otherwise
    pub fn into_sentence(self, whitespace_only: bool) -> DenormResult<Sentence> {
        match self {
            Input::Text(text) => {
                let text: String = text.nfc().collect();
                let tokens = if whitespace_only {
                    text.split_whitespace().map(str::to_owned).collect()
                } else {
                    split_words(&text)?
                };
                Ok(Sentence::new(tokens, None, false))
            }
            Input::Tokens { tokens, pauses } => {
                let pauses = match pauses {
                    Some(p) if p.len() != tokens.len() => {
                        log::warn!(
                            "ignoring {} pause values given for {} tokens",
                            p.len(),
                            tokens.len()
                        );
                        None
                    }
                    other => other,
                };
                Ok(Sentence::with_positions(non_blank(tokens), pauses, true))
            }
        }
    }
}

fn split_words(text: &str) -> DenormResult<Vec<String>> {
    let mut tokens = Vec::new();
    for m in TOKEN.find_iter(text) {
        tokens.push(m?.as_str().to_owned());
    }
    Ok(tokens)
}

/// Trimmed non-blank tokens with their positions in `tokens`
fn non_blank(tokens: Vec<String>) -> Vec<(usize, String)> {
    tokens
        .into_iter()
        .enumerate()
        .filter(|(_, t)| !t.trim().is_empty())
        .map(|(i, t)| (i, t.trim().to_owned()))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn tokens(input: Input, whitespace_only: bool) -> Vec<String> {
        let sentence = input.into_sentence(whitespace_only).unwrap();
        sentence.tokens().into_iter().map(str::to_owned).collect()
    }

    #[test]
    fn splits_punctuation() {
        assert_eq!(
            tokens("Pet, šest in 20,5.".into(), false),
            vec!["Pet", ",", "šest", "in", "20,5", "."]
        );
        assert_eq!(
            tokens("janez.novak@gmail.com je km/h".into(), false),
            vec!["janez.novak@gmail.com", "je", "km/h"]
        );
    }

    #[test]
    fn whitespace_only() {
        assert_eq!(tokens("pet, šest".into(), true), vec!["pet,", "šest"]);
    }

    #[test]
    fn normalizes_to_nfc() {
        let decomposed = "s\u{030C}est";
        assert_eq!(tokens(decomposed.into(), false), vec!["šest"]);
    }

    #[test]
    fn pauses_must_match_tokens() {
        let input = Input::Tokens {
            tokens: vec!["a".into(), "b".into()],
            pauses: Some(vec![0.1]),
        };
        let sentence = input.into_sentence(true).unwrap();
        assert_eq!(sentence.pause_before(1), None);
        assert!(sentence.is_tokenized());
    }

    #[test]
    fn blank_tokens_keep_positions() {
        let input = Input::Tokens {
            tokens: vec!["pet".into(), " ".into(), "jabolk".into()],
            pauses: Some(vec![0.0, 0.5, 0.2]),
        };
        let sentence = input.into_sentence(true).unwrap();
        assert_eq!(sentence.tokens(), vec!["pet", "jabolk"]);
        assert_eq!(sentence[1].index(), &[2]);
        assert_eq!(sentence.pause_before(1), Some(0.2));
    }
}
