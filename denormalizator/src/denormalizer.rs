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

use serde::Serialize;
use serde_json::Value;

use crate::classify::ClassifyPass;
use crate::config::{Config, Features};
use crate::dic::{Lexicon, LEXICON};
use crate::pass::alnum::AlnumPass;
use crate::pass::combo::ComboPass;
use crate::pass::email::EmailPass;
use crate::pass::fraction::FractionPass;
use crate::pass::hour::HourPass;
use crate::pass::number::{
    ColloquialYearPass, CompoundOrdinalPass, DecimalPass, NumberResolverPass, PartTokenPass,
    SoloDigitPass, SpelledNumberPass,
};
use crate::pass::slash::SlashPass;
use crate::pass::symbol::SymbolPass;
use crate::pass::title::{AbbreviationPass, TitlePass};
use crate::pass::unit::UnitPass;
use crate::pass::RewritePass;
use crate::prelude::*;
use crate::sentence::input::Input;
use crate::sentence::Sentence;
use crate::style::{MinimalStylePass, StylePass};

/// One word of the output with the input tokens it covers
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DenormalizedWord {
    pub text: String,
    pub index: Vec<usize>,
}

/// Result of a denormalization
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Denormalized {
    pub denormalized_content: Vec<DenormalizedWord>,
    /// Final forms joined with single spaces, `None` for an empty input
    pub denormalized_string: Option<String>,
}

impl From<&Sentence> for Denormalized {
    fn from(sentence: &Sentence) -> Self {
        let denormalized_content = sentence
            .iter()
            .map(|w| DenormalizedWord {
                text: w.output().to_owned(),
                index: w.index().to_vec(),
            })
            .collect();
        Denormalized {
            denormalized_content,
            denormalized_string: sentence.glue_back(),
        }
    }
}

/// Runs the rewrite passes enabled by a [`Config`] over sentences
pub struct Denormalizer<'a> {
    config: Config,
    lexicon: &'a Lexicon,
    passes: Vec<Box<dyn RewritePass>>,
}

impl Denormalizer<'static> {
    /// Denormalizer over the bundled lexicon
    pub fn new(config: Config) -> Self {
        Self::with_lexicon(config, &LEXICON)
    }
}

impl<'a> Denormalizer<'a> {
    pub fn with_lexicon(config: Config, lexicon: &'a Lexicon) -> Self {
        let passes = build_passes(&config);
        log::debug!("denormalizer with {:?}", config.features());
        Denormalizer {
            config,
            lexicon,
            passes,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Names of the passes in the order they run
    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    /// Builds the sentence and runs every enabled pass over it
    pub fn process<I: Into<Input>>(&self, input: I) -> DenormResult<Sentence> {
        let whitespace_only = self.config.is_enabled(Features::PROPER_TOKENIZATION);
        let mut sentence = input.into().into_sentence(whitespace_only)?;
        if sentence.is_empty() {
            return Ok(sentence);
        }
        for pass in &self.passes {
            sentence = pass.rewrite(self.lexicon, sentence)?;
            log::debug!("{}: {} words", pass.name(), sentence.len());
            log::trace!(
                "after {}: {}",
                pass.name(),
                sentence.glue_back().unwrap_or_default()
            );
        }
        Ok(sentence)
    }

    pub fn denormalize<I: Into<Input>>(&self, input: I) -> DenormResult<Denormalized> {
        let sentence = self.process(input)?;
        Ok(Denormalized::from(&sentence))
    }
}

/// Pass order matters: every pass sees the words collapsed by the earlier ones
fn build_passes(config: &Config) -> Vec<Box<dyn RewritePass>> {
    let on = |flag| config.is_enabled(flag);
    let numbers = on(Features::INCLUDE_NUMBERS);
    let mut passes: Vec<Box<dyn RewritePass>> = Vec::new();

    if numbers {
        passes.push(Box::new(SpelledNumberPass));
        if on(Features::INCLUDE_NUMBERS_PART_TOKEN) {
            passes.push(Box::new(PartTokenPass));
        }
        passes.push(Box::new(CompoundOrdinalPass));
        if on(Features::COL_YEARS) {
            passes.push(Box::new(ColloquialYearPass));
        }
        passes.push(Box::new(NumberResolverPass));
        passes.push(Box::new(DecimalPass));
    }
    if on(Features::INCLUDE_FRACTIONS) && on(Features::INCLUDE_STYLISTIC) {
        passes.push(Box::new(FractionPass));
    }
    passes.push(Box::new(UnitPass::new(
        on(Features::INCLUDE_UNITS),
        on(Features::INCLUDE_FRACTIONS),
    )));
    if numbers {
        passes.push(Box::new(HourPass));
        if on(Features::PUNCT_IS_INCLUDED) {
            passes.push(Box::new(SoloDigitPass));
        }
    }
    if on(Features::INCLUDE_SLASH) {
        passes.push(Box::new(SlashPass));
    }
    if on(Features::INCLUDE_EMAIL) {
        passes.push(Box::new(EmailPass));
    }
    if on(Features::INCLUDE_SYMBOLS) {
        passes.push(Box::new(SymbolPass));
    }
    if on(Features::INCLUDE_ALNUM) {
        passes.push(Box::new(AlnumPass));
    }
    if on(Features::MERGE_SEP_NUMBERS) {
        passes.push(Box::new(ComboPass));
    }

    passes.push(Box::new(ClassifyPass));
    if on(Features::INCLUDE_STYLISTIC) {
        passes.push(Box::new(StylePass));
    } else {
        passes.push(Box::new(MinimalStylePass));
    }
    if on(Features::INCLUDE_TITLE) {
        passes.push(Box::new(TitlePass));
    }
    if on(Features::INCLUDE_ABBR) {
        passes.push(Box::new(AbbreviationPass));
    }
    passes
}

/// Denormalizes `input` with a config given as a preset name, a flag
/// mapping or null for the default preset
pub fn denormalize<I: Into<Input>>(input: I, config: &Value) -> DenormResult<Denormalized> {
    let config = Config::from_value(config)?;
    Denormalizer::new(config).denormalize(input)
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_input_skips_passes() {
        let result = denormalize("", &Value::Null).unwrap();
        assert!(result.denormalized_content.is_empty());
        assert_eq!(result.denormalized_string, None);
    }

    #[test]
    fn pass_order_follows_flags() {
        let everything = Denormalizer::new(Config::default());
        let names = everything.pass_names();
        assert_eq!(names.first(), Some(&"spelled numbers"));
        assert_eq!(names.last(), Some(&"abbreviations"));
        assert!(names.contains(&"styler"));

        let plain = Denormalizer::new(Config::default().with(Features::INCLUDE_NUMBERS, false));
        let names = plain.pass_names();
        assert!(!names.contains(&"spelled numbers"));
        assert!(!names.contains(&"hours"));
        assert!(names.contains(&"units"));
    }

    #[test]
    fn minimal_styling_without_stylistic() {
        let config = json!({"include_stylistic": false});
        let result = denormalize("imam pet jabolk", &config).unwrap();
        assert_eq!(result.denormalized_string.as_deref(), Some("imam 5 jabolk"));
    }

    #[test]
    fn serializes_output() {
        let result = denormalize("pet tisoč dvesto tri", &json!("default")).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "denormalized_content": [{"text": "5203", "index": [0, 1, 2, 3]}],
                "denormalized_string": "5203"
            })
        );
    }
}
