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

use super::*;
use crate::dic::LEXICON;
use crate::sentence::input::Input;

fn numbers(input: Input) -> Sentence {
    let passes: Vec<Box<dyn RewritePass>> = vec![
        Box::new(SpelledNumberPass),
        Box::new(PartTokenPass),
        Box::new(CompoundOrdinalPass),
        Box::new(ColloquialYearPass),
        Box::new(NumberResolverPass),
        Box::new(DecimalPass),
    ];
    let mut sentence = input.into_sentence(false).unwrap();
    for pass in passes {
        sentence = pass.rewrite(&LEXICON, sentence).unwrap();
    }
    sentence
}

fn forms(s: &Sentence) -> Vec<&str> {
    s.iter().map(|w| w.denormalized.as_str()).collect()
}

#[test]
fn place_value_number() {
    let s = numbers("pet tisoč dvesto tri".into());
    assert_eq!(forms(&s), ["5203"]);
    assert_eq!(s[0].index(), &[0, 1, 2, 3]);
    assert_eq!(s[0].kind, Some(WordType::Num));
}

#[test]
fn single_cardinals_and_ordinals() {
    let s = numbers("imam pet jabolk in drugo hruško".into());
    assert_eq!(forms(&s), ["imam", "5", "jabolk", "in", "2.", "hruško"]);
    assert_eq!(s[4].subtype, Some(Subtype::Ordinal));
}

#[test]
fn cardinal_before_month_is_ordinal() {
    let s = numbers("petnajst maja".into());
    assert_eq!(forms(&s), ["15.", "maja"]);
    let s = numbers("dva maja".into());
    assert_eq!(forms(&s), ["2", "maja"]);
}

#[test]
fn existing_digits_are_tagged() {
    let tokens: Vec<String> = ["cena", "12", "ali", "12,5", "na", "3.", "mestu"]
        .iter()
        .map(|t| t.to_string())
        .collect();
    let s = numbers(tokens.into());
    assert_eq!(s[1].kind, Some(WordType::Num));
    assert_eq!(s[3].subtype, Some(Subtype::Decimal));
    assert_eq!(s[5].subtype, Some(Subtype::Ordinal));
}

#[test]
fn compound_ordinal() {
    let s = numbers("dva tisoč prvi".into());
    assert_eq!(forms(&s), ["2001."]);
    assert_eq!(s[0].subtype, Some(Subtype::Ordinal));
}

#[test]
fn compound_ordinal_too_large_is_left_apart() {
    let s = numbers("18446744073709551610 deveti".into());
    assert_eq!(forms(&s), ["18446744073709551610", "9."]);
}

#[test]
fn special_years() {
    let s = numbers("devetnajststo petinosemdeset".into());
    assert_eq!(forms(&s), ["1985"]);
    assert_eq!(s[0].kind, Some(WordType::Year));
    let s = numbers("v devetnajststo".into());
    assert_eq!(forms(&s), ["v", "1900"]);
}

#[test]
fn colloquial_years() {
    let s = numbers("leta dvajset dvaindvajset".into());
    assert_eq!(forms(&s), ["leta", "2022"]);
    assert_eq!(s[1].kind, Some(WordType::ColYear));

    let s = numbers("leta dva pet".into());
    assert_eq!(forms(&s), ["leta", "2005"]);

    let s = numbers("dvajset dvaindvajset".into());
    assert_eq!(forms(&s), ["20", "22"]);
}

#[test]
fn shared_token_goes_left_without_pauses() {
    let s = numbers("pet tisoč tri tisoč".into());
    assert_eq!(forms(&s), ["5003", "1000"]);
}

#[test]
fn shared_token_follows_shorter_pause() {
    let input = Input::Tokens {
        tokens: ["pet", "tisoč", "tri", "tisoč"].iter().map(|t| t.to_string()).collect(),
        pauses: Some(vec![0.0, 0.1, 0.5, 0.1]),
    };
    let s = numbers(input);
    assert_eq!(forms(&s), ["5000", "3000"]);
    assert_eq!(s[1].index(), &[2, 3]);
}

#[test]
fn decimals() {
    let s = numbers("dvajset cela pet".into());
    assert_eq!(forms(&s), ["20,5"]);
    assert_eq!(s[0].subtype, Some(Subtype::Decimal));
}

#[test]
fn decimal_millions() {
    let s = numbers("dve celi pet milijona".into());
    assert_eq!(forms(&s), ["2,5", "milijona"]);
    assert_eq!(s[0].index(), &[0, 1, 2]);
    assert_eq!(s[1].index(), &[3]);
    assert_eq!(s[1].kind, Some(WordType::Mio));
}

#[test]
fn part_tokens() {
    let s = numbers("dvajsetodstotni popust".into());
    assert_eq!(forms(&s), ["20-odstotni", "popust"]);
    assert_eq!(s[0].kind, Some(WordType::NumPartToken));

    let s = numbers("dvajset cela petodstotni".into());
    assert_eq!(forms(&s), ["20,5-odstotni"]);
}

#[test]
fn solo_digits() {
    let s = numbers("ena dva tri".into());
    let s = SoloDigitPass.rewrite(&LEXICON, s).unwrap();
    assert_eq!(forms(&s), ["123"]);
}
