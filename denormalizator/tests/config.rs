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

extern crate denormalizator;
use claim::{assert_err, assert_matches, assert_ok};
use denormalizator::config::{ConfigError, Features};
use denormalizator::prelude::*;
use serde_json::json;

fn string(text: &str, config: serde_json::Value) -> String {
    denormalize(text, &config)
        .expect("Failed to denormalize")
        .denormalized_string
        .unwrap_or_default()
}

#[test]
fn unknown_preset() {
    let result = denormalize("pet", &json!("scientific"));
    assert_matches!(
        result,
        Err(DenormError::ConfigError(ConfigError::UnknownPreset(_)))
    );
}

#[test]
fn preset_names_parse() {
    assert_ok!("technical".parse::<Config>());
    assert_err!("Default".parse::<Config>());
}

#[test]
fn invalid_config_type() {
    assert_matches!(
        denormalize("pet", &json!(5)),
        Err(DenormError::ConfigError(ConfigError::InvalidType(_)))
    );
    assert_matches!(
        denormalize("pet", &json!(["default"])),
        Err(DenormError::ConfigError(ConfigError::InvalidType(_)))
    );
}

#[test]
fn unknown_flag() {
    assert_matches!(
        denormalize("pet", &json!({"include_everything": true})),
        Err(DenormError::ConfigError(ConfigError::SerdeError(_)))
    );
    assert_matches!(
        denormalize("pet", &json!({"include_units": "yes"})),
        Err(DenormError::ConfigError(ConfigError::SerdeError(_)))
    );
}

#[test]
fn null_is_default() {
    assert_ok!(denormalize("pet", &serde_json::Value::Null));
    assert_eq!(
        string("petnajst kilogramov", serde_json::Value::Null),
        string("petnajst kilogramov", json!("default"))
    );
}

#[test]
fn override_flags() {
    assert_eq!("15 kg", string("petnajst kilogramov", json!({})));
    assert_eq!(
        "15 kilogramov",
        string("petnajst kilogramov", json!({"include_units": false}))
    );
    assert_eq!(
        "petnajst kilogramov",
        string("petnajst kilogramov", json!({"include_numbers": false}))
    );
}

#[test]
fn technical_preset() {
    let config = Config::preset("technical").unwrap();
    assert!(config.is_enabled(Features::INCLUDE_NUMBERS_PART_TOKEN));
    assert!(!config.is_enabled(Features::INCLUDE_STYLISTIC));
    assert_eq!(
        "20-odstotni popust",
        string("dvajsetodstotni popust", json!("technical"))
    );
    assert_eq!("imam 5 jabolk", string("imam pet jabolk", json!("technical")));
}

#[test]
fn everyday_preset() {
    assert_eq!(
        "15 kilogramov",
        string("petnajst kilogramov", json!("everyday"))
    );
}

#[test]
fn whitespace_tokenization() {
    let config = json!({"proper_tokenization": true});
    let result = denormalize("pet tisoč, dvesto", &config).unwrap();
    assert_eq!("tisoč,", result.denormalized_content[1].text);

    let result = denormalize("pet tisoč, dvesto", &json!({})).unwrap();
    assert_eq!("5000", result.denormalized_content[0].text);
    assert_eq!(vec![0, 1], result.denormalized_content[0].index);
}
