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

//! Predicates over the written form of a token

/// Single-character fractions recognized as numbers
pub const FRACTION_GLYPHS: &[&str] = &[
    "¼", "½", "¾", "⅐", "⅑", "⅒", "⅓", "⅔", "⅕", "⅖", "⅗", "⅘", "⅙", "⅚", "⅛", "⅜", "⅝", "⅞", "⅟",
    "↉",
];

/// Non-empty run of ASCII digits
pub fn is_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Digits followed by a single dot, "5."
pub fn is_ordinal(s: &str) -> bool {
    s.strip_suffix('.').map_or(false, is_integer)
}

/// Integer or ordinal
pub fn is_num(s: &str) -> bool {
    is_integer(s) || is_ordinal(s)
}

/// Decimal written with a comma, "20,5"
pub fn is_decimal(s: &str) -> bool {
    match s.split_once(',') {
        Some((int, frac)) => is_integer(int) && is_integer(frac),
        None => false,
    }
}

pub fn is_fraction(s: &str) -> bool {
    FRACTION_GLYPHS.contains(&s)
}

/// Fraction written as "n/m"
pub fn is_slash_fraction(s: &str) -> bool {
    match s.split_once('/') {
        Some((num, den)) => is_integer(num) && is_integer(den),
        None => false,
    }
}

/// A quantity: integer, decimal and optionally a fraction
pub fn is_number(s: &str, with_fractions: bool) -> bool {
    is_integer(s)
        || is_decimal(s)
        || (with_fractions && (is_fraction(s) || is_slash_fraction(s)))
}

/// Numeric value of an integer or an ordinal
pub fn value_of(s: &str) -> Option<u64> {
    let digits = s.strip_suffix('.').unwrap_or(s);
    if !is_integer(digits) {
        return None;
    }
    digits.parse().ok()
}

pub fn with_dot(s: &str) -> String {
    if s.ends_with('.') {
        s.to_owned()
    } else {
        format!("{}.", s)
    }
}

/// Pads minutes and year halves to two digits
pub fn zero_pad(s: &str) -> String {
    format!("{:0>2}", s)
}

/// Digits which would lose a leading zero when spelled out
pub fn has_leading_zero(s: &str) -> bool {
    s.len() > 1 && s.starts_with('0') && s.bytes().all(|b| b.is_ascii_digit() || b == b',')
}

/// Alphabetic word closed with a dot, "dr."
pub fn is_abbreviation(s: &str) -> bool {
    match s.strip_suffix('.') {
        Some(stem) => !stem.is_empty() && stem.chars().all(char::is_alphabetic),
        None => false,
    }
}

/// Formats a quantity with at most two decimals and a decimal comma
pub fn format_decimal(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    trimmed.replace('.', ",")
}
