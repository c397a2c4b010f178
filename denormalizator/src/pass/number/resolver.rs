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

//! Joins runs of integers that spell a single magnitude,
//! "pet tisoč dvesto tri" arrives as 5 1000 203 and leaves as 5203

use std::cmp::Ordering;

use crate::dic::Lexicon;
use crate::pass::RewritePass;
use crate::prelude::*;
use crate::sentence::{Sentence, WordType};
use crate::util::numeric::{is_integer, value_of};

/// Scale values, largest first
const SCALES: [u64; 3] = [1_000_000_000, 1_000_000, 1000];

fn is_scale(v: u64) -> bool {
    SCALES.contains(&v)
}

/// Can multiply a scale or follow it
fn is_small(v: u64) -> bool {
    v > 0 && v < 1000
}

/// Partition of a boundary that keeps a token claimed by both neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Decides where a shared token goes.
///
/// `before` is the pause between the token and its left neighbour, `after`
/// the pause between the token and its right neighbour. The shorter pause
/// binds tighter. Equal or missing pauses keep the token on the left.
pub fn shared_token_side(before: Option<f64>, after: Option<f64>) -> Side {
    match (before, after) {
        (Some(b), Some(a)) if b.partial_cmp(&a) == Some(Ordering::Greater) => Side::Right,
        _ => Side::Left,
    }
}

/// Groups of positions (first, last) around scale values.
///
/// A scale claims one small multiplier on its left, a lower scale within the
/// next two positions and one small value after that. Groups fully contained
/// in a larger one are dropped. Overlaps between groups are left in place.
pub fn partition(values: &[u64]) -> Vec<(usize, usize)> {
    let n = values.len();
    let mut groups: Vec<(usize, usize)> = Vec::new();
    for &scale in SCALES.iter() {
        for p in (0..n).filter(|&p| values[p] == scale) {
            let first = if p > 0 && is_small(values[p - 1]) {
                p - 1
            } else {
                p
            };
            let mut last = (p + 1..(p + 3).min(n))
                .find(|&q| is_scale(values[q]) && values[q] < scale)
                .unwrap_or(p);
            if last + 1 < n && is_small(values[last + 1]) {
                last += 1;
            }
            if !groups.iter().any(|&(a, b)| a <= first && last <= b) {
                groups.push((first, last));
            }
        }
    }
    groups.sort_unstable();
    groups
}

/// Removes overlaps between neighbouring groups.
/// `side` receives the first shared position and the last position of the
/// left group.
pub fn settle<F>(mut groups: Vec<(usize, usize)>, side: F) -> Vec<(usize, usize)>
where
    F: Fn(usize, usize) -> Side,
{
    for k in 1..groups.len() {
        let (_, left_end) = groups[k - 1];
        let (right_begin, _) = groups[k];
        if right_begin > left_end {
            continue;
        }
        match side(right_begin, left_end) {
            Side::Left => groups[k].0 = left_end + 1,
            Side::Right => groups[k - 1].1 = right_begin.saturating_sub(1),
        }
    }
    groups.retain(|&(a, b)| a <= b);
    groups
}

/// Place-value sum: a value before a scale multiplies it, anything else adds
pub fn place_value(values: &[u64]) -> Option<u64> {
    let mut total: u64 = 0;
    let mut current: u64 = 0;
    for &v in values {
        if is_scale(v) {
            total = total.checked_add(current.max(1).checked_mul(v)?)?;
            current = 0;
        } else {
            current = current.checked_add(v)?;
        }
    }
    total.checked_add(current)
}

/// Resolves runs of adjacent integers into single numbers
#[derive(Default)]
pub struct NumberResolverPass;

impl NumberResolverPass {
    fn is_plain_integer(&self, sentence: &Sentence, pos: usize) -> bool {
        sentence
            .get(pos)
            .map_or(false, |w| w.is(WordType::Num) && is_integer(&w.denormalized))
    }

    /// Resolves the run starting at `begin`, returns the number of words it
    /// occupies afterwards
    fn resolve_run(&self, sentence: &mut Sentence, begin: usize, end: usize) -> DenormResult<usize> {
        let values: Option<Vec<u64>> = (begin..end)
            .map(|p| value_of(&sentence[p].denormalized))
            .collect();
        let values = match values {
            Some(v) => v,
            None => return Ok(end - begin),
        };

        let groups = settle(partition(&values), |shared, left_end| {
            shared_token_side(
                sentence.pause_before(begin + shared),
                sentence.pause_before(begin + left_end + 1),
            )
        });

        let mut removed = 0;
        for &(first, last) in groups.iter().rev() {
            if first == last {
                continue;
            }
            let total = match place_value(&values[first..=last]) {
                Some(total) => total,
                None => continue,
            };
            sentence
                .collapse(begin + first..begin + last + 1)?
                .set_number(total.to_string());
            removed += last - first;
        }
        Ok(end - begin - removed)
    }
}

impl RewritePass for NumberResolverPass {
    fn name(&self) -> &'static str {
        "number resolver"
    }

    fn rewrite(&self, _lex: &Lexicon, mut sentence: Sentence) -> DenormResult<Sentence> {
        let mut i = 0;
        while i < sentence.len() {
            let mut end = i;
            while self.is_plain_integer(&sentence, end) {
                end += 1;
            }
            if end - i >= 2 {
                i += self.resolve_run(&mut sentence, i, end)?;
            } else {
                i = end.max(i + 1);
            }
        }
        Ok(sentence)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn partitions_around_scales() {
        assert_eq!(partition(&[5, 1000, 203]), vec![(0, 2)]);
        assert_eq!(partition(&[2, 1_000_000, 500, 1000]), vec![(0, 3)]);
        assert_eq!(partition(&[7, 8]), vec![]);
        assert_eq!(partition(&[5, 1000, 3, 1_000_000]), vec![(0, 2), (2, 3)]);
    }

    #[test]
    fn left_wins_without_pauses() {
        assert_eq!(shared_token_side(None, None), Side::Left);
        assert_eq!(shared_token_side(Some(0.2), None), Side::Left);
        assert_eq!(shared_token_side(Some(0.2), Some(0.2)), Side::Left);
    }

    #[test]
    fn shorter_pause_wins() {
        assert_eq!(shared_token_side(Some(0.5), Some(0.1)), Side::Right);
        assert_eq!(shared_token_side(Some(0.1), Some(0.5)), Side::Left);
    }

    #[test]
    fn settle_overlap() {
        let groups = vec![(0, 2), (2, 3)];
        assert_eq!(settle(groups.clone(), |_, _| Side::Left), vec![(0, 2), (3, 3)]);
        assert_eq!(settle(groups, |_, _| Side::Right), vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn place_values() {
        assert_eq!(place_value(&[5, 1000, 203]), Some(5203));
        assert_eq!(place_value(&[2, 1_000_000, 500, 1000]), Some(2_500_000));
        assert_eq!(place_value(&[1000, 5]), Some(1005));
        assert_eq!(place_value(&[u64::MAX, 1_000_000]), None);
    }
}
