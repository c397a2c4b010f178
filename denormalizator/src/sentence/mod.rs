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

use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut, Range};

use itertools::Itertools;

use crate::prelude::*;

pub mod input;

/// Coarse semantic tag of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordType {
    Num,
    Unit,
    ComboUnit,
    Symbol,
    Year,
    ColYear,
    Hour,
    Title,
    Abbr,
    NumPartToken,
    Mio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subtype {
    Ordinal,
    Decimal,
    Fraction,
}

/// Span tag assigned by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Microtype {
    Date,
    Year,
    Hour,
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Later passes leave the word alone
    Done,
}

/// A token of the sentence, possibly merged from several input tokens
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    /// Original surface, space-joined for merged words
    pub text: String,
    pub denormalized: String,
    /// Form chosen by the styler
    pub final_form: Option<String>,
    index: Vec<usize>,
    pub kind: Option<WordType>,
    pub subtype: Option<Subtype>,
    pub microtype: Option<Microtype>,
    pub status: Option<Status>,
}

impl Word {
    pub fn new<S: Into<String>>(text: S, index: usize) -> Self {
        let text = text.into();
        Self {
            denormalized: text.clone(),
            text,
            final_form: None,
            index: vec![index],
            kind: None,
            subtype: None,
            microtype: None,
            status: None,
        }
    }

    /// Original token indices, in order
    pub fn index(&self) -> &[usize] {
        &self.index
    }

    pub fn first_index(&self) -> usize {
        self.index[0]
    }

    /// Assembled from more than one input token
    pub fn is_compound(&self) -> bool {
        self.index.len() > 1
    }

    /// Lowercase current form, used for all table lookups
    pub fn lower(&self) -> String {
        self.denormalized.to_lowercase()
    }

    pub fn is(&self, kind: WordType) -> bool {
        self.kind == Some(kind)
    }

    pub fn is_done(&self) -> bool {
        self.status == Some(Status::Done)
    }

    /// Emitted form: the styler's choice or the current rewrite
    pub fn output(&self) -> &str {
        self.final_form.as_deref().unwrap_or(&self.denormalized)
    }

    pub fn set_number<S: Into<String>>(&mut self, digits: S) {
        self.denormalized = digits.into();
        self.kind = Some(WordType::Num);
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] -> {}",
            self.text,
            self.index.iter().join("+"),
            self.denormalized
        )
    }
}

/// Ordered words of one input sentence
#[derive(Debug, Clone, Default)]
pub struct Sentence {
    words: Vec<Word>,
    text: String,
    tokenized: bool,
    pauses: Option<Vec<f64>>,
}

impl Sentence {
    /// One word per token. `pauses[i]` is the pause between tokens i-1 and i.
    pub fn new(tokens: Vec<String>, pauses: Option<Vec<f64>>, tokenized: bool) -> Self {
        Self::with_positions(tokens.into_iter().enumerate().collect(), pauses, tokenized)
    }

    /// Like [`Sentence::new`], but each token carries its position in the
    /// caller's token list. Pauses are indexed by those positions.
    pub fn with_positions(
        tokens: Vec<(usize, String)>,
        pauses: Option<Vec<f64>>,
        tokenized: bool,
    ) -> Self {
        let text = tokens.iter().map(|(_, t)| t.as_str()).join(" ");
        let words = tokens.into_iter().map(|(i, t)| Word::new(t, i)).collect();
        Self {
            words,
            text,
            tokenized,
            pauses,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, pos: usize) -> Option<&Word> {
        self.words.get(pos)
    }

    pub fn get_mut(&mut self, pos: usize) -> Option<&mut Word> {
        self.words.get_mut(pos)
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Original joined text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_tokenized(&self) -> bool {
        self.tokenized
    }

    pub fn tokens(&self) -> Vec<&str> {
        self.words.iter().map(|w| w.text.as_str()).collect()
    }

    /// Lowercase current form of the word at `pos`, empty when out of range
    pub fn lower(&self, pos: usize) -> String {
        self.words.get(pos).map(Word::lower).unwrap_or_default()
    }

    /// Current form of the word at `pos`, empty when out of range
    pub fn form(&self, pos: usize) -> &str {
        self.words
            .get(pos)
            .map_or("", |w| w.denormalized.as_str())
    }

    /// Up to `n` words left of `pos`
    pub fn left(&self, pos: usize, n: usize) -> &[Word] {
        let end = pos.min(self.len());
        &self.words[pos.saturating_sub(n).min(end)..end]
    }

    /// Up to `n` words right of `pos`
    pub fn right(&self, pos: usize, n: usize) -> &[Word] {
        let begin = (pos + 1).min(self.len());
        let end = (pos + 1 + n).min(self.len());
        &self.words[begin..end]
    }

    /// Pause between the word at `pos` and its left neighbour
    pub fn pause_before(&self, pos: usize) -> Option<f64> {
        let word = self.words.get(pos)?;
        self.pauses.as_ref()?.get(word.first_index()).copied()
    }

    fn check_positions(&self, positions: &[usize]) -> DenormResult<()> {
        let begin = positions.first().copied().unwrap_or(0);
        let end = positions.last().map_or(0, |p| p + 1);
        let ordered = positions.windows(2).all(|w| w[0] < w[1]);
        if positions.is_empty() || !ordered || end > self.len() {
            return Err(DenormError::InvalidRange(begin, end));
        }
        Ok(())
    }

    /// Joins the listed words into the leftmost one.
    ///
    /// The survivor takes the ordered union of indices and the space-joined
    /// texts. The other words stay in place until `remove_word`.
    pub fn merge(&mut self, positions: &[usize]) -> DenormResult<()> {
        self.check_positions(positions)?;
        let index: Vec<usize> = positions
            .iter()
            .flat_map(|&p| self.words[p].index.iter().copied())
            .collect();
        let text = positions.iter().map(|&p| &self.words[p].text).join(" ");
        let survivor = &mut self.words[positions[0]];
        survivor.index = index;
        survivor.text = text;
        Ok(())
    }

    /// Deletes the words at the given positions, shifting the rest left
    pub fn remove_word(&mut self, positions: &[usize]) -> DenormResult<()> {
        if positions.is_empty() {
            return Ok(());
        }
        self.check_positions(positions)?;
        for &pos in positions.iter().rev() {
            self.words.remove(pos);
        }
        Ok(())
    }

    /// Merges a contiguous span into its first word and removes the rest
    pub fn collapse(&mut self, range: Range<usize>) -> DenormResult<&mut Word> {
        if range.is_empty() || range.end > self.len() {
            return Err(DenormError::InvalidRange(range.start, range.end));
        }
        let positions: Vec<usize> = range.clone().collect();
        self.merge(&positions)?;
        self.remove_word(&positions[1..])?;
        log::trace!("collapsed {}", self.words[range.start]);
        Ok(&mut self.words[range.start])
    }

    /// Splits a merged word after its first `at` original tokens.
    /// The right part becomes a fresh untyped word.
    pub fn split_word(&mut self, pos: usize, at: usize) -> DenormResult<()> {
        let word = self
            .words
            .get_mut(pos)
            .ok_or(DenormError::InvalidRange(pos, pos + 1))?;
        if at == 0 || at >= word.index.len() {
            return Err(DenormError::InvalidRange(at, word.index.len()));
        }
        let rest_index = word.index.split_off(at);
        let parts: Vec<&str> = word.text.split_whitespace().collect();
        let cut = if parts.len() == at + rest_index.len() {
            at
        } else {
            parts.len().saturating_sub(1)
        };
        let right_text = parts[cut..].join(" ");
        word.text = parts[..cut].join(" ");

        let mut right = Word::new(right_text, rest_index[0]);
        right.index = rest_index;
        self.words.insert(pos + 1, right);
        Ok(())
    }

    /// Output string: final forms joined with single spaces
    pub fn glue_back(&self) -> Option<String> {
        if self.words.is_empty() {
            return None;
        }
        Some(self.words.iter().map(Word::output).join(" "))
    }
}

impl Index<usize> for Sentence {
    type Output = Word;

    fn index(&self, pos: usize) -> &Self::Output {
        &self.words[pos]
    }
}

impl IndexMut<usize> for Sentence {
    fn index_mut(&mut self, pos: usize) -> &mut Self::Output {
        &mut self.words[pos]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use claim::{assert_err, assert_matches, assert_ok};

    fn sentence(text: &str) -> Sentence {
        Sentence::new(
            text.split_whitespace().map(str::to_owned).collect(),
            None,
            false,
        )
    }

    #[test]
    fn merge_keeps_leftmost() {
        let mut s = sentence("pet tisoč dvesto tri");
        assert_ok!(s.merge(&[0, 1, 3]));
        assert_eq!(s.len(), 4);
        assert_eq!(s[0].index(), &[0, 1, 3]);
        assert_eq!(s[0].text, "pet tisoč tri");
        assert_ok!(s.remove_word(&[1, 3]));
        assert_eq!(s.tokens(), vec!["pet tisoč tri", "dvesto"]);
    }

    #[test]
    fn invalid_positions() {
        let mut s = sentence("ena dva");
        assert_matches!(s.merge(&[0, 2]), Err(DenormError::InvalidRange(0, 3)));
        assert_err!(s.merge(&[1, 0]));
        assert_err!(s.merge(&[]));
        assert_err!(s.collapse(1..1));
        assert_err!(s.collapse(0..3));
    }

    #[test]
    fn collapse_range() {
        let mut s = sentence("a b c d");
        let w = s.collapse(1..3).unwrap();
        w.denormalized = "x".to_owned();
        assert_eq!(s.len(), 3);
        assert_eq!(s[1].index(), &[1, 2]);
        assert_eq!(s.glue_back().unwrap(), "a x d");
    }

    #[test]
    fn split_merged_word() {
        let mut s = sentence("dvajset celih pet milijonov");
        s.collapse(2..4).unwrap();
        assert_ok!(s.split_word(2, 1));
        assert_eq!(s.len(), 4);
        assert_eq!(s[2].text, "pet");
        assert_eq!(s[3].text, "milijonov");
        assert_eq!(s[3].index(), &[3]);
        assert_err!(s.split_word(3, 1));
    }

    #[test]
    fn windows() {
        let s = sentence("a b c d e");
        let left: Vec<_> = s.left(3, 2).iter().map(|w| w.text.as_str()).collect();
        assert_eq!(left, vec!["b", "c"]);
        assert!(s.left(0, 2).is_empty());
        let right: Vec<_> = s.right(3, 5).iter().map(|w| w.text.as_str()).collect();
        assert_eq!(right, vec!["e"]);
        assert!(s.right(4, 2).is_empty());
    }

    #[test]
    fn pauses_follow_original_index() {
        let tokens = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
        let mut s = Sentence::new(tokens, Some(vec![0.0, 0.3, 0.1]), true);
        assert_eq!(s.pause_before(2), Some(0.1));
        s.collapse(0..2).unwrap();
        assert_eq!(s.pause_before(1), Some(0.1));
        assert_eq!(s.pause_before(5), None);
    }

    #[test]
    fn empty_glue() {
        assert_eq!(sentence("").glue_back(), None);
    }
}
