//! Stress detection and placement of the written accent.
//!
//! Positions are char indexes, never byte offsets.

#[cfg(test)]
mod tests;

use std::fmt;

use crate::error::{Error, ErrorKind};

/// Add the acute accent to a vowel.
fn accent(c: char) -> char {
    match c {
        'a' => 'á',
        'e' => 'é',
        'i' => 'í',
        'o' => 'ó',
        'u' | 'ü' => 'ú',
        c => c,
    }
}

/// Remove the acute accent from a vowel.
fn unaccent(c: char) -> char {
    match c {
        'á' => 'a',
        'é' => 'e',
        'í' => 'i',
        'ó' => 'o',
        'ú' => 'u',
        c => c,
    }
}

fn is_accented(c: char) -> bool {
    matches!(c, 'á' | 'é' | 'í' | 'ó' | 'ú')
}

fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ü'
    )
}

/// Open vowels, which never glide.
fn is_open(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'o' | 'á' | 'é' | 'ó')
}

/// Close vowels without an accent, which glide next to another vowel.
fn is_glide(c: char) -> bool {
    matches!(c, 'i' | 'u' | 'ü')
}

/// Test if two adjacent vowels belong to different syllables.
fn is_hiatus(a: char, b: char) -> bool {
    (is_open(a) && is_open(b))
        || (matches!(a, 'í' | 'ú') && is_open(b))
        || (is_open(a) && matches!(b, 'í' | 'ú'))
}

/// Char ranges of every syllable nucleus, in order.
fn nuclei(chars: &[char]) -> Vec<(usize, usize)> {
    let mut output = Vec::new();
    let mut n = 0;

    while n < chars.len() {
        if !is_vowel(chars[n]) {
            n += 1;
            continue;
        }

        let mut start = n;

        while n + 1 < chars.len() && is_vowel(chars[n + 1]) {
            if is_hiatus(chars[n], chars[n + 1]) {
                output.push((start, n + 1));
                start = n + 1;
            }

            n += 1;
        }

        output.push((start, n + 1));
        n += 1;
    }

    output
}

/// The vowel carrying the stress within a nucleus.
fn nucleus_peak(chars: &[char], (start, end): (usize, usize)) -> usize {
    (start..end)
        .find(|&i| is_accented(chars[i]))
        .or_else(|| (start..end).find(|&i| is_open(chars[i])))
        .unwrap_or(end - 1)
}

/// Count the syllables of a word.
pub(crate) fn syllables(word: &str) -> usize {
    let chars = word.chars().collect::<Vec<_>>();
    nuclei(&chars).len()
}

/// Find the index of the stressed vowel.
///
/// An accented vowel wins. Otherwise a trailing unstressed diphthong such as
/// the `io` in `previo` pushes stress onto the syllable before it. Otherwise
/// the peak of the final syllable is stressed, which holds for the
/// monosyllables this is used on.
pub(crate) fn stress_index(word: &str) -> Option<usize> {
    let chars = word.chars().collect::<Vec<_>>();

    if let Some(index) = chars.iter().position(|&c| is_accented(c)) {
        return Some(index);
    }

    let nuclei = nuclei(&chars);
    let (last, rest) = nuclei.split_last()?;

    if last.1 - last.0 >= 2 && is_glide(chars[last.0]) {
        if let Some(before) = rest.last() {
            return Some(nucleus_peak(&chars, *before));
        }
    }

    Some(nucleus_peak(&chars, *last))
}

/// Test if a word stressed at the given index requires a written accent.
pub(crate) fn needs_accent(word: &str, index: usize) -> bool {
    let chars = word.chars().collect::<Vec<_>>();

    let Some(&stressed) = chars.get(index) else {
        return false;
    };

    let plain = unaccent(stressed);

    if matches!(plain, 'i' | 'u') {
        let before = index.checked_sub(1).and_then(|i| chars.get(i));
        let after = chars.get(index + 1);

        if before.map_or(false, |&c| is_open(c)) || after.map_or(false, |&c| is_open(c)) {
            return true;
        }
    }

    let nuclei = nuclei(&chars);

    if nuclei.len() <= 1 {
        return false;
    }

    let Some(position) = nuclei
        .iter()
        .position(|&(start, end)| (start..end).contains(&index))
    else {
        return false;
    };

    let from_end = nuclei.len() - 1 - position;
    let ends_open = matches!(
        chars.last().map(|&c| unaccent(c)),
        Some('a' | 'e' | 'i' | 'o' | 'u' | 'n' | 's')
    );

    match from_end {
        0 => ends_open,
        1 => !ends_open,
        _ => true,
    }
}

/// Move the written accent, removing it at one index and adding it at
/// another.
pub(crate) fn move_accent(word: &str, remove: Option<usize>, add: Option<usize>) -> String {
    word.chars()
        .enumerate()
        .map(|(i, c)| {
            let c = if Some(i) == remove { unaccent(c) } else { c };
            if Some(i) == add {
                accent(c)
            } else {
                c
            }
        })
        .collect()
}

/// Remove every acute accent, keeping diaeresis.
pub(crate) fn strip_accents(word: &str) -> String {
    word.chars().map(unaccent).collect()
}

/// Write the accent on the stressed vowel if and only if the written accent
/// rules require it.
pub(crate) fn restress(word: &str, index: usize) -> String {
    let plain = move_accent(word, Some(index), None);

    if needs_accent(&plain, index) {
        move_accent(&plain, None, Some(index))
    } else {
        plain
    }
}

/// Drop the accent of a monosyllable whose accented vowel directly follows a
/// glide, like `fié` or `guió`.
pub(crate) fn suppress_glide_accent(word: &str) -> String {
    let chars = word.chars().collect::<Vec<_>>();

    let Some(index) = chars.iter().position(|&c| is_accented(c)) else {
        return word.to_owned();
    };

    let after_glide = index
        .checked_sub(1)
        .and_then(|i| chars.get(i))
        .map_or(false, |&c| is_glide(c));

    if after_glide && nuclei(&chars).len() == 1 {
        return move_accent(word, Some(index), None);
    }

    word.to_owned()
}

/// An `unaccented:accented` substring pair applied to the last matching
/// occurrence in a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AccentPair {
    pub(crate) from: Box<str>,
    pub(crate) to: Box<str>,
}

impl AccentPair {
    /// Parse a pair written as `from:to`.
    pub(crate) fn parse(input: &str) -> Result<Self, Error> {
        match input.split_once(':') {
            Some((from, to)) if !from.is_empty() && !to.is_empty() => Ok(Self {
                from: from.into(),
                to: to.into(),
            }),
            _ => Err(Error::new(ErrorKind::AccentPair(input.into()))),
        }
    }

    /// Replace the last occurrence, returning `None` if there is none.
    pub(crate) fn apply(&self, word: &str) -> Option<String> {
        let at = word.rfind(&*self.from)?;
        let mut output = String::with_capacity(word.len() + self.to.len());
        output.push_str(&word[..at]);
        output.push_str(&self.to);
        output.push_str(&word[at + self.from.len()..]);
        Some(output)
    }
}

impl fmt::Display for AccentPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.from, self.to)
    }
}
