//! Stress-conditioned vowel alternation, such as `contar` → `cuento`.


use fixed_map::Set;

use crate::error::{Error, ErrorKind};
use crate::grammar::{Person, TenseMood, VerbFamily};
use crate::rules::{Pattern, PatternId, Rules};

/// Alternation settings of a verb.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Alternations<'a> {
    pub(crate) patterns: &'a [PatternId],
    /// Tense-moods receiving the alternation. All when `None`.
    pub(crate) tenses: Option<&'a Set<TenseMood>>,
    /// Pattern whose gerund replacement overrides the others.
    pub(crate) gerund: Option<PatternId>,
}

impl Alternations<'_> {
    /// No alternation at all.
    pub(crate) const NONE: Alternations<'static> = Alternations {
        patterns: &[],
        tenses: None,
        gerund: None,
    };
}

/// Replace the last occurrence of `from` in the stem.
fn replace_last(pattern: &Pattern, stem: &str, to: &str) -> Result<String, Error> {
    let Some(at) = stem.rfind(&*pattern.from) else {
        return Err(Error::new(ErrorKind::MissingVowel {
            stem: stem.into(),
            from: pattern.from.clone(),
            pattern: pattern.name.clone(),
        }));
    };

    let mut output = String::with_capacity(stem.len() + to.len());
    output.push_str(&stem[..at]);
    output.push_str(to);
    output.push_str(&stem[at + pattern.from.len()..]);
    Ok(output)
}

/// Alternate a regular stem for the given cell.
///
/// Returns `None` when no pattern covers the cell, which is the normal case
/// for unstressed stems.
pub(crate) fn apply(
    rules: &Rules,
    alternations: Alternations<'_>,
    stem: &str,
    family: VerbFamily,
    tense: TenseMood,
    person: Person,
) -> Result<Option<String>, Error> {
    if matches!(alternations.tenses, Some(tenses) if !tenses.contains(tense)) {
        return Ok(None);
    }

    for &id in alternations.patterns {
        let pattern = rules.pattern(id);

        if pattern.covers(family, tense, person) {
            tracing::trace!(pattern = &*pattern.name, stem, ?tense, ?person, "alternating");
            return replace_last(pattern, stem, &pattern.to).map(Some);
        }
    }

    Ok(None)
}

/// Alternate a regular stem for the gerund.
///
/// An explicit gerund pattern applies regardless of family. Otherwise the
/// first pattern with a gerund replacement for this family applies.
pub(crate) fn gerund(
    rules: &Rules,
    alternations: Alternations<'_>,
    stem: &str,
    family: VerbFamily,
) -> Result<Option<String>, Error> {
    if let Some(id) = alternations.gerund {
        let pattern = rules.pattern(id);
        let to = pattern.gerund.as_deref().unwrap_or(&pattern.to);
        return replace_last(pattern, stem, to).map(Some);
    }

    for &id in alternations.patterns {
        let pattern = rules.pattern(id);

        if matches!(pattern.only_for, Some(only) if only != family) {
            continue;
        }

        if let Some(to) = &pattern.gerund {
            return replace_last(pattern, stem, to).map(Some);
        }
    }

    Ok(None)
}
