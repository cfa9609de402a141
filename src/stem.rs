//! Selection of the stem used for a person and tense-mood.

use std::borrow::Cow;

use arrayvec::ArrayVec;

use crate::grammar::{Person, TenseMood, VerbFamily};
use crate::resolve::Resolution;
use crate::rules::{ClassId, RuleSet, Rules};
use crate::stress;

/// Which lexical exception stem covers a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Domain {
    /// Present indicative first singular, the present subjunctive and the
    /// imperatives built from it.
    FirstSingular,
    /// Preterite and the subjunctives built from it.
    Preterite,
    /// Future and conditional.
    Future,
}

impl Domain {
    /// The domain covering a cell, if any. Domains never overlap.
    pub(crate) fn of(tense: TenseMood, person: Person) -> Option<Domain> {
        match (tense, person) {
            (TenseMood::PresentIndicative, Person::FirstSingular) => Some(Domain::FirstSingular),
            (TenseMood::PresentSubjunctive | TenseMood::NegativeImperative, _) => {
                Some(Domain::FirstSingular)
            }
            (
                TenseMood::AffirmativeImperative,
                Person::ThirdSingular | Person::FirstPlural | Person::ThirdPlural,
            ) => Some(Domain::FirstSingular),
            (
                TenseMood::Preterite
                | TenseMood::ImperfectSubjunctive
                | TenseMood::FutureSubjunctive,
                _,
            ) => Some(Domain::Preterite),
            (TenseMood::Future | TenseMood::Conditional, _) => Some(Domain::Future),
            _ => None,
        }
    }
}

/// A selected stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Stem<'a> {
    pub(crate) text: Cow<'a, str>,
    /// Set for lexical exception stems, which never alternate.
    pub(crate) exceptional: bool,
    /// Suffix class required by the exception stem, if any.
    pub(crate) class: Option<ClassId>,
}

/// A rule set together with the prefix its stems are relative to.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Layer<'a> {
    pub(crate) rules: &'a RuleSet,
    pub(crate) prefix: &'a str,
}

/// The rule layers of a resolved verb which is not derived: its own entry
/// followed by its family.
pub(crate) fn layers<'a>(rules: &'a Rules, resolution: &'a Resolution) -> ArrayVec<Layer<'a>, 2> {
    let mut layers = ArrayVec::new();

    if let Some(own) = rules.verb(&resolution.base) {
        layers.push(Layer {
            rules: own,
            prefix: "",
        });
    }

    if let Some(id) = resolution.family_id {
        layers.push(Layer {
            rules: &rules.family(id).rules,
            prefix: resolution.family_prefix.as_deref().unwrap_or_default(),
        });
    }

    layers
}

/// The regular stem of an infinitive for a tense-mood.
///
/// Future-derived tenses use the whole infinitive, without the accent some
/// endings carry (`reír` composes as `reir` + `é`).
pub(crate) fn regular(infinitive: &str, tense: TenseMood) -> Option<Cow<'_, str>> {
    if tense.attaches_to_infinitive() {
        return Some(if infinitive.ends_with("ír") {
            Cow::Owned(stress::strip_accents(infinitive))
        } else {
            Cow::Borrowed(infinitive)
        });
    }

    let (_, stem) = VerbFamily::classify(infinitive)?;
    Some(Cow::Borrowed(stem))
}

/// Select the stem of a cell.
///
/// The first layer declaring an exception stem for the cell's domain wins.
/// Exception stems are never combined with one another.
pub(crate) fn select<'a>(
    layers: &[Layer<'a>],
    infinitive: &'a str,
    tense: TenseMood,
    person: Person,
) -> Option<Stem<'a>> {
    if let Some(domain) = Domain::of(tense, person) {
        for layer in layers {
            let stems = &layer.rules.stems;

            let found = match domain {
                Domain::FirstSingular => stems.first_singular.as_deref().map(|s| (s, None)),
                Domain::Preterite => stems.preterite.as_ref().map(|(s, class)| (&**s, *class)),
                Domain::Future => stems.future.as_deref().map(|s| (s, None)),
            };

            if let Some((stem, class)) = found {
                let text = if layer.prefix.is_empty() {
                    Cow::Borrowed(stem)
                } else {
                    Cow::Owned(format!("{}{stem}", layer.prefix))
                };

                return Some(Stem {
                    text,
                    exceptional: true,
                    class,
                });
            }
        }
    }

    Some(Stem {
        text: regular(infinitive, tense)?,
        exceptional: false,
        class: None,
    })
}
