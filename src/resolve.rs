//! Resolution of the model, family and prefixes governing an infinitive.


use std::collections::HashMap;
use std::fmt;

use arrayvec::ArrayVec;

use crate::error::{Error, ErrorKind};
use crate::grammar::VerbFamily;
use crate::rules::{Derivation, FamilyId, RuleSet, Rules};

/// Maximum number of semantic prefixes stripped from one verb.
pub(crate) const MAX_PREFIXES: usize = 4;

/// Minimum number of characters a remainder must keep after stripping a
/// prefix. A bare ending like `ir` is never a base.
const MIN_BASE: usize = 3;

/// Maximum length of an explicit base chain.
pub(crate) const MAX_DEPTH: usize = 8;

/// The model governing how a verb conjugates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Model {
    /// Regular verb of its family.
    Regular,
    /// A verb with irregularity data, possibly the verb itself.
    Irregular(Box<str>),
    /// A productive conjugation family, named by its ending.
    Family(Box<str>),
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Regular => write!(f, "regular"),
            Model::Irregular(verb) => write!(f, "like {verb}"),
            Model::Family(ending) => write!(f, "-{ending} family"),
        }
    }
}

/// The outcome of resolving an infinitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The requested infinitive.
    pub infinitive: Box<str>,
    /// The infinitive which is actually conjugated, with derivational prefixes
    /// removed.
    pub base: Box<str>,
    /// Family of the infinitive.
    pub family: VerbFamily,
    /// The governing model.
    pub model: Model,
    /// Semantic prefixes removed, outermost first.
    pub prefixes: Vec<Box<str>>,
    /// The part of the base preceding the family ending.
    pub family_prefix: Option<Box<str>>,
    /// Set when nothing is known about the verb and it is assumed regular.
    pub unconfirmed: bool,
    /// How forms of `base` are rewritten into forms of `infinitive`.
    pub(crate) derivation: Option<Derivation>,
    pub(crate) family_id: Option<FamilyId>,
}

impl Resolution {
    /// Test if the verb is conjugated through another base verb.
    pub fn is_derived(&self) -> bool {
        self.derivation.is_some()
    }
}

/// Resolve the given infinitive against the rule tables.
pub(crate) fn resolve(rules: &Rules, infinitive: &str) -> Result<Resolution, Error> {
    let Some((family, _)) = VerbFamily::classify(infinitive) else {
        return Err(Error::new(ErrorKind::Unclassified(infinitive.into())));
    };

    let mut resolution = Resolution {
        infinitive: infinitive.into(),
        base: infinitive.into(),
        family,
        model: Model::Regular,
        prefixes: Vec::new(),
        family_prefix: None,
        unconfirmed: false,
        derivation: None,
        family_id: None,
    };

    if let Some(own) = rules.verb(infinitive) {
        if let Some(derivation) = &own.base {
            resolution.base = derivation.verb.clone();
            resolution.model = Model::Irregular(derivation.verb.clone());
            resolution.derivation = Some(derivation.clone());
            adopt_family(rules, &mut resolution, rules.verb(&derivation.verb))?;
            return Ok(resolution);
        }

        if !is_plain(own) {
            resolution.model = Model::Irregular(infinitive.into());
        }

        adopt_family(rules, &mut resolution, Some(own))?;
        return Ok(resolution);
    }

    if rules.allow.contains(infinitive) {
        return Ok(resolution);
    }

    // An empty family only shields its members from shorter endings.
    if let Some(id) = rules.family_by_ending(infinitive) {
        if !is_plain(&rules.family(id).rules) {
            set_family(rules, &mut resolution, id)?;
            return Ok(resolution);
        }
    }

    let mut prefixes = ArrayVec::<&str, MAX_PREFIXES>::new();
    let mut rest = infinitive;

    'outer: while !prefixes.is_full() {
        for prefix in &rules.prefixes {
            let Some(remainder) = rest.strip_prefix(&**prefix) else {
                continue;
            };

            if remainder.chars().count() < MIN_BASE {
                continue;
            }

            prefixes.push(&**prefix);
            rest = remainder;

            if let Some(base) = rules.verb(rest) {
                let stripped = infinitive.len() - rest.len();

                resolution.base = rest.into();
                resolution.prefixes = prefixes.iter().map(|&p| Box::from(p)).collect();
                resolution.model = if is_plain(base) {
                    Model::Regular
                } else {
                    Model::Irregular(rest.into())
                };
                resolution.derivation = Some(Derivation {
                    verb: rest.into(),
                    remove: "".into(),
                    add: infinitive[..stripped].into(),
                    inherit_accents: false,
                });

                adopt_family(rules, &mut resolution, Some(base))?;
                tracing::trace!(infinitive, base = rest, ?prefixes, "stripped prefixes");
                return Ok(resolution);
            }

            continue 'outer;
        }

        break;
    }

    tracing::debug!(infinitive, "no rules found, assuming a regular verb");
    resolution.unconfirmed = true;
    Ok(resolution)
}

/// Test if a rule set declares nothing at all.
fn is_plain(rules: &RuleSet) -> bool {
    rules.base.is_none()
        && rules.family.is_none()
        && rules.alternations.is_empty()
        && rules.persons.is_none()
        && rules.suffixes.is_none()
        && rules.stems.first_singular.is_none()
        && rules.stems.preterite.is_none()
        && rules.stems.future.is_none()
        && rules.forms.is_empty()
        && rules.accents.is_empty()
        && rules.accent_drops.is_empty()
        && rules.participles.present.is_none()
        && rules.participles.past.is_none()
        && rules.gerund_alternation.is_none()
}

/// Adopt the family declared by the rules of the base.
fn adopt_family(
    rules: &Rules,
    resolution: &mut Resolution,
    base: Option<&RuleSet>,
) -> Result<(), Error> {
    if let Some(id) = base.and_then(|base| base.family) {
        set_family(rules, resolution, id)?;
    }

    Ok(())
}

fn set_family(rules: &Rules, resolution: &mut Resolution, id: FamilyId) -> Result<(), Error> {
    let family = rules.family(id);

    let Some(prefix) = resolution.base.strip_suffix(&*family.ending) else {
        return Err(Error::new(ErrorKind::FamilyEnding {
            verb: resolution.base.clone(),
            ending: family.ending.clone(),
        }));
    };

    resolution.family_prefix = Some(prefix.into());
    resolution.family_id = Some(id);
    resolution.model = Model::Family(family.ending.clone());
    Ok(())
}

/// Walk the explicit base chain of a verb, failing on unknown verbs, cycles
/// and chains deeper than [`MAX_DEPTH`].
pub(crate) fn walk_bases(
    verbs: &HashMap<Box<str>, RuleSet>,
    name: &str,
    rules: &RuleSet,
) -> Result<(), Error> {
    let mut seen = ArrayVec::<&str, MAX_DEPTH>::new();
    let mut current = rules;
    seen.push(name);

    while let Some(derivation) = &current.base {
        let verb = &*derivation.verb;

        if seen.contains(&verb) || seen.try_push(verb).is_err() {
            return Err(Error::new(ErrorKind::BaseCycle(name.into())));
        }

        current = verbs
            .get(verb)
            .ok_or_else(|| Error::new(ErrorKind::UnknownVerb(verb.into())))?;
    }

    Ok(())
}
