//! Validated, read-only rule tables.
//!
//! A [`Rules`] value is produced once by [`Rules::from_toml`] and shared by
//! every conjugation request. All names used in the source tables have been
//! resolved into indexes by the time a `Rules` exists.


use std::collections::{HashMap, HashSet};
use std::path::Path;

use fixed_map::{Map, Set};
use regex::Regex;

use crate::error::{Error, ErrorKind};
use crate::grammar::{Person, TenseMood, VerbFamily, VerbForm};
use crate::stress::AccentPair;
use crate::suffix::SuffixSet;

/// Spanish rule tables shipped with the crate.
static SPANISH: &str = include_str!("rules/spanish.toml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ClassId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct PatternId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct FamilyId(pub(crate) usize);

/// A suffix class, either one of the three families or a named variant.
#[derive(Debug)]
pub(crate) struct SuffixClass {
    pub(crate) name: Box<str>,
    pub(crate) sets: Map<TenseMood, SuffixSet>,
}

/// A vowel alternation pattern such as `e-ie`.
#[derive(Debug)]
pub(crate) struct Pattern {
    pub(crate) name: Box<str>,
    pub(crate) from: Box<str>,
    pub(crate) to: Box<str>,
    pub(crate) cells: Map<TenseMood, Set<Person>>,
    pub(crate) only_for: Option<VerbFamily>,
    pub(crate) gerund: Option<Box<str>>,
}

impl Pattern {
    /// Test if the pattern covers the given cell for a verb of the given
    /// family.
    pub(crate) fn covers(&self, family: VerbFamily, tense: TenseMood, person: Person) -> bool {
        if matches!(self.only_for, Some(only) if only != family) {
            return false;
        }

        self.cells
            .get(tense)
            .map_or(false, |persons| persons.contains(person))
    }
}

/// A productive conjugation family, like verbs ending in `-ecer`.
#[derive(Debug)]
pub(crate) struct Family {
    /// The shared ending, which also names the family.
    pub(crate) ending: Box<str>,
    pub(crate) rules: RuleSet,
}

/// How a derived verb relates to its irregular base.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Derivation {
    pub(crate) verb: Box<str>,
    pub(crate) remove: Box<str>,
    pub(crate) add: Box<str>,
    pub(crate) inherit_accents: bool,
}

/// Lexical exception stems. Each covers a disjoint set of cells.
#[derive(Debug, Default)]
pub(crate) struct Stems {
    pub(crate) first_singular: Option<Box<str>>,
    pub(crate) preterite: Option<(Box<str>, Option<ClassId>)>,
    pub(crate) future: Option<Box<str>>,
}

/// Literal forms replacing composed ones.
#[derive(Debug, Default)]
pub(crate) struct Literal {
    pub(crate) persons: Map<Person, VerbForm>,
    pub(crate) vos: Option<VerbForm>,
}

#[derive(Debug, Default)]
pub(crate) struct ParticipleExceptions {
    pub(crate) present: Option<Box<str>>,
    pub(crate) past: Option<Box<str>>,
}

/// Irregularity data of a single verb or family.
#[derive(Debug, Default)]
pub(crate) struct RuleSet {
    pub(crate) base: Option<Derivation>,
    pub(crate) family: Option<FamilyId>,
    pub(crate) alternations: Vec<PatternId>,
    pub(crate) alternation_tenses: Option<Set<TenseMood>>,
    pub(crate) persons: Option<Set<Person>>,
    pub(crate) suffixes: Option<ClassId>,
    pub(crate) stems: Stems,
    pub(crate) forms: Map<TenseMood, Literal>,
    pub(crate) accents: Map<TenseMood, Map<Person, AccentPair>>,
    pub(crate) accent_drops: Vec<AccentPair>,
    pub(crate) participles: ParticipleExceptions,
    pub(crate) gerund_alternation: Option<PatternId>,
}

/// A spelling repair keyed by infinitive ending.
///
/// An entry without a pattern explicitly disables repairs for verbs with
/// that ending.
#[derive(Debug)]
pub(crate) struct OrthographicRule {
    pub(crate) ending: Box<str>,
    pub(crate) repair: Option<(Regex, Box<str>)>,
}

/// Participle suffixes of a family.
#[derive(Debug)]
pub(crate) struct ParticipleSuffixes {
    pub(crate) present: Box<str>,
    pub(crate) past: Box<str>,
}

/// Validated rule tables.
#[derive(Debug)]
pub struct Rules {
    pub(crate) classes: Vec<SuffixClass>,
    pub(crate) patterns: Vec<Pattern>,
    /// Sorted by descending ending length.
    pub(crate) families: Vec<Family>,
    pub(crate) verbs: HashMap<Box<str>, RuleSet>,
    /// Sorted by descending length.
    pub(crate) prefixes: Vec<Box<str>>,
    pub(crate) allow: HashSet<Box<str>>,
    /// Sorted by descending ending length.
    pub(crate) orthography: Vec<OrthographicRule>,
    pub(crate) participles: Map<VerbFamily, ParticipleSuffixes>,
}

impl Rules {
    /// Load the Spanish rule tables shipped with the crate.
    pub fn spanish() -> Result<Self, Error> {
        Self::from_toml(SPANISH)
    }

    /// Parse and validate rule tables in TOML format.
    pub fn from_toml(input: &str) -> Result<Self, Error> {
        let raw: crate::config::RawRules = toml::from_str(input)?;
        raw.build()
    }

    /// Load rule tables from the given path.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let data = std::fs::read_to_string(path)
            .map_err(|error| ErrorKind::Read(path.into(), error))?;
        Self::from_toml(&data)
    }

    /// Test if the given infinitive has an entry of its own.
    pub fn is_known(&self, infinitive: &str) -> bool {
        self.verbs.contains_key(infinitive)
    }

    /// Number of verbs with entries.
    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    /// Test if there are no verb entries.
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    pub(crate) fn verb(&self, infinitive: &str) -> Option<&RuleSet> {
        self.verbs.get(infinitive)
    }

    pub(crate) fn class(&self, id: ClassId) -> &SuffixClass {
        &self.classes[id.0]
    }

    /// The resolved suffixes of a class for a tense-mood.
    pub(crate) fn suffixes(&self, class: ClassId, tense: TenseMood) -> Option<&SuffixSet> {
        self.classes.get(class.0)?.sets.get(tense)
    }

    pub(crate) fn pattern(&self, id: PatternId) -> &Pattern {
        &self.patterns[id.0]
    }

    pub(crate) fn family(&self, id: FamilyId) -> &Family {
        &self.families[id.0]
    }

    /// The suffix class of a bare family.
    ///
    /// Families are always registered first, in [`VerbFamily::ALL`] order.
    pub(crate) fn family_class(&self, family: VerbFamily) -> ClassId {
        match family {
            VerbFamily::Ar => ClassId(0),
            VerbFamily::Er => ClassId(1),
            VerbFamily::Ir => ClassId(2),
        }
    }

    /// Find the family whose ending matches the infinitive, longest first.
    pub(crate) fn family_by_ending(&self, infinitive: &str) -> Option<FamilyId> {
        self.families
            .iter()
            .position(|family| {
                infinitive.ends_with(&*family.ending)
                    && infinitive.chars().count() > family.ending.chars().count()
            })
            .map(FamilyId)
    }

    /// Find the orthographic rule for the infinitive, longest ending first.
    pub(crate) fn orthography_for(&self, infinitive: &str) -> Option<&OrthographicRule> {
        self.orthography
            .iter()
            .find(|rule| infinitive.ends_with(&*rule.ending))
    }

    pub(crate) fn participle_suffixes(&self, family: VerbFamily) -> Option<&ParticipleSuffixes> {
        self.participles.get(family)
    }
}
