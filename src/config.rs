//! Raw rule tables as they appear in TOML, and their validation into
//! [`Rules`].

use std::collections::{BTreeMap, HashMap, HashSet};

use fixed_map::{Map, Set};
use regex::Regex;
use serde::Deserialize;

use crate::error::{Error, ErrorKind};
use crate::grammar::{Person, TenseMood, VerbFamily, VerbForm};
use crate::rules::{
    ClassId, Derivation, Family, FamilyId, Literal, OrthographicRule, ParticipleExceptions,
    ParticipleSuffixes, Pattern, PatternId, RuleSet, Rules, Stems, SuffixClass,
};
use crate::stress::AccentPair;
use crate::suffix::{self, CellBase, ClassCells, Suffix, SuffixCell};

/// A person slot, including the `vos` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
enum RawSlot {
    #[serde(rename = "1s")]
    FirstSingular,
    #[serde(rename = "2s")]
    SecondSingular,
    #[serde(rename = "3s")]
    ThirdSingular,
    #[serde(rename = "1p")]
    FirstPlural,
    #[serde(rename = "2p")]
    SecondPlural,
    #[serde(rename = "3p")]
    ThirdPlural,
    #[serde(rename = "vos")]
    Vos,
}

impl RawSlot {
    fn person(self) -> Option<Person> {
        Some(match self {
            RawSlot::FirstSingular => Person::FirstSingular,
            RawSlot::SecondSingular => Person::SecondSingular,
            RawSlot::ThirdSingular => Person::ThirdSingular,
            RawSlot::FirstPlural => Person::FirstPlural,
            RawSlot::SecondPlural => Person::SecondPlural,
            RawSlot::ThirdPlural => Person::ThirdPlural,
            RawSlot::Vos => return None,
        })
    }
}

/// Either one string or two alternatives.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawText {
    One(String),
    Two([String; 2]),
}

impl RawText {
    fn into_suffix(self) -> Suffix {
        match self {
            RawText::One(a) => Suffix::One(a.into()),
            RawText::Two([a, b]) => Suffix::Two(a.into(), b.into()),
        }
    }

    fn into_form(self) -> VerbForm {
        match self {
            RawText::One(a) => VerbForm::One(a),
            RawText::Two([a, b]) => VerbForm::Two(a, b),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum RawCellBase {
    Class(String),
    Tense(TenseMood),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawCell {
    base: Option<RawCellBase>,
    persons: BTreeMap<RawSlot, RawText>,
    disallowed: Vec<RawSlot>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawClass {
    base: Option<String>,
    tenses: BTreeMap<TenseMood, RawCell>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct RawPattern {
    from: String,
    to: String,
    cells: BTreeMap<TenseMood, Vec<Person>>,
    #[serde(default)]
    only_for: Option<VerbFamily>,
    #[serde(default)]
    gerund: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct RawDerivation {
    verb: String,
    #[serde(default)]
    remove: String,
    #[serde(default)]
    add: String,
    #[serde(default)]
    inherit_accents: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPreterite {
    Stem(String),
    WithSuffixes { stem: String, suffixes: String },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
struct RawStems {
    first_singular: Option<String>,
    preterite: Option<RawPreterite>,
    future: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawParticiples {
    present: Option<String>,
    past: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
struct RawRuleSet {
    base: Option<RawDerivation>,
    family: Option<String>,
    alternations: Vec<String>,
    alternation_tenses: Option<Vec<TenseMood>>,
    persons: Option<Vec<Person>>,
    suffixes: Option<String>,
    stems: RawStems,
    forms: BTreeMap<TenseMood, BTreeMap<RawSlot, RawText>>,
    accents: BTreeMap<TenseMood, BTreeMap<Person, String>>,
    accent_drops: Vec<String>,
    participles: RawParticiples,
    gerund_alternation: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOrthography {
    ending: String,
    #[serde(default)]
    pattern: Option<String>,
    #[serde(default)]
    replace: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawParticipleSuffixes {
    present: String,
    past: String,
}

/// Rule tables exactly as deserialized.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct RawRules {
    prefixes: Vec<String>,
    allow: Vec<String>,
    participles: BTreeMap<VerbFamily, RawParticipleSuffixes>,
    suffixes: BTreeMap<String, RawClass>,
    patterns: BTreeMap<String, RawPattern>,
    /// Families are keyed by the ending their members share.
    families: BTreeMap<String, RawRuleSet>,
    orthography: Vec<RawOrthography>,
    verbs: BTreeMap<String, RawRuleSet>,
}

/// Name lookups used while converting raw tables.
struct Names {
    classes: HashMap<String, ClassId>,
    patterns: HashMap<String, PatternId>,
    families: HashMap<String, FamilyId>,
}

impl Names {
    fn class(&self, name: &str) -> Result<ClassId, Error> {
        self.classes
            .get(name)
            .copied()
            .ok_or_else(|| Error::new(ErrorKind::UnknownClass(name.into())))
    }

    fn pattern(&self, name: &str) -> Result<PatternId, Error> {
        self.patterns
            .get(name)
            .copied()
            .ok_or_else(|| Error::new(ErrorKind::UnknownPattern(name.into())))
    }

    fn family(&self, name: &str) -> Result<FamilyId, Error> {
        self.families
            .get(name)
            .copied()
            .ok_or_else(|| Error::new(ErrorKind::UnknownFamily(name.into())))
    }
}

impl RawRules {
    /// Validate the raw tables, resolving every name into an index.
    pub(crate) fn build(self) -> Result<Rules, Error> {
        let mut class_names = HashMap::new();
        let mut raw_classes = self.suffixes;

        // The three families occupy the first class indexes.
        let mut ordered = Vec::new();

        for family in VerbFamily::ALL {
            let Some(class) = raw_classes.remove(family.name()) else {
                return Err(Error::new(ErrorKind::UnknownClass(family.name().into())));
            };

            ordered.push((family.name().to_owned(), class));
        }

        ordered.extend(raw_classes);

        for (index, (name, _)) in ordered.iter().enumerate() {
            class_names.insert(name.clone(), ClassId(index));
        }

        let mut patterns = Vec::new();
        let mut pattern_names = HashMap::new();

        for (name, raw) in self.patterns {
            let mut cells = Map::new();

            for (tense, persons) in raw.cells {
                cells.insert(tense, persons.into_iter().collect::<Set<_>>());
            }

            pattern_names.insert(name.clone(), PatternId(patterns.len()));

            patterns.push(Pattern {
                name: name.into(),
                from: raw.from.into(),
                to: raw.to.into(),
                cells,
                only_for: raw.only_for,
                gerund: raw.gerund.map(Into::into),
            });
        }

        // Longest ending first so that `-ducir` wins over `-cir`.
        let mut raw_families = self.families.into_iter().collect::<Vec<_>>();
        raw_families.sort_by(|(a, _), (b, _)| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        let mut family_names = HashMap::new();

        for (index, (name, _)) in raw_families.iter().enumerate() {
            family_names.insert(name.clone(), FamilyId(index));
        }

        let names = Names {
            classes: class_names,
            patterns: pattern_names,
            families: family_names,
        };

        let mut cells = Vec::with_capacity(ordered.len());

        for (name, raw) in ordered {
            cells.push(build_class(&names, name, raw)?);
        }

        let classes = suffix::resolve_all(&cells)?
            .into_iter()
            .zip(cells)
            .map(|(sets, cells)| SuffixClass {
                name: cells.name,
                sets,
            })
            .collect();

        let mut families = Vec::with_capacity(raw_families.len());

        for (name, raw) in raw_families {
            if raw.base.is_some() || raw.family.is_some() {
                return Err(Error::new(ErrorKind::FamilyBase(name.into())));
            }

            families.push(Family {
                rules: build_rule_set(&names, &name, raw)?,
                ending: name.into(),
            });
        }

        let mut verbs = HashMap::new();

        for (name, raw) in self.verbs {
            let rules = build_rule_set(&names, &name, raw)?;

            if let Some(family) = rules.family {
                let ending = &families[family.0].ending;

                if !name.ends_with(&**ending) {
                    return Err(Error::new(ErrorKind::FamilyEnding {
                        verb: name.into(),
                        ending: ending.clone(),
                    }));
                }
            }

            verbs.insert(Box::<str>::from(name), rules);
        }

        validate_bases(&verbs)?;

        let mut prefixes = self
            .prefixes
            .into_iter()
            .map(Box::<str>::from)
            .collect::<Vec<_>>();
        prefixes.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        prefixes.dedup();

        let mut orthography = Vec::new();

        for raw in self.orthography {
            let repair = match (raw.pattern, raw.replace) {
                (Some(pattern), Some(replace)) => {
                    let regex = Regex::new(&pattern).map_err(|error| ErrorKind::Regex {
                        pattern: pattern.as_str().into(),
                        error,
                    })?;

                    Some((regex, replace.into()))
                }
                _ => None,
            };

            orthography.push(OrthographicRule {
                ending: raw.ending.into(),
                repair,
            });
        }

        orthography.sort_by(|a, b| b.ending.chars().count().cmp(&a.ending.chars().count()));

        let mut participles = Map::new();

        for (family, raw) in self.participles {
            participles.insert(
                family,
                ParticipleSuffixes {
                    present: raw.present.into(),
                    past: raw.past.into(),
                },
            );
        }

        Ok(Rules {
            classes,
            patterns,
            families,
            verbs,
            prefixes,
            allow: self.allow.into_iter().map(Box::<str>::from).collect::<HashSet<_>>(),
            orthography,
            participles,
        })
    }
}

fn build_class(names: &Names, name: String, raw: RawClass) -> Result<ClassCells, Error> {
    let base = raw.base.as_deref().map(|b| names.class(b)).transpose()?;
    let mut cells = Map::new();

    for (tense, raw) in raw.tenses {
        let mut cell = SuffixCell {
            base: match raw.base {
                Some(RawCellBase::Class(class)) => Some(CellBase::Class(names.class(&class)?)),
                Some(RawCellBase::Tense(tense)) => Some(CellBase::Tense(tense)),
                None => None,
            },
            ..SuffixCell::default()
        };

        for (slot, text) in raw.persons {
            match slot.person() {
                Some(person) => {
                    cell.persons.insert(person, text.into_suffix());
                }
                None => {
                    cell.vos = Some(text.into_suffix());
                }
            }
        }

        for slot in raw.disallowed {
            match slot.person() {
                Some(person) => {
                    cell.persons.insert(person, Suffix::Disallowed);
                }
                None => {
                    cell.vos = Some(Suffix::Disallowed);
                }
            }
        }

        cells.insert(tense, cell);
    }

    Ok(ClassCells {
        name: name.into(),
        base,
        cells,
    })
}

fn build_rule_set(names: &Names, verb: &str, raw: RawRuleSet) -> Result<RuleSet, Error> {
    let preterite = match raw.stems.preterite {
        Some(RawPreterite::Stem(stem)) => Some((stem.into(), None)),
        Some(RawPreterite::WithSuffixes { stem, suffixes }) => {
            Some((stem.into(), Some(names.class(&suffixes)?)))
        }
        None => None,
    };

    let mut forms = Map::new();

    for (tense, slots) in raw.forms {
        let mut literal = Literal::default();

        for (slot, text) in slots {
            match slot.person() {
                Some(Person::FirstSingular) if tense.is_imperative() => {
                    return Err(Error::new(ErrorKind::ImperativeFirstSingular(verb.into())));
                }
                Some(person) => {
                    literal.persons.insert(person, text.into_form());
                }
                None => {
                    literal.vos = Some(text.into_form());
                }
            }
        }

        forms.insert(tense, literal);
    }

    let mut accents = Map::new();

    for (tense, persons) in raw.accents {
        let mut map = Map::new();

        for (person, pair) in persons {
            map.insert(person, AccentPair::parse(&pair)?);
        }

        accents.insert(tense, map);
    }

    Ok(RuleSet {
        base: raw.base.map(|b| Derivation {
            verb: b.verb.into(),
            remove: b.remove.into(),
            add: b.add.into(),
            inherit_accents: b.inherit_accents,
        }),
        family: raw.family.as_deref().map(|f| names.family(f)).transpose()?,
        alternations: raw
            .alternations
            .iter()
            .map(|p| names.pattern(p))
            .collect::<Result<_, _>>()?,
        alternation_tenses: raw
            .alternation_tenses
            .map(|tenses| tenses.into_iter().collect()),
        persons: raw.persons.map(|persons| persons.into_iter().collect()),
        suffixes: raw.suffixes.as_deref().map(|s| names.class(s)).transpose()?,
        stems: Stems {
            first_singular: raw.stems.first_singular.map(Into::into),
            preterite,
            future: raw.stems.future.map(Into::into),
        },
        forms,
        accents,
        accent_drops: raw
            .accent_drops
            .iter()
            .map(|pair| AccentPair::parse(pair))
            .collect::<Result<_, _>>()?,
        participles: ParticipleExceptions {
            present: raw.participles.present.map(Into::into),
            past: raw.participles.past.map(Into::into),
        },
        gerund_alternation: raw
            .gerund_alternation
            .as_deref()
            .map(|p| names.pattern(p))
            .transpose()?,
    })
}

/// Check that every base chain ends in a known verb without cycles.
fn validate_bases(verbs: &HashMap<Box<str>, RuleSet>) -> Result<(), Error> {
    for (name, rules) in verbs {
        crate::resolve::walk_bases(verbs, name, rules)?;
    }

    Ok(())
}
