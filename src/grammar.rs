//! Grammatical categories shared by every stage of the pipeline.

use std::convert::Infallible;
use std::fmt;

use fixed_map::{Key, Map};
use serde::Deserialize;

/// The conjugation family of a verb, decided by its infinitive ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Key)]
#[serde(rename_all = "kebab-case")]
pub enum VerbFamily {
    Ar,
    Er,
    Ir,
}

impl VerbFamily {
    pub const ALL: [VerbFamily; 3] = [VerbFamily::Ar, VerbFamily::Er, VerbFamily::Ir];

    /// Classify an infinitive, returning the family and the stem left after
    /// removing the ending.
    ///
    /// `-ír` (as in `reír`) belongs to the `Ir` family.
    pub fn classify(infinitive: &str) -> Option<(VerbFamily, &str)> {
        if let Some(stem) = infinitive.strip_suffix("ar") {
            return Some((VerbFamily::Ar, stem));
        }

        if let Some(stem) = infinitive.strip_suffix("er") {
            return Some((VerbFamily::Er, stem));
        }

        if let Some(stem) = infinitive.strip_suffix("ir") {
            return Some((VerbFamily::Ir, stem));
        }

        if let Some(stem) = infinitive.strip_suffix("ír") {
            return Some((VerbFamily::Ir, stem));
        }

        None
    }

    /// Name of the family, also the name of its suffix class.
    pub fn name(&self) -> &'static str {
        match self {
            VerbFamily::Ar => "ar",
            VerbFamily::Er => "er",
            VerbFamily::Ir => "ir",
        }
    }
}

impl fmt::Display for VerbFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}", self.name())
    }
}

macro_rules! tense_mood {
    ($vis:vis enum $name:ident { $({$variant:ident, $ident:literal, $describe:literal}),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Key)]
        #[serde(rename_all = "kebab-case")]
        $vis enum $name {
            $($variant,)*
        }

        impl $name {
            $vis const ALL: [$name; 10] = [$($name::$variant,)*];

            /// Keyword used in rule tables and on the command line.
            $vis fn ident(&self) -> &'static str {
                match self {
                    $($name::$variant => $ident,)*
                }
            }

            /// Human readable description.
            $vis fn describe(&self) -> &'static str {
                match self {
                    $($name::$variant => $describe,)*
                }
            }

            /// Parse a keyword.
            $vis fn parse_keyword(input: &str) -> Option<Self> {
                match input {
                    $($ident => Some($name::$variant),)*
                    _ => None,
                }
            }
        }
    }
}

tense_mood! {
    pub enum TenseMood {
        {PresentIndicative, "present-indicative", "presente de indicativo"},
        {ImperfectIndicative, "imperfect-indicative", "pretérito imperfecto de indicativo"},
        {Preterite, "preterite", "pretérito perfecto simple"},
        {Future, "future", "futuro simple"},
        {Conditional, "conditional", "condicional simple"},
        {PresentSubjunctive, "present-subjunctive", "presente de subjuntivo"},
        {ImperfectSubjunctive, "imperfect-subjunctive", "pretérito imperfecto de subjuntivo"},
        {FutureSubjunctive, "future-subjunctive", "futuro simple de subjuntivo"},
        {AffirmativeImperative, "affirmative-imperative", "imperativo afirmativo"},
        {NegativeImperative, "negative-imperative", "imperativo negativo"},
    }
}

impl TenseMood {
    /// Future-derived tenses attach their suffix to the infinitive.
    pub fn attaches_to_infinitive(&self) -> bool {
        matches!(self, TenseMood::Future | TenseMood::Conditional)
    }

    /// Test if this is one of the imperatives.
    pub fn is_imperative(&self) -> bool {
        matches!(
            self,
            TenseMood::AffirmativeImperative | TenseMood::NegativeImperative
        )
    }
}

impl fmt::Display for TenseMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}

/// One of the six canonical person slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Key)]
pub enum Person {
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
}

impl Person {
    pub const ALL: [Person; 6] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    /// The subject pronoun conventionally shown with the form.
    pub fn pronoun(&self) -> &'static str {
        match self {
            Person::FirstSingular => "yo",
            Person::SecondSingular => "tú",
            Person::ThirdSingular => "él/ella/usted",
            Person::FirstPlural => "nosotros",
            Person::SecondPlural => "vosotros",
            Person::ThirdPlural => "ellos/ellas/ustedes",
        }
    }
}

/// The surface realization of a single person cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VerbForm {
    /// A single accepted form.
    One(String),
    /// Two equally valid forms, such as `hablara` / `hablase`.
    Two(String, String),
    /// The cell has no form, like the first person imperative.
    Disallowed,
}

impl VerbForm {
    /// Test if the form is disallowed.
    pub fn is_disallowed(&self) -> bool {
        matches!(self, VerbForm::Disallowed)
    }

    /// The primary surface string, if any.
    pub fn first(&self) -> Option<&str> {
        match self {
            VerbForm::One(a) | VerbForm::Two(a, _) => Some(a),
            VerbForm::Disallowed => None,
        }
    }

    /// Iterate over every surface string.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let (a, b) = match self {
            VerbForm::One(a) => (Some(a.as_str()), None),
            VerbForm::Two(a, b) => (Some(a.as_str()), Some(b.as_str())),
            VerbForm::Disallowed => (None, None),
        };

        a.into_iter().chain(b)
    }

    /// Apply a fallible rewrite to every surface string.
    pub(crate) fn try_map<F, E>(self, mut f: F) -> Result<Self, E>
    where
        F: FnMut(String) -> Result<String, E>,
    {
        Ok(match self {
            VerbForm::One(a) => VerbForm::One(f(a)?),
            VerbForm::Two(a, b) => VerbForm::Two(f(a)?, f(b)?),
            VerbForm::Disallowed => VerbForm::Disallowed,
        })
    }

    /// Apply a rewrite to every surface string.
    pub(crate) fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(String) -> String,
    {
        match self.try_map(|s| Ok::<_, Infallible>(f(s))) {
            Ok(form) => form,
            Err(infallible) => match infallible {},
        }
    }
}

impl fmt::Display for VerbForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerbForm::One(a) => f.write_str(a),
            VerbForm::Two(a, b) => write!(f, "{a} / {b}"),
            VerbForm::Disallowed => f.write_str("-"),
        }
    }
}

/// Forms for every person of one tense-mood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonForms {
    forms: Map<Person, VerbForm>,
    vos: Option<VerbForm>,
}

impl PersonForms {
    /// Construct a collection where every person is disallowed.
    pub fn disallowed() -> Self {
        let mut forms = Map::new();

        for person in Person::ALL {
            forms.insert(person, VerbForm::Disallowed);
        }

        Self { forms, vos: None }
    }

    /// Get the form of the given person.
    pub fn get(&self, person: Person) -> &VerbForm {
        self.forms.get(person).unwrap_or(&VerbForm::Disallowed)
    }

    /// Get the form used with `vos`.
    ///
    /// Falls back to the second person singular unless a dedicated form was
    /// declared.
    pub fn vos(&self) -> &VerbForm {
        match &self.vos {
            Some(form) => form,
            None => self.get(Person::SecondSingular),
        }
    }

    /// Test if a dedicated `vos` form was declared.
    pub fn has_explicit_vos(&self) -> bool {
        self.vos.is_some()
    }

    /// Iterate over all persons in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Person, &VerbForm)> + '_ {
        Person::ALL.into_iter().map(|p| (p, self.get(p)))
    }

    pub(crate) fn set(&mut self, person: Person, form: VerbForm) {
        self.forms.insert(person, form);
    }

    pub(crate) fn set_vos(&mut self, form: Option<VerbForm>) {
        self.vos = form;
    }

    /// Rewrite every allowed form, including `vos`.
    pub(crate) fn map_all<F>(&mut self, mut f: F)
    where
        F: FnMut(String) -> String,
    {
        match self.try_map_all(|s| Ok::<_, Infallible>(f(s))) {
            Ok(()) => {}
            Err(infallible) => match infallible {},
        }
    }

    /// Fallibly rewrite every allowed form, including `vos`.
    pub(crate) fn try_map_all<F, E>(&mut self, mut f: F) -> Result<(), E>
    where
        F: FnMut(String) -> Result<String, E>,
    {
        for person in Person::ALL {
            let form = self.forms.remove(person).unwrap_or(VerbForm::Disallowed);
            self.forms.insert(person, form.try_map(&mut f)?);
        }

        if let Some(vos) = self.vos.take() {
            self.vos = Some(vos.try_map(&mut f)?);
        }

        Ok(())
    }
}
