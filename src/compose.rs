//! Composition of stems and suffixes into the forms of one tense-mood.

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use fixed_map::Set;

use crate::alternation::{self, Alternations};
use crate::composite::Composite;
use crate::error::{Error, ErrorKind};
use crate::grammar::{Person, PersonForms, TenseMood, VerbFamily, VerbForm};
use crate::orthography;
use crate::rules::{ClassId, Rules};
use crate::stem::{self, Layer, Stem};
use crate::stress;
use crate::suffix::Suffix;

/// Join a stem with every alternative of a suffix.
pub(crate) fn join(stem: &str, suffix: &Suffix) -> VerbForm {
    match suffix {
        Suffix::One(a) => VerbForm::One(Composite::<2>::new([stem, &**a]).to_string()),
        Suffix::Two(a, b) => VerbForm::Two(
            Composite::<2>::new([stem, &**a]).to_string(),
            Composite::<2>::new([stem, &**b]).to_string(),
        ),
        Suffix::Disallowed => VerbForm::Disallowed,
    }
}

/// Composes the forms of a verb which is not derived from another.
///
/// Layers are consulted in order, so the verb's own rules come before the
/// rules of its family.
pub(crate) struct Composer<'a> {
    pub(crate) rules: &'a Rules,
    pub(crate) infinitive: &'a str,
    pub(crate) family: VerbFamily,
    pub(crate) layers: &'a [Layer<'a>],
}

impl<'a> Composer<'a> {
    /// Alternation settings of the first layer declaring any.
    pub(crate) fn alternations(&self) -> Alternations<'a> {
        let mut alternations: Alternations<'a> = Alternations::NONE;

        if let Some(layer) = self
            .layers
            .iter()
            .find(|layer| !layer.rules.alternations.is_empty())
        {
            alternations.patterns = &layer.rules.alternations;
            alternations.tenses = layer.rules.alternation_tenses.as_ref();
        }

        alternations.gerund = self
            .layers
            .iter()
            .find_map(|layer| layer.rules.gerund_alternation);

        alternations
    }

    /// The suffix class used unless an exception stem asks for another.
    fn class(&self) -> ClassId {
        self.layers
            .iter()
            .find_map(|layer| layer.rules.suffixes)
            .unwrap_or_else(|| self.rules.family_class(self.family))
    }

    /// Persons the verb is restricted to, if any.
    fn persons(&self) -> Option<&'a Set<Person>> {
        self.layers
            .iter()
            .find_map(|layer| layer.rules.persons.as_ref())
    }

    fn stem(&self, tense: TenseMood, person: Person) -> Result<Stem<'a>, Error> {
        match stem::select(self.layers, self.infinitive, tense, person) {
            Some(stem) => Ok(stem),
            None => Err(Error::new(ErrorKind::Unclassified(self.infinitive.into()))),
        }
    }

    /// Repair spelling and drop accents made redundant by a glide.
    fn finish(&self, form: VerbForm) -> VerbForm {
        form.map(|word| {
            let word = orthography::correct(self.rules, self.infinitive, &word);
            stress::suppress_glide_accent(&word)
        })
    }

    /// Compose every person of a tense-mood.
    pub(crate) fn tense(&self, tense: TenseMood) -> Result<PersonForms, Error> {
        let alternations = self.alternations();
        let class = self.class();
        let persons = self.persons();
        let mut forms = PersonForms::disallowed();

        for person in Person::ALL {
            if matches!(persons, Some(persons) if !persons.contains(person)) {
                continue;
            }

            let stem = self.stem(tense, person)?;

            let Some(set) = self.rules.suffixes(stem.class.unwrap_or(class), tense) else {
                continue;
            };

            let suffix = set.get(person);

            if matches!(suffix, Suffix::Disallowed) {
                continue;
            }

            let text = if stem.exceptional {
                stem.text
            } else {
                let alternated =
                    alternation::apply(self.rules, alternations, &stem.text, self.family, tense, person)?;

                match alternated {
                    Some(text) => Cow::Owned(text),
                    None => stem.text,
                }
            };

            forms.set(person, self.finish(join(&text, suffix)));
        }

        if !matches!(persons, Some(persons) if !persons.contains(Person::SecondSingular)) {
            // Stress falls on the suffix, so vos never alternates.
            let stem = self.stem(tense, Person::SecondSingular)?;

            if let Some(set) = self.rules.suffixes(stem.class.unwrap_or(class), tense) {
                if let Some(suffix) = &set.vos {
                    forms.set_vos(Some(self.finish(join(&stem.text, suffix))));
                }
            }
        }

        tracing::trace!(
            infinitive = self.infinitive,
            class = &*self.rules.class(class).name,
            ?tense,
            "composed"
        );
        Ok(forms)
    }
}
