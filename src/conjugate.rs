//! Entry points of the conjugation pipeline.


use crate::compose::Composer;
use crate::error::{Error, ErrorKind};
use crate::grammar::{PersonForms, TenseMood};
use crate::overlay;
use crate::participle::{self, Participles};
use crate::resolve::{self, Model, Resolution, MAX_DEPTH};
use crate::rules::Rules;
use crate::stem::{self, Layer};
use crate::stress::AccentPair;

/// Notes attached to a conjugation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notes {
    /// The model the verb was conjugated after.
    pub model: Model,
    /// Set when the verb was unknown and conjugated as regular.
    pub unconfirmed: bool,
}

/// The forms of one verb in one tense-mood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conjugation {
    pub forms: PersonForms,
    pub notes: Notes,
}

/// Conjugates verbs using a set of rule tables.
///
/// # Examples
///
/// ```
/// use conjugar::{Conjugator, Person, Rules, TenseMood};
///
/// let rules = Rules::spanish()?;
/// let conjugator = Conjugator::new(&rules);
///
/// let conjugation = conjugator.conjugate("contar", TenseMood::PresentIndicative)?;
/// assert_eq!(conjugation.forms.get(Person::ThirdSingular).first(), Some("cuenta"));
/// assert_eq!(conjugation.forms.get(Person::FirstPlural).first(), Some("contamos"));
/// # Ok::<_, conjugar::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Conjugator<'a> {
    rules: &'a Rules,
}

impl<'a> Conjugator<'a> {
    /// Construct a conjugator over the given rules.
    pub fn new(rules: &'a Rules) -> Self {
        Self { rules }
    }

    /// Access the underlying rules.
    pub fn rules(&self) -> &'a Rules {
        self.rules
    }

    /// Resolve the model governing an infinitive.
    pub fn resolve(&self, infinitive: &str) -> Result<Resolution, Error> {
        resolve::resolve(self.rules, infinitive)
    }

    /// Conjugate an infinitive in one tense-mood.
    pub fn conjugate(&self, infinitive: &str, tense: TenseMood) -> Result<Conjugation, Error> {
        let resolution = self.resolve(infinitive)?;
        self.conjugate_resolved(&resolution, tense)
    }

    /// Conjugate an infinitive in every tense-mood.
    pub fn conjugate_all(&self, infinitive: &str) -> Result<Vec<(TenseMood, Conjugation)>, Error> {
        let resolution = self.resolve(infinitive)?;

        TenseMood::ALL
            .into_iter()
            .map(|tense| Ok((tense, self.conjugate_resolved(&resolution, tense)?)))
            .collect()
    }

    /// Derive the participles of an infinitive.
    ///
    /// Returns `None` for an infinitive without a recognizable ending.
    pub fn derive_participles(&self, infinitive: &str) -> Result<Option<Participles>, Error> {
        let resolution = match self.resolve(infinitive) {
            Ok(resolution) => resolution,
            Err(error) if error.is_unclassified() => return Ok(None),
            Err(error) => return Err(error),
        };

        participle::derive(self.rules, &resolution)
    }

    fn conjugate_resolved(
        &self,
        resolution: &Resolution,
        tense: TenseMood,
    ) -> Result<Conjugation, Error> {
        let mut forms = self.forms(resolution, tense, 0)?;

        let mut drops = Vec::new();
        self.drops(resolution, &mut drops, 0)?;
        overlay::drop_accents(&mut forms, &drops);

        Ok(Conjugation {
            forms,
            notes: Notes {
                model: resolution.model.clone(),
                unconfirmed: resolution.unconfirmed,
            },
        })
    }

    /// Forms of a verb before accent drops, which derived verbs build on.
    fn forms(
        &self,
        resolution: &Resolution,
        tense: TenseMood,
        depth: usize,
    ) -> Result<PersonForms, Error> {
        if depth > MAX_DEPTH {
            return Err(Error::new(ErrorKind::BaseCycle(
                resolution.infinitive.clone(),
            )));
        }

        if let Some(derivation) = &resolution.derivation {
            let base = resolve::resolve(self.rules, &derivation.verb)?;
            let mut forms = self.forms(&base, tense, depth + 1)?;
            overlay::derive(&mut forms, &derivation.remove, &derivation.add)?;

            if let Some(own) = self.rules.verb(&resolution.infinitive) {
                let layers = [Layer {
                    rules: own,
                    prefix: "",
                }];

                overlay::literals(&mut forms, &layers, tense);
                overlay::accents(&mut forms, &layers, tense)?;
            }

            tracing::trace!(
                infinitive = &*resolution.infinitive,
                base = &*derivation.verb,
                ?tense,
                "derived"
            );

            return Ok(forms);
        }

        let layers = stem::layers(self.rules, resolution);

        let composer = Composer {
            rules: self.rules,
            infinitive: &resolution.base,
            family: resolution.family,
            layers: &layers,
        };

        let mut forms = composer.tense(tense)?;
        overlay::literals(&mut forms, &layers, tense);
        overlay::accents(&mut forms, &layers, tense)?;
        Ok(forms)
    }

    /// Collect the accent drops applying to the final forms of a verb.
    fn drops(
        &self,
        resolution: &Resolution,
        output: &mut Vec<&'a AccentPair>,
        depth: usize,
    ) -> Result<(), Error> {
        if depth > MAX_DEPTH {
            return Err(Error::new(ErrorKind::BaseCycle(
                resolution.infinitive.clone(),
            )));
        }

        if let Some(own) = self.rules.verb(&resolution.infinitive) {
            output.extend(own.accent_drops.iter());
        }

        match &resolution.derivation {
            Some(derivation) if derivation.inherit_accents => {
                let base = resolve::resolve(self.rules, &derivation.verb)?;
                self.drops(&base, output, depth + 1)?;
            }
            Some(..) => {}
            None => {
                if let Some(id) = resolution.family_id {
                    output.extend(self.rules.family(id).rules.accent_drops.iter());
                }
            }
        }

        Ok(())
    }
}
