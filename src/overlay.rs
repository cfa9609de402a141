//! Overlays applied on top of composed forms: literal forms, accent
//! overrides, the rewriting of derived verbs and the final accent drops.

#[cfg(test)]
mod tests;

use crate::composite::Composite;
use crate::error::{Error, ErrorKind};
use crate::grammar::{Person, PersonForms, TenseMood, VerbForm};
use crate::stem::Layer;
use crate::stress::{self, AccentPair};

fn prefixed(prefix: &str, form: &VerbForm) -> VerbForm {
    if prefix.is_empty() {
        return form.clone();
    }

    form.clone()
        .map(|word| Composite::<2>::new([prefix, word.as_str()]).to_string())
}

/// Replace composed forms with literal ones. The first layer declaring a
/// form for a person wins.
pub(crate) fn literals(forms: &mut PersonForms, layers: &[Layer<'_>], tense: TenseMood) {
    for person in Person::ALL {
        let found = layers.iter().find_map(|layer| {
            let form = layer.rules.forms.get(tense)?.persons.get(person)?;
            Some((layer.prefix, form))
        });

        if let Some((prefix, form)) = found {
            forms.set(person, prefixed(prefix, form));
        }
    }

    let vos = layers.iter().find_map(|layer| {
        let form = layer.rules.forms.get(tense)?.vos.as_ref()?;
        Some((layer.prefix, form))
    });

    if let Some((prefix, form)) = vos {
        forms.set_vos(Some(prefixed(prefix, form)));
    }
}

/// Apply accent overrides. An override which does not match its form is an
/// error in the rule tables.
pub(crate) fn accents(
    forms: &mut PersonForms,
    layers: &[Layer<'_>],
    tense: TenseMood,
) -> Result<(), Error> {
    for layer in layers {
        let Some(accents) = layer.rules.accents.get(tense) else {
            continue;
        };

        for (person, pair) in accents.iter() {
            let form = forms.get(person).clone().try_map(|word| {
                pair.apply(&word).ok_or_else(|| {
                    Error::new(ErrorKind::AccentMismatch {
                        form: word.as_str().into(),
                        pair: pair.to_string().into(),
                    })
                })
            })?;

            forms.set(person, form);
        }
    }

    Ok(())
}

/// Rewrite a form of the base verb into a form of the derived verb.
///
/// A base form of one syllable gains a syllable from the prefix, which can
/// move the written accent (`ten` → `mantén`).
pub(crate) fn rewrite(word: &str, remove: &str, add: &str) -> Result<String, Error> {
    let Some(rest) = word.strip_prefix(remove) else {
        return Err(Error::new(ErrorKind::MissingPrefix {
            form: word.into(),
            prefix: remove.into(),
        }));
    };

    let output = Composite::<2>::new([add, rest]).to_string();

    if stress::syllables(word) != 1 || stress::syllables(&output) <= 1 {
        return Ok(output);
    }

    let index = stress::stress_index(word)
        .map(|index| index + add.chars().count())
        .and_then(|index| index.checked_sub(remove.chars().count()));

    Ok(match index {
        Some(index) => stress::restress(&output, index),
        None => output,
    })
}

/// Rewrite every form of the base verb.
pub(crate) fn derive(forms: &mut PersonForms, remove: &str, add: &str) -> Result<(), Error> {
    forms.try_map_all(|word| rewrite(&word, remove, add))
}

/// Apply accent drops to final forms, wherever they match.
pub(crate) fn drop_accents(forms: &mut PersonForms, drops: &[&AccentPair]) {
    if drops.is_empty() {
        return;
    }

    forms.map_all(|mut word| {
        for pair in drops {
            if let Some(output) = pair.apply(&word) {
                word = output;
            }
        }

        word
    });
}
