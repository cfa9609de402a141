//! Derivation of the present participle (gerund) and the past participle.

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use crate::alternation;
use crate::compose::Composer;
use crate::composite::Composite;
use crate::error::{Error, ErrorKind};
use crate::grammar::VerbFamily;
use crate::orthography;
use crate::overlay;
use crate::resolve::{self, Resolution, MAX_DEPTH};
use crate::rules::{RuleSet, Rules};
use crate::stem::{self, Layer};

/// The participles of a verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participles {
    /// The gerund, like `hablando`.
    pub present: String,
    /// The past participle, like `hablado`.
    pub past: String,
    /// Set if the gerund differs from the regular one.
    pub irregular_present: bool,
    /// Set if the past participle differs from the regular one.
    pub irregular_past: bool,
}

/// Suffixes after a stem ending in an open vowel: `leyendo`, `leído`.
fn glide<'a>(stem: &str, suffix: &'a str) -> Cow<'a, str> {
    if !stem.ends_with(|c| matches!(c, 'a' | 'e' | 'o')) {
        return Cow::Borrowed(suffix);
    }

    match suffix.strip_prefix('i') {
        Some(rest) if rest.starts_with('e') => Cow::Owned(format!("y{rest}")),
        Some(rest) if rest.starts_with('d') => Cow::Owned(format!("í{rest}")),
        _ => Cow::Borrowed(suffix),
    }
}

fn form(rules: &Rules, infinitive: &str, stem: &str, suffix: &str) -> String {
    let suffix = glide(stem, suffix);
    let word = Composite::<2>::new([stem, suffix.as_ref()]).to_string();
    orthography::correct(rules, infinitive, &word).into_owned()
}

/// Participles built from the unmodified stem.
fn regular(rules: &Rules, infinitive: &str) -> Option<(String, String)> {
    let (family, stem) = VerbFamily::classify(infinitive)?;
    let suffixes = rules.participle_suffixes(family)?;

    Some((
        form(rules, infinitive, stem, &suffixes.present),
        form(rules, infinitive, stem, &suffixes.past),
    ))
}

fn exception(layers: &[Layer<'_>], get: fn(&RuleSet) -> Option<&str>) -> Option<String> {
    layers.iter().find_map(|layer| {
        let word = get(layer.rules)?;
        Some(Composite::<2>::new([layer.prefix, word]).to_string())
    })
}

fn compose(
    rules: &Rules,
    resolution: &Resolution,
    depth: usize,
) -> Result<Option<(String, String)>, Error> {
    if depth > MAX_DEPTH {
        return Err(Error::new(ErrorKind::BaseCycle(
            resolution.infinitive.clone(),
        )));
    }

    if let Some(derivation) = &resolution.derivation {
        let base = resolve::resolve(rules, &derivation.verb)?;

        let Some((present, past)) = compose(rules, &base, depth + 1)? else {
            return Ok(None);
        };

        let mut present = overlay::rewrite(&present, &derivation.remove, &derivation.add)?;
        let mut past = overlay::rewrite(&past, &derivation.remove, &derivation.add)?;

        if let Some(own) = rules.verb(&resolution.infinitive) {
            if let Some(word) = &own.participles.present {
                present = word.to_string();
            }

            if let Some(word) = &own.participles.past {
                past = word.to_string();
            }
        }

        return Ok(Some((present, past)));
    }

    let layers = stem::layers(rules, resolution);

    let present = exception(&layers, |rules| rules.participles.present.as_deref());
    let past = exception(&layers, |rules| rules.participles.past.as_deref());

    if let (Some(present), Some(past)) = (&present, &past) {
        return Ok(Some((present.clone(), past.clone())));
    }

    let Some(suffixes) = rules.participle_suffixes(resolution.family) else {
        return Ok(None);
    };

    let Some((_, stem)) = VerbFamily::classify(&resolution.base) else {
        return Ok(None);
    };

    let present = match present {
        Some(present) => present,
        None => {
            let composer = Composer {
                rules,
                infinitive: &resolution.base,
                family: resolution.family,
                layers: &layers,
            };

            let alternated =
                alternation::gerund(rules, composer.alternations(), stem, resolution.family)?;
            let stem = alternated.as_deref().unwrap_or(stem);
            form(rules, &resolution.base, stem, &suffixes.present)
        }
    };

    let past = match past {
        Some(past) => past,
        None => form(rules, &resolution.base, stem, &suffixes.past),
    };

    Ok(Some((present, past)))
}

/// Derive the participles of a resolved verb.
///
/// Returns `None` if the rule tables carry no participle suffixes for the
/// family of the verb.
pub(crate) fn derive(rules: &Rules, resolution: &Resolution) -> Result<Option<Participles>, Error> {
    let Some((present, past)) = compose(rules, resolution, 0)? else {
        return Ok(None);
    };

    let (irregular_present, irregular_past) = match regular(rules, &resolution.infinitive) {
        Some((regular_present, regular_past)) => {
            (present != regular_present, past != regular_past)
        }
        None => (false, false),
    };

    tracing::trace!(
        infinitive = &*resolution.infinitive,
        present = present.as_str(),
        past = past.as_str(),
        "participles"
    );

    Ok(Some(Participles {
        present,
        past,
        irregular_present,
        irregular_past,
    }))
}
