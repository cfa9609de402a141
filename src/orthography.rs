//! Spelling repairs which keep the sound of a stem final consonant when a
//! suffix changes the following vowel (`buscé` → `busqué`).

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use crate::rules::Rules;

/// Repair the spelling of a form belonging to the given infinitive.
///
/// The rule is picked by the longest infinitive ending with an entry. Only
/// the last match in the word is rewritten, since the stem final consonant
/// is always the last candidate.
pub(crate) fn correct<'a>(rules: &Rules, infinitive: &str, word: &'a str) -> Cow<'a, str> {
    let Some(rule) = rules.orthography_for(infinitive) else {
        return Cow::Borrowed(word);
    };

    let Some((regex, replace)) = &rule.repair else {
        return Cow::Borrowed(word);
    };

    let Some(captures) = regex.captures_iter(word).last() else {
        return Cow::Borrowed(word);
    };

    let Some(whole) = captures.get(0) else {
        return Cow::Borrowed(word);
    };

    let mut output = String::with_capacity(word.len() + replace.len());
    output.push_str(&word[..whole.start()]);
    captures.expand(replace, &mut output);
    output.push_str(&word[whole.end()..]);

    tracing::trace!(ending = &*rule.ending, word, output = output.as_str(), "orthography");
    Cow::Owned(output)
}
