use std::io;
use std::path::Path;

use crate::grammar::{Person, TenseMood};

/// Error raised while loading rule tables or conjugating.
///
/// Every variant except [`Error::is_unclassified`] describes malformed rule
/// data, which is never recovered from internally.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new<K>(kind: K) -> Self
    where
        ErrorKind: From<K>,
    {
        Self { kind: kind.into() }
    }

    /// Test if the error was raised because the infinitive has no
    /// recognizable ending.
    pub fn is_unclassified(&self) -> bool {
        matches!(self.kind, ErrorKind::Unclassified(..))
    }

    #[cfg(test)]
    pub(crate) fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl<K> From<K> for Error
where
    ErrorKind: From<K>,
{
    #[inline]
    fn from(value: K) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ErrorKind {
    #[error("Failed to read rules from {}", .0.display())]
    Read(Box<Path>, #[source] io::Error),
    #[error("Failed to parse rules")]
    Parse(
        #[from]
        #[source]
        toml::de::Error,
    ),
    #[error("Infinitive `{0}` does not end in -ar, -er or -ir")]
    Unclassified(Box<str>),
    #[error("Unknown suffix class `{0}`")]
    UnknownClass(Box<str>),
    #[error("Unknown alternation pattern `{0}`")]
    UnknownPattern(Box<str>),
    #[error("Unknown verb `{0}`")]
    UnknownVerb(Box<str>),
    #[error("Unknown conjugation family `{0}`")]
    UnknownFamily(Box<str>),
    #[error("Family `{0}` cannot declare a base verb or family")]
    FamilyBase(Box<str>),
    #[error("Verb `{verb}` does not end in the ending `{ending}` of its family")]
    FamilyEnding { verb: Box<str>, ending: Box<str> },
    #[error("Suffix class `{class}` inherits from itself in {tense}")]
    SuffixCycle { class: Box<str>, tense: TenseMood },
    #[error("Suffix class `{class}` leaves {person:?} undefined in {tense}")]
    MissingSuffix {
        class: Box<str>,
        tense: TenseMood,
        person: Person,
    },
    #[error("Base chain starting at `{0}` is cyclic or too deep")]
    BaseCycle(Box<str>),
    #[error("Bad orthographic pattern `{pattern}`")]
    Regex {
        pattern: Box<str>,
        #[source]
        error: regex::Error,
    },
    #[error("Form `{form}` does not start with prefix `{prefix}`")]
    MissingPrefix { form: Box<str>, prefix: Box<str> },
    #[error("Stem `{stem}` has no `{from}` to alternate in pattern `{pattern}`")]
    MissingVowel {
        stem: Box<str>,
        from: Box<str>,
        pattern: Box<str>,
    },
    #[error("Accent override `{pair}` does not apply to `{form}`")]
    AccentMismatch { form: Box<str>, pair: Box<str> },
    #[error("Malformed accent pair `{0}`, expected `from:to`")]
    AccentPair(Box<str>),
    #[error("Verb `{0}` declares a first person imperative form")]
    ImperativeFirstSingular(Box<str>),
}
