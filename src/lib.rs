//! Conjugation of Spanish verbs driven by declarative rule tables.
//!
//! Rule tables are loaded once into [`Rules`], after which any number of
//! [`Conjugator`] requests can be served from them.

mod alternation;
mod compose;
mod composite;
mod config;
mod orthography;
mod overlay;
mod stem;
mod stress;
mod suffix;

mod conjugate;
pub use self::conjugate::{Conjugation, Conjugator, Notes};

mod error;
pub use self::error::Error;

mod grammar;
pub use self::grammar::{Person, PersonForms, TenseMood, VerbFamily, VerbForm};

mod participle;
pub use self::participle::Participles;

mod resolve;
pub use self::resolve::{Model, Resolution};

mod rules;
pub use self::rules::Rules;
