//! Resolution of suffix sets through their inheritance chains.
//!
//! A cell in the suffix table may inherit from the same tense-mood of another
//! class (`base = { class = "er" }`) or from another tense-mood of the same
//! class (`base = { tense = "present-subjunctive" }`). Chains are flattened
//! once when rules are loaded, so conjugation only ever reads complete
//! [`SuffixSet`] values.

#[cfg(test)]
mod tests;

use fixed_map::Map;

use crate::error::{Error, ErrorKind};
use crate::grammar::{Person, TenseMood};
use crate::rules::ClassId;

/// Upper bound on the length of an inheritance chain.
const MAX_CHAIN: usize = 16;

/// A single suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Suffix {
    One(Box<str>),
    Two(Box<str>, Box<str>),
    /// No form exists for the person.
    Disallowed,
}

/// Where a cell inherits the rest of its suffixes from.
#[derive(Debug, Clone, Copy)]
pub(crate) enum CellBase {
    Class(ClassId),
    Tense(TenseMood),
}

/// One unresolved layer of the suffix table.
#[derive(Debug, Default)]
pub(crate) struct SuffixCell {
    pub(crate) base: Option<CellBase>,
    pub(crate) persons: Map<Person, Suffix>,
    pub(crate) vos: Option<Suffix>,
}

/// Unresolved cells of one class.
#[derive(Debug, Default)]
pub(crate) struct ClassCells {
    pub(crate) name: Box<str>,
    /// Inherit cells not declared by this class from another class.
    pub(crate) base: Option<ClassId>,
    pub(crate) cells: Map<TenseMood, SuffixCell>,
}

/// A complete, resolved set of suffixes for one class and tense-mood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SuffixSet {
    pub(crate) persons: Map<Person, Suffix>,
    pub(crate) vos: Option<Suffix>,
}

impl SuffixSet {
    /// The suffix of the given person.
    pub(crate) fn get(&self, person: Person) -> &Suffix {
        self.persons.get(person).unwrap_or(&Suffix::Disallowed)
    }
}

/// A borrowed cell, possibly synthesized from a class-level base.
enum Layer<'a> {
    Declared(&'a SuffixCell),
    Implicit(ClassId),
}

impl Layer<'_> {
    fn base(&self) -> Option<CellBase> {
        match self {
            Layer::Declared(cell) => cell.base,
            Layer::Implicit(class) => Some(CellBase::Class(*class)),
        }
    }
}

fn layer(classes: &[ClassCells], class: ClassId, tense: TenseMood) -> Result<Layer<'_>, Error> {
    let cells = &classes[class.0];

    if let Some(cell) = cells.cells.get(tense) {
        return Ok(Layer::Declared(cell));
    }

    match cells.base {
        Some(base) => Ok(Layer::Implicit(base)),
        None => Err(Error::new(ErrorKind::MissingSuffix {
            class: cells.name.clone(),
            tense,
            person: Person::FirstSingular,
        })),
    }
}

/// Resolve the suffix set of a class and tense-mood.
///
/// Layers are merged from the root of the chain towards the requested cell.
/// The most specific suffix wins, except that a person disallowed by any layer
/// stays disallowed.
pub(crate) fn resolve(
    classes: &[ClassCells],
    class: ClassId,
    tense: TenseMood,
) -> Result<SuffixSet, Error> {
    let mut chain = Vec::new();
    let mut current = (class, tense);

    loop {
        if chain.len() >= MAX_CHAIN || chain.iter().any(|(_, key)| *key == current) {
            return Err(Error::new(ErrorKind::SuffixCycle {
                class: classes[class.0].name.clone(),
                tense,
            }));
        }

        let layer = layer(classes, current.0, current.1)?;
        let next = layer.base();
        chain.push((layer, current));

        current = match next {
            Some(CellBase::Class(class)) => (class, current.1),
            Some(CellBase::Tense(tense)) => (current.0, tense),
            None => break,
        };
    }

    let mut persons = Map::new();
    let mut vos = None;

    for (layer, _) in chain.iter().rev() {
        let Layer::Declared(cell) = layer else {
            continue;
        };

        for (person, suffix) in cell.persons.iter() {
            if matches!(persons.get(person), Some(Suffix::Disallowed)) {
                continue;
            }

            persons.insert(person, suffix.clone());
        }

        if let Some(suffix) = &cell.vos {
            if !matches!(vos, Some(Suffix::Disallowed)) {
                vos = Some(suffix.clone());
            }
        }
    }

    if tense.is_imperative() {
        persons.insert(Person::FirstSingular, Suffix::Disallowed);
    }

    for person in Person::ALL {
        if !persons.contains_key(person) {
            return Err(Error::new(ErrorKind::MissingSuffix {
                class: classes[class.0].name.clone(),
                tense,
                person,
            }));
        }
    }

    tracing::trace!(class = &*classes[class.0].name, ?tense, layers = chain.len(), "resolved suffixes");
    Ok(SuffixSet { persons, vos })
}

/// Resolve every cell of every class.
pub(crate) fn resolve_all(classes: &[ClassCells]) -> Result<Vec<Map<TenseMood, SuffixSet>>, Error> {
    let mut output = Vec::with_capacity(classes.len());

    for index in 0..classes.len() {
        let mut sets = Map::new();

        for tense in TenseMood::ALL {
            sets.insert(tense, resolve(classes, ClassId(index), tense)?);
        }

        output.push(sets);
    }

    Ok(output)
}
