use super::*;

fn one(suffix: &str) -> Suffix {
    Suffix::One(suffix.into())
}

fn cell(base: Option<CellBase>, persons: &[(Person, Suffix)]) -> SuffixCell {
    let mut cell = SuffixCell {
        base,
        ..SuffixCell::default()
    };

    for (person, suffix) in persons {
        cell.persons.insert(*person, suffix.clone());
    }

    cell
}

fn class(name: &str, base: Option<ClassId>, cells: Vec<(TenseMood, SuffixCell)>) -> ClassCells {
    let mut output = ClassCells {
        name: name.into(),
        base,
        cells: Map::new(),
    };

    for (tense, cell) in cells {
        output.cells.insert(tense, cell);
    }

    output
}

fn complete() -> SuffixCell {
    cell(
        None,
        &[
            (Person::FirstSingular, one("o")),
            (Person::SecondSingular, one("es")),
            (Person::ThirdSingular, one("e")),
            (Person::FirstPlural, one("emos")),
            (Person::SecondPlural, one("éis")),
            (Person::ThirdPlural, one("en")),
        ],
    )
}

#[test]
fn inherit_from_class() {
    let mut ir = cell(
        Some(CellBase::Class(ClassId(0))),
        &[(Person::FirstPlural, one("imos"))],
    );
    ir.vos = Some(one("ís"));

    let classes = [
        class("er", None, vec![(TenseMood::PresentIndicative, complete())]),
        class("ir", None, vec![(TenseMood::PresentIndicative, ir)]),
    ];

    let set = resolve(&classes, ClassId(1), TenseMood::PresentIndicative).unwrap();
    assert_eq!(*set.get(Person::FirstSingular), one("o"));
    assert_eq!(*set.get(Person::FirstPlural), one("imos"));
    assert_eq!(set.vos, Some(one("ís")));
}

#[test]
fn inherit_from_tense_and_class_base() {
    let imperative = cell(
        Some(CellBase::Tense(TenseMood::PresentSubjunctive)),
        &[(Person::SecondSingular, one("a"))],
    );

    let classes = [
        class(
            "ar",
            None,
            vec![
                (TenseMood::PresentSubjunctive, complete()),
                (TenseMood::AffirmativeImperative, imperative),
            ],
        ),
        class("variant", Some(ClassId(0)), vec![]),
    ];

    let set = resolve(&classes, ClassId(1), TenseMood::AffirmativeImperative).unwrap();
    assert_eq!(*set.get(Person::FirstSingular), Suffix::Disallowed);
    assert_eq!(*set.get(Person::SecondSingular), one("a"));
    assert_eq!(*set.get(Person::ThirdSingular), one("e"));
}

#[test]
fn disallowed_is_sticky() {
    let mut base = complete();
    base.persons.insert(Person::ThirdPlural, Suffix::Disallowed);

    let derived = cell(
        Some(CellBase::Class(ClassId(0))),
        &[(Person::ThirdPlural, one("on"))],
    );

    let classes = [
        class("a", None, vec![(TenseMood::Preterite, base)]),
        class("b", None, vec![(TenseMood::Preterite, derived)]),
    ];

    let set = resolve(&classes, ClassId(1), TenseMood::Preterite).unwrap();
    assert_eq!(*set.get(Person::ThirdPlural), Suffix::Disallowed);
}

#[test]
fn cycles_are_rejected() {
    let a = cell(Some(CellBase::Class(ClassId(1))), &[]);
    let b = cell(Some(CellBase::Class(ClassId(0))), &[]);

    let classes = [
        class("a", None, vec![(TenseMood::Future, a)]),
        class("b", None, vec![(TenseMood::Future, b)]),
    ];

    let error = resolve(&classes, ClassId(0), TenseMood::Future).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::SuffixCycle { .. }));
}

#[test]
fn missing_persons_are_rejected() {
    let partial = cell(None, &[(Person::FirstSingular, one("o"))]);
    let classes = [class("a", None, vec![(TenseMood::Future, partial)])];

    let error = resolve(&classes, ClassId(0), TenseMood::Future).unwrap_err();
    assert!(matches!(
        error.kind(),
        ErrorKind::MissingSuffix {
            person: Person::SecondSingular,
            ..
        }
    ));

    let error = resolve(&classes, ClassId(0), TenseMood::Conditional).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::MissingSuffix { .. }));
}
