use super::*;

fn composer<'a>(rules: &'a Rules, infinitive: &'a str, layers: &'a [Layer<'a>]) -> Composer<'a> {
    let (family, _) = VerbFamily::classify(infinitive).unwrap();

    Composer {
        rules,
        infinitive,
        family,
        layers,
    }
}

fn own<'a>(rules: &'a Rules, infinitive: &str) -> [Layer<'a>; 1] {
    [Layer {
        rules: rules.verb(infinitive).unwrap(),
        prefix: "",
    }]
}

#[test]
fn join_suffixes() {
    assert_eq!(
        join("habl", &Suffix::One("amos".into())),
        VerbForm::One("hablamos".into())
    );

    assert_eq!(
        join("habl", &Suffix::Two("ara".into(), "ase".into())),
        VerbForm::Two("hablara".into(), "hablase".into())
    );

    assert_eq!(join("habl", &Suffix::Disallowed), VerbForm::Disallowed);
    assert_eq!(Composite::<2>::new(["", "ir"]).to_string(), "ir");
}

#[test]
fn regular_present() {
    let rules = Rules::spanish().unwrap();
    let layers = own(&rules, "hablar");
    let forms = composer(&rules, "hablar", &layers)
        .tense(TenseMood::PresentIndicative)
        .unwrap();

    let expected = ["hablo", "hablas", "habla", "hablamos", "habláis", "hablan"];

    for ((person, form), expected) in forms.iter().zip(expected) {
        assert_eq!(form.first(), Some(expected), "{person:?}");
    }

    assert_eq!(forms.vos().first(), Some("hablás"));
}

#[test]
fn imperatives_never_have_first_singular() {
    let rules = Rules::spanish().unwrap();
    let layers = own(&rules, "comer");
    let composer = composer(&rules, "comer", &layers);

    for tense in [
        TenseMood::AffirmativeImperative,
        TenseMood::NegativeImperative,
    ] {
        let forms = composer.tense(tense).unwrap();
        assert!(forms.get(Person::FirstSingular).is_disallowed());
    }

    let forms = composer.tense(TenseMood::AffirmativeImperative).unwrap();
    assert_eq!(forms.get(Person::SecondSingular).first(), Some("come"));
    assert_eq!(forms.get(Person::ThirdSingular).first(), Some("coma"));
    assert_eq!(forms.get(Person::SecondPlural).first(), Some("comed"));
    assert_eq!(forms.vos().first(), Some("comé"));
}

#[test]
fn alternation_only_under_stress() {
    let rules = Rules::spanish().unwrap();
    let layers = own(&rules, "contar");
    let forms = composer(&rules, "contar", &layers)
        .tense(TenseMood::PresentIndicative)
        .unwrap();

    assert_eq!(forms.get(Person::ThirdSingular).first(), Some("cuenta"));
    assert_eq!(forms.get(Person::FirstPlural).first(), Some("contamos"));
    assert_eq!(forms.vos().first(), Some("contás"));
}

#[test]
fn exception_stems_with_their_own_class() {
    let rules = Rules::spanish().unwrap();
    let layers = own(&rules, "tener");
    let composer = composer(&rules, "tener", &layers);

    let forms = composer.tense(TenseMood::Preterite).unwrap();
    assert_eq!(forms.get(Person::FirstSingular).first(), Some("tuve"));
    assert_eq!(forms.get(Person::ThirdSingular).first(), Some("tuvo"));

    let forms = composer.tense(TenseMood::ImperfectSubjunctive).unwrap();
    assert_eq!(
        *forms.get(Person::FirstPlural),
        VerbForm::Two("tuviéramos".into(), "tuviésemos".into())
    );

    let forms = composer.tense(TenseMood::Future).unwrap();
    assert_eq!(forms.get(Person::FirstSingular).first(), Some("tendré"));

    let forms = composer.tense(TenseMood::PresentIndicative).unwrap();
    assert_eq!(forms.get(Person::FirstSingular).first(), Some("tengo"));
    assert_eq!(forms.get(Person::SecondSingular).first(), Some("tienes"));
}

#[test]
fn person_restriction() {
    let rules = Rules::spanish().unwrap();
    let layers = own(&rules, "llover");
    let forms = composer(&rules, "llover", &layers)
        .tense(TenseMood::PresentIndicative)
        .unwrap();

    for (person, form) in forms.iter() {
        if person == Person::ThirdSingular {
            assert_eq!(form.first(), Some("llueve"));
        } else {
            assert!(form.is_disallowed(), "{person:?}");
        }
    }

    assert!(forms.vos().is_disallowed());
}

#[test]
fn glide_accent_is_suppressed() {
    let rules = Rules::spanish().unwrap();
    let layers = own(&rules, "fiar");
    let forms = composer(&rules, "fiar", &layers)
        .tense(TenseMood::Preterite)
        .unwrap();

    assert_eq!(forms.get(Person::FirstSingular).first(), Some("fie"));
    assert_eq!(forms.get(Person::ThirdSingular).first(), Some("fio"));
    assert_eq!(forms.get(Person::FirstPlural).first(), Some("fiamos"));
}

#[test]
fn future_uses_unaccented_infinitive() {
    let rules = Rules::spanish().unwrap();
    let layers: [Layer<'_>; 0] = [];

    let forms = composer(&rules, "reír", &layers)
        .tense(TenseMood::Future)
        .unwrap();

    assert_eq!(forms.get(Person::FirstSingular).first(), Some("reiré"));
    assert_eq!(forms.get(Person::FirstPlural).first(), Some("reiremos"));
}
