use super::*;

use crate::rules::Rules;

macro_rules! rewrite {
    ($word:expr, $remove:expr, $add:expr, $expected:expr) => {
        assert_eq!(
            rewrite($word, $remove, $add).unwrap(),
            $expected,
            "{} with {:?} replaced by {:?}",
            $word,
            $remove,
            $add
        );
    };
}

fn person_forms(words: [&str; 6]) -> PersonForms {
    let mut forms = PersonForms::disallowed();

    for (person, word) in Person::ALL.into_iter().zip(words) {
        forms.set(person, VerbForm::One(word.into()));
    }

    forms
}

#[test]
fn rewrite_prefixes() {
    rewrite!("tengo", "", "man", "mantengo");
    rewrite!("ten", "", "man", "mantén");
    rewrite!("pon", "", "com", "compón");
    rewrite!("vio", "", "pre", "previó");
    rewrite!("vi", "", "pre", "preví");
    rewrite!("rió", "", "son", "sonrió");
    rewrite!("sal", "", "sobre", "sobresal");
    rewrite!("hago", "h", "satisf", "satisfago");
    rewrite!("haz", "h", "satisf", "satisfaz");
    rewrite!("hecho", "h", "satisf", "satisfecho");
}

#[test]
fn rewrite_requires_prefix() {
    assert!(rewrite("dijo", "h", "satisf").is_err());
}

#[test]
fn derive_every_person() {
    let mut forms = person_forms(["vengo", "vienes", "viene", "venimos", "venís", "vienen"]);
    forms.set_vos(Some(VerbForm::One("venís".into())));

    derive(&mut forms, "", "pre").unwrap();

    assert_eq!(forms.get(Person::FirstSingular).first(), Some("prevengo"));
    assert_eq!(forms.get(Person::ThirdPlural).first(), Some("previenen"));
    assert_eq!(forms.vos().first(), Some("prevenís"));
}

#[test]
fn literal_forms_win() {
    let rules = Rules::spanish().unwrap();
    let layers = [Layer {
        rules: rules.verb("hacer").unwrap(),
        prefix: "",
    }];

    let mut forms = person_forms(["hice", "hiciste", "hico", "hicimos", "hicisteis", "hicieron"]);
    literals(&mut forms, &layers, TenseMood::Preterite);

    assert_eq!(forms.get(Person::FirstSingular).first(), Some("hice"));
    assert_eq!(forms.get(Person::ThirdSingular).first(), Some("hizo"));
}

#[test]
fn accent_overrides() {
    let rules = Rules::spanish().unwrap();
    let layers = [Layer {
        rules: rules.verb("prohibir").unwrap(),
        prefix: "",
    }];

    let mut forms = person_forms([
        "prohibo",
        "prohibes",
        "prohibe",
        "prohibimos",
        "prohibís",
        "prohiben",
    ]);

    accents(&mut forms, &layers, TenseMood::PresentIndicative).unwrap();

    assert_eq!(forms.get(Person::FirstSingular).first(), Some("prohíbo"));
    assert_eq!(forms.get(Person::FirstPlural).first(), Some("prohibimos"));
    assert_eq!(forms.get(Person::ThirdPlural).first(), Some("prohíben"));

    let mut forms = person_forms(["a", "b", "c", "d", "e", "f"]);
    assert!(accents(&mut forms, &layers, TenseMood::PresentIndicative).is_err());
}

#[test]
fn accent_drops() {
    let pair = AccentPair::parse("rió:rio").unwrap();
    let mut forms = person_forms(["reí", "reíste", "rió", "reímos", "reísteis", "rieron"]);

    drop_accents(&mut forms, &[&pair]);

    assert_eq!(forms.get(Person::FirstSingular).first(), Some("reí"));
    assert_eq!(forms.get(Person::ThirdSingular).first(), Some("rio"));
}
