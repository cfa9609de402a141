use super::*;

macro_rules! correct {
    ($rules:expr, $infinitive:expr, $word:expr, $expected:expr) => {
        assert_eq!(
            correct($rules, $infinitive, $word),
            $expected,
            "{} as a form of {}",
            $word,
            $infinitive
        );
    };
}

#[test]
fn before_front_vowels() {
    let rules = Rules::spanish().unwrap();
    correct!(&rules, "buscar", "buscé", "busqué");
    correct!(&rules, "buscar", "busce", "busque");
    correct!(&rules, "llegar", "llegé", "llegué");
    correct!(&rules, "empezar", "empiezes", "empieces");
    correct!(&rules, "averiguar", "averigué", "averigüé");
    correct!(&rules, "acercar", "acercé", "acerqué");
}

#[test]
fn before_back_vowels() {
    let rules = Rules::spanish().unwrap();
    correct!(&rules, "coger", "cogo", "cojo");
    correct!(&rules, "dirigir", "dirigamos", "dirijamos");
    correct!(&rules, "seguir", "siguo", "sigo");
    correct!(&rules, "distinguir", "distinguas", "distingas");
    correct!(&rules, "vencer", "venco", "venzo");
    correct!(&rules, "cocer", "cuecamos", "cuezamos");
    correct!(&rules, "delinquir", "delinquo", "delinco");
    correct!(&rules, "delinquir", "delinquas", "delincas");
}

#[test]
fn only_the_stem_final_consonant() {
    let rules = Rules::spanish().unwrap();
    correct!(&rules, "reconocer", "reconozco", "reconozco");
    correct!(&rules, "parecer", "parezca", "parezca");
    correct!(&rules, "cocer", "coceré", "coceré");
    correct!(&rules, "seguir", "siguió", "siguió");
}

#[test]
fn glide_insertion() {
    let rules = Rules::spanish().unwrap();
    correct!(&rules, "construir", "construió", "construyó");
    correct!(&rules, "construir", "construieron", "construyeron");
    correct!(&rules, "construir", "construiendo", "construyendo");
    correct!(&rules, "construir", "construido", "construido");
    correct!(&rules, "argüir", "argüió", "arguyó");
}

#[test]
fn untouched() {
    let rules = Rules::spanish().unwrap();
    correct!(&rules, "hablar", "hablé", "hablé");
    correct!(&rules, "buscar", "buscamos", "buscamos");
    correct!(&rules, "delinquir", "delinquió", "delinquió");
}

#[test]
fn idempotent() {
    let rules = Rules::spanish().unwrap();

    for (infinitive, word) in [
        ("buscar", "buscé"),
        ("coger", "coga"),
        ("vencer", "venca"),
        ("construir", "construió"),
        ("averiguar", "averigue"),
    ] {
        let once = correct(&rules, infinitive, word).into_owned();
        let twice = correct(&rules, infinitive, &once).into_owned();
        assert_eq!(once, twice, "{word}");
    }
}
