use super::*;

macro_rules! participles {
    ($rules:expr, $infinitive:expr, $present:expr, $past:expr) => {{
        let resolution = resolve::resolve($rules, $infinitive).unwrap();
        let participles = derive($rules, &resolution).unwrap().unwrap();
        assert_eq!(participles.present, $present, "gerund of {}", $infinitive);
        assert_eq!(participles.past, $past, "past participle of {}", $infinitive);
        participles
    }};
}

#[test]
fn regular_verbs() {
    let rules = Rules::spanish().unwrap();

    let p = participles!(&rules, "hablar", "hablando", "hablado");
    assert!(!p.irregular_present && !p.irregular_past);

    participles!(&rules, "comer", "comiendo", "comido");
    participles!(&rules, "vivir", "viviendo", "vivido");
    participles!(&rules, "bailar", "bailando", "bailado");
}

#[test]
fn gerund_raising() {
    let rules = Rules::spanish().unwrap();

    let p = participles!(&rules, "sentir", "sintiendo", "sentido");
    assert!(p.irregular_present);
    assert!(!p.irregular_past);

    participles!(&rules, "dormir", "durmiendo", "dormido");
    participles!(&rules, "pedir", "pidiendo", "pedido");
    participles!(&rules, "poder", "pudiendo", "podido");
    participles!(&rules, "venir", "viniendo", "venido");
    participles!(&rules, "contar", "contando", "contado");
}

#[test]
fn glide_after_open_vowel() {
    let rules = Rules::spanish().unwrap();

    let p = participles!(&rules, "leer", "leyendo", "leído");
    assert!(!p.irregular_present && !p.irregular_past);

    participles!(&rules, "caer", "cayendo", "caído");
    participles!(&rules, "oír", "oyendo", "oído");
    participles!(&rules, "construir", "construyendo", "construido");
}

#[test]
fn exceptions() {
    let rules = Rules::spanish().unwrap();

    let p = participles!(&rules, "hacer", "haciendo", "hecho");
    assert!(!p.irregular_present);
    assert!(p.irregular_past);

    let p = participles!(&rules, "ir", "yendo", "ido");
    assert!(p.irregular_present);
    assert!(!p.irregular_past);

    participles!(&rules, "decir", "diciendo", "dicho");
    participles!(&rules, "reír", "riendo", "reído");
    participles!(&rules, "abrir", "abriendo", "abierto");
}

#[test]
fn family_exceptions_are_relative() {
    let rules = Rules::spanish().unwrap();
    participles!(&rules, "volver", "volviendo", "vuelto");
    participles!(&rules, "devolver", "devolviendo", "devuelto");
    participles!(&rules, "resolver", "resolviendo", "resuelto");
}

#[test]
fn derived_verbs() {
    let rules = Rules::spanish().unwrap();

    let p = participles!(&rules, "satisfacer", "satisfaciendo", "satisfecho");
    assert!(p.irregular_past);

    participles!(&rules, "deshacer", "deshaciendo", "deshecho");
    participles!(&rules, "componer", "componiendo", "compuesto");
    participles!(&rules, "sonreír", "sonriendo", "sonreído");
    participles!(&rules, "predecir", "prediciendo", "predicho");
}
