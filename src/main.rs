use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use conjugar::{Conjugation, Conjugator, Person, Rules, TenseMood, VerbForm};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// Infinitives to conjugate.
    #[arg(name = "infinitives")]
    infinitives: Vec<String>,
    /// Only show the specified tense-moods. Defaults to all of them.
    #[arg(long = "tense", name = "tense")]
    tenses: Vec<String>,
    /// List available tense-moods and exit.
    #[arg(long)]
    list_tenses: bool,
    /// Show the gerund and the past participle.
    #[arg(long)]
    participles: bool,
    /// Show the voseo form next to the second person singular.
    #[arg(long)]
    vos: bool,
    /// Load rule tables from the given path instead of the built-in ones.
    #[arg(long)]
    rules: Option<PathBuf>,
}

fn print_form(label: &str, form: &VerbForm) {
    if form.is_disallowed() {
        return;
    }

    println!("    {label:<16} {form}");
}

fn print_conjugation(tense: TenseMood, conjugation: &Conjugation, vos: bool) {
    println!("  {} ({tense}):", tense.describe());

    for (person, form) in conjugation.forms.iter() {
        print_form(person.pronoun(), form);

        if vos && person == Person::SecondSingular {
            print_form("vos", conjugation.forms.vos());
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    if args.list_tenses {
        println!("Available `--tense` arguments:");

        for tense in TenseMood::ALL {
            println!("{} - {}", tense.ident(), tense.describe());
        }

        return Ok(());
    }

    let mut tenses = Vec::new();

    for tense in &args.tenses {
        let tense = TenseMood::parse_keyword(tense)
            .with_context(|| anyhow!("Invalid tense-mood `{tense}`"))?;
        tenses.push(tense);
    }

    if tenses.is_empty() {
        tenses.extend(TenseMood::ALL);
    }

    let rules = match &args.rules {
        Some(path) => Rules::load(path).with_context(|| anyhow!("{}", path.display()))?,
        None => Rules::spanish()?,
    };

    tracing::debug!(verbs = rules.len(), "loaded rules");

    let conjugator = Conjugator::new(&rules);

    for infinitive in &args.infinitives {
        let resolution = match conjugator.resolve(infinitive) {
            Ok(resolution) => resolution,
            Err(error) if error.is_unclassified() => {
                println!("{infinitive}: {error}");
                continue;
            }
            Err(error) => return Err(error.into()),
        };

        println!("{infinitive} ({}, {})", resolution.family, resolution.model);

        if resolution.unconfirmed {
            println!("  warning: `{infinitive}` is unknown, conjugated as a regular verb");
        }

        if args.participles {
            if let Some(participles) = conjugator.derive_participles(infinitive)? {
                let mark = |irregular: bool| if irregular { " (irregular)" } else { "" };

                println!("  gerundio: {}{}", participles.present, mark(participles.irregular_present));
                println!("  participio: {}{}", participles.past, mark(participles.irregular_past));
            }
        }

        for &tense in &tenses {
            let conjugation = conjugator
                .conjugate(infinitive, tense)
                .with_context(|| anyhow!("Conjugating `{infinitive}` in {tense}"))?;

            print_conjugation(tense, &conjugation, args.vos);
        }
    }

    Ok(())
}
