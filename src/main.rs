use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

mod commands;

use commands::{Args, BuildArgs, Commands};
use people_map::{People, PeopleBuilder, age, store};

fn build_people(args: &BuildArgs) -> Result<People> {
    let people = match args.seed {
        Some(seed) => {
            tracing::info!("Using seed {} for person records", seed);
            PeopleBuilder::new().build_random(&mut StdRng::seed_from_u64(seed))
        }
        None => store::build_records(),
    };

    people.context("Could not build person records")
}

fn list_people(args: &BuildArgs) -> Result<()> {
    let people = build_people(args)?;
    let reference = args.reference_date.unwrap_or_else(age::today);

    tracing::info!("Ranking people by age on {}", reference);

    for ranked in people.by_age(reference) {
        let person = ranked.person;
        println!(
            "{}  {:<20} {}  {:>3}  {}",
            person.id, person.name, person.date_of_birth, ranked.age, person.email
        );
    }

    Ok(())
}

fn print_oldest(args: &BuildArgs) -> Result<()> {
    let people = build_people(args)?;
    let reference = args.reference_date.unwrap_or_else(age::today);

    let oldest = age::oldest(&people, reference).context("Could not find the oldest person")?;

    tracing::info!(
        "Oldest person is {} born on {}",
        oldest.person.name,
        oldest.person.date_of_birth
    );
    println!("{}", oldest.age);

    Ok(())
}

fn main() -> Result<()> {
    // A missing .env file is fine, anything set there only fills in defaults
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e).context("Could not load .env file");
        }
    }

    tracing_subscriber::fmt::init();

    let cli = Args::parse();
    match cli.command {
        Some(Commands::List(args)) => list_people(&args)?,
        Some(Commands::Oldest(args)) => print_oldest(&args)?,
        None => {
            println!("Run with --help to see instructions");
        }
    }

    Ok(())
}
