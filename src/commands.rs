use chrono::NaiveDate;
use clap::{Args as ClapArgs, Parser, Subcommand, command};

#[derive(Parser)]
#[command()]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the person records and list them, oldest first
    List(BuildArgs),
    /// Build the person records and print the oldest person's age
    Oldest(BuildArgs),
}

#[derive(ClapArgs)]
pub struct BuildArgs {
    /// Seed for the random generator, for repeatable people
    #[arg(long)]
    pub seed: Option<u64>,
    /// Date the ages are computed on (YYYY-MM-DD), defaults to today
    #[arg(long, env = "REFERENCE_DATE")]
    pub reference_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_oldest_with_reference_date() {
        let args = Args::parse_from(["peoplers", "oldest", "--reference-date", "2024-06-15"]);
        match args.command {
            Some(Commands::Oldest(build)) => {
                assert_eq!(build.reference_date, NaiveDate::from_ymd_opt(2024, 6, 15));
                assert_eq!(build.seed, None);
            }
            _ => panic!("expected the oldest subcommand"),
        }
    }

    #[test]
    fn parses_list_with_seed() {
        let args = Args::parse_from(["peoplers", "list", "--seed", "42"]);
        assert!(matches!(
            args.command,
            Some(Commands::List(BuildArgs { seed: Some(42), .. }))
        ));
    }

    #[test]
    fn rejects_malformed_dates() {
        let result = Args::try_parse_from(["peoplers", "oldest", "--reference-date", "15/06/2024"]);
        assert!(result.is_err());
    }
}
