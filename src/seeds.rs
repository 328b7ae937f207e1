use std::collections::HashSet;

use chrono::NaiveDate;
use rand::Rng;

use crate::models::PersonSeed;

const FIRST_NAMES: [&str; 10] = [
    "Tom", "Johnny", "Jim", "Eric", "Amanda", "Grace", "Judy", "Frank", "Sally", "Will",
];
const LAST_NAMES: [&str; 10] = [
    "Connor",
    "Henderson",
    "Farley",
    "Henson",
    "Jeffries",
    "Carlin",
    "Anderson",
    "O'Sullivan",
    "Dorothy",
    "McDougal",
];

const EARLIEST_BIRTH_YEAR: i32 = 1940;
const LATEST_BIRTH_YEAR: i32 = 2005;

/// Picks `count` people with distinct birth years.
///
/// Days are capped at 28 so every month yields a real date.
pub fn random_seeds<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<PersonSeed> {
    let span = (LATEST_BIRTH_YEAR - EARLIEST_BIRTH_YEAR + 1) as usize;
    let count = count.min(span);

    let mut years = HashSet::with_capacity(count);
    let mut seeds = Vec::with_capacity(count);

    while seeds.len() < count {
        let year = rng.random_range(EARLIEST_BIRTH_YEAR..=LATEST_BIRTH_YEAR);
        if years.contains(&year) {
            continue;
        }

        let month = rng.random_range(1..=12);
        let day = rng.random_range(1..=28);
        let Some(date_of_birth) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        years.insert(year);

        let first_name = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
        let last_name = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
        let email = format!("{}.{}_{}@somemail.com", first_name, last_name, year)
            .to_lowercase()
            .replace('\'', "");

        seeds.push(PersonSeed::new(
            &format!("{} {}", first_name, last_name),
            date_of_birth,
            &email,
        ));
    }

    seeds
}
