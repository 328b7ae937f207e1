use chrono::{Datelike, Local, NaiveDate};

use crate::error::{RecordError, Result};
use crate::models::Person;

/// The local wall-clock date, used when no reference date is given.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole years between a birth date and a reference date.
///
/// The year difference is reduced by one while the birthday has not yet
/// come round in the reference year, so someone born on 29 February turns
/// a year older on 1 March in common years.
pub fn calendar_age(date_of_birth: NaiveDate, reference: NaiveDate) -> i32 {
    let age = reference.year() - date_of_birth.year();
    if (reference.month(), reference.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age - 1
    } else {
        age
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<'a> {
    pub age: i32,
    pub person: &'a Person,
}

/// Orders people oldest first into a fresh vector. The source collection is
/// left untouched.
pub fn rank_by_age<'a, I>(people: I, reference: NaiveDate) -> Vec<Ranked<'a>>
where
    I: IntoIterator<Item = &'a Person>,
{
    let mut ranked: Vec<Ranked<'a>> = people
        .into_iter()
        .map(|person| Ranked {
            age: person.age_on(reference),
            person,
        })
        .collect();

    // Equal ages fall back to the smaller id
    ranked.sort_by(|a, b| {
        b.age
            .cmp(&a.age)
            .then_with(|| a.person.id.cmp(&b.person.id))
    });

    ranked
}

pub fn oldest<'a, I>(people: I, reference: NaiveDate) -> Result<Ranked<'a>>
where
    I: IntoIterator<Item = &'a Person>,
{
    let oldest = rank_by_age(people, reference)
        .into_iter()
        .next()
        .ok_or(RecordError::EmptyCollection)?;

    tracing::debug!(
        "Oldest person is {} ({}) at {} years",
        oldest.person.name,
        oldest.person.id,
        oldest.age
    );

    Ok(oldest)
}

pub fn oldest_age<'a, I>(people: I, reference: NaiveDate) -> Result<i32>
where
    I: IntoIterator<Item = &'a Person>,
{
    oldest(people, reference).map(|ranked| ranked.age)
}
