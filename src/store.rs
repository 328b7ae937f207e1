use std::collections::{HashMap, HashSet, hash_map};

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use uuid::Uuid;

use crate::age::{self, Ranked};
use crate::error::{RecordError, Result};
use crate::models::{Person, PersonSeed};
use crate::seeds;

/// Number of people every collection holds.
pub const RECORD_COUNT: usize = 5;

/// People keyed by id. Only [`PeopleBuilder`] creates one, and it is never
/// modified afterwards.
#[derive(Debug, Clone)]
pub struct People {
    records: HashMap<Uuid, Person>,
}

impl People {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.records.contains_key(id)
    }

    /// Lookup where a missing id is an ordinary outcome.
    pub fn get(&self, id: &Uuid) -> Option<&Person> {
        self.records.get(id)
    }

    /// Lookup where a missing id is an error.
    pub fn require(&self, id: &Uuid) -> Result<&Person> {
        self.records
            .get(id)
            .ok_or(RecordError::NotFound { id: *id })
    }

    pub fn iter(&self) -> hash_map::Values<'_, Uuid, Person> {
        self.records.values()
    }

    pub fn ids(&self) -> hash_map::Keys<'_, Uuid, Person> {
        self.records.keys()
    }

    pub fn by_age(&self, reference: NaiveDate) -> Vec<Ranked<'_>> {
        age::rank_by_age(self, reference)
    }

    pub fn oldest_age(&self, reference: NaiveDate) -> Result<i32> {
        age::oldest_age(self, reference)
    }
}

impl<'a> IntoIterator for &'a People {
    type Item = &'a Person;
    type IntoIter = hash_map::Values<'a, Uuid, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

pub struct PeopleBuilder {
    next_id: Box<dyn FnMut() -> Uuid>,
}

impl Default for PeopleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PeopleBuilder {
    pub fn new() -> Self {
        Self::with_id_source(Uuid::now_v7)
    }

    pub fn with_id_source<F>(next_id: F) -> Self
    where
        F: FnMut() -> Uuid + 'static,
    {
        Self {
            next_id: Box::new(next_id),
        }
    }

    /// Builds the collection from caller-supplied seeds.
    ///
    /// Either every seed becomes a record or nothing is returned.
    pub fn build(&mut self, seeds: Vec<PersonSeed>) -> Result<People> {
        tracing::info!("Building {} person records", seeds.len());

        let start = std::time::Instant::now();

        if seeds.len() != RECORD_COUNT {
            return Err(RecordError::WrongRecordCount {
                expected: RECORD_COUNT,
                actual: seeds.len(),
            });
        }

        // All years are checked before the first id is drawn
        let mut years = HashSet::with_capacity(RECORD_COUNT);
        for seed in &seeds {
            let year = seed.date_of_birth.year();
            if !years.insert(year) {
                tracing::warn!("Birth year {} appears more than once", year);
                return Err(RecordError::DuplicateYear { year });
            }
        }

        let mut records = HashMap::with_capacity(RECORD_COUNT);
        for seed in seeds {
            let id = (self.next_id)();
            match records.entry(id) {
                hash_map::Entry::Occupied(_) => {
                    tracing::warn!("Identifier {} was generated twice", id);
                    return Err(RecordError::DuplicateIdentifier { id });
                }
                hash_map::Entry::Vacant(slot) => {
                    tracing::debug!("Inserting {} as {}", seed.name, id);
                    slot.insert(seed.into_person(id));
                }
            }
        }

        tracing::info!("Person records built in {:?}", start.elapsed());

        Ok(People { records })
    }

    /// Builds the collection from randomly picked people.
    pub fn build_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<People> {
        self.build(seeds::random_seeds(rng, RECORD_COUNT))
    }
}

/// Five random people with fresh UUIDv7 ids.
pub fn build_records() -> Result<People> {
    PeopleBuilder::new().build_random(&mut rand::rng())
}
