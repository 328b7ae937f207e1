use chrono::NaiveDate;
use uuid::Uuid;

use crate::age;

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
}

impl Person {
    /// Age in whole years on the given date.
    pub fn age_on(&self, reference: NaiveDate) -> i32 {
        age::calendar_age(self.date_of_birth, reference)
    }
}

/// Everything needed to create a [`Person`] except its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonSeed {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
}

impl PersonSeed {
    pub fn new(name: &str, date_of_birth: NaiveDate, email: &str) -> Self {
        Self {
            name: name.to_string(),
            date_of_birth,
            email: email.to_string(),
        }
    }

    pub fn into_person(self, id: Uuid) -> Person {
        Person {
            id,
            name: self.name,
            date_of_birth: self.date_of_birth,
            email: self.email,
        }
    }
}
