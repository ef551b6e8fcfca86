#![allow(dead_code)]

use athletickapp::api::AthletickApi;
use athletickapp::commands::{execute, Command, Index};
use athletickapp::model::{
    Address, Athletick, AthletickDate, Attendance, Email, Gender, HistoryManager, Model, Name,
    Performance, Person, Phone, Record, UserPrefs, YearJoined,
};
use athletickapp::store::memory::InMemoryStorage;
use athletickapp::store::TeamData;
use std::collections::BTreeSet;

pub fn athlete(name: &str, phone: &str) -> Person {
    let slug: String = name.split_whitespace().collect::<String>().to_lowercase();
    Person::new(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new(format!("{slug}@example.com")).unwrap(),
        Address::new("1 Stadium Road").unwrap(),
        Gender::Female,
        YearJoined::new(2020).unwrap(),
        BTreeSet::new(),
    )
}

pub fn date(input: &str) -> AthletickDate {
    input.parse().unwrap()
}

pub fn record(timing: &str, on: &str) -> Record {
    Record::new(timing.parse().unwrap(), date(on))
}

pub fn index(one_based: usize) -> Index {
    Index::from_one_based(one_based).unwrap()
}

pub fn empty_model() -> Model {
    Model::new(
        Athletick::new(),
        Performance::new(),
        Attendance::new(),
        UserPrefs::default(),
        HistoryManager::new(),
    )
}

pub fn run(model: &mut Model, command: Command) {
    execute(model, command).unwrap();
}

pub fn empty_api() -> AthletickApi<InMemoryStorage> {
    AthletickApi::load(InMemoryStorage::new().with_team(TeamData::default()), 100).unwrap()
}
