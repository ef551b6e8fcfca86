//! Team data used on first launch, when nothing has been saved yet.

use crate::error::ModelError;
use crate::model::{
    Address, Athletick, AthletickDate, Email, Event, Gender, Name, Person, Phone, Record, Tag,
    Timing, Training, YearJoined,
};
use crate::store::TeamData;
use std::collections::BTreeSet;

fn person(
    name: &str,
    phone: &str,
    email: &str,
    address: &str,
    gender: Gender,
    year_joined: u16,
    tags: &[&str],
) -> Result<Person, ModelError> {
    let tags = tags
        .iter()
        .map(|t| Tag::new(*t))
        .collect::<Result<BTreeSet<_>, _>>()?;
    Ok(Person::new(
        Name::new(name)?,
        Phone::new(phone)?,
        Email::new(email)?,
        Address::new(address)?,
        gender,
        YearJoined::new(year_joined)?,
        tags,
    ))
}

fn sample_persons() -> Result<Vec<Person>, ModelError> {
    Ok(vec![
        person(
            "Alex Yeoh",
            "87438807",
            "alexyeoh@example.com",
            "Blk 30 Geylang Street 29",
            Gender::Male,
            2018,
            &["sprinter"],
        )?,
        person(
            "Bernice Yu",
            "99272758",
            "berniceyu@example.com",
            "Blk 30 Lorong 3 Serangoon Gardens",
            Gender::Female,
            2019,
            &["captain", "sprinter"],
        )?,
        person(
            "Charlotte Oliveiro",
            "93210283",
            "charlotte@example.com",
            "Blk 11 Ang Mo Kio Street 74",
            Gender::Female,
            2019,
            &[],
        )?,
        person(
            "David Li",
            "91031282",
            "lidavid@example.com",
            "Blk 436 Serangoon Gardens Street 26",
            Gender::Male,
            2020,
            &["jumper"],
        )?,
    ])
}

/// A small team with one event, a few records and one training session.
pub fn sample_team() -> Result<TeamData, ModelError> {
    let persons = sample_persons()?;
    let mut team = TeamData {
        athletick: Athletick::from_persons(persons.clone())?,
        ..Default::default()
    };

    let first_session = AthletickDate::from_ymd(2020, 1, 6)?;
    let mut training = Training::new(first_session, &persons);
    for present in persons.iter().take(3) {
        training.mark_present(present)?;
    }
    team.attendance.add_training(training)?;

    team.performance.add_event(Event::new("100m")?)?;
    for (athlete, timing) in persons.iter().zip(["12.30", "12.85", "13.10"]) {
        let record = Record::new(timing.parse::<Timing>()?, first_session);
        team.performance.add_record("100m", athlete, record)?;
    }
    Ok(team)
}
