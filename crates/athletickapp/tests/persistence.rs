mod common;

use athletickapp::api::AthletickApi;
use athletickapp::commands::{Command, MessageLevel};
use athletickapp::model::{ChangeKind, PersonListChange};
use athletickapp::store::json::JsonFileStorage;
use athletickapp::store::memory::InMemoryStorage;
use athletickapp::store::{TeamData, TeamStorage};
use common::{athlete, date, empty_api, index, record};
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use tempfile::TempDir;

fn json_storage(dir: &TempDir) -> JsonFileStorage {
    JsonFileStorage::new(
        dir.path().join("data").join("athletick.json"),
        dir.path().join("preferences.json"),
    )
}

#[test]
fn changes_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    json_storage(&dir).save_team(&TeamData::default()).unwrap();

    let mut api = AthletickApi::load(json_storage(&dir), 100).unwrap();
    api.execute(Command::Add {
        person: athlete("Wen Li", "91234567"),
    })
    .unwrap();
    api.execute(Command::AddEvent {
        name: "100m".into(),
    })
    .unwrap();
    api.execute(Command::AddRecord {
        event: "100m".into(),
        index: index(1),
        record: record("12.40", "01032021"),
    })
    .unwrap();

    let reloaded = AthletickApi::load(json_storage(&dir), 100).unwrap();
    assert_eq!(reloaded.model().athletick().len(), 1);
    assert!(reloaded.model().has_performance_on(&date("01032021")));
    assert!(!reloaded.model().can_undo());
}

#[test]
fn undo_is_persisted_too() {
    let dir = TempDir::new().unwrap();
    json_storage(&dir).save_team(&TeamData::default()).unwrap();

    let mut api = AthletickApi::load(json_storage(&dir), 100).unwrap();
    api.execute(Command::Add {
        person: athlete("Wen Li", "91234567"),
    })
    .unwrap();
    api.execute(Command::Undo).unwrap();

    let reloaded = AthletickApi::load(json_storage(&dir), 100).unwrap();
    assert!(reloaded.model().athletick().is_empty());
}

#[test]
fn unreadable_team_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let storage = json_storage(&dir);
    fs::create_dir_all(storage.team_path().parent().unwrap()).unwrap();
    fs::write(storage.team_path(), "{ \"athletick\": 42 }").unwrap();

    let api = AthletickApi::load(storage, 100).unwrap();
    assert!(api.model().athletick().is_empty());
}

#[test]
fn failed_save_keeps_the_change_and_warns() {
    let storage = InMemoryStorage::new()
        .with_team(TeamData::default())
        .failing_saves();
    let mut api = AthletickApi::load(storage, 100).unwrap();
    let result = api
        .execute(Command::Add {
            person: athlete("Wen Li", "91234567"),
        })
        .unwrap();
    assert!(result
        .messages
        .iter()
        .any(|m| m.level == MessageLevel::Warning));
    assert_eq!(api.model().athletick().len(), 1);

    let undo = api.execute(Command::Undo).unwrap();
    assert_eq!(undo.feedback, "Undone: add Wen Li");
}

#[test]
fn listeners_see_every_change_in_order() {
    let mut api = empty_api();
    let seen: Rc<RefCell<Vec<PersonListChange>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    api.model_mut()
        .subscribe(Box::new(move |change| sink.borrow_mut().push(change.clone())));

    api.execute(Command::Add {
        person: athlete("Wen Li", "91234567"),
    })
    .unwrap();
    api.execute(Command::Add {
        person: athlete("Ama Owusu", "92345678"),
    })
    .unwrap();
    api.execute(Command::Undo).unwrap();
    api.execute(Command::Clear).unwrap();

    let seen = seen.borrow();
    let versions: Vec<u64> = seen.iter().map(|c| c.version).collect();
    assert_eq!(versions, vec![1, 2, 3, 4]);
    assert!(matches!(seen[0].kind, ChangeKind::Added { index: 0, .. }));
    assert!(matches!(seen[1].kind, ChangeKind::Added { index: 1, .. }));
    assert!(matches!(seen[2].kind, ChangeKind::Removed { index: 1, .. }));
    assert!(matches!(seen[3].kind, ChangeKind::Removed { index: 0, .. }));
}
