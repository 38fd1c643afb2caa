use luca_core::clock::FixedClock;
use luca_core::storage::{KvStorage, MemoryKvStorage};
use luca_core::store::note_store::{NewNote, NoteFilter, NoteStore};
use luca_core::NoteColor;
use chrono::NaiveDate;

fn clock_at(now_ms: i64) -> FixedClock {
    FixedClock::new(now_ms, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
}

fn note(text: &str) -> NewNote {
    NewNote {
        text: text.to_string(),
        ..NewNote::default()
    }
}

#[test]
fn listing_is_pinned_first_then_most_recent() {
    let storage = MemoryKvStorage::new();
    let mut store = NoteStore::load(&storage, true).unwrap();

    let oldest = store.add_note(&storage, &clock_at(1_000), note("oldest")).unwrap().unwrap();
    store.add_note(&storage, &clock_at(2_000), note("middle")).unwrap();
    store.add_note(&storage, &clock_at(3_000), note("newest")).unwrap();
    store.toggle_pin(&storage, oldest).unwrap();

    let texts: Vec<&str> = store
        .list(&NoteFilter::default())
        .iter()
        .map(|n| n.text.as_str())
        .collect();
    assert_eq!(texts, vec!["oldest", "newest", "middle"]);
}

#[test]
fn private_notes_stay_hidden_until_unlocked() {
    let storage = MemoryKvStorage::new();
    let mut store = NoteStore::load(&storage, true).unwrap();
    store.set_passphrase("open sesame");

    store.add_note(&storage, &clock_at(1_000), note("public")).unwrap();
    store
        .add_note(
            &storage,
            &clock_at(2_000),
            NewNote {
                text: "private".to_string(),
                private: true,
                ..NewNote::default()
            },
        )
        .unwrap();

    let all = NoteFilter {
        include_private: true,
        ..NoteFilter::default()
    };

    // Asking for private notes is not enough while locked.
    assert_eq!(store.list(&all).len(), 1);

    assert!(!store.unlock("wrong"));
    assert_eq!(store.list(&all).len(), 1);

    assert!(store.unlock("open sesame"));
    assert_eq!(store.list(&all).len(), 2);

    // Unlocked but not requested still hides them.
    assert_eq!(store.list(&NoteFilter::default()).len(), 1);
}

#[test]
fn search_matches_text_and_tags_case_insensitively() {
    let storage = MemoryKvStorage::new();
    let mut store = NoteStore::load(&storage, true).unwrap();
    store
        .add_note(
            &storage,
            &clock_at(1_000),
            NewNote {
                text: "Revise chapter three".to_string(),
                tags: vec!["Physics".to_string()],
                ..NewNote::default()
            },
        )
        .unwrap();
    store.add_note(&storage, &clock_at(2_000), note("groceries")).unwrap();

    let by_text = NoteFilter {
        search_text: Some("CHAPTER".to_string()),
        ..NoteFilter::default()
    };
    assert_eq!(store.list(&by_text).len(), 1);

    // Tags were normalized to lowercase at creation.
    let by_tag = NoteFilter {
        search_text: Some("physics".to_string()),
        ..NoteFilter::default()
    };
    assert_eq!(store.list(&by_tag).len(), 1);
}

#[test]
fn reload_round_trips_notes_and_the_use_private_flag() {
    let storage = MemoryKvStorage::new();
    let mut store = NoteStore::load(&storage, true).unwrap();
    store
        .add_note(
            &storage,
            &clock_at(1_000),
            NewNote {
                text: "keep me".to_string(),
                category: "Exams".to_string(),
                tags: vec!["math".to_string()],
                color: NoteColor::Green,
                ..NewNote::default()
            },
        )
        .unwrap();
    store.set_use_private(&storage, true).unwrap();

    let reloaded = NoteStore::load(&storage, true).unwrap();
    assert!(reloaded.use_private());
    let listed = reloaded.list(&NoteFilter::default());
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].text, "keep me");
    assert_eq!(listed[0].category, "Exams");
    assert_eq!(listed[0].tags, vec!["math".to_string()]);
    assert_eq!(listed[0].color, NoteColor::Green);

    // The passphrase is session state and never persists.
    assert!(!reloaded.is_unlocked());
}

#[test]
fn corrupt_stored_blob_falls_back_to_an_empty_store() {
    let storage = MemoryKvStorage::new();
    storage.write("notes-store", "{\"notes\": not json").unwrap();
    let store = NoteStore::load(&storage, true).unwrap();
    assert!(store.is_empty());
}
