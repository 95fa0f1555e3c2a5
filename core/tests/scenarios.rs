// SPDX-FileCopyrightText: 2026 Calboard contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::rc::Rc;

use calboard_core::{
    Deletion, Error, EventId, EventStore, Gesture, JsonFileMirror, MemoryMirror, Planner,
    SessionMirror, Submit, seed_events,
};
use chrono::{NaiveDate, NaiveDateTime};

/// Mirror handle that stays inspectable after being boxed into the store.
#[derive(Clone, Default)]
struct SharedMirror(Rc<RefCell<MemoryMirror>>);

impl SharedMirror {
    fn raw(&self) -> Option<String> {
        self.0.borrow().raw().map(str::to_string)
    }
}

impl SessionMirror for SharedMirror {
    fn load(&self) -> Result<Option<Vec<calboard_core::Event>>, Error> {
        self.0.borrow().load()
    }

    fn save(&mut self, events: &[calboard_core::Event]) -> Result<(), Error> {
        self.0.borrow_mut().save(events)
    }

    fn clear(&mut self) -> Result<(), Error> {
        self.0.borrow_mut().clear()
    }
}

struct ConfirmWith(bool);

impl calboard_core::Confirm for ConfirmWith {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

#[derive(Clone, Default)]
struct NoteLog(Rc<RefCell<Vec<String>>>);

impl calboard_core::Notify for NoteLog {
    fn notify(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().into()
}

fn planner(confirm: bool) -> (Planner, SharedMirror, NoteLog) {
    let mirror = SharedMirror::default();
    let notes = NoteLog::default();
    let store = EventStore::hydrate(Box::new(mirror.clone()));
    let planner = Planner::new(store, Box::new(ConfirmWith(confirm)), Box::new(notes.clone()));
    (planner, mirror, notes)
}

fn assert_mirror_matches(planner: &Planner, mirror: &SharedMirror) {
    let expected = serde_json::to_string(planner.events()).unwrap();
    assert_eq!(mirror.raw().as_deref(), Some(expected.as_str()));
}

#[test]
fn mirror_matches_list_after_every_mutation() {
    let (mut planner, mirror, _) = planner(true);

    planner
        .handle(Gesture::SlotSelected {
            start: dt(2023, 1, 10),
            end: dt(2023, 1, 12),
        })
        .unwrap();
    planner.form_mut().title = "Trip".to_string();
    assert!(matches!(planner.submit().unwrap(), Submit::Created(_)));
    assert_mirror_matches(&planner, &mirror);

    planner.handle(Gesture::EventSelected(EventId(2))).unwrap();
    planner.form_mut().title = "Renamed".to_string();
    assert!(matches!(planner.submit().unwrap(), Submit::Updated(_)));
    assert_mirror_matches(&planner, &mirror);

    planner
        .handle(Gesture::EventResized {
            id: EventId(3),
            start: dt(2022, 11, 5),
            end: dt(2022, 11, 7),
        })
        .unwrap();
    assert_mirror_matches(&planner, &mirror);

    planner.handle(Gesture::EventSelected(EventId(4))).unwrap();
    assert!(matches!(planner.delete().unwrap(), Deletion::Deleted(_)));
    assert_mirror_matches(&planner, &mirror);
}

#[test]
fn hydrate_reproduces_last_persisted_list() {
    let (mut planner, mirror, _) = planner(true);
    planner
        .handle(Gesture::EventDropped {
            id: EventId(1),
            start: dt(2022, 10, 28),
            end: dt(2022, 10, 31),
        })
        .unwrap();
    let snapshot = planner.events().to_vec();
    drop(planner); // session ends without teardown

    let rehydrated = EventStore::hydrate(Box::new(mirror));
    assert_eq!(rehydrated.events(), snapshot);
    assert_ne!(rehydrated.events(), seed_events());
}

#[test]
fn teardown_resets_to_seed_set() {
    let (mut planner, mirror, _) = planner(true);
    planner
        .handle(Gesture::EventDropped {
            id: EventId(1),
            start: dt(2022, 10, 28),
            end: dt(2022, 10, 31),
        })
        .unwrap();
    planner.close_session().unwrap();

    assert_eq!(mirror.raw(), None);
    let rehydrated = EventStore::hydrate(Box::new(mirror));
    assert_eq!(rehydrated.events(), seed_events());
}

#[test]
fn each_empty_field_blocks_creation() {
    for missing in ["title", "start", "end"] {
        let (mut planner, mirror, notes) = planner(true);
        planner
            .handle(Gesture::SlotSelected {
                start: dt(2023, 1, 10),
                end: dt(2023, 1, 12),
            })
            .unwrap();
        {
            let form = planner.form_mut();
            form.title = "Trip".to_string();
            match missing {
                "title" => form.title.clear(),
                "start" => form.start_date.clear(),
                _ => form.end_date.clear(),
            }
        }

        assert_eq!(planner.submit().unwrap(), Submit::Rejected, "{missing}");
        assert_eq!(planner.events(), seed_events());
        assert!(planner.form().open, "form must stay open");
        assert_eq!(
            notes.0.borrow().as_slice(),
            ["All fields are required !"],
            "{missing}"
        );
        // nothing was persisted, so the mirror still holds no entry
        assert_eq!(mirror.raw(), None);
    }
}

#[test]
fn delete_is_unreachable_without_selection() {
    let (mut planner, _, _) = planner(true);
    assert!(matches!(planner.delete(), Err(Error::NothingSelected)));

    // a slot selection is a create flow and must not unlock delete either
    planner
        .handle(Gesture::SlotSelected {
            start: dt(2023, 1, 10),
            end: dt(2023, 1, 12),
        })
        .unwrap();
    assert!(!planner.form().delete_visible);
    assert!(matches!(planner.delete(), Err(Error::NothingSelected)));
}

#[test]
fn scenario_drag_shifts_one_event() {
    let (mut planner, mirror, _) = planner(true);
    planner
        .handle(Gesture::EventDropped {
            id: EventId(1),
            start: dt(2022, 10, 28),
            end: dt(2022, 10, 31),
        })
        .unwrap();

    assert_eq!(planner.events().len(), 4);
    let moved = &planner.events()[0];
    assert_eq!(moved.id, EventId(1));
    assert_eq!(moved.title, "Test event 1");
    assert_eq!(moved.start, dt(2022, 10, 28));
    assert_eq!(moved.end, dt(2022, 10, 31));
    assert_eq!(&planner.events()[1..], &seed_events()[1..]);
    assert_mirror_matches(&planner, &mirror);
}

#[test]
fn scenario_create_from_slot() {
    let (mut planner, mirror, _) = planner(true);
    planner
        .handle(Gesture::SlotSelected {
            start: dt(2023, 1, 10),
            end: dt(2023, 1, 12),
        })
        .unwrap();
    assert_eq!(planner.form().start_date, "2023-01-10");
    assert_eq!(planner.form().end_date, "2023-01-12");

    planner.form_mut().title = "Trip".to_string();
    let Submit::Created(created) = planner.submit().unwrap() else {
        panic!("expected a creation");
    };

    assert_eq!(planner.events().len(), 5);
    assert_eq!(created.title, "Trip");
    assert_eq!(created.start, dt(2023, 1, 10));
    assert_eq!(created.end, dt(2023, 1, 12));
    assert!(!(1..=4).contains(&created.id.0));
    assert!(!planner.form().open, "form closes after a successful submit");
    assert_mirror_matches(&planner, &mirror);
}

#[test]
fn scenario_rename_existing_event() {
    let (mut planner, mirror, _) = planner(true);
    planner.handle(Gesture::EventSelected(EventId(2))).unwrap();
    planner.form_mut().title = "Renamed".to_string();

    let Submit::Updated(updated) = planner.submit().unwrap() else {
        panic!("expected an update");
    };

    assert_eq!(planner.events().len(), 4);
    assert_eq!(updated.id, EventId(2));
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.start, seed_events()[1].start);
    assert_eq!(updated.end, seed_events()[1].end);
    assert_eq!(planner.events()[1].title, "Renamed");
    assert_mirror_matches(&planner, &mirror);
}

#[test]
fn scenario_confirmed_delete() {
    let (mut planner, mirror, _) = planner(true);
    planner.handle(Gesture::EventSelected(EventId(3))).unwrap();

    let Deletion::Deleted(deleted) = planner.delete().unwrap() else {
        panic!("expected a deletion");
    };

    assert_eq!(deleted.id, EventId(3));
    let ids: Vec<u32> = planner.events().iter().map(|e| e.id.0).collect();
    assert_eq!(ids, vec![1, 2, 4]);
    assert!(!planner.form().open);
    assert_mirror_matches(&planner, &mirror);
}

#[test]
fn scenario_declined_delete_changes_nothing() {
    let (mut planner, mirror, _) = planner(false);
    planner.handle(Gesture::EventSelected(EventId(4))).unwrap();

    assert_eq!(planner.delete().unwrap(), Deletion::Declined);
    assert_eq!(planner.events(), seed_events());
    assert!(planner.form().open, "form stays open after a declined prompt");
    assert_eq!(
        planner.form().selected.as_ref().map(|s| s.id),
        Some(EventId(4))
    );
    assert_eq!(mirror.raw(), None);
}

#[test]
fn file_mirror_holds_exact_serialization() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut store = EventStore::hydrate(Box::new(JsonFileMirror::new(&path)));
    store
        .move_or_resize(EventId(2), dt(2022, 10, 4), dt(2022, 10, 5))
        .unwrap();

    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, serde_json::to_string(store.events()).unwrap());

    store.close().unwrap();
    assert!(!path.exists());
}
