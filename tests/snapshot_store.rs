use shelf::collection::Collection;
use shelf::commands::{add, list, update};
use shelf::config::MalformedPolicy;
use shelf::model::{Criteria, Record};
use shelf::store::fs::FileStore;
use shelf::store::SnapshotStore;
use std::fs;
use tempfile::TempDir;

const POLICY: MalformedPolicy = MalformedPolicy::Fail;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join(".shelf"));
    (dir, store)
}

#[test]
fn every_operation_reloads_from_disk() {
    let (dir, mut store) = setup();
    add::run(&mut store, POLICY, Record::new("Dune", "Herbert", "Ace")).unwrap();

    // Another writer replaces the file between operations.
    fs::write(
        dir.path().join(".shelf").join("items.json"),
        r#"[{"title":"Foundation","author":"Asimov","publisher":"Gnome"}]"#,
    )
    .unwrap();

    let listed = list::run(&store, POLICY).unwrap().listed_records;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].record.title, "Foundation");
}

#[test]
fn stale_save_loses_interleaved_add() {
    let (_dir, mut store) = setup();
    add::run(&mut store, POLICY, Record::new("Dune", "Herbert", "Ace")).unwrap();

    // Writer A loads, writer B adds, writer A saves what it loaded.
    let stale = store.load().unwrap();
    let mut other = FileStore::new(store.root().to_path_buf());
    add::run(&mut other, POLICY, Record::new("Foundation", "Asimov", "Gnome")).unwrap();
    assert_eq!(store.load().unwrap().len(), 2);

    store.save(&stale).unwrap();
    let after = store.load().unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after.get(0).unwrap().title, "Dune");
}

#[test]
fn update_round_trips_through_file() {
    let (_dir, mut store) = setup();
    store
        .save(&Collection::from(vec![
            Record::new("X", "X", "Y"),
            Record::new("Dune", "Herbert", "Ace"),
        ]))
        .unwrap();

    update::run(&mut store, POLICY, &Criteria::new(), "X", "Z").unwrap();
    update::run(
        &mut store,
        POLICY,
        &Criteria::new().with_author("herbert"),
        "Ace",
        "Chilton",
    )
    .unwrap();

    let collection = store.load().unwrap();
    assert_eq!(
        collection.records(),
        &[
            Record::new("Z", "X", "Y"),
            Record::new("Dune", "Herbert", "Chilton"),
        ]
    );
}

#[test]
fn missing_fields_in_snapshot_get_placeholders() {
    let (dir, store) = setup();
    fs::create_dir_all(dir.path().join(".shelf")).unwrap();
    fs::write(
        dir.path().join(".shelf").join("items.json"),
        r#"[{"title":"Dune"}]"#,
    )
    .unwrap();

    let collection = store.load().unwrap();
    assert_eq!(
        collection.get(0),
        Some(&Record::new("Dune", "Unknown Author", "Unknown Publication"))
    );
}
