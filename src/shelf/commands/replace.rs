use crate::commands::{load_collection, CmdMessage, CmdResult, ListedRecord};
use crate::config::MalformedPolicy;
use crate::error::Result;
use crate::model::Record;
use crate::store::SnapshotStore;

pub fn run<S: SnapshotStore>(
    store: &mut S,
    policy: MalformedPolicy,
    index: i64,
    record: Record,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut collection = load_collection(store, policy, &mut result)?;

    let previous = collection.replace_at(index, record.clone())?;
    store.save(&collection)?;

    result.add_message(CmdMessage::success(format!(
        "Replaced book at index {}: {} -> {}",
        index, previous.title, record.title
    )));
    result
        .affected_records
        .push(ListedRecord::new(index as usize, record));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn overwrites_in_place() {
        let mut store = StoreFixture::new().with_numbered(3).build();
        let record = Record::new("Dune", "Herbert", "Ace");
        run(&mut store, MalformedPolicy::Fail, 1, record.clone()).unwrap();

        let collection = store.load().unwrap();
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.get(1), Some(&record));
        assert_eq!(collection.get(2).unwrap().title, "Book 3");
    }

    #[test]
    fn out_of_range_writes_nothing() {
        let mut store = StoreFixture::new().with_numbered(1).build();
        let err = run(&mut store, MalformedPolicy::Fail, 1, Record::default()).unwrap_err();
        assert!(matches!(err, ShelfError::IndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(store.save_count(), 0);
    }
}
