use crate::commands::{load_collection, CmdMessage, CmdResult, ListedRecord};
use crate::config::MalformedPolicy;
use crate::error::Result;
use crate::model::Record;
use crate::store::SnapshotStore;

/// Append `record` to the end of the catalog. Field contents are not validated.
pub fn run<S: SnapshotStore>(
    store: &mut S,
    policy: MalformedPolicy,
    record: Record,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut collection = load_collection(store, policy, &mut result)?;

    let index = collection.len();
    collection.push(record.clone());
    store.save(&collection)?;

    result.add_message(CmdMessage::success(format!(
        "Book added ({}): {}",
        index, record.title
    )));
    result.affected_records.push(ListedRecord::new(index, record));
    Ok(result)
}
