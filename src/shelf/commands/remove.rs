use crate::commands::{load_collection, CmdMessage, CmdResult, ListedRecord};
use crate::config::MalformedPolicy;
use crate::error::Result;
use crate::store::SnapshotStore;

/// Remove the record at `index`. Records after it move up one position.
///
/// An index outside the catalog fails with `IndexOutOfRange` and nothing is written.
pub fn run<S: SnapshotStore>(
    store: &mut S,
    policy: MalformedPolicy,
    index: i64,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut collection = load_collection(store, policy, &mut result)?;

    let removed = collection.remove_at(index)?;
    store.save(&collection)?;

    result.add_message(CmdMessage::success(format!(
        "Deleted book at index: {}",
        index
    )));
    result
        .affected_records
        .push(ListedRecord::new(index as usize, removed));
    Ok(result)
}
