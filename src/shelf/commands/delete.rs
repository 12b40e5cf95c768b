use crate::commands::{load_collection, CmdMessage, CmdResult, ListedRecord};
use crate::config::MalformedPolicy;
use crate::error::{Result, ShelfError};
use crate::model::Criteria;
use crate::store::SnapshotStore;

/// Remove the first record matching `criteria`.
///
/// Criteria are trimmed before matching. Criteria that constrain nothing are
/// refused, otherwise an empty form would delete the first book in the catalog.
pub fn run<S: SnapshotStore>(
    store: &mut S,
    policy: MalformedPolicy,
    criteria: &Criteria,
) -> Result<CmdResult> {
    if criteria.is_wildcard() {
        return Err(ShelfError::Api(
            "Refusing to delete without any title, author or publisher".to_string(),
        ));
    }

    let mut result = CmdResult::default();
    let mut collection = load_collection(store, policy, &mut result)?;

    let trimmed = criteria.trimmed();
    let Some(index) = collection.search(&trimmed).first().map(|(index, _)| *index) else {
        result.add_message(CmdMessage::info("Book not found"));
        return Ok(result);
    };

    let removed = collection.remove_at(index as i64)?;
    store.save(&collection)?;

    result.add_message(CmdMessage::success(format!(
        "Deleted book at index {}: {}",
        index, removed.title
    )));
    result.affected_records.push(ListedRecord::new(index, removed));
    Ok(result)
}
