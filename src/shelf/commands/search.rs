use crate::commands::{load_collection, CmdResult, ListedRecord};
use crate::config::MalformedPolicy;
use crate::error::Result;
use crate::model::Criteria;
use crate::store::SnapshotStore;

/// All records matching `criteria`, in catalog order, with their positions.
pub fn run<S: SnapshotStore>(
    store: &S,
    policy: MalformedPolicy,
    criteria: &Criteria,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let collection = load_collection(store, policy, &mut result)?;

    let matches = collection
        .search(criteria)
        .into_iter()
        .map(|(index, record)| ListedRecord::new(index, record.clone()))
        .collect();
    Ok(result.with_listed_records(matches))
}
