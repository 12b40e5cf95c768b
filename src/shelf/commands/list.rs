use crate::commands::{listed, load_collection, CmdResult};
use crate::config::MalformedPolicy;
use crate::error::Result;
use crate::store::SnapshotStore;

pub fn run<S: SnapshotStore>(store: &S, policy: MalformedPolicy) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let collection = load_collection(store, policy, &mut result)?;
    Ok(result.with_listed_records(listed(&collection)))
}
