use crate::commands::{CmdMessage, CmdResult};
use crate::store::SnapshotStore;

pub fn run<S: SnapshotStore>(store: &S) -> CmdResult {
    match store.location() {
        Some(path) => CmdResult::default().with_paths(vec![path]),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info("Catalog is not backed by a file"));
            result
        }
    }
}
