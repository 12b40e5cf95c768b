//! Field-value substitution.
//!
//! An update names a set of candidates (by criteria), a value to look for and
//! a value to put in its place. Candidates are visited in catalog order; for
//! each one the fields are tried in [`Field::PRIORITY`] order and the first
//! field holding exactly the old value (case-sensitive) is overwritten. The
//! first candidate updated this way is saved and the update stops there.

use crate::collection::Collection;
use crate::commands::{load_collection, CmdMessage, CmdResult, ListedRecord};
use crate::config::MalformedPolicy;
use crate::error::Result;
use crate::model::{Criteria, Field, Record};
use crate::store::SnapshotStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated {
        index: usize,
        field: Field,
        previous: String,
        record: Record,
    },
    NoMatch,
}

/// Apply the update to `collection` in memory. At most one field of one
/// record changes.
pub fn substitute(
    collection: &mut Collection,
    criteria: &Criteria,
    old_value: &str,
    new_value: &str,
) -> Result<UpdateOutcome> {
    let candidates: Vec<usize> = collection
        .search(criteria)
        .into_iter()
        .map(|(index, _)| index)
        .collect();

    for index in candidates {
        let Some(mut candidate) = collection.get(index).cloned() else {
            continue;
        };
        let Some(field) = Field::PRIORITY
            .into_iter()
            .find(|&field| candidate.get(field) == old_value)
        else {
            continue;
        };

        let previous = candidate.set(field, new_value);
        collection.replace_at(index as i64, candidate.clone())?;
        return Ok(UpdateOutcome::Updated {
            index,
            field,
            previous,
            record: candidate,
        });
    }

    Ok(UpdateOutcome::NoMatch)
}

pub fn run<S: SnapshotStore>(
    store: &mut S,
    policy: MalformedPolicy,
    criteria: &Criteria,
    old_value: &str,
    new_value: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut collection = load_collection(store, policy, &mut result)?;

    match substitute(&mut collection, criteria, old_value, new_value)? {
        UpdateOutcome::Updated {
            index,
            field,
            previous,
            record,
        } => {
            store.save(&collection)?;
            result.add_message(CmdMessage::success(format!(
                "Updated book ({}): {} changed from {:?} to {:?}",
                index, field, previous, new_value
            )));
            result.affected_records.push(ListedRecord::new(index, record));
        }
        UpdateOutcome::NoMatch => {
            tracing::debug!(old_value, "update matched nothing");
            result.add_message(CmdMessage::info(format!(
                "Nothing changed: no matching book has a field equal to {:?}",
                old_value
            )));
        }
    }

    Ok(result)
}
