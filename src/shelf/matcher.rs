//! Record matching against partial criteria.
//!
//! A criterion field that is absent, empty or whitespace-only is a wildcard.
//! Every other field must equal the record's value, ignoring case, as a whole
//! string. Surrounding whitespace in a criterion is significant. A record
//! matches when all constrained fields match.

use crate::model::{Criteria, Field, Record};

pub fn is_wildcard(criterion: Option<&str>) -> bool {
    criterion.map_or(true, |c| c.trim().is_empty())
}

pub fn matches(record: &Record, criteria: &Criteria) -> bool {
    Field::PRIORITY
        .iter()
        .all(|&field| field_matches(record.get(field), criteria.get(field)))
}

fn field_matches(value: &str, criterion: Option<&str>) -> bool {
    if is_wildcard(criterion) {
        return true;
    }
    criterion.unwrap_or_default().to_lowercase() == value.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Record {
        Record::new("Dune", "Frank Herbert", "Ace")
    }

    #[test]
    fn empty_criteria_match_everything() {
        assert!(matches(&dune(), &Criteria::new()));
        assert!(matches(&Record::new("", "", ""), &Criteria::new()));
    }

    #[test]
    fn blank_fields_are_ignored() {
        let criteria = Criteria::new().with_title("  ").with_author("frank herbert");
        assert!(matches(&dune(), &criteria));
    }

    #[test]
    fn comparison_ignores_case() {
        assert!(matches(&dune(), &Criteria::new().with_title("DUNE")));
        assert!(matches(&dune(), &Criteria::new().with_title("dune")));
    }

    #[test]
    fn no_substring_matching() {
        assert!(!matches(&dune(), &Criteria::new().with_title("Dun")));
        assert!(!matches(&dune(), &Criteria::new().with_author("Herbert")));
    }

    #[test]
    fn padded_criteria_do_not_match() {
        assert!(!matches(&dune(), &Criteria::new().with_publisher(" ace ")));
        assert!(!matches(&dune(), &Criteria::new().with_author("Frank Herbert ")));
    }

    #[test]
    fn all_constrained_fields_must_match() {
        let criteria = Criteria::new().with_title("Dune").with_publisher("Gnome");
        assert!(!matches(&dune(), &criteria));

        let criteria = Criteria::new().with_title("Dune").with_publisher("Ace");
        assert!(matches(&dune(), &criteria));
    }
}
