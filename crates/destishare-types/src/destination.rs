use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::Error;

/// Maximum number of rows a single list fetch will ask for.
pub const DEFAULT_LIST_LIMIT: usize = 1000;

/// A travel-suggestion record as stored in the remote `destinations` table.
///
/// Field names on the wire are the table's camelCase column names; the
/// schema is owned by the hosted service and is not renamed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Store-assigned identifier, unique across the table.
    pub id: u64,

    /// Free-form description of the destination.
    pub text: String,

    /// Where the suggestion came from (unvalidated URL string).
    pub source: String,

    pub category: Category,

    #[serde(rename = "votesRecommended")]
    pub votes_recommended: u64,

    #[serde(rename = "votesMustVisit")]
    pub votes_must_visit: u64,

    #[serde(rename = "votesNotWorthIt")]
    pub votes_not_worth_it: u64,
}

impl Destination {
    pub fn votes(&self, field: VoteField) -> u64 {
        match field {
            VoteField::Recommended => self.votes_recommended,
            VoteField::MustVisit => self.votes_must_visit,
            VoteField::NotWorthIt => self.votes_not_worth_it,
        }
    }
}

/// Payload for inserting a new destination.
///
/// The three counters are serialized as explicit zeros to match the insert
/// the original client sends; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDestination {
    pub text: String,
    pub source: String,
    pub category: Category,

    #[serde(rename = "votesRecommended")]
    pub votes_recommended: u64,

    #[serde(rename = "votesMustVisit")]
    pub votes_must_visit: u64,

    #[serde(rename = "votesNotWorthIt")]
    pub votes_not_worth_it: u64,
}

impl NewDestination {
    /// Build a validated insert payload.
    ///
    /// This is the client-side gate from the submission flow: all three
    /// fields must be non-empty and the category must be one of the known
    /// set. Callers must not reach the store otherwise.
    pub fn new(text: &str, source: &str, category: &str) -> Result<Self, Error> {
        let text = text.trim();
        let source = source.trim();
        let category = category.trim();

        if text.is_empty() {
            return Err(Error::MissingField("text"));
        }
        if source.is_empty() {
            return Err(Error::MissingField("source"));
        }
        if category.is_empty() {
            return Err(Error::MissingField("category"));
        }

        Ok(Self {
            text: text.to_string(),
            source: source.to_string(),
            category: category.parse()?,
            votes_recommended: 0,
            votes_must_visit: 0,
            votes_not_worth_it: 0,
        })
    }
}

/// One of the three independently incrementable vote counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteField {
    Recommended,
    MustVisit,
    NotWorthIt,
}

impl VoteField {
    pub const ALL: [VoteField; 3] = [
        VoteField::Recommended,
        VoteField::MustVisit,
        VoteField::NotWorthIt,
    ];

    /// Column name in the remote table.
    pub fn column(&self) -> &'static str {
        match self {
            VoteField::Recommended => "votesRecommended",
            VoteField::MustVisit => "votesMustVisit",
            VoteField::NotWorthIt => "votesNotWorthIt",
        }
    }

    /// Short label used by the voting controls.
    pub fn label(&self) -> &'static str {
        match self {
            VoteField::Recommended => "👍",
            VoteField::MustVisit => "🏞️",
            VoteField::NotWorthIt => "❌",
        }
    }
}

impl fmt::Display for VoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteField::Recommended => write!(f, "recommended"),
            VoteField::MustVisit => write!(f, "must-visit"),
            VoteField::NotWorthIt => write!(f, "not-worth-it"),
        }
    }
}

impl FromStr for VoteField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recommended" | "votesRecommended" => Ok(VoteField::Recommended),
            "must-visit" | "votesMustVisit" => Ok(VoteField::MustVisit),
            "not-worth-it" | "votesNotWorthIt" => Ok(VoteField::NotWorthIt),
            other => Err(Error::UnknownVoteField(other.to_string())),
        }
    }
}

/// Server-side ordering for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub field: VoteField,
    pub descending: bool,
}

impl Default for OrderBy {
    /// Most-recommended first, matching the original list view.
    fn default() -> Self {
        Self {
            field: VoteField::Recommended,
            descending: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> &'static str {
        r#"{
            "id": 7,
            "text": "Kyoto in autumn",
            "source": "https://example.com/kyoto",
            "category": "culture",
            "votesRecommended": 5,
            "votesMustVisit": 3,
            "votesNotWorthIt": 1
        }"#
    }

    #[test]
    fn destination_deserializes_camel_case_columns() {
        let destination: Destination = serde_json::from_str(sample_row()).unwrap();
        assert_eq!(destination.id, 7);
        assert_eq!(destination.category, Category::Culture);
        assert_eq!(destination.votes_recommended, 5);
        assert_eq!(destination.votes_must_visit, 3);
        assert_eq!(destination.votes_not_worth_it, 1);
    }

    #[test]
    fn votes_accessor_selects_the_right_counter() {
        let destination: Destination = serde_json::from_str(sample_row()).unwrap();
        assert_eq!(destination.votes(VoteField::Recommended), 5);
        assert_eq!(destination.votes(VoteField::MustVisit), 3);
        assert_eq!(destination.votes(VoteField::NotWorthIt), 1);
    }

    #[test]
    fn new_destination_serializes_explicit_zero_counters() {
        let new = NewDestination::new("Lofoten", "https://example.com", "nature").unwrap();
        let json = serde_json::to_value(&new).unwrap();
        assert_eq!(json["votesRecommended"], 0);
        assert_eq!(json["votesMustVisit"], 0);
        assert_eq!(json["votesNotWorthIt"], 0);
        assert_eq!(json["category"], "nature");
    }

    #[test]
    fn new_destination_rejects_empty_fields() {
        assert_eq!(
            NewDestination::new("", "https://example.com", "city").unwrap_err(),
            Error::MissingField("text")
        );
        assert_eq!(
            NewDestination::new("Lofoten", "", "city").unwrap_err(),
            Error::MissingField("source")
        );
        assert_eq!(
            NewDestination::new("Lofoten", "https://example.com", "").unwrap_err(),
            Error::MissingField("category")
        );
    }

    #[test]
    fn new_destination_rejects_whitespace_only_fields() {
        assert_eq!(
            NewDestination::new("   ", "https://example.com", "city").unwrap_err(),
            Error::MissingField("text")
        );
    }

    #[test]
    fn new_destination_rejects_unknown_category() {
        let err = NewDestination::new("Lofoten", "https://example.com", "volcano").unwrap_err();
        assert_eq!(err, Error::UnknownCategory("volcano".to_string()));
    }

    #[test]
    fn vote_field_parses_cli_and_column_spellings() {
        for field in VoteField::ALL {
            assert_eq!(field.to_string().parse::<VoteField>().unwrap(), field);
            assert_eq!(field.column().parse::<VoteField>().unwrap(), field);
        }
        assert!("upvote".parse::<VoteField>().is_err());
    }

    #[test]
    fn default_order_is_most_recommended_first() {
        let order = OrderBy::default();
        assert_eq!(order.field, VoteField::Recommended);
        assert!(order.descending);
    }
}
