//! Typed directed edges between tasks.

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// How one task relates to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    /// Hard ordering dependency: the source must be done before the target.
    Blocks,
    /// Thematically related, no ordering implied.
    RelatesTo,
    /// The source is part of the target epic/group.
    PartOf,
}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelationType::Blocks => write!(f, "blocks"),
            RelationType::RelatesTo => write!(f, "relates_to"),
            RelationType::PartOf => write!(f, "part_of"),
        }
    }
}

impl FromStr for RelationType {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blocks" => Ok(RelationType::Blocks),
            "relates_to" => Ok(RelationType::RelatesTo),
            "part_of" => Ok(RelationType::PartOf),
            other => Err(GraphError::InvalidRelationType(other.to_string())),
        }
    }
}

/// A directed, typed edge between two task IDs.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Relationship {
    pub from: String,

    pub to: String,

    #[serde(rename = "type")]
    pub relation: RelationType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_type_parse() {
        assert_eq!("blocks".parse::<RelationType>().unwrap(), RelationType::Blocks);
        assert_eq!(
            "relates_to".parse::<RelationType>().unwrap(),
            RelationType::RelatesTo
        );
        assert_eq!("part_of".parse::<RelationType>().unwrap(), RelationType::PartOf);
        assert!("depends_on".parse::<RelationType>().is_err());
    }

    #[test]
    fn test_wire_field_name() {
        let edge = Relationship {
            from: "a".to_string(),
            to: "b".to_string(),
            relation: RelationType::Blocks,
        };
        let json = serde_json::to_string(&edge).unwrap();
        assert_eq!(json, r#"{"from":"a","to":"b","type":"blocks"}"#);

        let parsed: Relationship = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, edge);
    }
}
