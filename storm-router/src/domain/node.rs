//! Node and edge identifier types.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// An opaque node identifier.
///
/// Node identifiers carry no attributes beyond identity. The backing string
/// is shared, so cloning a `NodeId` (which happens once per path step during
/// search) never copies the name.
///
/// # Examples
///
/// ```
/// use storm_router::domain::NodeId;
///
/// let port = NodeId::parse("Harbour").unwrap();
/// assert_eq!(port.as_str(), "Harbour");
///
/// // Empty identifiers are rejected
/// assert!(NodeId::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId(Arc<str>);

impl NodeId {
    /// Parse a node identifier. Any non-empty string is accepted.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if s.is_empty() {
            return Err(DomainError::EmptyNodeId);
        }
        Ok(NodeId(Arc::from(s)))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NodeId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.is_empty() {
            return Err(DomainError::EmptyNodeId);
        }
        Ok(NodeId(Arc::from(s)))
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.as_str().to_string()
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.as_str())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Separator placed between the two node names of an edge identifier.
pub const EDGE_ID_SEPARATOR: char = '-';

/// Identifier of a directed edge, as referenced by hazard windows.
///
/// The identifier is the concatenation `"{from}-{to}"`. Hazard inputs carry
/// this string verbatim, so it is kept as a string key rather than split
/// back into node names (node names may themselves contain the separator).
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    /// Builds the identifier of the edge `from → to`.
    pub fn between(from: &NodeId, to: &NodeId) -> Self {
        EdgeId(format!("{from}{EDGE_ID_SEPARATOR}{to}"))
    }

    /// Wraps a raw identifier string as supplied by a hazard record.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        EdgeId(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the input
        #[test]
        fn roundtrip(s in "[A-Za-z0-9 _]{1,12}") {
            let node = NodeId::parse(&s).unwrap();
            prop_assert_eq!(node.as_str(), s.as_str());
        }

        /// Edge identifiers always start with the origin and end with the target
        #[test]
        fn edge_id_shape(from in "[A-Z]{1,4}", to in "[A-Z]{1,4}") {
            let id = EdgeId::between(&NodeId::parse(&from).unwrap(), &NodeId::parse(&to).unwrap());
            prop_assert_eq!(id.as_str().to_string(), format!("{}-{}", from, to));
        }
    }
}
