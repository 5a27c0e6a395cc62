//! Operation tag definitions

use serde::Serialize;

/// Largest random value drawn for an operation (inclusive)
pub const MAX_RANDOM_VALUE: u32 = 65_535;

/// List operation performed at one position of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationTag {
    Member,
    Insert,
    Delete,
}

impl OperationTag {
    /// All tags, in generation block order
    pub const ALL: [OperationTag; 3] = [Self::Member, Self::Insert, Self::Delete];

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Insert => "insert",
            Self::Delete => "delete",
        }
    }

    /// Index into per-tag arrays
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Self::Member => 0,
            Self::Insert => 1,
            Self::Delete => 2,
        }
    }
}

impl std::fmt::Display for OperationTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
