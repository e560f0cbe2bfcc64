//! Tree Id Value Object
//!
//! A structural path identifying a node by its position: the dash-joined
//! 1-based sibling indices from the top level (`"1"`, `"1-2"`, `"1-2-3"`).

use std::fmt;
use std::str::FromStr;

use crate::error::{TreeError, TreeResult};

/// Validated dash-path tree id
///
/// Ordering follows the segments numerically, so `1-2` sorts before `1-10`
/// and every node sorts before its descendants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreeId(Vec<usize>);

impl TreeId {
    /// Separator between path segments
    pub const SEPARATOR: char = '-';

    /// Id of the `position`-th top-level node (1-based)
    pub fn top_level(position: usize) -> Self {
        Self(vec![position])
    }

    /// Parse a dash path, rejecting empty, zero or non-numeric segments
    pub fn parse(raw: &str) -> TreeResult<Self> {
        let malformed = || TreeError::MalformedTreeId {
            tree_id: raw.to_string(),
        };

        let segments = raw
            .split(Self::SEPARATOR)
            .map(|segment| {
                if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(malformed());
                }
                match segment.parse::<usize>() {
                    Ok(0) | Err(_) => Err(malformed()),
                    Ok(index) => Ok(index),
                }
            })
            .collect::<TreeResult<Vec<_>>>()?;

        Ok(Self(segments))
    }

    /// Id of this node's `position`-th child (1-based)
    pub fn child(&self, position: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(position);
        Self(segments)
    }
}

impl fmt::Display for TreeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", Self::SEPARATOR)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for TreeId {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
