//! Id Set Value Objects
//!
//! `SelectionSet` and `OpenSet` are both ordered sets of tree id strings.
//! They are distinct types so a selection can never be passed where an open
//! set is expected, and vice versa.

use std::collections::btree_set;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

macro_rules! id_set {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(BTreeSet<String>);

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Parse a comma-separated list of ids, ignoring blanks
            pub fn parse_list(list: &str) -> Self {
                list.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .collect()
            }

            pub fn contains(&self, tree_id: &str) -> bool {
                self.0.contains(tree_id)
            }

            /// Returns `true` if the id was not already present
            pub fn insert(&mut self, tree_id: impl Into<String>) -> bool {
                self.0.insert(tree_id.into())
            }

            /// Returns `true` if the id was present
            pub fn remove(&mut self, tree_id: &str) -> bool {
                self.0.remove(tree_id)
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn iter(&self) -> btree_set::Iter<'_, String> {
                self.0.iter()
            }

            pub fn to_vec(&self) -> Vec<String> {
                self.0.iter().cloned().collect()
            }
        }

        impl<S: Into<String>> FromIterator<S> for $name {
            fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
                Self(iter.into_iter().map(Into::into).collect())
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a String;
            type IntoIter = btree_set::Iter<'a, String>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl IntoIterator for $name {
            type Item = String;
            type IntoIter = btree_set::IntoIter<String>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }
    };
}

id_set! {
    /// Selected tree ids.
    ///
    /// Depending on context this holds the compact form (a fully selected
    /// subtree is represented only by its root) or the expanded form (every
    /// effectively selected id).
    SelectionSet
}

id_set! {
    /// Tree ids of the nodes currently expanded in the view
    OpenSet
}
