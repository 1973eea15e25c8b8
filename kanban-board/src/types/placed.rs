//! Positioned entities captured on removal

use serde::{Deserialize, Serialize};

/// An entity together with the index it occupied in its sequence when it was removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placed<T> {
    pub index: usize,
    pub item: T,
}

impl<T> Placed<T> {
    pub fn new(index: usize, item: T) -> Self {
        Self { index, item }
    }
}
