//! Identity and value-returning edits for user-managed focal-finding lists.
//!
//! The UI adds, edits and removes findings by identity. Every operation here
//! returns a new list and leaves its input untouched, so a record snapshot
//! handed to the builder can never change underneath it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Opaque, stable identity of one focal finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FindingId(Uuid);

impl FindingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FindingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for FindingId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Implemented by every per-organ focal-finding record.
pub trait FocalFinding: Clone {
    fn id(&self) -> FindingId;
}

/// Append `item`, returning the new list.
pub fn with_added<T: FocalFinding>(list: &[T], item: T) -> Vec<T> {
    let mut next = list.to_vec();
    next.push(item);
    next
}

/// Apply `edit` to the finding with `id`. Unknown ids leave the list unchanged.
pub fn with_updated<T: FocalFinding>(
    list: &[T],
    id: FindingId,
    edit: impl FnOnce(&mut T),
) -> Vec<T> {
    let mut next = list.to_vec();
    if let Some(item) = next.iter_mut().find(|item| item.id() == id) {
        edit(item);
    }
    next
}

/// Remove the finding with `id`, preserving the order of the rest.
pub fn without<T: FocalFinding>(list: &[T], id: FindingId) -> Vec<T> {
    list.iter().filter(|item| item.id() != id).cloned().collect()
}

pub fn find<T: FocalFinding>(list: &[T], id: FindingId) -> Option<&T> {
    list.iter().find(|item| item.id() == id)
}
