//! Store-submission compliance rules.

use crate::arch::{ArchSet, FORBIDDEN_ARCHS};
use crate::model::BinaryEntry;

/// True iff the set contains an architecture rejected for store
/// submission.
pub fn has_forbidden_arch(archs: &ArchSet) -> bool {
    FORBIDDEN_ARCHS.iter().any(|f| archs.contains(f))
}

/// Entries whose architecture sets intersect the forbidden set, in
/// their original order.
pub fn non_compliant(entries: &[BinaryEntry]) -> Vec<&BinaryEntry> {
    entries
        .iter()
        .filter(|e| has_forbidden_arch(&e.architectures))
        .collect()
}
