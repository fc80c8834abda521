// The unused-symbol decision

use super::classify::{Classification, ReferenceClassifier};
use crate::semantic::ReferencedSymbol;

/// Decide whether a symbol is unused given all of its references
///
/// A symbol counts as used when any location anywhere is outside analyzable
/// source (an opaque reference is conservative proof of usage), or any
/// in-source location classifies as [`Classification::GenuineUsage`].
///
/// A symbol with zero reference locations is unused: the empty set vacuously
/// has no genuine usage. Every location is classified before the verdict is
/// reached.
pub fn is_unused(classifier: &ReferenceClassifier<'_>, referenced: &[ReferencedSymbol]) -> bool {
    let mut used = false;
    for referenced_symbol in referenced {
        for location in &referenced_symbol.locations {
            if !location.in_source {
                used = true;
            } else if classifier.classify(location) == Classification::GenuineUsage {
                used = true;
            }
        }
    }
    !used
}
