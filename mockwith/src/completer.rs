//! The [`completer`](self) module finds the methods of a mocked type that
//! must be stubbed although no expectation mentions them.

use crate::class::{ClassInfo, ClassKind, MethodFilter};

/// Get the methods of `class` that need a stub but are not in `covered`.
///
/// - for an interface these are all public methods
/// - for an abstract class these are all methods without implementation
/// - a concrete class needs no additional stubs
///
/// The result is in declaration order and free of duplicates.
pub fn complete_missing<S: AsRef<str>>(class: &ClassInfo, covered: &[S]) -> Vec<String> {
    let filter = match class.kind() {
        ClassKind::Interface => MethodFilter::Public,
        ClassKind::Abstract => MethodFilter::Abstract,
        ClassKind::Concrete => return Vec::new(),
    };

    let mut missing: Vec<String> = Vec::new();
    for name in class.methods(filter) {
        let is_covered = covered.iter().any(|c| c.as_ref() == name);
        let is_known = missing.iter().any(|m| m == name);

        if !is_covered && !is_known {
            missing.push(name.to_owned());
        }
    }

    missing
}
