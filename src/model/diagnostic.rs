//! Non-fatal findings reported alongside tangled output.

use std::fmt;

use serde::Serialize;

use super::reference_name::ReferenceName;

/// A warning produced while tangling. Never stops the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A macro reference names a block that does not exist. The line that
    /// holds the reference is kept as written.
    UnresolvedMacro {
        /// The trimmed name that was looked up.
        name: String,
        /// The block whose body contains the reference.
        within: ReferenceName,
    },
}

impl Diagnostic {
    /// Creates an unresolved-macro diagnostic.
    pub fn unresolved(name: impl Into<String>, within: &ReferenceName) -> Self {
        Self::UnresolvedMacro {
            name: name.into(),
            within: within.clone(),
        }
    }

    /// The block name this diagnostic is about.
    pub fn missing_name(&self) -> &str {
        match self {
            Self::UnresolvedMacro { name, .. } => name,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedMacro { name, within } => {
                write!(f, "unresolved macro '{}' in block '{}'", name, within)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let diag = Diagnostic::unresolved("missing", &ReferenceName::new("file:out.txt"));
        assert_eq!(
            diag.to_string(),
            "unresolved macro 'missing' in block 'file:out.txt'"
        );
        assert_eq!(diag.missing_name(), "missing");
    }

    #[test]
    fn test_serialize_tagged() {
        let diag = Diagnostic::unresolved("x", &ReferenceName::new("main"));
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["kind"], "unresolved_macro");
        assert_eq!(json["name"], "x");
        assert_eq!(json["within"], "main");
    }
}
