//! Messages produced when validating a module.
//!
//! These can be converted to [`Diagnostic`]s in order to present them to the
//! user. The tree carries no source locations, so the diagnostics carry notes
//! rather than labels, and the conversion is generic over whichever file-id
//! type the embedding driver uses.

use codespan_reporting::diagnostic::Diagnostic;
use itertools::Itertools;

use crate::symbol::Symbol;

/// Validation diagnostic messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Two top-level declarations share a name.
    DuplicateDeclaration { name: Symbol },
    /// A reference names a type that is declared nowhere in the module.
    UnresolvedReference {
        field: Option<Symbol>,
        target: Symbol,
        suggestion: Option<Symbol>,
    },
    /// An enumerator name appears more than once in the same enum.
    DuplicateEnumeratorName {
        enumeration: Option<Symbol>,
        name: Symbol,
    },
    /// A case label appears more than once in the same arm.
    DuplicateCaseLabel {
        variant: Option<Symbol>,
        label: Symbol,
    },
    /// A case label is claimed by more than one arm of the same variant.
    OverlappingCaseLabels {
        variant: Option<Symbol>,
        label: Symbol,
    },
    /// Enumerators of one enum are bound to the same value.
    DuplicateEnumeratorValue {
        enumeration: Option<Symbol>,
        value: i64,
        labels: Vec<Symbol>,
    },
}

impl Message {
    pub fn to_diagnostic<FileId>(&self) -> Diagnostic<FileId> {
        match self {
            Message::DuplicateDeclaration { name } => Diagnostic::error()
                .with_message(format!("the name `{name}` is declared more than once")),
            Message::UnresolvedReference {
                field,
                target,
                suggestion,
            } => {
                let diagnostic = Diagnostic::error().with_message(match field {
                    Some(field) => format!("cannot find `{target}`, the type of field `{field}`"),
                    None => format!("cannot find `{target}`"),
                });
                match suggestion {
                    Some(suggestion) => {
                        diagnostic.with_notes(vec![format!("did you mean `{suggestion}`?")])
                    }
                    None => diagnostic,
                }
            }
            Message::DuplicateEnumeratorName { enumeration, name } => {
                Diagnostic::error().with_message(match enumeration {
                    Some(enumeration) => {
                        format!("enumerator `{name}` is declared more than once in `{enumeration}`")
                    }
                    None => format!("enumerator `{name}` is declared more than once"),
                })
            }
            Message::DuplicateCaseLabel { variant, label } => {
                Diagnostic::error().with_message(match variant {
                    Some(variant) => {
                        format!("case label `{label}` is repeated in one arm of `{variant}`")
                    }
                    None => format!("case label `{label}` is repeated in one arm"),
                })
            }
            Message::OverlappingCaseLabels { variant, label } => {
                Diagnostic::error().with_message(match variant {
                    Some(variant) => {
                        format!("case label `{label}` selects more than one arm of `{variant}`")
                    }
                    None => format!("case label `{label}` selects more than one arm"),
                })
            }
            Message::DuplicateEnumeratorValue {
                enumeration,
                value,
                labels,
            } => Diagnostic::error()
                .with_message(match enumeration {
                    Some(enumeration) => {
                        format!("enumerators of `{enumeration}` share the value {value}")
                    }
                    None => format!("enumerators share the value {value}"),
                })
                .with_notes(vec![format!(
                    "{} are all bound to {value}",
                    labels.iter().map(|label| format!("`{label}`")).format(", "),
                )]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codespan_reporting::diagnostic::Severity;

    #[test]
    fn unresolved_reference_renders_suggestion() {
        let message = Message::UnresolvedReference {
            field: Some(Symbol::intern("level")),
            target: Symbol::intern("AlertLevle"),
            suggestion: Some(Symbol::intern("AlertLevel")),
        };

        let diagnostic: Diagnostic<()> = message.to_diagnostic();
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(
            diagnostic.message,
            "cannot find `AlertLevle`, the type of field `level`"
        );
        assert_eq!(diagnostic.notes, vec!["did you mean `AlertLevel`?"]);
    }

    #[test]
    fn duplicate_enumerator_name_names_the_enum() {
        let message = Message::DuplicateEnumeratorName {
            enumeration: Some(Symbol::intern("AlertLevel")),
            name: Symbol::intern("warning"),
        };

        let diagnostic: Diagnostic<()> = message.to_diagnostic();
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(
            diagnostic.message,
            "enumerator `warning` is declared more than once in `AlertLevel`"
        );
    }

    #[test]
    fn duplicate_case_label_names_the_variant() {
        let message = Message::DuplicateCaseLabel {
            variant: Some(Symbol::intern("Record")),
            label: Symbol::intern("alert"),
        };

        let diagnostic: Diagnostic<()> = message.to_diagnostic();
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(
            diagnostic.message,
            "case label `alert` is repeated in one arm of `Record`"
        );
    }

    #[test]
    fn duplicate_enumerator_value_lists_the_labels() {
        let message = Message::DuplicateEnumeratorValue {
            enumeration: Some(Symbol::intern("Color")),
            value: 1,
            labels: vec![Symbol::intern("crimson"), Symbol::intern("scarlet")],
        };

        let diagnostic: Diagnostic<()> = message.to_diagnostic();
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(
            diagnostic.notes,
            vec!["`crimson`, `scarlet` are all bound to 1"]
        );
    }
}
