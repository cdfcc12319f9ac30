//! Checks performed on a completed module at the generator boundary.
//!
//! Construction never fails: the producer is trusted to hand over well-formed
//! trees, and the invariants it is responsible for are verified here, after
//! the fact, as named messages. Nothing in this pass mutates the module.

pub mod reporting;

use fxhash::FxHashSet;
use itertools::Itertools;

use crate::ast::{ArmList, Compound, IdSet, Module, Node, Payload, Reference};
use crate::symbol::Symbol;
use crate::validate::reporting::Message;

/// Suggestions are only offered for near misses.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Check every producer invariant the tree itself does not enforce, returning
/// messages in traversal order.
pub fn check_module(module: &Module) -> Vec<Message> {
    let mut context = Context::new();
    context.check_module(module);
    context.messages
}

struct Context {
    declarations: FxHashSet<Symbol>,
    messages: Vec<Message>,
}

impl Context {
    fn new() -> Context {
        Context {
            declarations: FxHashSet::default(),
            messages: Vec::new(),
        }
    }

    fn check_module(&mut self, module: &Module) {
        // Collect names first: references may point forwards.
        for declaration in &module.declarations {
            if let Some(name) = declaration.name() {
                if !self.declarations.insert(name) {
                    self.messages.push(Message::DuplicateDeclaration { name });
                }
            }
        }
        for declaration in &module.declarations {
            self.check_node(declaration);
        }
    }

    fn check_node(&mut self, node: &Node) {
        match node {
            Node::Simple(_) => {}
            Node::Reference(reference) => self.check_reference(reference),
            Node::Compound(compound) => self.check_compound(compound),
        }
    }

    fn check_compound(&mut self, compound: &Compound) {
        match &compound.payload {
            Payload::Enum(enumerators) => self.check_enumerators(compound.name, enumerators),
            Payload::Struct { members, .. } => {
                for member in members {
                    self.check_node(member);
                }
            }
            Payload::Variant(arms) => self.check_arms(compound.name, arms),
        }
    }

    fn check_reference(&mut self, reference: &Reference) {
        if !self.declarations.contains(&reference.target) {
            self.messages.push(Message::UnresolvedReference {
                field: reference.name,
                target: reference.target,
                suggestion: self.suggest(reference.target),
            });
        }
    }

    fn check_enumerators(&mut self, enumeration: Option<Symbol>, enumerators: &IdSet) {
        for name in enumerators.duplicates().iter().copied().unique() {
            self.messages.push(Message::DuplicateEnumeratorName { enumeration, name });
        }
        let duplicated: Vec<i64> = enumerators
            .iter()
            .map(|(_, value)| value)
            .duplicates()
            .collect();
        for value in duplicated {
            let labels = enumerators
                .iter()
                .filter(|&(_, other)| other == value)
                .map(|(id, _)| id)
                .collect();
            self.messages.push(Message::DuplicateEnumeratorValue {
                enumeration,
                value,
                labels,
            });
        }
    }

    fn check_arms(&mut self, variant: Option<Symbol>, arms: &ArmList) {
        let mut seen = FxHashSet::default();
        for arm in arms {
            for label in arm.cases.duplicates().iter().copied().unique() {
                self.messages.push(Message::DuplicateCaseLabel { variant, label });
            }
            for (label, _) in arm.cases.iter() {
                if !seen.insert(label) {
                    self.messages.push(Message::OverlappingCaseLabels { variant, label });
                }
            }
            for field in &arm.fields {
                self.check_reference(field);
            }
        }
    }

    fn suggest(&self, target: Symbol) -> Option<Symbol> {
        let target = target.resolve();
        self.declarations
            .iter()
            .map(|&name| (levenshtein::levenshtein(name.resolve(), target), name))
            .filter(|&(distance, _)| distance <= MAX_SUGGESTION_DISTANCE)
            .min_by_key(|&(distance, name)| (distance, name))
            .map(|(_, name)| name)
    }
}
