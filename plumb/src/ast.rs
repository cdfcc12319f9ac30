//! The syntax tree for schema definitions.
//!
//! Trees are built bottom-up by an external parser and handed, completed, to
//! an external generator. Everything here is immutable once constructed; the
//! one exception is [`IdSet::insert`], which the producer may keep calling
//! while a set is still being assembled, before it is sealed into an [`Arm`]
//! or a [`Compound`]. None of the owning types are `Clone`: a node or
//! container has exactly one owner.

use std::collections::BTreeMap;
use std::fmt;

use crate::symbol::Symbol;

/// Declarations or struct members, in the order the producer built them.
pub type NodeList = Vec<Node>;
/// The fields active under one arm of a variant.
pub type ReferenceList = Vec<Reference>;
/// The arms of a variant.
pub type ArmList = Vec<Arm>;

/// Primitive type codes. The enumeration of codes is owned by the grammar
/// that produces the tree; this crate only carries them.
pub type TypeCode = i32;

/// A set of identifiers, each with an integer value.
///
/// Backs both enum enumerator lists and variant case-label sets. Iteration is
/// in identifier order, not insertion order, and a set always holds at least
/// one entry. Sets only grow: there is no removal.
#[derive(Debug, PartialEq, Eq)]
pub struct IdSet {
    items: BTreeMap<Symbol, i64>,
    duplicates: Vec<Symbol>,
}

impl IdSet {
    /// Create a one-element set.
    pub fn new(id: Symbol, value: i64) -> IdSet {
        IdSet {
            items: BTreeMap::from([(id, value)]),
            duplicates: Vec::new(),
        }
    }

    pub fn has(&self, id: Symbol) -> bool {
        self.items.contains_key(&id)
    }

    /// Insert or overwrite: if `id` is already present its value is replaced.
    /// Last write wins, but the re-insertion is remembered so that
    /// [`crate::validate`] can report it.
    pub fn insert(&mut self, id: Symbol, value: i64) {
        if self.items.insert(id, value).is_some() {
            self.duplicates.push(id);
        }
    }

    /// The `(id, value)` pairs in identifier order. Restartable.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, i64)> + '_ {
        self.items.iter().map(|(&id, &value)| (id, value))
    }

    /// The ids that were inserted more than once, in re-insertion order.
    pub fn duplicates(&self) -> &[Symbol] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Whether a field carries cryptographically sensitive material.
///
/// The generator decides what sensitivity means; the tree only carries the
/// flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sensitivity {
    Plain,
    Sensitive,
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sensitivity::Plain => write!(f, "plain"),
            Sensitivity::Sensitive => write!(f, "sensitive"),
        }
    }
}

/// Any entity that can appear as a declared type.
#[derive(Debug, PartialEq, Eq)]
pub enum Node {
    Simple(Simple),
    Reference(Reference),
    Compound(Compound),
}

impl Node {
    /// The declared identifier, if the node has one.
    pub fn name(&self) -> Option<Symbol> {
        match self {
            Node::Simple(simple) => simple.name,
            Node::Reference(reference) => reference.name,
            Node::Compound(compound) => compound.name,
        }
    }
}

impl From<Simple> for Node {
    fn from(simple: Simple) -> Node {
        Node::Simple(simple)
    }
}

impl From<Reference> for Node {
    fn from(reference: Reference) -> Node {
        Node::Reference(reference)
    }
}

impl From<Compound> for Node {
    fn from(compound: Compound) -> Node {
        Node::Compound(compound)
    }
}

/// A declaration of a primitive type.
#[derive(Debug, PartialEq, Eq)]
pub struct Simple {
    pub name: Option<Symbol>,
    pub type_code: TypeCode,
}

impl Simple {
    pub fn new(name: Option<Symbol>, type_code: TypeCode) -> Simple {
        Simple { name, type_code }
    }
}

/// A named field whose type is identified by name.
///
/// Only the name of the referred-to type is stored. Resolving it against the
/// declarations in scope is the generator's job, and a missing target is a
/// generator-boundary error (see [`crate::validate`]), not a construction
/// error.
#[derive(Debug, PartialEq, Eq)]
pub struct Reference {
    pub name: Option<Symbol>,
    /// The name of the referred-to type.
    pub target: Symbol,
    pub sensitivity: Sensitivity,
}

impl Reference {
    pub fn new(name: Option<Symbol>, target: Symbol, sensitivity: Sensitivity) -> Reference {
        Reference {
            name,
            target,
            sensitivity,
        }
    }
}

/// One guarded branch of a variant: the case labels that select it, and the
/// fields present when one of them matches.
///
/// Guard sets across the arms of one variant are expected to be pairwise
/// disjoint. That is a producer invariant: the arm stores whatever it is
/// given, and [`crate::validate`] reports violations.
#[derive(Debug, PartialEq, Eq)]
pub struct Arm {
    pub cases: IdSet,
    pub fields: ReferenceList,
}

impl Arm {
    pub fn new(cases: IdSet, fields: ReferenceList) -> Arm {
        Arm { cases, fields }
    }
}

/// A constructed type: struct, enum, or variant/select.
#[derive(Debug, PartialEq, Eq)]
pub struct Compound {
    pub name: Option<Symbol>,
    pub payload: Payload,
}

/// The payload of a [`Compound`], tagged by kind.
///
/// Exactly one shape is ever live, and only struct payloads carry a
/// sensitivity annotation.
#[derive(Debug, PartialEq, Eq)]
pub enum Payload {
    /// Named integer enumerators.
    Enum(IdSet),
    /// An ordered sequence of typed fields.
    Struct {
        members: NodeList,
        sensitivity: Sensitivity,
    },
    /// A tagged union of field-sets selected by case.
    Variant(ArmList),
}

/// The kind tag of a [`Compound`], detached from its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompoundKind {
    Enum,
    Struct,
    Variant,
}

impl fmt::Display for CompoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompoundKind::Enum => write!(f, "enum"),
            CompoundKind::Struct => write!(f, "struct"),
            CompoundKind::Variant => write!(f, "select"),
        }
    }
}

impl Compound {
    pub fn new_enum(name: Option<Symbol>, enumerators: IdSet) -> Compound {
        Compound {
            name,
            payload: Payload::Enum(enumerators),
        }
    }

    pub fn new_struct(
        name: Option<Symbol>,
        members: NodeList,
        sensitivity: Sensitivity,
    ) -> Compound {
        Compound {
            name,
            payload: Payload::Struct {
                members,
                sensitivity,
            },
        }
    }

    pub fn new_variant(name: Option<Symbol>, arms: ArmList) -> Compound {
        Compound {
            name,
            payload: Payload::Variant(arms),
        }
    }

    pub fn kind(&self) -> CompoundKind {
        match self.payload {
            Payload::Enum(_) => CompoundKind::Enum,
            Payload::Struct { .. } => CompoundKind::Struct,
            Payload::Variant(_) => CompoundKind::Variant,
        }
    }
}

/// A completed schema: the top-level declarations, in source order.
#[derive(Debug, PartialEq, Eq)]
pub struct Module {
    pub declarations: NodeList,
}
