//! A pretty printer for schema modules.
//!
//! This is mainly intended for debugging.
//!
//! ```
//! use plumb::ast::{Compound, IdSet, Module, Node};
//! use plumb::pretty::Context;
//! use plumb::symbol::Symbol;
//!
//! let mut level = IdSet::new(Symbol::intern("warning"), 1);
//! level.insert(Symbol::intern("fatal"), 2);
//! let module = Module {
//!     declarations: vec![Node::from(Compound::new_enum(
//!         Some(Symbol::intern("AlertLevel")),
//!         level,
//!     ))],
//! };
//!
//! let pp = Context::new();
//! let doc = pp.module(&module);
//! assert_eq!(
//!     doc.pretty(80).to_string(),
//!     "enum { fatal(2), warning(1) } AlertLevel;",
//! );
//! ```

use pretty::RcDoc;

use crate::ast::{Arm, Compound, Module, Node, Payload, Reference, Sensitivity, Simple};
use crate::symbol::Symbol;

const INDENT: isize = 4;

pub struct Context {}

impl Context {
    pub fn new() -> Context {
        Context {}
    }

    fn ident(&self, name: Symbol) -> RcDoc {
        RcDoc::text(name.resolve())
    }

    fn name(&self, name: Option<Symbol>) -> RcDoc {
        match name {
            Some(name) => self.ident(name),
            None => RcDoc::text("_"),
        }
    }

    fn sensitivity(&self, sensitivity: Sensitivity) -> RcDoc {
        match sensitivity {
            Sensitivity::Plain => RcDoc::nil(),
            Sensitivity::Sensitive => RcDoc::text("crypto "),
        }
    }

    pub fn module(&self, module: &Module) -> RcDoc {
        RcDoc::intersperse(
            module.declarations.iter().map(|node| self.node(node)),
            RcDoc::hardline(),
        )
    }

    pub fn node(&self, node: &Node) -> RcDoc {
        match node {
            Node::Simple(simple) => self.simple(simple),
            Node::Reference(reference) => self.reference(reference),
            Node::Compound(compound) => self.compound(compound),
        }
    }

    fn simple(&self, simple: &Simple) -> RcDoc {
        RcDoc::concat([
            RcDoc::text(format!("prim({}) ", simple.type_code)),
            self.name(simple.name),
            RcDoc::text(";"),
        ])
    }

    fn reference(&self, reference: &Reference) -> RcDoc {
        RcDoc::concat([
            self.sensitivity(reference.sensitivity),
            self.ident(reference.target),
            RcDoc::space(),
            self.name(reference.name),
            RcDoc::text(";"),
        ])
    }

    fn compound(&self, compound: &Compound) -> RcDoc {
        match &compound.payload {
            Payload::Enum(enumerators) => RcDoc::concat([
                RcDoc::text("enum { "),
                RcDoc::intersperse(
                    enumerators
                        .iter()
                        .map(|(id, value)| self.enumerator(id, value)),
                    RcDoc::text(", "),
                ),
                RcDoc::text(" } "),
                self.name(compound.name),
                RcDoc::text(";"),
            ]),
            Payload::Struct {
                members,
                sensitivity,
            } => RcDoc::concat([
                self.sensitivity(*sensitivity),
                RcDoc::text("struct {"),
                RcDoc::concat(
                    members
                        .iter()
                        .map(|member| RcDoc::hardline().append(self.node(member))),
                )
                .nest(INDENT),
                RcDoc::hardline(),
                RcDoc::text("} "),
                self.name(compound.name),
                RcDoc::text(";"),
            ]),
            Payload::Variant(arms) => RcDoc::concat([
                RcDoc::text("select {"),
                RcDoc::concat(
                    arms.iter()
                        .map(|arm| RcDoc::hardline().append(self.arm(arm))),
                )
                .nest(INDENT),
                RcDoc::hardline(),
                RcDoc::text("} "),
                self.name(compound.name),
                RcDoc::text(";"),
            ]),
        }
    }

    fn arm(&self, arm: &Arm) -> RcDoc {
        RcDoc::concat([
            RcDoc::text("case "),
            RcDoc::intersperse(
                arm.cases
                    .iter()
                    .map(|(label, value)| self.case_label(label, value)),
                RcDoc::text(", "),
            ),
            RcDoc::text(":"),
            RcDoc::concat(
                arm.fields
                    .iter()
                    .map(|field| RcDoc::hardline().append(self.reference(field))),
            )
            .nest(INDENT),
        ])
    }

    // Enumerators always show their value; case labels only when one was
    // given.
    fn enumerator(&self, id: Symbol, value: i64) -> RcDoc {
        RcDoc::text(format!("{id}({value})"))
    }

    fn case_label(&self, label: Symbol, value: i64) -> RcDoc {
        if value == 0 {
            self.ident(label)
        } else {
            RcDoc::text(format!("{label}({value})"))
        }
    }
}
