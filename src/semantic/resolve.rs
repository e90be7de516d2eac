//! Reference resolution and the superclass/mixin graph walks.
//!
//! Both walks guard against cycles with a visited set keyed by the resolved
//! `(module path, name)` and seeded with the declaration being flattened.
//! A repeated declaration is dropped silently; unresolvable references are
//! skipped.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::manifest::{ClassLike, Declaration, Module, Package, Reference};

/// A declaration found in the package, together with its owning module.
#[derive(Clone, Copy, Debug)]
pub struct Resolved<'a> {
    pub module: &'a Module,
    pub declaration: &'a Declaration,
}

impl<'a> Resolved<'a> {
    /// A fully qualified reference back to this declaration.
    pub fn reference(&self) -> Reference {
        Reference::new(self.declaration.name()).with_module(self.module.path.as_str())
    }

    pub fn key(&self) -> VisitKey<'a> {
        VisitKey::new(&self.module.path, self.declaration.name())
    }
}

/// Stable identity of a declaration within one package.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VisitKey<'a> {
    pub module: &'a str,
    pub name: &'a str,
}

impl<'a> VisitKey<'a> {
    pub fn new(module: &'a str, name: &'a str) -> Self {
        Self { module, name }
    }
}

/// Locate the first declaration named `reference.name`, restricted to the
/// referenced module when one is given.
pub fn find_declaration<'a>(package: &'a Package, reference: &Reference) -> Option<Resolved<'a>> {
    package
        .modules
        .iter()
        .filter(|module| reference.points_into(&module.path))
        .find_map(|module| {
            module
                .declaration(&reference.name)
                .map(|declaration| Resolved {
                    module,
                    declaration,
                })
        })
}

/// Superclasses of `class`, ordered base first.
///
/// Any class-like declaration may serve as a superclass.
pub fn superclass_chain<'a>(
    package: &'a Package,
    start: VisitKey<'a>,
    class: &'a ClassLike,
) -> Vec<Resolved<'a>> {
    let mut visited = FxHashSet::default();
    visited.insert(start);

    let mut chain = Vec::new();
    let mut current = class;
    while let Some(reference) = current.superclass.as_ref() {
        let Some(resolved) = find_declaration(package, reference) else {
            debug!(
                superclass = %reference.name,
                module = reference.module_path(),
                "unresolved superclass"
            );
            break;
        };
        let Some(next) = resolved.declaration.class_like() else {
            debug!(superclass = %reference.name, "superclass is not a class");
            break;
        };
        if !visited.insert(resolved.key()) {
            debug!(superclass = %reference.name, "superclass cycle broken");
            break;
        }
        trace!(superclass = %reference.name, module = %resolved.module.path, "resolved superclass");
        chain.push(resolved);
        current = next;
    }

    chain.reverse();
    chain
}

/// Mixins applied to `class`, depth first: a mixin's own mixins precede it.
pub fn mixin_chain<'a>(
    package: &'a Package,
    start: VisitKey<'a>,
    class: &'a ClassLike,
) -> Vec<Resolved<'a>> {
    let mut visited = FxHashSet::default();
    visited.insert(start);

    let mut chain = Vec::new();
    collect_mixins(package, class, &mut visited, &mut chain);
    chain
}

fn collect_mixins<'a>(
    package: &'a Package,
    class: &'a ClassLike,
    visited: &mut FxHashSet<VisitKey<'a>>,
    chain: &mut Vec<Resolved<'a>>,
) {
    for reference in &class.mixins {
        let Some(resolved) = find_declaration(package, reference) else {
            debug!(mixin = %reference.name, module = reference.module_path(), "unresolved mixin");
            continue;
        };
        if !resolved.declaration.is_mixin() {
            debug!(mixin = %reference.name, "mixin reference does not name a mixin");
            continue;
        }
        if !visited.insert(resolved.key()) {
            debug!(mixin = %reference.name, "mixin already applied");
            continue;
        }
        trace!(mixin = %reference.name, module = %resolved.module.path, "resolved mixin");
        if let Some(inner) = resolved.declaration.class_like() {
            collect_mixins(package, inner, visited, chain);
        }
        chain.push(resolved);
    }
}
