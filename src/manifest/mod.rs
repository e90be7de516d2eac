//! Document model for Custom Elements Manifests.
//!
//! A [`Package`] owns its modules, a [`Module`] owns its declarations and
//! exports, and so on down to the individual facets. Ownership is strictly
//! tree-shaped: cross-links between entities are [`Reference`] values
//! resolved on demand by the `semantic` layer, so `Clone` yields a fully
//! independent copy.
//!
//! Scalar fields serialize through serde derives. The variant positions
//! (`Declaration`, `ClassMember`, `Export`) are encoded and decoded by the
//! `interchange` layer, which owns the `kind` dispatch rules.

mod declaration;
mod deprecated;
mod export;
mod facets;
mod member;
mod module;
mod package;
mod reference;

pub use declaration::{
    ClassDeclaration, ClassLike, CustomElement, CustomElementDeclaration,
    CustomElementMixinDeclaration, Declaration, FunctionDeclaration, MixinDeclaration,
    VariableDeclaration,
};
pub use deprecated::{Deprecated, INVALID_DEPRECATED};
pub use export::{CustomElementExport, Export, JavaScriptExport};
pub use facets::{
    Attribute, AttributeValueError, CssCustomProperty, CssCustomState, CssPart, Demo, Event, Slot,
};
pub use member::{
    ClassField, ClassMember, ClassMethod, CustomElementField, FunctionLike, MemberCommonMut,
    MemberKind, Parameter, Privacy, Return,
};
pub use module::{Module, ModuleKind};
pub use package::Package;
pub use reference::{Reference, SourceReference, Type, TypeReference};
