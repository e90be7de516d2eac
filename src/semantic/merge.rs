//! The per-collection merge rule used by flattening.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::manifest::{
    Attribute, ClassMember, CssCustomProperty, CssCustomState, CssPart, Event, MemberKind,
    Reference, Slot,
};

/// An item that can be inherited and overridden.
pub trait Inheritable: Clone {
    /// Items with equal keys override each other.
    type Key: Eq + Hash;

    fn merge_key(&self) -> Self::Key;

    fn docs(&self) -> (&str, &str);

    fn docs_mut(&mut self) -> (&mut String, &mut String);

    fn inherited_from(&self) -> Option<&Reference>;

    fn set_inherited_from(&mut self, source: Option<Reference>);
}

macro_rules! impl_inheritable_facet {
    ($($facet:ty),* $(,)?) => {$(
        impl Inheritable for $facet {
            type Key = String;

            fn merge_key(&self) -> String {
                self.name.clone()
            }

            fn docs(&self) -> (&str, &str) {
                (&self.summary, &self.description)
            }

            fn docs_mut(&mut self) -> (&mut String, &mut String) {
                (&mut self.summary, &mut self.description)
            }

            fn inherited_from(&self) -> Option<&Reference> {
                self.inherited_from.as_ref()
            }

            fn set_inherited_from(&mut self, source: Option<Reference>) {
                self.inherited_from = source;
            }
        }
    )*};
}

impl_inheritable_facet!(
    Attribute,
    Slot,
    Event,
    CssPart,
    CssCustomProperty,
    CssCustomState
);

impl Inheritable for ClassMember {
    type Key = (MemberKind, String);

    fn merge_key(&self) -> Self::Key {
        (self.kind(), self.name().to_string())
    }

    fn docs(&self) -> (&str, &str) {
        (self.summary(), self.description())
    }

    fn docs_mut(&mut self) -> (&mut String, &mut String) {
        let common = self.common_mut();
        (common.summary, common.description)
    }

    fn inherited_from(&self) -> Option<&Reference> {
        ClassMember::inherited_from(self)
    }

    fn set_inherited_from(&mut self, source: Option<Reference>) {
        *self.common_mut().inherited_from = source;
    }
}

/// Merge `higher` over `lower`.
///
/// `source` is the provenance of the `higher` stage: contributed items take
/// it unless they already carry one. `None` marks the class's own stage,
/// whose items never carry provenance.
///
/// Lower items that are not overridden come first, in order, followed by
/// the higher items in their own order. Within `higher`, the last item
/// with a given key wins.
pub fn merge<T: Inheritable>(lower: Vec<T>, higher: &[T], source: Option<&Reference>) -> Vec<T> {
    let mut overriding: IndexMap<T::Key, T> = IndexMap::with_capacity(higher.len());
    for item in higher {
        let mut item = item.clone();
        match source {
            Some(source) if item.inherited_from().is_none() => {
                item.set_inherited_from(Some(source.clone()));
            }
            Some(_) => {}
            None => item.set_inherited_from(None),
        }
        overriding.insert(item.merge_key(), item);
    }

    let mut merged = Vec::with_capacity(lower.len() + overriding.len());
    for item in lower {
        match overriding.get_mut(&item.merge_key()) {
            Some(winner) => backfill(winner, &item),
            None => merged.push(item),
        }
    }
    merged.extend(overriding.into_values());
    merged
}

/// Fill the winner's empty docs from the item it overrides. Differing
/// descriptions are concatenated, override first.
fn backfill<T: Inheritable>(winner: &mut T, overridden: &T) {
    let (summary, description) = overridden.docs();
    let (winner_summary, winner_description) = winner.docs_mut();
    if winner_summary.is_empty() {
        *winner_summary = summary.to_string();
    }
    if winner_description.is_empty() {
        *winner_description = description.to_string();
    } else if !description.is_empty() && winner_description.as_str() != description {
        winner_description.push_str("\n\n");
        winner_description.push_str(description);
    }
}
