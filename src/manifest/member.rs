//! Class members: fields, reflecting custom-element fields, and methods.

use serde::{Deserialize, Serialize};

use super::deprecated::Deprecated;
use super::reference::{Reference, SourceReference, Type};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    #[default]
    Public,
    Protected,
    Private,
}

/// Which side of the member namespace an entry lives in.
///
/// A field and a method may share a name without overriding each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemberKind {
    Field,
    Method,
}

impl MemberKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MemberKind::Field => crate::base::constants::KIND_FIELD,
            MemberKind::Method => crate::base::constants::KIND_METHOD,
        }
    }
}

/// A class member. Closed set; the wire `kind` plus the presence of
/// `attribute`/`reflects` select the variant.
#[derive(Clone, Debug, PartialEq)]
pub enum ClassMember {
    Field(ClassField),
    CustomElementField(CustomElementField),
    Method(ClassMethod),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassField {
    #[serde(skip)]
    pub start_byte: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Type>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub readonly: bool,
    #[serde(default, rename = "static", skip_serializing_if = "std::ops::Not::not")]
    pub is_static: bool,
    /// Absent on the wire means public; kept optional so absence round-trips.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<Privacy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceReference>,
    #[serde(default, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

/// A field linked to an HTML attribute.
///
/// `attribute` is always written, even when empty, so the variant survives
/// a round trip.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomElementField {
    #[serde(flatten)]
    pub field: ClassField,
    #[serde(default)]
    pub attribute: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub reflects: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Type>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub rest: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub readonly: bool,
    #[serde(default, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Return {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Type>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Signature shared by methods, functions and mixins.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionLike {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, rename = "return", skip_serializing_if = "Option::is_none")]
    pub r#return: Option<Return>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMethod {
    #[serde(skip)]
    pub start_byte: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, rename = "static", skip_serializing_if = "std::ops::Not::not")]
    pub is_static: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<Privacy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceReference>,
    #[serde(flatten)]
    pub signature: FunctionLike,
    #[serde(default, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

impl ClassField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl CustomElementField {
    pub fn new(name: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            field: ClassField::new(name),
            attribute: attribute.into(),
            reflects: false,
        }
    }
}

impl ClassMethod {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl ClassMember {
    pub fn kind(&self) -> MemberKind {
        match self {
            ClassMember::Field(_) | ClassMember::CustomElementField(_) => MemberKind::Field,
            ClassMember::Method(_) => MemberKind::Method,
        }
    }

    /// The plain-field part of a field member.
    pub fn as_field(&self) -> Option<&ClassField> {
        match self {
            ClassMember::Field(field) => Some(field),
            ClassMember::CustomElementField(ce) => Some(&ce.field),
            ClassMember::Method(_) => None,
        }
    }

    pub fn as_custom_element_field(&self) -> Option<&CustomElementField> {
        match self {
            ClassMember::CustomElementField(ce) => Some(ce),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&ClassMethod> {
        match self {
            ClassMember::Method(method) => Some(method),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ClassMember::Field(f) => &f.name,
            ClassMember::CustomElementField(ce) => &ce.field.name,
            ClassMember::Method(m) => &m.name,
        }
    }

    pub fn summary(&self) -> &str {
        match self {
            ClassMember::Field(f) => &f.summary,
            ClassMember::CustomElementField(ce) => &ce.field.summary,
            ClassMember::Method(m) => &m.summary,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            ClassMember::Field(f) => &f.description,
            ClassMember::CustomElementField(ce) => &ce.field.description,
            ClassMember::Method(m) => &m.description,
        }
    }

    pub fn deprecated(&self) -> &Deprecated {
        match self {
            ClassMember::Field(f) => &f.deprecated,
            ClassMember::CustomElementField(ce) => &ce.field.deprecated,
            ClassMember::Method(m) => &m.deprecated,
        }
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated().is_deprecated()
    }

    pub fn is_static(&self) -> bool {
        match self {
            ClassMember::Field(f) => f.is_static,
            ClassMember::CustomElementField(ce) => ce.field.is_static,
            ClassMember::Method(m) => m.is_static,
        }
    }

    pub fn privacy(&self) -> Privacy {
        let privacy = match self {
            ClassMember::Field(f) => f.privacy,
            ClassMember::CustomElementField(ce) => ce.field.privacy,
            ClassMember::Method(m) => m.privacy,
        };
        privacy.unwrap_or_default()
    }

    pub fn inherited_from(&self) -> Option<&Reference> {
        match self {
            ClassMember::Field(f) => f.inherited_from.as_ref(),
            ClassMember::CustomElementField(ce) => ce.field.inherited_from.as_ref(),
            ClassMember::Method(m) => m.inherited_from.as_ref(),
        }
    }

    pub fn start_byte(&self) -> u32 {
        match self {
            ClassMember::Field(f) => f.start_byte,
            ClassMember::CustomElementField(ce) => ce.field.start_byte,
            ClassMember::Method(m) => m.start_byte,
        }
    }

    /// Mutable access to the documentation and provenance slots shared by
    /// every variant.
    pub fn common_mut(&mut self) -> MemberCommonMut<'_> {
        match self {
            ClassMember::Field(f) => MemberCommonMut {
                summary: &mut f.summary,
                description: &mut f.description,
                inherited_from: &mut f.inherited_from,
            },
            ClassMember::CustomElementField(ce) => MemberCommonMut {
                summary: &mut ce.field.summary,
                description: &mut ce.field.description,
                inherited_from: &mut ce.field.inherited_from,
            },
            ClassMember::Method(m) => MemberCommonMut {
                summary: &mut m.summary,
                description: &mut m.description,
                inherited_from: &mut m.inherited_from,
            },
        }
    }
}

/// Borrowed view over the slots the merge rules rewrite.
pub struct MemberCommonMut<'a> {
    pub summary: &'a mut String,
    pub description: &'a mut String,
    pub inherited_from: &'a mut Option<Reference>,
}

impl From<ClassField> for ClassMember {
    fn from(field: ClassField) -> Self {
        ClassMember::Field(field)
    }
}

impl From<CustomElementField> for ClassMember {
    fn from(field: CustomElementField) -> Self {
        ClassMember::CustomElementField(field)
    }
}

impl From<ClassMethod> for ClassMember {
    fn from(method: ClassMethod) -> Self {
        ClassMember::Method(method)
    }
}
