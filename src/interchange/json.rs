//! Custom Elements Manifest JSON support.
//!
//! ## Variant dispatch
//!
//! | Position | `kind`                      | Marker                 | Variant                  |
//! |----------|-----------------------------|------------------------|--------------------------|
//! | decl     | `class`                     | `customElement: true`  | CustomElement/Class      |
//! | decl     | `mixin`                     | `customElement: true`  | CustomElementMixin/Mixin |
//! | decl     | `custom-element-definition` |                        | CustomElement            |
//! | decl     | `function`/`variable`       |                        | Function/Variable        |
//! | member   | `field`                     | `attribute`/`reflects` | CustomElementField/Field |
//! | member   | `method`                    |                        | Method                   |
//! | export   | `js`                        |                        | JavaScript               |
//! | export   | `custom-element-definition` |                        | CustomElement            |
//!
//! A `null` value reads the same as an absent key, including for the
//! markers.

use super::{DecodeError, DecodeOptions, Decoded, ManifestFormat};
use crate::manifest::Package;

/// Custom Elements Manifest JSON format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestJson {
    pub options: DecodeOptions,
    /// Write indented output.
    pub pretty: bool,
}

impl ManifestJson {
    pub fn new(options: DecodeOptions) -> Self {
        Self {
            options,
            pretty: false,
        }
    }

    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

impl ManifestFormat for ManifestJson {
    fn name(&self) -> &'static str {
        "Custom Elements Manifest"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn read(&self, input: &[u8]) -> Result<Decoded, DecodeError> {
        reader::read(input, self.options)
    }

    fn write(&self, package: &Package) -> Result<Vec<u8>, DecodeError> {
        if self.pretty {
            serde_json::to_vec_pretty(package).map_err(DecodeError::json)
        } else {
            serde_json::to_vec(package).map_err(DecodeError::json)
        }
    }

    fn validate(&self, input: &[u8]) -> Result<(), DecodeError> {
        let content = std::str::from_utf8(input)
            .map_err(|e| DecodeError::json(format!("Invalid UTF-8: {e}")))?;
        if !content.trim_start().starts_with('{') {
            return Err(DecodeError::InvalidRoot {
                found: "non-object",
            });
        }
        Ok(())
    }
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// READER
// ============================================================================

mod reader {
    use super::*;
    use crate::base::constants::{
        CUSTOM_ELEMENT_FIELD_KEYS, CUSTOM_ELEMENT_FLAG, KIND_CLASS, KIND_CUSTOM_ELEMENT_DEFINITION,
        KIND_FIELD, KIND_FUNCTION, KIND_JS_EXPORT, KIND_METHOD, KIND_MIXIN, KIND_VARIABLE,
    };
    use crate::interchange::{DecodeErrors, Position};
    use crate::manifest::{
        ClassDeclaration, ClassField, ClassMember, ClassMethod, CustomElementDeclaration,
        CustomElementExport, CustomElementField, CustomElementMixinDeclaration, Declaration, Export,
        FunctionDeclaration, JavaScriptExport, MixinDeclaration, Module, VariableDeclaration,
    };
    use serde::Deserialize;
    use serde::de::{self, DeserializeOwned, Deserializer};
    use serde_json::{Map, Value};
    use tracing::{debug, warn};

    /// Path label for a value decoded on its own, outside a package.
    const ROOT: &str = "$";

    pub(crate) fn read(input: &[u8], options: DecodeOptions) -> Result<Decoded, DecodeError> {
        let value: Value = serde_json::from_slice(input).map_err(DecodeError::json)?;
        if !value.is_object() {
            return Err(DecodeError::InvalidRoot {
                found: json_type(&value),
            });
        }
        check_deprecated(&value, ROOT)?;

        let mut decoder = Decoder::new(options);
        let package = decoder.package(value)?;
        let warnings = decoder.into_warnings();
        debug!(
            modules = package.modules.len(),
            declarations = package.declarations().count(),
            warnings = warnings.len(),
            "decoded manifest"
        );
        Ok(Decoded { package, warnings })
    }

    fn child(parent: &str, key: &str) -> String {
        if parent.is_empty() || parent == ROOT {
            key.to_string()
        } else {
            format!("{parent}.{key}")
        }
    }

    fn index(parent: &str, i: usize) -> String {
        format!("{parent}[{i}]")
    }

    /// Reject any `deprecated` value that is not bool, string or null.
    ///
    /// Runs over the whole tree before element decoding starts, so that
    /// this error stays fatal even where the element would otherwise be
    /// skipped.
    pub(crate) fn check_deprecated(value: &Value, path: &str) -> Result<(), DecodeError> {
        match value {
            Value::Object(object) => {
                for (key, item) in object {
                    let item_path = child(path, key);
                    if key == "deprecated"
                        && !matches!(item, Value::Null | Value::Bool(_) | Value::String(_))
                    {
                        return Err(DecodeError::InvalidDeprecated {
                            path: item_path,
                            found: json_type(item),
                        });
                    }
                    check_deprecated(item, &item_path)?;
                }
                Ok(())
            }
            Value::Array(items) => items
                .iter()
                .enumerate()
                .try_for_each(|(i, item)| check_deprecated(item, &index(path, i))),
            _ => Ok(()),
        }
    }

    /// Remove an array-valued key. Absent and `null` read as empty.
    fn take_array(object: &mut Map<String, Value>, key: &str) -> Result<Vec<Value>, String> {
        match object.remove(key) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items),
            Some(other) => {
                let found = json_type(&other);
                Err(format!("`{key}` must be an array, found {found}"))
            }
        }
    }

    /// Drop `null`-valued keys at every depth so they read as absent.
    fn strip_nulls(object: &mut Map<String, Value>) {
        object.retain(|_, value| !value.is_null());
        object.values_mut().for_each(strip_nested_nulls);
    }

    fn strip_nested_nulls(value: &mut Value) {
        match value {
            Value::Object(object) => strip_nulls(object),
            Value::Array(items) => items.iter_mut().for_each(strip_nested_nulls),
            _ => {}
        }
    }

    /// Walks a parsed document and builds the model, applying the
    /// recoverable-error policy at each variant position.
    pub(crate) struct Decoder {
        strict: bool,
        warnings: DecodeErrors,
    }

    impl Decoder {
        pub(crate) fn new(options: DecodeOptions) -> Self {
            Self {
                strict: options.strict,
                warnings: DecodeErrors::new(),
            }
        }

        fn strict() -> Self {
            Self::new(DecodeOptions { strict: true })
        }

        pub(crate) fn into_warnings(self) -> DecodeErrors {
            self.warnings
        }

        /// Escalate under the strict policy, otherwise record and skip.
        fn recover<T>(&mut self, error: DecodeError) -> Result<Option<T>, DecodeError> {
            if self.strict {
                return Err(error);
            }
            warn!(%error, "skipping manifest element");
            self.warnings.push(error);
            Ok(None)
        }

        fn object(
            &mut self,
            value: Value,
            position: Position,
            path: &str,
        ) -> Result<Option<Map<String, Value>>, DecodeError> {
            match value {
                Value::Object(object) => Ok(Some(object)),
                other => self.recover(DecodeError::NotAnObject {
                    position,
                    path: path.to_string(),
                    found: json_type(&other),
                }),
            }
        }

        fn kind(
            &mut self,
            object: &Map<String, Value>,
            position: Position,
            path: &str,
        ) -> Result<Option<String>, DecodeError> {
            match object.get("kind") {
                Some(Value::String(kind)) => Ok(Some(kind.clone())),
                None | Some(Value::Null) => self.recover(DecodeError::MissingKind {
                    position,
                    path: path.to_string(),
                }),
                Some(other) => self.recover(DecodeError::UnknownKind {
                    position,
                    kind: other.to_string(),
                    path: path.to_string(),
                }),
            }
        }

        fn structural<T: DeserializeOwned>(
            &mut self,
            mut object: Map<String, Value>,
            position: Position,
            path: &str,
        ) -> Result<Option<T>, DecodeError> {
            strip_nulls(&mut object);
            match serde_json::from_value(Value::Object(object)) {
                Ok(value) => Ok(Some(value)),
                Err(error) => self.recover(DecodeError::invalid(position, path, error)),
            }
        }

        fn elements(
            &mut self,
            object: &mut Map<String, Value>,
            key: &str,
            owner: Position,
            path: &str,
        ) -> Result<Option<Vec<Value>>, DecodeError> {
            match take_array(object, key) {
                Ok(items) => Ok(Some(items)),
                Err(message) => self.recover(DecodeError::invalid(owner, path, message)),
            }
        }

        pub(crate) fn package(&mut self, value: Value) -> Result<Package, DecodeError> {
            let mut object = match value {
                Value::Object(object) => object,
                other => {
                    return Err(DecodeError::InvalidRoot {
                        found: json_type(&other),
                    });
                }
            };
            let modules = take_array(&mut object, "modules")
                .map_err(|message| DecodeError::invalid(Position::Package, ROOT, message))?;
            strip_nulls(&mut object);
            let mut package: Package = serde_json::from_value(Value::Object(object))
                .map_err(|e| DecodeError::invalid(Position::Package, ROOT, e))?;

            package.modules.reserve(modules.len());
            for (i, module) in modules.into_iter().enumerate() {
                if let Some(module) = self.module(module, &index("modules", i))? {
                    package.modules.push(module);
                }
            }
            Ok(package)
        }

        pub(crate) fn module(
            &mut self,
            value: Value,
            path: &str,
        ) -> Result<Option<Module>, DecodeError> {
            let Some(mut object) = self.object(value, Position::Module, path)? else {
                return Ok(None);
            };
            let Some(declarations) =
                self.elements(&mut object, "declarations", Position::Module, path)?
            else {
                return Ok(None);
            };
            let Some(exports) = self.elements(&mut object, "exports", Position::Module, path)?
            else {
                return Ok(None);
            };
            let Some(mut module) = self.structural::<Module>(object, Position::Module, path)? else {
                return Ok(None);
            };

            let declarations_path = child(path, "declarations");
            for (i, value) in declarations.into_iter().enumerate() {
                if let Some(declaration) = self.declaration(value, &index(&declarations_path, i))? {
                    module.declarations.push(declaration);
                }
            }
            let exports_path = child(path, "exports");
            for (i, value) in exports.into_iter().enumerate() {
                if let Some(export) = self.export(value, &index(&exports_path, i))? {
                    module.exports.push(export);
                }
            }
            Ok(Some(module))
        }

        pub(crate) fn declaration(
            &mut self,
            value: Value,
            path: &str,
        ) -> Result<Option<Declaration>, DecodeError> {
            const POSITION: Position = Position::Declaration;
            let Some(mut object) = self.object(value, POSITION, path)? else {
                return Ok(None);
            };
            let Some(kind) = self.kind(&object, POSITION, path)? else {
                return Ok(None);
            };
            let custom_element = object
                .get(CUSTOM_ELEMENT_FLAG)
                .and_then(Value::as_bool)
                .unwrap_or(false);
            let Some(members) = self.elements(&mut object, "members", POSITION, path)? else {
                return Ok(None);
            };

            let declaration = match (kind.as_str(), custom_element) {
                (KIND_CLASS, true) | (KIND_CUSTOM_ELEMENT_DEFINITION, _) => self
                    .structural::<CustomElementDeclaration>(object, POSITION, path)?
                    .map(Declaration::CustomElement),
                (KIND_CLASS, false) => self
                    .structural::<ClassDeclaration>(object, POSITION, path)?
                    .map(Declaration::Class),
                (KIND_MIXIN, true) => self
                    .structural::<CustomElementMixinDeclaration>(object, POSITION, path)?
                    .map(Declaration::CustomElementMixin),
                (KIND_MIXIN, false) => self
                    .structural::<MixinDeclaration>(object, POSITION, path)?
                    .map(Declaration::Mixin),
                (KIND_FUNCTION, _) => self
                    .structural::<FunctionDeclaration>(object, POSITION, path)?
                    .map(Declaration::Function),
                (KIND_VARIABLE, _) => self
                    .structural::<VariableDeclaration>(object, POSITION, path)?
                    .map(Declaration::Variable),
                _ => {
                    return self.recover(DecodeError::UnknownKind {
                        position: POSITION,
                        kind,
                        path: path.to_string(),
                    });
                }
            };
            let Some(mut declaration) = declaration else {
                return Ok(None);
            };

            if let Some(class) = declaration.class_like_mut() {
                let members_path = child(path, "members");
                class.members.reserve(members.len());
                for (i, value) in members.into_iter().enumerate() {
                    if let Some(member) = self.member(value, &index(&members_path, i))? {
                        class.members.push(member);
                    }
                }
            }
            Ok(Some(declaration))
        }

        pub(crate) fn member(
            &mut self,
            value: Value,
            path: &str,
        ) -> Result<Option<ClassMember>, DecodeError> {
            const POSITION: Position = Position::Member;
            let Some(object) = self.object(value, POSITION, path)? else {
                return Ok(None);
            };
            let Some(kind) = self.kind(&object, POSITION, path)? else {
                return Ok(None);
            };
            match kind.as_str() {
                KIND_FIELD
                    if CUSTOM_ELEMENT_FIELD_KEYS
                        .iter()
                        .any(|key| object.get(*key).is_some_and(|value| !value.is_null())) =>
                {
                    Ok(self
                        .structural::<CustomElementField>(object, POSITION, path)?
                        .map(ClassMember::CustomElementField))
                }
                KIND_FIELD => Ok(self
                    .structural::<ClassField>(object, POSITION, path)?
                    .map(ClassMember::Field)),
                KIND_METHOD => Ok(self
                    .structural::<ClassMethod>(object, POSITION, path)?
                    .map(ClassMember::Method)),
                _ => self.recover(DecodeError::UnknownKind {
                    position: POSITION,
                    kind,
                    path: path.to_string(),
                }),
            }
        }

        pub(crate) fn export(
            &mut self,
            value: Value,
            path: &str,
        ) -> Result<Option<Export>, DecodeError> {
            const POSITION: Position = Position::Export;
            let Some(object) = self.object(value, POSITION, path)? else {
                return Ok(None);
            };
            let Some(kind) = self.kind(&object, POSITION, path)? else {
                return Ok(None);
            };
            match kind.as_str() {
                KIND_JS_EXPORT => Ok(self
                    .structural::<JavaScriptExport>(object, POSITION, path)?
                    .map(Export::JavaScript)),
                KIND_CUSTOM_ELEMENT_DEFINITION => Ok(self
                    .structural::<CustomElementExport>(object, POSITION, path)?
                    .map(Export::CustomElement)),
                _ => self.recover(DecodeError::UnknownKind {
                    position: POSITION,
                    kind,
                    path: path.to_string(),
                }),
            }
        }
    }

    /// Decode a standalone value under the strict policy.
    fn decode_strict<T, E: de::Error>(
        decode: impl FnOnce(&mut Decoder) -> Result<Option<T>, DecodeError>,
    ) -> Result<T, E> {
        match decode(&mut Decoder::strict()) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(E::custom("element was skipped")),
            Err(error) => Err(E::custom(error)),
        }
    }

    // Direct serde deserialization of the variant types (e.g. through a
    // derived `Package` impl) is strict: the first bad element fails the
    // whole value.

    impl<'de> Deserialize<'de> for Declaration {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let value = Value::deserialize(deserializer)?;
            decode_strict(|decoder| decoder.declaration(value, ROOT))
        }
    }

    impl<'de> Deserialize<'de> for ClassMember {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let value = Value::deserialize(deserializer)?;
            decode_strict(|decoder| decoder.member(value, ROOT))
        }
    }

    impl<'de> Deserialize<'de> for Export {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let value = Value::deserialize(deserializer)?;
            decode_strict(|decoder| decoder.export(value, ROOT))
        }
    }
}

// ============================================================================
// WRITER
// ============================================================================

mod writer {
    use crate::base::constants::{
        KIND_CLASS, KIND_CUSTOM_ELEMENT_DEFINITION, KIND_FIELD, KIND_FUNCTION, KIND_JS_EXPORT,
        KIND_METHOD, KIND_MIXIN, KIND_VARIABLE,
    };
    use crate::manifest::{ClassMember, Declaration, Export};
    use serde::{Serialize, Serializer};

    /// A variant body preceded by its `kind` discriminator.
    #[derive(Serialize)]
    struct Tagged<'a, T: Serialize> {
        kind: &'static str,
        #[serde(rename = "customElement", skip_serializing_if = "std::ops::Not::not")]
        custom_element: bool,
        #[serde(flatten)]
        body: &'a T,
    }

    fn tagged<'a, T: Serialize>(kind: &'static str, body: &'a T) -> Tagged<'a, T> {
        Tagged {
            kind,
            custom_element: false,
            body,
        }
    }

    /// Custom-element variants re-encode as `class`/`mixin` plus the flag,
    /// whatever kind they were read from.
    fn custom_element<'a, T: Serialize>(kind: &'static str, body: &'a T) -> Tagged<'a, T> {
        Tagged {
            kind,
            custom_element: true,
            body,
        }
    }

    impl Serialize for Declaration {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Declaration::Class(d) => tagged(KIND_CLASS, d).serialize(serializer),
                Declaration::CustomElement(d) => {
                    custom_element(KIND_CLASS, d).serialize(serializer)
                }
                Declaration::Mixin(d) => tagged(KIND_MIXIN, d).serialize(serializer),
                Declaration::CustomElementMixin(d) => {
                    custom_element(KIND_MIXIN, d).serialize(serializer)
                }
                Declaration::Function(d) => tagged(KIND_FUNCTION, d).serialize(serializer),
                Declaration::Variable(d) => tagged(KIND_VARIABLE, d).serialize(serializer),
            }
        }
    }

    impl Serialize for ClassMember {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                ClassMember::Field(m) => tagged(KIND_FIELD, m).serialize(serializer),
                ClassMember::CustomElementField(m) => tagged(KIND_FIELD, m).serialize(serializer),
                ClassMember::Method(m) => tagged(KIND_METHOD, m).serialize(serializer),
            }
        }
    }

    impl Serialize for Export {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Export::JavaScript(e) => tagged(KIND_JS_EXPORT, e).serialize(serializer),
                Export::CustomElement(e) => {
                    tagged(KIND_CUSTOM_ELEMENT_DEFINITION, e).serialize(serializer)
                }
            }
        }
    }
}
