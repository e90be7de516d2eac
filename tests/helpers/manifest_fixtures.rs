//! Manifest documents used across the integration suite.

/// A small design-system package: a base element, a mixin, and two
/// elements built on them, with exports for each.
pub const DESIGN_SYSTEM: &str = r#"{
  "schemaVersion": "1.0.0",
  "readme": "README.md",
  "modules": [
    {
      "kind": "javascript-module",
      "path": "src/base.js",
      "declarations": [
        {
          "kind": "class",
          "customElement": true,
          "name": "BaseElement",
          "summary": "Shared base.",
          "attributes": [
            { "name": "theme", "type": { "text": "'light' | 'dark'" }, "default": "'light'", "fieldName": "theme" }
          ],
          "slots": [ { "name": "", "description": "Default content." } ],
          "cssProperties": [ { "name": "--base-color", "syntax": "<color>" } ],
          "members": [
            { "kind": "field", "name": "theme", "attribute": "theme", "reflects": true, "description": "Colour theme." },
            { "kind": "method", "name": "render", "description": "Base render." }
          ]
        }
      ],
      "exports": [
        { "kind": "js", "name": "BaseElement", "declaration": { "name": "BaseElement", "module": "src/base.js" } }
      ]
    },
    {
      "kind": "javascript-module",
      "path": "src/focusable.js",
      "declarations": [
        {
          "kind": "mixin",
          "customElement": true,
          "name": "Focusable",
          "attributes": [ { "name": "disabled", "type": { "text": "boolean" } } ],
          "events": [ { "name": "focus-change", "type": { "text": "CustomEvent" } } ],
          "cssStates": [ { "name": "focused" } ],
          "members": [
            { "kind": "field", "name": "disabled", "attribute": "disabled" },
            { "kind": "method", "name": "focus" }
          ],
          "parameters": [ { "name": "superClass" } ]
        }
      ]
    },
    {
      "kind": "javascript-module",
      "path": "src/button.js",
      "declarations": [
        {
          "kind": "class",
          "customElement": true,
          "name": "MyButton",
          "tagName": "my-button",
          "superclass": { "name": "BaseElement", "module": "src/base.js" },
          "mixins": [ { "name": "Focusable", "module": "src/focusable.js" } ],
          "attributes": [
            { "name": "variant", "type": { "text": "'primary' | 'secondary'" }, "fieldName": "variant" }
          ],
          "slots": [ { "name": "icon" } ],
          "cssParts": [ { "name": "label" }, { "name": "button" } ],
          "members": [
            { "kind": "field", "name": "variant", "attribute": "variant", "reflects": true },
            { "kind": "method", "name": "render", "description": "Button render." }
          ]
        },
        {
          "kind": "class",
          "customElement": true,
          "name": "MyIconButton",
          "tagName": "my-icon-button",
          "superclass": { "name": "MyButton" },
          "attributes": [ { "name": "icon" } ],
          "deprecated": "Use my-button with an icon slot."
        }
      ],
      "exports": [
        { "kind": "js", "name": "MyButton", "declaration": { "name": "MyButton", "module": "src/button.js" } },
        { "kind": "custom-element-definition", "name": "my-button", "declaration": { "name": "MyButton", "module": "src/button.js" } },
        { "kind": "custom-element-definition", "name": "my-icon-button", "declaration": { "name": "MyIconButton" } }
      ]
    }
  ]
}"#;

/// One module covering every declaration, member and export variant.
pub const EVERY_VARIANT: &str = r#"{
  "schemaVersion": "1.0.0",
  "deprecated": true,
  "modules": [
    {
      "kind": "javascript-module",
      "path": "src/all.js",
      "summary": "Everything.",
      "deprecated": "moved",
      "declarations": [
        { "kind": "class", "name": "Plain", "members": [
            { "kind": "field", "name": "count", "type": { "text": "number" }, "default": "0", "static": true, "privacy": "protected" },
            { "kind": "method", "name": "reset", "parameters": [ { "name": "hard", "optional": true } ], "return": { "type": { "text": "void" } } }
        ] },
        { "kind": "class", "customElement": true, "name": "Element", "tagName": "x-element",
          "members": [ { "kind": "field", "name": "open", "attribute": "open", "reflects": true, "deprecated": false } ],
          "demos": [ { "url": "https://example.com/demo" } ] },
        { "kind": "mixin", "name": "PlainMixin", "parameters": [ { "name": "base" } ] },
        { "kind": "mixin", "customElement": true, "name": "ElementMixin", "slots": [ { "name": "extra" } ] },
        { "kind": "function", "name": "helper", "parameters": [ { "name": "x", "rest": true } ] },
        { "kind": "variable", "name": "VERSION", "type": { "text": "string" }, "default": "'1.0'", "readonly": true }
      ],
      "exports": [
        { "kind": "js", "name": "Plain", "declaration": { "name": "Plain" } },
        { "kind": "custom-element-definition", "name": "x-element", "declaration": { "name": "Element", "module": "src/all.js" } }
      ]
    }
  ]
}"#;

/// Elements whose superclasses reference each other.
pub const SUPERCLASS_CYCLE: &str = r#"{
  "schemaVersion": "1.0.0",
  "modules": [
    {
      "path": "src/cycle.js",
      "declarations": [
        { "kind": "class", "customElement": true, "name": "Ping", "tagName": "x-ping",
          "superclass": { "name": "Pong" }, "attributes": [ { "name": "ping" } ] },
        { "kind": "class", "customElement": true, "name": "Pong", "tagName": "x-pong",
          "superclass": { "name": "Ping" }, "attributes": [ { "name": "pong" } ] },
        { "kind": "class", "customElement": true, "name": "Narcissus", "tagName": "x-self",
          "superclass": { "name": "Narcissus" }, "mixins": [ { "name": "Narcissus" } ],
          "attributes": [ { "name": "self" } ] }
      ]
    }
  ]
}"#;

/// Manifest with recoverable problems mixed into valid content.
pub const PARTLY_BROKEN: &str = r#"{
  "schemaVersion": "1.0.0",
  "modules": [
    {
      "path": "src/partly.js",
      "declarations": [
        { "kind": "interface", "name": "Nope" },
        { "name": "NoKind" },
        { "kind": "class", "customElement": true, "name": "Good", "tagName": "x-good",
          "members": [ { "kind": "accessor", "name": "weird" }, { "kind": "field", "name": "fine" } ] },
        42
      ],
      "exports": [ { "kind": "re-export", "name": "Good", "declaration": { "name": "Good" } } ]
    }
  ]
}"#;
