//! Option normalization.
//!
//! Groups accept a heterogeneous option list: plain scalar values, or
//! records with display text, an optional distinct value, a disabled flag,
//! a per-option validation override and extra rendering props. Everything
//! is normalized into an ordered list of [`OptionDescriptor`]s before
//! rendering.
//!
//! # Example
//!
//! ```
//! use checkgroup::OptionValue;
//! use checkgroup::options::{FieldNames, RawOption, normalize_options};
//!
//! let raw = vec![
//!     RawOption::from("one"),
//!     RawOption::record("Two").value(2i64),
//!     RawOption::record("Three").disabled(),
//! ];
//! let options = normalize_options(&raw, &FieldNames::default());
//! assert_eq!(options[1].value, OptionValue::Int(2));
//! assert_eq!(options[2].value, OptionValue::from("Three"));
//! assert!(options[2].disabled);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::value::OptionValue;

/// Key holding per-option rendering props in a record.
pub const PROPS_KEY: &str = "props";

/// Key holding a per-option validation override in a record.
pub const STATE_KEY: &str = "state";

/// Prop overriding the group's button variant for a single option.
pub const BUTTON_VARIANT_PROP: &str = "buttonVariant";

/// An option as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawOption {
    /// A plain value, used as both value and display text.
    Value(OptionValue),
    /// A descriptor record, read through [`FieldNames`].
    Record(Map<String, Value>),
}

impl RawOption {
    /// Start a record with the given display text.
    pub fn record(text: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("text".into(), Value::String(text.into()));
        Self::Record(map)
    }

    /// Set a raw record field. A plain value is promoted to a record first.
    pub fn with(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut map = self.into_record();
        map.insert(key.into(), value.into());
        Self::Record(map)
    }

    /// Set an explicit value distinct from the display text.
    pub fn value(self, value: impl Into<OptionValue>) -> Self {
        let value: OptionValue = value.into();
        self.with("value", value)
    }

    /// Mark the option as disabled.
    pub fn disabled(self) -> Self {
        self.with("disabled", true)
    }

    /// Override the group validation state for this option only.
    pub fn state(self, state: bool) -> Self {
        self.with(STATE_KEY, state)
    }

    /// Set an extra rendering prop (e.g. `buttonVariant`).
    pub fn prop(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut map = self.into_record();
        let props = map
            .entry(PROPS_KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        if !props.is_object() {
            *props = Value::Object(Map::new());
        }
        if let Value::Object(props) = props {
            props.insert(key.into(), value.into());
        }
        Self::Record(map)
    }

    fn into_record(self) -> Map<String, Value> {
        match self {
            Self::Record(map) => map,
            Self::Value(value) => {
                let mut map = Map::new();
                map.insert("text".into(), Value::String(value.to_string()));
                map.insert("value".into(), value.into());
                map
            }
        }
    }
}

impl From<OptionValue> for RawOption {
    fn from(value: OptionValue) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for RawOption {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for RawOption {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for RawOption {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

/// Record keys read by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldNames {
    #[serde(rename = "textField")]
    pub text: String,
    #[serde(rename = "valueField")]
    pub value: String,
    #[serde(rename = "disabledField")]
    pub disabled: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            text: "text".into(),
            value: "value".into(),
            disabled: "disabled".into(),
        }
    }
}

/// A normalized, read-only option ready to render as one checkbox.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionDescriptor {
    pub value: OptionValue,
    pub text: String,
    /// The option's own disabled flag. The group flag is applied at render time.
    pub disabled: bool,
    /// Explicit validation state; wins over the group state when set.
    pub state: Option<bool>,
    pub props: Map<String, Value>,
}

impl OptionDescriptor {
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    pub fn button_variant(&self) -> Option<&str> {
        self.props.get(BUTTON_VARIANT_PROP).and_then(Value::as_str)
    }
}

/// Normalize an option list, preserving order and duplicates.
pub fn normalize_options(raw: &[RawOption], fields: &FieldNames) -> Vec<OptionDescriptor> {
    raw.iter()
        .enumerate()
        .map(|(index, option)| {
            let descriptor = normalize_option(option, fields);
            if descriptor.text.is_empty() && descriptor.value == OptionValue::Text(String::new()) {
                log::debug!("[options] option {} has neither text nor value", index);
            }
            descriptor
        })
        .collect()
}

/// Normalize a single option.
pub fn normalize_option(raw: &RawOption, fields: &FieldNames) -> OptionDescriptor {
    match raw {
        RawOption::Value(value) => OptionDescriptor {
            value: value.clone(),
            text: value.to_string(),
            disabled: false,
            state: None,
            props: Map::new(),
        },
        RawOption::Record(map) => {
            let text = map.get(&fields.text).and_then(display_text);
            let value = map.get(&fields.value).and_then(OptionValue::from_json);

            let (value, text) = match (value, text) {
                (Some(value), Some(text)) => (value, text),
                (Some(value), None) => {
                    let text = value.to_string();
                    (value, text)
                }
                (None, Some(text)) => (OptionValue::Text(text.clone()), text),
                (None, None) => (OptionValue::Text(String::new()), String::new()),
            };

            OptionDescriptor {
                value,
                text,
                disabled: map
                    .get(&fields.disabled)
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
                state: map.get(STATE_KEY).and_then(Value::as_bool),
                props: map
                    .get(PROPS_KEY)
                    .and_then(Value::as_object)
                    .cloned()
                    .unwrap_or_default(),
            }
        }
    }
}

fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
