//! Group configuration.
//!
//! [`GroupConfig`] holds every prop a checkbox group accepts. It can be built
//! in code with builder methods or loaded from JSON using the camelCase prop
//! names (`modelValue`, `buttonVariant`, `ariaInvalid`, ...).
//!
//! # Example
//!
//! ```
//! use checkgroup::config::GroupConfig;
//! use checkgroup::context::Size;
//!
//! let config = GroupConfig::new()
//!     .options(["one", "two", "three"])
//!     .buttons()
//!     .size(Size::Lg)
//!     .name("group");
//!
//! let from_json = GroupConfig::from_json(
//!     r#"{"options": ["one", "two", "three"], "buttons": true, "size": "lg", "name": "group"}"#,
//! ).unwrap();
//! assert_eq!(config, from_json);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::attrs::AriaInvalid;
use crate::context::Size;
use crate::error::GroupError;
use crate::options::{FieldNames, RawOption};
use crate::selection::SelectionCollection;

/// Default variant for button-mode checkboxes.
pub const DEFAULT_BUTTON_VARIANT: &str = "secondary";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupConfig {
    /// Explicit container id. Without one, an id is generated on mount.
    pub id: Option<String>,
    /// The controlled selection.
    pub model_value: SelectionCollection,
    pub options: Vec<RawOption>,

    // Mode
    pub buttons: bool,
    pub stacked: bool,
    pub size: Option<Size>,
    pub button_variant: String,
    pub plain: bool,
    pub switches: bool,

    // Validation
    pub validated: bool,
    pub state: Option<bool>,
    pub aria_invalid: Option<AriaInvalid>,

    // Form
    pub disabled: bool,
    pub required: bool,
    pub name: Option<String>,
    pub form: Option<String>,

    /// Record keys read when normalizing options.
    #[serde(flatten)]
    pub fields: FieldNames,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            id: None,
            model_value: SelectionCollection::new(),
            options: Vec::new(),
            buttons: false,
            stacked: false,
            size: None,
            button_variant: DEFAULT_BUTTON_VARIANT.to_string(),
            plain: false,
            switches: false,
            validated: false,
            state: None,
            aria_invalid: None,
            disabled: false,
            required: false,
            name: None,
            form: None,
            fields: FieldNames::default(),
        }
    }
}

impl GroupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, GroupError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GroupError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        log::debug!("[config] loaded {}", path.as_ref().display());
        Self::from_json(&json)
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn model_value(mut self, value: impl Into<SelectionCollection>) -> Self {
        self.model_value = value.into();
        self
    }

    pub fn options<I, O>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<RawOption>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Render children as buttons.
    pub fn buttons(mut self) -> Self {
        self.buttons = true;
        self
    }

    pub fn stacked(mut self) -> Self {
        self.stacked = true;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn button_variant(mut self, variant: impl Into<String>) -> Self {
        self.button_variant = variant.into();
        self
    }

    /// Render children without form-check styling classes.
    pub fn plain(mut self) -> Self {
        self.plain = true;
        self
    }

    /// Render children as switches.
    pub fn switches(mut self) -> Self {
        self.switches = true;
        self
    }

    pub fn validated(mut self) -> Self {
        self.validated = true;
        self
    }

    pub fn state(mut self, state: bool) -> Self {
        self.state = Some(state);
        self
    }

    pub fn aria_invalid(mut self, value: impl Into<AriaInvalid>) -> Self {
        self.aria_invalid = Some(value.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn form(mut self, form: impl Into<String>) -> Self {
        self.form = Some(form.into());
        self
    }

    pub fn fields(mut self, fields: FieldNames) -> Self {
        self.fields = fields;
        self
    }
}
