//! Group context shared with child checkboxes.
//!
//! Each render pass the group builds one immutable [`GroupContext`] and hands
//! an `Arc` of it to every child it composes. Children read validation,
//! disabled, required and selection state from it instead of having each
//! prop wired individually. Contexts are per group instance, so two groups
//! never observe each other's state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::GroupConfig;
use crate::error::GroupError;
use crate::selection::SelectionCollection;
use crate::value::OptionValue;

/// Class applied to a child when its resolved state is valid.
pub const VALID_CLASS: &str = "is-valid";

/// Class applied to a child when its resolved state is invalid.
pub const INVALID_CLASS: &str = "is-invalid";

/// Control size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    /// The default size; renders no size class.
    #[default]
    Md,
    Lg,
}

impl Size {
    /// Suffix for `btn-group-*` / `btn-*` classes, `None` for the default size.
    pub fn modifier(self) -> Option<&'static str> {
        match self {
            Self::Sm => Some("sm"),
            Self::Md => None,
            Self::Lg => Some("lg"),
        }
    }
}

impl FromStr for Size {
    type Err = GroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            _ => Err(GroupError::InvalidSize(s.to_string())),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        })
    }
}

/// Immutable snapshot of group-level configuration for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupState {
    pub validated: bool,
    /// `Some(true)` valid, `Some(false)` invalid, `None` neutral.
    pub state: Option<bool>,
    pub disabled: bool,
    pub required: bool,
    pub name: Option<String>,
    pub size: Option<Size>,
    pub buttons: bool,
    pub stacked: bool,
    pub button_variant: String,
    pub plain: bool,
    pub switches: bool,
    pub form: Option<String>,
}

impl From<&GroupConfig> for GroupState {
    fn from(config: &GroupConfig) -> Self {
        Self {
            validated: config.validated,
            state: config.state,
            disabled: config.disabled,
            required: config.required,
            name: config.name.clone(),
            size: config.size,
            buttons: config.buttons,
            stacked: config.stacked,
            button_variant: config.button_variant.clone(),
            plain: config.plain,
            switches: config.switches,
            form: config.form.clone(),
        }
    }
}

impl Default for GroupState {
    fn default() -> Self {
        Self::from(&GroupConfig::default())
    }
}

/// The read channel a group exposes to its children.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupContext {
    state: GroupState,
    selection: SelectionCollection,
    group_id: Option<String>,
}

impl GroupContext {
    pub fn new(state: GroupState, selection: SelectionCollection, group_id: Option<String>) -> Self {
        Self {
            state,
            selection,
            group_id,
        }
    }

    pub fn state(&self) -> &GroupState {
        &self.state
    }

    pub fn selection(&self) -> &SelectionCollection {
        &self.selection
    }

    /// The container id, absent until the group is mounted or given an id.
    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn is_checked(&self, value: &OptionValue) -> bool {
        self.selection.contains(value)
    }

    /// A child is disabled by its own flag or by the group.
    pub fn resolve_disabled(&self, own: bool) -> bool {
        own || self.state.disabled
    }

    /// Required only propagates when the group also has a name.
    pub fn resolve_required(&self) -> bool {
        self.state.required && self.state.name.is_some()
    }

    /// Validation class for a child; the child's own state wins when set.
    pub fn validation_class(&self, own: Option<bool>) -> Option<&'static str> {
        match own.or(self.state.state) {
            Some(true) => Some(VALID_CLASS),
            Some(false) => Some(INVALID_CLASS),
            None => None,
        }
    }

    /// Button variant for a child, falling back to the group variant.
    pub fn button_variant<'a>(&'a self, own: Option<&'a str>) -> &'a str {
        own.unwrap_or(&self.state.button_variant)
    }

    /// Id of the child at `index`, derived from the group id.
    pub fn option_id(&self, index: usize) -> Option<String> {
        self.group_id
            .as_ref()
            .map(|id| format!("{id}__BV_option_{index}"))
    }
}
