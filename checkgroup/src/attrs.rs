//! Container attribute resolution.
//!
//! Computes the group container's DOM-facing attributes from a
//! [`GroupState`]: role, tabindex, id, class list and `aria-invalid`.

use formdom::Element;
use serde::{Deserialize, Serialize};

use crate::context::GroupState;

pub const NO_FOCUS_RING_CLASS: &str = "bv-no-focus-ring";
pub const BUTTON_GROUP_CLASS: &str = "btn-group";
pub const BUTTON_GROUP_VERTICAL_CLASS: &str = "btn-group-vertical";
pub const WAS_VALIDATED_CLASS: &str = "was-validated";

/// Explicit `aria-invalid` override.
///
/// `true`, `"true"` and `""` all force `aria-invalid="true"`. `false` and
/// `"false"` are no override. Any other token (`"grammar"`, `"spelling"`)
/// is written through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AriaInvalid {
    Bool(bool),
    Token(String),
}

impl AriaInvalid {
    /// The attribute value this override produces on its own.
    pub fn resolve(&self) -> Option<&str> {
        match self {
            Self::Bool(true) => Some("true"),
            Self::Bool(false) => None,
            Self::Token(token) => match token.as_str() {
                "" | "true" => Some("true"),
                "false" => None,
                other => Some(other),
            },
        }
    }

    pub fn is_truthy(&self) -> bool {
        self.resolve() == Some("true")
    }
}

impl From<bool> for AriaInvalid {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for AriaInvalid {
    fn from(s: &str) -> Self {
        Self::Token(s.to_string())
    }
}

/// Resolve `aria-invalid` from the explicit override and validation state.
///
/// A truthy override or `state == Some(false)` yields `"true"`.
pub fn resolve_aria_invalid(explicit: Option<&AriaInvalid>, state: Option<bool>) -> Option<String> {
    if state == Some(false) {
        return Some("true".to_string());
    }
    explicit.and_then(AriaInvalid::resolve).map(str::to_string)
}

/// Resolved container attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerAttrs {
    pub role: &'static str,
    pub tabindex: &'static str,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub aria_invalid: Option<String>,
}

impl ContainerAttrs {
    /// Apply these attributes to a container element.
    pub fn apply(&self, el: Element) -> Element {
        el.maybe_id(self.id.clone())
            .classes(self.classes.iter().cloned())
            .attr("role", self.role)
            .attr("tabindex", self.tabindex)
            .maybe_attr("aria-invalid", self.aria_invalid.clone())
    }
}

/// Compute the container's attributes.
///
/// Button mode carries only the focus-ring class plus the button-group and
/// size classes (and `was-validated` when validated).
pub fn resolve_container(
    state: &GroupState,
    aria_invalid: Option<&AriaInvalid>,
    id: Option<&str>,
) -> ContainerAttrs {
    let mut classes = vec![NO_FOCUS_RING_CLASS.to_string()];

    if state.buttons {
        classes.push(if state.stacked {
            BUTTON_GROUP_VERTICAL_CLASS.to_string()
        } else {
            BUTTON_GROUP_CLASS.to_string()
        });
        if let Some(size) = state.size.and_then(|size| size.modifier()) {
            classes.push(format!("{BUTTON_GROUP_CLASS}-{size}"));
        }
    }

    if state.validated {
        classes.push(WAS_VALIDATED_CLASS.to_string());
    }

    ContainerAttrs {
        role: "group",
        tabindex: "-1",
        id: id.map(str::to_string),
        classes,
        aria_invalid: resolve_aria_invalid(aria_invalid, state.state),
    }
}
