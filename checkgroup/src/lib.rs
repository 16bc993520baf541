//! Controlled multi-selection checkbox groups.
//!
//! A [`CheckboxGroup`] owns an ordered selection and composes one child
//! checkbox per option. Children read shared state through an explicit
//! [`GroupContext`] snapshot and report clicks as toggles; the group reduces
//! them into the next selection and fires `update:modelValue` and `change`.
//! Rendering produces a [`formdom::Element`] tree.

pub mod attrs;
pub mod checkbox;
pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod group;
pub mod options;
pub mod selection;
pub mod state;
pub mod value;

pub use checkbox::GroupCheckbox;
pub use config::GroupConfig;
pub use context::{GroupContext, GroupState, Size};
pub use error::GroupError;
pub use group::{CheckboxGroup, GroupId};
pub use selection::SelectionCollection;
pub use state::State;
pub use value::OptionValue;

pub mod prelude {
    pub use crate::attrs::{AriaInvalid, ContainerAttrs, resolve_aria_invalid, resolve_container};
    pub use crate::checkbox::GroupCheckbox;
    pub use crate::config::GroupConfig;
    pub use crate::context::{GroupContext, GroupState, Size};
    pub use crate::error::GroupError;
    pub use crate::events::{
        EmittedEvents, EventResult, GroupEventKind, SelectionChange, ToggleEvent,
    };
    pub use crate::group::CheckboxGroup;
    pub use crate::options::{FieldNames, OptionDescriptor, RawOption, normalize_options};
    pub use crate::selection::{SelectionCollection, reduce};
    pub use crate::state::State;
    pub use crate::value::OptionValue;

    pub use formdom::Element;
}
