//! Child checkbox composed by a group.
//!
//! A `GroupCheckbox` pairs one [`OptionDescriptor`] with the group's
//! [`GroupContext`] snapshot. Everything it renders is resolved from those
//! two inputs: checked from the selection, disabled from its own flag or the
//! group's, required and validation classes from the group state.

use std::sync::Arc;

use formdom::Element;

use crate::context::GroupContext;
use crate::events::ToggleEvent;
use crate::options::OptionDescriptor;
use crate::value::OptionValue;

pub const FORM_CHECK_CLASS: &str = "form-check";
pub const FORM_CHECK_INLINE_CLASS: &str = "form-check-inline";
pub const FORM_SWITCH_CLASS: &str = "form-switch";
pub const FORM_CHECK_INPUT_CLASS: &str = "form-check-input";
pub const FORM_CHECK_LABEL_CLASS: &str = "form-check-label";
pub const BUTTON_CHECK_CLASS: &str = "btn-check";
pub const BUTTON_CLASS: &str = "btn";

#[derive(Debug, Clone)]
pub struct GroupCheckbox {
    index: usize,
    option: OptionDescriptor,
    context: Arc<GroupContext>,
}

impl GroupCheckbox {
    pub fn new(index: usize, option: OptionDescriptor, context: Arc<GroupContext>) -> Self {
        Self {
            index,
            option,
            context,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn option(&self) -> &OptionDescriptor {
        &self.option
    }

    pub fn value(&self) -> &OptionValue {
        &self.option.value
    }

    pub fn text(&self) -> &str {
        &self.option.text
    }

    pub fn id(&self) -> Option<String> {
        self.context.option_id(self.index)
    }

    pub fn is_checked(&self) -> bool {
        self.context.is_checked(&self.option.value)
    }

    pub fn is_disabled(&self) -> bool {
        self.context.resolve_disabled(self.option.disabled)
    }

    pub fn is_required(&self) -> bool {
        self.context.resolve_required()
    }

    pub fn validation_class(&self) -> Option<&'static str> {
        self.context.validation_class(self.option.state)
    }

    /// Button variant, only in button mode.
    pub fn button_variant(&self) -> Option<&str> {
        self.context
            .state()
            .buttons
            .then(|| self.context.button_variant(self.option.button_variant()))
    }

    /// The toggle a click on this checkbox raises, `None` when disabled.
    pub fn click(&self) -> Option<ToggleEvent> {
        if self.is_disabled() {
            return None;
        }
        Some(ToggleEvent {
            value: self.option.value.clone(),
            checked: !self.is_checked(),
        })
    }

    /// Render the checkbox.
    ///
    /// Normal mode yields one wrapper `div`; button mode yields the input
    /// and its button label as siblings.
    pub fn render(&self) -> Vec<Element> {
        let state = self.context.state();
        let id = self.id();
        let checked = self.is_checked();
        let disabled = self.is_disabled();
        let required = self.is_required();
        let styled = !state.plain;

        let mut input = Element::input().maybe_id(id.clone()).attr("type", "checkbox");
        input = if state.buttons {
            input.class(BUTTON_CHECK_CLASS)
        } else {
            input.class_if(styled, FORM_CHECK_INPUT_CLASS)
        };
        if let Some(class) = self.validation_class() {
            input = input.class(class);
        }
        input = input
            .maybe_attr("name", state.name.clone())
            .maybe_attr("form", state.form.clone())
            .attr("value", self.option.value.to_string())
            .flag("checked", checked)
            .flag("disabled", disabled)
            .flag("required", required)
            .maybe_attr("aria-required", required.then_some("true"));

        let label = Element::label().maybe_attr("for", id).text(self.option.text.clone());

        if let Some(variant) = self.button_variant() {
            let size = state.size.and_then(|size| size.modifier());
            let label = label
                .class(BUTTON_CLASS)
                .class(format!("{BUTTON_CLASS}-{variant}"))
                .classes(size.map(|size| format!("{BUTTON_CLASS}-{size}")))
                .class_if(checked, "active")
                .class_if(disabled, "disabled");
            return vec![input, label];
        }

        let label = label.class_if(styled, FORM_CHECK_LABEL_CLASS);
        let wrapper = Element::div()
            .class_if(styled, FORM_CHECK_CLASS)
            .class_if(styled && !state.stacked, FORM_CHECK_INLINE_CLASS)
            .class_if(styled && state.switches, FORM_SWITCH_CLASS)
            .child(input)
            .child(label);

        vec![wrapper]
    }
}
