//! Checkbox group container.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use formdom::Element;

use crate::attrs::resolve_container;
use crate::checkbox::GroupCheckbox;
use crate::config::GroupConfig;
use crate::context::{GroupContext, GroupState};
use crate::error::GroupError;
use crate::events::{
    EmittedEvents, EventAggregator, EventResult, GroupEventKind, SelectionChange, ToggleEvent,
};
use crate::options::{OptionDescriptor, normalize_options};
use crate::selection::{SelectionCollection, reduce};
use crate::state::State;
use crate::value::OptionValue;

/// Unique identifier generated for a group on mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(usize);

impl GroupId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__checkbox_group_{}", self.0)
    }
}

/// A controlled multi-selection checkbox group.
///
/// The group owns the selection (the model) and composes one
/// [`GroupCheckbox`] per option, handing each an `Arc<GroupContext>`
/// snapshot. Clicking a child reduces the selection and fires
/// `update:modelValue` then `change`, both with the next selection.
///
/// The group is controlled: it only writes its own model when bound with
/// [`CheckboxGroup::bind`]. Otherwise the host decides, typically from an
/// `update:modelValue` listener.
///
/// # Example
///
/// ```
/// use checkgroup::prelude::*;
///
/// let mut group = CheckboxGroup::new(GroupConfig::new().options(["one", "two", "three"]));
/// let model = group.model();
/// group.bind(model.clone());
/// group.mount();
///
/// group.click(2).unwrap();
/// group.click(0).unwrap();
///
/// let expected: SelectionCollection = ["three", "one"].into_iter().collect();
/// assert_eq!(model.get(), expected);
/// ```
pub struct CheckboxGroup {
    /// Props; `model_value` lives in `model` instead.
    config: GroupConfig,
    options: Vec<OptionDescriptor>,
    model: State<SelectionCollection>,
    bound: bool,
    auto_id: Option<GroupId>,
    events: EventAggregator,
    dirty: Arc<AtomicBool>,
}

impl CheckboxGroup {
    pub fn new(mut config: GroupConfig) -> Self {
        let model = State::new(std::mem::take(&mut config.model_value));
        let options = normalize_options(&config.options, &config.fields);
        Self {
            config,
            options,
            model,
            bound: false,
            auto_id: None,
            events: EventAggregator::new(),
            dirty: Arc::new(AtomicBool::new(true)),
        }
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Mount the group, generating an id if none was given.
    pub fn mount(&mut self) {
        if self.auto_id.is_none() {
            let id = GroupId::new();
            log::debug!("[group] mounted {}", id);
            self.auto_id = Some(id);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Unmount the group. A later mount generates a fresh id.
    pub fn unmount(&mut self) {
        self.auto_id = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.auto_id.is_some()
    }

    /// The container id: the configured one, else the generated one after mount.
    pub fn id(&self) -> Option<String> {
        self.config
            .id
            .clone()
            .or_else(|| self.auto_id.map(|id| id.to_string()))
    }

    // -------------------------------------------------------------------------
    // Props
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// Update props in place.
    ///
    /// `model_value` inside the closure holds the current selection; writing
    /// it replaces the model. Options are renormalized afterwards.
    pub fn set_props(&mut self, f: impl FnOnce(&mut GroupConfig)) {
        self.config.model_value = self.model.get();
        f(&mut self.config);

        let model_value = std::mem::take(&mut self.config.model_value);
        if !self.model.with(|current| *current == model_value) {
            self.model.set(model_value);
        }
        self.options = normalize_options(&self.config.options, &self.config.fields);
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Replace the selection from outside.
    pub fn set_model_value(&self, value: impl Into<SelectionCollection>) {
        self.model.set(value.into());
    }

    pub fn model_value(&self) -> SelectionCollection {
        self.model.get()
    }

    /// Handle to the model cell.
    pub fn model(&self) -> State<SelectionCollection> {
        self.model.clone()
    }

    /// Two-way bind the selection to `model`.
    ///
    /// The group reads from `model` and writes each next selection into it
    /// before any listener runs.
    pub fn bind(&mut self, model: State<SelectionCollection>) {
        self.model = model;
        self.bound = true;
        self.dirty.store(true, Ordering::SeqCst);
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Normalized options in render order.
    pub fn options(&self) -> &[OptionDescriptor] {
        &self.options
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    pub fn on_update_model_value(
        &mut self,
        handler: impl Fn(&SelectionCollection) + Send + Sync + 'static,
    ) {
        self.events
            .on(GroupEventKind::UpdateModelValue, Arc::new(handler));
    }

    pub fn on_change(&mut self, handler: impl Fn(&SelectionCollection) + Send + Sync + 'static) {
        self.events.on(GroupEventKind::Change, Arc::new(handler));
    }

    /// Observe each change once.
    pub fn subscribe(&mut self, observer: impl Fn(&SelectionChange) + Send + Sync + 'static) {
        self.events.subscribe(Arc::new(observer));
    }

    /// Record every notification from now on.
    pub fn record_events(&mut self) -> EmittedEvents {
        let emitted = EmittedEvents::new();
        for kind in GroupEventKind::ALL {
            let recorder = emitted.clone();
            self.events.on(
                kind,
                Arc::new(move |selection: &SelectionCollection| recorder.record(kind, selection)),
            );
        }
        emitted
    }

    // -------------------------------------------------------------------------
    // Composition
    // -------------------------------------------------------------------------

    /// Snapshot of the state children read for this render pass.
    pub fn context(&self) -> Arc<GroupContext> {
        Arc::new(GroupContext::new(
            GroupState::from(&self.config),
            self.model.get(),
            self.id(),
        ))
    }

    pub fn checkboxes(&self) -> Vec<GroupCheckbox> {
        self.compose(&self.context())
    }

    fn compose(&self, context: &Arc<GroupContext>) -> Vec<GroupCheckbox> {
        self.options
            .iter()
            .enumerate()
            .map(|(index, option)| GroupCheckbox::new(index, option.clone(), Arc::clone(context)))
            .collect()
    }

    /// Whether props or the model changed since the last render.
    pub fn needs_render(&self) -> bool {
        self.dirty.load(Ordering::SeqCst) || self.model.is_dirty()
    }

    pub fn render(&self) -> Element {
        let context = self.context();
        let attrs = resolve_container(
            context.state(),
            self.config.aria_invalid.as_ref(),
            context.group_id(),
        );
        let children: Vec<Element> = self
            .compose(&context)
            .iter()
            .flat_map(GroupCheckbox::render)
            .collect();

        log::trace!(
            "[group] render {:?}: {} options, selection {:?}",
            context.group_id(),
            self.options.len(),
            context.selection()
        );

        self.dirty.store(false, Ordering::SeqCst);
        self.model.clear_dirty();

        attrs.apply(Element::div()).children(children)
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    /// Apply a `(value, checked)` toggle and fire notifications.
    ///
    /// Returns the next selection.
    pub fn toggle(&self, value: impl Into<OptionValue>, checked: bool) -> SelectionCollection {
        self.apply_toggle(ToggleEvent {
            value: value.into(),
            checked,
        })
    }

    /// Click the child at `index`. Disabled children ignore clicks.
    pub fn click(&self, index: usize) -> Result<EventResult, GroupError> {
        let option = self.options.get(index).ok_or(GroupError::UnknownOption {
            index,
            len: self.options.len(),
        })?;
        let checkbox = GroupCheckbox::new(index, option.clone(), self.context());

        match checkbox.click() {
            Some(toggle) => {
                self.apply_toggle(toggle);
                Ok(EventResult::Consumed)
            }
            None => {
                log::debug!("[group] click on disabled option {} ignored", index);
                Ok(EventResult::Ignored)
            }
        }
    }

    fn apply_toggle(&self, toggle: ToggleEvent) -> SelectionCollection {
        let next = self
            .model
            .with(|current| reduce(current, &toggle.value, toggle.checked));
        log::debug!(
            "[group] toggle {} -> {}: {:?}",
            toggle.value,
            toggle.checked,
            next
        );

        if self.bound {
            self.model.set(next.clone());
        }

        self.events.dispatch(&SelectionChange {
            toggle,
            selection: next.clone(),
        });
        next
    }
}

impl fmt::Debug for CheckboxGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckboxGroup")
            .field("id", &self.id())
            .field("options", &self.options.len())
            .field("model", &self.model.get())
            .field("bound", &self.bound)
            .field("events", &self.events)
            .finish()
    }
}
