//! Group event types and dispatch.
//!
//! A child toggle produces one [`SelectionChange`]. Consumers see it under
//! two names: `update:modelValue` (for two-way bindings) and `change` (for
//! anything else). Both carry the same next selection and both fire exactly
//! once per toggle. They are logically one event; observers registered with
//! [`EventAggregator::subscribe`] receive it once and decide for themselves
//! which meaning applies.

use std::fmt;
use std::sync::{Arc, RwLock};

use serde::Serialize;

use crate::selection::SelectionCollection;
use crate::value::OptionValue;

// =============================================================================
// Event Types
// =============================================================================

/// Named notification channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GroupEventKind {
    /// `update:modelValue`, consumed by two-way bindings.
    #[serde(rename = "update:modelValue")]
    UpdateModelValue,
    /// `change`, any selection change.
    #[serde(rename = "change")]
    Change,
}

impl GroupEventKind {
    /// Channels in dispatch order.
    pub const ALL: [Self; 2] = [Self::UpdateModelValue, Self::Change];

    pub fn name(self) -> &'static str {
        match self {
            Self::UpdateModelValue => "update:modelValue",
            Self::Change => "change",
        }
    }
}

impl fmt::Display for GroupEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A `(value, next_checked)` pair raised by a child checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleEvent {
    pub value: OptionValue,
    pub checked: bool,
}

/// The outcome of reducing one toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    /// The toggle that caused this change.
    pub toggle: ToggleEvent,
    /// The full next selection.
    pub selection: SelectionCollection,
}

/// Result of handling an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The interaction was ignored (e.g. a disabled child).
    Ignored,
    /// The interaction was handled and notifications fired.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Consumed)
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Listener for a named channel.
pub type SelectionHandler = Arc<dyn Fn(&SelectionCollection) + Send + Sync>;

/// Observer receiving each change once.
pub type ChangeObserver = Arc<dyn Fn(&SelectionChange) + Send + Sync>;

/// Fans a [`SelectionChange`] out to listeners.
///
/// Dispatch order: `update:modelValue` listeners, `change` listeners, then
/// observers, each in registration order.
#[derive(Clone, Default)]
pub struct EventAggregator {
    listeners: Vec<(GroupEventKind, SelectionHandler)>,
    observers: Vec<ChangeObserver>,
}

impl EventAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen on one named channel.
    pub fn on(&mut self, kind: GroupEventKind, handler: SelectionHandler) {
        self.listeners.push((kind, handler));
    }

    /// Observe every change once, regardless of channel.
    pub fn subscribe(&mut self, observer: ChangeObserver) {
        self.observers.push(observer);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len() + self.observers.len()
    }

    pub fn dispatch(&self, change: &SelectionChange) {
        for kind in GroupEventKind::ALL {
            log::debug!("[events] {} -> {:?}", kind, change.selection);
            for (_, handler) in self.listeners.iter().filter(|(k, _)| *k == kind) {
                handler(&change.selection);
            }
        }
        for observer in &self.observers {
            observer(change);
        }
    }
}

impl fmt::Debug for EventAggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventAggregator")
            .field("listeners", &self.listeners.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

// =============================================================================
// Recording
// =============================================================================

/// One recorded notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmittedEvent {
    pub event: GroupEventKind,
    pub payload: SelectionCollection,
}

/// Shared per-channel history of emitted notifications.
///
/// Obtain one from `CheckboxGroup::record_events`.
#[derive(Debug, Clone, Default)]
pub struct EmittedEvents {
    inner: Arc<RwLock<Vec<EmittedEvent>>>,
}

impl EmittedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: GroupEventKind, payload: &SelectionCollection) {
        if let Ok(mut guard) = self.inner.write() {
            guard.push(EmittedEvent {
                event,
                payload: payload.clone(),
            });
        }
    }

    /// Payloads emitted on one channel, oldest first.
    pub fn emitted(&self, event: GroupEventKind) -> Vec<SelectionCollection> {
        self.inner
            .read()
            .map(|guard| {
                guard
                    .iter()
                    .filter(|e| e.event == event)
                    .map(|e| e.payload.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn count(&self, event: GroupEventKind) -> usize {
        self.inner
            .read()
            .map(|guard| guard.iter().filter(|e| e.event == event).count())
            .unwrap_or(0)
    }

    /// Every notification in emission order.
    pub fn all(&self) -> Vec<EmittedEvent> {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.clear();
        }
    }
}
