//! Controlled/uncontrolled value slot.
//!
//! Every stateful component keeps each piece of interactive state in one slot. A slot is
//! *controlled* when the caller supplied a value at construction and *uncontrolled* otherwise;
//! that decision is final for the slot's lifetime.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Who owns the authoritative value of a slot.
pub enum Ownership {
    /// The caller owns the value and re-supplies it on every update.
    Controlled,
    /// The slot owns the value and only notifies the caller.
    Uncontrolled,
}

impl Ownership {
    /// Ownership for a slot whose first observed external value is present or absent.
    pub fn resolve(external_present: bool) -> Self {
        if external_present {
            Self::Controlled
        } else {
            Self::Uncontrolled
        }
    }

    /// Whether `set` writes the internal fallback value.
    pub fn writes_internal(self) -> bool {
        matches!(self, Self::Uncontrolled)
    }

    /// Checks a later external observation against the resolved ownership.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::OwnershipConflict`] when a controlled slot stops receiving a value
    /// or an uncontrolled slot starts receiving one.
    pub fn check(self, external_present: bool) -> Result<(), StateError> {
        match (self, external_present) {
            (Self::Controlled, false) => Err(StateError::OwnershipConflict {
                expected: self,
                observed: "omitted the value",
            }),
            (Self::Uncontrolled, true) => Err(StateError::OwnershipConflict {
                expected: self,
                observed: "supplied a value",
            }),
            _ => Ok(()),
        }
    }
}

/// Headless controlled/uncontrolled slot.
///
/// The effective value is the external value when controlled and the internal fallback
/// otherwise. [`ControlledSlot::set`] writes the fallback only when uncontrolled and always
/// invokes the change callback.
pub struct ControlledSlot<T> {
    ownership: Ownership,
    external: Option<T>,
    internal: T,
    on_change: Option<Box<dyn FnMut(T)>>,
}

impl<T: Clone> ControlledSlot<T> {
    /// Creates a slot from the caller's first external value and the fallback default.
    pub fn new(external: Option<T>, default: T) -> Self {
        Self {
            ownership: Ownership::resolve(external.is_some()),
            external,
            internal: default,
            on_change: None,
        }
    }

    /// Uncontrolled slot starting at `default`.
    pub fn uncontrolled(default: T) -> Self {
        Self::new(None, default)
    }

    /// Controlled slot showing `value`.
    pub fn controlled(value: T) -> Self {
        Self::new(Some(value.clone()), value)
    }

    /// Attaches the change callback.
    pub fn on_change(mut self, on_change: impl FnMut(T) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Replaces the change callback.
    pub fn set_on_change(&mut self, on_change: impl FnMut(T) + 'static) {
        self.on_change = Some(Box::new(on_change));
    }

    /// Ownership resolved at construction.
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Effective value.
    pub fn value(&self) -> &T {
        match (self.ownership, self.external.as_ref()) {
            (Ownership::Controlled, Some(external)) => external,
            _ => &self.internal,
        }
    }

    /// Applies an interaction.
    pub fn set(&mut self, next: T) {
        if self.ownership.writes_internal() {
            self.internal = next.clone();
        }
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(next);
        }
    }

    /// Applies an interaction computed from the current effective value.
    pub fn update(&mut self, next: impl FnOnce(&T) -> T) {
        let next = next(self.value());
        self.set(next);
    }

    /// Receives the caller's external value for a new render.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::OwnershipConflict`] when the observation contradicts the slot's
    /// ownership. The observation is then ignored: a controlled slot keeps showing the last
    /// external value it saw, an uncontrolled slot keeps its internal value.
    pub fn sync_external(&mut self, external: Option<T>) -> Result<(), StateError> {
        self.ownership.check(external.is_some())?;
        if self.ownership == Ownership::Controlled {
            self.external = external;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for ControlledSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlledSlot")
            .field("ownership", &self.ownership)
            .field("external", &self.external)
            .field("internal", &self.internal)
            .field("has_on_change", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn recorder<T: 'static>() -> (Rc<RefCell<Vec<T>>>, impl FnMut(T) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |value| sink.borrow_mut().push(value))
    }

    #[test]
    fn uncontrolled_slot_writes_internal_and_notifies() {
        let (seen, sink) = recorder();
        let mut slot = ControlledSlot::uncontrolled(false).on_change(sink);

        slot.set(true);

        assert_eq!(slot.ownership(), Ownership::Uncontrolled);
        assert_eq!(*slot.value(), true);
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn controlled_slot_only_notifies() {
        let (seen, sink) = recorder();
        let mut slot = ControlledSlot::new(Some(1), 0).on_change(sink);

        slot.set(2);

        assert_eq!(*slot.value(), 1);
        assert_eq!(*seen.borrow(), vec![2]);

        slot.sync_external(Some(2)).expect("same ownership");
        assert_eq!(*slot.value(), 2);
    }

    #[test]
    fn update_reads_effective_value() {
        let mut slot = ControlledSlot::uncontrolled(3);
        slot.update(|value| value + 1);
        slot.update(|value| value * 10);
        assert_eq!(*slot.value(), 40);
    }

    #[test]
    fn ownership_never_flips() {
        let mut controlled = ControlledSlot::controlled("a".to_string());
        let err = controlled.sync_external(None).unwrap_err();
        assert_eq!(
            err,
            StateError::OwnershipConflict {
                expected: Ownership::Controlled,
                observed: "omitted the value",
            }
        );
        assert_eq!(controlled.ownership(), Ownership::Controlled);
        assert_eq!(controlled.value(), "a");

        let mut uncontrolled = ControlledSlot::uncontrolled(0);
        assert!(uncontrolled.sync_external(Some(9)).is_err());
        assert_eq!(*uncontrolled.value(), 0);
        uncontrolled.set(5);
        assert_eq!(*uncontrolled.value(), 5);
    }
}
