//! Reactive controlled/uncontrolled state slot.

use component_state::Ownership;
use leptos::logging::warn;
use leptos::*;

/// Reactive counterpart of [`component_state::ControlledSlot`].
///
/// Ownership is resolved from the first observation of the external signal and never changes.
/// A later observation that contradicts it is reported once through `warn!` and ignored: a
/// controlled slot keeps showing the last external value it saw.
pub struct Controlled<T: 'static> {
    label: &'static str,
    ownership: Ownership,
    external: Signal<Option<T>>,
    internal: RwSignal<T>,
    on_change: Option<Callback<T>>,
    conflict_reported: StoredValue<bool>,
}

impl<T: 'static> Clone for Controlled<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Controlled<T> {}

impl<T: Clone + 'static> Controlled<T> {
    /// Creates a slot. `label` names the component and axis in warnings.
    pub fn new(
        label: &'static str,
        external: Signal<Option<T>>,
        default: T,
        on_change: Option<Callback<T>>,
    ) -> Self {
        let first = external.get_untracked();
        let ownership = Ownership::resolve(first.is_some());
        let internal = create_rw_signal(first.unwrap_or(default));

        if ownership == Ownership::Controlled {
            create_effect(move |_| {
                if let Some(value) = external.get() {
                    internal.set(value);
                }
            });
        }

        Self {
            label,
            ownership,
            external,
            internal,
            on_change,
            conflict_reported: store_value(false),
        }
    }

    /// Creates a slot from an optional component prop.
    pub fn from_prop(
        label: &'static str,
        prop: MaybeProp<T>,
        default: T,
        on_change: Option<Callback<T>>,
    ) -> Self {
        Self::new(label, Signal::derive(move || prop.get()), default, on_change)
    }

    /// Ownership resolved at construction.
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Effective value, tracked.
    pub fn get(&self) -> T {
        let external = self.external.get();
        self.resolve(external, true)
    }

    /// Effective value, untracked.
    pub fn get_untracked(&self) -> T {
        let external = self.external.get_untracked();
        self.resolve(external, false)
    }

    /// Read-only signal of the effective value.
    pub fn signal(&self) -> Signal<T> {
        let slot = *self;
        Signal::derive(move || slot.get())
    }

    /// Applies an interaction: writes the fallback when uncontrolled, then notifies the caller.
    pub fn set(&self, next: T) {
        if self.ownership.writes_internal() {
            self.internal.set(next.clone());
        }
        if let Some(on_change) = self.on_change.as_ref() {
            on_change.call(next);
        }
    }

    /// Applies an interaction computed from the current effective value.
    pub fn update(&self, next: impl FnOnce(&T) -> T) {
        let current = self.get_untracked();
        self.set(next(&current));
    }

    fn resolve(&self, external: Option<T>, tracked: bool) -> T {
        if let Err(err) = self.ownership.check(external.is_some()) {
            if !self.conflict_reported.get_value() {
                self.conflict_reported.set_value(true);
                warn!("{}: {err}", self.label);
            }
        }
        match (self.ownership, external) {
            (Ownership::Controlled, Some(value)) => value,
            _ if tracked => self.internal.get(),
            _ => self.internal.get_untracked(),
        }
    }
}
