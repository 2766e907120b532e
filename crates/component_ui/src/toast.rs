//! Toast notifications.

use std::time::Duration;

use component_state::{ToastId, ToastQueue, ToastRequest};
use leptos::*;
use style_variants::{merge_layout_class, ButtonSize, ButtonVariant};

use crate::config::use_component_defaults;
use crate::primitives::Button;

#[derive(Clone, Copy)]
/// Shared toast queue. Create one per app and pass it to the [`Toaster`] and to whatever
/// raises notifications.
pub struct ToasterHandle {
    queue: RwSignal<ToastQueue>,
    default_duration_ms: u64,
}

impl ToasterHandle {
    /// Queue showing at most `limit` toasts, auto-dismissing after `default_duration_ms`.
    pub fn new(limit: usize, default_duration_ms: u64) -> Self {
        Self {
            queue: create_rw_signal(ToastQueue::new(limit)),
            default_duration_ms,
        }
    }

    /// Queue configured from the provided component defaults.
    pub fn from_defaults() -> Self {
        let defaults = use_component_defaults();
        Self::new(defaults.toast_limit, defaults.toast_duration_ms)
    }

    /// Queues a toast and schedules its dismissal when it has a non-zero duration.
    pub fn push(&self, request: ToastRequest) -> ToastId {
        let duration = request.duration_ms.unwrap_or(self.default_duration_ms);
        let mut id = ToastId(0);
        self.queue.update(|queue| id = queue.push(request));
        if duration > 0 {
            let handle = *self;
            set_timeout(move || handle.dismiss(id), Duration::from_millis(duration));
        }
        id
    }

    /// Removes a toast. Dismissing an unknown or already dismissed id does nothing.
    pub fn dismiss(&self, id: ToastId) {
        self.queue.update(|queue| {
            queue.dismiss(id);
        });
    }

    /// Removes every toast.
    pub fn clear(&self) {
        self.queue.update(ToastQueue::clear);
    }

    /// Number of queued toasts. Tracked.
    pub fn len(&self) -> usize {
        self.queue.with(ToastQueue::len)
    }

    /// Whether nothing is queued. Tracked.
    pub fn is_empty(&self) -> bool {
        self.queue.with(ToastQueue::is_empty)
    }

    /// Ids of the toasts currently shown, newest first. Tracked.
    pub fn visible_ids(&self) -> Vec<ToastId> {
        self.queue
            .with(|queue| queue.visible().iter().map(|toast| toast.id).collect())
    }
}

#[component]
/// Live region rendering the visible toasts of a [`ToasterHandle`].
pub fn Toaster(
    handle: ToasterHandle,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let toasts = move || {
        handle.queue.with(|queue| {
            queue
                .visible()
                .into_iter()
                .map(|toast| {
                    let id = toast.id;
                    let request = toast.request.clone();
                    view! {
                        <div
                            class="ui-toast"
                            role="status"
                            data-ui-kind="toast"
                            data-ui-variant=request.tone.token()
                        >
                            <div data-ui-slot="title">{request.title}</div>
                            {request.description.map(|description| view! {
                                <div data-ui-slot="description">{description}</div>
                            })}
                            <Button
                                variant=ButtonVariant::Quiet
                                size=ButtonSize::Icon
                                ui_slot="dismiss"
                                aria_label="Dismiss notification"
                                on_click=Callback::new(move |_| handle.dismiss(id))
                            >
                                "×"
                            </Button>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section
            class=merge_layout_class("ui-toaster", layout_class)
            aria-live="polite"
            aria-label="Notifications"
            data-ui-primitive="true"
            data-ui-kind="toaster"
        >
            {toasts}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use component_state::ToastTone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn toaster_shows_newest_within_limit() {
        let _ = create_runtime();
        let toaster = ToasterHandle::new(2, 0);
        let first = toaster.push(ToastRequest::new("Saved"));
        let second = toaster.push(ToastRequest::new("Synced").tone(ToastTone::Success));
        let third = toaster.push(ToastRequest::new("Offline").tone(ToastTone::Warning));

        assert_eq!(toaster.len(), 3);
        assert_eq!(toaster.visible_ids(), vec![third, second]);

        toaster.dismiss(third);
        assert_eq!(toaster.visible_ids(), vec![second, first]);

        toaster.clear();
        assert!(toaster.is_empty());
    }
}
