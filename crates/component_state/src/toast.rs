//! Toast notification queue.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Queue-unique toast identifier.
pub struct ToastId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Visual tone of a toast.
pub enum ToastTone {
    /// Neutral message.
    #[default]
    Neutral,
    /// Success confirmation.
    Success,
    /// Warning.
    Warning,
    /// Error or destructive outcome.
    Danger,
}

impl ToastTone {
    /// Attribute token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Toast content as submitted by a caller.
pub struct ToastRequest {
    /// Headline.
    pub title: String,
    /// Optional supporting text.
    pub description: Option<String>,
    /// Tone.
    pub tone: ToastTone,
    /// Auto-dismiss delay; `None` uses the toaster default, `Some(0)` keeps it until dismissed.
    pub duration_ms: Option<u64>,
}

impl ToastRequest {
    /// Neutral toast with a title only.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            tone: ToastTone::Neutral,
            duration_ms: None,
        }
    }

    /// Adds supporting text.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the tone.
    pub fn tone(mut self, tone: ToastTone) -> Self {
        self.tone = tone;
        self
    }

    /// Overrides the auto-dismiss delay.
    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Queued toast.
pub struct Toast {
    /// Identifier assigned on push.
    pub id: ToastId,
    /// Submitted content.
    pub request: ToastRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Ordered toast queue with a visible-count limit.
pub struct ToastQueue {
    next_id: u64,
    limit: usize,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Empty queue showing at most `limit` toasts (at least one).
    pub fn new(limit: usize) -> Self {
        Self {
            next_id: 1,
            limit: limit.max(1),
            toasts: Vec::new(),
        }
    }

    /// Enqueues a toast and returns its id.
    pub fn push(&mut self, request: ToastRequest) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast { id, request });
        id
    }

    /// Removes a toast. Returns whether it was queued.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Removes every toast.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Total queued toasts, visible or not.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Newest `limit` toasts, newest first.
    pub fn visible(&self) -> Vec<&Toast> {
        self.toasts.iter().rev().take(self.limit).collect()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn newest_toasts_are_visible_up_to_limit() {
        let mut queue = ToastQueue::new(2);
        let first = queue.push(ToastRequest::new("Saved"));
        let second = queue.push(ToastRequest::new("Synced").tone(ToastTone::Success));
        let third = queue.push(ToastRequest::new("Offline").tone(ToastTone::Warning));

        let visible: Vec<ToastId> = queue.visible().iter().map(|toast| toast.id).collect();
        assert_eq!(visible, vec![third, second]);
        assert_eq!(queue.len(), 3);

        assert!(queue.dismiss(third));
        let visible: Vec<ToastId> = queue.visible().iter().map(|toast| toast.id).collect();
        assert_eq!(visible, vec![second, first]);
    }

    #[test]
    fn dismissing_unknown_id_is_a_no_op() {
        let mut queue = ToastQueue::default();
        queue.push(ToastRequest::new("Hello").description("world").duration_ms(0));
        assert!(!queue.dismiss(ToastId(99)));
        assert_eq!(queue.len(), 1);
        queue.clear();
        assert!(queue.is_empty());
    }
}
