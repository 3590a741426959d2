#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    /// Queue a toast and return its id, which is never reused.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove the toast with `id`; returns false when it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_unique_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "one");
        let b = queue.push(ToastKind::Error, "two");
        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.items()[0].message, "one");
        assert_eq!(queue.items()[1].kind, ToastKind::Error);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "one");
        let b = queue.push(ToastKind::Success, "two");
        assert!(queue.dismiss(a));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.items()[0].id, b);

        // a late timer for an already dismissed toast is harmless
        assert!(!queue.dismiss(a));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "one");
        queue.dismiss(a);
        assert!(queue.is_empty());
        let b = queue.push(ToastKind::Success, "two");
        assert_ne!(a, b);
    }
}
