use crate::models::Notification;
use std::collections::VecDeque;

/// Display collaborator that shows transient toasts.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Toasts waiting for the next page render.
#[derive(Debug, Default)]
pub struct ToastQueue {
    pending: VecDeque<Notification>,
}

impl ToastQueue {
    const CAPACITY: usize = 16;

    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        // Oldest toasts go first if nobody renders the page for a while.
        if self.pending.len() == Self::CAPACITY {
            self.pending.pop_front();
        }
        self.pending.push_back(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_queue_in_order() {
        let mut queue = ToastQueue::default();
        queue.notify(Notification::level_up(6));
        queue.notify(Notification::award(800, "Открытый урок"));
        assert_eq!(queue.len(), 2);

        let drained = queue.drain();
        assert_eq!(drained[0], Notification::level_up(6));
        assert_eq!(drained[1], Notification::award(800, "Открытый урок"));
        assert!(queue.is_empty());
    }

    #[test]
    fn queue_is_bounded() {
        let mut queue = ToastQueue::default();
        for points in 0..40 {
            queue.notify(Notification::award(points, "x"));
        }
        let drained = queue.drain();
        assert_eq!(drained.len(), ToastQueue::CAPACITY);
        assert_eq!(drained[0], Notification::award(24, "x"));
    }
}
