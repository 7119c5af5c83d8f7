use log::info;

use crate::domain::Notification;

/// Notification drawer state.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    pub open: bool,
}

impl NotificationCenter {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items, open: false }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Mark everything read. Returns how many changed; zero means the
    /// control was disabled.
    pub fn mark_all_read(&mut self) -> usize {
        let changed = self.unread_count();
        if changed == 0 {
            return 0;
        }
        for item in &mut self.items {
            item.read = true;
        }
        info!("marked {changed} notifications read");
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Fixtures;

    #[test]
    fn test_mark_all_read_is_idempotent() {
        let mut center = NotificationCenter::new(Fixtures::builtin().notifications);
        let unread = center.unread_count();
        assert!(unread > 0);
        assert_eq!(center.mark_all_read(), unread);
        assert_eq!(center.unread_count(), 0);
        assert_eq!(center.mark_all_read(), 0);
    }
}
