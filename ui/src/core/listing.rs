//! Progressive list rendering.
//!
//! Long lists mount an initial batch and then grow by a fixed batch per frame
//! until everything is visible. The visible items are always a prefix of the
//! registry, so declaration order is the only order ever rendered.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderWindow {
    total: usize,
    visible: usize,
    batch: usize,
}

impl RenderWindow {
    pub fn new(total: usize, initial: usize, batch: usize) -> Self {
        Self {
            total,
            visible: initial.min(total),
            batch: batch.max(1),
        }
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }

    pub fn is_complete(&self) -> bool {
        self.visible >= self.total
    }

    /// Grow by one batch. Returns `true` if more items became visible.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.visible = (self.visible + self.batch).min(self.total);
        true
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible.min(items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_grows_to_full_list_in_order() {
        let items = [10, 20, 30, 40, 50, 60, 70];
        let mut window = RenderWindow::new(items.len(), 3, 2);
        assert_eq!(window.visible(&items), &[10, 20, 30]);

        assert!(window.advance());
        assert_eq!(window.visible(&items), &[10, 20, 30, 40, 50]);
        assert!(window.advance());
        assert!(window.is_complete());
        assert_eq!(window.visible(&items), &items[..]);
        assert!(!window.advance());
    }

    #[test]
    fn initial_batch_larger_than_list() {
        let items = ["a", "b"];
        let window = RenderWindow::new(items.len(), 10, 0);
        assert!(window.is_complete());
        assert_eq!(window.visible(&items), &items[..]);
    }
}
