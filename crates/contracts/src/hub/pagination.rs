/// Running cap on how many matching cards are shown in the "load more"
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub initial: usize,
    pub step: usize,
    pub limit: usize,
}

impl PageWindow {
    /// A zero step would make "load more" a no-op, so it falls back to
    /// `initial`.
    pub fn new(initial: usize, step: usize) -> Self {
        let initial = initial.max(1);
        let step = if step == 0 { initial } else { step };
        Self {
            initial,
            step,
            limit: initial,
        }
    }

    pub fn load_more(&mut self) {
        self.limit = self.limit.saturating_add(self.step);
    }

    /// Called when the query or category changes.
    pub fn reset(&mut self) {
        self.limit = self.initial;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_more_and_reset() {
        let mut window = PageWindow::new(6, 6);
        window.load_more();
        assert_eq!(window.limit, 12);
        window.load_more();
        assert_eq!(window.limit, 18);
        window.reset();
        assert_eq!(window.limit, 6);
    }

    #[test]
    fn test_degenerate_sizes() {
        let window = PageWindow::new(0, 0);
        assert_eq!((window.initial, window.step, window.limit), (1, 1, 1));
        assert_eq!(PageWindow::new(4, 0).step, 4);
    }
}
