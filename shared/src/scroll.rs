/// Page-level scrolling that an overlay can suspend.
pub trait PageScroll {
    fn suspend(&self);
    fn restore(&self);
}

/// Keeps background scrolling suspended for as long as it is alive.
///
/// Restoration happens in `Drop`, so it also runs when the owning view is
/// torn down while the overlay is still open.
#[must_use = "scrolling is restored as soon as the guard is dropped"]
pub struct ScrollGuard<P: PageScroll> {
    page: P,
}

impl<P: PageScroll> ScrollGuard<P> {
    pub fn acquire(page: P) -> Self {
        page.suspend();
        Self { page }
    }
}

impl<P: PageScroll> Drop for ScrollGuard<P> {
    fn drop(&mut self) {
        self.page.restore();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct FakePage {
        suspended: Rc<Cell<bool>>,
        restores: Rc<Cell<u32>>,
    }

    impl PageScroll for FakePage {
        fn suspend(&self) {
            self.suspended.set(true);
        }

        fn restore(&self) {
            self.suspended.set(false);
            self.restores.set(self.restores.get() + 1);
        }
    }

    #[test]
    fn guard_suspends_until_dropped() {
        let page = FakePage::default();
        let guard = ScrollGuard::acquire(page.clone());
        assert!(page.suspended.get());

        drop(guard);
        assert!(!page.suspended.get());
        assert_eq!(page.restores.get(), 1);
    }

    #[test]
    fn guard_restores_during_unwind() {
        let page = FakePage::default();
        let observed = page.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = ScrollGuard::acquire(page);
            panic!("view torn down");
        }));

        assert!(result.is_err());
        assert!(!observed.suspended.get());
        assert_eq!(observed.restores.get(), 1);
    }
}
