use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

/// Drives a per-frame callback via `requestAnimationFrame`.
///
/// The frame function receives the rAF timestamp in milliseconds and
/// returns `true` while it wants another frame. Returning `false` parks
/// the loop until `start()` is called again. Dropping the loop cancels
/// any pending frame.
pub struct FrameLoop {
    inner: Rc<Inner>,
}

struct Inner {
    window: Option<web_sys::Window>,
    scheduled: Cell<bool>,
    raf_id: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl Inner {
    fn request(&self) {
        if self.scheduled.get() {
            return;
        }
        let cb_ref = self.callback.borrow();
        let Some(ref cb) = *cb_ref else {
            return;
        };
        let Some(window) = self.window.as_ref() else {
            return;
        };
        self.scheduled.set(true);
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.raf_id.set(Some(id)),
            Err(_) => self.scheduled.set(false),
        }
    }
}

impl FrameLoop {
    pub fn new(mut frame_fn: impl FnMut(f64) -> bool + 'static) -> Self {
        let inner = Rc::new(Inner {
            window: web_sys::window(),
            scheduled: Cell::new(false),
            raf_id: Cell::new(None),
            callback: RefCell::new(None),
        });

        let inner_cb = Rc::downgrade(&inner);
        let cb = Closure::<dyn FnMut(f64)>::new(move |now: f64| {
            let Some(inner) = inner_cb.upgrade() else {
                return;
            };
            inner.scheduled.set(false);
            inner.raf_id.set(None);
            if frame_fn(now) {
                inner.request();
            }
        });
        *inner.callback.borrow_mut() = Some(cb);

        Self { inner }
    }

    /// Schedule the next frame unless one is already pending.
    pub fn start(&self) {
        self.inner.request();
    }

    pub fn stop(&self) {
        if let Some(raf_id) = self.inner.raf_id.replace(None)
            && let Some(window) = self.inner.window.as_ref()
        {
            let _ = window.cancel_animation_frame(raf_id);
        }
        self.inner.scheduled.set(false);
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        self.inner.callback.borrow_mut().take();
    }
}
