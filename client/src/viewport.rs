use cloudsi_shared::reveal::{RevealLatch, ViewportObserver, ViewportOptions};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// `ViewportObserver` backed by the browser's `IntersectionObserver`.
#[derive(Clone, Copy, Default)]
pub struct IntersectionViewport;

/// Keeps an observer alive. Dropping it disconnects the observer.
pub struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl ViewportObserver for IntersectionViewport {
    type Handle = ObserverHandle;

    fn on_enter(
        &self,
        element_id: &str,
        mut callback: Box<dyn FnMut(bool)>,
        options: ViewportOptions,
    ) -> Option<ObserverHandle> {
        let element = web_sys::window()?
            .document()?
            .get_element_by_id(element_id)?;

        let mut latch = RevealLatch::new(options.once);
        let cb = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if let Some(visible) = latch.observe(entry.is_intersecting()) {
                        callback(visible);
                    }
                }
                if latch.is_done() {
                    observer.disconnect();
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        let observer =
            web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)
                .ok()?;
        observer.observe(&element);

        Some(ObserverHandle {
            observer,
            _callback: cb,
        })
    }
}

/// Signal that turns `true` once the element `id` scrolls into view.
///
/// Must be called from a component that renders `id`. Without observer
/// support the content is shown immediately.
pub fn in_view_signal(id: &'static str, options: ViewportOptions) -> ReadSignal<bool> {
    let (in_view, set_in_view) = signal(false);
    // Owned by the component; disposal drops the handle and disconnects.
    let handle = StoredValue::new_local(None::<ObserverHandle>);

    Effect::new(move || {
        let observed = IntersectionViewport.on_enter(
            id,
            Box::new(move |visible| set_in_view.set(visible)),
            options,
        );
        if observed.is_none() {
            set_in_view.set(true);
        }
        handle.set_value(observed);
    });

    in_view
}

/// `class` value for a block that fades in once revealed.
pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed { "reveal revealed" } else { "reveal" }
}
