use cloudsi_shared::scroll::PageScroll;
use wasm_bindgen::JsCast;

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// Smooth-scroll to the element with `id`. Returns false if it isn't mounted.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(el) = document().and_then(|doc| doc.get_element_by_id(id)) else {
        return false;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

pub fn window_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_owned())
}

/// Value of the `<input>` or `<textarea>` that fired `e`.
pub fn input_value(e: &web_sys::Event) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        return input.value();
    }
    target
        .dyn_ref::<web_sys::HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}

pub fn input_checked(e: &web_sys::Event) -> bool {
    e.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .is_some_and(|input| input.checked())
}

/// First file picked in the `<input type="file">` that fired `e`.
pub fn input_file(e: &web_sys::Event) -> Option<web_sys::File> {
    e.target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?
        .files()?
        .get(0)
}

pub fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// Page scrolling through the `<body>` overflow style.
#[derive(Clone, Copy, Default)]
pub struct BodyScroll;

impl PageScroll for BodyScroll {
    fn suspend(&self) {
        if let Some(body) = document().and_then(|doc| doc.body()) {
            body.style().set_property("overflow", "hidden").ok();
        }
    }

    fn restore(&self) {
        if let Some(body) = document().and_then(|doc| doc.body()) {
            body.style().remove_property("overflow").ok();
        }
    }
}
