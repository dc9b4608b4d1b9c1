use std::cell::RefCell;

use cloudsi_shared::{Lightbox, NavKey, Selection, site};
use leptos::prelude::*;

use crate::about::AboutSection;
use crate::admin::AdminPage;
use crate::contact::ContactSection;
use crate::dom;
use crate::events::EventsSection;
use crate::footer::Footer;
use crate::gallery::GallerySection;
use crate::hero::HeroSection;
use crate::members::MembersDirectory;
use crate::navbar::Navbar;

struct KeydownBinding {
    window: web_sys::Window,
    _handler: wasm_bindgen::closure::Closure<dyn Fn(web_sys::KeyboardEvent)>,
}

thread_local! {
    static KEYDOWN_BINDING: RefCell<Option<KeydownBinding>> = const { RefCell::new(None) };
}

/// Newtype wrappers so `provide_context` keeps overlays of the same shape apart.
#[derive(Clone, Copy)]
pub(crate) struct GalleryLightbox(pub RwSignal<Lightbox>);
#[derive(Clone, Copy)]
pub(crate) struct MemberSelection(pub RwSignal<Selection<String>>);
#[derive(Clone, Copy)]
pub(crate) struct EventSelection(pub RwSignal<Selection<String>>);
#[derive(Clone, Copy)]
pub(crate) struct MobileMenuOpen(pub RwSignal<bool>);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Page {
    Home,
    Admin,
}

impl Page {
    pub(crate) fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/admin" => Self::Admin,
            _ => Self::Home,
        }
    }
}

/// Route a key press to the topmost open overlay. The lightbox sits above
/// the member and event modals, so it gets first refusal.
fn dispatch_nav_key(
    key: NavKey,
    lightbox: RwSignal<Lightbox>,
    member: RwSignal<Selection<String>>,
    event: RwSignal<Selection<String>>,
) -> bool {
    if lightbox.with_untracked(Lightbox::is_open) {
        return lightbox.try_update(|l| l.handle_key(key)).unwrap_or(false);
    }
    if member.with_untracked(Selection::is_open) {
        return member.try_update(|s| s.handle_key(key)).unwrap_or(false);
    }
    if event.with_untracked(Selection::is_open) {
        return event.try_update(|s| s.handle_key(key)).unwrap_or(false);
    }
    false
}

#[component]
pub fn App() -> impl IntoView {
    match Page::from_path(&dom::current_path()) {
        Page::Admin => view! { <AdminPage /> }.into_any(),
        Page::Home => view! { <HomePage /> }.into_any(),
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let data = site();
    let lightbox = RwSignal::new(Lightbox::new(data.gallery.len()));
    let member_selection = RwSignal::new(Selection::<String>::default());
    let event_selection = RwSignal::new(Selection::<String>::default());
    let mobile_menu_open = RwSignal::new(false);

    provide_context(GalleryLightbox(lightbox));
    provide_context(MemberSelection(member_selection));
    provide_context(EventSelection(event_selection));
    provide_context(MobileMenuOpen(mobile_menu_open));

    // Keyboard navigation for the lightbox and modals
    Effect::new(move || {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::*;

        let Some(window) = web_sys::window() else {
            return;
        };

        KEYDOWN_BINDING.with(|slot| {
            if let Some(old) = slot.borrow_mut().take() {
                let _ = old.window.remove_event_listener_with_callback(
                    "keydown",
                    old._handler.as_ref().unchecked_ref(),
                );
            }
        });

        let handler =
            Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |e: web_sys::KeyboardEvent| {
                let target_tag = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
                    .map(|el| el.tag_name())
                    .unwrap_or_default();

                // Typing in the search boxes or the contact form
                if target_tag == "INPUT" || target_tag == "TEXTAREA" {
                    return;
                }

                let Some(key) = NavKey::from_key(&e.key()) else {
                    return;
                };
                if dispatch_nav_key(key, lightbox, member_selection, event_selection) {
                    e.prevent_default();
                } else if key == NavKey::Close && mobile_menu_open.get_untracked() {
                    mobile_menu_open.set(false);
                }
            });

        if window
            .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())
            .is_ok()
        {
            KEYDOWN_BINDING.with(|slot| {
                *slot.borrow_mut() = Some(KeydownBinding {
                    window: window.clone(),
                    _handler: handler,
                });
            });
        }
    });

    view! {
        <Navbar />
        <main>
            <HeroSection />
            <AboutSection />
            <GallerySection />
            <MembersDirectory />
            <EventsSection />
            <ContactSection />
        </main>
        <Footer />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_path_selects_admin_page() {
        assert_eq!(Page::from_path("/admin"), Page::Admin);
        assert_eq!(Page::from_path("/admin/"), Page::Admin);
    }

    #[test]
    fn everything_else_is_home() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/administrator"), Page::Home);
    }

    #[test]
    fn lightbox_takes_keys_before_modals() {
        let owner = Owner::new();
        owner.set();

        let lightbox = RwSignal::new(Lightbox::new(3));
        let member = RwSignal::new(Selection::default());
        let event = RwSignal::new(Selection::default());
        lightbox.update(|l| {
            l.open(0);
        });
        member.update(|s| s.open("4".to_owned()));

        assert!(dispatch_nav_key(NavKey::Close, lightbox, member, event));
        assert!(!lightbox.get_untracked().is_open());
        assert!(member.with_untracked(Selection::is_open));

        assert!(dispatch_nav_key(NavKey::Close, lightbox, member, event));
        assert!(!member.with_untracked(Selection::is_open));

        assert!(!dispatch_nav_key(NavKey::Close, lightbox, member, event));
    }

    #[test]
    fn arrows_pass_through_modals() {
        let owner = Owner::new();
        owner.set();

        let lightbox = RwSignal::new(Lightbox::new(3));
        let member = RwSignal::new(Selection::default());
        let event = RwSignal::new(Selection::default());
        event.update(|s| s.open("1".to_owned()));

        assert!(!dispatch_nav_key(NavKey::Next, lightbox, member, event));
        assert!(event.with_untracked(Selection::is_open));
    }
}
