use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::HtmlElement;

use galleria_core::config::LOADED_CLASS;
use galleria_core::SiteConfig;

use crate::dom;

/// Fades the preloader out once the page has loaded. Returns the pending
/// load listener when the page is still loading.
pub(crate) fn install(config: &SiteConfig) -> Option<EventListener> {
    let preloader: HtmlElement = dom::query_one(config.selectors.preloader)?;
    let fade_ms = config.ui.preloader_fade_ms;
    let document = dom::document()?;
    if dom::document_is_complete(&document) {
        dismiss(preloader, fade_ms);
        return None;
    }
    let window = web_sys::window()?;
    Some(EventListener::once(&window, "load", move |_event| {
        dismiss(preloader, fade_ms);
    }))
}

fn dismiss(preloader: HtmlElement, fade_ms: u32) {
    dom::set_class(&preloader, LOADED_CLASS, true);
    Timeout::new(fade_ms, move || {
        dom::set_style(&preloader, "display", "none");
    })
    .forget();
}
