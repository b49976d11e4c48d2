use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use js_sys::{Array, Function};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, MutationObserver, MutationObserverInit, MutationRecord};

use galleria_core::classes::has_class_token;
use galleria_core::{
    readiness_source, AdjustTriggers, PageLoadFallback, ReadinessSource, SectionChange, SiteConfig,
};

use crate::dom;
use crate::gallery;
use crate::timers::GlooTimers;

pub(crate) type Triggers = AdjustTriggers<GlooTimers>;

/// Watches the `class` attribute of each switchable section.
pub(crate) struct SectionObserver {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut(Array, MutationObserver)>,
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub(crate) struct AdjustWiring {
    pub(crate) triggers: Rc<Triggers>,
    _listeners: Vec<EventListener>,
    _observer: Option<SectionObserver>,
}

pub(crate) fn install(config: Rc<SiteConfig>) -> AdjustWiring {
    let pass_config = Rc::clone(&config);
    let triggers = Rc::new(AdjustTriggers::new(
        GlooTimers,
        config.triggers,
        Rc::new(move || {
            gallery::adjust_gallery_heights(&pass_config);
        }),
    ));
    let mut listeners = Vec::new();

    if let Some(window) = web_sys::window() {
        let on_resize = Rc::clone(&triggers);
        listeners.push(EventListener::new(&window, "resize", move |_event| {
            on_resize.window_resized();
        }));
    }

    if let Some(listener) = install_initial_trigger(&triggers) {
        listeners.push(listener);
    }

    let observer = match observe_sections(&config, &triggers) {
        Ok(observer) => observer,
        Err(err) => {
            console::warn!("section observer failed", err);
            None
        }
    };

    AdjustWiring {
        triggers,
        _listeners: listeners,
        _observer: observer,
    }
}

/// Runs the first pass once every image has settled. Prefers the page's
/// `imagesLoaded` library and falls back to the window `load` event.
fn install_initial_trigger(triggers: &Rc<Triggers>) -> Option<EventListener> {
    let document = dom::document()?;
    let body = document.body();
    let images_loaded =
        dom::window_global("imagesLoaded").and_then(|value| value.dyn_into::<Function>().ok());
    let fallback = match readiness_source(body.is_some(), images_loaded.is_some()) {
        ReadinessSource::PageLoad(fallback) => fallback,
        ReadinessSource::ImagesLoaded => {
            let (Some(body), Some(images_loaded)) = (body, images_loaded) else {
                return None;
            };
            let on_settled = Rc::clone(triggers);
            let callback = Closure::once_into_js(move || {
                on_settled.images_settled();
            });
            match images_loaded.call2(&JsValue::NULL, &body, &callback) {
                Ok(_) => return None,
                Err(err) => {
                    console::warn!("imagesLoaded error", err);
                    PageLoadFallback::LibraryFailed
                }
            }
        }
    };
    console::warn!(fallback.message());
    if dom::document_is_complete(&document) {
        triggers.images_settled();
        return None;
    }
    let window = web_sys::window()?;
    let on_load = Rc::clone(triggers);
    Some(EventListener::once(&window, "load", move |_event| {
        on_load.images_settled();
    }))
}

fn observe_sections(
    config: &Rc<SiteConfig>,
    triggers: &Rc<Triggers>,
) -> Result<Option<SectionObserver>, JsValue> {
    if dom::window_global("MutationObserver").is_none() {
        console::warn!("MutationObserver unavailable; section visibility trigger disabled");
        return Ok(None);
    }
    let sections: Vec<Element> = dom::query_document(config.selectors.section);
    if sections.is_empty() {
        return Ok(None);
    }

    let config = Rc::clone(config);
    let triggers = Rc::clone(triggers);
    let callback = Closure::<dyn FnMut(Array, MutationObserver)>::new(
        move |records: Array, _observer: MutationObserver| {
            for record in records.iter() {
                let Ok(record) = record.dyn_into::<MutationRecord>() else {
                    continue;
                };
                let Some(change) = section_change(&record, &config) else {
                    continue;
                };
                if triggers.section_changed(change) && config.verbose {
                    console::debug!("section activated; gallery pass scheduled");
                }
            }
        },
    );
    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
    let options = MutationObserverInit::new();
    options.set_attributes(true);
    options.set_attribute_old_value(true);
    options.set_attribute_filter(&Array::of1(&JsValue::from_str("class")));
    for section in &sections {
        observer.observe_with_options(section, &options)?;
    }
    Ok(Some(SectionObserver {
        observer,
        _callback: callback,
    }))
}

fn section_change(record: &MutationRecord, config: &SiteConfig) -> Option<SectionChange> {
    let section = record.target()?.dyn_into::<Element>().ok()?;
    let active = config.selectors.active_class;
    let has_gallery = section
        .query_selector(config.selectors.gallery)
        .ok()
        .flatten()
        .is_some();
    // Old values are always requested; a missing one means no class attribute.
    let was_active = record
        .old_value()
        .map(|old| has_class_token(&old, active))
        .unwrap_or(false);
    Some(SectionChange {
        was_active,
        is_active: section.class_list().contains(active),
        has_gallery,
    })
}
