use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use web_sys::{Element, Event};

use galleria_core::classes::fragment_target;
use galleria_core::SiteConfig;

use crate::dom;

/// Makes `section_id` the only active section and `link` (if any) the
/// only active nav link. Returns false when no such section exists.
pub fn activate_section(config: &SiteConfig, section_id: &str, link: Option<&Element>) -> bool {
    let selectors = &config.selectors;
    let sections: Vec<Element> = dom::query_document(selectors.section);
    let Some(target) = sections.iter().find(|section| section.id() == section_id) else {
        return false;
    };
    for section in &sections {
        dom::set_class(section, selectors.active_class, section == target);
    }
    let links: Vec<Element> = dom::query_document(selectors.nav_link);
    for candidate in &links {
        let is_link = match link {
            Some(link) => candidate == link,
            None => candidate
                .get_attribute("href")
                .as_deref()
                .and_then(fragment_target)
                == Some(section_id),
        };
        dom::set_class(candidate, selectors.active_class, is_link);
    }
    true
}

pub(crate) fn install(config: Rc<SiteConfig>) -> Vec<EventListener> {
    let links: Vec<Element> = dom::query_document(config.selectors.nav_link);
    let mut listeners = Vec::with_capacity(links.len());
    for link in links {
        let Some(target) = link
            .get_attribute("href")
            .as_deref()
            .and_then(fragment_target)
            .map(str::to_string)
        else {
            continue;
        };
        let config = Rc::clone(&config);
        let clicked = link.clone();
        listeners.push(EventListener::new(&link, "click", move |event: &Event| {
            event.prevent_default();
            if !activate_section(&config, &target, Some(&clicked)) {
                console::warn!("nav target not found", target.clone());
            }
        }));
    }

    if let Some(hash) = web_sys::window().and_then(|window| window.location().hash().ok()) {
        if let Some(target) = fragment_target(&hash) {
            activate_section(&config, target, None);
        }
    }
    listeners
}
