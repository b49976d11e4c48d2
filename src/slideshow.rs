use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Interval;
use web_sys::Element;

use galleria_core::{Carousel, SiteConfig};

use crate::dom;

/// Rotates the active marker across the hero slides.
pub(crate) struct Slideshow {
    _interval: Interval,
}

impl Slideshow {
    /// `None` when there is nothing to rotate.
    pub(crate) fn install(config: &SiteConfig) -> Option<Self> {
        let slides: Vec<Element> = dom::query_document(config.selectors.hero_slide);
        if slides.len() < 2 {
            return None;
        }
        let active = config.selectors.active_class;
        let start = slides
            .iter()
            .position(|slide| slide.class_list().contains(active))
            .unwrap_or(0);
        for (index, slide) in slides.iter().enumerate() {
            dom::set_class(slide, active, index == start);
        }
        let cursor = Rc::new(RefCell::new(Carousel::with_index(slides.len(), start)));
        let interval = Interval::new(config.ui.slideshow_interval_ms, move || {
            let (previous, next) = {
                let mut cursor = cursor.borrow_mut();
                let previous = cursor.index();
                (previous, cursor.next())
            };
            if let Some(slide) = slides.get(previous) {
                dom::set_class(slide, active, false);
            }
            if let Some(slide) = slides.get(next) {
                dom::set_class(slide, active, true);
            }
        });
        Some(Self {
            _interval: interval,
        })
    }
}
