use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;

use galleria_core::SiteConfig;

use crate::config::load_site_config;
use crate::lightbox::Lightbox;
use crate::slideshow::Slideshow;
use crate::triggers::{self, AdjustWiring};
use crate::{navigation, preloader};

/// Everything the page keeps alive after start-up.
struct SiteRuntime {
    config: Rc<SiteConfig>,
    adjust: AdjustWiring,
    _navigation: Vec<EventListener>,
    lightbox: Option<Rc<Lightbox>>,
    _slideshow: Option<Slideshow>,
    _preloader: Option<EventListener>,
}

thread_local! {
    static RUNTIME: RefCell<Option<SiteRuntime>> = RefCell::new(None);
}

/// Wires every site feature. Calling it again is a no-op.
pub fn start() {
    let started = RUNTIME.with(|slot| slot.borrow().is_some());
    if started {
        return;
    }
    let config = Rc::new(load_site_config());
    let preloader = preloader::install(&config);
    let navigation = navigation::install(Rc::clone(&config));
    let lightbox = Lightbox::install(Rc::clone(&config));
    if lightbox.is_none() && config.verbose {
        console::debug!("lightbox markup not found; viewer disabled");
    }
    let slideshow = Slideshow::install(&config);
    let adjust = triggers::install(Rc::clone(&config));
    if config.verbose {
        console::debug!("galleria started");
    }
    RUNTIME.with(|slot| {
        *slot.borrow_mut() = Some(SiteRuntime {
            config,
            adjust,
            _navigation: navigation,
            lightbox,
            _slideshow: slideshow,
            _preloader: preloader,
        });
    });
}

/// Tears down every listener, observer and timer installed by `start`.
pub fn stop() {
    let runtime = RUNTIME.with(|slot| slot.borrow_mut().take());
    if let Some(runtime) = runtime {
        runtime.adjust.triggers.cancel_all();
        if let Some(lightbox) = runtime.lightbox.as_ref() {
            lightbox.teardown();
        }
    }
}

/// Schedules a gallery pass as if the window had been resized.
pub fn request_adjust() {
    let triggers = RUNTIME.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|runtime| Rc::clone(&runtime.adjust.triggers))
    });
    if let Some(triggers) = triggers {
        triggers.window_resized();
    }
}

pub fn site_config() -> Option<SiteConfig> {
    RUNTIME.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|runtime| (*runtime.config).clone())
    })
}
