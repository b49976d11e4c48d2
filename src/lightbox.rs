use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlImageElement, KeyboardEvent, TouchEvent};

use galleria_core::config::{SHUTTER_CLOSING_CLASS, SHUTTER_OPENING_CLASS};
use galleria_core::{Carousel, Shutter, ShutterStep, SiteConfig, SwipeDirection, SwipeTracker};

use crate::dom;

struct LightboxState {
    items: Vec<String>,
    cursor: Carousel,
    shutter: Shutter,
    swipe: SwipeTracker,
}

/// Full-screen image viewer entered through the shutter animation.
pub(crate) struct Lightbox {
    config: Rc<SiteConfig>,
    root: Element,
    image: HtmlImageElement,
    shutter: Element,
    state: RefCell<LightboxState>,
    fallback: RefCell<Option<Timeout>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl Lightbox {
    pub(crate) fn install(config: Rc<SiteConfig>) -> Option<Rc<Self>> {
        let selectors = &config.selectors;
        let root: Element = dom::query_one(selectors.lightbox)?;
        let image: HtmlImageElement = dom::query_one(selectors.lightbox_image)?;
        let shutter: Element = dom::query_one(selectors.shutter)?;
        let swipe = SwipeTracker::new(config.ui.swipe_threshold_px);
        let lightbox = Rc::new(Self {
            config,
            root,
            image,
            shutter,
            state: RefCell::new(LightboxState {
                items: Vec::new(),
                cursor: Carousel::default(),
                shutter: Shutter::new(),
                swipe,
            }),
            fallback: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        lightbox.install_listeners();
        Some(lightbox)
    }

    /// Drops listeners and any pending fallback; the listeners own the
    /// only other references to the lightbox.
    pub(crate) fn teardown(&self) {
        self.fallback.borrow_mut().take();
        self.listeners.borrow_mut().clear();
    }

    pub(crate) fn is_open(&self) -> bool {
        self.root
            .class_list()
            .contains(self.config.selectors.active_class)
    }

    /// Plays the shutter and then shows `items[index]`.
    pub(crate) fn open(self: &Rc<Self>, items: Vec<String>, index: usize) {
        if items.is_empty() {
            return;
        }
        let ticket = {
            let mut state = self.state.borrow_mut();
            let Some(ticket) = state.shutter.request(index) else {
                return;
            };
            state.cursor = Carousel::with_index(items.len(), index);
            state.items = items;
            ticket
        };
        dom::set_class(&self.shutter, SHUTTER_OPENING_CLASS, false);
        dom::set_class(&self.shutter, SHUTTER_CLOSING_CLASS, true);
        self.arm_fallback(ticket);
    }

    pub(crate) fn close(&self) {
        self.state.borrow_mut().swipe.cancel();
        dom::set_class(&self.root, self.config.selectors.active_class, false);
    }

    pub(crate) fn step(&self, direction: SwipeDirection) {
        if !self.is_open() {
            return;
        }
        let src = {
            let mut state = self.state.borrow_mut();
            let index = match direction {
                SwipeDirection::Next => state.cursor.next(),
                SwipeDirection::Previous => state.cursor.previous(),
            };
            state.items.get(index).cloned()
        };
        if let Some(src) = src {
            self.image.set_src(&src);
        }
    }

    /// Ends the shutter phase identified by `ticket`. Both `animationend`
    /// and the fallback timeout land here; only the first one counts.
    fn finish_phase(self: &Rc<Self>, ticket: u64) {
        let step = self.state.borrow_mut().shutter.complete(ticket);
        let Some(step) = step else {
            return;
        };
        self.fallback.borrow_mut().take();
        match step {
            ShutterStep::Reveal { target } => {
                let (src, next_ticket) = {
                    let state = self.state.borrow();
                    (state.items.get(target).cloned(), state.shutter.ticket())
                };
                if let Some(src) = src {
                    self.image.set_src(&src);
                }
                dom::set_class(&self.root, self.config.selectors.active_class, true);
                dom::set_class(&self.shutter, SHUTTER_CLOSING_CLASS, false);
                dom::set_class(&self.shutter, SHUTTER_OPENING_CLASS, true);
                self.arm_fallback(next_ticket);
            }
            ShutterStep::Reset => {
                dom::set_class(&self.shutter, SHUTTER_OPENING_CLASS, false);
            }
        }
    }

    fn arm_fallback(self: &Rc<Self>, ticket: u64) {
        let lightbox = Rc::clone(self);
        *self.fallback.borrow_mut() = Some(Timeout::new(
            self.config.ui.shutter_fallback_ms,
            move || lightbox.finish_phase(ticket),
        ));
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();
        let selectors = &self.config.selectors;

        let galleries: Vec<Element> = dom::query_document(selectors.gallery);
        for gallery in galleries {
            let lightbox = Rc::clone(self);
            let container = gallery.clone();
            listeners.push(EventListener::new(&gallery, "click", move |event: &Event| {
                let Some(clicked) = event
                    .target()
                    .and_then(|target| target.dyn_into::<HtmlImageElement>().ok())
                else {
                    return;
                };
                let images: Vec<HtmlImageElement> =
                    dom::query_all(&container, lightbox.config.selectors.gallery_image);
                let Some(index) = images.iter().position(|image| *image == clicked) else {
                    return;
                };
                event.prevent_default();
                let items = images.iter().map(full_size_src).collect();
                lightbox.open(items, index);
            }));
        }

        let lightbox = Rc::clone(self);
        let shutter = self.shutter.clone();
        listeners.push(EventListener::new(&self.shutter, "animationend", move |event: &Event| {
            let on_shutter = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .map(|target| target == shutter)
                .unwrap_or(false);
            if !on_shutter {
                return;
            }
            let ticket = lightbox.state.borrow().shutter.ticket();
            lightbox.finish_phase(ticket);
        }));

        if let Some(close) = self
            .root
            .query_selector(selectors.lightbox_close)
            .ok()
            .flatten()
        {
            let lightbox = Rc::clone(self);
            listeners.push(EventListener::new(&close, "click", move |event: &Event| {
                event.stop_propagation();
                lightbox.close();
            }));
        }

        let lightbox = Rc::clone(self);
        let root = self.root.clone();
        listeners.push(EventListener::new(&self.root, "click", move |event: &Event| {
            let on_backdrop = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .map(|target| target == root)
                .unwrap_or(false);
            if on_backdrop {
                lightbox.close();
            }
        }));

        let lightbox = Rc::clone(self);
        listeners.push(EventListener::new(&self.image, "click", move |event: &Event| {
            event.stop_propagation();
            lightbox.step(SwipeDirection::Next);
        }));

        if let Some(window) = web_sys::window() {
            let lightbox = Rc::clone(self);
            listeners.push(EventListener::new(&window, "keydown", move |event: &Event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if !lightbox.is_open() {
                    return;
                }
                match event.key().as_str() {
                    "Escape" => lightbox.close(),
                    "ArrowRight" => lightbox.step(SwipeDirection::Next),
                    "ArrowLeft" => lightbox.step(SwipeDirection::Previous),
                    _ => {}
                }
            }));
        }

        let passive = EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        };
        let lightbox = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &self.root,
            "touchstart",
            passive,
            move |event: &Event| {
                if let Some(x) = first_touch_x(event) {
                    lightbox.state.borrow_mut().swipe.begin(x);
                }
            },
        ));
        let lightbox = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &self.root,
            "touchmove",
            passive,
            move |event: &Event| {
                if let Some(x) = first_touch_x(event) {
                    lightbox.state.borrow_mut().swipe.track(x);
                }
            },
        ));
        let lightbox = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &self.root,
            "touchend",
            passive,
            move |_event: &Event| {
                let direction = lightbox.state.borrow_mut().swipe.finish();
                if let Some(direction) = direction {
                    lightbox.step(direction);
                }
            },
        ));

        *self.listeners.borrow_mut() = listeners;
    }
}

fn first_touch_x(event: &Event) -> Option<f64> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let touch = event
        .touches()
        .item(0)
        .or_else(|| event.changed_touches().item(0))?;
    Some(touch.client_x() as f64)
}

/// Source shown in the lightbox: `data-full` when present, else the
/// thumbnail's own source.
fn full_size_src(image: &HtmlImageElement) -> String {
    image
        .get_attribute("data-full")
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| image.src())
}
