use crate::layout::RowParams;

pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const SECTION_SETTLE_MS: u32 = 100;
pub const SHUTTER_FALLBACK_MS: u32 = 700;
pub const SLIDESHOW_INTERVAL_MS: u32 = 5000;
pub const PRELOADER_FADE_MS: u32 = 600;
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

pub const ACTIVE_CLASS: &str = "active";
pub const LOADED_CLASS: &str = "loaded";
pub const SHUTTER_CLOSING_CLASS: &str = "closing";
pub const SHUTTER_OPENING_CLASS: &str = "opening";

/// Role markers the client looks for in the page.
#[derive(Clone, Debug, PartialEq)]
pub struct Selectors {
    pub gallery: &'static str,
    pub gallery_image: &'static str,
    pub section: &'static str,
    pub nav_link: &'static str,
    pub active_class: &'static str,
    pub preloader: &'static str,
    pub hero_slide: &'static str,
    pub lightbox: &'static str,
    pub lightbox_image: &'static str,
    pub lightbox_close: &'static str,
    pub shutter: &'static str,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            gallery: ".gallery",
            gallery_image: "img",
            section: ".page-section",
            nav_link: ".nav-link",
            active_class: ACTIVE_CLASS,
            preloader: "#preloader",
            hero_slide: ".hero-slide",
            lightbox: "#lightbox",
            lightbox_image: "#lightbox-img",
            lightbox_close: ".lightbox-close",
            shutter: "#shutter",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerTiming {
    pub resize_debounce_ms: u32,
    pub settle_delay_ms: u32,
}

impl Default for TriggerTiming {
    fn default() -> Self {
        Self {
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            settle_delay_ms: SECTION_SETTLE_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiTiming {
    pub shutter_fallback_ms: u32,
    pub slideshow_interval_ms: u32,
    pub preloader_fade_ms: u32,
    pub swipe_threshold_px: f64,
}

impl Default for UiTiming {
    fn default() -> Self {
        Self {
            shutter_fallback_ms: SHUTTER_FALLBACK_MS,
            slideshow_interval_ms: SLIDESHOW_INTERVAL_MS,
            preloader_fade_ms: PRELOADER_FADE_MS,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteConfig {
    pub selectors: Selectors,
    pub rows: RowParams,
    pub triggers: TriggerTiming,
    pub ui: UiTiming,
    pub verbose: bool,
}
