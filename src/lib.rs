mod config;
mod dom;
pub mod gallery;
mod lightbox;
mod navigation;
mod preloader;
mod runtime;
mod slideshow;
mod timers;
mod triggers;

pub use gallery::{adjust_gallery_heights, PassSummary};
pub use navigation::activate_section;
pub use runtime::{request_adjust, site_config, start, stop};
