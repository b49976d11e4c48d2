use gloo::console;
use web_sys::{Element, HtmlImageElement};

use galleria_core::layout::css_px;
use galleria_core::{plan_row_heights, SiteConfig};

use crate::dom;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub containers: usize,
    pub skipped_hidden: usize,
    pub images_written: usize,
}

/// Normalizes row heights in every visible gallery on the page.
///
/// Stateless across calls: explicit heights are cleared before measuring,
/// so repeated or overlapping triggers settle on the same result.
pub fn adjust_gallery_heights(config: &SiteConfig) -> PassSummary {
    let containers: Vec<Element> = dom::query_document(config.selectors.gallery);
    let mut summary = PassSummary::default();
    for container in &containers {
        if !dom::is_rendered(container) {
            summary.skipped_hidden += 1;
            continue;
        }
        summary.containers += 1;
        summary.images_written += adjust_container(container, config);
    }
    if config.verbose {
        console::debug!(
            "gallery pass",
            summary.containers,
            "visible,",
            summary.skipped_hidden,
            "hidden,",
            summary.images_written,
            "images sized"
        );
    }
    summary
}

fn adjust_container(container: &Element, config: &SiteConfig) -> usize {
    let images: Vec<HtmlImageElement> =
        dom::query_all(container, config.selectors.gallery_image);
    if images.is_empty() {
        return 0;
    }
    for image in &images {
        dom::clear_style(image, "height");
    }
    let boxes: Vec<_> = images.iter().map(dom::image_box).collect();
    let planned = plan_row_heights(&boxes, config.rows);
    for assignment in &planned {
        let Some(image) = images.get(assignment.index) else {
            continue;
        };
        dom::set_style(image, "height", &css_px(assignment.height));
        dom::set_style(image, "object-fit", "cover");
    }
    planned.len()
}
