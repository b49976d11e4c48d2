use web_sys::UrlSearchParams;

use galleria_core::SiteConfig;

pub(crate) fn load_site_config() -> SiteConfig {
    SiteConfig {
        verbose: debug_requested(),
        ..SiteConfig::default()
    }
}

fn debug_requested() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(search) = window.location().search() else {
        return false;
    };
    let Ok(params) = UrlSearchParams::new_with_str(&search) else {
        return false;
    };
    match params.get("debug") {
        Some(value) => !matches!(value.trim(), "0" | "false" | "off"),
        None => false,
    }
}
