//! Build-time configuration and shared site constants.

pub const SITE_URL: &str = "https://humblr.house";

pub const CHROME_STORE_URL: &str =
    "https://chromewebstore.google.com/detail/mpejgchaaggebeloaalflmihboncnalh?utm_source=item-share-cb";
pub const APP_STORE_URL: &str = "https://apps.apple.com/us/app/zcomments/id6759467564";
pub const COFFEE_URL: &str = "https://buymeacoffee.com/mkotik";
pub const CONTACT_EMAIL: &str = "maratkotik97@gmail.com";

/// Scroll-lock cinematic and hover tilt only run above this breakpoint.
pub const NARROW_VIEWPORT_QUERY: &str = "(max-width: 768px)";

pub fn get_backend_url() -> String {
    option_env!("BACKEND_URL")
        .unwrap_or("http://localhost:6000")
        .to_string()
}

/// Analytics stays dark when no token is baked in.
pub fn get_mixpanel_token() -> Option<&'static str> {
    option_env!("MIXPANEL_TOKEN")
}

/// Checked once at mount by the animation controllers; deliberately not
/// re-evaluated on resize, so crossing the breakpoint mid-session keeps the
/// mount-time behavior until the next navigation.
pub fn is_narrow_viewport() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(NARROW_VIEWPORT_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}
