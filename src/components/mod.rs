pub mod analytics_provider;
pub mod email_signup;
pub mod footer;
pub mod glow_button;
pub mod logos;
pub mod nav_cta;
pub mod showcase;
pub mod svg_filters;
