//! Inline browser-store logos used by the download buttons.

use yew::prelude::*;

#[function_component(ChromeLogo)]
pub fn chrome_logo() -> Html {
    html! {
        <svg viewBox="0 0 48 48" width="28" height="28" aria-hidden="true" xmlns="http://www.w3.org/2000/svg">
            <circle cx="24" cy="24" r="20" fill="#fff" />
            <path d="M24 4a20 20 0 0 1 17.3 10H24a10 10 0 0 0-8.9 5.5z" fill="#ea4335" />
            <path d="M41.3 14a20 20 0 0 1-15 29.6l8.7-15a10 10 0 0 0 .1-9.6z" fill="#fbbc05" />
            <path d="M6.9 12.7a20 20 0 0 0 19.4 30.9l-8.7-15a10 10 0 0 1-8.9-5.4z" fill="#34a853" />
            <circle cx="24" cy="24" r="8" fill="#4285f4" />
            <circle cx="24" cy="24" r="6" fill="#fff" />
            <circle cx="24" cy="24" r="5" fill="#4285f4" />
        </svg>
    }
}

#[function_component(SafariLogo)]
pub fn safari_logo() -> Html {
    html! {
        <svg viewBox="0 0 48 48" width="28" height="28" aria-hidden="true" xmlns="http://www.w3.org/2000/svg">
            <circle cx="24" cy="24" r="20" fill="#1b88e5" />
            <circle cx="24" cy="24" r="18" fill="#eef3f8" />
            <path d="M33.5 14.5 27 21l-6 6-6.5 6.5L21 27l6-6z" fill="#d93025" />
            <path d="M21 27l6.5-6.5 6-6L27 21z" fill="#d93025" />
            <path d="M14.5 33.5 21 27l6 6z" fill="#5f6368" opacity="0.35" />
        </svg>
    }
}
