use gloo_net::http::Request;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::utils::analytics;

#[derive(Serialize)]
struct SubscribeRequest {
    email: String,
}

#[derive(Clone, PartialEq)]
enum Status {
    Idle,
    Loading,
    Success,
    Error(String),
}

async fn subscribe(address: String) -> Result<(), String> {
    let generic = || "Something went wrong".to_string();
    let request = Request::post(&format!("{}/email-list", config::get_backend_url()))
        .header("Content-Type", "application/json")
        .json(&SubscribeRequest { email: address })
        .map_err(|err| {
            gloo_console::log!("subscribe: failed to build request:", err.to_string());
            generic()
        })?;
    let response = request.send().await.map_err(|err| {
        gloo_console::log!("subscribe: request failed:", err.to_string());
        generic()
    })?;
    if response.ok() {
        return Ok(());
    }
    // Surface the server's message when it sends one.
    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| body.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(generic);
    Err(message)
}

#[function_component(EmailSignup)]
pub fn email_signup() -> Html {
    let email = use_state(String::new);
    let status = use_state(|| Status::Idle);
    let focus_tracked = use_mut_ref(|| false);
    let type_tracked = use_mut_ref(|| false);

    let onsubmit = {
        let email = email.clone();
        let status = status.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let address = email.trim().to_string();
            if address.is_empty() {
                return;
            }
            analytics::track("subscribe_clicked");
            status.set(Status::Loading);
            let email = email.clone();
            let status = status.clone();
            spawn_local(async move {
                match subscribe(address).await {
                    Ok(()) => {
                        status.set(Status::Success);
                        email.set(String::new());
                    }
                    Err(message) => status.set(Status::Error(message)),
                }
            });
        })
    };

    let onfocus = {
        let focus_tracked = focus_tracked.clone();
        Callback::from(move |_: FocusEvent| {
            if !*focus_tracked.borrow() {
                *focus_tracked.borrow_mut() = true;
                analytics::track("email_input_focused");
            }
        })
    };

    let oninput = {
        let email = email.clone();
        let type_tracked = type_tracked.clone();
        Callback::from(move |event: InputEvent| {
            if !*type_tracked.borrow() {
                *type_tracked.borrow_mut() = true;
                analytics::track("email_input_typed");
            }
            let input: HtmlInputElement = event.target_unchecked_into();
            email.set(input.value());
        })
    };

    if *status == Status::Success {
        return html! {
            <div class="signup-wrapper">
                <p class="signup-success">{"You're on the list! We'll be in touch."}</p>
            </div>
        };
    }

    let loading = *status == Status::Loading;
    html! {
        <div class="signup-wrapper">
            <p class="signup-label">{"Get notified about updates"}</p>
            <form class="signup-form" {onsubmit}>
                <input
                    type="email"
                    class="signup-input"
                    placeholder="you@email.com"
                    value={(*email).clone()}
                    {oninput}
                    {onfocus}
                    required=true
                    disabled={loading}
                />
                <button type="submit" class="signup-button" disabled={loading}>
                    { if loading { "Subscribing..." } else { "Subscribe" } }
                </button>
            </form>
            {
                if let Status::Error(message) = &*status {
                    html! { <p class="signup-error">{message.clone()}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::SubscribeRequest;

    #[test]
    fn subscribe_payload_matches_endpoint_contract() {
        let body = serde_json::to_string(&SubscribeRequest {
            email: "you@email.com".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"email":"you@email.com"}"#);
    }
}
