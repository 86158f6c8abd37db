use gloo_console::log;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

/// How long a successful submission is shown before the form returns to idle.
const SUCCESS_RESET_MS: u32 = 5_000;

/// The one real state machine on the site. Transitions:
/// idle/error --submit--> submitting --2xx--> success --5s--> idle
///                                   --non-2xx/transport--> error (sticky)
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Only an in-flight submission blocks a new one; submitting while the
    /// success banner shows preempts its pending auto-reset.
    pub fn can_submit(self) -> bool {
        !matches!(self, Self::Submitting)
    }

    pub fn on_submit(self) -> Self {
        if self.can_submit() {
            Self::Submitting
        } else {
            self
        }
    }

    pub fn on_response(self, ok: bool) -> Self {
        match self {
            Self::Submitting if ok => Self::Success,
            Self::Submitting => Self::Error,
            other => other,
        }
    }

    pub fn on_reset_elapsed(self) -> Self {
        match self {
            Self::Success => Self::Idle,
            other => other,
        }
    }
}

#[derive(Serialize)]
struct ContactRequest {
    name: String,
    email: String,
    message: String,
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(|| SubmissionStatus::Idle);
    // Pending auto-reset handle; replaced (and thereby cancelled) when a new
    // submission preempts it.
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let status = status.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !status.can_submit() {
                return;
            }
            // A new attempt preempts any pending success auto-reset.
            if let Some(pending) = reset_timer.borrow_mut().take() {
                pending.cancel();
            }
            status.set(status.on_submit());

            let payload = ContactRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };
            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let status = status.clone();
            let reset_timer = reset_timer.clone();
            spawn_local(async move {
                match Request::post(&format!("{}/api/contact", config::get_api_base_url()))
                    .json(&payload)
                    .unwrap()
                    .send()
                    .await
                {
                    Ok(response) => {
                        let ok = response.ok();
                        let body = response
                            .json::<serde_json::Value>()
                            .await
                            .unwrap_or(serde_json::Value::Null);
                        log!(
                            "Contact response:",
                            response.status(),
                            body.to_string()
                        );
                        if ok {
                            name.set(String::new());
                            email.set(String::new());
                            message.set(String::new());
                            status.set(SubmissionStatus::Submitting.on_response(true));
                            let status_setter = status.setter();
                            *reset_timer.borrow_mut() =
                                Some(Timeout::new(SUCCESS_RESET_MS, move || {
                                    status_setter.set(SubmissionStatus::Success.on_reset_elapsed());
                                }));
                        } else {
                            status.set(SubmissionStatus::Submitting.on_response(false));
                        }
                    }
                    Err(e) => {
                        log!("Contact submission failed:", e.to_string());
                        status.set(SubmissionStatus::Submitting.on_response(false));
                    }
                }
            });
        })
    };

    let submitting = *status == SubmissionStatus::Submitting;

    html! {
        <div class="contact-card">
            <form {onsubmit}>
                <div class="form-field">
                    <label for="name">{"Name"}</label>
                    <input
                        type="text"
                        id="name"
                        placeholder="Your name"
                        value={(*name).clone()}
                        oninput={on_name}
                        required=true
                        disabled={submitting}
                    />
                </div>
                <div class="form-field">
                    <label for="email">{"Email"}</label>
                    <input
                        type="email"
                        id="email"
                        placeholder="your@email.com"
                        value={(*email).clone()}
                        oninput={on_email}
                        required=true
                        disabled={submitting}
                    />
                </div>
                <div class="form-field">
                    <label for="message">{"Message"}</label>
                    <textarea
                        id="message"
                        rows="6"
                        placeholder="Your message..."
                        value={(*message).clone()}
                        oninput={on_message}
                        required=true
                        disabled={submitting}
                    />
                </div>
                {
                    match *status {
                        SubmissionStatus::Success => html! {
                            <div class="form-status success">
                                {"Message sent successfully! We'll get back to you soon."}
                            </div>
                        },
                        SubmissionStatus::Error => html! {
                            <div class="form-status error">
                                {"Failed to send message. Please try again."}
                            </div>
                        },
                        _ => html! {},
                    }
                }
                <button type="submit" class="submit-button" disabled={submitting}>
                    {
                        if submitting {
                            html! { <><span class="button-spinner"></span>{" Sending..."}</> }
                        } else {
                            html! { {"Send Message"} }
                        }
                    }
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::SubmissionStatus::*;

    #[test]
    fn test_submit_blocked_only_while_in_flight() {
        assert_eq!(Idle.on_submit(), Submitting);
        assert_eq!(Error.on_submit(), Submitting);
        assert!(!Submitting.can_submit(), "double-submit is prevented");
        assert_eq!(Submitting.on_submit(), Submitting, "double-submit is a no-op");
        assert_eq!(Success.on_submit(), Submitting, "new submit preempts the auto-reset");
    }

    #[test]
    fn test_response_resolves_submitting_only() {
        assert_eq!(Submitting.on_response(true), Success);
        assert_eq!(Submitting.on_response(false), Error);
        assert_eq!(Idle.on_response(true), Idle, "stale responses don't move the machine");
        assert_eq!(Error.on_response(true), Error);
    }

    #[test]
    fn test_success_auto_resets_and_error_is_sticky() {
        assert_eq!(Success.on_reset_elapsed(), Idle);
        assert_eq!(Error.on_reset_elapsed(), Error);
        assert_eq!(Idle.on_reset_elapsed(), Idle);
        assert_eq!(Submitting.on_reset_elapsed(), Submitting);
    }

    #[test]
    fn test_full_success_cycle() {
        let status = Idle.on_submit().on_response(true).on_reset_elapsed();
        assert_eq!(status, Idle);
    }

    #[test]
    fn test_failed_cycle_requires_explicit_resubmit() {
        let status = Idle.on_submit().on_response(false);
        assert_eq!(status, Error);
        assert_eq!(status.on_reset_elapsed(), Error, "no auto-recovery from error");
        assert_eq!(status.on_submit().on_response(true), Success);
    }

    #[test]
    fn test_every_event_sequence_stays_in_defined_states() {
        let events: [fn(super::SubmissionStatus) -> super::SubmissionStatus; 4] = [
            |s| s.on_submit(),
            |s| s.on_response(true),
            |s| s.on_response(false),
            |s| s.on_reset_elapsed(),
        ];
        // Exhaustively walk every 4-event sequence from every start state.
        for start in [Idle, Submitting, Success, Error] {
            for a in events {
                for b in events {
                    for c in events {
                        for d in events {
                            let s = d(c(b(a(start))));
                            assert!(matches!(s, Idle | Submitting | Success | Error));
                        }
                    }
                }
            }
        }
    }
}
