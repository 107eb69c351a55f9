use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use gloo_net::http::Request;
use gloo_console::log;
use wasm_bindgen_futures::spawn_local;

use crate::config;
use crate::lead::{
    classify_status, settle, ContentRequest, FormMode, LeadField, SubmitOutcome, SubmitStatus,
    CONTENT_TYPES,
};

#[derive(Properties, PartialEq)]
pub struct RequestFormProps {
    /// Backend talks to the API; Preview acknowledges locally and is used
    /// when the site runs without a backend.
    #[prop_or_default]
    pub mode: FormMode,
}

#[function_component(RequestForm)]
pub fn request_form(props: &RequestFormProps) -> Html {
    let request = use_state(ContentRequest::default);
    let status = use_state(|| SubmitStatus::Idle);
    let mode = props.mode;

    let onsubmit = {
        let request = request.clone();
        let status = status.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // A click while a request is in flight must not start a second one.
            if !status.can_submit() {
                return;
            }
            // The browser's required attributes already block this; mirror the
            // gate so a dispatch can never happen with a blank required field.
            if !request.is_complete() {
                return;
            }

            if let FormMode::Preview = mode {
                let (next_record, next_status) =
                    settle((*request).clone(), SubmitOutcome::PreviewAck);
                request.set(next_record);
                status.set(next_status.clone());
                dismiss_later(status.clone(), next_status);
                return;
            }

            status.set(SubmitStatus::Submitting);
            let payload = (*request).clone();
            let request = request.clone();
            let status = status.clone();

            spawn_local(async move {
                let outcome = match Request::post(&format!(
                    "{}/api/content-requests",
                    config::get_backend_url()
                ))
                .json(&payload)
                .unwrap()
                .send()
                .await
                {
                    Ok(response) => {
                        if !response.ok() {
                            log!("content request rejected with status:", response.status());
                        }
                        classify_status(response.status())
                    }
                    Err(e) => {
                        log!("content request failed:", e.to_string());
                        SubmitOutcome::Unreachable
                    }
                };

                let (next_record, next_status) = settle(payload, outcome);
                request.set(next_record);
                status.set(next_status.clone());
                dismiss_later(status, next_status);
            });
        })
    };

    html! {
        <div class="request-form-card">
            <style>
                {r#"
                .request-form-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 16px;
                    padding: 2.5rem;
                    max-width: 640px;
                    margin: 0 auto;
                    text-align: left;
                    backdrop-filter: blur(10px);
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                }
                .request-form-card h3 {
                    font-size: 1.5rem;
                    margin: 0 0 0.5rem;
                    color: #fff;
                }
                .request-form-card .form-intro {
                    color: rgba(255, 255, 255, 0.7);
                    margin-bottom: 2rem;
                }
                .request-form-card .field-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .request-form-card .field {
                    margin-bottom: 1.25rem;
                }
                .request-form-card label {
                    display: block;
                    font-size: 0.9rem;
                    color: rgba(255, 255, 255, 0.85);
                    margin-bottom: 0.4rem;
                }
                .request-form-card input,
                .request-form-card select,
                .request-form-card textarea {
                    width: 100%;
                    padding: 0.75rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(0, 0, 0, 0.3);
                    color: #fff;
                    font-size: 1rem;
                    box-sizing: border-box;
                }
                .request-form-card textarea {
                    resize: vertical;
                }
                .submit-request-button {
                    width: 100%;
                    padding: 1rem;
                    border: none;
                    border-radius: 8px;
                    background: linear-gradient(45deg, #1E90FF, #7EB2FF);
                    color: #fff;
                    font-size: 1.1rem;
                    cursor: pointer;
                }
                .submit-request-button:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .form-status {
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    margin-bottom: 1.5rem;
                }
                .form-status.success {
                    background: rgba(50, 205, 50, 0.15);
                    color: #7CFC8E;
                }
                .form-status.error {
                    background: rgba(255, 69, 58, 0.15);
                    color: #FF8A80;
                }
                @media (max-width: 768px) {
                    .request-form-card {
                        padding: 1.5rem;
                    }
                    .request-form-card .field-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>

            <h3>{"Content Request Form"}</h3>
            <p class="form-intro">
                {"Tell us about your content needs and we'll get back to you within 24 hours."}
            </p>
            {
                match &*status {
                    SubmitStatus::Succeeded => html! {
                        <div class="form-status success">
                            {
                                match mode {
                                    FormMode::Backend => "Content request submitted successfully!",
                                    FormMode::Preview => "Thank you for your interest! We will contact you soon.",
                                }
                            }
                        </div>
                    },
                    SubmitStatus::Failed => html! {
                        <div class="form-status error">
                            {"Error submitting request. Please try again."}
                        </div>
                    },
                    _ => html! {},
                }
            }
            <form onsubmit={onsubmit}>
                <div class="field-row">
                    <div class="field">
                        <label>{"Name *"}</label>
                        <input
                            type="text"
                            required=true
                            placeholder="Your full name"
                            value={request.name.clone()}
                            onchange={let request = request.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                let mut next = (*request).clone();
                                next.set(LeadField::Name, input.value());
                                request.set(next);
                            }}
                        />
                    </div>
                    <div class="field">
                        <label>{"Email *"}</label>
                        <input
                            type="email"
                            required=true
                            placeholder="your@email.com"
                            value={request.email.clone()}
                            onchange={let request = request.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                let mut next = (*request).clone();
                                next.set(LeadField::Email, input.value());
                                request.set(next);
                            }}
                        />
                    </div>
                </div>
                <div class="field-row">
                    <div class="field">
                        <label>{"Company"}</label>
                        <input
                            type="text"
                            placeholder="Your company name"
                            value={request.company.clone()}
                            onchange={let request = request.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                let mut next = (*request).clone();
                                next.set(LeadField::Company, input.value());
                                request.set(next);
                            }}
                        />
                    </div>
                    <div class="field">
                        <label>{"Content Type *"}</label>
                        <select
                            required=true
                            onchange={let request = request.clone(); move |e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                let mut next = (*request).clone();
                                next.set(LeadField::ContentType, select.value());
                                request.set(next);
                            }}
                        >
                            <option value="" selected={request.content_type.is_empty()}>
                                {"Select a content type"}
                            </option>
                            {
                                CONTENT_TYPES.iter().map(|content_type| html! {
                                    <option
                                        value={*content_type}
                                        selected={request.content_type == *content_type}
                                    >
                                        {*content_type}
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                </div>
                <div class="field">
                    <label>{"Project Details *"}</label>
                    <textarea
                        required=true
                        rows="4"
                        placeholder="Describe your content needs, target audience, key messages, and any specific requirements..."
                        value={request.message.clone()}
                        onchange={let request = request.clone(); move |e: Event| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            let mut next = (*request).clone();
                            next.set(LeadField::Message, input.value());
                            request.set(next);
                        }}
                    />
                </div>
                <button
                    type="submit"
                    class="submit-request-button"
                    disabled={!status.can_submit()}
                >
                    {
                        if *status == SubmitStatus::Submitting {
                            "Submitting..."
                        } else {
                            "Submit Content Request"
                        }
                    }
                </button>
            </form>
        </div>
    }
}

// Success banners fade back to idle on their own; failures stay visible
// until the next attempt.
fn dismiss_later(status: UseStateHandle<SubmitStatus>, shown: SubmitStatus) {
    if shown != SubmitStatus::Succeeded {
        return;
    }
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(4_000).await;
        if *status == SubmitStatus::Succeeded {
            status.set(SubmitStatus::Idle);
        }
    });
}
