//! Lead-capture inquiry dialog.
//!
//! Renders `InquiryForm` and runs `net::submit::drive_submission` on submit.
//! The pending submission is abortable: manual close during the confirmation
//! and component cleanup both cancel it so no timer touches a dead form.

#[cfg(test)]
#[path = "inquiry_dialog_test.rs"]
mod inquiry_dialog_test;

use futures::future::AbortHandle;
use leptos::prelude::*;

use crate::net::submit::InquiryTimings;
use crate::state::inquiry::{CloseOutcome, InquiryField, InquiryForm};

/// Modal inquiry form. Visibility follows `form.visible`.
#[component]
pub fn InquiryDialog(
    form: RwSignal<InquiryForm>,
    #[prop(optional)] timings: Option<InquiryTimings>,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    let timings = timings.unwrap_or_default();
    let pending = StoredValue::new(None::<AbortHandle>);
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    // Escape is handled on the dialog element, so it needs focus on open.
    let opened = open_trigger(form);
    Effect::new(move || {
        if !opened.get() {
            return;
        }
        if let Some(el) = dialog_ref.get() {
            if let Err(e) = el.focus() {
                #[cfg(feature = "hydrate")]
                log::debug!("inquiry dialog focus failed: {e:?}");
                #[cfg(not(feature = "hydrate"))]
                drop(e);
            }
        }
    });

    let close = move || {
        if form.try_update(InquiryForm::request_close) == Some(CloseOutcome::Closed) {
            cancel_pending(pending);
            if let Some(cb) = on_close {
                cb.run(());
            }
        }
    };
    let on_backdrop = move |_| close();
    let on_close_click = move |_| close();
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(InquiryForm::is_frozen) {
            return;
        }
        spawn_submission(form, timings, pending, on_close);
    };

    let submitting = move || form.with(InquiryForm::is_submitting);
    let submitted = move || form.with(InquiryForm::is_submitted);
    let frozen = move || form.with(InquiryForm::is_frozen);
    let error_text = move || form.with(|f| f.error.as_ref().map(ToString::to_string));
    let service_value = move || form.with(|f| f.fields.service.clone());
    let options = form.with_untracked(InquiryForm::options);

    view! {
        <Show when=move || form.with(|f| f.visible)>
            <div class="dialog-backdrop" on:click=on_backdrop>
                <div
                    class="dialog dialog--inquiry"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                    tabindex="-1"
                    node_ref=dialog_ref
                >
                    <button
                        class="dialog__close"
                        on:click=on_close_click
                        title="Close"
                        disabled=submitting
                    >
                        "✕"
                    </button>
                    <div class="dialog__header">
                        <h2>"Inquire About Our Carbon Solutions"</h2>
                        <p class="dialog__subtitle">
                            "Let us know how Afmerica Technology can help with your activated carbon needs or sustainability goals."
                        </p>
                    </div>

                    <Show
                        when=submitted
                        fallback=move || {
                            view! {
                                <form class="inquiry-form" on:submit=on_submit>
                                    <div class="inquiry-form__row">
                                        <FieldInput form=form field=InquiryField::Name label="Full Name" placeholder="John Doe"/>
                                        <FieldInput
                                            form=form
                                            field=InquiryField::Email
                                            label="Email Address"
                                            placeholder="john@example.com"
                                            input_type="email"
                                        />
                                    </div>
                                    <div class="inquiry-form__row">
                                        <FieldInput form=form field=InquiryField::Phone label="Phone Number" placeholder="(123) 456-7890"/>
                                        <FieldInput form=form field=InquiryField::Company label="Company Name" placeholder="Your Company"/>
                                    </div>

                                    <label class="inquiry-form__field">
                                        <span>"Area of Interest"</span>
                                        <select
                                            name=InquiryField::ServiceInterest.as_str()
                                            prop:value=service_value
                                            disabled=frozen
                                            on:change=move |ev| {
                                                apply_edit(form, InquiryField::ServiceInterest, &event_target_value(&ev));
                                            }
                                        >
                                            <option value="">"Select an area of interest"</option>
                                            {options
                                                .iter()
                                                .map(|o| view! { <option value=o.value>{o.label}</option> })
                                                .collect_view()}
                                        </select>
                                    </label>

                                    <label class="inquiry-form__field">
                                        <span>"Your Inquiry / Project Details"</span>
                                        <textarea
                                            name=InquiryField::Message.as_str()
                                            rows="4"
                                            placeholder="Please describe your requirements, application, estimated volume, or partnership ideas..."
                                            prop:value=move || form.with(|f| f.fields.message.clone())
                                            disabled=frozen
                                            on:input=move |ev| {
                                                apply_edit(form, InquiryField::Message, &event_target_value(&ev));
                                            }
                                        ></textarea>
                                    </label>

                                    <Show when=move || error_text().is_some()>
                                        <p class="inquiry-form__error" role="alert">
                                            {move || error_text().unwrap_or_default()}
                                        </p>
                                    </Show>

                                    <button class="btn btn--primary inquiry-form__submit" type="submit" disabled=submitting>
                                        {move || {
                                            if submitting() {
                                                view! {
                                                    <span class="spinner" aria-hidden="true"></span>
                                                    "Processing..."
                                                }
                                                    .into_any()
                                            } else {
                                                "Submit Inquiry".into_any()
                                            }
                                        }}
                                    </button>
                                    <p class="inquiry-form__privacy">
                                        "We respect your privacy. Your information will only be used to discuss your project needs."
                                    </p>
                                </form>
                            }
                        }
                    >
                        <div class="inquiry-confirmation">
                            <div class="inquiry-confirmation__check">"✓"</div>
                            <h3>"Thank You!"</h3>
                            <p>"Your inquiry has been submitted successfully. We'll be in touch soon!"</p>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

/// Labelled single-line input bound to one form field.
#[component]
fn FieldInput(
    form: RwSignal<InquiryForm>,
    field: InquiryField,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="inquiry-form__field">
            <span>{label}</span>
            <input
                name=field.as_str()
                type=input_type
                placeholder=placeholder
                required=field.is_required()
                prop:value=move || form.with(|f| f.fields.get(field).to_owned())
                disabled=move || form.with(InquiryForm::is_frozen)
                on:input=move |ev| apply_edit(form, field, &event_target_value(&ev))
            />
        </label>
    }
}

/// Changes only when the dialog opens or closes, not on field edits.
fn open_trigger(form: RwSignal<InquiryForm>) -> Memo<bool> {
    Memo::new(move |_| form.with(|f| f.visible))
}

/// Write one edit into the form. Rejected edits leave the form unchanged.
fn apply_edit(form: RwSignal<InquiryForm>, field: InquiryField, value: &str) {
    let rejected = form.try_update(|f| f.update_field(field, value).err()).flatten();
    if let Some(e) = rejected {
        #[cfg(feature = "hydrate")]
        log::warn!("inquiry edit rejected: {e}");
        #[cfg(not(feature = "hydrate"))]
        drop(e);
    }
}

fn cancel_pending(pending: StoredValue<Option<AbortHandle>>) {
    if let Some(handle) = pending.try_update_value(Option::take).flatten() {
        handle.abort();
    }
}

#[cfg(feature = "hydrate")]
fn spawn_submission(
    form: RwSignal<InquiryForm>,
    timings: InquiryTimings,
    pending: StoredValue<Option<AbortHandle>>,
    on_close: Option<Callback<()>>,
) {
    use futures::future::{Aborted, abortable};

    use crate::net::submit::{BrowserSleeper, SimulatedSubmitter, SubmissionOutcome, drive_submission};

    let (task, handle) = abortable(async move {
        let sleeper = BrowserSleeper;
        let submitter = SimulatedSubmitter::new(sleeper, timings.submit_latency);
        drive_submission(&form, &submitter, &sleeper, timings.confirmation, move || {
            if let Some(cb) = on_close {
                cb.run(());
            }
        })
        .await
    });
    cancel_pending(pending);
    pending.set_value(Some(handle));

    leptos::task::spawn_local(async move {
        match task.await {
            Ok(SubmissionOutcome::Completed) => log::info!("inquiry submitted"),
            Ok(SubmissionOutcome::Invalid(e)) => log::info!("inquiry blocked by validation: {e}"),
            Ok(SubmissionOutcome::Failed(e)) => log::warn!("inquiry submission failed: {e}"),
            Ok(SubmissionOutcome::Ignored | SubmissionOutcome::Detached) | Err(Aborted) => {
                log::debug!("inquiry submission ended early");
            }
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn spawn_submission(
    _form: RwSignal<InquiryForm>,
    _timings: InquiryTimings,
    _pending: StoredValue<Option<AbortHandle>>,
    _on_close: Option<Callback<()>>,
) {
}
