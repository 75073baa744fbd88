//! Record Log Component
//!
//! Form, quick-fill buttons, messages and recents list for one record kind.
//! The four pages are this view instantiated with their kind.

use babytracker::transport;
use babytracker::{
    FieldKind, FieldSpec, FormError, RecordKind, SubmitOutcome, Workflow, FEEDBACK_TTL_MS,
};
use gloo_timers::callback::Timeout;
use leptos::*;
use wasm_bindgen::JsValue;

use super::{Banner, BannerVariant};
use crate::api::GlooTransport;

const INPUT_CLASS: &str = "w-full bg-gray-700 rounded-lg px-4 py-3 text-white \
                           border border-gray-600 focus:border-primary-500 focus:outline-none";

/// Logging view for record kind `K`
pub fn record_log<K: RecordKind>() -> impl IntoView {
    let api = use_context::<GlooTransport>().expect("GlooTransport not found");

    let workflow = create_rw_signal(Workflow::<K>::new());
    let form_error = create_rw_signal(None::<FormError>);

    load_recents(workflow, api.clone());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit(workflow, form_error, api.clone());
    };

    let labels = K::LABELS;

    view! {
        <div class="grid gap-8 lg:grid-cols-2">
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">{labels.heading}</h2>

                {quick_fills(workflow)}

                {move || workflow.with(|w| w.feedback().map(|message| view! {
                    <Banner message=message.to_string() variant=BannerVariant::Success />
                }))}
                {move || workflow.with(|w| w.error().map(|message| view! {
                    <Banner message=message.to_string() variant=BannerVariant::Error />
                }))}
                {move || form_error.get().map(|e| view! {
                    <Banner message=e.to_string() variant=BannerVariant::Error />
                })}

                <form on:submit=on_submit class="space-y-4">
                    {K::FIELDS
                        .iter()
                        .map(|spec| field_input(workflow, spec))
                        .collect_view()}

                    <button
                        type="submit"
                        disabled=move || workflow.with(|w| w.is_in_flight())
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                               transition-colors"
                    >
                        {move || if workflow.with(|w| w.is_in_flight()) {
                            "Saving..."
                        } else {
                            labels.submit
                        }}
                    </button>
                </form>
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">{labels.recent_heading}</h2>
                {recents(workflow)}
            </section>
        </div>
    }
}

/// Quick-fill buttons, if the kind has any
fn quick_fills<K: RecordKind>(workflow: RwSignal<Workflow<K>>) -> View {
    if K::QUICK_FILLS.is_empty() {
        return view! {}.into_view();
    }

    view! {
        <div class="flex space-x-2 mb-4">
            {K::QUICK_FILLS
                .iter()
                .map(|preset| {
                    let key = preset.key;
                    view! {
                        <button
                            type="button"
                            on:click=move |_| {
                                workflow.update(|w| {
                                    if let Err(e) = w.quick_fill(key) {
                                        console_error(&e.to_string());
                                    }
                                })
                            }
                            class="px-4 py-2 rounded-lg text-sm font-medium bg-gray-700
                                   text-gray-300 hover:text-white transition-colors"
                        >
                            {preset.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

fn recents<K: RecordKind>(workflow: RwSignal<Workflow<K>>) -> impl IntoView {
    move || {
        workflow.with(|w| {
            if w.recents().is_empty() {
                return view! { <p class="text-gray-400">{K::LABELS.empty}</p> }.into_view();
            }

            view! {
                <ul class="space-y-2">
                    {w.recents()
                        .iter()
                        .map(|record| {
                            let summary = record.summarize();
                            view! {
                                <li class="bg-gray-700 rounded-lg px-4 py-3 text-sm">
                                    <strong>{summary.headline}</strong>
                                    {summary.detail}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            }
            .into_view()
        })
    }
}

/// Label and input for one field, bound to the workflow's form
fn field_input<K: RecordKind>(workflow: RwSignal<Workflow<K>>, spec: &'static FieldSpec) -> View {
    let name = spec.name;
    let value = move || workflow.with(|w| w.form().value(name).to_string());
    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        workflow.update(|w| {
            if let Err(e) = w.set_field(name, value) {
                console_error(&e.to_string());
            }
        });
    };

    let control = match spec.kind {
        FieldKind::Choice(options) => view! {
            <select
                required=spec.required
                prop:value=value
                on:change=on_input
                class=INPUT_CLASS
            >
                <option value="">{spec.placeholder}</option>
                {options
                    .iter()
                    .map(|&option| view! {
                        <option value=option selected=move || value() == option>
                            {option}
                        </option>
                    })
                    .collect_view()}
            </select>
        }
        .into_view(),

        FieldKind::Date => view! {
            <input
                type="date"
                required=spec.required
                prop:value=value
                on:input=on_input
                class=INPUT_CLASS
            />
        }
        .into_view(),

        FieldKind::Time { with_seconds } => view! {
            <input
                type="time"
                step=time_step(with_seconds)
                required=spec.required
                prop:value=value
                on:input=on_input
                class=INPUT_CLASS
            />
        }
        .into_view(),

        FieldKind::Number { step } => view! {
            <input
                type="number"
                min="0"
                step=step
                placeholder=spec.placeholder
                required=spec.required
                prop:value=value
                on:input=on_input
                class=INPUT_CLASS
            />
        }
        .into_view(),

        FieldKind::Text => view! {
            <textarea
                rows="3"
                placeholder=spec.placeholder
                prop:value=value
                on:input=on_input
                class=INPUT_CLASS
            />
        }
        .into_view(),
    };

    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{spec.label}</label>
            {control}
        </div>
    }
    .into_view()
}

fn time_step(with_seconds: bool) -> &'static str {
    if with_seconds {
        "1"
    } else {
        "60"
    }
}

/// Fetch the collection into the recents list. Dropped if the view is gone.
fn load_recents<K: RecordKind>(workflow: RwSignal<Workflow<K>>, api: GlooTransport) {
    spawn_local(async move {
        let result = transport::list::<K, _>(&api).await;
        if let Err(e) = &result {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "Failed to load {}: {}",
                K::COLLECTION,
                e
            )));
        }
        workflow.try_update(|w| w.apply_recents(result));
    });
}

fn submit<K: RecordKind>(
    workflow: RwSignal<Workflow<K>>,
    form_error: RwSignal<Option<FormError>>,
    api: GlooTransport,
) {
    let pending = match workflow.try_update(|w| w.begin_submit()) {
        Some(Ok(pending)) => pending,
        Some(Err(e)) => {
            form_error.set(Some(e));
            return;
        }
        None => return,
    };
    form_error.set(None);

    spawn_local(async move {
        let result = transport::create(&api, pending.record()).await;
        if let Err(e) = &result {
            console_error(&format!("Failed to log {}: {}", K::COLLECTION, e));
        }

        let outcome = workflow.try_update(|w| w.finish_submit(pending, result));
        if let Some(SubmitOutcome::Logged { generation }) = outcome {
            Timeout::new(FEEDBACK_TTL_MS, move || {
                workflow.try_update(|w| w.clear_feedback(generation));
            })
            .forget();

            load_recents(workflow, api);
        }
    });
}

fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}
