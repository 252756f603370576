use filing_shared::pricing::{self, FeeEstimate, included_state_returns};
use filing_shared::summary::{Bucket, bucket_counts, city_returns_summary};
use filing_shared::{FormType, MapError};
use leptos::prelude::*;

use crate::app::{ActiveForm, OpenBucket, Selection};

const PANEL_STYLE: &str = "background: #ffffff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 20px; margin-bottom: 20px;";
const BUTTON_STYLE: &str = "padding: 8px 16px; border: none; border-radius: 6px; cursor: pointer; font-weight: 600;";

fn input_feedback(err: &MapError) -> &'static str {
    match err {
        MapError::AlreadySelected(_) => "State already selected!",
        _ => "Invalid state name or abbreviation!",
    }
}

#[component]
pub fn FilingTypeSelector() -> impl IntoView {
    let ActiveForm(form) = expect_context();

    view! {
        <div class="filing-type-section" style="flex: 1; min-width: 260px;">
            <h4 style="margin: 0 0 8px 0;">"Filing Type"</h4>
            {FormType::ALL
                .into_iter()
                .map(|option| {
                    view! {
                        <label class="filing-type-option" style="display: block; padding: 4px 0; cursor: pointer;">
                            <input
                                type="radio"
                                name="filingType"
                                value=option.id()
                                prop:checked=move || form.get() == option
                                on:change={move |e| match event_target_value(&e).parse::<FormType>() {
                                    Ok(selected) => form.set(selected),
                                    Err(err) => web_sys::console::warn_1(&format!("{err}").into()),
                                }}
                            />
                            <span class="filing-type-label" style="margin-left: 6px;">{option.option_label()}</span>
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn StateInput() -> impl IntoView {
    let Selection(selection) = expect_context();
    let input: RwSignal<String> = RwSignal::new(String::new());
    let feedback: RwSignal<Option<&'static str>> = RwSignal::new(None);

    let add = move || {
        let text = input.get_untracked();
        let mut next = selection.get_untracked();
        match next.add_from_input(&text) {
            Ok(Some(_)) => {
                selection.set(next);
                input.set(String::new());
                feedback.set(None);
            }
            Ok(None) => {}
            Err(e) => feedback.set(Some(input_feedback(&e))),
        }
    };

    view! {
        <div class="state-input-section" style="flex: 1; min-width: 260px;">
            <h4 style="margin: 0 0 8px 0;">"Add State"</h4>
            <div style="display: flex; gap: 8px;">
                <input
                    type="text"
                    placeholder="e.g. California or CA"
                    style="flex: 1; padding: 8px; border: 1px solid #d1d5db; border-radius: 6px;"
                    prop:value=move || input.get()
                    on:input=move |e| {
                        input.set(event_target_value(&e));
                        feedback.set(None);
                    }
                    on:keydown=move |e| {
                        if e.key() == "Enter" {
                            add();
                        }
                    }
                />
                <button
                    style=format!("{BUTTON_STYLE} background: #2563eb; color: #ffffff;")
                    on:click=move |_| add()
                >
                    "Add State"
                </button>
            </div>
            {move || {
                feedback
                    .get()
                    .map(|msg| {
                        view! {
                            <div class="state-input-error" style="color: #b91c1c; font-size: 0.85rem; margin-top: 6px;">
                                {msg}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
pub fn ActionButtons() -> impl IntoView {
    let Selection(selection) = expect_context();

    view! {
        <div class="action-buttons" style="display: flex; gap: 10px; margin-top: 16px;">
            <button
                style=format!("{BUTTON_STYLE} background: #059669; color: #ffffff;")
                on:click=move |_| selection.update(|set| set.select_all())
            >
                "Select All"
            </button>
            <button
                style=format!("{BUTTON_STYLE} background: #6b7280; color: #ffffff;")
                on:click=move |_| selection.update(|set| set.clear())
            >
                "Reset All"
            </button>
        </div>
    }
}

/// Counts per bucket for the active form, plus city-level obligations.
#[component]
pub fn SelectionSummary() -> impl IntoView {
    let Selection(selection) = expect_context();
    let ActiveForm(form) = expect_context();
    let OpenBucket(open_bucket) = expect_context();

    let counts = Memo::new(move |_| {
        let form = form.get();
        selection.with(|set| bucket_counts(set, form))
    });
    let cities = Memo::new(move |_| selection.with(city_returns_summary));

    view! {
        <Show when=move || selection.with(|set| !set.is_empty())>
            <section class="selection-summary" style=PANEL_STYLE>
                <h3 style="margin-top: 0;">
                    {move || format!("Selected States ({})", selection.with(|set| set.len()))}
                </h3>
                <div class="buckets" style="display: flex; flex-wrap: wrap; gap: 16px;">
                    {Bucket::ALL
                        .into_iter()
                        .map(|bucket| {
                            view! {
                                <div
                                    class=format!("bucket {}", bucket.css_class())
                                    style="flex: 1; min-width: 180px; border: 1px solid #e5e7eb; border-radius: 6px; padding: 12px;"
                                >
                                    <div style="font-weight: 600;">{bucket.heading()}</div>
                                    <div style="font-size: 1.6rem; font-weight: 700; margin: 6px 0;">
                                        {move || counts.get().get(bucket)}
                                    </div>
                                    <button
                                        style=format!("{BUTTON_STYLE} background: #e5e7eb; color: #111827;")
                                        on:click=move |_| open_bucket.set(Some(bucket))
                                    >
                                        "View States"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                {move || {
                    let summary = cities.get();
                    (!summary.is_empty())
                        .then(|| {
                            view! {
                                <div class="city-returns-summary" style="margin-top: 16px; font-size: 0.9rem;">
                                    <h4 style="margin: 0 0 6px 0;">"City Returns"</h4>
                                    <div>
                                        {format!(
                                            "States where all cities must file: {}",
                                            summary.all_cities_states,
                                        )}
                                    </div>
                                    <div>
                                        {format!(
                                            "States with specific city returns: {}",
                                            summary.specific_states,
                                        )}
                                    </div>
                                    {(!summary.cities.is_empty())
                                        .then(|| {
                                            view! {
                                                <div style="color: #6b7280;">{summary.preview()}</div>
                                            }
                                        })}
                                </div>
                            }
                        })
                }}
            </section>
        </Show>
    }
}

/// Shown next to the pricing button whenever the active form bundles a state return.
fn included_returns_note(form: FormType) -> Option<&'static str> {
    (included_state_returns(form) > 0).then_some("First state return included.")
}

fn fee_rows(estimate: FeeEstimate, form: FormType) -> impl IntoView {
    view! {
        <div class="fee-breakdown" style="margin-top: 12px;">
            <div>{format!("Federal return ({}): ${}", form.id(), estimate.base_fee)}</div>
            <div>{format!("State returns ({}): ${}", estimate.state_count, estimate.state_fee)}</div>
            <div style="font-weight: 700; margin-top: 6px;">{format!("Total: ${}", estimate.total)}</div>
        </div>
    }
}

/// On-demand fee estimate for the current form and selection.
#[component]
pub fn PricingPanel() -> impl IntoView {
    let Selection(selection) = expect_context();
    let ActiveForm(form) = expect_context();
    let quote: RwSignal<Option<(FeeEstimate, FormType)>> = RwSignal::new(None);

    let calculate = move |_: web_sys::MouseEvent| {
        let form = form.get_untracked();
        let count = selection.with_untracked(|set| set.len());
        quote.set(Some((pricing::estimate(form, count), form)));
    };

    view! {
        <section class="pricing-section" style=PANEL_STYLE>
            <h3 style="margin-top: 0;">"Fee Estimate"</h3>
            <button
                style=format!("{BUTTON_STYLE} background: #2563eb; color: #ffffff;")
                on:click=calculate
            >
                "Calculate Pricing"
            </button>
            {move || {
                included_returns_note(form.get())
                    .map(|note| {
                        view! {
                            <div class="fee-note" style="color: #6b7280; font-size: 0.85rem; margin-top: 6px;">
                                {note}
                            </div>
                        }
                    })
            }}
            {move || quote.get().map(|(estimate, form)| fee_rows(estimate, form))}
        </section>
    }
}
