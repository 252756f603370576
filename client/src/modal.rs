use filing_shared::summary::bucket_members;
use leptos::prelude::*;

use crate::app::{ActiveForm, OpenBucket, Selection};

/// Lists the selected states of one summary bucket.
#[component]
pub fn StatesModal() -> impl IntoView {
    let Selection(selection) = expect_context();
    let ActiveForm(form) = expect_context();
    let OpenBucket(open_bucket) = expect_context();

    move || {
        open_bucket.get().map(|bucket| {
            let form = form.get();
            let members = selection.with(|set| bucket_members(set, form, bucket));
            let body = if members.is_empty() {
                view! { <p class="empty-bucket" style="color: #6b7280;">"No states in this category"</p> }
                    .into_any()
            } else {
                view! {
                    <ul class="states-list" style="list-style: none; padding: 0; margin: 0;">
                        {members
                            .into_iter()
                            .map(|region| {
                                let code = region.code;
                                view! {
                                    <li style="display: flex; justify-content: space-between; align-items: center; padding: 6px 0; border-bottom: 1px solid #f3f4f6;">
                                        <span>{format!("{} ({})", region.name, region.code)}</span>
                                        <button
                                            class="remove-state"
                                            style="padding: 4px 10px; border: none; border-radius: 4px; background: #fee2e2; color: #991b1b; cursor: pointer;"
                                            on:click=move |_| {
                                                selection.update(|set| {
                                                    set.remove(code);
                                                });
                                                open_bucket.set(None);
                                            }
                                        >
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            };
            view! {
                <div
                    class="modal"
                    style="position: fixed; inset: 0; z-index: 900; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center;"
                    on:click=move |_| open_bucket.set(None)
                >
                    <div
                        class="modal-content"
                        style="background: #ffffff; border-radius: 8px; padding: 20px; min-width: 320px; max-width: 520px; max-height: 70vh; overflow-y: auto;"
                        on:click=|e| e.stop_propagation()
                    >
                        <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;">
                            <h3 style="margin: 0;">{bucket.modal_title()}</h3>
                            <span
                                class="close"
                                style="cursor: pointer; font-size: 1.4rem; line-height: 1;"
                                on:click=move |_| open_bucket.set(None)
                            >
                                "\u{00D7}"
                            </span>
                        </div>
                        {body}
                    </div>
                </div>
            }
        })
    }
}
