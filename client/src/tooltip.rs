use filing_shared::interaction::Interaction;
use filing_shared::registry;
use filing_shared::tooltip::{CityWarning, DisplayBlock, NoteLayout, compose};
use filing_shared::Size;
use leptos::portal::Portal;
use leptos::prelude::*;

use crate::viewport::viewport_size;

const NOTE_STYLE: &str = "font-size: 0.78rem; padding: 6px 8px; border-radius: 4px; line-height: 1.35;";

fn warning_view(warning: CityWarning) -> impl IntoView {
    let tone = match &warning {
        CityWarning::AllCities => "background: #fde8e8; color: #9b1c1c;",
        CityWarning::Specific(_) => "background: #fef3c7; color: #92400e;",
    };
    view! {
        <div class=warning.css_class() style=format!("{NOTE_STYLE} {tone} flex: 1;")>
            {warning.text()}
        </div>
    }
}

fn conditional_view(text: String) -> impl IntoView {
    view! {
        <div
            class="conditional-note"
            style=format!("{NOTE_STYLE} background: #fffbeb; color: #78350f; flex: 1;")
        >
            {text}
        </div>
    }
}

fn notes_view(block: &DisplayBlock) -> AnyView {
    let warning = block.city_warning.clone().map(warning_view);
    let conditional = block.conditional_text().map(conditional_view);
    let direction = match block.layout() {
        NoteLayout::None => return ().into_any(),
        NoteLayout::SideBySide => "row",
        NoteLayout::Stacked => "column",
    };
    view! {
        <div
            class="tooltip-notes"
            style=format!("display: flex; flex-direction: {direction}; gap: 6px; margin-bottom: 8px;")
        >
            {warning}
            {conditional}
        </div>
    }
    .into_any()
}

fn block_view(block: DisplayBlock) -> impl IntoView {
    let notes = notes_view(&block);
    let rows = block
        .rows
        .iter()
        .map(|row| {
            view! {
                <div
                    class="tooltip-row"
                    style="display: flex; justify-content: space-between; gap: 16px; font-size: 0.85rem; padding: 2px 0;"
                >
                    <span class="form-name" style="color: #374151;">{format!("{}:", row.label())}</span>
                    <span class=format!("status {}", row.status.css_class()) style="font-weight: 600;">
                        {row.status.label()}
                    </span>
                </div>
            }
        })
        .collect_view();
    view! {
        <div
            class="tooltip-header"
            style="font-weight: 700; font-size: 1rem; margin-bottom: 8px; color: #111827;"
        >
            {block.header}
        </div>
        {notes}
        <div class="tooltip-rows">{rows}</div>
    }
}

/// Floating status card for the hovered state, mounted outside the map.
#[component]
pub fn MapTooltip(interaction: RwSignal<Interaction>, block_size: StoredValue<Size>) -> impl IntoView {
    let tooltip_ref = NodeRef::<leptos::html::Div>::new();
    let active = Memo::new(move |_| interaction.with(|i| i.tooltip().map(|tip| tip.code)));
    let content = Memo::new(move |_| active.get().and_then(registry::lookup).map(compose));
    let position = move || {
        interaction
            .with(|i| i.tooltip().map(|tip| tip.position))
            .unwrap_or_default()
    };

    // Re-anchor once the card for a newly hovered state has been laid out.
    Effect::new(move || {
        if active.get().is_none() {
            return;
        }
        let Some(el) = tooltip_ref.get() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let measured = Size::new(rect.width(), rect.height());
        if measured.width > 0.0 && measured != block_size.get_value() {
            block_size.set_value(measured);
            interaction.update(|i| i.reposition(measured, viewport_size()));
        }
    });

    view! {
        <Portal>
            {move || {
                content
                    .get()
                    .map(|block| {
                        view! {
                            <div
                                node_ref=tooltip_ref
                                class="state-tooltip"
                                style:left=move || format!("{}px", position().x)
                                style:top=move || format!("{}px", position().y)
                                style="position: fixed; pointer-events: none; z-index: 1000; background: #ffffff; border: 1px solid #d1d5db; border-radius: 8px; box-shadow: 0 6px 20px rgba(0,0,0,0.15); padding: 12px 14px; max-width: 450px; min-width: 260px;"
                            >
                                {block_view(block)}
                            </div>
                        }
                    })
            }}
        </Portal>
    }
}
