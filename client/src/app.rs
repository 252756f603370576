use filing_shared::summary::Bucket;
use filing_shared::{FormType, SelectionSet};
use leptos::prelude::*;

use crate::map_view::MapView;
use crate::modal::StatesModal;
use crate::panels::{ActionButtons, FilingTypeSelector, PricingPanel, SelectionSummary, StateInput};

#[derive(Clone, Copy)]
pub(crate) struct Selection(pub RwSignal<SelectionSet>);
#[derive(Clone, Copy)]
pub(crate) struct ActiveForm(pub RwSignal<FormType>);
/// Bucket whose states modal is open, if any.
#[derive(Clone, Copy)]
pub(crate) struct OpenBucket(pub RwSignal<Option<Bucket>>);

#[component]
pub fn App() -> impl IntoView {
    let selection: RwSignal<SelectionSet> = RwSignal::new(SelectionSet::new());
    let form: RwSignal<FormType> = RwSignal::new(FormType::default());
    let open_bucket: RwSignal<Option<Bucket>> = RwSignal::new(None);

    provide_context(Selection(selection));
    provide_context(ActiveForm(form));
    provide_context(OpenBucket(open_bucket));

    let on_toggle = move |code: &'static str| {
        selection.update(|set| {
            if let Err(e) = set.toggle(code) {
                web_sys::console::warn_1(&format!("{e}").into());
            }
        });
    };

    view! {
        <div
            class="container"
            style="max-width: 1200px; margin: 0 auto; padding: 20px; font-family: 'Inter', system-ui, sans-serif; color: #1f2937;"
        >
            <h1 style="text-align: center; margin-bottom: 20px;">"State Filing Requirements Tool"</h1>
            <section
                class="form-section"
                style="background: #ffffff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 20px; margin-bottom: 20px;"
            >
                <h3 style="margin-top: 0;">"Tax Filing Configuration"</h3>
                <p style="color: #6b7280; font-size: 0.9rem;">
                    "Choose a return type, then add states by name or abbreviation or by clicking the map."
                </p>
                <div class="side-by-side-container" style="display: flex; flex-wrap: wrap; gap: 24px;">
                    <FilingTypeSelector />
                    <StateInput />
                </div>
                <ActionButtons />
            </section>
            <section
                class="map-container"
                style="background: #ffffff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 20px; margin-bottom: 20px;"
            >
                <h3 style="margin-top: 0;">"State Filing Requirements Map"</h3>
                <MapView selection=selection form=form on_toggle=Callback::new(on_toggle) />
            </section>
            <SelectionSummary />
            <PricingPanel />
            <StatesModal />
        </div>
    }
}
