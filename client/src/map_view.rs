use filing_shared::asset::MapAsset;
use filing_shared::interaction::{Emphasis, Interaction};
use filing_shared::label::{LabelSet, place_labels};
use filing_shared::paint::{
    CONDITIONAL_FILL, MapPaint, NOT_REQUIRED_FILL, REQUIRED_FILL, RegionPaint, paint,
};
use filing_shared::{BBox, FormType, MapError, Point, SelectionSet, Size};
use js_sys::{Function, Reflect};
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};

use crate::asset_loader::{AssetState, load_map_asset};
use crate::config::{LABEL_FONT_SIZE_PX, TOOLTIP_ESTIMATED_SIZE};
use crate::tooltip::MapTooltip;
use crate::viewport::viewport_size;

fn warn(err: &MapError) {
    web_sys::console::warn_1(&format!("{err}").into());
}

fn pointer_of(ev: &web_sys::MouseEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// `getBBox()` of an SVG graphics element, in user units.
fn read_bbox(el: &web_sys::Element) -> Option<BBox> {
    let get_bbox = Reflect::get(el, &JsValue::from_str("getBBox"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    let rect = get_bbox.call0(el).ok()?;
    let field = |key: &str| {
        Reflect::get(&rect, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_f64())
    };
    Some(BBox::new(
        field("x")?,
        field("y")?,
        field("width")?,
        field("height")?,
    ))
}

fn measure_shapes(container: &web_sys::HtmlDivElement) -> Vec<(String, BBox)> {
    let Ok(nodes) = container.query_selector_all("path[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .filter_map(|el| read_bbox(&el).map(|bbox| (el.id(), bbox)))
        .collect()
}

fn shape_style(paint: RegionPaint, emphasis: Option<Emphasis>) -> String {
    let mut style = format!(
        "fill: {}; stroke: #ffffff; stroke-width: 1; cursor: pointer; \
         transition: fill 0.3s, transform 0.2s, filter 0.2s; \
         transform-box: fill-box; transform-origin: center;",
        paint.fill
    );
    if let Some(emphasis) = emphasis {
        style.push_str(" transform: scale(1.03); filter: drop-shadow(0 2px 4px rgba(0,0,0,0.2));");
        if emphasis.stroke {
            style.push_str(" stroke: #333; stroke-width: 2;");
        }
    }
    style
}

/// Interactive map of the states, coloured by the active selection and form.
#[component]
pub fn MapView(
    #[prop(into)] selection: Signal<SelectionSet>,
    #[prop(into)] form: Signal<FormType>,
    #[prop(into)] on_toggle: Callback<&'static str>,
) -> impl IntoView {
    let asset: RwSignal<AssetState> = RwSignal::new(AssetState::Loading);
    let labels: RwSignal<Option<LabelSet>> = RwSignal::new(None);
    let interaction: RwSignal<Interaction> = RwSignal::new(Interaction::default());
    let block_size: StoredValue<Size> = StoredValue::new(TOOLTIP_ESTIMATED_SIZE);
    let container_ref = NodeRef::<leptos::html::Div>::new();

    load_map_asset(asset);

    let shape_codes = Memo::new(move |_| {
        asset.with(|state| match state {
            AssetState::Ready(map) => map.codes().map(str::to_string).collect::<Vec<_>>(),
            _ => Vec::new(),
        })
    });

    let painted = Memo::new(move |_| {
        let form = form.get();
        shape_codes.with(|codes| {
            selection.with(|set| paint(codes.iter().map(String::as_str), set, form))
        })
    });

    Effect::new(move || {
        painted.with(|p| p.skipped.iter().for_each(warn));
    });

    // Labels are placed once per mount, after the shapes are in the DOM.
    Effect::new(move || {
        let ready = asset.with(|state| matches!(state, AssetState::Ready(_)));
        if !ready || labels.with_untracked(Option::is_some) {
            return;
        }
        let Some(container) = container_ref.get() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        let cb = wasm_bindgen::closure::Closure::once(move || {
            let measured = measure_shapes(&container);
            let set = place_labels(measured.iter().map(|(code, bbox)| (code.as_str(), *bbox)));
            set.skipped.iter().for_each(warn);
            web_sys::console::info_1(&format!("placed {} state labels", set.len()).into());
            labels.set(Some(set));
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 0);
        cb.forget();
    });

    view! {
        <div
            node_ref=container_ref
            class="map-view"
            style="position: relative; width: 100%;"
        >
            <Legend />
            {move || {
                asset.with(|state| match state {
                    AssetState::Loading => view! {
                        <div class="map-status" style="padding: 40px; text-align: center; color: #6b7280;">
                            "Loading map..."
                        </div>
                    }
                    .into_any(),
                    AssetState::Failed(err) => view! {
                        <div class="map-status map-error" title=err.to_string() style="padding: 40px; text-align: center; color: #b91c1c;">
                            "The map could not be loaded. You can still select states with the form above."
                        </div>
                    }
                    .into_any(),
                    AssetState::Ready(map) => {
                        render_map(map, painted, labels, interaction, block_size, on_toggle)
                    }
                })
            }}
            <MapTooltip interaction=interaction block_size=block_size />
        </div>
    }
}

fn render_map(
    map: &MapAsset,
    painted: Memo<MapPaint>,
    labels: RwSignal<Option<LabelSet>>,
    interaction: RwSignal<Interaction>,
    block_size: StoredValue<Size>,
    on_toggle: Callback<&'static str>,
) -> AnyView {
    let shapes = map
        .shapes
        .iter()
        .map(|shape| {
            let code = shape.code.clone();
            let style = {
                let code = code.clone();
                move || {
                    shape_style(
                        painted.with(|p| p.get(&code)),
                        interaction.with(|i| i.emphasis(&code)),
                    )
                }
            };
            let class = {
                let code = code.clone();
                move || match painted.with(|p| p.get(&code).status.css_class()) {
                    Some(status) => format!("state {status}"),
                    None => "state".to_string(),
                }
            };
            let on_enter = {
                let code = code.clone();
                move |ev: web_sys::MouseEvent| {
                    let pointer = pointer_of(&ev);
                    let block = block_size.get_value();
                    let mut outcome = Ok(());
                    interaction.update(|i| {
                        outcome = i.pointer_enter(&code, pointer, block, viewport_size())
                    });
                    if let Err(e) = outcome {
                        warn(&e);
                    }
                }
            };
            let on_move = {
                let code = code.clone();
                move |ev: web_sys::MouseEvent| {
                    let pointer = pointer_of(&ev);
                    let block = block_size.get_value();
                    interaction.update(|i| i.pointer_move(&code, pointer, block, viewport_size()));
                }
            };
            let on_leave = {
                let code = code.clone();
                move |_: web_sys::MouseEvent| interaction.update(|i| i.pointer_leave(&code))
            };
            let on_click = {
                let code = code.clone();
                move |_: web_sys::MouseEvent| {
                    let mut outcome = Err(MapError::InvalidRegion(code.clone()));
                    interaction.update(|i| outcome = i.click(&code));
                    match outcome {
                        Ok(code) => on_toggle.run(code),
                        Err(e) => warn(&e),
                    }
                }
            };
            view! {
                <path
                    id=code
                    d=shape.d.clone()
                    transform=shape.transform.clone()
                    class=class
                    style=style
                    on:mouseenter=on_enter
                    on:mousemove=on_move
                    on:mouseleave=on_leave
                    on:click=on_click
                />
            }
        })
        .collect_view();

    let texts = map
        .shapes
        .iter()
        .map(|shape| {
            let code = shape.code.clone();
            move || {
                let at = labels.with(|set| set.as_ref().and_then(|set| set.get(&code)))?;
                let color = painted.with(|p| p.get(&code).label_color);
                Some(view! {
                    <text
                        x=at.x.to_string()
                        y=at.y.to_string()
                        text-anchor="middle"
                        dominant-baseline="middle"
                        style=format!(
                            "fill: {color}; font-size: {LABEL_FONT_SIZE_PX}px; font-weight: 600; \
                             pointer-events: none; user-select: none; transition: fill 0.3s;"
                        )
                    >
                        {code.clone()}
                    </text>
                })
            }
        })
        .collect_view();

    view! {
        <svg
            class="us-map"
            viewBox=map.view_box.clone()
            style="width: 100%; height: auto; display: block;"
        >
            <g class="states">{shapes}</g>
            <g class="state-labels">{texts}</g>
        </svg>
    }
    .into_any()
}

#[component]
fn Legend() -> impl IntoView {
    let entries: [(&'static str, &'static str); 4] = [
        ("Filing Required", REQUIRED_FILL),
        ("No Filing Required", NOT_REQUIRED_FILL),
        ("Conditional Filing", CONDITIONAL_FILL),
        ("Not Selected", "#ffffff"),
    ];
    view! {
        <div
            class="legend"
            style="position: absolute; top: 10px; right: 10px; z-index: 5; background: rgba(255,255,255,0.95); border: 1px solid #e5e7eb; border-radius: 6px; padding: 8px 10px; font-size: 0.8rem;"
        >
            {entries
                .into_iter()
                .map(|(label, fill)| {
                    view! {
                        <div class="legend-item" style="display: flex; align-items: center; gap: 6px; margin: 2px 0;">
                            <span style=format!(
                                "display: inline-block; width: 14px; height: 14px; border-radius: 3px; border: 1px solid #9ca3af; background: {fill};"
                            ) />
                            <span>{label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
