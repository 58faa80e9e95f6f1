use shared::picker::{RING_SIZE, ring_slots};
use shared::{AppRoute, Species};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpeciesPickerProps {
    pub on_navigate: Callback<AppRoute>,
}

/// Circular animal selector. Every segment and label leads to the upload page.
#[function_component(SpeciesPicker)]
pub fn species_picker(props: &SpeciesPickerProps) -> Html {
    let select = {
        let on_navigate = props.on_navigate.clone();
        move |species: Species| {
            let on_navigate = on_navigate.clone();
            Callback::from(move |_: MouseEvent| {
                log::info!("Species selected: {}", species);
                on_navigate.emit(AppRoute::DetectionUpload(species.key().to_string()));
            })
        }
    };

    let size = format!("width: {0}px; height: {0}px;", RING_SIZE);
    let view_box = format!("0 0 {0} {0}", RING_SIZE);

    html! {
        <main class="detection-page">
            <div class="section-heading">
                <h1>{"Disease Detection"}</h1>
                <p>{"Select an animal to begin diagnosis"}</p>
            </div>

            <div class="species-ring" style={size}>
                <svg viewBox={view_box} class="species-ring-svg">
                    { for ring_slots().iter().map(|slot| html! {
                        <path
                            key={slot.species.key()}
                            d={slot.segment_path()}
                            class="ring-segment"
                            stroke-width="2"
                            onclick={select(slot.species)}
                        />
                    })}
                </svg>

                { for ring_slots().iter().map(|slot| {
                    let (x, y) = slot.label_position();
                    html! {
                        <button
                            key={slot.species.key()}
                            class="ring-label"
                            style={format!("left: {:.1}px; top: {:.1}px;", x, y)}
                            onclick={select(slot.species)}
                        >
                            <img src={slot.species.image_asset()} alt={slot.species.display_name()} />
                            <span>{ slot.species.display_name() }</span>
                        </button>
                    }
                })}

                <div class="ring-center">
                    <img src="/assets/livestock-detection-center.jpg" alt="Livestock Detection" />
                </div>
            </div>

            <p class="hint">{"Click on an animal to upload an image and detect diseases"}</p>
        </main>
    }
}
