use shared::DetectionResult;
use shared::presenter::{ResultSection, sections};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AccordionCardProps {
    pub section: ResultSection,
    pub items: Vec<String>,
}

/// One collapsible section. Open/closed state belongs to this card alone.
#[function_component(AccordionCard)]
pub fn accordion_card(props: &AccordionCardProps) -> Html {
    let section = props.section;
    let open = use_state(move || section.default_open());

    let toggle = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };

    html! {
        <div class={classes!("accordion-card", (*open).then_some("open"))}>
            <button class="accordion-header" onclick={toggle}>
                <div class="accordion-title">
                    <div class="accordion-icon"><i class={section.icon()}></i></div>
                    <h4>{ section.title() }</h4>
                </div>
                <i class="fa-solid fa-chevron-down accordion-chevron"></i>
            </button>
            <div class="accordion-body">
                <ul>
                    { for props.items.iter().map(|item| html! {
                        <li><span class="bullet"></span><span>{ item }</span></li>
                    })}
                </ul>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultViewProps {
    pub result: DetectionResult,
    pub image: Option<String>,
}

#[function_component(ResultView)]
pub fn result_view(props: &ResultViewProps) -> Html {
    let result = &props.result;

    html! {
        <div class="results-container">
            if let Some(src) = props.image.clone() {
                <div class="analyzed-image">
                    <img {src} alt="Analyzed" />
                </div>
            }

            <div class="result-header">
                <div class="result-badge"><i class="fa-solid fa-circle-exclamation"></i></div>
                <div>
                    <p class="result-kicker">{"Detected Disease"}</p>
                    <h2>{ &result.disease_name }</h2>
                </div>
            </div>

            <div class="result-sections">
                { for sections(result).into_iter().map(|(section, items)| html! {
                    <AccordionCard key={section.title()} {section} items={items.to_vec()} />
                })}
            </div>
        </div>
    }
}

/// Static (non-collapsible) rendering used in the history modal.
pub fn render_detail_sections(result: &DetectionResult) -> Html {
    html! {
        <div class="detail-sections">
            { for sections(result).into_iter().map(|(section, items)| html! {
                <div class="detail-section">
                    <h4>{ section.short_title() }</h4>
                    <ul>
                        { for items.iter().map(|item| html! {
                            <li><span class="bullet"></span>{ item }</li>
                        })}
                    </ul>
                </div>
            })}
        </div>
    }
}
