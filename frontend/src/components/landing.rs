use super::utils::NavLink;
use shared::{AppRoute, Species};
use yew::prelude::*;

const STEPS: [(&str, &str, &str); 4] = [
    ("fa-solid fa-paw", "Select Animal", "Choose from Dog, Cat, Chicken, or Cow"),
    ("fa-solid fa-upload", "Upload Image", "Take or upload a photo of the affected area"),
    ("fa-solid fa-brain", "AI Detects Disease", "Our ML model analyzes the image instantly"),
    ("fa-solid fa-clipboard-list", "Get Treatment Info", "Receive causes, precautions & medication"),
];

const ADVANTAGES: [(&str, &str, &str); 4] = [
    ("fa-solid fa-shield-heart", "Early Disease Detection", "Catch diseases before they spread and become severe"),
    ("fa-solid fa-dollar-sign", "Reduces Veterinary Cost", "Save money with early, accurate AI-based diagnosis"),
    ("fa-solid fa-microchip", "AI-Powered Accuracy", "Advanced machine learning models trained on thousands of cases"),
    ("fa-solid fa-face-smile", "Easy to Use", "Designed for farmers, vets, and pet owners of all ages"),
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub signed_in: bool,
    pub on_navigate: Callback<AppRoute>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    html! {
        <main class="landing">
            { render_hero(&props.on_navigate, props.signed_in) }
            { render_steps() }
            { render_advantages() }
            { render_supported_animals() }
        </main>
    }
}

fn render_hero(on_navigate: &Callback<AppRoute>, signed_in: bool) -> Html {
    let (primary_label, primary_route) = if signed_in {
        ("Go to Detection ", AppRoute::Detection)
    } else {
        ("Get Started ", AppRoute::SignUp)
    };
    let try_route = if signed_in { AppRoute::Detection } else { AppRoute::SignIn };

    html! {
        <section class="hero">
            <div class="hero-background">
                <img src="/assets/hero-bg.jpg" alt="" />
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-content">
                <span class="hero-badge"><i class="fa-solid fa-bolt"></i>{" AI-Powered Detection"}</span>
                <h1>{"Livestock & Pet Disease Detection"}</h1>
                <p>
                    {"Detect diseases early using AI image analysis. Upload a photo of your animal \
                      and get instant diagnosis with treatment recommendations."}
                </p>
                <div class="hero-actions">
                    <NavLink to={primary_route} on_navigate={on_navigate.clone()} class={classes!("btn", "btn-light")}>
                        { primary_label }<i class="fa-solid fa-arrow-right"></i>
                    </NavLink>
                    <NavLink to={try_route} on_navigate={on_navigate.clone()} class={classes!("btn", "btn-outline-light")}>
                        {"Try Detection"}
                    </NavLink>
                </div>
            </div>
        </section>
    }
}

fn render_steps() -> Html {
    html! {
        <section class="how-it-works">
            <div class="section-heading">
                <h2>{"How It Works"}</h2>
                <p>{"Four simple steps to detect disease"}</p>
            </div>
            <div class="card-grid">
                { for STEPS.iter().enumerate().map(|(i, (icon, title, desc))| html! {
                    <div class="step-card" key={*title}>
                        <div class="step-icon"><i class={*icon}></i></div>
                        <span class="step-number">{ (i + 1).to_string() }</span>
                        <h3>{ *title }</h3>
                        <p>{ *desc }</p>
                    </div>
                })}
            </div>
        </section>
    }
}

fn render_advantages() -> Html {
    html! {
        <section class="advantages">
            <div class="section-heading">
                <h2>{"Why Choose Us"}</h2>
                <p>{"Built for real-world animal healthcare"}</p>
            </div>
            <div class="card-grid">
                { for ADVANTAGES.iter().map(|(icon, title, desc)| html! {
                    <div class="advantage-card" key={*title}>
                        <div class="advantage-icon"><i class={*icon}></i></div>
                        <h3>{ *title }</h3>
                        <p>{ *desc }</p>
                    </div>
                })}
            </div>
        </section>
    }
}

fn render_supported_animals() -> Html {
    html! {
        <section class="supported-animals">
            <div class="section-heading">
                <h2>{"Supported Animals"}</h2>
                <p>{ format!("Currently supporting {} animal categories", Species::all().len()) }</p>
            </div>
            <div class="card-grid">
                { for Species::all().into_iter().map(|species| html! {
                    <div class="animal-card" key={species.key()}>
                        <div class="animal-image">
                            <img src={species.image_asset()} alt={species.display_name()} loading="lazy" />
                        </div>
                        <h3>{ species.display_name() }</h3>
                    </div>
                })}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<AppRoute>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="app-footer">
            <div class="footer-grid">
                <div>
                    <p class="brand"><i class="fa-solid fa-stethoscope"></i>{" VetAI Detect"}</p>
                    <p class="footer-text">
                        {"AI-powered livestock and pet disease detection platform. Helping farmers, \
                          veterinarians, and pet owners detect diseases early using advanced machine learning."}
                    </p>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        <li><NavLink to={AppRoute::Home} on_navigate={props.on_navigate.clone()}>{"Home"}</NavLink></li>
                        <li><NavLink to={AppRoute::Detection} on_navigate={props.on_navigate.clone()}>{"Disease Detection"}</NavLink></li>
                        <li><NavLink to={AppRoute::Profile} on_navigate={props.on_navigate.clone()}>{"My Profile"}</NavLink></li>
                        <li><NavLink to={AppRoute::SignUp} on_navigate={props.on_navigate.clone()}>{"Get Started"}</NavLink></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <ul>
                        <li><i class="fa-solid fa-envelope"></i>{" support@vetai-detect.com"}</li>
                        <li><i class="fa-solid fa-phone"></i>{" +1 (555) 123-4567"}</li>
                        <li><i class="fa-solid fa-location-dot"></i>{" San Francisco, CA"}</li>
                    </ul>
                </div>
            </div>
            <p class="footer-copyright">{"© 2026 VetAI Detect. All rights reserved."}</p>
        </footer>
    }
}
