use super::utils::NavLink;
use crate::api;
use shared::{AppConfig, AppRoute, LoginRequest, Notice, SessionIdentity};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SignInProps {
    pub config: AppConfig,
    pub on_signed_in: Callback<SessionIdentity>,
    pub on_navigate: Callback<AppRoute>,
    pub on_notify: Callback<Notice>,
}

#[function_component(SignIn)]
pub fn sign_in(props: &SignInProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        let url = props.config.login_url();
        let on_signed_in = props.on_signed_in.clone();
        let on_navigate = props.on_navigate.clone();
        let on_notify = props.on_notify.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }

            let credentials = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let url = url.clone();
            let loading = loading.clone();
            let on_signed_in = on_signed_in.clone();
            let on_navigate = on_navigate.clone();
            let on_notify = on_notify.clone();

            loading.set(true);
            spawn_local(async move {
                log::info!("Signing in {}", credentials.email);
                match api::login(url, credentials).await {
                    Ok(identity) => {
                        log::info!("Signed in as {}", identity.email);
                        on_signed_in.emit(identity);
                        on_notify.emit(Notice::info("Signed In", "Welcome back!"));
                        on_navigate.emit(AppRoute::Home);
                    }
                    Err(e) => {
                        log::warn!("Sign in failed: {}", e);
                        on_notify.emit(e.notice());
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-heading">
                    <NavLink to={AppRoute::Home} on_navigate={props.on_navigate.clone()} class={classes!("brand")}>
                        <i class="fa-solid fa-stethoscope"></i>{" Live Stock Detection"}
                    </NavLink>
                    <h1>{"Welcome Back"}</h1>
                    <p class="subtitle">{"Sign in to your account"}</p>
                </div>

                <form class="auth-form" onsubmit={on_submit}>
                    <label for="email">{"Email"}</label>
                    <div class="input-with-icon">
                        <i class="fa-solid fa-envelope"></i>
                        <input
                            id="email"
                            type="email"
                            placeholder="you@example.com"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email}
                        />
                    </div>

                    <label for="password">{"Password"}</label>
                    <div class="input-with-icon">
                        <i class="fa-solid fa-lock"></i>
                        <input
                            id="password"
                            type="password"
                            placeholder="••••••••"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password}
                        />
                    </div>

                    <button type="submit" class="analyze-btn full-width" disabled={*loading}>
                        if *loading {
                            <i class="fa-solid fa-spinner fa-spin"></i>
                        }
                        {" Sign In"}
                    </button>

                    <p class="auth-switch">
                        {"Don't have an account? "}
                        <NavLink to={AppRoute::SignUp} on_navigate={props.on_navigate.clone()}>{"Sign Up"}</NavLink>
                    </p>
                </form>
            </div>
        </div>
    }
}
