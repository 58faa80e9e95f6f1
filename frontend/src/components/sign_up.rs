use super::utils::NavLink;
use gloo_timers::callback::Timeout;
use shared::{AppRoute, Notice};
use yew::prelude::*;

const SIMULATED_SIGNUP_MS: u32 = 1500;

#[derive(Properties, PartialEq)]
pub struct SignUpProps {
    pub on_navigate: Callback<AppRoute>,
    pub on_notify: Callback<Notice>,
}

// There is no registration endpoint yet; submission only simulates latency.
#[function_component(SignUp)]
pub fn sign_up(props: &SignUpProps) -> Html {
    let loading = use_state(|| false);
    let pending = use_mut_ref(|| None::<Timeout>);

    let on_submit = {
        let loading = loading.clone();
        let pending = pending.clone();
        let on_notify = props.on_notify.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            loading.set(true);

            let loading = loading.clone();
            let on_notify = on_notify.clone();
            let timeout = Timeout::new(SIMULATED_SIGNUP_MS, move || {
                loading.set(false);
                on_notify.emit(Notice::info("Account Created", "Welcome to VetAI Detect!"));
            });
            *pending.borrow_mut() = Some(timeout);
        })
    };

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-heading">
                    <NavLink to={AppRoute::Home} on_navigate={props.on_navigate.clone()} class={classes!("brand")}>
                        <i class="fa-solid fa-stethoscope"></i>{" VetAI Detect"}
                    </NavLink>
                    <h1>{"Create Account"}</h1>
                    <p class="subtitle">{"Start detecting diseases today"}</p>
                </div>

                <form class="auth-form" onsubmit={on_submit}>
                    <label for="name">{"Full Name"}</label>
                    <div class="input-with-icon">
                        <i class="fa-solid fa-user"></i>
                        <input id="name" type="text" placeholder="John Doe" required=true />
                    </div>

                    <label for="email">{"Email"}</label>
                    <div class="input-with-icon">
                        <i class="fa-solid fa-envelope"></i>
                        <input id="email" type="email" placeholder="you@example.com" required=true />
                    </div>

                    <label for="password">{"Password"}</label>
                    <div class="input-with-icon">
                        <i class="fa-solid fa-lock"></i>
                        <input id="password" type="password" placeholder="••••••••" required=true />
                    </div>

                    <button type="submit" class="analyze-btn full-width" disabled={*loading}>
                        if *loading {
                            <i class="fa-solid fa-spinner fa-spin"></i>
                        }
                        {" Create Account"}
                    </button>

                    <p class="auth-switch">
                        {"Already have an account? "}
                        <NavLink to={AppRoute::SignIn} on_navigate={props.on_navigate.clone()}>{"Sign In"}</NavLink>
                    </p>
                </form>
            </div>
        </div>
    }
}
