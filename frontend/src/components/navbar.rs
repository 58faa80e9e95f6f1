use super::utils::NavLink;
use shared::{AppRoute, SessionIdentity};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current: AppRoute,
    pub session: Option<SessionIdentity>,
    pub on_navigate: Callback<AppRoute>,
    pub on_sign_out: Callback<()>,
}

const LINKS: [(&str, AppRoute); 3] = [
    ("Home", AppRoute::Home),
    ("Detection", AppRoute::Detection),
    ("Profile", AppRoute::Profile),
];

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let open = use_state(|| false);

    // Any navigation from the mobile menu also closes it.
    let navigate = {
        let open = open.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |route: AppRoute| {
            open.set(false);
            on_navigate.emit(route);
        })
    };

    let toggle = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };

    let sign_out = {
        let open = open.clone();
        let on_sign_out = props.on_sign_out.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(false);
            on_sign_out.emit(());
        })
    };

    let links = LINKS
        .iter()
        .map(|(label, route)| {
            let active = props.current == *route;
            html! {
                <NavLink
                    to={route.clone()}
                    on_navigate={navigate.clone()}
                    class={classes!("nav-link", active.then_some("active"))}
                >
                    { *label }
                </NavLink>
            }
        })
        .collect::<Html>();

    let account = match &props.session {
        Some(user) => html! {
            <div class="nav-account">
                <span class="user-name">
                    <i class="fa-solid fa-user"></i>{ format!(" {}", user.display_name()) }
                </span>
                <button class="logout-button" onclick={sign_out} title="Sign Out">
                    <i class="fa-solid fa-sign-out-alt"></i>{" Sign Out"}
                </button>
            </div>
        },
        None => html! {
            <div class="nav-account">
                <NavLink to={AppRoute::SignIn} on_navigate={navigate.clone()} class={classes!("btn", "btn-ghost")}>
                    {"Sign In"}
                </NavLink>
                <NavLink to={AppRoute::SignUp} on_navigate={navigate.clone()} class={classes!("btn", "btn-primary")}>
                    {"Sign Up"}
                </NavLink>
            </div>
        },
    };

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <NavLink to={AppRoute::Home} on_navigate={navigate.clone()} class={classes!("brand")}>
                    <i class="fa-solid fa-stethoscope"></i>{" VetAI Detect"}
                </NavLink>

                <div class="nav-desktop">
                    { links.clone() }
                    { account.clone() }
                </div>

                <button class="nav-toggle" onclick={toggle} title="Menu">
                    if *open {
                        <i class="fa-solid fa-xmark"></i>
                    } else {
                        <i class="fa-solid fa-bars"></i>
                    }
                </button>
            </div>

            if *open {
                <div class="nav-mobile">
                    { links }
                    { account }
                </div>
            }
        </nav>
    }
}
