mod api;
mod components;
mod session;

use components::detection_upload::DetectionUpload;
use components::landing::{Footer, Landing};
use components::navbar::Navbar;
use components::profile::Profile;
use components::sign_in::SignIn;
use components::sign_up::SignUp;
use components::species_picker::SpeciesPicker;
use components::toast::{TOAST_DURATION_MS, Toast, Toaster};
use components::utils::{NavLink, current_route, generate_id, push_route, replace_route, scroll_to_top};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use session::SessionContext;
use shared::{AppConfig, AppRoute, Notice, SessionIdentity};
use yew::prelude::*;

// Yew msg components
enum Msg {
    // Navigation
    Navigate(AppRoute),
    RouteChanged,

    // Session lifecycle
    SignedIn(SessionIdentity),
    SignOut,

    // Notifications
    Notify(Notice),
    DismissToast(u64),
}

// Main component
struct App {
    route: AppRoute,
    session: SessionContext,
    config: AppConfig,
    toasts: Vec<Toast>,
    popstate_listener: Option<EventListener>,
}

fn load_config() -> AppConfig {
    AppConfig::from_values(
        option_env!("VETAI_DETECTION_URL"),
        option_env!("VETAI_AUTH_URL"),
        option_env!("VETAI_DETECTION_MODE"),
    )
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = load_config();
        log::info!(
            "Detection service: {} ({}), auth service: {}",
            config.detection_url,
            config.mode,
            config.auth_url
        );

        let session = SessionContext::load();
        let requested = current_route();
        let route = requested.clone().guard(session.is_signed_in());
        if route != requested {
            replace_route(&route);
        }

        let popstate_listener = web_sys::window().map(|window| {
            let link = ctx.link().clone();
            EventListener::new(&window, "popstate", move |_| {
                link.send_message(Msg::RouteChanged);
            })
        });

        Self {
            route,
            session,
            config,
            toasts: Vec::new(),
            popstate_listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Navigation
            Msg::Navigate(route) => self.handle_navigate(route),
            Msg::RouteChanged => self.handle_route_changed(),

            // Session lifecycle
            Msg::SignedIn(identity) => {
                self.session.sign_in(identity);
                true
            }
            Msg::SignOut => {
                log::info!("Signing out");
                self.session.sign_out();
                self.handle_navigate(AppRoute::Home)
            }

            // Notifications
            Msg::Notify(notice) => self.handle_notify(ctx, notice),
            Msg::DismissToast(id) => {
                let before = self.toasts.len();
                self.toasts.retain(|toast| toast.id != id);
                self.toasts.len() != before
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_navigate = link.callback(Msg::Navigate);
        let on_notify = link.callback(Msg::Notify);

        let page = match &self.route {
            AppRoute::SignIn => {
                return self.with_toaster(ctx, html! {
                    <SignIn
                        config={self.config.clone()}
                        on_signed_in={link.callback(Msg::SignedIn)}
                        on_navigate={on_navigate}
                        on_notify={on_notify}
                    />
                });
            }
            AppRoute::SignUp => {
                return self.with_toaster(ctx, html! {
                    <SignUp on_navigate={on_navigate} on_notify={on_notify} />
                });
            }
            AppRoute::Home => html! {
                <Landing signed_in={self.session.is_signed_in()} on_navigate={on_navigate.clone()} />
            },
            AppRoute::Detection => html! {
                <>
                    <SpeciesPicker on_navigate={on_navigate.clone()} />
                    <Footer on_navigate={on_navigate.clone()} />
                </>
            },
            AppRoute::DetectionUpload(animal) => html! {
                <DetectionUpload
                    species_key={animal.clone()}
                    session={self.session.identity().cloned()}
                    config={self.config.clone()}
                    on_navigate={on_navigate.clone()}
                    on_notify={on_notify}
                />
            },
            AppRoute::Profile => match self.session.identity() {
                Some(identity) => html! {
                    <>
                        <Profile identity={identity.clone()} config={self.config.clone()} />
                        <Footer on_navigate={on_navigate.clone()} />
                    </>
                },
                None => self.render_not_found(&on_navigate),
            },
            AppRoute::NotFound => self.render_not_found(&on_navigate),
        };

        self.with_toaster(ctx, html! {
            <>
                <Navbar
                    current={self.route.clone()}
                    session={self.session.identity().cloned()}
                    on_navigate={on_navigate}
                    on_sign_out={link.callback(|_| Msg::SignOut)}
                />
                { page }
            </>
        })
    }
}

// Handler methods
impl App {
    fn handle_navigate(&mut self, requested: AppRoute) -> bool {
        let route = requested.clone().guard(self.session.is_signed_in());
        if route != requested {
            log::info!("{} requires a session, redirecting to {}", requested.to_path(), route.to_path());
        }

        push_route(&route);
        scroll_to_top();
        self.route = route;
        true
    }

    fn handle_route_changed(&mut self) -> bool {
        let requested = current_route();
        let route = requested.clone().guard(self.session.is_signed_in());
        if route != requested {
            replace_route(&route);
        }
        if route == self.route {
            return false;
        }
        self.route = route;
        true
    }

    fn handle_notify(&mut self, ctx: &Context<Self>, notice: Notice) -> bool {
        let id = generate_id();
        self.toasts.push(Toast { id, notice });

        let link = ctx.link().clone();
        Timeout::new(TOAST_DURATION_MS, move || {
            link.send_message(Msg::DismissToast(id));
        })
        .forget();
        true
    }
}

// Rendering methods
impl App {
    fn with_toaster(&self, ctx: &Context<Self>, content: Html) -> Html {
        html! {
            <div class="app">
                { content }
                <Toaster
                    toasts={self.toasts.clone()}
                    on_dismiss={ctx.link().callback(Msg::DismissToast)}
                />
            </div>
        }
    }

    fn render_not_found(&self, on_navigate: &Callback<AppRoute>) -> Html {
        html! {
            <main class="not-found">
                <h1>{"404"}</h1>
                <p>{"Oops! Page not found"}</p>
                <NavLink to={AppRoute::Home} on_navigate={on_navigate.clone()}>{"Return to Home"}</NavLink>
            </main>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<App>::new().render();
}
