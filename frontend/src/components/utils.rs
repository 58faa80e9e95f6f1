use js_sys::Date;
use shared::{AppRoute, HistoryStamp};
use std::sync::atomic::{AtomicU64, Ordering};
use wasm_bindgen::JsValue;
use yew::prelude::*;

pub fn generate_id() -> u64 {
    static ID_COUNTER: AtomicU64 = AtomicU64::new(0);
    let now = Date::now() as u64;
    let count = ID_COUNTER.fetch_add(1, Ordering::SeqCst);
    now * 1000 + (count % 1000)
}

/// Millisecond timestamp id plus the browser's locale date string.
pub fn history_stamp() -> HistoryStamp {
    let now = Date::new_0();
    HistoryStamp {
        id: (now.get_time() as u64).to_string(),
        date: String::from(now.to_locale_string("default", &JsValue::UNDEFINED)),
    }
}

pub fn current_route() -> AppRoute {
    let path = web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    AppRoute::from_path(&path)
}

pub fn push_route(route: &AppRoute) {
    if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&route.to_path())) {
            log::warn!("pushState failed: {:?}", e);
        }
    }
}

pub fn replace_route(route: &AppRoute) {
    if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&route.to_path())) {
            log::warn!("replaceState failed: {:?}", e);
        }
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Link that navigates through the app instead of reloading the page.
#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub to: AppRoute,
    pub on_navigate: Callback<AppRoute>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = {
        let to = props.to.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(to.clone());
        })
    };

    html! {
        <a href={props.to.to_path()} class={props.class.clone()} {onclick}>
            { props.children.clone() }
        </a>
    }
}
