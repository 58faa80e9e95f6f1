use shared::Notice;
use yew::prelude::*;

pub const TOAST_DURATION_MS: u32 = 4000;

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster" role="status" aria-live="polite">
            { for props.toasts.iter().map(|toast| {
                let id = toast.id;
                let on_dismiss = props.on_dismiss.clone();
                html! {
                    <div
                        key={id.to_string()}
                        class={classes!("toast", toast.notice.is_destructive().then_some("toast-destructive"))}
                    >
                        <div class="toast-body">
                            <p class="toast-title">{ &toast.notice.title }</p>
                            <p class="toast-description">{ &toast.notice.description }</p>
                        </div>
                        <button
                            class="toast-close"
                            title="Dismiss"
                            onclick={Callback::from(move |_| on_dismiss.emit(id))}
                        >
                            <i class="fa-solid fa-xmark"></i>
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
