use leptos::prelude::*;

#[component]
pub fn Modal(title: String, children: Children) -> impl IntoView {
    view! {
        <div class="modal-backdrop">
            <div class="modal card" role="dialog">
                <div class="card-title">{title}</div>
                {children()}
            </div>
        </div>
    }
}

/// Asks before a destructive action.
#[component]
pub fn ConfirmDialog<C, X>(
    title: String,
    message: String,
    confirm_label: String,
    on_confirm: C,
    on_cancel: X,
) -> impl IntoView
where
    C: Fn() + Send + 'static,
    X: Fn() + Send + 'static,
{
    view! {
        <Modal title=title>
            <p class="modal-message">{message}</p>
            <div class="modal-actions">
                <button class="btn btn-ghost" on:click=move |_| on_cancel()>
                    "Cancel"
                </button>
                <button class="btn btn-danger" on:click=move |_| on_confirm()>
                    {confirm_label}
                </button>
            </div>
        </Modal>
    }
}
