//! Fixed top-right stack of transient notifications.

#[cfg(test)]
#[path = "toast_stack_test.rs"]
mod toast_stack_test;

use leptos::prelude::*;

use crate::app::PageSignal;
use crate::state::toast::{Severity, Toast, ToastPhase};

/// Inline style for a toast: severity color, slid out unless shown.
pub fn toast_style(severity: Severity, phase: Option<ToastPhase>) -> String {
    let offset = if phase == Some(ToastPhase::Shown) { "0" } else { "100%" };
    format!("background: {}; transform: translateX({offset})", severity.background())
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let page = expect_context::<PageSignal>();

    view! {
        <div class="notification-stack" aria-live="polite">
            <For
                each=move || page.with(|p| p.toasts.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let Toast { id, message, severity, .. } = toast;
                    let style = move || toast_style(severity, page.with(|p| p.toasts.phase(id)));
                    view! {
                        <div class=format!("notification {}", severity.class_name()) style=style>
                            <div class="notification-content">
                                <i class=severity.icon_class()></i>
                                <span>{message}</span>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
