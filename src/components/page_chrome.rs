//! Loading screen and scroll progress bar.

#[cfg(test)]
#[path = "page_chrome_test.rs"]
mod page_chrome_test;

use leptos::prelude::*;

use crate::app::{AppPage, PageSignal};
use crate::state::page::LoadPhase;

pub fn loader_style(phase: LoadPhase) -> &'static str {
    match phase {
        LoadPhase::Loading => "opacity: 1",
        LoadPhase::Fading => "opacity: 0",
        LoadPhase::Done => "opacity: 0; display: none",
    }
}

pub fn progress_style(pct: f64) -> String {
    format!("width: {pct:.2}%")
}

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let page = expect_context::<PageSignal>();

    view! {
        <div id="loading-screen" class="loading-screen" style=move || loader_style(page.with(AppPage::load_phase))>
            <div class="loader"></div>
        </div>
    }
}

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let page = expect_context::<PageSignal>();

    view! {
        <div id="scroll-progress" class="scroll-progress" style=move || progress_style(page.with(|p| p.nav.progress_pct))></div>
    }
}
