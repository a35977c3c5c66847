//! Root application component and page-wide listeners.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    about::About, contact::Contact, hero::Hero, navbar::Navbar, page_chrome::LoadingScreen,
    page_chrome::ScrollProgress, projects::Projects, skills::Skills, toast_stack::ToastStack,
};
use crate::config::SiteConfig;
use crate::state::page::{LoadPhase, PageState};
use crate::util::host::BrowserStorage;
use crate::util::{color_scheme, driver, observer, viewport};

/// Page state as held by the running app.
pub type AppPage = PageState<BrowserStorage>;

/// Context handle every component reads and writes page state through.
pub type PageSignal = RwSignal<AppPage>;

/// Body class set once the loading screen is gone.
const LOADED_CLASS: &str = "loaded";

/// Root application component.
///
/// Builds page state from the embedded config, provides it as context, and
/// wires window-level listeners (keys, scroll, load, color scheme).
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::load();
    let title = format!("{} | Portfolio", config.owner);
    let state = PageState::new(config, BrowserStorage, color_scheme::system_theme(), driver::now_ms());
    // Applied before first paint; the effect below keeps it in sync.
    color_scheme::apply(state.theme());
    let page: PageSignal = RwSignal::new(state);
    provide_context(page);

    let theme = Memo::new(move |_| page.with(AppPage::theme));
    let theme_fx = Memo::new(move |_| page.with(AppPage::theme_effects));
    let load_phase = Memo::new(move |_| page.with(AppPage::load_phase));

    Effect::new(move || color_scheme::apply(theme.get()));
    Effect::new(move || color_scheme::apply_effects(theme_fx.get()));
    Effect::new(move || viewport::toggle_body_class(LOADED_CLASS, load_phase.get() == LoadPhase::Done));

    // Runs once, after the first render.
    Effect::new(move || {
        page.update_untracked(AppPage::mount);
        observer::observe_reveals(page);
        if viewport::document_loaded() {
            driver::apply(page, AppPage::window_loaded);
        } else {
            driver::pump(page);
        }
    });

    let watching = color_scheme::watch(move |theme| {
        driver::apply(page, |p| p.system_theme_changed(theme));
    });
    if !watching {
        log::debug!("system color scheme changes are not reported");
    }

    #[cfg(feature = "csr")]
    {
        use crate::state::nav::{KeyAction, KeyInput};

        let _keydown = window_event_listener(leptos::ev::keydown, move |ev| {
            let key = ev.key();
            let input = KeyInput {
                key: &key,
                ctrl: ev.ctrl_key(),
                meta: ev.meta_key(),
                shift: ev.shift_key(),
                in_text_field: viewport::is_text_field(ev.target()),
            };
            match driver::apply(page, |p| p.handle_key(&input)).flatten() {
                Some(KeyAction::ScrollTo(section)) => driver::scroll_to_section(page, section),
                Some(KeyAction::ToggleTheme) => ev.prevent_default(),
                Some(KeyAction::CloseMenu) | None => {}
            }
        });

        let _scroll = window_event_listener(leptos::ev::scroll, move |_| {
            let Some(metrics) = viewport::scroll_metrics() else {
                return;
            };
            let sections = viewport::section_bounds();
            page.try_update(|p| p.scrolled(&metrics, &sections));
        });

        let _load = window_event_listener(leptos::ev::load, move |_| {
            driver::apply(page, AppPage::window_loaded);
        });
    }

    view! {
        <Title text=title/>
        <LoadingScreen/>
        <ScrollProgress/>
        <Navbar/>
        <main>
            <Hero/>
            <About/>
            <Skills/>
            <Projects/>
            <Contact/>
        </main>
        <ToastStack/>
    }
}
