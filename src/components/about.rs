//! About section: bio paragraphs and counting stats.

use leptos::prelude::*;

use crate::app::PageSignal;
use crate::components::reveal::{class_for, reveal_attr, style_for, use_reveal};
use crate::components::section_header::SectionHeader;
use crate::config::Stat;
use crate::state::nav::Section;
use crate::state::reveal::ElementKind;

#[component]
pub fn About() -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let (about, stats) = page.with_untracked(|p| (p.config.about.clone(), p.config.stats.clone()));
    let text = use_reveal(ElementKind::AboutText, None);

    view! {
        <section id=Section::About.id() class="about">
            <div class="container">
                <SectionHeader title="About Me" subtitle="A little about who I am and what I do"/>
                <div class="about-content">
                    <div class=class_for(page, text, "about-text") style=style_for(page, text) data-reveal-id=reveal_attr(text)>
                        {about.into_iter().map(|paragraph| view! { <p>{paragraph}</p> }).collect_view()}
                    </div>
                    <div class="about-stats">
                        {stats.into_iter().map(|stat| view! { <StatItem stat=stat/> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// One stat; a numeric value counts up once revealed.
#[component]
fn StatItem(stat: Stat) -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let id = use_reveal(ElementKind::Stat, Some(stat.value.as_str()));
    let fallback = stat.value.clone();
    let label = move || {
        page.with(|p| id.and_then(|id| p.reveal.element(id)).and_then(|e| e.label()).map(str::to_owned))
            .unwrap_or_else(|| fallback.clone())
    };

    view! {
        <div class=class_for(page, id, "stat-item") style=style_for(page, id) data-reveal-id=reveal_attr(id)>
            <h4>{label}</h4>
            <p>{stat.label}</p>
        </div>
    }
}
