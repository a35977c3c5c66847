//! Revealed section title and subtitle.

use leptos::prelude::*;

use crate::app::PageSignal;
use crate::components::reveal::{class_for, reveal_attr, style_for, use_reveal};
use crate::state::reveal::ElementKind;

#[component]
pub fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let title_id = use_reveal(ElementKind::SectionTitle, None);
    let subtitle_id = use_reveal(ElementKind::SectionSubtitle, None);

    view! {
        <h2
            class=class_for(page, title_id, "section-title")
            style=style_for(page, title_id)
            data-reveal-id=reveal_attr(title_id)
        >
            {title}
        </h2>
        <p
            class=class_for(page, subtitle_id, "section-subtitle")
            style=style_for(page, subtitle_id)
            data-reveal-id=reveal_attr(subtitle_id)
        >
            {subtitle}
        </p>
    }
}
