//! Contact section: details, copy-email button and the mailto form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form is a controlled view of `PageState::contact`. Submission hands a
//! pre-filled compose request to the visitor's mail client; nothing is sent
//! from the page itself.

use leptos::prelude::*;

use crate::app::PageSignal;
use crate::components::reveal::{class_for, reveal_attr, style_for, use_reveal};
use crate::components::section_header::SectionHeader;
use crate::state::contact::ContactField;
use crate::state::nav::Section;
use crate::state::reveal::ElementKind;
use crate::util::driver;
use crate::util::host::BrowserMailer;

#[component]
pub fn Contact() -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let (email, location, github) = page.with_untracked(|p| {
        (p.config.contact_email.clone(), p.config.location.clone(), p.config.github_url.clone())
    });

    let on_copy = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(email) = page.try_with_untracked(|p| p.config.contact_email.clone()) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let outcome = crate::util::clipboard::copy_text(&email).await;
                driver::apply(page, |p| p.copy_finished(outcome));
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        driver::apply(page, |p| {
            if p.submit_contact(&BrowserMailer).is_ok() {
                log::info!("contact request handed to the mail client");
            }
        });
    };

    view! {
        <section id=Section::Contact.id() class="contact">
            <div class="container">
                <SectionHeader title="Get In Touch" subtitle="Have a project in mind? Let's talk."/>
                <div class="contact-content">
                    <div class="contact-info">
                        <ContactItem icon="fas fa-envelope" label="Email">
                            <span class="contact-email">{email}</span>
                            <button class="copy-email" title="Copy email" on:click=on_copy>
                                <i class="fas fa-copy"></i>
                            </button>
                        </ContactItem>
                        {location.map(|location| view! {
                            <ContactItem icon="fas fa-map-marker-alt" label="Location">
                                <span>{location}</span>
                            </ContactItem>
                        })}
                        {github.map(|url| {
                            let href = url.clone();
                            view! {
                                <ContactItem icon="fab fa-github" label="GitHub">
                                    <a href=href target="_blank" rel="noopener noreferrer">{url}</a>
                                </ContactItem>
                            }
                        })}
                    </div>
                    <form id="contact-form" class="contact-form" on:submit=on_submit>
                        {ContactField::ALL.into_iter().map(|field| view! { <FormField field=field/> }).collect_view()}
                        <button type="submit" class="btn btn-primary">
                            <i class="fas fa-paper-plane"></i>
                            " Send Message"
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactItem(icon: &'static str, label: &'static str, children: Children) -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let id = use_reveal(ElementKind::ContactItem, None);

    view! {
        <div class=class_for(page, id, "contact-item") style=style_for(page, id) data-reveal-id=reveal_attr(id)>
            <i class=icon></i>
            <div>
                <h4>{label}</h4>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn FormField(field: ContactField) -> impl IntoView {
    let page = expect_context::<PageSignal>();
    let value = move || page.with(|p| p.contact.field(field).to_owned());
    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        page.update(|p| p.contact.set_field(field, text));
    };

    match field {
        ContactField::Message => view! {
            <div class="form-group">
                <textarea name=field.name() placeholder=field.placeholder() rows="5" prop:value=value on:input=on_input></textarea>
            </div>
        }
        .into_any(),
        ContactField::Email => view! {
            <div class="form-group">
                <input type="email" name=field.name() placeholder=field.placeholder() prop:value=value on:input=on_input/>
            </div>
        }
        .into_any(),
        ContactField::Name | ContactField::Subject => view! {
            <div class="form-group">
                <input type="text" name=field.name() placeholder=field.placeholder() prop:value=value on:input=on_input/>
            </div>
        }
        .into_any(),
    }
}
