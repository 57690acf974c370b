//! Contact section: details as plain text and the social profile links.

use leptos::prelude::*;

use super::icons::{Glyph, ICON_EXTERNAL_LINK, ICON_MAIL, ICON_MAP_PIN, ICON_PHONE, social_glyph};
use super::SectionHeading;
use crate::motion::RevealFrom;
use crate::motion::reveal::{reveal_class, reveal_delay};
use crate::types::{ContactInfo, SocialLink};

/// `#contact`: pitch, contact rows and social links side by side.
#[component]
pub fn ContactSection(contact: ContactInfo, socials: Vec<SocialLink>) -> impl IntoView {
    let ContactInfo {
        email,
        phone,
        location,
    } = contact;

    view! {
        <section id="contact" class="contact">
            <div class="container contact-inner">
                <SectionHeading reveal_key="contact-title" title="Fale Comigo" />
                <div class="contact-grid">
                    <div class=reveal_class(RevealFrom::Left, "contact-details") data-reveal="contact-details">
                        <h3>"Vamos trabalhar juntos!"</h3>
                        <p class="contact-pitch">
                            "Estou sempre aberto a novos desafios e oportunidades. "
                            "Entre em contato para discutirmos seu próximo projeto."
                        </p>
                        <ul class="contact-list">
                            <ContactRow icon=ICON_MAIL text=email />
                            <ContactRow icon=ICON_PHONE text=phone />
                            <ContactRow icon=ICON_MAP_PIN text=location />
                        </ul>
                    </div>
                    <div class=reveal_class(RevealFrom::Right, "contact-socials") data-reveal="contact-socials">
                        <h3>"Redes Sociais"</h3>
                        <SocialLinks links=socials />
                    </div>
                </div>
            </div>
        </section>
    }
}

// Plain text on purpose: the address is shown, not linked.
#[component]
fn ContactRow(icon: &'static str, text: String) -> impl IntoView {
    view! {
        <li class="contact-row">
            <Glyph markup=icon class="contact-icon" />
            <span>{text}</span>
        </li>
    }
}

/// Outbound profile links, opened in a new tab.
#[component]
pub fn SocialLinks(links: Vec<SocialLink>) -> impl IntoView {
    view! {
        <div class="social-links">
            {links
                .into_iter()
                .enumerate()
                .map(|(index, link)| {
                    view! {
                        <a
                            href=link.url
                            target="_blank"
                            rel="noopener noreferrer"
                            class=reveal_class(RevealFrom::Below, "social-link")
                            style=reveal_delay(index as f64 * 0.1)
                            data-reveal=format!("social-{index}")
                        >
                            <Glyph markup=social_glyph(link.icon) class="contact-icon" />
                            <span>{link.label}</span>
                            <Glyph markup=ICON_EXTERNAL_LINK size="16" class="social-arrow" />
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
