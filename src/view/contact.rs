use maud::{Markup, html};

use crate::SITE_NAME;
use crate::view::layout;

const CONTACT_EMAIL: &str = "contacto@anezubiri.example";

pub fn render_contact_page() -> Markup {
    layout::page(
        &format!("Contacto · {SITE_NAME}"),
        "/contact",
        html! {
            section class="contact" {
                h2 { "Contacto" }
                p {
                    "Para prensa, patrocinios y otras consultas, escribe a "
                    a href={ "mailto:" (CONTACT_EMAIL) } { (CONTACT_EMAIL) }
                    "."
                }
                form class="contact-form" method="post" action={ "mailto:" (CONTACT_EMAIL) } {
                    label for="name" { "Nombre" }
                    input type="text" id="name" name="name" required;
                    label for="email" { "Email" }
                    input type="email" id="email" name="email" required;
                    label for="message" { "Mensaje" }
                    textarea id="message" name="message" rows="6" required {}
                    button type="submit" { "Enviar" }
                }
            }
        },
    )
}
