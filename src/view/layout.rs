use maud::{DOCTYPE, Markup, html};

use crate::SITE_NAME;

const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Inicio"),
    ("/career", "Carrera"),
    ("/news", "Noticias"),
    ("/stats", "Estadísticas"),
    ("/contact", "Contacto"),
];

pub fn page(title: &str, active: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="/static/styles.css";
                link rel="icon" href="/static/img/logo.svg";
            }
            body {
                (render_header(active))
                main { (content) }
                (render_footer())
            }
        }
    }
}

fn render_header(active: &str) -> Markup {
    html! {
        header class="site-header" {
            a class="brand" href="/" { (SITE_NAME) }
            nav {
                @for (href, label) in NAV_LINKS {
                    a href=(href) class=[(active == href).then_some("active")] { (label) }
                }
            }
        }
    }
}

fn render_footer() -> Markup {
    html! {
        footer class="site-footer" {
            p { (SITE_NAME) " · Ladies European Tour" }
        }
    }
}

pub fn error_banner(msg: &str) -> Markup {
    html! {
        div class="banner banner-error" { "Error: " (msg) }
    }
}

pub fn empty_notice(msg: &str) -> Markup {
    html! {
        div class="banner banner-empty" { (msg) }
    }
}
