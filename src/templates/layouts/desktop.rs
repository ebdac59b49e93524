use crate::search::LISTINGS_PATH;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Property Finder" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="icon" type="image/svg+xml" href="/static/favicon/favicon.svg";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {};
            }
            body class="min-h-screen bg-gray-50" {
              header class="flex items-center justify-between px-6 py-3 shadow bg-white" {
                  a href="/" class="text-xl font-bold text-primary-600" { "Property Finder" }
                  nav {
                      ul class="flex space-x-8" {
                          li { a href="/" { "Home" } }
                          li { a href=(LISTINGS_PATH) { "Properties" } }
                      }
                  }
              }
              main class="container mx-auto px-4 py-8" {
                  (content)
              }
            }
        }
    }
}
