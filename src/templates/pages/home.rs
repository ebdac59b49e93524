// templates/pages/home.rs

use crate::search::LISTINGS_PATH;
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        html! {
            div class="mx-auto max-w-2xl py-32 text-center" {
                h1 class="text-4xl font-bold tracking-tight text-gray-900 sm:text-6xl" {
                    "Find Your Dream Property"
                }
                p class="mt-6 text-lg leading-8 text-gray-600" {
                    "Browse listed properties and narrow them down by price, size and location."
                }
                div class="mt-10 flex items-center justify-center gap-x-6" {
                    a href=(LISTINGS_PATH) class="rounded-md bg-primary-600 px-3.5 py-2.5 text-sm font-semibold text-white shadow-sm" {
                        "Browse Properties"
                    }
                }
            }

            (card("Search that sticks", html! {
                p { "Every search is part of the address, so you can bookmark it, share it or go back to it." }
            }))
        },
    )
}
