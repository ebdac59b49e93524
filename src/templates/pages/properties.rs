// templates/pages/properties.rs

use crate::domain::ImageGateway;
use crate::fetch::FetchState;
use crate::search::{QueryString, SearchFormController, LISTINGS_PATH};
use crate::templates::{desktop_layout, listing_card, search_form};
use maud::{html, Markup};

pub const RESULTS_PATH: &str = "/properties/results";

pub const LOADING_MESSAGE: &str = "Loading properties...";
pub const EMPTY_MESSAGE: &str = "No properties found matching your criteria.";

pub fn properties_page(
    form: &SearchFormController,
    query: &QueryString,
    state: &FetchState,
    gateway: &ImageGateway,
) -> Markup {
    desktop_layout(
        "Properties",
        html! {
            div class="mb-8" {
                h1 class="text-3xl font-bold text-gray-900" { "Properties" }
                p class="mt-2 text-gray-600" {
                    "Browse through our collection of properties or use the search to find your perfect match."
                }
            }

            (search_form(form))

            @if !form.filter_state().is_unconstrained() {
                p class="clear-filters mb-4 text-sm" {
                    a href=(LISTINGS_PATH) { "Clear all filters" }
                }
            }

            (listing_view(query, state, gateway))
        },
    )
}

/// The result area for one FetchState. Only a settled success shows a list.
///
/// While loading, the container asks htmx to re-fetch itself from the
/// results fragment for the same query.
pub fn listing_view(query: &QueryString, state: &FetchState, gateway: &ImageGateway) -> Markup {
    html! {
        @match state {
            FetchState::Idle => {
                div id="listing-view" {}
            }
            FetchState::Loading => {
                div id="listing-view"
                    class="loading text-center"
                    hx-get=(query.append_to(RESULTS_PATH))
                    hx-trigger="load delay:1s"
                    hx-swap="outerHTML"
                {
                    (LOADING_MESSAGE)
                }
            }
            FetchState::Failure(err) => {
                div id="listing-view" class="fetch-error text-center text-red-600" role="alert" {
                    (err.user_message())
                }
            }
            FetchState::Success(listings) => {
                @if listings.is_empty() {
                    div id="listing-view" class="no-results text-center text-gray-600" {
                        (EMPTY_MESSAGE)
                    }
                } @else {
                    div id="listing-view" class="listing-grid grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3" {
                        @for listing in listings {
                            (listing_card(listing, gateway))
                        }
                    }
                }
            }
        }
    }
}
