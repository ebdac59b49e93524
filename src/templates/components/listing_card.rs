use crate::domain::{ImageGateway, ListingRecord};
use maud::{html, Markup};

pub fn listing_card(listing: &ListingRecord, gateway: &ImageGateway) -> Markup {
    html! {
        a href=(listing.detail_href())
          class="listing-card group relative overflow-hidden rounded-lg bg-white shadow transition hover:shadow-lg"
          data-listing-id=(listing.id)
        {
            div class="aspect-w-16 aspect-h-9 relative" {
                img src=(listing.cover_image(gateway)) alt=(listing.title) class="object-cover";
            }
            div class="p-4" {
                h3 class="text-lg font-semibold text-gray-900 group-hover:text-primary-600" {
                    (listing.title)
                }
                p class="location mt-1 text-sm text-gray-500" { (listing.location) }
                div class="mt-2 flex items-center justify-between" {
                    p class="price text-lg font-bold text-primary-600" {
                        (format!("{} {}", listing.price, listing.currency))
                    }
                    div class="summary flex items-center space-x-2 text-sm text-gray-500" {
                        span { (listing.bedrooms) " beds" }
                        span { "•" }
                        span { (listing.bathrooms) " baths" }
                        span { "•" }
                        span { (format!("{} m²", listing.area)) }
                    }
                }
                @if listing.is_listed {
                    div class="mt-2" {
                        span class="listed-badge inline-flex items-center rounded-full bg-green-100 px-2.5 py-0.5 text-xs font-medium text-green-800" {
                            "Listed for Sale"
                        }
                    }
                }
            }
        }
    }
}
