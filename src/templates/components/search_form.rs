use crate::domain::{FieldKind, FilterField, PropertyType};
use crate::search::SearchFormController;
use maud::{html, Markup};

pub const SEARCH_ACTION: &str = "/properties/search";

const INPUT_CLASS: &str =
    "mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-primary-500 focus:ring-primary-500";

/// The filter form. Field names are the canonical query keys, values are
/// whatever the controller currently holds.
pub fn search_form(form: &SearchFormController) -> Markup {
    html! {
        form method="post" action=(SEARCH_ACTION) class="search-form mb-8 rounded-lg bg-white p-6 shadow" {
            div class="grid gap-6 md:grid-cols-2 lg:grid-cols-4" {
                @for field in FilterField::ALL {
                    div {
                        label for=(field.key()) class="block text-sm font-medium text-gray-700" {
                            (field.label())
                        }
                        (field_input(field, form.field(field)))
                    }
                }
            }

            div class="mt-6 flex justify-end" {
                button type="submit" class="rounded-md bg-primary-600 px-4 py-2 text-sm font-semibold text-white shadow-sm hover:bg-primary-500" {
                    "Search Properties"
                }
            }
        }
    }
}

fn field_input(field: FilterField, value: &str) -> Markup {
    match field.kind() {
        FieldKind::Text => html! {
            input type="text" id=(field.key()) name=(field.key()) value=(value)
                class=(INPUT_CLASS) placeholder=(placeholder(field));
        },
        FieldKind::Amount => html! {
            input type="number" step="any" id=(field.key()) name=(field.key()) value=(value)
                class=(INPUT_CLASS) placeholder=(placeholder(field));
        },
        FieldKind::Choice => {
            let selected = PropertyType::parse(value).unwrap_or_default();
            html! {
                select id=(field.key()) name=(field.key()) class=(INPUT_CLASS) {
                    @for option in PropertyType::ALL {
                        option value=(option.as_str()) selected[option == selected] { (option.as_str()) }
                    }
                }
            }
        }
        FieldKind::Count => html! {
            select id=(field.key()) name=(field.key()) class=(INPUT_CLASS) {
                option value="" selected[value.is_empty()] { "Any" }
                @for n in 1..=5 {
                    option value=(n) selected[value == n.to_string()] { (n) "+" }
                }
                // keep a value from the address that the menu doesn't offer
                @if !value.is_empty() && !(1..=5).any(|n| value == n.to_string()) {
                    option value=(value) selected { (value) "+" }
                }
            }
        },
    }
}

fn placeholder(field: FilterField) -> &'static str {
    match field {
        FilterField::Query => "Search properties...",
        FilterField::Location => "Enter location",
        FilterField::MinPrice => "Min price",
        FilterField::MaxPrice => "Max price",
        FilterField::MinArea => "Min area",
        FilterField::MaxArea => "Max area",
        _ => "",
    }
}
