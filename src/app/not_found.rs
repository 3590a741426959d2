use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use super::ui::{button_class, ButtonSize, ButtonVariant};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page not found" />
        <section class="container mx-auto px-4 py-32 text-center">
            <h1 class="text-7xl font-bold gradient-text mb-4">"404"</h1>
            <p class="text-xl text-gray-600 dark:text-gray-400 mb-8">"Page not found."</p>
            <A href="/" attr:class=button_class(ButtonVariant::Primary, ButtonSize::Lg, "")>
                "Back home"
            </A>
        </section>
    }
}
