use leptos::{ev, prelude::*};
use leptos_router::{components::*, hooks::use_location};

use crate::nav::{NavLink, NavState, NAV_LINKS};
use crate::portfolio::PERSONAL_INFO;
use crate::theme::class_list;

use super::theme::ThemeToggle;

#[component]
pub fn Navigation() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let pathname = use_location().pathname;

    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        let mut next = nav.get_untracked();
        next.on_scroll(offset);
        if next != nav.get_untracked() {
            nav.set(next);
        }
    });
    on_cleanup(move || scroll_handle.remove());

    Effect::watch(
        move || pathname.get(),
        move |path, _, _| {
            log::debug!("navigated to {path}");
            nav.update(NavState::on_route_change);
        },
        false,
    );

    let bar_class = move || {
        let scrolled = nav.with(|s| s.scrolled);
        class_list([
            "fixed inset-x-0 top-0 z-50 transition-all duration-300",
            if scrolled {
                "glass shadow-lg py-3"
            } else {
                "bg-transparent py-5"
            },
        ])
    };

    view! {
        <header class=bar_class>
            <nav class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between">
                    <A href="/" attr:class="text-2xl font-bold gradient-text">
                        {PERSONAL_INFO.name}
                    </A>

                    <div class="hidden md:flex items-center gap-1">
                        {NAV_LINKS
                            .into_iter()
                            .map(|link| view! { <DesktopLink link pathname /> })
                            .collect_view()}
                        <ThemeToggle />
                    </div>

                    <div class="flex md:hidden items-center gap-2">
                        <ThemeToggle />
                        <button
                            type="button"
                            class="p-2 w-10 h-10 rounded-lg text-xl text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-800"
                            aria-label="Toggle menu"
                            aria-expanded=move || nav.with(|s| s.menu_open).to_string()
                            on:click=move |_| nav.update(NavState::toggle_menu)
                        >
                            {move || if nav.with(|s| s.menu_open) { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !nav.with(|s| s.menu_open)
                    class:max-h-96=move || nav.with(|s| s.menu_open)
                >
                    <div class="glass-strong mt-4 rounded-xl p-2 flex flex-col">
                        {NAV_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <MobileLink
                                        link
                                        pathname
                                        on_select=Callback::new(move |_| nav.update(NavState::close_menu))
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </nav>
        </header>
    }
}

fn link_class(active: bool, base: &'static str) -> String {
    class_list([
        base,
        if active {
            "text-indigo-600 dark:text-indigo-400 bg-indigo-50 dark:bg-indigo-950/50"
        } else {
            "text-gray-700 dark:text-gray-300 hover:text-indigo-600 dark:hover:text-indigo-400"
        },
    ])
}

#[component]
fn DesktopLink(link: NavLink, pathname: Memo<String>) -> impl IntoView {
    view! {
        <A
            href=link.href
            attr:class=move || link_class(
                pathname.with(|p| link.is_active(p)),
                "px-4 py-2 rounded-lg text-sm font-medium transition-colors",
            )
        >
            {link.name}
        </A>
    }
}

#[component]
fn MobileLink(link: NavLink, pathname: Memo<String>, on_select: Callback<()>) -> impl IntoView {
    view! {
        <A
            href=link.href
            attr:class=move || link_class(
                pathname.with(|p| link.is_active(p)),
                "block px-4 py-3 rounded-lg font-medium transition-colors",
            )
            on:click=move |_| on_select.run(())
        >
            {link.name}
        </A>
    }
}
