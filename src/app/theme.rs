use leptos::prelude::*;

use crate::theme::Theme;

/// Read access to the current theme plus the one way to change it.
///
/// Only [`super::App`] holds the write half; everything below reads snapshots.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    pub toggle: Callback<()>,
}

impl ThemeContext {
    pub fn new(theme: ReadSignal<Theme>, set_theme: WriteSignal<Theme>) -> Self {
        let toggle = Callback::new(move |_| {
            set_theme.update(|t| *t = t.toggled());
            log::debug!("theme switched to {}", theme.get_untracked());
        });
        Self { theme, toggle }
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ThemeContext { theme, toggle } = use_theme();

    view! {
        <button
            type="button"
            class="p-2 w-10 h-10 rounded-lg text-lg text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
            aria-label=move || format!("Switch to {} theme", theme.get().toggled())
            aria-pressed=move || theme.get().is_dark().to_string()
            on:click=move |_| toggle.run(())
        >
            {move || theme.get().toggle_icon()}
        </button>
    }
}
