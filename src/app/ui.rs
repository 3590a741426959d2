//! Presentational building blocks shared by every page. They render from props only.

use std::sync::{Arc, Mutex};

use leptos::{ev, leptos_dom::helpers::WindowListenerHandle, prelude::*};

use crate::overlay::Hold;
use crate::theme::class_list;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "gradient-bg text-white shadow-md hover:shadow-lg hover:opacity-90",
            Self::Secondary => {
                "bg-gray-100 text-gray-900 hover:bg-gray-200 dark:bg-gray-800 dark:text-gray-100 dark:hover:bg-gray-700"
            }
            Self::Outline => {
                "border border-gray-300 text-gray-900 hover:bg-gray-50 dark:border-gray-600 dark:text-gray-100 dark:hover:bg-gray-800"
            }
            Self::Ghost => "text-gray-700 hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-800",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            Self::Sm => "px-3 py-1.5 text-sm",
            Self::Md => "px-4 py-2 text-base",
            Self::Lg => "px-6 py-3 text-lg",
        }
    }
}

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 rounded-lg font-medium transition-all duration-200 focus:outline-none focus-visible:ring-2 focus-visible:ring-indigo-500 disabled:opacity-50 disabled:cursor-not-allowed";

/// Classes for anything styled as a button, including plain anchors.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    class_list([BUTTON_BASE, variant.class(), size.class(), extra])
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(into, default = false.into())] loading: Signal<bool>,
    #[prop(optional)] submit: bool,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=button_class(variant, size, class)
            disabled=move || loading.get()
            aria-busy=move || loading.get().to_string()
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            <Show when=move || loading.get()>
                <span class="w-4 h-4 rounded-full border-2 border-current border-t-transparent animate-spin"></span>
            </Show>
            {children()}
        </button>
    }
}

#[component]
pub fn Card(
    #[prop(optional)] class: &'static str,
    /// Lift the card on hover.
    #[prop(optional)]
    hover: bool,
    #[prop(optional_no_strip)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let hover_class = if hover {
        "hover:-translate-y-1 hover:shadow-xl"
    } else {
        ""
    };
    let click_class = if on_click.is_some() { "cursor-pointer" } else { "" };
    view! {
        <div
            class=class_list([
                "glass rounded-xl shadow-md transition-all duration-300",
                hover_class,
                click_class,
                class,
            ])
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <div class=class_list(["p-6 pb-2", class])>{children()}</div> }
}

#[component]
pub fn CardTitle(children: Children) -> impl IntoView {
    view! { <h3 class="text-xl font-semibold text-gray-900 dark:text-white">{children()}</h3> }
}

#[component]
pub fn CardDescription(children: Children) -> impl IntoView {
    view! { <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">{children()}</p> }
}

#[component]
pub fn CardContent(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <div class=class_list(["p-6 pt-2", class])>{children()}</div> }
}

#[component]
pub fn CardFooter(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <div class=class_list(["flex items-center gap-2 p-6 pt-0", class])>{children()}</div> }
}

const FIELD_BASE: &str = "w-full rounded-lg border px-4 py-2 bg-white/70 dark:bg-gray-900/70 text-gray-900 dark:text-gray-100 placeholder-gray-400 focus:outline-none focus:ring-2 transition-colors disabled:opacity-60";

fn field_class(has_error: bool) -> String {
    class_list([
        FIELD_BASE,
        if has_error {
            "border-red-500 focus:ring-red-500"
        } else {
            "border-gray-300 dark:border-gray-700 focus:ring-indigo-500"
        },
    ])
}

#[component]
fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|e| view! { <p class="text-sm text-red-500" role="alert">{e}</p> })
    }
}

#[component]
pub fn Input(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into, default = false.into())] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=id class="block text-sm font-medium text-gray-700 dark:text-gray-300">
                {label}
            </label>
            <input
                id=id
                name=id
                type=kind
                placeholder=placeholder
                class=move || field_class(error.get().is_some())
                prop:value=move || value.get()
                disabled=move || disabled.get()
                aria-invalid=move || error.get().is_some().to_string()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error />
        </div>
    }
}

#[component]
pub fn Textarea(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 5)] rows: u32,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into, default = false.into())] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=id class="block text-sm font-medium text-gray-700 dark:text-gray-300">
                {label}
            </label>
            <textarea
                id=id
                name=id
                rows=rows
                placeholder=placeholder
                class=move || class_list([field_class(error.get().is_some()).as_str(), "resize-y"])
                prop:value=move || value.get()
                disabled=move || disabled.get()
                aria-invalid=move || error.get().is_some().to_string()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
            <FieldError error />
        </div>
    }
}

fn lock_body_scroll(locked: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let overflow = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", overflow) {
        log::warn!("could not set body overflow: {e:?}");
    }
}

/// Escape listener of an open modal; holding it also means the body scroll is locked.
type Held = Arc<Mutex<Hold<WindowListenerHandle>>>;

fn let_go(handle: Option<WindowListenerHandle>) {
    if let Some(handle) = handle {
        handle.remove();
        lock_body_scroll(false);
    }
}

/// Dialog over a dimmed backdrop.
///
/// While `open` is true the page behind it cannot scroll and Escape calls `on_close`. Both
/// are released as soon as it closes or the modal unmounts.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(optional)] label: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let held = Held::default();

    Effect::new({
        let held = held.clone();
        move |_| {
            let open = open.get();
            let released = held.lock().ok().and_then(|mut hold| {
                hold.sync(open, || {
                    lock_body_scroll(true);
                    window_event_listener(ev::keydown, move |ev| {
                        if ev.key() == "Escape" {
                            on_close.run(());
                        }
                    })
                })
            });
            let_go(released);
        }
    });

    on_cleanup(move || let_go(held.lock().ok().and_then(|mut hold| hold.release())));

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center p-4"
                role="dialog"
                aria-modal="true"
                aria-label=label
            >
                <div
                    class="absolute inset-0 bg-black/60 backdrop-blur-sm modal-backdrop"
                    on:click=move |_| on_close.run(())
                ></div>
                <div class="relative w-full max-w-3xl max-h-[90vh] overflow-y-auto rounded-2xl glass-strong shadow-2xl modal-panel">
                    <button
                        type="button"
                        class="absolute top-4 right-4 p-2 rounded-lg text-gray-500 hover:text-gray-900 hover:bg-gray-100 dark:hover:text-white dark:hover:bg-gray-800"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn ModalHeader(children: Children) -> impl IntoView {
    view! {
        <div class="px-6 pt-6 pb-4 pr-14 border-b border-gray-200 dark:border-gray-700">
            {children()}
        </div>
    }
}

#[component]
pub fn ModalContent(children: Children) -> impl IntoView {
    view! { <div class="px-6 py-4 space-y-6">{children()}</div> }
}

#[component]
pub fn ModalFooter(children: Children) -> impl IntoView {
    view! {
        <div class="flex flex-wrap justify-end gap-3 px-6 py-4 border-t border-gray-200 dark:border-gray-700">
            {children()}
        </div>
    }
}
