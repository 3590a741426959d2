use leptos::prelude::*;

use super::footer::Footer;
use super::header::Navigation;
use super::toast::Toaster;

/// Floating gradient blobs behind every page.
#[component]
fn AnimatedBackground() -> impl IntoView {
    view! {
        <div class="fixed inset-0 -z-10 overflow-hidden pointer-events-none" aria-hidden="true">
            <div class="blob absolute -top-40 -left-40 w-96 h-96 rounded-full bg-indigo-400/30 dark:bg-indigo-600/20 blur-3xl"></div>
            <div class="blob blob-delay-2 absolute top-1/3 -right-40 w-96 h-96 rounded-full bg-purple-400/30 dark:bg-purple-600/20 blur-3xl"></div>
            <div class="blob blob-delay-4 absolute -bottom-40 left-1/3 w-96 h-96 rounded-full bg-pink-400/30 dark:bg-pink-600/20 blur-3xl"></div>
        </div>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="relative min-h-screen flex flex-col bg-gray-50 text-gray-900 dark:bg-gray-950 dark:text-gray-100 transition-colors duration-300">
            <AnimatedBackground />
            <Navigation />
            <main class="flex-grow pt-24">{children()}</main>
            <Footer />
            <Toaster />
        </div>
    }
}
