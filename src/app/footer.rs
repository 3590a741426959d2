use leptos::prelude::*;
use leptos_router::components::*;

use crate::config::{BUILD_TIME, BUILD_YEAR};
use crate::nav::NAV_LINKS;
use crate::portfolio::PERSONAL_INFO;

#[component]
pub fn Footer() -> impl IntoView {
    let info = PERSONAL_INFO;

    view! {
        <footer class="relative mt-20 border-t border-gray-200 dark:border-gray-800 glass">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <div>
                        <h3 class="text-xl font-bold gradient-text mb-3">{info.name}</h3>
                        <p class="text-sm text-gray-600 dark:text-gray-400">{info.title}</p>
                        <p class="text-sm text-gray-600 dark:text-gray-400 mt-1">{info.location}</p>
                    </div>

                    <div>
                        <h4 class="font-semibold text-gray-900 dark:text-white mb-3">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {NAV_LINKS
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <A
                                                href=link.href
                                                attr:class="text-sm text-gray-600 dark:text-gray-400 hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors"
                                            >
                                                {link.name}
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="font-semibold text-gray-900 dark:text-white mb-3">"Connect"</h4>
                        <div class="flex gap-3 text-2xl">
                            {info
                                .social_links
                                .iter()
                                .map(|(platform, url)| {
                                    view! {
                                        <a
                                            href=url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-gray-600 dark:text-gray-400 hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors"
                                            aria-label=platform.label()
                                        >
                                            <i class=platform.icon_class()></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <a
                                href=format!("mailto:{}", info.email)
                                class="text-gray-600 dark:text-gray-400 hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors"
                                aria-label="Email"
                            >
                                "✉"
                            </a>
                        </div>
                    </div>
                </div>

                <div class="mt-10 pt-6 border-t border-gray-200 dark:border-gray-800 text-center text-sm text-gray-500 dark:text-gray-400">
                    <p>
                        <time datetime=BUILD_TIME>{format!("© {BUILD_YEAR} {}.", info.name)}</time>
                        " Made with "
                        <span class="text-red-500">"♥"</span>
                    </p>
                </div>
            </div>
        </footer>
    }
}
