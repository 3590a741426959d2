mod about;
mod contact;
mod footer;
mod header;
mod homepage;
mod layout;
mod not_found;
mod projects;
mod resume;
mod reveal;
mod theme;
mod toast;
mod ui;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::portfolio::PERSONAL_INFO;
use crate::theme::Theme;
use about::AboutPage;
use contact::ContactPage;
use homepage::HomePage;
use layout::Layout;
use not_found::NotFoundPage;
use projects::ProjectsPage;
use resume::ResumePage;
use theme::ThemeContext;
use toast::ToastContext;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href="/img/profile.svg" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // the root is the only writer of the theme
    let (theme, set_theme) = signal(Theme::default());
    provide_context(ThemeContext::new(theme, set_theme));
    provide_context(ToastContext::new());

    let structured_data = match PERSONAL_INFO.json_ld() {
        Ok(json) => Some(view! { <script type="application/ld+json" inner_html=json></script> }),
        Err(e) => {
            log::error!("could not serialize structured data: {e}");
            None
        }
    };

    view! {
        <Title formatter=|title| format!("{title} | {}", PERSONAL_INFO.name) />
        <Meta name="description" content=PERSONAL_INFO.bio />
        <Meta name="author" content=PERSONAL_INFO.name />
        {structured_data}

        <div
            class=move || theme.get().root_class()
            style:color-scheme=move || theme.get().color_scheme()
        >
            <Router>
                <Layout>
                    <Routes fallback=NotFoundPage>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/projects") view=ProjectsPage />
                        <Route path=path!("/resume") view=ResumePage />
                        <Route path=path!("/contact") view=ContactPage />
                    </Routes>
                </Layout>
            </Router>
        </div>
    }
}
