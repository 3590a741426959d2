use leptos::{ev::MouseEvent, prelude::*};
use leptos_meta::Title;

use crate::portfolio::{
    filter_projects, find_project, format_long_date, format_short_date, technology_preview,
    CategoryFilter, Project,
};

use super::reveal::{ScrollReveal, StaggerGroup, StaggerItem};
use super::ui::{
    button_class, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardFooter, CardHeader, CardTitle, Modal, ModalContent, ModalFooter, ModalHeader,
};

// links inside a clickable card must not open the detail view
fn keep_click_local(ev: MouseEvent) {
    ev.stop_propagation();
}

#[component]
pub fn ProjectCard(
    project: &'static Project,
    #[prop(optional)] on_select: Option<Callback<()>>,
) -> impl IntoView {
    let (preview, remaining) = technology_preview(project.technologies);

    view! {
        <Card hover=true class="h-full flex flex-col" on_click=on_select>
            <div class="relative h-48 rounded-t-xl gradient-bg opacity-90 flex items-center justify-center">
                <span class="text-5xl font-bold text-white/80">{project.title.get(..1)}</span>
                {project
                    .featured
                    .then(|| {
                        view! {
                            <span class="absolute top-3 right-3 rounded-full bg-yellow-400 px-3 py-1 text-xs font-semibold text-gray-900">
                                "Featured"
                            </span>
                        }
                    })}
            </div>
            <CardHeader>
                <CardTitle>{project.title}</CardTitle>
                <CardDescription>{project.description}</CardDescription>
            </CardHeader>
            <CardContent class="flex-grow">
                <p class="text-xs text-gray-500 dark:text-gray-400 mb-3">
                    {format_short_date(project.completed_at)}
                </p>
                <div class="flex flex-wrap gap-2">
                    {preview.iter().map(|tech| view! { <span class="chip">{*tech}</span> }).collect_view()}
                    {(remaining > 0)
                        .then(|| view! { <span class="chip chip-muted">{format!("+{remaining} more")}</span> })}
                </div>
            </CardContent>
            <CardFooter>
                {project
                    .github_url
                    .map(|url| {
                        view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class=button_class(ButtonVariant::Primary, ButtonSize::Sm, "")
                                on:click=keep_click_local
                            >
                                <i class="devicon-github-plain"></i>
                                "Code"
                            </a>
                        }
                    })}
                {project
                    .live_url
                    .map(|url| {
                        view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class=button_class(ButtonVariant::Secondary, ButtonSize::Sm, "")
                                on:click=keep_click_local
                            >
                                "Live"
                            </a>
                        }
                    })}
            </CardFooter>
        </Card>
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let filter = RwSignal::new(CategoryFilter::All);
    let selected = RwSignal::new(None::<&'static str>);

    let visible = Memo::new(move |_| filter_projects(filter.get()));
    let close = Callback::new(move |_| selected.set(None));

    view! {
        <Title text="Projects" />
        <div class="page-content container mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <ScrollReveal class="text-center mb-12">
                <h1 class="text-5xl font-bold mb-4 gradient-text">"My Projects"</h1>
                <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                    "A collection of projects I've worked on, showcasing my skills and passion for development."
                </p>
            </ScrollReveal>

            <ScrollReveal class="flex flex-wrap items-center justify-center gap-3 mb-12">
                <span class="text-gray-600 dark:text-gray-500">"Filter by category:"</span>
                {CategoryFilter::options()
                    .map(|option| view! { <FilterButton option filter /> })
                    .collect_view()}
            </ScrollReveal>

            {move || {
                let projects = visible.get();
                if projects.is_empty() {
                    view! {
                        <p class="text-center text-lg text-gray-500 dark:text-gray-400 py-20">
                            "No projects found in this category."
                        </p>
                    }
                        .into_any()
                } else {
                    view! {
                        <StaggerGroup class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                            {projects
                                .into_iter()
                                .enumerate()
                                .map(|(index, project)| {
                                    let on_select = Callback::new(move |_| {
                                        log::debug!("opening project {}", project.id);
                                        selected.set(Some(project.id));
                                    });
                                    view! {
                                        <StaggerItem index>
                                            <ProjectCard project on_select />
                                        </StaggerItem>
                                    }
                                })
                                .collect_view()}
                        </StaggerGroup>
                    }
                        .into_any()
                }
            }}
        </div>

        <Modal
            open=Signal::derive(move || selected.get().is_some())
            on_close=close
            label="Project details"
        >
            {move || selected.get().and_then(find_project).map(|project| view! { <ProjectDetail project on_close=close /> })}
        </Modal>
    }
}

#[component]
fn FilterButton(option: CategoryFilter, filter: RwSignal<CategoryFilter>) -> impl IntoView {
    let active = move || filter.get() == option;

    view! {
        <button
            type="button"
            class=move || {
                let variant = if active() { ButtonVariant::Primary } else { ButtonVariant::Outline };
                button_class(variant, ButtonSize::Sm, "")
            }
            aria-pressed=move || active().to_string()
            on:click=move |_| {
                log::debug!("project filter set to {}", option.label());
                filter.set(option);
            }
        >
            {option.label()}
        </button>
    }
}

#[component]
fn ProjectDetail(project: &'static Project, on_close: Callback<()>) -> impl IntoView {
    view! {
        <ModalHeader>
            <div class="flex flex-wrap items-center gap-2 mb-2">
                <span class="chip">{project.category.label()}</span>
                {project
                    .featured
                    .then(|| {
                        view! {
                            <span class="rounded-full bg-yellow-400 px-3 py-1 text-xs font-semibold text-gray-900">
                                "Featured Project"
                            </span>
                        }
                    })}
            </div>
            <h2 class="text-3xl font-bold">{project.title}</h2>
            <p class="mt-2 text-gray-600 dark:text-gray-400">{project.description}</p>
        </ModalHeader>
        <ModalContent>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                {project
                    .images
                    .iter()
                    .map(|image| {
                        view! {
                            <div
                                class="h-40 rounded-lg gradient-bg opacity-80 flex items-center justify-center text-white/80 text-sm"
                                title=*image
                            >
                                {project.title}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <section>
                <h3 class="text-xl font-semibold mb-2">"About This Project"</h3>
                <p class="text-gray-600 dark:text-gray-400 leading-relaxed">
                    {project.long_description}
                </p>
            </section>
            <section>
                <h3 class="text-xl font-semibold mb-2">"Technologies Used"</h3>
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! { <span class="chip">{*tech}</span> })
                        .collect_view()}
                </div>
            </section>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <h4 class="text-sm font-semibold text-gray-500 dark:text-gray-400">
                        "Completion Date"
                    </h4>
                    <p>{format_long_date(project.completed_at)}</p>
                </div>
                <div>
                    <h4 class="text-sm font-semibold text-gray-500 dark:text-gray-400">"Category"</h4>
                    <p>{project.category.label()}</p>
                </div>
            </div>
        </ModalContent>
        <ModalFooter>
            {project
                .github_url
                .map(|url| {
                    view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            class=button_class(ButtonVariant::Outline, ButtonSize::Md, "")
                        >
                            <i class="devicon-github-plain"></i>
                            "View Source Code"
                        </a>
                    }
                })}
            {project
                .live_url
                .map(|url| {
                    view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            class=button_class(ButtonVariant::Primary, ButtonSize::Md, "")
                        >
                            "View Live Demo"
                        </a>
                    }
                })}
            <Button variant=ButtonVariant::Ghost on_click=on_close>
                "Close"
            </Button>
        </ModalFooter>
    }
}
