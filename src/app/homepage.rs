use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::portfolio::{featured_projects, PERSONAL_INFO};
use crate::reveal::Direction;

use super::projects::ProjectCard;
use super::reveal::{ScrollReveal, StaggerGroup, StaggerItem};
use super::ui::{button_class, ButtonSize, ButtonVariant};

const ABOUT_PREVIEW_ID: &str = "about-preview";

const FOCUS_TECHNOLOGIES: [&str; 5] = ["React", "TypeScript", "Node.js", "Python", "AI/ML"];

const HIGHLIGHTS: [(&str, &str); 4] = [
    ("5+", "Years Experience"),
    ("50+", "Projects Completed"),
    ("20+", "Technologies"),
    ("100%", "Client Satisfaction"),
];

fn scroll_to_about() {
    let Some(section) = document().get_element_by_id(ABOUT_PREVIEW_ID) else {
        log::warn!("no #{ABOUT_PREVIEW_ID} section to scroll to");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="page-content">
            <Hero />
            <AboutPreview />
            <FeaturedProjects />
            <CallToAction />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let info = PERSONAL_INFO;
    let github = info.social_links.github;

    view! {
        <section class="relative min-h-[calc(100vh-6rem)] flex items-center">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col-reverse lg:flex-row items-center gap-12">
                    <StaggerGroup class="flex-1 text-center lg:text-left">
                        <StaggerItem index=0>
                            <h1 class="text-5xl md:text-6xl font-bold mb-4">
                                "Hi, I'm " <span class="gradient-text">{info.name}</span>
                            </h1>
                        </StaggerItem>
                        <StaggerItem index=1>
                            <p class="text-2xl text-gray-700 dark:text-gray-300 mb-6">{info.title}</p>
                        </StaggerItem>
                        <StaggerItem index=2>
                            <p class="text-lg text-gray-600 dark:text-gray-400 mb-8 max-w-2xl">
                                {info.bio}
                            </p>
                        </StaggerItem>
                        <StaggerItem index=3 class="flex flex-wrap gap-4 justify-center lg:justify-start">
                            <a
                                href=info.resume_url
                                target="_blank"
                                rel="noopener noreferrer"
                                class=button_class(ButtonVariant::Primary, ButtonSize::Lg, "")
                            >
                                "Download Resume"
                            </a>
                            {github
                                .map(|url| {
                                    view! {
                                        <a
                                            href=url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class=button_class(ButtonVariant::Outline, ButtonSize::Lg, "")
                                        >
                                            <i class="devicon-github-plain"></i>
                                            "View GitHub"
                                        </a>
                                    }
                                })}
                        </StaggerItem>
                    </StaggerGroup>
                    <ScrollReveal direction=Direction::Right class="flex-shrink-0">
                        <div class="w-64 h-64 md:w-80 md:h-80 rounded-full p-1 gradient-bg shadow-2xl">
                            <img
                                src=info.profile_image
                                alt=info.name
                                class="w-full h-full rounded-full object-cover bg-white dark:bg-gray-900"
                            />
                        </div>
                    </ScrollReveal>
                </div>
            </div>
            <button
                type="button"
                class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce text-3xl text-gray-500 hover:text-indigo-600 dark:hover:text-indigo-400"
                aria-label="Scroll to about section"
                on:click=move |_| scroll_to_about()
            >
                "↓"
            </button>
        </section>
    }
}

#[component]
fn AboutPreview() -> impl IntoView {
    view! {
        <section id=ABOUT_PREVIEW_ID class="py-20">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <ScrollReveal class="text-center mb-12">
                    <h2 class="text-4xl font-bold mb-4">"About Me"</h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400">
                        "Passionate developer with expertise in modern web technologies"
                    </p>
                </ScrollReveal>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <ScrollReveal direction=Direction::Left>
                        <h3 class="text-2xl font-semibold mb-4">"Creating Digital Experiences"</h3>
                        <p class="text-gray-600 dark:text-gray-400 mb-6 leading-relaxed">
                            "I specialize in building modern, responsive web applications using cutting-edge technologies. With a focus on user experience and clean code, I turn ideas into digital reality."
                        </p>
                        <div class="flex flex-wrap gap-2 mb-6">
                            {FOCUS_TECHNOLOGIES
                                .into_iter()
                                .map(|tech| view! { <span class="chip">{tech}</span> })
                                .collect_view()}
                        </div>
                        <A
                            href="/about"
                            attr:class=button_class(ButtonVariant::Outline, ButtonSize::Md, "")
                        >
                            "Learn More About Me"
                        </A>
                    </ScrollReveal>
                    <ScrollReveal direction=Direction::Right class="grid grid-cols-2 gap-4">
                        {HIGHLIGHTS
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <div class="glass p-6 rounded-xl text-center">
                                        <div class="text-3xl font-bold text-indigo-600 dark:text-indigo-400">
                                            {value}
                                        </div>
                                        <div class="text-sm text-gray-600 dark:text-gray-400">{label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </ScrollReveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturedProjects() -> impl IntoView {
    view! {
        <section class="py-20">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <ScrollReveal class="text-center mb-12">
                    <h2 class="text-4xl font-bold mb-4">"Featured Projects"</h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400">
                        "A showcase of my recent work and creative solutions"
                    </p>
                </ScrollReveal>
                <StaggerGroup class="grid grid-cols-1 md:grid-cols-2 gap-8 mb-12">
                    {featured_projects()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <StaggerItem index>
                                    <ProjectCard project />
                                </StaggerItem>
                            }
                        })
                        .collect_view()}
                </StaggerGroup>
                <div class="text-center">
                    <A
                        href="/projects"
                        attr:class=button_class(ButtonVariant::Outline, ButtonSize::Lg, "")
                    >
                        "View All Projects"
                    </A>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <section class="py-20">
            <ScrollReveal class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="glass-strong rounded-2xl p-12 text-center max-w-3xl mx-auto">
                    <h2 class="text-4xl font-bold mb-4">"Let's Work Together"</h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400 mb-8">
                        "Have a project in mind? I'd love to hear about it and discuss how we can bring your ideas to life."
                    </p>
                    <A
                        href="/contact"
                        attr:class=button_class(ButtonVariant::Primary, ButtonSize::Lg, "")
                    >
                        "Get In Touch"
                    </A>
                </div>
            </ScrollReveal>
        </section>
    }
}
