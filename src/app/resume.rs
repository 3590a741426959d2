use leptos::prelude::*;
use leptos_meta::Title;

use crate::portfolio::{
    format_date_range, format_year_range, skills_by_category, CERTIFICATES, EDUCATION,
    EXPERIENCES, PERSONAL_INFO,
};

use super::reveal::{ScrollReveal, SkillBar, StaggerGroup, StaggerItem};
use super::ui::{Button, ButtonSize, ButtonVariant};

fn open_resume() {
    let url = PERSONAL_INFO.resume_url;
    match window().open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => log::info!("opened resume at {url}"),
        Ok(None) => log::warn!("resume window was blocked"),
        Err(e) => log::error!("could not open resume: {e:?}"),
    }
}

fn print_page() {
    if let Err(e) = window().print() {
        log::error!("print failed: {e:?}");
    }
}

#[component]
pub fn ResumePage() -> impl IntoView {
    view! {
        <Title text="Resume" />
        <div class="page-content container mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <ScrollReveal class="text-center mb-12 print:hidden">
                <h1 class="text-5xl font-bold mb-4 gradient-text">"Resume"</h1>
                <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto mb-8">
                    "My professional experience, education, and skills in a comprehensive overview."
                </p>
                <div class="flex flex-wrap justify-center gap-4">
                    <Button size=ButtonSize::Lg on_click=Callback::new(|_| open_resume())>
                        "Download PDF"
                    </Button>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Lg
                        on_click=Callback::new(|_| print_page())
                    >
                        "Print Resume"
                    </Button>
                </div>
            </ScrollReveal>
            <ScrollReveal>
                <Resume />
            </ScrollReveal>
        </div>
    }
}

#[component]
fn Resume() -> impl IntoView {
    view! {
        <div
            id="resume"
            class="grid max-w-5xl mx-auto grid-cols-1 md:grid-cols-3 gap-8 p-8 glass-strong leading-snug shadow-2xl rounded-2xl print:shadow-none print:bg-white print:text-black"
        >
            <Sidebar />
            <Experience />
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let info = PERSONAL_INFO;

    view! {
        <div class="space-y-6">
            <div class="flex flex-col items-center space-y-4 text-center">
                <img
                    src=info.profile_image
                    alt=info.name
                    class="w-32 h-32 rounded-full object-cover ring-4 ring-indigo-500/30"
                />
                <div>
                    <h2 class="text-2xl font-bold">{info.name}</h2>
                    <p class="text-indigo-600 dark:text-indigo-400">{info.title}</p>
                </div>
                <div class="flex flex-col items-start gap-y-1.5 w-full rounded-lg border border-gray-200 dark:border-gray-700 px-3 py-4 text-sm text-left">
                    <div class="flex items-center gap-x-2">
                        <span>"✉"</span>
                        <a href=format!("mailto:{}", info.email)>{info.email}</a>
                    </div>
                    <div class="flex items-center gap-x-2">
                        <span>"☎"</span>
                        <a href=format!("tel:{}", info.phone)>{info.phone}</a>
                    </div>
                    <div class="flex items-center gap-x-2">
                        <span>"⌂"</span>
                        <div>{info.location}</div>
                    </div>
                    {info
                        .social_links
                        .iter()
                        .map(|(platform, url)| {
                            view! {
                                <div class="flex items-center gap-x-2">
                                    <i class=platform.icon_class()></i>
                                    <a href=url target="_blank" rel="noopener noreferrer">
                                        {platform.label()}
                                    </a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <section id="skills" class="grid">
                <h3 class="mb-3 border-b border-gray-200 dark:border-gray-700 pb-1 font-bold">
                    "Technical Skills"
                </h3>
                <div class="grid gap-y-5">
                    {skills_by_category()
                        .into_iter()
                        .map(|(category, skills)| {
                            view! {
                                <div class="space-y-2">
                                    <h4 class="font-medium">{category.long_label()}</h4>
                                    {skills
                                        .into_iter()
                                        .map(|skill| view! { <SkillBar skill /> })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section id="education" class="grid">
                <h3 class="mb-3 border-b border-gray-200 dark:border-gray-700 pb-1 font-bold">
                    "Education"
                </h3>
                <div class="grid gap-y-4">
                    {EDUCATION
                        .iter()
                        .map(|education| {
                            view! {
                                <div class="space-y-1 text-sm">
                                    <h4 class="font-medium text-base">
                                        {format!("{} in {}", education.degree, education.field)}
                                    </h4>
                                    <p class="text-indigo-600 dark:text-indigo-400">
                                        {education.institution}
                                    </p>
                                    <p class="text-gray-500 dark:text-gray-400">
                                        {format_year_range(education.start_date, education.end_date)}
                                    </p>
                                    {education.gpa.map(|gpa| view! { <p>{format!("GPA: {gpa}")}</p> })}
                                    <ul class="list-disc list-inside text-gray-600 dark:text-gray-400">
                                        {education
                                            .achievements
                                            .iter()
                                            .map(|a| view! { <li>{*a}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn Experience() -> impl IntoView {
    view! {
        <div class="md:col-span-2 space-y-6">
            <section id="summary">
                <h3 class="mb-3 border-b border-gray-200 dark:border-gray-700 pb-1 font-bold">
                    "Professional Summary"
                </h3>
                <p class="text-gray-700 dark:text-gray-300 leading-relaxed">{PERSONAL_INFO.bio}</p>
            </section>
            <section id="experience">
                <h3 class="mb-3 border-b border-gray-200 dark:border-gray-700 pb-1 font-bold">
                    "Professional Experience"
                </h3>
                <StaggerGroup class="space-y-6">
                    {EXPERIENCES
                        .iter()
                        .enumerate()
                        .map(|(index, experience)| {
                            view! {
                                <StaggerItem index>
                                    <div class="flex flex-wrap items-baseline justify-between gap-2">
                                        <div>
                                            <h4 class="text-lg font-semibold">{experience.position}</h4>
                                            <p class="text-indigo-600 dark:text-indigo-400">
                                                {experience.company}
                                            </p>
                                        </div>
                                        <span class="text-sm text-gray-500 dark:text-gray-400">
                                            {format_date_range(experience.start_date, experience.end_date)}
                                        </span>
                                    </div>
                                    <p class="mt-2 text-gray-700 dark:text-gray-300">
                                        {experience.description}
                                    </p>
                                    <h5 class="mt-3 font-medium">"Key Achievements:"</h5>
                                    <ul class="list-disc list-inside text-sm text-gray-600 dark:text-gray-400 space-y-1">
                                        {experience
                                            .achievements
                                            .iter()
                                            .map(|a| view! { <li>{*a}</li> })
                                            .collect_view()}
                                    </ul>
                                    <p class="mt-3 text-sm">
                                        <span class="font-medium">"Technologies: "</span>
                                        {experience.technologies.join(", ")}
                                    </p>
                                </StaggerItem>
                            }
                        })
                        .collect_view()}
                </StaggerGroup>
            </section>
            <section id="certifications">
                <h3 class="mb-3 border-b border-gray-200 dark:border-gray-700 pb-1 font-bold">
                    "Certifications"
                </h3>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    {CERTIFICATES
                        .iter()
                        .map(|certificate| {
                            view! {
                                <div class="rounded-lg border border-gray-200 dark:border-gray-700 p-4 text-sm">
                                    <h4 class="font-semibold text-base">{certificate.name}</h4>
                                    <p class="text-indigo-600 dark:text-indigo-400">{certificate.issuer}</p>
                                    <p class="mt-1 text-gray-500 dark:text-gray-400">
                                        {certificate.issued_label()}
                                    </p>
                                    {certificate
                                        .expires_label()
                                        .map(|label| {
                                            view! {
                                                <p class="text-gray-500 dark:text-gray-400">{label}</p>
                                            }
                                        })}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
