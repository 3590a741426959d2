use leptos::prelude::*;
use leptos_meta::Title;

use crate::portfolio::{
    format_year_range, skills_by_category, years_of_experience, Certificate,
    Education, Experience, CERTIFICATES, EDUCATION, EXPERIENCES, PERSONAL_INFO,
};
use crate::reveal::Direction;

use super::reveal::{ScrollReveal, SkillBar, StaggerGroup, StaggerItem};
use super::ui::{
    button_class, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <div class="page-content container mx-auto px-4 sm:px-6 lg:px-8 py-12 space-y-20">
            <ScrollReveal class="text-center">
                <h1 class="text-5xl font-bold mb-4 gradient-text">"About Me"</h1>
                <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                    "Get to know more about my journey, skills, and passion for creating amazing digital experiences."
                </p>
            </ScrollReveal>
            <Intro />
            <ExperienceTimeline />
            <EducationList />
            <SkillGroups />
            <Certifications />
        </div>
    }
}

#[component]
fn SectionHeading(title: &'static str) -> impl IntoView {
    view! {
        <ScrollReveal class="text-center mb-12">
            <h2 class="text-4xl font-bold">{title}</h2>
        </ScrollReveal>
    }
}

#[component]
fn Intro() -> impl IntoView {
    let info = PERSONAL_INFO;
    let stats = [
        (format!("{}+", years_of_experience()), "Years Experience"),
        ("50+".to_string(), "Projects Completed"),
        (CERTIFICATES.len().to_string(), "Certifications"),
    ];

    view! {
        <section class="grid grid-cols-1 lg:grid-cols-3 gap-12 items-start">
            <ScrollReveal direction=Direction::Left>
                <Card class="text-center">
                    <CardContent class="p-8">
                        <img
                            src=info.profile_image
                            alt=info.name
                            class="w-40 h-40 mx-auto mb-6 rounded-full object-cover ring-4 ring-indigo-500/30"
                        />
                        <h2 class="text-2xl font-bold">{info.name}</h2>
                        <p class="text-indigo-600 dark:text-indigo-400 mb-2">{info.title}</p>
                        <p class="text-sm text-gray-500 dark:text-gray-400 mb-6">{info.location}</p>
                        <a
                            href=info.resume_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class=button_class(ButtonVariant::Primary, ButtonSize::Md, "w-full")
                        >
                            "Download Resume"
                        </a>
                    </CardContent>
                </Card>
            </ScrollReveal>
            <ScrollReveal direction=Direction::Right class="lg:col-span-2 space-y-8">
                <div>
                    <h3 class="text-2xl font-semibold mb-4">"My Story"</h3>
                    <div class="space-y-4 text-gray-600 dark:text-gray-400 leading-relaxed">
                        <p>{info.bio}</p>
                        <p>
                            "I believe in continuous learning and staying up-to-date with the latest technologies. My goal is to create solutions that not only meet technical requirements but also provide exceptional user experiences."
                        </p>
                    </div>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                    {stats
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <Card class="text-center">
                                    <CardContent class="p-6">
                                        <div class="text-3xl font-bold text-indigo-600 dark:text-indigo-400">
                                            {value}
                                        </div>
                                        <div class="text-sm text-gray-600 dark:text-gray-400">{label}</div>
                                    </CardContent>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </ScrollReveal>
        </section>
    }
}

#[component]
fn ExperienceTimeline() -> impl IntoView {
    view! {
        <section>
            <SectionHeading title="Professional Experience" />
            <StaggerGroup class="relative max-w-4xl mx-auto">
                <div class="absolute left-4 md:left-1/2 top-0 bottom-0 w-0.5 bg-indigo-200 dark:bg-indigo-900"></div>
                {EXPERIENCES
                    .iter()
                    .enumerate()
                    .map(|(index, experience)| {
                        let left = index % 2 == 0;
                        view! {
                            <StaggerItem
                                index
                                direction=if left { Direction::Left } else { Direction::Right }
                                class="relative mb-12 pl-12 md:pl-0"
                            >
                                <div class="absolute left-2.5 md:left-1/2 md:-translate-x-1/2 top-6 w-4 h-4 rounded-full gradient-bg ring-4 ring-white dark:ring-gray-950"></div>
                                <div class=if left {
                                    "md:w-1/2 md:pr-12"
                                } else {
                                    "md:w-1/2 md:ml-auto md:pl-12"
                                }>
                                    <ExperienceCard experience />
                                </div>
                            </StaggerItem>
                        }
                    })
                    .collect_view()}
            </StaggerGroup>
        </section>
    }
}

#[component]
fn ExperienceCard(experience: &'static Experience) -> impl IntoView {
    view! {
        <Card hover=true>
            <CardHeader>
                <div class="flex flex-wrap items-start justify-between gap-2">
                    <div>
                        <CardTitle>{experience.position}</CardTitle>
                        <p class="text-indigo-600 dark:text-indigo-400 font-medium">
                            {experience.company}
                        </p>
                    </div>
                    <span class="text-sm text-gray-500 dark:text-gray-400">
                        {format_year_range(experience.start_date, experience.end_date)}
                    </span>
                </div>
            </CardHeader>
            <CardContent class="space-y-4">
                <p class="text-gray-600 dark:text-gray-400">{experience.description}</p>
                <div>
                    <h4 class="font-semibold mb-2">"Key Achievements:"</h4>
                    <ul class="list-disc list-inside space-y-1 text-sm text-gray-600 dark:text-gray-400">
                        {experience
                            .achievements
                            .iter()
                            .map(|achievement| view! { <li>{*achievement}</li> })
                            .collect_view()}
                    </ul>
                </div>
                <div class="flex flex-wrap gap-2">
                    {experience
                        .technologies
                        .iter()
                        .map(|tech| view! { <span class="chip">{*tech}</span> })
                        .collect_view()}
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn EducationList() -> impl IntoView {
    view! {
        <section>
            <SectionHeading title="Education" />
            <StaggerGroup class="grid grid-cols-1 md:grid-cols-2 gap-8">
                {EDUCATION
                    .iter()
                    .enumerate()
                    .map(|(index, education)| {
                        view! {
                            <StaggerItem index>
                                <EducationCard education />
                            </StaggerItem>
                        }
                    })
                    .collect_view()}
            </StaggerGroup>
        </section>
    }
}

#[component]
fn EducationCard(education: &'static Education) -> impl IntoView {
    view! {
        <Card hover=true class="h-full">
            <CardHeader>
                <CardTitle>{format!("{} in {}", education.degree, education.field)}</CardTitle>
                <p class="text-indigo-600 dark:text-indigo-400 font-medium">{education.institution}</p>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    {format_year_range(education.start_date, education.end_date)}
                </p>
            </CardHeader>
            <CardContent class="space-y-3">
                {education
                    .gpa
                    .map(|gpa| {
                        view! { <p class="text-sm font-medium">{format!("GPA: {gpa}")}</p> }
                    })}
                {(!education.achievements.is_empty())
                    .then(|| {
                        view! {
                            <div>
                                <h4 class="font-semibold mb-2">"Achievements:"</h4>
                                <ul class="list-disc list-inside space-y-1 text-sm text-gray-600 dark:text-gray-400">
                                    {education
                                        .achievements
                                        .iter()
                                        .map(|achievement| view! { <li>{*achievement}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })}
            </CardContent>
        </Card>
    }
}

#[component]
fn SkillGroups() -> impl IntoView {
    view! {
        <section>
            <SectionHeading title="Skills & Technologies" />
            <StaggerGroup class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {skills_by_category()
                    .into_iter()
                    .enumerate()
                    .map(|(index, (category, skills))| {
                        view! {
                            <StaggerItem index>
                                <Card class="h-full">
                                    <CardHeader>
                                        <CardTitle>{category.label()}</CardTitle>
                                    </CardHeader>
                                    <CardContent class="space-y-4">
                                        {skills
                                            .into_iter()
                                            .map(|skill| view! { <SkillBar skill /> })
                                            .collect_view()}
                                    </CardContent>
                                </Card>
                            </StaggerItem>
                        }
                    })
                    .collect_view()}
            </StaggerGroup>
        </section>
    }
}

#[component]
fn Certifications() -> impl IntoView {
    view! {
        <section>
            <SectionHeading title="Certifications" />
            <StaggerGroup class="grid grid-cols-1 md:grid-cols-3 gap-8">
                {CERTIFICATES
                    .iter()
                    .enumerate()
                    .map(|(index, certificate)| {
                        view! {
                            <StaggerItem index>
                                <CertificateCard certificate />
                            </StaggerItem>
                        }
                    })
                    .collect_view()}
            </StaggerGroup>
        </section>
    }
}

#[component]
fn CertificateCard(certificate: &'static Certificate) -> impl IntoView {
    view! {
        <Card hover=true class="h-full">
            <CardHeader>
                <div class="flex items-start justify-between gap-2 mb-2">
                    <span class="text-3xl">"🏆"</span>
                    {certificate
                        .credential_url
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=button_class(ButtonVariant::Outline, ButtonSize::Sm, "")
                                >
                                    "View"
                                </a>
                            }
                        })}
                </div>
                <CardTitle>{certificate.name}</CardTitle>
                <p class="text-indigo-600 dark:text-indigo-400 font-medium">{certificate.issuer}</p>
            </CardHeader>
            <CardContent class="text-sm text-gray-500 dark:text-gray-400 space-y-1">
                <p>{certificate.issued_label()}</p>
                {certificate.expires_label().map(|label| view! { <p>{label}</p> })}
            </CardContent>
        </Card>
    }
}
