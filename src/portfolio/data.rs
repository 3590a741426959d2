use super::{
    date, Certificate, Education, Experience, PersonalInfo, Project, ProjectCategory, Skill,
    SkillCategory, SocialLinks,
};

pub static PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Theara Khut",
    title: "Full Stack Developer & AI Enthusiast",
    email: "khuttheara1887@gmail.com",
    phone: "092843959",
    location: "Kampot, Cambodia",
    bio: "Passionate full-stack developer with 5+ years of experience creating innovative web applications. Specialized in React, Node.js, and AI integration. Love turning complex problems into simple, beautiful solutions.",
    resume_url: "/resume.pdf",
    profile_image: "/img/profile.svg",
    social_links: SocialLinks {
        github: Some("https://github.com/alexjohnson"),
        linkedin: Some("https://linkedin.com/in/alexjohnson"),
        twitter: Some("https://twitter.com/alexjohnson"),
        website: Some("https://alexjohnson.dev"),
    },
};

pub static PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "AI-Powered Task Manager",
        description: "Smart task management app with AI-driven prioritization and scheduling.",
        long_description: "A comprehensive task management application that uses machine learning to automatically prioritize tasks based on deadlines, importance, and user behavior patterns. Features include natural language processing for task creation, intelligent scheduling suggestions, and productivity analytics.",
        category: ProjectCategory::Ai,
        technologies: &["React", "TypeScript", "Node.js", "OpenAI API", "PostgreSQL", "Redis"],
        images: &["/projects/task-manager-1.jpg", "/projects/task-manager-2.jpg"],
        github_url: Some("https://github.com/alexjohnson/ai-task-manager"),
        live_url: Some("https://ai-tasks.example.com"),
        featured: true,
        completed_at: date(2024, 11, 15),
    },
    Project {
        id: "2",
        title: "E-Commerce Platform",
        description: "Modern e-commerce solution with real-time inventory and payment processing.",
        long_description: "A full-featured e-commerce platform built with modern web technologies. Includes features like real-time inventory management, secure payment processing, order tracking, admin dashboard, and mobile-responsive design.",
        category: ProjectCategory::Fullstack,
        technologies: &["Next.js", "TypeScript", "Stripe", "Prisma", "PostgreSQL", "Tailwind CSS"],
        images: &["/projects/ecommerce-1.jpg", "/projects/ecommerce-2.jpg"],
        github_url: Some("https://github.com/alexjohnson/ecommerce-platform"),
        live_url: Some("https://shop.example.com"),
        featured: true,
        completed_at: date(2024, 9, 20),
    },
    Project {
        id: "3",
        title: "React Native Fitness App",
        description: "Cross-platform mobile app for workout tracking and nutrition planning.",
        long_description: "A comprehensive fitness application that helps users track workouts, plan nutrition, and monitor progress. Features include exercise libraries, custom workout creation, nutrition tracking, progress photos, and social sharing.",
        category: ProjectCategory::Mobile,
        technologies: &["React Native", "TypeScript", "Firebase", "Redux Toolkit", "Expo"],
        images: &["/projects/fitness-1.jpg", "/projects/fitness-2.jpg"],
        github_url: Some("https://github.com/alexjohnson/fitness-app"),
        live_url: None,
        featured: false,
        completed_at: date(2024, 7, 10),
    },
    Project {
        id: "4",
        title: "Portfolio Website",
        description: "Modern, animated portfolio website with dark mode and responsive design.",
        long_description: "A sleek, modern portfolio website showcasing projects and skills. Built with cutting-edge technologies and featuring smooth animations, dark mode toggle, responsive design, and optimized performance.",
        category: ProjectCategory::Web,
        technologies: &["Rust", "Leptos", "WebAssembly", "Tailwind CSS", "Axum"],
        images: &["/projects/portfolio-1.jpg", "/projects/portfolio-2.jpg"],
        github_url: Some("https://github.com/alexjohnson/portfolio"),
        live_url: Some("https://alexjohnson.dev"),
        featured: false,
        completed_at: date(2024, 12, 1),
    },
];

pub static EXPERIENCES: &[Experience] = &[
    Experience {
        id: "1",
        company: "TechCorp Solutions",
        position: "Senior Full Stack Developer",
        description: "Lead development of customer-facing applications serving 100k+ users.",
        start_date: date(2022, 3, 1),
        end_date: None,
        technologies: &["React", "Node.js", "PostgreSQL", "AWS", "Docker"],
        achievements: &[
            "Reduced application load time by 40% through optimization",
            "Led team of 4 developers on major platform redesign",
            "Implemented CI/CD pipeline reducing deployment time by 60%",
        ],
    },
    Experience {
        id: "2",
        company: "StartupXYZ",
        position: "Full Stack Developer",
        description: "Built scalable web applications from conception to deployment.",
        start_date: date(2020, 6, 1),
        end_date: Some(date(2022, 2, 28)),
        technologies: &["Vue.js", "Python", "Django", "MongoDB", "GCP"],
        achievements: &[
            "Developed MVP that secured $2M in Series A funding",
            "Built real-time chat system handling 10k+ concurrent users",
            "Implemented automated testing increasing code coverage to 95%",
        ],
    },
    Experience {
        id: "3",
        company: "Digital Agency Pro",
        position: "Frontend Developer",
        description: "Created responsive websites and web applications for various clients.",
        start_date: date(2019, 1, 1),
        end_date: Some(date(2020, 5, 31)),
        technologies: &["React", "SCSS", "WordPress", "jQuery"],
        achievements: &[
            "Delivered 20+ client projects on time and budget",
            "Improved website performance scores by average of 30%",
            "Established component library used across all projects",
        ],
    },
];

pub static EDUCATION: &[Education] = &[
    Education {
        id: "1",
        institution: "University of California, Berkeley",
        degree: "Bachelor of Science",
        field: "Computer Science",
        start_date: date(2015, 9, 1),
        end_date: Some(date(2019, 5, 31)),
        gpa: Some("3.8"),
        achievements: &[
            "Magna Cum Laude",
            "Dean's List for 6 semesters",
            "Computer Science Student Association President",
        ],
    },
    Education {
        id: "2",
        institution: "Coursera",
        degree: "Professional Certificate",
        field: "Machine Learning",
        start_date: date(2023, 1, 1),
        end_date: Some(date(2023, 6, 30)),
        gpa: None,
        achievements: &[
            "Completed with Distinction",
            "Capstone project on NLP applications",
        ],
    },
];

const fn skill(name: &'static str, level: u8, category: SkillCategory) -> Skill {
    Skill {
        name,
        level,
        category,
    }
}

pub static SKILLS: &[Skill] = &[
    skill("React", 95, SkillCategory::Frontend),
    skill("TypeScript", 90, SkillCategory::Frontend),
    skill("Next.js", 85, SkillCategory::Frontend),
    skill("Vue.js", 80, SkillCategory::Frontend),
    skill("Tailwind CSS", 90, SkillCategory::Frontend),
    skill("SCSS/Sass", 85, SkillCategory::Frontend),
    skill("Node.js", 90, SkillCategory::Backend),
    skill("Python", 85, SkillCategory::Backend),
    skill("Express.js", 85, SkillCategory::Backend),
    skill("Django", 75, SkillCategory::Backend),
    skill("GraphQL", 80, SkillCategory::Backend),
    skill("REST APIs", 95, SkillCategory::Backend),
    skill("PostgreSQL", 85, SkillCategory::Database),
    skill("MongoDB", 80, SkillCategory::Database),
    skill("Redis", 75, SkillCategory::Database),
    skill("Prisma", 85, SkillCategory::Database),
    skill("Docker", 80, SkillCategory::Devops),
    skill("AWS", 85, SkillCategory::Devops),
    skill("CI/CD", 85, SkillCategory::Devops),
    skill("Git", 95, SkillCategory::Devops),
    skill("React Native", 80, SkillCategory::Mobile),
    skill("Expo", 75, SkillCategory::Mobile),
    skill("Figma", 70, SkillCategory::Design),
    skill("UI/UX Design", 75, SkillCategory::Design),
];

pub static CERTIFICATES: &[Certificate] = &[
    Certificate {
        id: "1",
        name: "AWS Certified Developer Associate",
        issuer: "Amazon Web Services",
        issue_date: date(2023, 8, 15),
        expiry_date: Some(date(2026, 8, 15)),
        credential_url: Some("https://aws.amazon.com/verification"),
    },
    Certificate {
        id: "2",
        name: "Meta Frontend Developer Professional Certificate",
        issuer: "Meta",
        issue_date: date(2022, 12, 10),
        expiry_date: None,
        credential_url: Some("https://coursera.org/verify/professional-cert"),
    },
    Certificate {
        id: "3",
        name: "Google Cloud Professional Cloud Architect",
        issuer: "Google Cloud",
        issue_date: date(2023, 3, 20),
        expiry_date: Some(date(2025, 3, 20)),
        credential_url: Some("https://cloud.google.com/certification"),
    },
];
