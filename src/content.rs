//! Static site content: everything the sections render, kept as plain data
//! so the components stay presentational.

/// Fun facts unlocked by the minigame, one per hit up to the win score.
pub const FACTS: &[&str] = &[
    "I debug best with coffee and a lo-fi playlist.",
    "I once fixed a production bug on 1 bar of Wi-Fi in the Alps.",
    "I enjoy mentoring and simplifying complex topics.",
    "Tailwind keeps my UI expressive and consistent.",
    "Big dark-mode fan—but I always test accessibility.",
    "I sketch system diagrams on paper before I code.",
    "Keyboard shortcuts are my second language.",
];

pub const HERO_TAGS: &[&str] = &[
    "React", "React Native", "TypeScript", "Node.js", "Express", "Redux Toolkit", "Jest", "Vite",
    "MongoDB",
];

pub const GITHUB_URL: &str = "https://github.com/danodine";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/davidnodine/";
pub const CV_URL: &str = "/David-Nodine-CV.pdf";

#[derive(Clone, Copy, PartialEq)]
pub struct Writeup {
    pub problem: &'static str,
    pub architecture: &'static [&'static str],
    pub tradeoffs: &'static [&'static str],
    pub results: &'static [&'static str],
    pub future: &'static [&'static str],
}

#[derive(Clone, Copy, PartialEq)]
pub struct Project {
    pub slug: &'static str,
    pub year: &'static str,
    pub title: &'static str,
    pub tags: &'static [&'static str],
    pub blurb: &'static str,
    pub note: &'static str,
    pub code_url: &'static str,
    pub demo_url: &'static str,
    pub writeup: Writeup,
}

pub const PROJECTS: &[Project] = &[
    Project {
        slug: "appt-backend",
        year: "2025",
        title: "Appointment App – Backend API",
        tags: &["Node.js", "Express", "MongoDB", "Auth", "RBAC"],
        blurb: "Secure, scalable REST API for authentication, profiles, and appointment CRUD. \
                Includes role-based access control, consistent error handling, and detailed docs.",
        note: "Backend powering the appointment platform.",
        code_url: "https://github.com/danodine/appointment-app-backend",
        demo_url: "https://your-deploy-url.example/demo-appt-backend",
        writeup: Writeup {
            problem: "Build a reliable API for appointment scheduling with multi-role access and \
                      predictable error semantics.",
            architecture: &[
                "Node.js + Express, Feature-first modules",
                "MongoDB (Mongoose) with indexed queries",
                "RBAC middleware + JWT auth; refresh tokens on secure path",
                "Global error handler with problem+json responses",
            ],
            tradeoffs: &[
                "Chose MongoDB for iteration speed; added compound indexes to mitigate hot paths.",
                "Kept monorepo out of scope initially to reduce deployment complexity.",
            ],
            results: &[
                "p95 latency under 120ms on core endpoints.",
                "Zero 5xx in first 2 weeks post-release.",
            ],
            future: &[
                "Rate-limits per route using sliding window in Redis.",
                "Async domain events for audit log and analytics.",
            ],
        },
    },
    Project {
        slug: "appt-patient",
        year: "2025",
        title: "Appointment App – Patient (Mobile + Web)",
        tags: &["React Native", "Expo", "React", "Redux Toolkit"],
        blurb: "Patient-facing client for searching doctors and booking appointments. Designed \
                for fast UX and reliability. Also includes a full web client.",
        note: "Includes a web client for desktop usage.",
        code_url: "https://github.com/danodine/appointment-app-patient",
        demo_url: "https://your-deploy-url.example/demo-appt-patient",
        writeup: Writeup {
            problem: "Search and booking flow with offline tolerance.",
            architecture: &[
                "React Native + Expo, shared UI tokens with web client",
                "Redux Toolkit Query for caching & retries",
                "Optimistic updates for booking; reconciliation on reconnect",
            ],
            tradeoffs: &[
                "Chose RTK Query over SWR for better mutation ergonomics.",
                "Deferred deep-link routes to focus on reliability.",
            ],
            results: &["TTI < 2s on mid-tier devices", "Crash-free sessions > 99.7%"],
            future: &[
                "In-app reminders and calendar sync",
                "Biometrics for quick login",
            ],
        },
    },
    Project {
        slug: "plate-generator",
        year: "2025",
        title: "Plate Generator (WIP)",
        tags: &["React", "TypeScript", "Vite"],
        blurb: "Generate printable plate layouts from input data. Precise UI, export flow, and \
                keyboard-first productivity.",
        note: "Early stage; iterating quickly.",
        code_url: "https://github.com/danodine/plate-generator",
        demo_url: "/demos/plate-generator/index.html",
        writeup: Writeup {
            problem: "Fast, pixel-precise editor with export to PDF.",
            architecture: &[
                "React + Zustand for low-overhead state",
                "Keyboard command palette; grid & snapping",
                "Canvas render → vector export pipeline",
            ],
            tradeoffs: &["Kept feature scope tight to achieve stable v1 export"],
            results: &["Sub-50ms interaction budget on common actions"],
            future: &["SVG export, presets, multi-doc batch mode"],
        },
    },
];

pub fn project_by_slug(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug == slug)
}

#[derive(Clone, Copy, PartialEq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Languages",
        items: &["JavaScript", "TypeScript", "Python", "Java (basic)"],
    },
    SkillCategory {
        title: "Frameworks & Libraries",
        items: &[
            "React",
            "React Native",
            "Redux Toolkit",
            "Express.js",
            "Node.js",
            "Vite",
            "Flask",
        ],
    },
    SkillCategory {
        title: "Testing & Tools",
        items: &["Jest", "React Testing Library", "Git", "Storybook", "Jira"],
    },
    SkillCategory {
        title: "Databases",
        items: &["MongoDB", "MySQL", "SQLite", "Firebase"],
    },
];

#[derive(Clone, Copy, PartialEq)]
pub struct Job {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub details: &'static [&'static str],
}

pub const JOBS: &[Job] = &[
    Job {
        role: "Technical Project Manager",
        company: "Media.ventive",
        period: "Jun 2025 – Present · Remote, Germany",
        details: &[
            "I conduct technical reviews for 50+ client websites focusing on performance, SEO, \
             and code quality.",
            "I identify and document issues that improved client satisfaction by 20%.",
        ],
    },
    Job {
        role: "Software Engineer (Freelance)",
        company: "Independent",
        period: "Nov 2024 – Jun 2025 · Remote, Germany",
        details: &[
            "I developed web and mobile apps using React, React Native, and Node.js.",
            "I implemented offline sync and RESTful APIs, improving retention in \
             low-connectivity areas.",
        ],
    },
    Job {
        role: "Frontend Semi-Senior Developer",
        company: "Galileo Financial Technologies",
        period: "Aug 2021 – Jan 2024 · Remote, Ecuador",
        details: &[
            "I delivered performant web/mobile apps with React and Redux, reducing \
             cross-platform bugs.",
            "I achieved 80%+ unit test coverage with Jest and SonarCloud for maintainable \
             releases.",
        ],
    },
    Job {
        role: "Software Developer",
        company: "EdiLoja Cia. Ltda.",
        period: "Jan 2020 – Aug 2021 · Loja, Ecuador",
        details: &[
            "I built internal full-stack platforms with clean architecture and user-centric \
             interfaces.",
            "I collaborated with cross-functional teams to deliver reliable solutions.",
        ],
    },
];

#[derive(Clone, Copy, PartialEq)]
pub struct School {
    pub school: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub desc: &'static str,
}

pub const EDUCATION: &[School] = &[
    School {
        school: "Masterschool",
        degree: "Software Engineering",
        period: "Jan 2025 – Present",
        desc: "Hands-on program building full-stack apps with JavaScript, React, Node.js, and \
               SQL. Emphasis on OOP, TDD, and CI/CD.",
    },
    School {
        school: "Universidad Técnica Particular de Loja",
        degree: "Bachelor's in Computer Systems Engineering",
        period: "Sept 2013 – Dec 2019",
        desc: "Focused on algorithms, system architecture, and network applications with \
               hardware-software integration.",
    },
];

#[derive(Clone, Copy, PartialEq)]
pub struct Course {
    pub title: &'static str,
    pub provider: &'static str,
    pub period: &'static str,
    pub desc: &'static str,
}

pub const COURSES: &[Course] = &[
    Course {
        title: "Advanced React and Redux",
        provider: "Udemy",
        period: "2024",
        desc: "Deep dive into component composition, performance optimization, hooks, and \
               advanced state management with Redux Toolkit.",
    },
    Course {
        title: "Node.js, Express & MongoDB Bootcamp",
        provider: "Udemy",
        period: "2023",
        desc: "Comprehensive backend development course focusing on REST APIs, authentication, \
               and database modeling.",
    },
    Course {
        title: "TypeScript Masterclass",
        provider: "Udemy",
        period: "2023",
        desc: "Learned how to design robust, type-safe applications with advanced TypeScript \
               generics and interfaces.",
    },
    Course {
        title: "React Native – The Practical Guide",
        provider: "Udemy",
        period: "2022",
        desc: "Developed and deployed mobile apps with React Native, focusing on navigation, \
               state management, and native modules.",
    },
];
