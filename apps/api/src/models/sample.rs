//! Demonstration resume served to new editors.
//!
//! Ids and the timestamp are fixed so repeated calls produce identical documents.

use chrono::{TimeZone, Utc};

use crate::models::resume::{
    Header, Resume, Section, SkillCategory, SkillsSection, StandardEntry, StandardSection,
};

fn entry(id: &str, title: &str, organization: &str, date_range: &str, bullets: &[&str]) -> StandardEntry {
    StandardEntry {
        id: id.to_string(),
        title: title.to_string(),
        organization: Some(organization.to_string()),
        date_range: Some(date_range.to_string()),
        bullet_points: bullets.iter().map(|b| b.to_string()).collect(),
    }
}

fn category(id: &str, name: &str, skills: &[&str]) -> SkillCategory {
    SkillCategory {
        id: id.to_string(),
        category_name: name.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn sample_resume() -> Resume {
    let education = StandardSection {
        id: "section-education-001".to_string(),
        section_name: "Education".to_string(),
        order: 0,
        entries: vec![entry(
            "entry-edu-001",
            "State University",
            "Bachelor of Science in Computer Science",
            "May 2019",
            &["Relevant Coursework: Data Structures, Algorithms, Database Systems, Web Development, Machine Learning"],
        )],
    };

    let experience = StandardSection {
        id: "section-experience-001".to_string(),
        section_name: "Experience".to_string(),
        order: 1,
        entries: vec![
            entry(
                "entry-exp-001",
                "Tech Company Inc.",
                "Senior Software Engineer",
                "Jan 2022 -- Present",
                &[
                    "Led development of microservices architecture serving 1M+ daily active users, reducing latency by 40%",
                    "Mentored team of 5 junior developers, improving code review efficiency and reducing bug rate by 25%",
                    "Implemented CI/CD pipeline reducing deployment time from 2 hours to 15 minutes",
                ],
            ),
            entry(
                "entry-exp-002",
                "Startup Labs",
                "Software Engineer",
                "Jun 2019 -- Dec 2021",
                &[
                    "Built RESTful APIs using Node.js and Express, handling 50K requests per minute with 99.9% uptime",
                    "Developed responsive web applications using React and TypeScript for 100K+ monthly users",
                    "Collaborated with product team to define technical requirements and deliver features on schedule",
                ],
            ),
        ],
    };

    let projects = StandardSection {
        id: "section-projects-001".to_string(),
        section_name: "Projects".to_string(),
        order: 2,
        entries: vec![
            entry(
                "entry-proj-001",
                "E-Commerce Platform",
                "Next.js, PostgreSQL, Stripe, Tailwind CSS",
                "",
                &[
                    "Full-stack e-commerce application with user authentication, shopping cart, and payment processing",
                    "Implemented server-side rendering for SEO optimization, achieving 95+ Lighthouse score",
                    "Deployed on Vercel with automated CI/CD, handling 10K+ monthly transactions",
                ],
            ),
            entry(
                "entry-proj-002",
                "Real-time Chat Application",
                "React, Socket.io, Node.js, MongoDB",
                "",
                &[
                    "Built real-time messaging platform supporting 1000+ concurrent users with WebSocket connections",
                    "Implemented end-to-end encryption for secure message transmission",
                    "Added features including group chats, file sharing, and message search functionality",
                ],
            ),
        ],
    };

    let skills = SkillsSection {
        id: "section-skills-001".to_string(),
        section_name: "Technical Skills".to_string(),
        order: 3,
        categories: vec![
            category("cat-skills-001", "Languages", &["JavaScript", "TypeScript", "Python", "Java", "SQL", "HTML/CSS"]),
            category("cat-skills-002", "Front-end", &["React", "Next.js", "Vue.js", "Tailwind CSS", "Redux"]),
            category("cat-skills-003", "Back-end", &["Node.js", "Express", "Django", "FastAPI", "GraphQL"]),
            category("cat-skills-004", "Databases & ORMs", &["PostgreSQL", "MongoDB", "Redis", "Prisma", "Mongoose"]),
            category("cat-skills-005", "DevOps & Infrastructure", &["Docker", "AWS", "Vercel", "GitHub Actions", "Linux"]),
            category("cat-skills-006", "Tools & Platforms", &["Git", "VS Code", "Figma", "Postman", "Jira"]),
        ],
    };

    Resume {
        id: "sample-resume-001".to_string(),
        header: Header {
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@email.com".to_string(),
            phone: Some("(555) 123-4567".to_string()),
            linked_in: Some("https://linkedin.com/in/alexjohnson".to_string()),
            github: Some("https://github.com/alexjohnson".to_string()),
            use_icons: true,
        },
        sections: vec![
            Section::Standard(education),
            Section::Standard(experience),
            Section::Standard(projects),
            Section::Skills(skills),
        ],
        last_modified: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_default(),
    }
}
