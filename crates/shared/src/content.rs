//! Static portfolio content.
//!
//! Everything the site shows lives in compile-time tables. Views and the chat
//! prompt builder read them through [`Portfolio`], which keeps the tables
//! swappable in tests.

/// Who the portfolio belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub summary: &'static str,
    /// Path of the profile picture relative to the asset root
    pub profile_image: &'static str,
    /// Downloadable CV: a URL, or a path relative to the asset root
    pub resume: &'static str,
}

impl PersonalInfo {
    /// First word of the name, used in greetings
    pub fn first_name(&self) -> &'static str {
        self.name.split_whitespace().next().unwrap_or(self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub date: &'static str,
    /// Employment type, e.g. "Freelance" or "Internship"
    pub kind: &'static str,
    pub location: Option<&'static str>,
    pub description: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub role: &'static str,
    pub date: &'static str,
    pub description: &'static [&'static str],
    pub tech: &'static [&'static str],
    /// Source repository, possibly without a scheme ("github.com/...")
    pub github: Option<&'static str>,
    /// Live demo
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub date: &'static str,
    pub score: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extracurricular {
    pub role: &'static str,
    pub org: &'static str,
    pub date: &'static str,
    pub description: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: &'static str,
    pub url: &'static str,
    /// Short glyph shown next to the platform name
    pub icon: &'static str,
}

/// Read-only view over the whole content table
#[derive(Debug, Clone, Copy)]
pub struct Portfolio {
    pub personal: &'static PersonalInfo,
    pub skills: &'static [SkillCategory],
    pub experiences: &'static [Experience],
    pub projects: &'static [Project],
    pub education: &'static [Education],
    pub certifications: &'static [&'static str],
    pub extracurricular: &'static Extracurricular,
    pub socials: &'static [SocialLink],
}

impl Portfolio {
    /// The content compiled into this build
    pub fn builtin() -> Self {
        Self {
            personal: &PERSONAL_INFO,
            skills: SKILLS,
            experiences: EXPERIENCES,
            projects: PROJECTS,
            education: EDUCATION,
            certifications: CERTIFICATIONS,
            extracurricular: &EXTRACURRICULAR,
            socials: SOCIAL_LINKS,
        }
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::builtin()
    }
}

pub static PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Anurag Kumar Singh",
    role: "Web Developer",
    location: "Dhanbad, Jharkhand",
    email: "anuragsingh8434845379@gmail.com",
    phone: "+91 8434845379",
    summary: "Enthusiastic BCA student with a strong foundation in web development fundamentals and programming. Eager to learn modern technologies like React and SEO, and to apply problem-solving and teamwork skills in real-world projects.",
    profile_image: "assets/profile.jpg",
    resume: "assets/Anurag_Kumar_Singh_Resume.pdf",
};

pub static SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        skills: &["HTML5", "CSS3", "JavaScript", "React.js", "Bootstrap", "Tailwind CSS"],
    },
    SkillCategory {
        title: "Backend & Database",
        skills: &["Python", "Java", "Django (Learning)", "SQL", "MySQL"],
    },
    SkillCategory {
        title: "Tools & Others",
        skills: &["VS Code", "GitHub", "MS Office", "Responsive Design", "SEO Basics"],
    },
];

pub static EXPERIENCES: &[Experience] = &[
    Experience {
        company: "BroTech Pvt. Solution",
        role: "Website Developer",
        date: "Feb 2025",
        kind: "Freelance",
        location: None,
        description: &[
            "Developed and launched the company's official website ensuring modern standards and cross-device compatibility.",
            "Optimized site performance and SEO structure.",
        ],
    },
    Experience {
        company: "Yhills",
        role: "Web Development Intern",
        date: "Mar 2024 – May 2024",
        kind: "Internship",
        location: None,
        description: &[
            "Enhanced front-end responsiveness and collaborated on client projects using GitHub.",
            "Worked with a team to debug and optimize web applications.",
        ],
    },
];

pub static PROJECTS: &[Project] = &[Project {
    title: "Sangwan Trading Institute Website",
    role: "Freelance Developer",
    date: "Apr 2025",
    description: &[
        "Designed and deployed a responsive, SEO-optimized website using HTML5, CSS3, Bootstrap 5, and JavaScript.",
        "Handled full deployment: domain registration, hosting setup, and SSL configuration.",
    ],
    tech: &["HTML5", "CSS3", "Bootstrap", "JavaScript"],
    github: Some("github.com/07anuragsingh/Sangwan.git"),
    link: None,
}];

pub static EDUCATION: &[Education] = &[
    Education {
        institution: "Guru Nanak College",
        degree: "BCA",
        date: "Sep 2022 – Sep 2025",
        score: "74.5%",
        location: "Dhanbad, Jharkhand",
    },
    Education {
        institution: "RKS Vidya Mandir",
        degree: "Intermediate",
        date: "Apr 2019 – May 2021",
        score: "92.50%",
        location: "Dhanbad, Jharkhand",
    },
    Education {
        institution: "St. Thomas High School",
        degree: "Matriculation",
        date: "Apr 2018 – May 2019",
        score: "91.33%",
        location: "Dhanbad, Jharkhand",
    },
];

pub static CERTIFICATIONS: &[&str] = &[
    "Web Development – ICS",
    "Python – GDSC",
    "Java – Infosys Springboard",
    "SQL – Udemy",
];

pub static EXTRACURRICULAR: Extracurricular = Extracurricular {
    role: "Secretary",
    org: "Rotaract Club, Guru Nanak College",
    date: "Apr 2024 – May 2025",
    description: &[
        "Organized and coordinated college-wide social and community events.",
        "Managed communication, event planning, and budgeting to improve engagement.",
    ],
};

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        platform: "GitHub",
        url: "https://github.com/07anuragsingh",
        icon: "</>",
    },
    SocialLink {
        platform: "LinkedIn",
        url: "https://www.linkedin.com/in/anurag-kumar-singh-64798724a/",
        icon: "in",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_populated() {
        let p = Portfolio::builtin();
        assert_eq!(p.personal.name, "Anurag Kumar Singh");
        assert_eq!(p.skills.len(), 3);
        assert_eq!(p.education.len(), 3);
        assert!(p.projects.iter().all(|proj| !proj.tech.is_empty()));
    }

    #[test]
    fn test_first_name() {
        assert_eq!(PERSONAL_INFO.first_name(), "Anurag");

        let single = PersonalInfo {
            name: "Cher",
            ..PERSONAL_INFO
        };
        assert_eq!(single.first_name(), "Cher");
    }
}
