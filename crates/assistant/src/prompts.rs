//! System instruction for the portfolio assistant.
//!
//! The whole content table is flattened into labelled plain-text sections so
//! the model can answer from it. Built fresh for every session.

use shared::content::Portfolio;

/// Get the complete system instruction for a portfolio
pub fn get_system_instruction(portfolio: &Portfolio) -> String {
    let info = portfolio.personal;
    let first = info.first_name();

    format!(
        r#"You are a professional and friendly AI assistant for {name}'s portfolio website.
Your role is to answer visitor questions about {first}'s skills, experience, projects, and education based strictly on the provided context.

Context Data:
Name: {name}
Role: {role}
Summary: {summary}
Location: {location}
Email: {email}
Phone: {phone}

Skills:
{skills}

Experience:
{experience}

Projects:
{projects}

Education:
{education}

Certifications: {certifications}

Extracurricular: {extracurricular}

Guidelines:
{guidelines}
"#,
        name = info.name,
        first = first,
        role = info.role,
        summary = info.summary,
        location = info.location,
        email = info.email,
        phone = info.phone,
        skills = format_skills(portfolio),
        experience = format_experience(portfolio),
        projects = format_projects(portfolio),
        education = format_education(portfolio),
        certifications = portfolio.certifications.join(", "),
        extracurricular = format_extracurricular(portfolio),
        guidelines = format_guidelines(portfolio),
    )
}

fn format_skills(portfolio: &Portfolio) -> String {
    portfolio
        .skills
        .iter()
        .map(|c| format!("- {}: {}", c.title, c.skills.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_experience(portfolio: &Portfolio) -> String {
    portfolio
        .experiences
        .iter()
        .map(|e| {
            let place = e
                .location
                .map(|l| format!(", {}", l))
                .unwrap_or_default();
            format!(
                "- {} at {} ({}, {}{}): {}",
                e.role,
                e.company,
                e.date,
                e.kind,
                place,
                e.description.join(" ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_projects(portfolio: &Portfolio) -> String {
    portfolio
        .projects
        .iter()
        .map(|p| {
            format!(
                "- {} ({}, {}): {} Technologies: {}",
                p.title,
                p.role,
                p.date,
                p.description.join(" "),
                p.tech.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_education(portfolio: &Portfolio) -> String {
    portfolio
        .education
        .iter()
        .map(|e| {
            format!(
                "- {} at {} ({}), Score: {}, Location: {}",
                e.degree, e.institution, e.date, e.score, e.location
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_extracurricular(portfolio: &Portfolio) -> String {
    let x = portfolio.extracurricular;
    format!(
        "{} at {} ({}): {}",
        x.role,
        x.org,
        x.date,
        x.description.join(" ")
    )
}

/// Fixed behavioural rules; only the owner's first name varies
fn format_guidelines(portfolio: &Portfolio) -> String {
    let first = portfolio.personal.first_name();
    format!(
        "1. Be concise, enthusiastic, and professional.
2. If asked about contact info, provide the email or mention the contact section.
3. If asked about something not in the context, politely say you don't have that information and suggest contacting {first} directly.
4. Keep responses relatively short (under 100 words) unless detailed explanation is asked.
5. Be proactive! After answering a user's question, offer to share specific details about a related project (like the Sangwan Trading Institute Website) or a specific skill (like React or Python) to keep the conversation engaging.
6. Always aim to highlight {first}'s strengths in web development and problem-solving.",
        first = first
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::content::{Extracurricular, PersonalInfo, EXTRACURRICULAR, PERSONAL_INFO};

    #[test]
    fn test_instruction_covers_every_record() {
        let portfolio = Portfolio::builtin();
        let text = get_system_instruction(&portfolio);

        assert!(text.starts_with(
            "You are a professional and friendly AI assistant for Anurag Kumar Singh's portfolio website."
        ));
        for category in portfolio.skills {
            assert!(text.contains(&format!("- {}: {}", category.title, category.skills.join(", "))));
        }
        for job in portfolio.experiences {
            assert!(text.contains(&format!("- {} at {}", job.role, job.company)));
        }
        for project in portfolio.projects {
            assert!(text.contains(project.title));
        }
        for school in portfolio.education {
            assert!(text.contains(&format!("Score: {}, Location: {}", school.score, school.location)));
        }
        assert!(text.contains("Certifications: Web Development – ICS, Python – GDSC"));
        assert!(text.contains("Extracurricular: Secretary at Rotaract Club, Guru Nanak College"));
        assert!(text.contains("Email: anuragsingh8434845379@gmail.com"));
    }

    #[test]
    fn test_guidelines_are_fixed_apart_from_first_name() {
        let text = get_system_instruction(&Portfolio::builtin());
        assert!(text.contains("1. Be concise, enthusiastic, and professional."));
        assert!(text.contains("4. Keep responses relatively short (under 100 words)"));
        assert!(text.contains("suggest contacting Anurag directly"));
        assert!(text.contains(
            "5. Be proactive! After answering a user's question, offer to share specific details about a related project (like the Sangwan Trading Institute Website) or a specific skill (like React or Python) to keep the conversation engaging."
        ));
        assert!(text.contains(
            "6. Always aim to highlight Anurag's strengths in web development and problem-solving."
        ));
    }

    #[test]
    fn test_instruction_is_deterministic() {
        let p = Portfolio::builtin();
        assert_eq!(get_system_instruction(&p), get_system_instruction(&p));
    }

    #[test]
    fn test_sparse_portfolio_keeps_fixed_guidelines() {
        let person: &'static PersonalInfo = Box::leak(Box::new(PersonalInfo {
            name: "Grace Hopper",
            ..PERSONAL_INFO
        }));
        let extras: &'static Extracurricular = Box::leak(Box::new(Extracurricular {
            description: &[],
            ..EXTRACURRICULAR
        }));
        let portfolio = Portfolio {
            personal: person,
            skills: &[],
            experiences: &[],
            projects: &[],
            education: &[],
            certifications: &[],
            extracurricular: extras,
            socials: &[],
        };
        let text = get_system_instruction(&portfolio);
        assert!(text.contains("Grace Hopper's portfolio website"));
        assert!(text.contains("suggest contacting Grace directly"));
        assert!(text.contains("(like React or Python)"));
        assert!(text.contains("6. Always aim to highlight Grace's strengths in web development and problem-solving."));
    }
}
