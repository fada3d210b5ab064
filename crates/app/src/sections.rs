//! Page sections: navbar, hero, about, skills, experience, projects, contact, footer

use chrono::Datelike;
use egui::{Align, Color32, RichText, Ui};
use services::contact::SubmitStatus;
use services::links;
use std::time::Instant;

use crate::state::{AppState, Section};
use crate::style::{accent, muted};
use crate::utils::open_link;

const SUCCESS_GREEN: Color32 = Color32::from_rgb(60, 170, 90);
const ERROR_RED: Color32 = Color32::from_rgb(220, 70, 70);

pub fn navbar(ui: &mut Ui, s: &mut AppState) {
    let dark = s.theme.is_dark();
    ui.horizontal(|ui| {
        if ui
            .add(
                egui::Button::new(
                    RichText::new(s.portfolio.personal.name)
                        .size(18.0)
                        .strong()
                        .color(accent(dark)),
                )
                .frame(false),
            )
            .clicked()
        {
            s.scroll_to = Some(Section::Home);
        }

        ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
            let icon = if dark { "☀" } else { "🌙" };
            if ui
                .button(icon)
                .on_hover_text(if dark { "Switch to light mode" } else { "Switch to dark mode" })
                .clicked()
            {
                s.toggle_theme(ui.ctx());
            }
            for section in Section::NAV.iter().rev() {
                if ui.selectable_label(false, section.label()).clicked() {
                    s.scroll_to = Some(*section);
                }
            }
        });
    });
}

/// Section heading; scrolls itself into view when it is the nav target
fn heading(ui: &mut Ui, s: &mut AppState, section: Section, title: &str) {
    ui.add_space(32.0);
    let response = ui.heading(RichText::new(title).size(26.0).strong());
    if s.scroll_to == Some(section) {
        response.scroll_to_me(Some(Align::TOP));
        s.scroll_to = None;
    }
    ui.separator();
}

fn social_row(ui: &mut Ui, s: &AppState) {
    ui.horizontal(|ui| {
        for social in s.portfolio.socials {
            if ui
                .button(format!("{} {}", social.icon, social.platform))
                .on_hover_text(social.url)
                .clicked()
            {
                open_link(social.url);
            }
        }
    });
}

pub fn hero(ui: &mut Ui, s: &mut AppState) {
    let info = s.portfolio.personal;
    let dark = s.theme.is_dark();

    let response = ui.label(RichText::new("Hello, I'm").size(16.0).color(muted(dark)));
    if s.scroll_to == Some(Section::Home) {
        response.scroll_to_me(Some(Align::TOP));
        s.scroll_to = None;
    }
    ui.label(RichText::new(info.name).size(40.0).strong());
    ui.label(RichText::new(info.role).size(22.0).color(accent(dark)));
    ui.add_space(8.0);
    ui.label(info.summary);
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        if ui.button(RichText::new("Contact Me").strong()).clicked() {
            s.scroll_to = Some(Section::Contact);
        }
        if ui
            .button("Download CV")
            .on_hover_text("Open the PDF résumé")
            .clicked()
        {
            open_link(&s.resume_location());
        }
    });
    social_row(ui, s);
}

pub fn about(ui: &mut Ui, s: &mut AppState) {
    heading(ui, s, Section::About, "About Me");
    let dark = s.theme.is_dark();

    ui.label(RichText::new("Education").size(18.0).strong());
    for school in s.portfolio.education {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(school.degree).strong());
            ui.label(school.institution);
            ui.label(
                RichText::new(format!("{} · {} · {}", school.date, school.location, school.score))
                    .color(muted(dark)),
            );
        });
    }

    ui.add_space(12.0);
    ui.label(RichText::new("Certifications").size(18.0).strong());
    for cert in s.portfolio.certifications {
        ui.label(format!("• {}", cert));
    }

    ui.add_space(12.0);
    let extra = s.portfolio.extracurricular;
    ui.label(RichText::new("Extracurricular").size(18.0).strong());
    ui.label(RichText::new(format!("{} · {}", extra.role, extra.org)).strong());
    ui.label(RichText::new(extra.date).color(muted(dark)));
    for line in extra.description {
        ui.label(format!("• {}", line));
    }
}

pub fn skills(ui: &mut Ui, s: &mut AppState) {
    heading(ui, s, Section::Skills, "Skills");
    let dark = s.theme.is_dark();
    for category in s.portfolio.skills {
        ui.label(RichText::new(category.title).size(18.0).strong().color(accent(dark)));
        ui.horizontal_wrapped(|ui| {
            for skill in category.skills {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.label(*skill);
                });
            }
        });
        ui.add_space(8.0);
    }
}

pub fn experience(ui: &mut Ui, s: &mut AppState) {
    heading(ui, s, Section::Experience, "Experience");
    let dark = s.theme.is_dark();
    for job in s.portfolio.experiences {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(job.role).size(17.0).strong());
            ui.label(RichText::new(job.company).color(accent(dark)));
            let mut meta = format!("{} · {}", job.date, job.kind);
            if let Some(location) = job.location {
                meta.push_str(" · ");
                meta.push_str(location);
            }
            ui.label(RichText::new(meta).color(muted(dark)));
            for line in job.description {
                ui.label(format!("• {}", line));
            }
        });
        ui.add_space(6.0);
    }
}

pub fn projects(ui: &mut Ui, s: &mut AppState) {
    heading(ui, s, Section::Projects, "Projects");
    let dark = s.theme.is_dark();
    for project in s.portfolio.projects {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(project.title).size(17.0).strong());
            ui.label(
                RichText::new(format!("{} · {}", project.role, project.date)).color(muted(dark)),
            );
            for line in project.description {
                ui.label(format!("• {}", line));
            }
            ui.horizontal_wrapped(|ui| {
                for tech in project.tech {
                    ui.label(RichText::new(*tech).small().color(accent(dark)));
                }
            });
            ui.horizontal(|ui| {
                if let Some(repo) = project.github {
                    if ui.button("Code").clicked() {
                        open_link(&links::repository_url(repo));
                    }
                }
                if let Some(live) = project.link {
                    if ui.button("Live Demo").clicked() {
                        open_link(live);
                    }
                }
            });
        });
        ui.add_space(6.0);
    }
}

pub fn contact(ui: &mut Ui, s: &mut AppState) {
    heading(ui, s, Section::Contact, "Get In Touch");
    let info = s.portfolio.personal;
    let now = Instant::now();

    ui.horizontal_wrapped(|ui| {
        if ui.link(format!("✉ {}", info.email)).clicked() {
            open_link(&links::mailto_link(info.email));
        }
        let copy_label = if s.email_recently_copied(now) { "Copied!" } else { "Copy" };
        if ui.small_button(copy_label).clicked() {
            s.copy_email(ui.ctx());
        }
    });
    if ui.link(format!("☎ {}", info.phone)).clicked() {
        open_link(&links::tel_link(info.phone));
    }
    if ui.link(format!("📍 {}", info.location)).clicked() {
        open_link(&links::maps_link(info.location));
    }
    ui.add_space(12.0);

    let form = &mut s.contact;
    let busy = form.is_submitting();
    egui::Grid::new("contact_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Name");
            ui.add_enabled(
                !busy,
                egui::TextEdit::singleline(&mut form.name).hint_text("Your name"),
            );
            ui.end_row();

            ui.label("Email");
            let email = ui.add_enabled(
                !busy,
                egui::TextEdit::singleline(&mut form.email).hint_text("you@example.com"),
            );
            if email.changed() {
                form.clear_email_error();
            }
            ui.end_row();

            ui.label("Message");
            ui.add_enabled(
                !busy,
                egui::TextEdit::multiline(&mut form.message)
                    .hint_text("How can I help?")
                    .desired_rows(5),
            );
            ui.end_row();
        });

    if let Some(err) = form.email_error() {
        ui.label(RichText::new(err.to_string()).color(ERROR_RED));
    }

    let whatsapp = links::whatsapp_link(info.phone, info.first_name(), &form.message);
    let mut submit = false;
    ui.horizontal(|ui| {
        let label = if busy { "Sending..." } else { "Send Message" };
        if ui.add_enabled(!busy, egui::Button::new(label)).clicked() {
            submit = true;
        }
        if busy {
            ui.spinner();
        }
        if ui.button("Chat on WhatsApp").clicked() {
            open_link(&whatsapp);
        }
    });

    match form.status() {
        SubmitStatus::Success => {
            ui.label(
                RichText::new("Message sent successfully! I'll get back to you soon.")
                    .color(SUCCESS_GREEN),
            );
        }
        SubmitStatus::Error => {
            ui.label(
                RichText::new("Something went wrong. Please try again or email me directly.")
                    .color(ERROR_RED),
            );
        }
        SubmitStatus::Idle => {}
    }
    if submit {
        s.submit_contact(ui.ctx());
    }
}

pub fn footer(ui: &mut Ui, s: &AppState) {
    ui.add_space(32.0);
    ui.separator();
    ui.vertical_centered(|ui| {
        social_row(ui, s);
        ui.label(
            RichText::new(format!(
                "© {} {}. All rights reserved.",
                chrono::Local::now().year(),
                s.portfolio.personal.name
            ))
            .color(muted(s.theme.is_dark())),
        );
    });
    ui.add_space(16.0);
}
