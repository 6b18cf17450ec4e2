mod card;
mod dashboard;
mod report_form;

use std::time::Instant;

use crate::app::{IncidentAtlasApp, NoticeKind};
use crate::model::Severity;
use eframe::egui;

pub fn render_app(ctx: &egui::Context, frame: &mut eframe::Frame, app: &mut IncidentAtlasApp) {
    top_bar(ctx, frame, app);
    status_bar(ctx, app);

    egui::CentralPanel::default().show(ctx, |ui| {
        header(ui, app);
        ui.add_space(12.0);

        if app.ui.show_form {
            report_form::report_form(ui, app);
            ui.add_space(12.0);
        }

        dashboard::dashboard(ui, app);
    });

    about_window(ctx, app);
    notices_overlay(ctx, app);
}

fn top_bar(ctx: &egui::Context, frame: &mut eframe::Frame, app: &mut IncidentAtlasApp) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Report New Incident").clicked() {
                    app.ui.show_form = true;
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    let _ = frame;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Collapse all").clicked() {
                    app.ui.expanded.clear();
                    ui.close_menu();
                }
                if ui.button("Reset zoom").clicked() {
                    ctx.set_zoom_factor(1.0);
                    ui.close_menu();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    app.ui.show_about = true;
                    ui.close_menu();
                }
            });
        });
    });
}

fn header(ui: &mut egui::Ui, app: &mut IncidentAtlasApp) {
    ui.heading("AI Safety Incident Dashboard");
    ui.label("Track and manage AI safety incidents");
    ui.add_space(8.0);

    let label = if app.ui.show_form {
        "Hide Form"
    } else {
        "+ Report New Incident"
    };
    if ui.button(label).clicked() {
        app.ui.show_form = !app.ui.show_form;
    }
}

fn about_window(ctx: &egui::Context, app: &mut IncidentAtlasApp) {
    if !app.ui.show_about {
        return;
    }

    egui::Window::new("About Incident Atlas")
        .open(&mut app.ui.show_about)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("Report, filter and triage AI safety incidents.");
            ui.label("Incidents live in memory and are discarded when the window closes.");
        });
}

fn status_bar(ctx: &egui::Context, app: &mut IncidentAtlasApp) {
    let counts = app.counts.get();
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Incidents: {}", counts.total()));
            ui.separator();
            for sev in Severity::ALL {
                ui.colored_label(
                    severity_color(sev),
                    format!("{} {}", sev.label(), counts.get(sev)),
                );
            }
            ui.separator();
            ui.label(format!(
                "View: {} / {}",
                app.ui.severity_filter.label(),
                app.ui.sort_order.label()
            ));
        });
    });
}

fn notices_overlay(ctx: &egui::Context, app: &mut IncidentAtlasApp) {
    if let Some(remaining) = app.notices.prune(Instant::now()) {
        ctx.request_repaint_after(remaining);
    }
    if app.notices.is_empty() {
        return;
    }

    let mut dismiss = None;
    egui::Area::new(egui::Id::new("notices"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -40.0])
        .show(ctx, |ui| {
            for (idx, notice) in app.notices.iter().enumerate() {
                let accent = match notice.kind {
                    NoticeKind::Success => ui.visuals().text_color(),
                    NoticeKind::Error => egui::Color32::from_rgb(255, 70, 70),
                };
                let response = egui::Frame::popup(ui.style())
                    .show(ui, |ui| {
                        ui.set_min_width(240.0);
                        ui.label(egui::RichText::new(&notice.title).strong().color(accent));
                        ui.label(&notice.body);
                    })
                    .response
                    .interact(egui::Sense::click())
                    .on_hover_text("Click to dismiss");
                if response.clicked() {
                    dismiss = Some(idx);
                }
                ui.add_space(4.0);
            }
        });

    if let Some(idx) = dismiss {
        app.notices.dismiss(idx);
    }
}

pub fn severity_color(sev: Severity) -> egui::Color32 {
    match sev {
        Severity::Low => egui::Color32::from_rgb(70, 170, 90),
        Severity::Medium => egui::Color32::from_rgb(230, 170, 0),
        Severity::High => egui::Color32::from_rgb(255, 70, 70),
    }
}
