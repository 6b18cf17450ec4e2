use crate::model::Incident;
use crate::util::time::{format_long_date, format_utc_minute};
use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    ToggleDetails,
    Delete,
}

pub fn incident_card(ui: &mut egui::Ui, incident: &Incident, expanded: bool) -> Option<CardAction> {
    let mut action = None;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&incident.title).strong().size(16.0));
                ui.horizontal(|ui| {
                    severity_badge(ui, incident);
                    ui.label(format_long_date(incident.reported_at))
                        .on_hover_text(format_utc_minute(incident.reported_at));
                });
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let delete = egui::Button::new(
                    egui::RichText::new("Delete").color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::from_rgb(200, 50, 50));
                if ui.add(delete).on_hover_text("Delete incident").clicked() {
                    action = Some(CardAction::Delete);
                }

                let toggle = if expanded { "Hide Details" } else { "View Details" };
                if ui.button(toggle).clicked() {
                    action = Some(CardAction::ToggleDetails);
                }
            });
        });

        if expanded {
            ui.separator();
            ui.add(egui::Label::new(&incident.description).wrap(true));
        }
    });

    action
}

fn severity_badge(ui: &mut egui::Ui, incident: &Incident) {
    let color = crate::ui::severity_color(incident.severity);
    egui::Frame::none()
        .fill(color.gamma_multiply(0.2))
        .rounding(8.0)
        .inner_margin(egui::Margin::symmetric(6.0, 1.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(incident.severity.label())
                    .color(color)
                    .small()
                    .strong(),
            );
        });
}
