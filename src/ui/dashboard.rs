use crate::app::IncidentAtlasApp;
use crate::model::{SeverityFilter, SortOrder, project};
use crate::ui::card::{CardAction, incident_card};
use eframe::egui;

pub fn dashboard(ui: &mut egui::Ui, app: &mut IncidentAtlasApp) {
    ui.horizontal_wrapped(|ui| {
        egui::ComboBox::from_id_source("severity_filter")
            .width(160.0)
            .selected_text(app.ui.severity_filter.label())
            .show_ui(ui, |ui| {
                for opt in SeverityFilter::OPTIONS {
                    ui.selectable_value(&mut app.ui.severity_filter, opt, opt.label());
                }
            });

        egui::ComboBox::from_id_source("sort_order")
            .width(160.0)
            .selected_text(app.ui.sort_order.label())
            .show_ui(ui, |ui| {
                for opt in SortOrder::OPTIONS {
                    ui.selectable_value(&mut app.ui.sort_order, opt, opt.label());
                }
            });
    });

    ui.add_space(10.0);

    let mut pending = None;
    egui::ScrollArea::vertical()
        .id_source("incident_cards_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let visible = project(
                app.incidents.list(),
                app.ui.severity_filter,
                app.ui.sort_order,
            );

            if visible.is_empty() {
                ui.label("No incidents match the current filter.");
                return;
            }

            for incident in visible {
                let expanded = app.ui.is_expanded(incident.id);
                if let Some(action) = incident_card(ui, incident, expanded) {
                    pending = Some((incident.id, action));
                }
                ui.add_space(8.0);
            }
        });

    match pending {
        Some((id, CardAction::ToggleDetails)) => app.ui.toggle_expanded(id),
        Some((id, CardAction::Delete)) => app.delete_incident(id),
        None => {}
    }
}
