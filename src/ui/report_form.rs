use crate::app::IncidentAtlasApp;
use crate::model::Severity;
use eframe::egui;

pub fn report_form(ui: &mut egui::Ui, app: &mut IncidentAtlasApp) {
    let mut submit = false;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("Report New Incident").strong().size(18.0));
        ui.add_space(8.0);

        ui.label("Title");
        ui.add(
            egui::TextEdit::singleline(&mut app.form.title)
                .hint_text("Enter incident title")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);

        ui.label("Description");
        ui.add(
            egui::TextEdit::multiline(&mut app.form.description)
                .hint_text("Describe the incident")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);

        ui.label("Severity");
        egui::ComboBox::from_id_source("report_severity")
            .selected_text(app.form.severity.label())
            .show_ui(ui, |ui| {
                for sev in Severity::ALL {
                    ui.selectable_value(&mut app.form.severity, sev, sev.label());
                }
            });
        ui.add_space(10.0);

        if ui.button("Submit Report").clicked() {
            submit = true;
        }
    });

    if submit {
        app.submit_report();
    }
}
