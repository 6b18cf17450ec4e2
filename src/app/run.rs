use crate::app::IncidentAtlasApp;
use crate::config::Config;
use eframe::egui;

pub fn run(config: Config) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Incident Atlas")
            .with_inner_size([960.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Incident Atlas",
        native_options,
        Box::new(move |_cc| Box::new(IncidentAtlasApp::new(&config))),
    )
}
