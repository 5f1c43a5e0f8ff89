use eframe::{CreationContext, NativeOptions, egui};
use passclock::clock_app::ClockApp;
use passclock::logging;

fn main() -> eframe::Result<()> {
    logging::init();
    tracing::info!("starting digital clock");

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 300.0])
            .with_min_inner_size([200.0, 120.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Digital Clock",
        native_options,
        Box::new(|_cc: &CreationContext| Ok(Box::new(ClockApp::default()))),
    )
}
