use eframe::{CreationContext, NativeOptions, egui};
use passclock::app::PassClockApp;
use passclock::logging;

fn main() -> eframe::Result<()> {
    logging::init();
    tracing::info!("starting password generator");

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([500.0, 380.0])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Secure Password Generator",
        native_options,
        Box::new(|cc: &CreationContext| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(PassClockApp::default()))
        }),
    )
}
