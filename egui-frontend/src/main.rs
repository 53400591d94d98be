use eframe::egui;
use log::{error, info};

mod ui;

use ui::TeacherDashboardApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging; RUST_LOG controls verbosity
    env_logger::init();
    info!("Starting Teacher Dashboard egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([960.0, 640.0])
            .with_title("EduManage - Teacher Management")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "EduManage - Teacher Management",
        options,
        Box::new(|_cc| match backend::initialize_backend() {
            Ok((backend, snapshot)) => {
                info!("Successfully initialized Teacher Dashboard app");
                Ok(Box::new(TeacherDashboardApp::new(backend, snapshot)))
            }
            Err(e) => {
                error!("Failed to initialize app: {:#}", e);
                Err(format!("Failed to initialize app: {:#}", e).into())
            }
        }),
    )
}
