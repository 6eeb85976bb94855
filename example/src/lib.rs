mod app;

use tessera_ui::EntryPoint;

use crate::app::app;

#[tessera_ui::entry]
pub fn run() -> EntryPoint {
    EntryPoint::new(app).package(tessera_components::ComponentsPackage)
}

#[cfg(not(target_os = "android"))]
pub fn desktop_main() {
    run()
        .run_desktop()
        .unwrap_or_else(|err| tracing::error!("app failed to run: {err}"));
}
