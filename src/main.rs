use fltk::{app, prelude::*};

use folio_desk::app::domain::{AppSettings, Message, Portfolio};
use folio_desk::app::state::AppState;
use folio_desk::logging;
use folio_desk::ui::main_window::build_main_window;

fn main() {
    logging::init();
    logging::install_panic_hook();

    let settings = AppSettings::load();
    let portfolio = Portfolio::load();
    tracing::info!(
        "loaded portfolio for {} ({} projects, {} certificates)",
        portfolio.owner.name,
        portfolio.projects.len(),
        portfolio.certificates.len()
    );

    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let widgets = build_main_window(&settings, &portfolio, &sender);
    let mut state = AppState::new(widgets, settings, portfolio, sender);
    state.widgets.wind.show();
    state.bootstrap();

    while fltk_app.wait() {
        if let Some(message) = receiver.recv() {
            if let Err(error) = state.dispatch(message) {
                tracing::error!("dispatch failed: {error}");
                state.report_degraded();
            }
        }
    }
}
