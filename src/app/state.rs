use fltk::app::Sender;
use fltk::prelude::*;

use crate::app::controllers::form::FormController;
use crate::app::controllers::modal::{PreviewPayload, certificate_payload, project_payload};
use crate::app::controllers::navigation::NavigationController;
use crate::app::controllers::notification::{NOTIFICATION_SECS, NotificationController};
use crate::app::controllers::scroll_effects::ScrollEffectsController;
use crate::app::controllers::theme::ThemeController;
use crate::app::domain::{AppSettings, FieldId, Message, Portfolio, Severity};
use crate::app::error::{AppError, Result};
use crate::app::infrastructure::platform;
use crate::app::infrastructure::timers::{Debouncer, schedule};
use crate::app::services::counters::COUNTER_STEP_SECS;
use crate::app::services::sections::{
    HEADER_ELEVATION_AT, SCROLL_FRAME_SECS, active_section, anchor_target,
};
use crate::app::services::submit::{self, FormPayload};
use crate::app::services::validation::FieldState;
use crate::ui::dialogs::preview::show_preview_dialog;
use crate::ui::main_window::MainWidgets;
use crate::ui::nav_bar::COLLAPSE_BELOW;
use crate::ui::theme::Palette;

/// How often the OS color-scheme signal is re-read while no explicit theme
/// choice exists.
const THEME_POLL_SECS: f64 = 30.0;

/// Quiet period before resize-driven relayout.
const RESIZE_DEBOUNCE_SECS: f64 = 0.25;

/// One settle tick coalesces a burst of scroll events.
const SCROLL_COALESCE_SECS: f64 = 0.016;

/// Delay between staggered reveals in one batch.
const REVEAL_STAGGER_SECS: f64 = 0.1;

pub struct AppState {
    pub widgets: MainWidgets,
    pub sender: Sender<Message>,
    settings: AppSettings,
    portfolio: Portfolio,
    palette: Palette,
    theme: ThemeController,
    nav: NavigationController,
    fx: ScrollEffectsController,
    form: FormController,
    notifications: NotificationController,
    resize_debounce: Debouncer,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        settings: AppSettings,
        portfolio: Portfolio,
        sender: Sender<Message>,
    ) -> Self {
        let system = platform::detect_system_theme();
        let theme = ThemeController::new(settings.theme_mode, system);
        let palette = Palette::for_theme(theme.effective());
        let fx = ScrollEffectsController::new(widgets.page.reveal_count());
        let form = FormController::new(portfolio.contact.endpoint.clone());

        Self {
            widgets,
            sender,
            settings,
            portfolio,
            palette,
            theme,
            nav: NavigationController::new(),
            fx,
            form,
            notifications: NotificationController::new(),
            resize_debounce: Debouncer::new(RESIZE_DEBOUNCE_SECS),
        }
    }

    /// First paint and the recurring schedules. Call once, after the window
    /// is shown.
    pub fn bootstrap(&mut self) {
        self.paint_theme();
        let collapsed = self.widgets.wind.w() < COLLAPSE_BELOW;
        self.nav.set_collapsed(collapsed);
        if self.theme.follows_system() {
            schedule(THEME_POLL_SECS, self.sender, Message::SystemThemeTick);
        }
        // Reveal whatever is already in view
        self.sender.send(Message::ScrollChanged);
    }

    pub fn dispatch(&mut self, message: Message) -> Result<()> {
        match message {
            // --- theme ---
            Message::ToggleTheme => {
                self.theme.toggle();
                self.paint_theme();
                self.settings.theme_mode = self.theme.mode();
                self.settings.save().map_err(AppError::Settings)?;
            }
            Message::SystemThemeTick => {
                if self.theme.follows_system() {
                    let system = platform::detect_system_theme();
                    if self.theme.system_update(system).is_some() {
                        self.paint_theme();
                    }
                    schedule(THEME_POLL_SECS, self.sender, Message::SystemThemeTick);
                }
            }

            // --- navigation ---
            Message::ToggleMenu => {
                let open = self.nav.toggle_menu();
                self.widgets.nav.set_menu_open(open);
            }
            Message::NavigateTo(id) => {
                if self.nav.close_menu() {
                    self.widgets.nav.set_menu_open(false);
                }
                let tops = self.widgets.page.section_tops();
                if let Some(&(_, top)) = tops.iter().find(|(section, _)| *section == id) {
                    let target = anchor_target(top, self.widgets.page.max_scroll());
                    let generation = self.fx.begin_scroll(self.widgets.page.scroll_y(), target);
                    schedule(
                        SCROLL_FRAME_SECS,
                        self.sender,
                        Message::SmoothScrollTick(generation),
                    );
                }
            }
            Message::SmoothScrollTick(generation) => {
                if let Some((position, done)) = self.fx.scroll_frame(generation) {
                    self.widgets.page.scroll_to(position);
                    if done {
                        self.recompute_scroll_effects();
                    } else {
                        schedule(
                            SCROLL_FRAME_SECS,
                            self.sender,
                            Message::SmoothScrollTick(generation),
                        );
                    }
                }
            }
            Message::ScrollChanged => {
                // Manual scrolling takes over from any animated jump
                if self.fx.scrolling() {
                    self.fx.cancel_scroll();
                }
                if self.fx.request_tick() {
                    schedule(SCROLL_COALESCE_SECS, self.sender, Message::ScrollSettled);
                }
            }
            Message::ScrollSettled => {
                self.fx.tick_done();
                self.recompute_scroll_effects();
            }
            Message::WindowResized => {
                let w = self.widgets.wind.w();
                self.widgets.toast.reposition(w);
                self.widgets.nav.relayout(w);
                if self.nav.set_collapsed(w < COLLAPSE_BELOW) {
                    self.widgets.nav.set_menu_open(self.nav.menu_open());
                }
                self.resize_debounce
                    .trigger(self.sender, Message::ResizeSettled);
            }
            Message::ResizeSettled(generation) => {
                if self.resize_debounce.accepts(generation) {
                    let (w, h) = (self.widgets.wind.w(), self.widgets.wind.h());
                    self.widgets.page.relayout(w, h);
                    self.settings.window_width = w.max(1) as u32;
                    self.settings.window_height = h.max(1) as u32;
                    self.settings.save().map_err(AppError::Settings)?;
                    self.recompute_scroll_effects();
                }
            }

            // --- scroll effects ---
            Message::RevealCard(index) => {
                self.widgets.page.reveal(index);
            }
            Message::StatsTick => {
                for (index, text) in self.fx.tick_counters() {
                    self.widgets.page.set_stat_text(index, &text);
                }
                if self.fx.counters_active() {
                    schedule(COUNTER_STEP_SECS, self.sender, Message::StatsTick);
                }
            }

            // --- contact form ---
            Message::FieldBlurred(field) => {
                let value = self.widgets.page.form.value(field);
                let state = self.form.blur(field, &value).clone();
                self.widgets
                    .page
                    .form
                    .render_field(field, &state, &self.palette);
            }
            Message::FieldEdited(field) => {
                if self.form.edit(field) {
                    self.widgets.page.form.render_field(
                        field,
                        &FieldState::Untouched,
                        &self.palette,
                    );
                }
            }
            Message::SubmitForm => self.submit_form(),
            Message::SubmissionFinished(result) => {
                let ok = result.is_ok();
                let (generation, delay) = self.form.finish(ok);
                schedule(delay, self.sender, Message::SubmitUnlock(generation));
                match result {
                    Ok(()) => {
                        self.notify(
                            "Message sent successfully! I'll get back to you soon.",
                            Severity::Success,
                        );
                        self.widgets.page.form.clear_values();
                        self.form.reset_fields();
                        for field in FieldId::ALL {
                            self.widgets.page.form.render_field(
                                field,
                                &FieldState::Untouched,
                                &self.palette,
                            );
                        }
                    }
                    Err(error) => {
                        tracing::warn!("form submission failed: {error:?}");
                        self.notify(&error.user_message(), Severity::Error);
                    }
                }
            }
            Message::SubmitUnlock(generation) => {
                if self.form.accepts_unlock(generation) {
                    self.widgets.page.form.set_sending(false);
                }
            }

            // --- notifications ---
            Message::NotificationExpired(generation) => {
                if self.notifications.expired(generation) {
                    self.widgets.toast.dismiss();
                }
            }
            Message::CloseNotification => {
                self.notifications.dismiss();
                self.widgets.toast.dismiss();
            }

            // --- previews and links ---
            Message::OpenProjectPreview(index) => {
                if let Some(project) = self.portfolio.projects.get(index) {
                    self.show_preview(&project_payload(project));
                }
            }
            Message::OpenCertificatePreview(index) => {
                if let Some(certificate) = self.portfolio.certificates.get(index) {
                    self.show_preview(&certificate_payload(certificate));
                }
            }
            Message::OpenProjectLink(index) => {
                if let Some(link) = self
                    .portfolio
                    .projects
                    .get(index)
                    .and_then(|p| p.link.as_deref())
                {
                    if let Err(e) = open::that(link) {
                        tracing::warn!("failed to open link: {e}");
                    }
                }
            }

            // --- lifecycle ---
            Message::WindowClose => {
                self.settings.window_width = self.widgets.wind.w().max(1) as u32;
                self.settings.window_height = self.widgets.wind.h().max(1) as u32;
                if let Err(e) = self.settings.save() {
                    tracing::warn!("failed to persist settings on exit: {e}");
                }
                fltk::app::quit();
            }
        }
        Ok(())
    }

    /// Top-level fallback for a dispatch error: log happened at the call
    /// site, here we keep the page alive and tell the user.
    pub fn report_degraded(&mut self) {
        self.notify(
            "Some interactive features may not be working properly. Please restart the app.",
            Severity::Error,
        );
    }

    // --- helpers ---

    fn paint_theme(&mut self) {
        let theme = self.theme.effective();
        self.palette = Palette::for_theme(theme);
        self.widgets.wind.set_color(self.palette.window_bg);
        self.widgets.page.apply_palette(&self.palette);
        self.widgets.nav.apply_palette(&self.palette);
        self.widgets.nav.set_theme_glyph(theme);
        self.widgets.toast.apply_palette(&self.palette);
        #[cfg(target_os = "windows")]
        platform::set_windows_titlebar_theme(
            &self.widgets.wind,
            theme == crate::app::domain::Theme::Dark,
        );
        self.widgets.wind.redraw();
    }

    fn recompute_scroll_effects(&mut self) {
        let scroll_y = self.widgets.page.scroll_y();
        let viewport_h = self.widgets.page.viewport_h();

        let tops = self.widgets.page.section_tops();
        let active = active_section(&tops, scroll_y);
        if self.nav.update_active(active) {
            self.widgets.nav.set_active(active, &self.palette);
        }
        self.widgets
            .nav
            .set_elevated(scroll_y > HEADER_ELEVATION_AT, &self.palette);

        let geometry = self.widgets.page.reveal_geometry();
        let fresh = self.fx.sweep(&geometry, scroll_y, viewport_h);
        for (batch_position, index) in fresh.into_iter().enumerate() {
            schedule(
                REVEAL_STAGGER_SECS * batch_position as f64,
                self.sender,
                Message::RevealCard(index),
            );
        }

        let (stats_top, stats_h) = self.widgets.page.stats_geometry();
        if self.fx.stats_due(stats_top, stats_h, scroll_y, viewport_h) {
            self.fx.start_counters(&self.widgets.page.stat_values());
            if self.fx.counters_active() {
                schedule(COUNTER_STEP_SECS, self.sender, Message::StatsTick);
            }
        }
    }

    fn submit_form(&mut self) {
        let values: Vec<(FieldId, String)> = FieldId::ALL
            .into_iter()
            .map(|field| (field, self.widgets.page.form.value(field)))
            .collect();

        let ok = self.form.validate_all(&values);
        for (field, _) in &values {
            let state = self.form.state(*field).clone();
            self.widgets
                .page
                .form
                .render_field(*field, &state, &self.palette);
        }
        if !ok {
            self.notify(
                "Please correct the errors before submitting.",
                Severity::Error,
            );
            return;
        }
        if !self.form.begin_send() {
            return;
        }
        self.widgets.page.form.set_sending(true);

        let endpoint = self.form.endpoint().to_string();
        let payload = FormPayload {
            name: values[0].1.trim().to_string(),
            email: values[1].1.trim().to_string(),
            message: values[2].1.trim().to_string(),
        };
        let sender = self.sender;
        std::thread::spawn(move || {
            let result = submit::post_form(&endpoint, &payload);
            // Always report back; the unlock path depends on it
            sender.send(Message::SubmissionFinished(result));
        });
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        let generation = self.notifications.show(message, severity);
        self.widgets
            .toast
            .present(message, severity, &self.palette);
        schedule(
            NOTIFICATION_SECS,
            self.sender,
            Message::NotificationExpired(generation),
        );
    }

    fn show_preview(&self, payload: &PreviewPayload) {
        let previous_focus = fltk::app::focus();
        show_preview_dialog(payload, &self.palette);
        // Focus goes back to whatever opened the dialog
        if let Some(mut widget) = previous_focus {
            let _ = widget.take_focus();
        }
    }
}
