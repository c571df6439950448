//! Modal preview for projects and certificates.

use fltk::{
    button::Button,
    enums::{Align, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use crate::app::controllers::modal::PreviewPayload;
use crate::ui::dialogs::run_dialog;
use crate::ui::theme::Palette;

/// Show the preview dialog and block until it is dismissed (close button,
/// Escape, or window close). The dialog is modal, so the page underneath
/// neither scrolls nor receives input while it is open.
pub fn show_preview_dialog(payload: &PreviewPayload, palette: &Palette) {
    let meta_h = 22 * payload.meta.len() as i32;
    let height = 96 + meta_h + 150 + 46;

    let mut dialog = Window::default()
        .with_size(460, height)
        .with_label(&payload.title)
        .center_screen();
    dialog.make_modal(true);
    dialog.set_color(palette.surface);

    let mut flex = Flex::new(16, 16, 428, height - 32, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(8);

    let mut title = Frame::default();
    title.set_label(&payload.title);
    title.set_label_size(18);
    title.set_label_font(Font::HelveticaBold);
    title.set_label_color(palette.text);
    title.set_align(Align::Inside | Align::Left);
    flex.fixed(&title, 30);

    for (glyph, text) in &payload.meta {
        let mut row = Frame::default();
        row.set_label(&format!("{}  {}", glyph, text));
        row.set_label_size(12);
        row.set_label_color(palette.text_muted);
        row.set_align(Align::Inside | Align::Left);
        flex.fixed(&row, 22);
    }

    let mut description = Frame::default();
    description.set_label(&payload.description);
    description.set_label_size(13);
    description.set_label_color(palette.text);
    description.set_align(Align::Inside | Align::Left | Align::Top | Align::Wrap);

    let mut button_row = Flex::default();
    button_row.set_type(fltk::group::FlexType::Row);
    button_row.set_spacing(10);

    let _spacer = Frame::default();

    if let Some(link) = &payload.link {
        let mut btn = Button::default().with_label("Open Link");
        btn.set_label_size(12);
        btn.set_color(palette.card);
        btn.set_label_color(palette.text);
        button_row.fixed(&btn, 100);
        let url = link.clone();
        btn.set_callback(move |_| {
            if let Err(e) = open::that(&url) {
                tracing::warn!("failed to open link: {e}");
            }
        });
    }

    let mut close_btn = Button::default().with_label("Close");
    close_btn.set_label_size(12);
    close_btn.set_color(palette.accent);
    close_btn.set_label_color(palette.window_bg);
    button_row.fixed(&close_btn, 90);

    button_row.end();
    flex.fixed(&button_row, 34);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    // Keyboard users land on the dismiss control first
    let _ = close_btn.take_focus();
    run_dialog(&dialog);
}
