//! The transient notification surface: one toast, top-right, auto-dismissed
//! by its controller. Only the widgets live here.

use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
};

use crate::app::domain::{Message, Severity};
use crate::app::services::sections::HEADER_OFFSET;
use crate::ui::theme::{Palette, severity_glyph};

pub const TOAST_W: i32 = 340;
pub const TOAST_H: i32 = 56;
const MARGIN: i32 = 20;
const STRIPE_W: i32 = 4;

pub struct Toast {
    group: Group,
    stripe: Frame,
    message: Frame,
    close_btn: Button,
    severity: Option<Severity>,
}

impl Toast {
    /// Must be built while the main window is the current group, after the
    /// page content so it draws on top.
    pub fn build(sender: &Sender<Message>) -> Self {
        let mut group = Group::new(0, HEADER_OFFSET + MARGIN, TOAST_W, TOAST_H, None);
        group.set_frame(FrameType::BorderBox);

        let mut stripe = Frame::new(group.x(), group.y(), STRIPE_W, TOAST_H, None);
        stripe.set_frame(FrameType::FlatBox);

        let mut message = Frame::new(
            group.x() + STRIPE_W + 10,
            group.y() + 8,
            TOAST_W - STRIPE_W - 50,
            TOAST_H - 16,
            None,
        );
        message.set_align(Align::Inside | Align::Left | Align::Wrap);
        message.set_label_size(12);

        let mut close_btn = Button::new(
            group.x() + TOAST_W - 36,
            group.y() + (TOAST_H - 24) / 2,
            24,
            24,
            "\u{2715}",
        );
        close_btn.set_frame(FrameType::NoBox);
        close_btn.set_label_size(12);
        let s = *sender;
        close_btn.set_callback(move |_| s.send(Message::CloseNotification));

        group.end();
        group.hide();

        Self {
            group,
            stripe,
            message,
            close_btn,
            severity: None,
        }
    }

    pub fn present(&mut self, text: &str, severity: Severity, palette: &Palette) {
        self.severity = Some(severity);
        self.message
            .set_label(&format!("{}  {}", severity_glyph(severity), text));
        self.paint(palette);
        self.group.show();
        if let Some(mut parent) = self.group.parent() {
            parent.redraw();
        }
    }

    pub fn dismiss(&mut self) {
        self.severity = None;
        self.group.hide();
        if let Some(mut parent) = self.group.parent() {
            parent.redraw();
        }
    }

    pub fn visible(&self) -> bool {
        self.severity.is_some()
    }

    /// Keep the toast pinned to the window's top-right corner.
    pub fn reposition(&mut self, window_w: i32) {
        let x = window_w - TOAST_W - MARGIN;
        let y = HEADER_OFFSET + MARGIN;
        self.group.resize(x, y, TOAST_W, TOAST_H);
        self.stripe.resize(x, y, STRIPE_W, TOAST_H);
        self.message
            .resize(x + STRIPE_W + 10, y + 8, TOAST_W - STRIPE_W - 50, TOAST_H - 16);
        self.close_btn
            .resize(x + TOAST_W - 36, y + (TOAST_H - 24) / 2, 24, 24);
    }

    pub fn apply_palette(&mut self, palette: &Palette) {
        self.paint(palette);
    }

    fn paint(&mut self, palette: &Palette) {
        self.group.set_color(palette.card);
        let accent = self
            .severity
            .map(|s| palette.severity_color(s))
            .unwrap_or(palette.border);
        self.stripe.set_color(accent);
        self.message.set_label_color(palette.text);
        self.close_btn.set_label_color(palette.text_muted);
        self.group.redraw();
    }
}
