//! Contact form widgets. Validation state lives in the form controller;
//! this type only renders it.

use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, CallbackTrigger, Event, Font},
    frame::Frame,
    input::{Input, MultilineInput},
    prelude::*,
};

use crate::app::domain::{FieldId, Message};
use crate::app::services::validation::FieldState;
use crate::ui::theme::Palette;

const LABEL_H: i32 = 20;
const INPUT_H: i32 = 32;
const MESSAGE_H: i32 = 110;
const FEEDBACK_H: i32 = 18;
const GAP: i32 = 6;
const SUBMIT_H: i32 = 38;

pub struct ContactForm {
    labels: Vec<Frame>,
    name_input: Input,
    email_input: Input,
    message_input: MultilineInput,
    name_feedback: Frame,
    email_feedback: Frame,
    message_feedback: Frame,
    pub submit_btn: Button,
}

fn wire<I>(input: &mut I, field: FieldId, sender: &Sender<Message>)
where
    I: InputExt + WidgetBase + 'static,
{
    input.set_trigger(CallbackTrigger::Changed);
    let s = *sender;
    input.set_callback(move |_| s.send(Message::FieldEdited(field)));
    let s = *sender;
    input.handle(move |_, ev| {
        if ev == Event::Unfocus {
            s.send(Message::FieldBlurred(field));
        }
        false
    });
}

impl ContactForm {
    /// Total height of the laid-out column. The form has no variable-height
    /// content, so this is a constant the page layout can rely on.
    pub fn measured_height() -> i32 {
        3 * (LABEL_H + GAP) + 2 * INPUT_H + MESSAGE_H + 3 * (FEEDBACK_H + GAP) + SUBMIT_H
    }

    pub fn build(sender: &Sender<Message>) -> Self {
        let mut labels = Vec::new();
        for text in ["Name", "Email", "Message"] {
            let mut label = Frame::new(0, 0, 0, LABEL_H, None);
            label.set_label(text);
            label.set_align(Align::Inside | Align::Left);
            label.set_label_size(12);
            label.set_label_font(Font::HelveticaBold);
            labels.push(label);
        }

        let mut name_input = Input::new(0, 0, 0, INPUT_H, None);
        let mut email_input = Input::new(0, 0, 0, INPUT_H, None);
        let mut message_input = MultilineInput::new(0, 0, 0, MESSAGE_H, None);
        message_input.set_wrap(true);

        wire(&mut name_input, FieldId::Name, sender);
        wire(&mut email_input, FieldId::Email, sender);
        wire(&mut message_input, FieldId::Message, sender);

        let feedback_frame = || {
            let mut feedback = Frame::new(0, 0, 0, FEEDBACK_H, None);
            feedback.set_align(Align::Inside | Align::Left);
            feedback.set_label_size(11);
            feedback
        };
        let name_feedback = feedback_frame();
        let email_feedback = feedback_frame();
        let message_feedback = feedback_frame();

        let mut submit_btn = Button::new(0, 0, 170, SUBMIT_H, "Send Message");
        submit_btn.set_label_size(13);
        let s = *sender;
        submit_btn.set_callback(move |_| s.send(Message::SubmitForm));

        Self {
            labels,
            name_input,
            email_input,
            message_input,
            name_feedback,
            email_feedback,
            message_feedback,
            submit_btn,
        }
    }

    /// Position everything in one column; returns the height consumed.
    pub fn layout(&mut self, x: i32, y: i32, w: i32) -> i32 {
        let mut cy = y;
        let rows: [(usize, i32); 3] = [(0, INPUT_H), (1, INPUT_H), (2, MESSAGE_H)];
        for (i, input_h) in rows {
            self.labels[i].resize(x, cy, w, LABEL_H);
            cy += LABEL_H + GAP;
            match i {
                0 => self.name_input.resize(x, cy, w, input_h),
                1 => self.email_input.resize(x, cy, w, input_h),
                _ => self.message_input.resize(x, cy, w, input_h),
            }
            cy += input_h;
            let feedback = match i {
                0 => &mut self.name_feedback,
                1 => &mut self.email_feedback,
                _ => &mut self.message_feedback,
            };
            feedback.resize(x, cy, w, FEEDBACK_H);
            cy += FEEDBACK_H + GAP;
        }
        self.submit_btn.resize(x, cy, 170, SUBMIT_H);
        cy += SUBMIT_H;
        cy - y
    }

    pub fn value(&self, field: FieldId) -> String {
        match field {
            FieldId::Name => self.name_input.value(),
            FieldId::Email => self.email_input.value(),
            FieldId::Message => self.message_input.value(),
        }
    }

    pub fn clear_values(&mut self) {
        self.name_input.set_value("");
        self.email_input.set_value("");
        self.message_input.set_value("");
    }

    /// Paint a field for its validation state: error tint and inline
    /// message while invalid, plain otherwise.
    pub fn render_field(&mut self, field: FieldId, state: &FieldState, palette: &Palette) {
        let (bg, message) = match state {
            FieldState::Invalid(msg) => (palette.input_error_bg, msg.as_str()),
            _ => (palette.input_bg, ""),
        };
        let feedback = match field {
            FieldId::Name => &mut self.name_feedback,
            FieldId::Email => &mut self.email_feedback,
            FieldId::Message => &mut self.message_feedback,
        };
        feedback.set_label(message);
        feedback.set_label_color(palette.error);
        match field {
            FieldId::Name => {
                self.name_input.set_color(bg);
                self.name_input.redraw();
            }
            FieldId::Email => {
                self.email_input.set_color(bg);
                self.email_input.redraw();
            }
            FieldId::Message => {
                self.message_input.set_color(bg);
                self.message_input.redraw();
            }
        }
        feedback.redraw();
    }

    /// Lock or release the submit control with its loading label.
    pub fn set_sending(&mut self, sending: bool) {
        if sending {
            self.submit_btn.set_label("Sending...");
            self.submit_btn.deactivate();
        } else {
            self.submit_btn.set_label("Send Message");
            self.submit_btn.activate();
        }
        self.submit_btn.redraw();
    }

    pub fn apply_palette(&mut self, palette: &Palette) {
        for label in &mut self.labels {
            label.set_label_color(palette.text);
        }
        for input in [&mut self.name_input, &mut self.email_input] {
            input.set_color(palette.input_bg);
            input.set_text_color(palette.text);
            input.set_cursor_color(palette.text);
        }
        self.message_input.set_color(palette.input_bg);
        self.message_input.set_text_color(palette.text);
        self.message_input.set_cursor_color(palette.text);
        self.submit_btn.set_color(palette.accent);
        self.submit_btn.set_label_color(palette.window_bg);
        self.name_feedback.set_label_color(palette.error);
        self.email_feedback.set_label_color(palette.error);
        self.message_feedback.set_label_color(palette.error);
    }
}
