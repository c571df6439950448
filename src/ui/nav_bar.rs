//! The fixed header: brand, section links, theme toggle, and the
//! hamburger-driven menu panel used on narrow windows.

use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
};

use crate::app::domain::{Message, SectionId, Theme};
use crate::app::services::sections::HEADER_OFFSET;
use crate::ui::theme::{Palette, toggle_glyph};

/// Below this window width the link row collapses behind the hamburger.
pub const COLLAPSE_BELOW: i32 = 720;

const LINK_H: i32 = 32;
const MENU_ITEM_H: i32 = 40;

pub struct NavBar {
    header: Group,
    rule: Frame,
    brand: Frame,
    links: Vec<(SectionId, Button)>,
    theme_btn: Button,
    hamburger: Button,
    menu_panel: Group,
    menu_items: Vec<(SectionId, Button)>,
    active: Option<SectionId>,
    collapsed: bool,
    menu_open: bool,
    elevated: bool,
}

impl NavBar {
    /// Build the header strip and the (hidden) collapsed menu panel. Must
    /// run while the main window is the current group, after the page so
    /// the panel overlays it.
    pub fn build(sender: &Sender<Message>, brand_text: &str, window_w: i32) -> Self {
        let mut header = Group::new(0, 0, window_w, HEADER_OFFSET, None);
        header.set_frame(FrameType::FlatBox);

        let mut brand = Frame::new(24, 0, 260, HEADER_OFFSET, None);
        brand.set_label(brand_text);
        brand.set_align(Align::Inside | Align::Left);
        brand.set_label_font(Font::HelveticaBold);
        brand.set_label_size(18);

        let mut links = Vec::new();
        for id in SectionId::ALL {
            let mut btn = Button::new(0, 0, 0, LINK_H, None);
            btn.set_label(id.nav_label());
            btn.set_frame(FrameType::NoBox);
            btn.set_label_size(13);
            btn.clear_visible_focus();
            let s = *sender;
            btn.set_callback(move |_| s.send(Message::NavigateTo(id)));
            links.push((id, btn));
        }

        let mut theme_btn = Button::new(0, 0, 36, LINK_H, None);
        theme_btn.set_frame(FrameType::NoBox);
        theme_btn.set_label_size(16);
        theme_btn.set_tooltip("Switch theme");
        let s = *sender;
        theme_btn.set_callback(move |_| s.send(Message::ToggleTheme));

        let mut hamburger = Button::new(0, 0, 40, LINK_H, "\u{2630}");
        hamburger.set_frame(FrameType::NoBox);
        hamburger.set_label_size(16);
        hamburger.clear_visible_focus();
        let s = *sender;
        hamburger.set_callback(move |_| s.send(Message::ToggleMenu));
        hamburger.hide();

        // Bottom rule; gains contrast once the page is scrolled
        let mut rule = Frame::new(0, HEADER_OFFSET - 1, window_w, 1, None);
        rule.set_frame(FrameType::FlatBox);

        header.end();

        let mut menu_panel = Group::new(
            0,
            HEADER_OFFSET,
            window_w,
            MENU_ITEM_H * SectionId::ALL.len() as i32,
            None,
        );
        menu_panel.set_frame(FrameType::FlatBox);
        let mut menu_items = Vec::new();
        for (i, id) in SectionId::ALL.into_iter().enumerate() {
            let mut btn = Button::new(
                0,
                HEADER_OFFSET + MENU_ITEM_H * i as i32,
                window_w,
                MENU_ITEM_H,
                None,
            );
            btn.set_label(id.nav_label());
            btn.set_frame(FrameType::FlatBox);
            btn.set_label_size(14);
            btn.clear_visible_focus();
            let s = *sender;
            btn.set_callback(move |_| s.send(Message::NavigateTo(id)));
            menu_items.push((id, btn));
        }
        menu_panel.end();
        menu_panel.hide();

        Self {
            header,
            rule,
            brand,
            links,
            theme_btn,
            hamburger,
            menu_panel,
            menu_items,
            active: None,
            collapsed: false,
            menu_open: false,
            elevated: false,
        }
    }

    /// Reflow for a new window width. Returns true when the collapsed state
    /// changed (the caller closes the menu on expansion).
    pub fn relayout(&mut self, window_w: i32) -> bool {
        self.header.resize(0, 0, window_w, HEADER_OFFSET);
        self.rule.resize(0, HEADER_OFFSET - 1, window_w, 1);
        self.brand.resize(24, 0, 260, HEADER_OFFSET);

        let was_collapsed = self.collapsed;
        self.collapsed = window_w < COLLAPSE_BELOW;

        let y = (HEADER_OFFSET - LINK_H) / 2;
        let mut right = window_w - 24;

        right -= 36;
        self.theme_btn.resize(right, y, 36, LINK_H);

        if self.collapsed {
            right -= 48;
            self.hamburger.resize(right, y, 40, LINK_H);
            self.hamburger.show();
            for (_, btn) in &mut self.links {
                btn.hide();
            }
        } else {
            self.hamburger.hide();
            for (_, btn) in self.links.iter_mut().rev() {
                let w = 24 + 8 * btn.label().len() as i32;
                right -= w + 4;
                btn.resize(right, y, w, LINK_H);
                btn.show();
            }
        }

        self.menu_panel.resize(
            0,
            HEADER_OFFSET,
            window_w,
            MENU_ITEM_H * self.menu_items.len() as i32,
        );
        for (i, (_, btn)) in self.menu_items.iter_mut().enumerate() {
            btn.resize(0, HEADER_OFFSET + MENU_ITEM_H * i as i32, window_w, MENU_ITEM_H);
        }

        was_collapsed != self.collapsed
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
        if open && self.collapsed {
            self.menu_panel.show();
            // Above the scroll region in the draw order
            if let Some(mut parent) = self.menu_panel.parent() {
                parent.redraw();
            }
        } else {
            self.menu_panel.hide();
            if let Some(mut parent) = self.menu_panel.parent() {
                parent.redraw();
            }
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn set_active(&mut self, active: Option<SectionId>, palette: &Palette) {
        self.active = active;
        self.paint_links(palette);
    }

    pub fn set_theme_glyph(&mut self, theme: Theme) {
        self.theme_btn.set_label(toggle_glyph(theme));
        self.theme_btn.redraw();
    }

    /// Header elevation once the page is scrolled past the hero.
    pub fn set_elevated(&mut self, elevated: bool, palette: &Palette) {
        if self.elevated != elevated {
            self.elevated = elevated;
            self.paint_rule(palette);
        }
    }

    pub fn apply_palette(&mut self, palette: &Palette) {
        self.header.set_color(palette.surface);
        self.brand.set_label_color(palette.text);
        self.theme_btn.set_label_color(palette.text);
        self.hamburger.set_label_color(palette.text);
        self.menu_panel.set_color(palette.surface);
        for (_, btn) in &mut self.menu_items {
            btn.set_color(palette.surface);
            btn.set_label_color(palette.text);
        }
        self.paint_links(palette);
        self.paint_rule(palette);
        self.header.redraw();
        self.menu_panel.redraw();
    }

    fn paint_links(&mut self, palette: &Palette) {
        for (id, btn) in &mut self.links {
            let color = if Some(*id) == self.active {
                palette.accent
            } else {
                palette.text_muted
            };
            btn.set_label_color(color);
        }
        for (id, btn) in &mut self.menu_items {
            let color = if Some(*id) == self.active {
                palette.accent
            } else {
                palette.text
            };
            btn.set_label_color(color);
        }
        self.header.redraw();
        if self.menu_open {
            self.menu_panel.redraw();
        }
    }

    fn paint_rule(&mut self, palette: &Palette) {
        let color = if self.elevated {
            palette.accent
        } else {
            palette.border
        };
        self.rule.set_color(color);
        self.rule.redraw();
    }
}
