use fltk::{app::Sender, enums::Event, prelude::*, window::Window};

use crate::app::domain::{AppSettings, Message, Portfolio};
use crate::ui::nav_bar::NavBar;
use crate::ui::sections::PageSections;
use crate::ui::toast::Toast;

pub struct MainWidgets {
    pub wind: Window,
    pub page: PageSections,
    pub nav: NavBar,
    pub toast: Toast,
}

pub fn build_main_window(
    settings: &AppSettings,
    portfolio: &Portfolio,
    sender: &Sender<Message>,
) -> MainWidgets {
    let w = settings.window_width.max(480) as i32;
    let h = settings.window_height.max(360) as i32;

    let mut wind = Window::new(100, 100, w, h, None);
    wind.set_label(&format!("{} \u{2014} Portfolio", portfolio.owner.name));
    wind.set_xclass("FolioDesk");
    wind.size_range(480, 360, 0, 0);

    // Draw order matters: the page first, then the header (with its menu
    // panel) and the toast so both overlay the scrolled content.
    let page = PageSections::build(sender, portfolio, w, h);
    let mut nav = NavBar::build(sender, &portfolio.owner.name, w);
    nav.relayout(w);
    let toast = Toast::build(sender);

    wind.end();
    wind.make_resizable(true);

    let s = *sender;
    wind.handle(move |_, ev| {
        if ev == Event::Resize {
            s.send(Message::WindowResized);
        }
        false
    });

    // Fires on the close button and on Escape
    let s = *sender;
    wind.set_callback(move |_| s.send(Message::WindowClose));

    MainWidgets {
        wind,
        page,
        nav,
        toast,
    }
}
