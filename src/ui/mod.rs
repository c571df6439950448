//! Widget construction and presentation. Everything visual lives here;
//! the controllers under `app/` only flip state.

pub mod contact_form;
pub mod dialogs;
pub mod main_window;
pub mod nav_bar;
pub mod sections;
pub mod theme;
pub mod toast;
