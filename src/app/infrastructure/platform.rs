//! OS color-scheme probes. Detection is best effort: the caller owns the
//! fallback when no signal is available.

use crate::app::domain::Theme;

/// Read the operating system's light/dark preference, if it exposes one.
pub fn detect_system_theme() -> Option<Theme> {
    if detect_system_dark_mode()? {
        Some(Theme::Dark)
    } else {
        Some(Theme::Light)
    }
}

/// `Some(true)` when the OS prefers dark surfaces, `None` when no signal
/// could be read.
pub fn detect_system_dark_mode() -> Option<bool> {
    // Windows: dark mode preference lives in the registry
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        if let Ok(hkcu) = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        {
            // AppsUseLightTheme: 0 = dark mode, 1 = light mode
            if let Ok(value) = hkcu.get_value::<u32, _>("AppsUseLightTheme") {
                return Some(value == 0);
            }
        }
        None
    }

    // Linux: ask gsettings, covering both the GTK theme name and the
    // freedesktop color-scheme key
    #[cfg(target_os = "linux")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "color-scheme"])
            .output()
        {
            let scheme = String::from_utf8_lossy(&output.stdout);
            if scheme.contains("prefer-dark") {
                return Some(true);
            }
            if scheme.contains("prefer-light") {
                return Some(false);
            }
        }

        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "gtk-theme"])
            .output()
        {
            if output.status.success() {
                let theme = String::from_utf8_lossy(&output.stdout).to_lowercase();
                return Some(theme.contains("dark"));
            }
        }
        None
    }

    // macOS: AppleInterfaceStyle is only set when dark mode is on
    #[cfg(target_os = "macos")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            if output.status.success() {
                let style = String::from_utf8_lossy(&output.stdout).to_lowercase();
                return Some(style.contains("dark"));
            }
            // The key is absent in light mode
            return Some(false);
        }
        None
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &fltk::window::Window, dark: bool) {
    use fltk::prelude::WindowExt;
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if dark { 1 } else { 0 };

        // Attribute 20 (Windows 11 / Windows 10 2004+)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20), // DWMWA_USE_IMMERSIVE_DARK_MODE
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Attribute 19 (Windows 10 1809-1903)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}
