use tracing::debug;

/// Ask the operating system whether it prefers a dark color scheme.
///
/// Falls back to light when the preference cannot be read.
pub fn detect_system_dark_mode() -> bool {
    let detected = os_prefers_dark();
    debug!(?detected, "system color scheme");
    detected.unwrap_or(false)
}

#[cfg(target_os = "windows")]
fn os_prefers_dark() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let personalize = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    // AppsUseLightTheme: 0 = dark mode, 1 = light mode
    let value: u32 = personalize.get_value("AppsUseLightTheme").ok()?;
    Some(value == 0)
}

#[cfg(target_os = "linux")]
fn os_prefers_dark() -> Option<bool> {
    let theme = command_output("gsettings", &["get", "org.gnome.desktop.interface", "gtk-theme"]);
    let scheme = command_output("gsettings", &["get", "org.gnome.desktop.interface", "color-scheme"]);
    if theme.is_none() && scheme.is_none() {
        return None;
    }
    Some(gnome_prefers_dark(theme.as_deref(), scheme.as_deref()))
}

#[cfg(target_os = "macos")]
fn os_prefers_dark() -> Option<bool> {
    // `defaults` exits non-zero when the key is unset, which means light mode
    let style = command_output("defaults", &["read", "-g", "AppleInterfaceStyle"]);
    Some(style.is_some_and(|s| s.to_lowercase().contains("dark")))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn os_prefers_dark() -> Option<bool> {
    None
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = std::process::Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn gnome_prefers_dark(gtk_theme: Option<&str>, color_scheme: Option<&str>) -> bool {
    gtk_theme.is_some_and(|t| t.to_lowercase().contains("dark"))
        || color_scheme.is_some_and(|s| s.contains("prefer-dark"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gnome_dark_theme_name() {
        assert!(gnome_prefers_dark(Some("'Adwaita-Dark'\n"), None));
        assert!(!gnome_prefers_dark(Some("'Adwaita'\n"), Some("'default'\n")));
    }

    #[test]
    fn test_gnome_color_scheme() {
        assert!(gnome_prefers_dark(Some("'Yaru'"), Some("'prefer-dark'")));
        assert!(!gnome_prefers_dark(None, None));
    }
}
