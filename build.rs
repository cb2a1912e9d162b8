// SPDX-License-Identifier: MPL-2.0
//! Windows resource embedding.
//!
//! Bakes the application icon into the executable for the taskbar and
//! file explorer. The `.ico` is optional; checkouts without branding
//! assets skip the step.

fn main() {
    #[cfg(target_os = "windows")]
    {
        let icon = "assets/branding/iced_mosaic.ico";
        if std::path::Path::new(icon).exists() {
            let mut res = winresource::WindowsResource::new();
            res.set_icon(icon);
            res.compile().expect("compile Windows resources");
        }
    }
}
