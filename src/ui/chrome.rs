//! Platform window chrome that SDL does not cover. Everything here is
//! best-effort: a failure leaves the window undecorated but functional.

use std::path::Path;

use sdl2::video::Window;

pub trait Chrome {
    /// Reshapes the native window after creation (style bits, taskbar
    /// presence, topmost order).
    fn apply(&self, _window: &Window) {}

    /// Installs the icon shown in the taskbar and window switcher.
    fn set_taskbar_icon(&self, _window: &Window, _icon: &Path) {}
}

pub fn native() -> Box<dyn Chrome> {
    #[cfg(windows)]
    return Box::new(win::WinChrome);
    #[cfg(not(windows))]
    Box::new(PlainChrome)
}

// SDL's own window flags are enough outside Windows.
#[cfg(not(windows))]
struct PlainChrome;

#[cfg(not(windows))]
impl Chrome for PlainChrome {}

#[cfg(windows)]
mod win {
    use std::path::Path;

    use log::warn;
    use raw_window_handle::{HasRawWindowHandle, RawWindowHandle};
    use sdl2::video::Window;
    use windows::core::{w, HSTRING, PCWSTR};
    use windows::Win32::Foundation::{COLORREF, HWND, LPARAM, WPARAM};
    use windows::Win32::UI::Shell::SetCurrentProcessExplicitAppUserModelID;
    use windows::Win32::UI::WindowsAndMessaging::{
        GetWindowLongPtrW, LoadImageW, SendMessageW, SetLayeredWindowAttributes,
        SetWindowLongPtrW, SetWindowPos, GWL_EXSTYLE, GWL_STYLE, HWND_TOPMOST, ICON_BIG,
        ICON_SMALL, IMAGE_ICON, LR_LOADFROMFILE, LWA_COLORKEY, SWP_FRAMECHANGED, SWP_SHOWWINDOW,
        WM_SETICON, WS_EX_APPWINDOW, WS_EX_LAYERED, WS_EX_TOOLWINDOW, WS_OVERLAPPEDWINDOW,
        WS_POPUP, WS_VISIBLE,
    };

    use super::Chrome;
    use crate::ui::DISPLAY_SIZE;

    const WHITE: COLORREF = COLORREF(0x00FF_FFFF);

    pub struct WinChrome;

    fn hwnd(window: &Window) -> Option<HWND> {
        match window.raw_window_handle() {
            RawWindowHandle::Win32(handle) => Some(HWND(handle.hwnd as _)),
            _ => None,
        }
    }

    impl Chrome for WinChrome {
        fn apply(&self, window: &Window) {
            let Some(hwnd) = hwnd(window) else { return };
            unsafe {
                if let Err(err) = SetCurrentProcessExplicitAppUserModelID(w!("craftclock.app")) {
                    warn!("app id not set: {err}");
                }

                // Borderless popup that still shows up in the taskbar and
                // Alt-Tab, with the white background keyed out.
                let mut style = GetWindowLongPtrW(hwnd, GWL_STYLE) as u32;
                style &= !WS_OVERLAPPEDWINDOW.0;
                style |= (WS_POPUP | WS_VISIBLE).0;
                SetWindowLongPtrW(hwnd, GWL_STYLE, style as isize);

                let mut ex_style = GetWindowLongPtrW(hwnd, GWL_EXSTYLE) as u32;
                ex_style |= (WS_EX_APPWINDOW | WS_EX_LAYERED).0;
                ex_style &= !WS_EX_TOOLWINDOW.0;
                SetWindowLongPtrW(hwnd, GWL_EXSTYLE, ex_style as isize);

                if let Err(err) = SetLayeredWindowAttributes(hwnd, WHITE, 0, LWA_COLORKEY) {
                    warn!("background color key not set: {err}");
                }

                let (x, y) = window.position();
                if let Err(err) = SetWindowPos(
                    hwnd,
                    HWND_TOPMOST,
                    x,
                    y,
                    DISPLAY_SIZE as i32,
                    DISPLAY_SIZE as i32,
                    SWP_FRAMECHANGED | SWP_SHOWWINDOW,
                ) {
                    warn!("window restyle not applied: {err}");
                }
            }
        }

        fn set_taskbar_icon(&self, window: &Window, icon: &Path) {
            if !icon.exists() {
                return;
            }
            let Some(hwnd) = hwnd(window) else { return };
            let path = HSTRING::from(icon.as_os_str());
            unsafe {
                match LoadImageW(None, PCWSTR(path.as_ptr()), IMAGE_ICON, 0, 0, LR_LOADFROMFILE) {
                    Ok(hicon) => {
                        for which in [ICON_SMALL, ICON_BIG] {
                            SendMessageW(
                                hwnd,
                                WM_SETICON,
                                WPARAM(which as usize),
                                LPARAM(hicon.0 as isize),
                            );
                        }
                    }
                    Err(err) => warn!("taskbar icon not loaded: {err}"),
                }
            }
        }
    }
}
