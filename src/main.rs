#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

mod app;
mod clock;
mod frames;
mod ui;

use app::App;
use eyre::Result;

// sdl2 reports errors as plain Strings; lift them into eyre at the call site.
macro_rules! fw_error {
    ($call:expr) => {
        $call.map_err(|err| ::eyre::eyre!("{err}"))?
    };
}
pub(crate) use fw_error;

fn main() -> Result<()> {
    env_logger::init();
    App::new()?.run()
}
