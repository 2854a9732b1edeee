use std::thread::sleep;
use std::time::{Duration, SystemTime};

use chrono::{Local, Timelike};
use eyre::Result;
use log::{debug, info, warn};
use sdl2::Sdl;

use crate::clock;
use crate::frames::{self, FrameStore};
use crate::fw_error;
use crate::ui::{Display, Ui, DISPLAY_SIZE};

/// How often the clock is re-sampled and the frame recomputed. The index is
/// swapped in unconditionally; redundant redraws are fine.
const UPDATE_PERIOD: Duration = Duration::from_secs(10);
/// Input/render pacing between updates, so drags track the pointer.
const LOOP_INTERVAL: Duration = Duration::from_millis(16);

pub struct App {
    _sdl: Sdl,
    ui: Ui,
    store: FrameStore,
    display: Display,
    next_update: SystemTime,
}

impl App {
    pub fn new() -> Result<Self> {
        let sdl = fw_error!(sdl2::init());
        let ui = Ui::new(&sdl)?;
        Ok(Self {
            _sdl: sdl,
            ui,
            store: FrameStore::new(),
            display: Display::Frame,
            next_update: SystemTime::now(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        info!("showing {} frames, one slot per tick", clock::TOTAL_FRAMES);
        loop {
            self.ui.handle_input();
            if SystemTime::now() >= self.next_update {
                self.refresh();
                self.next_update += UPDATE_PERIOD;
            }
            self.ui.render(&self.display);
            sleep(LOOP_INTERVAL);
        }
    }

    /// One update tick: sample the local clock, map it to a frame and load
    /// it. A missing frame file degrades to the in-window fallback text.
    fn refresh(&mut self) {
        let now = Local::now();
        let index = clock::frame_index(now.hour(), now.minute());
        debug!("{:02}:{:02} -> frame {index}", now.hour(), now.minute());
        self.display = match self.store.load(index, DISPLAY_SIZE) {
            Ok(pixels) => {
                self.ui.set_frame(pixels);
                Display::Frame
            }
            Err(err) => {
                warn!("{err:#}");
                Display::Missing(frames::missing_label(index))
            }
        };
    }
}
