use ttd_debug::debug;

use crate::{DriverError, DriverParams};

/// Default number of ticks the null driver runs for.
pub const DEFAULT_NULL_TICKS: u32 = 1000;

/// The game side seen by a video driver's main loop.
pub trait GameLoop {
    /// Runs one game tick.
    fn game_loop(&mut self);
    /// Redraws whatever changed during the tick.
    fn update_windows(&mut self);
}

/// Screen buffer description shared with the blitter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Screen {
    pub width: u32,
    pub height: u32,
    pub pitch: u32,
    /// Whether a pixel destination is attached. The null driver never has one.
    pub has_dst: bool,
    /// Name of the selected blitter.
    pub blitter: String,
}

pub trait VideoDriver {
    fn name(&self) -> &'static str;
    fn start(&mut self, params: &DriverParams) -> Result<(), DriverError>;
    fn stop(&mut self);
    fn make_dirty(&mut self, left: i32, top: i32, width: i32, height: i32);
    fn main_loop(&mut self, game: &mut dyn GameLoop);
    fn change_resolution(&mut self, width: u32, height: u32) -> bool;
    fn toggle_fullscreen(&mut self, fullscreen: bool) -> bool;
}

/// Video driver that draws nothing and runs the game for a fixed number of
/// ticks. Used for dedicated servers, benchmarks and automated runs.
#[derive(Debug, Clone)]
pub struct NullVideoDriver {
    resolution: (u32, u32),
    ticks: u32,
    screen: Screen,
}

impl NullVideoDriver {
    pub fn new(resolution: (u32, u32)) -> Self {
        Self {
            resolution,
            ticks: DEFAULT_NULL_TICKS,
            screen: Screen::default(),
        }
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }
}

impl VideoDriver for NullVideoDriver {
    fn name(&self) -> &'static str {
        "null"
    }

    fn start(&mut self, params: &DriverParams) -> Result<(), DriverError> {
        self.ticks = params.int("ticks", DEFAULT_NULL_TICKS)?;
        let (width, height) = self.resolution;
        self.screen.width = width;
        self.screen.pitch = width;
        self.screen.height = height;

        // Do not render, nor blit.
        debug!(Misc, 1, "Forcing blitter 'null'...");
        self.screen.blitter = "null".to_string();
        Ok(())
    }

    fn stop(&mut self) {}

    fn make_dirty(&mut self, _left: i32, _top: i32, _width: i32, _height: i32) {}

    fn main_loop(&mut self, game: &mut dyn GameLoop) {
        for _ in 0..self.ticks {
            game.game_loop();
            self.screen.has_dst = false;
            game.update_windows();
        }
    }

    fn change_resolution(&mut self, _width: u32, _height: u32) -> bool {
        false
    }

    fn toggle_fullscreen(&mut self, _fullscreen: bool) -> bool {
        false
    }
}

/// Creates the video driver selected by `selection`, e.g. `"null:ticks=50"`,
/// and starts it.
pub fn start_video_driver(
    selection: &str,
    resolution: (u32, u32),
) -> Result<Box<dyn VideoDriver>, DriverError> {
    let (name, params) = DriverParams::parse_selection(selection);
    let mut driver: Box<dyn VideoDriver> = match name.as_str() {
        "null" | "" => Box::new(NullVideoDriver::new(resolution)),
        _ => return Err(DriverError::UnknownDriver(name)),
    };
    debug!(Driver, 1, "Starting video driver '{}'", driver.name());
    driver.start(&params)?;
    Ok(driver)
}
