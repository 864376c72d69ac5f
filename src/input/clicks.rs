use egui::Pos2;

/// Counts consecutive presses that land close together in space and time.
#[derive(Debug, Clone)]
pub struct ClickCounter {
    /// Maximum time between presses (seconds)
    window: f64,
    /// Maximum distance between presses
    max_distance: f32,
    last_press: Option<(Pos2, f64)>,
    count: u32,
}

impl ClickCounter {
    pub fn new(window: f64, max_distance: f32) -> Self {
        Self {
            window,
            max_distance,
            last_press: None,
            count: 0,
        }
    }

    /// Registers a press at `pos` at time `time` (seconds) and returns its
    /// click count.
    pub fn register(&mut self, pos: Pos2, time: f64) -> u32 {
        self.count = match self.last_press {
            Some((last_pos, last_time))
                if time - last_time <= self.window
                    && last_pos.distance(pos) <= self.max_distance =>
            {
                self.count + 1
            }
            _ => 1,
        };
        self.last_press = Some((pos, time));
        self.count
    }

    pub fn reset(&mut self) {
        self.last_press = None;
        self.count = 0;
    }
}
