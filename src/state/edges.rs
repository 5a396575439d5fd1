// Arrow-button visibility for a horizontally scrollable grid.

#[cfg(test)]
#[path = "edges_test.rs"]
mod edges_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Signed scroll-by distance for one button press.
    pub fn step(self, amount: f64) -> f64 {
        match self {
            Direction::Left => -amount,
            Direction::Right => amount,
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEdges {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl ScrollEdges {
    pub fn measure(offset: f64, scroll_width: f64, client_width: f64) -> Self {
        Self {
            can_scroll_left: offset > 0.0,
            can_scroll_right: offset < scroll_width - client_width,
        }
    }

    pub fn opacity(&self, dir: Direction) -> &'static str {
        let visible = match dir {
            Direction::Left => self.can_scroll_left,
            Direction::Right => self.can_scroll_right,
        };
        if visible { "1" } else { "0" }
    }
}
