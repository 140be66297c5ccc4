//! Presentation seam between the simulation and whatever shows it.
//!
//! The engine only ever draws flat rectangles and pushes three pieces of text
//! (score, progress width, game-over message). `web::BrowserSurface` maps these
//! onto a canvas and DOM elements; tests record them.

pub trait Surface {
    /// Wipe the drawable area before a new frame.
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str);
    /// Level background color (CSS color string).
    fn set_background(&mut self, color: &str);
    /// Full score label, e.g. `Score: 3`.
    fn show_score(&mut self, text: &str);
    /// CSS width of the progress indicator, e.g. `42.5%`.
    fn show_progress(&mut self, width: &str);
    /// Terminal notification; the run is already over when this fires.
    fn game_over(&mut self, message: &str);
}
