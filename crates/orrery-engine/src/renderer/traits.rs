//! Renderer trait for drawing backends.
//!
//! The engine never talks to a GPU itself. It produces a `RenderFrame`
//! each tick and hands it to whichever backend the host wired up
//! (WebGL2 in the browser, a recording double in tests).

use super::frame::RenderFrame;

/// A drawing backend.
///
/// # Example Implementation
///
/// ```ignore
/// struct CountingRenderer { frames: usize }
///
/// impl Renderer for CountingRenderer {
///     type Error = std::convert::Infallible;
///     fn backend(&self) -> &'static str { "counting" }
///     fn draw(&mut self, _frame: &RenderFrame) -> Result<(), Self::Error> {
///         self.frames += 1;
///         Ok(())
///     }
///     fn resize(&mut self, _width: u32, _height: u32) {}
/// }
/// ```
pub trait Renderer {
    /// Failure type surfaced to the host. Draw failures are never retried.
    type Error;

    /// Backend identifier (e.g., "webgl2").
    fn backend(&self) -> &'static str;

    /// Draw a complete frame.
    fn draw(&mut self, frame: &RenderFrame) -> Result<(), Self::Error>;

    /// Resize the output surface (in CSS pixels).
    fn resize(&mut self, width: u32, height: u32);
}
