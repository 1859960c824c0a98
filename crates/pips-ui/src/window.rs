//! The drawing surface: a backend, the scene graph drawn on it, and the
//! logical coordinate frame clicks are reported in.

use std::collections::VecDeque;

use pips_sdi::SdiRegistry;
use pips_types::backend::{Color, InputBackend, SdiBackend};
use pips_types::error::Result;
use pips_types::geometry::{CoordMap, Point};
use pips_types::input::InputEvent;

/// A window with a logical coordinate system.
///
/// The scene is redrawn before every wait for input, so callers only mutate
/// the [`SdiRegistry`] and never present frames themselves.
pub struct Window<B: SdiBackend + InputBackend> {
    backend: B,
    sdi: SdiRegistry,
    coords: CoordMap,
    background: Color,
    pending: VecDeque<InputEvent>,
    closed: bool,
}

impl<B: SdiBackend + InputBackend> Window<B> {
    /// Initialize `backend` at the viewport size of `coords`.
    pub fn new(mut backend: B, coords: CoordMap, background: Color) -> Result<Self> {
        let (width, height) = coords.viewport();
        backend.init(width, height)?;
        log::info!("window initialized at {width}x{height}");
        Ok(Self {
            backend,
            sdi: SdiRegistry::new(),
            coords,
            background,
            pending: VecDeque::new(),
            closed: false,
        })
    }

    pub fn sdi(&self) -> &SdiRegistry {
        &self.sdi
    }

    pub fn sdi_mut(&mut self) -> &mut SdiRegistry {
        &mut self.sdi
    }

    pub fn coords(&self) -> &CoordMap {
        &self.coords
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Clear, draw the scene, and present one frame.
    pub fn render(&mut self) -> Result<()> {
        self.backend.clear(self.background)?;
        self.sdi.draw(&mut self.backend, &self.coords)?;
        self.backend.swap_buffers()
    }

    /// Present the scene and block until the next click.
    ///
    /// Returns the click in logical coordinates, or `None` once the user
    /// asks to close the window. Releases and motion are skipped.
    pub fn get_mouse(&mut self) -> Result<Option<Point>> {
        self.render()?;
        loop {
            while let Some(event) = self.pending.pop_front() {
                match event {
                    InputEvent::PointerClick { x, y } => {
                        return Ok(Some(self.coords.to_logical(x, y)));
                    },
                    InputEvent::Quit => {
                        log::debug!("window close requested");
                        return Ok(None);
                    },
                    InputEvent::PointerRelease { .. } | InputEvent::CursorMove { .. } => {},
                }
            }
            self.pending.extend(self.backend.wait_events());
        }
    }

    /// Shut the backend down. Later calls do nothing.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        log::info!("window closed");
        self.backend.shutdown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockBackend;
    use pips_sdi::Shape;

    fn coords() -> CoordMap {
        CoordMap::new(101, 101, 0.0, 0.0, 10.0, 10.0).unwrap()
    }

    #[test]
    fn new_initializes_backend() {
        let win = Window::new(MockBackend::new(), coords(), Color::GREEN2).unwrap();
        assert_eq!(win.backend().init_size, Some((101, 101)));
        assert!(win.sdi().is_empty());
    }

    #[test]
    fn get_mouse_maps_to_logical() {
        let backend = MockBackend::with_events([InputEvent::PointerClick { x: 50, y: 0 }]);
        let mut win = Window::new(backend, coords(), Color::GREEN2).unwrap();
        let p = win.get_mouse().unwrap().unwrap();
        assert!((p.x - 5.0).abs() < 1e-9);
        assert!((p.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn get_mouse_skips_non_clicks() {
        let backend = MockBackend::with_events([
            InputEvent::CursorMove { x: 1, y: 1 },
            InputEvent::PointerRelease { x: 1, y: 1 },
            InputEvent::PointerClick { x: 0, y: 100 },
        ]);
        let mut win = Window::new(backend, coords(), Color::GREEN2).unwrap();
        let p = win.get_mouse().unwrap().unwrap();
        assert!(p.x.abs() < 1e-9 && p.y.abs() < 1e-9);
    }

    #[test]
    fn quit_ends_input() {
        let backend = MockBackend::with_events([InputEvent::Quit]);
        let mut win = Window::new(backend, coords(), Color::GREEN2).unwrap();
        assert_eq!(win.get_mouse().unwrap(), None);
    }

    #[test]
    fn get_mouse_presents_scene_first() {
        let backend = MockBackend::with_events([InputEvent::PointerClick { x: 0, y: 0 }]);
        let mut win = Window::new(backend, coords(), Color::GREEN2).unwrap();
        win.sdi_mut()
            .create(
                "t",
                Shape::Text {
                    anchor: Point::new(5.0, 5.0),
                },
            )
            .text = Some("Total: 0".into());
        win.get_mouse().unwrap();
        assert_eq!(win.backend().swaps, 1);
        assert_eq!(win.backend().clears, vec![Color::GREEN2]);
        assert!(win.backend().has_text("Total: 0"));
    }

    #[test]
    fn close_is_idempotent() {
        let mut win = Window::new(MockBackend::new(), coords(), Color::GREEN2).unwrap();
        win.close().unwrap();
        win.close().unwrap();
        assert!(win.backend().shut_down);
    }
}
