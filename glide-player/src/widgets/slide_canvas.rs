//! Canvas widget that draws the carousel and feeds it pointer input.

use glide_core::{
    Carousel, Color, DrawSurface, Point, PointerInput, PointerPhase, Rect,
};
use iced::advanced::graphics::core::Image;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Program};
use iced::{Event, Rectangle, Renderer, Theme, mouse, touch, window};

use crate::app::Message;
use crate::slides::Slide;

/// Adapts an iced canvas frame to the carousel's drawing calls.
pub struct FrameSurface<'a> {
    frame: &'a mut Frame,
}

impl<'a> FrameSurface<'a> {
    pub fn new(frame: &'a mut Frame) -> Self {
        Self { frame }
    }
}

impl std::fmt::Debug for FrameSurface<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameSurface")
            .field("size", &self.frame.size())
            .finish()
    }
}

fn to_iced(color: Color) -> iced::Color {
    iced::Color::from_rgb8(color.r, color.g, color.b)
}

impl DrawSurface<Slide> for FrameSurface<'_> {
    fn clear(&mut self, color: Color) {
        let size = self.frame.size();
        self.frame
            .fill_rectangle(iced::Point::ORIGIN, size, to_iced(color));
    }

    fn save(&mut self) {
        self.frame.push_transform();
    }

    fn restore(&mut self) {
        self.frame.pop_transform();
    }

    fn draw_image(&mut self, slide: &Slide, dest: Rect) {
        self.frame.draw_image(
            Rectangle::new(
                iced::Point::new(dest.x, dest.y),
                iced::Size::new(dest.width, dest.height),
            ),
            Image::new(slide.handle().clone()),
        );
    }
}

/// Which pointer currently has its move/end listeners attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attached {
    Mouse,
    Touch(touch::Finger),
}

/// Per-widget state: the attached pointer and the last bounds reported to
/// the carousel.
#[derive(Debug, Default)]
pub struct PointerListeners {
    attached: Option<Attached>,
    last_position: Point,
    reported_size: Option<iced::Size>,
}

impl PointerListeners {
    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    /// Returns the new size the first time bounds differ from the last
    /// reported ones.
    pub fn track_bounds(&mut self, bounds: Rectangle) -> Option<iced::Size> {
        let size = bounds.size();
        if self.reported_size == Some(size) {
            return None;
        }
        self.reported_size = Some(size);
        Some(size)
    }

    /// Converts a window event into canvas-relative pointer input.
    ///
    /// Moves and ends are only forwarded while the pointer that started the
    /// gesture is attached. Leaving the canvas with the mouse pressed ends the
    /// gesture.
    pub fn normalize(
        &mut self,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<PointerInput> {
        let local =
            |p: iced::Point| Point::new(p.x - bounds.x, p.y - bounds.y);

        let input = match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                self.attached = Some(Attached::Mouse);
                PointerInput::mouse(
                    PointerPhase::Down,
                    Point::new(position.x, position.y),
                )
            }
            Event::Mouse(mouse::Event::CursorMoved { position })
                if self.attached == Some(Attached::Mouse) =>
            {
                if bounds.contains(*position) {
                    PointerInput::mouse(PointerPhase::Move, local(*position))
                } else {
                    self.attached = None;
                    PointerInput::mouse(PointerPhase::Leave, local(*position))
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if self.attached == Some(Attached::Mouse) =>
            {
                self.attached = None;
                let position =
                    cursor.position().map_or(self.last_position, local);
                PointerInput::mouse(PointerPhase::Up, position)
            }
            Event::Mouse(mouse::Event::CursorLeft)
                if self.attached == Some(Attached::Mouse) =>
            {
                self.attached = None;
                PointerInput::mouse(PointerPhase::Leave, self.last_position)
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if !bounds.contains(*position) {
                    return None;
                }
                self.attached = Some(Attached::Touch(*id));
                PointerInput::touch(PointerPhase::Down, local(*position))
            }
            Event::Touch(touch::Event::FingerMoved { id, position })
                if self.attached == Some(Attached::Touch(*id)) =>
            {
                PointerInput::touch(PointerPhase::Move, local(*position))
            }
            Event::Touch(touch::Event::FingerLifted { id, position })
                if self.attached == Some(Attached::Touch(*id)) =>
            {
                self.attached = None;
                PointerInput::touch(PointerPhase::Up, local(*position))
            }
            Event::Touch(touch::Event::FingerLost { id, position })
                if self.attached == Some(Attached::Touch(*id)) =>
            {
                self.attached = None;
                PointerInput::touch(PointerPhase::Cancel, local(*position))
            }
            _ => return None,
        };

        self.last_position = input.position;
        Some(input)
    }
}

/// Borrowed view of the carousel for one `view` pass.
pub struct SlideCanvas<'a> {
    carousel: &'a Carousel<Slide>,
    cache: &'a Cache,
}

impl std::fmt::Debug for SlideCanvas<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideCanvas")
            .field("mode", &self.carousel.mode())
            .field("slides", &self.carousel.slides().len())
            .finish_non_exhaustive()
    }
}

impl<'a> SlideCanvas<'a> {
    pub fn new(carousel: &'a Carousel<Slide>, cache: &'a Cache) -> Self {
        Self { carousel, cache }
    }
}

impl Program<Message> for SlideCanvas<'_> {
    type State = PointerListeners;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        if let Event::Window(window::Event::RedrawRequested(_)) = event {
            let size = state.track_bounds(bounds)?;
            return Some(canvas::Action::publish(Message::Resized(
                glide_core::Size::new(size.width, size.height),
            )));
        }

        let input = state.normalize(event, bounds, cursor)?;
        Some(canvas::Action::publish(Message::Pointer(input)).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            self.carousel.draw(&mut FrameSurface::new(frame));
        });
        vec![geometry]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.attached == Some(Attached::Mouse) {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) && !self.carousel.slides().is_empty() {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
