use iced::widget::{Canvas, container};
use iced::{Element, Length};

use super::{Message, State};
use crate::widgets::SlideCanvas;

pub fn view(state: &State) -> Element<'_, Message> {
    // Until the first resize the canvas takes the whole window so it has
    // bounds to report.
    let height = state
        .carousel
        .geometry()
        .map_or(Length::Fill, |frame| Length::Fixed(frame.height));

    let canvas = Canvas::new(SlideCanvas::new(&state.carousel, &state.cache))
        .width(Length::Fill)
        .height(height);

    container(canvas)
        .width(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
