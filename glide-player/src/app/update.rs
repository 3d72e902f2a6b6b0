use iced::Task;

use glide_core::CarouselEvent;

use super::{Message, State};

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    let mut task = Task::none();

    match message {
        Message::Pointer(input) => {
            state.carousel.handle_pointer(input);
        }
        Message::Resized(size) => {
            state.carousel.resize(Some(size));
        }
        Message::Frame(now) => {
            let dt = state.clock.delta(now);
            state.carousel.tick(dt);
        }
        Message::Navigate(step) => {
            let middle = state.carousel.current_slide_in_middle() as isize;
            state.carousel.set_current_slide(middle + step);
        }
        Message::CloseRequested(id) => {
            state.carousel.dispose();
            task = iced::window::close(id);
        }
    }

    for event in state.carousel.drain_events() {
        match event {
            CarouselEvent::MiddleChanged(index) => {
                log::trace!("slide {index} is now in the middle")
            }
            CarouselEvent::TransitionFinished { middle } => {
                log::debug!("settled on slide {middle}")
            }
            CarouselEvent::AutoplayStopped => {
                log::info!("autoplay stopped by user interaction")
            }
        }
    }

    // A stale timestamp would turn the next frame into one large step.
    if !state.carousel.wants_frames() {
        state.clock.pause();
    }
    if state.carousel.take_redraw() {
        state.cache.clear();
    }

    task
}
