use iced::event::{self, Event};
use iced::keyboard::{self, Key, key::Named};
use iced::{Subscription, window};

use super::{Message, State};

pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = vec![
        event::listen_with(on_key_press),
        window::close_requests().map(Message::CloseRequested),
    ];

    if state.carousel.wants_frames() {
        subscriptions.push(window::frames().map(Message::Frame));
    }

    Subscription::batch(subscriptions)
}

fn on_key_press(
    event: Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }

    let Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) =
        event
    else {
        return None;
    };
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key {
        Key::Named(Named::ArrowLeft) => Some(Message::Navigate(-1)),
        Key::Named(Named::ArrowRight) => Some(Message::Navigate(1)),
        _ => None,
    }
}
