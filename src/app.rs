// SPDX-License-Identifier: GPL-3.0-only

//! Application model and render loop.
//!
//! A single-window iced application: the immutable slot map is built once at
//! startup, the key-state tracker is the only mutable state, and the one
//! message variant applies normalized key transitions delivered by the input
//! subscription. The keyboard is drawn on a canvas whose cache is cleared on
//! every mutation, so idle frames cost nothing and key changes repaint at
//! the display rate.

use std::collections::HashMap;

use iced::alignment;
use iced::mouse;
use iced::widget::canvas::{self, Canvas};
use iced::widget::text::Shaping;
use iced::window;
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Size, Subscription, Task, Theme};

use crate::app_settings;
use crate::geometry::{self, KeySlot, SlotId};
use crate::input;
use crate::layout::Layout;
use crate::render::{self, KeyFrame};
use crate::settings::Settings;
use crate::state::{KeyState, KeyTransition};

/// Fill color of idle keys.
const IDLE_KEY_FILL: Color = Color::from_rgb(
    50.0 / 255.0,
    50.0 / 255.0,
    50.0 / 255.0,
);

/// Border color of idle keys.
const IDLE_KEY_BORDER: Color = Color::from_rgb(
    30.0 / 255.0,
    30.0 / 255.0,
    30.0 / 255.0,
);

/// Runs the visualizer window until it is closed.
pub fn run(settings: Settings, layout: &'static Layout) -> Result<(), Box<dyn std::error::Error>> {
    let slots = geometry::build_slots(layout)?;
    iced::application(app_settings::APP_TITLE, App::update, App::view)
        .subscription(App::subscription)
        .theme(|_| Theme::Dark)
        .window(window::Settings {
            size: Size::new(app_settings::WINDOW_WIDTH, app_settings::WINDOW_HEIGHT),
            resizable: false,
            ..window::Settings::default()
        })
        .run_with(move || App::new(settings, layout, slots))?;
    Ok(())
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A normalized press or release arrived from the listener thread.
    Key(KeyTransition),
}

struct App {
    settings: Settings,
    layout: &'static Layout,
    slots: HashMap<SlotId, KeySlot>,
    state: KeyState,
    cache: canvas::Cache,
}

impl App {
    fn new(
        settings: Settings,
        layout: &'static Layout,
        slots: HashMap<SlotId, KeySlot>,
    ) -> (Self, Task<Message>) {
        let state = KeyState::new(geometry::allowed_keys(&slots));
        (
            Self {
                settings,
                layout,
                slots,
                state,
                cache: canvas::Cache::new(),
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Key(transition) => {
                self.state.apply(transition);
                self.cache.clear();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        Canvas::new(Board { app: self })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::run(input::transitions).map(Message::Key)
    }
}

/// Canvas program drawing the whole keyboard from the frame snapshot.
struct Board<'a> {
    app: &'a App,
}

impl canvas::Program<Message> for Board<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let app = self.app;
        let board = app.cache.draw(renderer, bounds.size(), |frame| {
            frame.fill_rectangle(
                Point::ORIGIN,
                frame.size(),
                color_rgb(app.settings.background_color),
            );
            for key in render::key_frames(&app.slots, app.layout, &app.state) {
                draw_key(frame, &key, &app.settings);
            }
        });
        vec![board]
    }
}

fn draw_key(frame: &mut canvas::Frame, key: &KeyFrame, settings: &Settings) {
    let top_left = Point::new(key.rect.x, key.rect.y);
    let size = Size::new(key.rect.width, key.rect.height);
    let cap = canvas::Path::rounded_rectangle(top_left, size, app_settings::KEY_CORNER_RADIUS.into());

    if key.pressed {
        frame.fill(
            &cap,
            color_rgba(settings.keypress_color, settings.keypress_opacity),
        );
        frame.stroke(
            &cap,
            canvas::Stroke::default()
                .with_width(app_settings::PRESSED_BORDER_WIDTH)
                .with_color(Color::WHITE),
        );
    } else {
        frame.fill(&cap, IDLE_KEY_FILL);
        frame.stroke(
            &cap,
            canvas::Stroke::default()
                .with_width(app_settings::IDLE_BORDER_WIDTH)
                .with_color(IDLE_KEY_BORDER),
        );
    }

    let (cx, cy) = key.rect.center();
    frame.fill_text(canvas::Text {
        content: key.label.clone(),
        position: Point::new(cx, cy),
        color: color_rgb(key.text_color),
        size: (settings.font_size as f32).into(),
        horizontal_alignment: alignment::Horizontal::Center,
        vertical_alignment: alignment::Vertical::Center,
        shaping: Shaping::Advanced,
        ..canvas::Text::default()
    });
}

fn color_rgb([r, g, b]: [u8; 3]) -> Color {
    Color::from_rgb8(r, g, b)
}

fn color_rgba([r, g, b]: [u8; 3], alpha: u8) -> Color {
    Color::from_rgba8(r, g, b, f32::from(alpha) / 255.0)
}
