// SPDX-License-Identifier: GPL-3.0-only

//! Background keyboard listener.
//!
//! [`transitions`] is the subscription stream the UI consumes: it spawns the
//! OS hook on a dedicated thread and forwards each normalized press/release
//! over a channel. The hook callback does nothing but an O(1) normalization
//! and a non-blocking send — it runs on the OS input-delivery thread, where
//! stalling delays key delivery system-wide.
//!
//! Cancellation is best effort: when the UI side drops the stream the sends
//! start failing and the events are discarded; rdev offers no way to unhook,
//! so the thread dies with the process.

use futures::channel::mpsc;
use futures::{SinkExt, Stream, StreamExt};

use crate::input::normalizer::Normalizer;
use crate::state::KeyTransition;

/// Stream of normalized key transitions from the global keyboard hook.
pub fn transitions() -> impl Stream<Item = KeyTransition> {
    iced::stream::channel(64, |mut output| async move {
        let (tx, mut rx) = mpsc::unbounded::<KeyTransition>();

        std::thread::spawn(move || {
            let mut normalizer = Normalizer::new();
            let result = rdev::listen(move |event| {
                let transition = match event.event_type {
                    rdev::EventType::KeyPress(key) => normalizer
                        .press(key, event.name.as_deref())
                        .map(KeyTransition::Press),
                    rdev::EventType::KeyRelease(key) => {
                        normalizer.release(key).map(KeyTransition::Release)
                    }
                    _ => None,
                };
                if let Some(transition) = transition {
                    // Receiver gone means the UI is shutting down.
                    let _ = tx.unbounded_send(transition);
                }
            });
            if let Err(err) = result {
                tracing::error!("keyboard hook failed: {err:?}");
            }
        });

        while let Some(transition) = rx.next().await {
            tracing::trace!(?transition, "key transition");
            if output.send(transition).await.is_err() {
                break;
            }
        }
    })
}
