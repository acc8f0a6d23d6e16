//! Hooks that step frame-driven state from a component coroutine.
//!
//! A driver parks on its channel until kicked, then steps the animated value
//! every `FRAME_MS` until it settles and parks again.

use dioxus::prelude::*;
use futures::StreamExt;

use crate::config::{ENTRANCE_MS, FRAME_MS, LIST_BATCH_SIZE, LIST_INITIAL_BATCH};
use crate::core::animation::{Animated, EntranceAnimation};
use crate::core::listing::RenderWindow;
use crate::core::timing::sleep_ms;

/// Drive `state` toward rest. Send `()` after every retarget.
pub fn use_frame_driver<T: Animated + 'static>(mut state: Signal<T>) -> Coroutine<()> {
    use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        while rx.next().await.is_some() {
            while !state.peek().is_settled() {
                sleep_ms(FRAME_MS).await;
                state.write().step(FRAME_MS as f64);
            }
        }
    })
}

/// One-shot entrance animation, started on first mount.
pub fn use_entrance() -> Signal<EntranceAnimation> {
    let mut entrance = use_signal(|| EntranceAnimation::new(ENTRANCE_MS));
    let driver = use_frame_driver(entrance);

    use_effect(move || {
        if entrance.write().start() {
            driver.send(());
        }
    });

    entrance
}

/// Progressive rendering window over `total` items, grown once per frame.
pub fn use_render_window(total: usize) -> Signal<RenderWindow> {
    let mut window =
        use_signal(move || RenderWindow::new(total, LIST_INITIAL_BATCH, LIST_BATCH_SIZE));

    use_future(move || async move {
        while !window.peek().is_complete() {
            sleep_ms(FRAME_MS).await;
            window.write().advance();
        }
    });

    window
}
