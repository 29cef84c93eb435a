//! Single-threaded event loop
//!
//! calloop drives everything on one thread: a timer source fires frame
//! ticks (~60 Hz) that step animations, and a channel source delivers
//! pointer events injected by the frontend. The loop stops as soon as a
//! tap schedules a launch; the caller then spawns the external process.

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use calloop::channel::{self, Channel, Sender};
use calloop::timer::{TimeoutAction, Timer};
use calloop::EventLoop;

use crate::controller::Controller;
use crate::input::PointerEvent;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Create the channel a frontend uses to inject pointer events.
pub fn input_channel() -> (Sender<PointerEvent>, Channel<PointerEvent>) {
    channel::channel()
}

/// Run until a tap schedules a launch (or the channel closes and the
/// process is interrupted). Returns the exec command to hand off, if any.
pub fn run(mut controller: Controller, events: Channel<PointerEvent>) -> Result<Option<String>> {
    let mut event_loop: EventLoop<Controller> = EventLoop::try_new()?;
    let handle = event_loop.handle();
    let signal = event_loop.get_signal();

    let tick_signal = signal.clone();
    handle
        .insert_source(
            Timer::from_duration(FRAME_INTERVAL),
            move |_deadline, _, controller: &mut Controller| {
                controller.tick(Instant::now());
                if controller.launch_pending() {
                    tick_signal.stop();
                }
                TimeoutAction::ToDuration(FRAME_INTERVAL)
            },
        )
        .map_err(|err| anyhow!("failed to register frame timer: {}", err))?;

    handle
        .insert_source(events, move |event, _, controller| {
            if let channel::Event::Msg(pointer) = event {
                controller.handle_pointer(pointer, Instant::now());
                if controller.launch_pending() {
                    signal.stop();
                }
            }
        })
        .map_err(|err| anyhow!("failed to register input channel: {}", err))?;

    event_loop.run(None, &mut controller, |_| {})?;

    Ok(controller.take_pending_launch())
}
