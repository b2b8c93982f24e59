//! A headless scroll surface: one scroll state fed by drag, touch and wheel input, with
//! momentum after a drag is released.
//!
//! For host-side glue (raw pointer/touch/wheel events, window-scoped listeners, a frame
//! loop), see the `scrollview-adapter` crate.
//!
//! The core is UI-agnostic. A host is expected to provide:
//! - a [`Bar`] that owns the authoritative [`ScrollState`] and draws it
//! - input coordinates already projected onto the bar's scroll axis
//! - a frame callback (`ScrollController::on_frame(now_ms)`) while `needs_frame()` is true
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod bar;
mod controller;
mod emitter;
mod momentum;
mod options;
mod state;
mod subscription;
mod types;
mod velocity;


pub use bar::{Bar, HeadlessBar};
pub use controller::{ScrollController, WheelBatch};
pub use emitter::{ListenerId, ScrollListener};
pub use momentum::{Momentum, MotionPhase, MotionTick};
pub use options::{ControllerOptions, MomentumOptions};
pub use state::ScrollState;
pub use subscription::Subscription;
pub use types::{BarPosition, GestureState, Orientation};
pub use velocity::VelocityTracker;
