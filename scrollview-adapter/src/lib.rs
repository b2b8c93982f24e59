//! Host-side glue for the `scrollview` crate.
//!
//! `scrollview` is UI-agnostic and only understands scroll-axis coordinates, wheel deltas
//! and frame ticks. This crate provides the small, framework-neutral pieces a host needs
//! around it:
//!
//! - Raw pointer/touch/wheel event types, projected onto the bar's axis
//! - Window-scoped listener bindings that live exactly as long as a drag
//! - A composed [`ScrollView`] (content + bar + controller)
//! - A [`FrameLoop`] standing in for the host's per-frame callback
//!
//! This crate is intentionally framework-agnostic (no DOM/winit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod event;
mod frame;
mod listeners;
mod view;

#[cfg(test)]
mod tests;

pub use event::{DeltaMode, PointerEvent, TouchPoint, WheelEvent};
pub use frame::{FrameDriven, FrameLoop};
pub use listeners::{ListenerOwner, WindowEvent, WindowListeners};
pub use view::{Element, ScrollView, ViewOptions};
