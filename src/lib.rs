//=========================================================================
// Aetheric Stage Library Root
//
// This crate defines the public API surface of the Aetheric Stage scene
// navigator.
//
// Responsibilities:
// - Expose the navigation facade (`Navigator`, `NavigatorBuilder`)
// - Keep the Winit bridge (`platform`) hidden from end users
// - Provide clean separation between the navigation state machine and
//   the collaborators it drives (scenes, transitions, stage, tweens)
//
// Typical usage:
// ```no_run
// use aetheric_stage::prelude::*;
//
// let mut navigator = NavigatorBuilder::new().with_scenes(scenes).build();
// navigator.start()?;
//
// // once per host frame:
// navigator.update(dt)?;
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the navigation state machine and its collaborators
// (scene contract, transitions, stage, tweens). It is exposed publicly so
// applications can implement custom scenes and transition strategies.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` maps Winit window events into stage events and is kept
// private, as it is not part of the public API surface.
//
// `builder` defines the navigator configuration entry point.
//
mod builder;
mod platform;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the facade types so applications can simply
// `use aetheric_stage::{Navigator, NavigatorBuilder};`.
//
pub use builder::NavigatorBuilder;
pub use crate::core::error::NavError;
pub use crate::core::nav::Navigator;
