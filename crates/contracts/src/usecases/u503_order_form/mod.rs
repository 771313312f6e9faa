//! Order form controller.
//!
//! Every UI event becomes a [`FormCommand`]; [`handle`] turns the current
//! [`FormState`] and a command into the next state, the message to show and
//! an optional effect the UI shell has to perform (the document download).

pub mod command;
pub mod controller;
pub mod state;

pub use command::FormCommand;
pub use controller::{handle, picker_options, preview_order, FormEffect, Transition};
pub use state::{ClientMode, FormMessage, FormState, MessageLevel};
