//! Client side of relation: the three-step wizard and the backends it talks to.
//!
//! - [`wizard`]: [`Wizard`] state machine (input → review → result).
//! - [`backend`]: [`RelationBackend`] with [`RemoteBackend`] (HTTP) and [`LocalBackend`] (in-process).
//! - [`command`]: line commands for the terminal driver.
//! - [`display`]: plain-text rendering.

pub mod backend;
pub mod command;
pub mod display;
pub mod wizard;

pub use backend::{BackendError, LocalBackend, RelationBackend, RemoteBackend};
pub use command::{command_hint, parse_command, WizardCommand};
pub use display::{render, response_lines};
pub use wizard::{Action, ResultView, Step, Wizard, WizardError, WizardState};
