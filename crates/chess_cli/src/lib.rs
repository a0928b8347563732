//! Terminal front end for `chess_rules`: two people share one prompt and
//! type moves as `e2 e4`.

pub mod config;
pub mod input;
pub mod render;
pub mod session;

pub use config::{CliConfig, DisplayConfig};
pub use input::{Command, ParseError, parse_command};
pub use render::render_board;
pub use session::{Outcome, Session};
