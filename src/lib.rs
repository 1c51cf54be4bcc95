//! # argument-parser
//!
//! Register command line flags and bind each one to a callback that is run
//! when the flag shows up in the process arguments.
//!
//! Callbacks come in four shapes (no argument, text, boolean, list of text).
//! Each shape has its own `Action` constructor, so the shape is picked when
//! the flag is registered and the parser only ever deals with one uniform
//! `FnMut(&str)` call.
//!
//! ```no_run
//! use argument_parser::{Arg, Config, Parser};
//!
//! let mut parser = Parser::new(Config::new("demo"));
//! parser
//!     .register_text_arg("output", "o", false, Arg::Required, "Write output here", |o| println!("{}", o))
//!     .expect("valid flag");
//! parser
//!     .register_no_arg("verbose", "v", false, Arg::None, "Print more info", || println!("verbose"))
//!     .expect("valid flag");
//!
//! let matches = parser.parse();
//! ```
pub mod action;
pub mod error;
pub mod logger;
pub mod parser;
pub mod spec;

pub use action::{Action, Shape};
pub use error::{Error, Result};
pub use parser::{Config, Matches, Parser};
pub use spec::{Arg, Flag, FlagSet};
