use std::collections::BTreeMap;
use std::fmt;

use super::arg::Arg;
use crate::action::Action;
use crate::error::{Error, Result};

pub use token::{classify, parse_bool, Token};

mod token;

/// Flags hashed by shorthand. Ordered so that dispatch and lookups visit
/// flags in lexicographic order of their shorthand.
pub type FlagSet<'a> = BTreeMap<String, Flag<'a>>;

/// Specification for a command line flag
pub struct Flag<'a> {
    name: String,
    short: String,
    required: bool,
    arg: Arg,
    help: String,
    action: Option<Action<'a>>,
    options: Vec<String>,
}

impl<'a> Flag<'a> {
    pub fn new(
        name: &str,
        short: &str,
        required: bool,
        arg: Arg,
        help: &str,
        action: Action<'a>,
    ) -> Flag<'a> {
        Flag::build(name, short)
            .set_required(required)
            .set_arg(arg)
            .set_help(help)
            .set_action(action)
    }

    /// Start a flag with no help, no value and no action. The action has to
    /// be set before the flag can be inserted into a `Parser`.
    pub fn build(name: &str, short: &str) -> Flag<'a> {
        Flag {
            name: name.into(),
            short: short.into(),
            required: false,
            arg: Arg::None,
            help: "".into(),
            action: None,
            options: Vec::new(),
        }
    }

    pub fn set_required(mut self, required: bool) -> Flag<'a> {
        self.required = required;
        self
    }

    pub fn set_arg(mut self, arg: Arg) -> Flag<'a> {
        self.arg = arg;
        self
    }

    pub fn set_help(mut self, help: &str) -> Flag<'a> {
        self.help = help.into();
        self
    }

    pub fn set_action(mut self, action: Action<'a>) -> Flag<'a> {
        self.action = Some(action);
        self
    }

    pub fn set_options<S: AsRef<str>>(mut self, options: &[S]) -> Flag<'a> {
        self.options = options.iter().map(|o| o.as_ref().to_owned()).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short(&self) -> &str {
        &self.short
    }

    /// Recorded for the caller's benefit only; parsing never checks it.
    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn arg_spec(&self) -> Arg {
        self.arg
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn action(&self) -> Option<&Action<'a>> {
        self.action.as_ref()
    }

    /// Allowed values, in registration order. Not enforced while parsing.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Check that this flag can live in a FlagSet: the shorthand must be
    /// usable on a command line and an action must be attached.
    pub fn validate(&self) -> Result<()> {
        if self.short.is_empty() || self.short.starts_with('-') || self.short.contains('=') {
            return Err(Error::InvalidName(self.short.clone()));
        }
        if self.action.is_none() {
            return Err(Error::MissingAction(self.short.clone()));
        }
        Ok(())
    }

    pub(crate) fn dispatch(&mut self, arg: &str) {
        if let Some(ref mut action) = self.action {
            action.call(arg);
        }
    }
}

impl<'a> fmt::Debug for Flag<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flag")
            .field("name", &self.name)
            .field("short", &self.short)
            .field("required", &self.required)
            .field("arg", &self.arg)
            .field("help", &self.help)
            .field("action", &self.action)
            .field("options", &self.options)
            .finish()
    }
}

impl<'a> AsRef<str> for Flag<'a> {
    fn as_ref(&self) -> &str {
        self.short()
    }
}
