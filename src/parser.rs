pub use config::Config;

use colored::Colorize;
use log::{debug, trace, warn};
use std::collections::{BTreeMap, HashMap};
use std::process;

use crate::action::Action;
use crate::error::{Error, Result};
use crate::spec::flag::{self, Token};
use crate::spec::{Arg, Flag, FlagSet};

pub mod config;
pub mod usage;

/// Flags seen on the command line hashed by shorthand. Value flags map to the
/// value given, presence-only flags map to "true".
pub type Matches = HashMap<String, String>;

/// Flag registry and dispatcher. Flags are registered once at start-up, then
/// `parse` matches the process arguments against them and runs the action of
/// every flag that was present.
pub struct Parser<'a> {
    config: Config,
    flags: FlagSet<'a>,
    operands: Vec<String>,
}

impl<'a> Parser<'a> {
    pub fn new(config: Config) -> Parser<'a> {
        Parser {
            config,
            flags: FlagSet::new(),
            operands: Vec::new(),
        }
    }

    /// Add a fully built flag to the registry. A flag that reuses a
    /// shorthand replaces the earlier definition.
    ///
    /// # Errors
    ///
    /// * InvalidName - the shorthand cannot appear on a command line
    /// * MissingAction - the flag was built without an action
    pub fn insert(&mut self, flag: Flag<'a>) -> Result<()> {
        flag.validate()?;

        if self.config.debug {
            if let Some(action) = flag.action() {
                debug!(
                    "wrapping action of shape {} for -{}",
                    action.shape(),
                    flag.short()
                );
            }
        }

        if self.flags.contains_key(flag.short()) {
            warn!("flag -{} redefined, keeping the last one", flag.short());
        }

        self.flags.insert(flag.short().to_owned(), flag);
        Ok(())
    }

    /// Register a flag under `short` with an already adapted action.
    /// `required` is stored but never checked.
    pub fn register(
        &mut self,
        name: &str,
        short: &str,
        required: bool,
        arg: Arg,
        help: &str,
        action: Action<'a>,
    ) -> Result<()> {
        self.insert(Flag::new(name, short, required, arg, help, action))
    }

    /// Same as `register`, and also attach the list of values the flag is
    /// meant to take. The list shows up in the usage listing only.
    #[allow(clippy::too_many_arguments)]
    pub fn register_with_options<S: AsRef<str>>(
        &mut self,
        name: &str,
        short: &str,
        required: bool,
        arg: Arg,
        help: &str,
        action: Action<'a>,
        options: &[S],
    ) -> Result<()> {
        self.insert(Flag::new(name, short, required, arg, help, action).set_options(options))
    }

    /// Register a flag that has no action; read it back from the matches.
    pub fn add(
        &mut self,
        name: &str,
        short: &str,
        required: bool,
        arg: Arg,
        help: &str,
    ) -> Result<()> {
        self.register(name, short, required, arg, help, Action::noop())
    }

    pub fn register_no_arg<F, R>(
        &mut self,
        name: &str,
        short: &str,
        required: bool,
        arg: Arg,
        help: &str,
        callback: F,
    ) -> Result<()>
    where
        F: FnMut() -> R + 'a,
    {
        self.register(name, short, required, arg, help, Action::no_arg(callback))
    }

    pub fn register_text_arg<F, R>(
        &mut self,
        name: &str,
        short: &str,
        required: bool,
        arg: Arg,
        help: &str,
        callback: F,
    ) -> Result<()>
    where
        F: FnMut(&str) -> R + 'a,
    {
        self.register(name, short, required, arg, help, Action::text(callback))
    }

    pub fn register_bool_arg<F, R>(
        &mut self,
        name: &str,
        short: &str,
        required: bool,
        arg: Arg,
        help: &str,
        callback: F,
    ) -> Result<()>
    where
        F: FnMut(bool) -> R + 'a,
    {
        self.register(name, short, required, arg, help, Action::boolean(callback))
    }

    pub fn register_list_arg<F, R>(
        &mut self,
        name: &str,
        short: &str,
        required: bool,
        arg: Arg,
        help: &str,
        callback: F,
    ) -> Result<()>
    where
        F: FnMut(Vec<String>) -> R + 'a,
    {
        self.register(name, short, required, arg, help, Action::list(callback))
    }

    /// Parse the process arguments, skipping the program name.
    ///
    /// # Errors
    ///
    /// * InvalidUtf8 - an argument is not valid unicode
    /// * anything `try_parse_from` returns
    pub fn try_parse(&mut self) -> Result<Matches> {
        let args = std::env::args_os()
            .skip(1)
            .map(|arg| {
                arg.into_string()
                    .map_err(|raw| Error::InvalidUtf8(raw.to_string_lossy().into_owned()))
            })
            .collect::<Result<Vec<String>>>()?;

        self.try_parse_from(args)
    }

    /// Match `args` (program name already removed) against the registered
    /// flags, then run the action of every flag that was seen, ordered by
    /// shorthand. Nothing is dispatched unless the whole argument list
    /// parses. Parsing stops at the first operand or at `--`; whatever is
    /// left is kept in `operands()`.
    ///
    /// # Errors
    ///
    /// * BadSyntax
    /// * UnknownFlag
    /// * MissingValue
    /// * InvalidBool
    /// * HelpRequested - `-h`/`-help` given and not registered
    pub fn try_parse_from<I, S>(&mut self, args: I) -> Result<Matches>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.operands.clear();

        let mut tokens = args.into_iter().map(|a| a.as_ref().to_owned());
        let mut seen: BTreeMap<String, String> = BTreeMap::new();

        while let Some(text) = tokens.next() {
            let (name, value) = match flag::classify(&text)? {
                Token::Operand => {
                    self.operands.push(text);
                    self.operands.extend(tokens.by_ref());
                    break;
                }
                Token::Terminator => {
                    self.operands.extend(tokens.by_ref());
                    break;
                }
                Token::Flag { name, value } => (name, value),
            };

            let flag_spec = match self.flags.get(&name) {
                Some(spec) => spec,
                None if name == "h" || name == "help" => return Err(Error::HelpRequested),
                None => return Err(Error::UnknownFlag(name)),
            };

            let observed = if flag_spec.arg_spec().takes_value() {
                // the next token is the value even if it looks like a flag
                match value.or_else(|| tokens.next()) {
                    Some(v) => v,
                    None => return Err(Error::MissingValue(name)),
                }
            } else {
                if let Some(v) = value {
                    if flag::parse_bool(&v).is_none() {
                        return Err(Error::InvalidBool { flag: name, value: v });
                    }
                }
                "true".to_owned()
            };

            // a later value overwrites an earlier one
            seen.insert(name, observed);
        }

        let mut matches = Matches::new();
        for (short, value) in seen {
            if let Some(flag_spec) = self.flags.get_mut(&short) {
                let arg = if flag_spec.arg_spec().takes_value() {
                    value.as_str()
                } else {
                    ""
                };
                trace!("dispatching -{} with {:?}", short, arg);
                flag_spec.dispatch(arg);
            }
            matches.insert(short, value);
        }

        debug!(
            "parsed {} flag(s) and {} operand(s)",
            matches.len(),
            self.operands.len()
        );

        Ok(matches)
    }

    /// Like `try_parse` but any error ends the process after printing the
    /// usage listing to stderr.
    pub fn parse(&mut self) -> Matches {
        match self.try_parse() {
            Ok(matches) => matches,
            Err(error) => self.exit_with(error),
        }
    }

    /// Like `try_parse_from` but any error ends the process after printing
    /// the usage listing to stderr.
    pub fn parse_from<I, S>(&mut self, args: I) -> Matches
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.try_parse_from(args) {
            Ok(matches) => matches,
            Err(error) => self.exit_with(error),
        }
    }

    pub fn usage(&self) -> String {
        usage::usage(&self.config.name, &self.flags)
    }

    pub fn flags(&self) -> &FlagSet<'a> {
        &self.flags
    }

    pub fn get(&self, short: &str) -> Option<&Flag<'a>> {
        self.flags.get(short)
    }

    /// Tokens left over after flag parsing stopped during the last parse
    pub fn operands(&self) -> &[String] {
        &self.operands
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn exit_with(&self, error: Error) -> ! {
        if error != Error::HelpRequested {
            eprintln!("{} {}", "error:".red().bold(), error);
        }
        eprint!("{}", self.usage());
        process::exit(error.exit_code())
    }
}
