use std::fmt;

/// Callback shape an `Action` was adapted from. Only used for diagnostics;
/// dispatch never looks at it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Shape {
    NoArg,
    Text,
    Bool,
    List,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let shape_str = match self {
            Shape::NoArg => "no-arg",
            Shape::Text => "text",
            Shape::Bool => "bool",
            Shape::List => "list",
        };
        write!(f, "{}", shape_str)
    }
}

/// A caller supplied callback normalized to take a single string. Build one
/// with the constructor matching the callback's parameter; anything the
/// callback returns is dropped.
pub struct Action<'a> {
    shape: Shape,
    callback: Box<dyn FnMut(&str) + 'a>,
}

impl<'a> Action<'a> {
    /// Callback takes nothing. The incoming string is never forwarded.
    pub fn no_arg<F, R>(mut f: F) -> Action<'a>
    where
        F: FnMut() -> R + 'a,
    {
        Action {
            shape: Shape::NoArg,
            callback: Box::new(move |_| {
                f();
            }),
        }
    }

    /// Callback takes the flag value as is.
    pub fn text<F, R>(mut f: F) -> Action<'a>
    where
        F: FnMut(&str) -> R + 'a,
    {
        Action {
            shape: Shape::Text,
            callback: Box::new(move |arg| {
                f(arg);
            }),
        }
    }

    /// Callback takes a bool. Only the exact text "true" maps to `true`,
    /// everything else (including "TRUE" and "1") is `false`.
    pub fn boolean<F, R>(mut f: F) -> Action<'a>
    where
        F: FnMut(bool) -> R + 'a,
    {
        Action {
            shape: Shape::Bool,
            callback: Box::new(move |arg| {
                f(arg == "true");
            }),
        }
    }

    /// Callback takes a list of strings and gets a single element list.
    pub fn list<F, R>(mut f: F) -> Action<'a>
    where
        F: FnMut(Vec<String>) -> R + 'a,
    {
        Action {
            shape: Shape::List,
            callback: Box::new(move |arg| {
                f(vec![arg.to_owned()]);
            }),
        }
    }

    /// Action that does nothing, for flags that are only read back from the
    /// parse result.
    pub fn noop() -> Action<'a> {
        Action::no_arg(|| {})
    }

    /// Run the wrapped callback with a flag value.
    pub fn call(&mut self, arg: &str) {
        (self.callback)(arg)
    }

    /// Shape the callback was adapted from.
    pub fn shape(&self) -> Shape {
        self.shape
    }
}

impl<'a> fmt::Debug for Action<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("shape", &self.shape).finish()
    }
}
