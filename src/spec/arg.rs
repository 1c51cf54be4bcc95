/// Flag argument specification. A flag either stands alone (its presence is
/// the value) or requires a value, given as `-flag value` or `-flag=value`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Arg {
    #[default]
    None,
    Required,
}

impl Arg {
    pub fn takes_value(&self) -> bool {
        *self == Arg::Required
    }
}
