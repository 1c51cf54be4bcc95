use lexical_sort::{natural_lexical_cmp, StringSort};

use crate::spec::{Flag, FlagSet};

/// Build the usage listing printed when parsing fails or help is asked for.
/// Flags are sorted naturally by shorthand. Presence-only flags with a one
/// character shorthand keep their help on the same line.
pub fn usage(name: &str, flags: &FlagSet) -> String {
    let mut flags: Vec<&Flag> = flags.values().collect();
    flags.string_sort_unstable(natural_lexical_cmp);

    let mut usage = format!("Usage of {}:\n", name);
    for flag in flags.iter() {
        let mut entry = format!("  -{}", flag.short());
        if flag.arg_spec().takes_value() {
            entry += " string";
        }

        if entry.len() <= "  -x".len() {
            entry += "\t";
        } else {
            entry += "\n    \t";
        }
        entry += flag.help();

        if !flag.options().is_empty() {
            entry += &format!(" (one of: {})", flag.options().join(", "));
        }

        usage += &entry;
        usage += "\n";
    }

    usage
}
