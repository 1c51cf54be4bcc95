use argument_parser::{logger, Action, Arg, Config, Parser, Result};
use std::process;

/// Set this to any value to trace every flag registration on stderr
const DEBUG_ENV_VAR: &str = "ARGUMENT_PARSER_DEBUG";

fn register_flags(parser: &mut Parser) -> Result<()> {
    parser.register_text_arg(
        "output",
        "o",
        false,
        Arg::Required,
        "Write results to this file",
        |output| println!("output: {}", output),
    )?;
    parser.register_no_arg(
        "verbose",
        "v",
        false,
        Arg::None,
        "Print more info",
        || println!("verbose"),
    )?;
    parser.register_with_options(
        "level",
        "level",
        false,
        Arg::Required,
        "Logging level",
        Action::text(|level| println!("level: {}", level)),
        &["debug", "info", "warn"],
    )?;
    parser.register_list_arg(
        "tags",
        "tags",
        false,
        Arg::Required,
        "Tag to attach",
        |tags| println!("tags: {:?}", tags),
    )?;
    parser.register_bool_arg(
        "color",
        "color",
        false,
        Arg::Required,
        "Colorize output (true or false)",
        |color| println!("color: {}", color),
    )?;
    parser.register_bool_arg(
        "dry-run",
        "dry-run",
        false,
        Arg::None,
        "Do not write anything",
        |dry_run| println!("dry run: {}", dry_run),
    )?;
    parser.add("debug", "debug", false, Arg::None, "Enable debug mode")?;

    Ok(())
}

fn main() {
    let config =
        Config::new("argument-parser").with_debug(std::env::var_os(DEBUG_ENV_VAR).is_some());

    if let Err(error) = logger::init(&config) {
        eprintln!("{}", error);
        process::exit(1);
    }

    let mut parser = Parser::new(config);
    if let Err(error) = register_flags(&mut parser) {
        eprintln!("{}", error);
        process::exit(1);
    }

    let matches = parser.parse();

    let mut shorts: Vec<&String> = matches.keys().collect();
    shorts.sort();
    for short in shorts {
        println!("{}={}", short, matches[short]);
    }

    if !parser.operands().is_empty() {
        println!("operands: {}", parser.operands().join(" "));
    }
}
