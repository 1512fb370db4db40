use clap::{value_parser, Arg, ArgAction, Command};

use ttt_lib::config::{self};

pub fn cli() -> Command {
    Command::new("ttt")
        .about("Builds a truth table one variable or operator column at a time")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("execute")
            .short('e')
            .long("execute")
            .value_name("COMMANDS")
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .help("Run the given commands, separated by ';', instead of reading commands from stdin.")
            .long_help("Run the given commands, separated by ';', instead of reading commands from stdin.

For example, the table of a conjunction and its negation:
  ttt -e 'var; var; op 1 and 2 conj; op conj nand conj neg'"))

        .arg(Arg::new("reference")
            .short('r')
            .long("reference")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Display a table of every binary operator before anything else."))

        .arg(Arg::new("expressions")
            .short('x')
            .long("expressions")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Display the expression of each column below its label."))

        .arg(Arg::new("json")
            .short('j')
            .long("json")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Display tables as json."))

        .arg(Arg::new("no_colour")
            .long("no-colour")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Display truth values without colour."))

        .arg(Arg::new("true_marker")
            .long("true-marker")
            .value_name("MARKER")
            .value_parser(value_parser!(char))
            .required(false)
            .num_args(1)
            .help(format!("The marker displayed for true.
Default: {}", config::defaults::TRUE_MARKER)))

        .arg(Arg::new("false_marker")
            .long("false-marker")
            .value_name("MARKER")
            .value_parser(value_parser!(char))
            .required(false)
            .num_args(1)
            .help(format!("The marker displayed for false.
Default: {}", config::defaults::FALSE_MARKER)))

        .arg(Arg::new("padding")
            .long("padding")
            .value_name("SPACES")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The minimum number of spaces between columns.
Default: {}", config::defaults::PADDING)))

        .arg(Arg::new("markdown_help")
            .long("markdown-help")
            .action(ArgAction::SetTrue)
            .required(false)
            .hide(true)
            .help("Write help as markdown."))
}
