#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::io::{BufRead, IsTerminal, Write};

mod config_io;
#[cfg(feature = "log")]
mod logger;
mod parse;
mod session;
mod window;

use config_io::ConfigIO;
use session::{Flow, Session};

fn main() {
    #[cfg(feature = "log")]
    if let Err(e) = logger::init() {
        eprintln!("Failed to start logging: {e}");
    }

    let matches = parse::cli::cli().get_matches();

    let config = parse::config::config_from_args(&matches);
    let config_io = ConfigIO::from_args(&matches);

    if config_io.markdown_help {
        println!("{}", clap_markdown::help_markdown_command(&parse::cli::cli()));
        return;
    }

    let mut session = Session::new(config);
    let mut stdout = std::io::stdout();

    if config_io.reference {
        run(&mut session, "reference", &mut stdout);
    }

    let commands = config_io.commands();
    match commands {
        Some(commands) => {
            for command in commands {
                if run(&mut session, command, &mut stdout) == Flow::Quit {
                    break;
                }
            }
        }

        None => {
            let interactive = std::io::stdin().is_terminal();
            if interactive {
                println!("ttt {}, 'help' for commands", env!("CARGO_PKG_VERSION"));
            }

            let mut lines = std::io::stdin().lock().lines();
            loop {
                if interactive {
                    print!("> ");
                    let _ = stdout.flush();
                }

                let line = match lines.next() {
                    None => break,
                    Some(Ok(line)) => line,
                    Some(Err(e)) => {
                        eprintln!("Failed to read a command: {e}");
                        std::process::exit(1);
                    }
                };

                if run(&mut session, &line, &mut stdout) == Flow::Quit {
                    break;
                }
            }
        }
    }
}

/// Runs a command, terminating the process if output fails.
fn run(session: &mut Session, command: &str, out: &mut impl Write) -> Flow {
    log::trace!("Command: {command}");
    match session.execute(command, out) {
        Ok(flow) => flow,
        Err(e) => {
            eprintln!("Failed to write: {e}");
            std::process::exit(2);
        }
    }
}
