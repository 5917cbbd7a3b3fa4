use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;
use tracing::{debug, Level};

use rover::{
    DemoLibrary, LineOutcome, Outcome, ReportFormat, RobotError, RunSummary, ScriptLoader,
    Session, Table, Termination, DEFAULT_TABLE_HEIGHT, DEFAULT_TABLE_WIDTH,
};

/// A toy robot simulator driven by PLACE/MOVE/LEFT/RIGHT/REPORT commands.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(after_help = "EXAMPLES:
  rover-cli walk.rover
  printf 'PLACE 0,0,NORTH\\nMOVE\\nREPORT\\n' | rover-cli
  rover-cli --demo edge-guard --format json")]
struct Cli {
    /// Path to a command script. If not provided, commands are read from
    /// stdin: piped input runs as a batch, a terminal starts a prompt.
    script: Option<String>,

    /// Run a built-in demo script by name (see --list-demos)
    #[clap(long, conflicts_with = "script")]
    demo: Option<String>,

    /// List the built-in demo scripts and exit
    #[clap(long)]
    list_demos: bool,

    /// Table width in cells
    #[clap(long, default_value_t = DEFAULT_TABLE_WIDTH)]
    width: i32,

    /// Table height in cells
    #[clap(long, default_value_t = DEFAULT_TABLE_HEIGHT)]
    height: i32,

    /// Report format: text, json, csv or xml
    #[clap(short, long, default_value = "text")]
    format: String,

    /// Echo discarded and ignored lines and print a final run summary
    #[clap(short = 'd', long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Reports go to stdout; logs stay on stderr so piped output is clean.
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    if cli.list_demos {
        for script in DemoLibrary::list() {
            println!("{:<12} {}", script.name, script.summary);
        }
        return;
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), RobotError> {
    let table = Table::new(cli.width, cli.height)?;
    let format: ReportFormat = cli.format.parse()?;
    let mut session = Session::new(table);

    let summary = if let Some(name) = &cli.demo {
        let script = DemoLibrary::get(name)?;
        debug!(demo = script.name, "running demo script");
        run_batch(&mut session, ScriptLoader::from_string(script.source), format, cli.debug)?
    } else if let Some(path) = &cli.script {
        run_batch(&mut session, ScriptLoader::open(Path::new(path))?, format, cli.debug)?
    } else if atty::isnt(atty::Stream::Stdin) {
        run_batch(&mut session, ScriptLoader::stdin(), format, cli.debug)?
    } else {
        run_interactive(&mut session, format)?
    };

    if summary.termination == Termination::Interrupted {
        eprintln!("Input interrupted; stopping.");
    }
    if cli.debug {
        eprintln!(
            "{} lines, {} reports, ended by {:?}",
            summary.lines_read, summary.reports_emitted, summary.termination
        );
    }

    Ok(())
}

/// Runs a whole line stream without prompting.
///
/// Without `--debug` the session drives the loop and only reports reach
/// stdout. With `--debug` the loop runs here instead, so every discarded or
/// ignored line can be echoed to stderr with its line number.
fn run_batch<I>(
    session: &mut Session,
    lines: I,
    format: ReportFormat,
    debug: bool,
) -> Result<RunSummary, RobotError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !debug {
        return session.run(lines, |report| writeln!(out, "{}", format.render(report)));
    }

    let mut lines_read = 0;
    let mut reports_emitted = 0;

    for line in lines {
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                return Ok(RunSummary {
                    lines_read,
                    reports_emitted,
                    termination: Termination::Interrupted,
                });
            }
            Err(e) => return Err(RobotError::Stream(e)),
        };

        lines_read += 1;
        match session.process_line(&line) {
            LineOutcome::Blank | LineOutcome::Executed(Outcome::StateChanged) => {}
            LineOutcome::Rejected(error) => eprintln!("line {}: discarded: {}", lines_read, error),
            LineOutcome::Executed(Outcome::Ignored(reason)) => {
                eprintln!("line {}: ignored: {}", lines_read, reason)
            }
            LineOutcome::Executed(Outcome::Reported(report)) => {
                writeln!(out, "{}", format.render(&report)).map_err(RobotError::Stream)?;
                reports_emitted += 1;
            }
            LineOutcome::Executed(Outcome::ExitRequested) => {
                return Ok(RunSummary {
                    lines_read,
                    reports_emitted,
                    termination: Termination::Exit,
                });
            }
        }
    }

    Ok(RunSummary {
        lines_read,
        reports_emitted,
        termination: Termination::EndOfInput,
    })
}

/// Runs a prompt loop against a live terminal.
///
/// Unlike batch mode, rejected and ignored lines get immediate feedback;
/// the command stream semantics are the same.
fn run_interactive(session: &mut Session, format: ReportFormat) -> Result<RunSummary, RobotError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let table = session.robot().table();
    writeln!(
        out,
        "Toy robot on a {}x{} table. Commands: PLACE x,y,DIR | MOVE | LEFT | RIGHT | REPORT | EXIT",
        table.width(),
        table.height()
    )
    .map_err(RobotError::Stream)?;

    let mut lines_read = 0;
    let mut reports_emitted = 0;

    loop {
        write!(out, "> ").map_err(RobotError::Stream)?;
        out.flush().map_err(RobotError::Stream)?;

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => {
                // Ctrl-D
                writeln!(out).map_err(RobotError::Stream)?;
                return Ok(RunSummary {
                    lines_read,
                    reports_emitted,
                    termination: Termination::EndOfInput,
                });
            }
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                return Ok(RunSummary {
                    lines_read,
                    reports_emitted,
                    termination: Termination::Interrupted,
                });
            }
            Err(e) => return Err(RobotError::Stream(e)),
        }

        lines_read += 1;
        match session.process_line(&line) {
            LineOutcome::Blank | LineOutcome::Executed(Outcome::StateChanged) => {}
            LineOutcome::Rejected(_) => {
                eprintln!("Invalid command. Try: PLACE 0,0,NORTH | MOVE | LEFT | RIGHT | REPORT | EXIT")
            }
            LineOutcome::Executed(Outcome::Ignored(reason)) => eprintln!("Ignored: {}", reason),
            LineOutcome::Executed(Outcome::Reported(report)) => {
                writeln!(out, "{}", format.render(&report)).map_err(RobotError::Stream)?;
                reports_emitted += 1;
            }
            LineOutcome::Executed(Outcome::ExitRequested) => {
                return Ok(RunSummary {
                    lines_read,
                    reports_emitted,
                    termination: Termination::Exit,
                });
            }
        }
    }
}
