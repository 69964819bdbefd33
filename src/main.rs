// Main application entry point.
// Parses the command line, sets up tracing, and dispatches to the
// format / run / watch subcommands.

use crossbeam_channel::{bounded, select, tick};
use signal_hook::consts::signal::*;
use signal_hook::iterator::Signals;
use startwatch::cli::{self, Command, FormatArgs, RunArgs, WatchArgs};
use startwatch::config::Config;
use startwatch::report::ElapsedReport;
use startwatch::{telemetry, util, Timer};
use std::io::{self, Write};
use std::process::{self, exit, ExitStatus};
use std::thread;
use tracing::{debug, info, warn};

/// Exit code for arguments that parse but make no sense (mirrors clap's usage errors).
const EXIT_USAGE: i32 = 2;
/// Exit code when the program given to `run` could not be started.
const EXIT_SPAWN_FAILED: i32 = 127;

fn main() -> io::Result<()> {
    // Parse command-line arguments using clap.
    let args = cli::parse_args();
    let cfg = Config::from(&args);
    telemetry::init_tracing(&cfg);

    match &args.command {
        Command::Format(format_args) => format_value(&cfg, format_args),
        Command::Run(run_args) => run_program(&cfg, run_args),
        Command::Watch(watch_args) => watch(&cfg, watch_args),
    }
}

fn format_value(cfg: &Config, args: &FormatArgs) -> io::Result<()> {
    let duration = match args.duration() {
        Ok(duration) => duration,
        Err(e) => {
            eprintln!("Error: {e}");
            exit(EXIT_USAGE);
        }
    };
    debug!(value = args.value, unit = ?args.unit, exact = %util::format_debug(duration), "Formatting duration");
    ElapsedReport::new(duration).write_to(cfg.json, io::stdout().lock())
}

/// Maps a child's status onto our own exit code, using 128+N for death by signal N.
fn exit_code_for(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return 128 + sig;
        }
    }
    1
}

fn run_program(cfg: &Config, args: &RunArgs) -> io::Result<()> {
    let program = args.program.to_string_lossy().into_owned();

    // Ctrl-C and Ctrl-\ reach the child through the terminal; keep running so the
    // elapsed time is still reported once it exits.
    let _terminal_signals = Signals::new([SIGINT, SIGQUIT])?;

    let timer = Timer::new();
    debug!(program = %program, args = ?args.args, "Spawning program");
    let status = match process::Command::new(&args.program).args(&args.args).status() {
        Ok(status) => status,
        Err(e) => {
            eprintln!("Error: failed to run '{program}': {e}");
            exit(EXIT_SPAWN_FAILED);
        }
    };
    let elapsed = timer.elapsed();

    info!(
        program = %program,
        exit_code = ?status.code(),
        elapsed = %util::format_debug(elapsed),
        "Program finished"
    );
    ElapsedReport::new(elapsed)
        .for_program(program, status.code())
        .write_to(cfg.json, io::stderr().lock())?;

    exit(exit_code_for(status));
}

fn watch(cfg: &Config, args: &WatchArgs) -> io::Result<()> {
    if args.interval.is_zero() {
        eprintln!("Error: --interval must be greater than zero");
        exit(EXIT_USAGE);
    }

    // Setup signal handling in a separate thread, forwarding into the select loop.
    let mut signals = Signals::new([SIGHUP, SIGINT, SIGTERM, SIGQUIT])?;
    let (sig_tx, sig_rx) = bounded::<i32>(8);
    thread::spawn(move || {
        for sig in signals.forever() {
            if sig_tx.send(sig).is_err() {
                break;
            }
        }
    });

    let ticker = tick(args.interval);
    let mut timer = Timer::new();
    let mut stderr = io::stderr().lock();
    info!(interval = %util::format_debug(args.interval), "Watching elapsed time");

    loop {
        select! {
            recv(ticker) -> _ => {
                if cfg.json {
                    ElapsedReport::new(timer.elapsed()).write_to(true, io::stdout().lock())?;
                } else {
                    // Redraw the status line in place.
                    write!(stderr, "\r\x1b[2Kelapsed {timer}")?;
                    stderr.flush()?;
                }
            }
            recv(sig_rx) -> sig => {
                match sig {
                    Ok(SIGHUP) => {
                        info!(discarded = %timer, "Received SIGHUP, restarting timer");
                        timer.restart();
                    }
                    Ok(sig) => {
                        let elapsed = timer.elapsed();
                        debug!(signal = sig, elapsed = %util::format_debug(elapsed), "Stopping watch");
                        if !cfg.json {
                            writeln!(stderr)?;
                        }
                        return ElapsedReport::new(elapsed).write_to(cfg.json, io::stdout().lock());
                    }
                    Err(_) => {
                        warn!("Signal thread exited unexpectedly");
                        return Ok(());
                    }
                }
            }
        }
    }
}
