use clap::{ArgAction, Parser};
use comet::build::BuildStep;
use comet::config::{Config, COMPILER_ENV};
use comet::error::CometError;
use comet::executor::transpile;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "comet", about = "Transpile StarC source to C and build it", version)]
struct Cli {
    /// StarC source file
    input: PathBuf,

    /// Generated C file
    output: PathBuf,

    /// JSON config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Compiler command line, e.g. "clang -O2" (overrides COMET_CC)
    #[arg(long, value_name = "CMD")]
    cc: Option<String>,

    /// Spaces per block level
    #[arg(long, value_name = "N")]
    indent: Option<usize>,

    /// Omit the banner comment at the top of the output
    #[arg(long)]
    no_header: bool,

    /// Stop after writing the C file
    #[arg(long)]
    no_build: bool,

    /// Write a JSON summary of the run
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version come through here too
            let code = if err.use_stderr() {
                CometError::EXIT_USAGE
            } else {
                0
            };
            let _ = err.print();
            return exit_code(code);
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            exit_code(err.exit_code())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn resolve_config(cli: &Cli) -> Result<Config, CometError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_env(std::env::var(COMPILER_ENV).ok())?;

    if let Some(cc) = &cli.cc {
        config.set_compiler_command(cc)?;
    }
    if let Some(width) = cli.indent {
        config.indent_width = width;
    }
    if cli.no_header {
        config.header = false;
    }
    if cli.no_build {
        config.build = false;
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), CometError> {
    let config = resolve_config(cli)?;

    let input = File::open(&cli.input).map_err(|source| CometError::InputOpen {
        path: cli.input.clone(),
        source,
    })?;
    let output = File::create(&cli.output).map_err(|source| CometError::OutputOpen {
        path: cli.output.clone(),
        source,
    })?;

    let summary = {
        let writer = BufWriter::new(output);
        transpile(BufReader::new(input), writer, &config.transpile_options())?
    };
    log::info!("wrote {}", cli.output.display());

    if let Some(path) = &cli.report {
        summary.write_report(path)?;
    }

    if !config.build {
        return Ok(());
    }

    let outcome = config.compiler().compile(&cli.output)?;
    println!("Compiled executable: {}", outcome.artifact.display());
    Ok(())
}
