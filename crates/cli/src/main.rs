use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use speechlink_core::pipeline::session_logger::{
    LogSessionLogger, NullSessionLogger, SessionLogger,
};
use speechlink_core::pipeline::session_report::SessionReport;
use speechlink_core::pipeline::transcription_session_use_case::TranscriptionSessionUseCase;
use speechlink_core::shared::config::DiscoveryConfig;
use speechlink_core::transcription::domain::line_source::LineSource;
use speechlink_core::transcription::infrastructure::buf_read_line_source::{
    BufReadLineSource, DEFAULT_PROMPT,
};
use speechlink_core::transcription::infrastructure::system_clock::SystemClock;

const BANNER_TITLE: &str = "PSS CAIO Demo Alpha - Simplified Version";
const BANNER_WIDTH: usize = 40;
const INTERRUPT_NOTICE: &str = "Program terminated by user.";
const DEFAULT_WRAP_WORDS: &str = "6";

/// Simulated speech transcription with keyword-driven resource discovery.
#[derive(Parser)]
#[command(name = "speechlink")]
struct Cli {
    /// JSON config file (defaults to the platform config dir when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Trusted source base URLs (comma-separated), overriding the config.
    #[arg(long, value_delimiter = ',')]
    sources: Option<Vec<String>>,

    /// Read lines from a file instead of the console.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Ignore lines that repeat an earlier line (case-insensitive).
    #[arg(long)]
    skip_duplicates: bool,

    /// Print the session report as JSON.
    #[arg(long)]
    json: bool,

    /// Append a summary (topics, decisions, action items, deadlines).
    #[arg(long)]
    summary: bool,

    /// Wrap transcript lines every N words in the text report.
    #[arg(long, value_name = "WORDS", num_args = 0..=1, default_missing_value = DEFAULT_WRAP_WORDS)]
    wrap: Option<usize>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    ctrlc::set_handler(|| {
        let _ = write_interrupt_notice(&mut io::stdout());
        process::exit(0);
    })?;

    let interactive = cli.input.is_none() && !cli.json;
    if interactive {
        print_banner();
    }

    let source = open_source(cli.input.as_deref(), interactive)?;
    let logger: Box<dyn SessionLogger> = if cli.json {
        Box::new(NullSessionLogger)
    } else {
        Box::new(LogSessionLogger::new())
    };

    let mut use_case = TranscriptionSessionUseCase::new(
        source,
        Box::new(SystemClock),
        config.keyword_extractor(),
        config.link_generator(),
        logger,
    )
    .with_skip_duplicates(cli.skip_duplicates)
    .with_summary(cli.summary);

    let report = if interactive {
        use_case.run(&mut io::stdout())?
    } else {
        use_case.run(&mut io::sink())?
    };

    print_report(&report, cli.json, cli.wrap)
}

fn build_config(cli: &Cli) -> Result<DiscoveryConfig, Box<dyn std::error::Error>> {
    let config = DiscoveryConfig::resolve(cli.config.as_deref())?;
    let config = match &cli.sources {
        Some(sources) => config.with_sources(sources.clone())?,
        None => config,
    };
    log::debug!("Trusted sources: {}", config.trusted_sources.join(", "));
    Ok(config)
}

fn open_source(
    input: Option<&Path>,
    prompt: bool,
) -> Result<Box<dyn LineSource>, Box<dyn std::error::Error>> {
    match input {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("Input file not found: {} ({e})", path.display()))?;
            log::info!("Reading transcript lines from {}", path.display());
            Ok(Box::new(BufReadLineSource::<_, io::Sink>::new(
                BufReader::new(file),
            )))
        }
        None if prompt => Ok(Box::new(
            BufReadLineSource::new(BufReader::new(io::stdin()))
                .with_prompt(io::stdout(), DEFAULT_PROMPT),
        )),
        None => Ok(Box::new(BufReadLineSource::<_, io::Sink>::new(
            BufReader::new(io::stdin()),
        ))),
    }
}

fn print_banner() {
    println!("{BANNER_TITLE}");
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("Enter text to simulate speech (press Enter without text to stop)");
    println!("{}", "-".repeat(BANNER_WIDTH));
}

fn print_report(
    report: &SessionReport,
    json: bool,
    wrap: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout().lock();
    if json {
        writeln!(stdout, "{}", report.to_json()?)?;
    } else {
        write!(stdout, "{}", report.render_text(wrap))?;
    }
    stdout.flush()?;
    Ok(())
}

fn write_interrupt_notice(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{INTERRUPT_NOTICE}")?;
    out.flush()
}
