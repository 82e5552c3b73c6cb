use clap::{Arg, ArgAction, Command};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use highlighter::driver::{Config, Highlighter, Signal};
use highlighter::highlighting::{highlight, highlight_with, Terminal};
use highlighter::language::{Language, LANGUAGES};
use highlighter::markup::{self, parse_document};
use highlighter::output;

mod problem;

fn parse_language(key: &str) -> Result<Language, String> {
    Language::from_key(key).ok_or_else(|| {
        format!(
            "unknown language '{}' (try one of: {})",
            key,
            LANGUAGES
                .iter()
                .map(|language| language.key())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("highlighter")
        .version(VERSION)
        .propagate_version(true)
        .about("Syntax highlighting for code blocks in static HTML pages.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log what the highlighter is doing to standard error."),
        )
        .subcommand(
            Command::new("page")
                .about("Highlight every code block in an HTML page")
                .arg(
                    Arg::new("fallback")
                        .long("fallback")
                        .value_parser(parse_language)
                        .help("Language to use for blocks that name none, or name one that isn't supported. Defaults to python."),
                )
                .arg(
                    Arg::new("label")
                        .long("label")
                        .action(ArgAction::SetTrue)
                        .help("Add an aria-label naming the language to each highlighted block."),
                )
                .arg(
                    Arg::new("no-annotate")
                        .long("no-annotate")
                        .action(ArgAction::SetTrue)
                        .help("Don't record the language on the .code-block container."),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Write the result to this file rather than standard output."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The HTML page to process, or - for standard input."),
                ),
        )
        .subcommand(
            Command::new("code")
                .about("Highlight a single source file")
                .arg(
                    Arg::new("language")
                        .short('l')
                        .long("language")
                        .value_parser(parse_language)
                        .help("Language of the source. If omitted it is guessed from the file extension, falling back to python."),
                )
                .arg(
                    Arg::new("standalone")
                        .long("standalone")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("terminal")
                        .help("Emit a complete HTML page with a stylesheet rather than a fragment."),
                )
                .arg(
                    Arg::new("terminal")
                        .short('t')
                        .long("terminal")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for the terminal instead of HTML."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the code to highlight, or - for standard input."),
                ),
        )
        .subcommand(
            Command::new("languages").about("List the supported languages and their aliases"),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("page", submatches)) => {
            let Some(filename) = submatches.get_one::<String>("filename") else {
                usage();
            };
            let filename = Path::new(filename);

            let mut config = Config::default();
            if let Some(fallback) = submatches.get_one::<Language>("fallback") {
                config.fallback = *fallback;
            }
            config.label = submatches.get_flag("label");
            config.annotate_container = !submatches.get_flag("no-annotate");
            debug!(?config);

            let target = submatches
                .get_one::<PathBuf>("output")
                .map(PathBuf::as_path);

            run_page(filename, config, target);
        }
        Some(("code", submatches)) => {
            let Some(filename) = submatches.get_one::<String>("filename") else {
                usage();
            };
            let filename = Path::new(filename);

            let language = submatches
                .get_one::<Language>("language")
                .copied()
                .or_else(|| Language::from_path(filename))
                .unwrap_or(Config::default().fallback);

            let standalone = submatches.get_flag("standalone");
            let terminal = submatches.get_flag("terminal");

            run_code(filename, language, standalone, terminal);
        }
        Some(("languages", _)) => {
            for language in LANGUAGES {
                println!(
                    "{:12}{:12}{}",
                    language.key(),
                    language.name(),
                    language
                        .aliases()
                        .join(", ")
                );
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => usage(),
    }
}

fn usage() -> ! {
    println!("usage: highlighter [COMMAND] ...");
    println!("Try '--help' for more information.");
    std::process::exit(2);
}

fn load_or_exit(filename: &Path) -> String {
    match markup::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::full_loading_error(&error));
            std::process::exit(1);
        }
    }
}

fn emit_or_exit(target: Option<&Path>, content: &str) {
    if let Err(error) = output::emit(target, content) {
        eprintln!("{}", problem::full_output_error(&error));
        std::process::exit(1);
    }
}

fn run_page(filename: &Path, config: Config, target: Option<&Path>) {
    info!("Processing page: {}", filename.display());

    let content = load_or_exit(filename);

    let mut document = match parse_document(&content) {
        Ok(document) => document,
        Err(error) => {
            eprintln!("{}", problem::full_markup_error(&error, filename, &content));
            std::process::exit(1);
        }
    };

    let highlighter = Highlighter::new(config);
    let summary = highlighter.notify(Signal::Ready, &mut document);
    info!("{}: {}", filename.display(), summary);

    emit_or_exit(target, &document.to_html());
}

fn run_code(filename: &Path, language: Language, standalone: bool, terminal: bool) {
    info!("Highlighting {} as {}", filename.display(), language.name());

    let code = load_or_exit(filename);
    let profile = language.profile();

    let result = if terminal {
        highlight_with(&Terminal, &code, profile)
    } else if standalone {
        let body = highlight(&code, profile);
        match output::standalone(&filename.to_string_lossy(), language, &body) {
            Ok(page) => page,
            Err(error) => {
                eprintln!("{}", problem::full_output_error(&error));
                std::process::exit(1);
            }
        }
    } else {
        highlight(&code, profile)
    };

    emit_or_exit(None, &result);
}
