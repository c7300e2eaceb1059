// Command-line interface for wiki markup
//
// This binary converts wiki markup to the HTML-like intermediate form and back, and lets you
// inspect what the transcoder sees along the way.
//
// The core capabilities live in the wiki-babel crate; this binary only deals with the shell:
// arguments, files, stdin/stdout, configuration and logging.
//
// Converting:
//
// The conversion needs a from and to pair. The from is auto-detected from the file extension,
// while being overwrittable by an explicit --from flag. When --to is omitted, the target is
// looked up in the configuration (`convert.targets`).
// Usage:
//  wiki <input> [--to <format>] [--from <format>] [--output <file>]  - Convert between formats (default)
//  wiki convert <input> [--to <format>] [--from <format>] [--output <file>]  - Same as above (explicit)
//  wiki inspect <path> [<transform>]     - Execute a transform (defaults to config's inspect.transform)
//  wiki --list-transforms                - List available transforms
//  wiki --list-formats                   - List conversion formats
//
// An input of `-` reads from stdin.
//
// Extra Parameters:
//
// Transcoder settings can be overridden using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix; `max-depth` and `balance-tags` override the
// configuration, anything else is passed to the inspect transform.
// Example:
//  wiki page.wiki --extra-max-depth 2
//  wiki inspect page.wiki intermediate --extra-until templates

use wiki_cli::error::CliError;
use wiki_cli::transforms;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use tracing_subscriber::EnvFilter;
use wiki_babel::{FormatRegistry, TranscodeOptions};
use wiki_config::{Loader, WikiConfig};

const STDIN: &str = "-";

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // Check if the next arg is a value or another flag/end
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                // No value, treat as boolean flag
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("wiki")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting wiki markup to and from an HTML-like intermediate form")
        .long_about(
            "wiki is a command-line tool for working with wiki markup.\n\n\
            Commands:\n  \
            - convert: Transform between wiki markup and the intermediate form\n  \
            - inspect: View what the transcoder sees at each step\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            wiki page.wiki                          # Convert to the intermediate form (stdout)\n  \
            wiki page.html --to wiki -o page.wiki   # Convert back to markup\n  \
            wiki inspect page.wiki nesting          # Show template nesting depths\n  \
            cat page.wiki | wiki - --from wiki      # Read from stdin"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available conversion formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a wiki.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug diagnostics to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect intermediate steps of a conversion")
                .long_about(
                    "View the input at different processing steps.\n\n\
                    Transforms:\n  \
                    - protect:        <nowiki>/<ref> payloads encoded\n  \
                    - nesting:        template delimiters tagged with their depth\n  \
                    - templates-json: template parse as JSON\n  \
                    - intermediate:   markup -> intermediate\n  \
                    - markup:         intermediate -> markup\n  \
                    - balance:        tag balancing only\n\n\
                    Extra Parameters:\n  \
                    --extra-until <stage>   Stop intermediate/markup after the named stage\n\n\
                    Examples:\n  \
                    wiki inspect page.wiki                              # Default transform\n  \
                    wiki inspect page.wiki templates-json               # Template parse\n  \
                    wiki inspect page.wiki intermediate --extra-until links"
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the input file, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to inspect.transform from the configuration")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between document formats (default command)")
                .long_about(
                    "Convert documents between wiki markup and the intermediate form.\n\n\
                    Supported formats:\n  \
                    - wiki: Wiki markup (.wiki, .wikitext, .mediawiki)\n  \
                    - html: Intermediate form (.html, .htm)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    The target defaults to convert.targets from the configuration.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    wiki convert page.wiki --to html         # Intermediate form (stdout)\n  \
                    wiki convert page.html -o page.wiki      # Back to markup\n  \
                    wiki page.wiki                           # 'convert' is optional"
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (defaults to convert.targets from the configuration)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // If no subcommand is provided, inject "convert"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && (cleaned_args[1] == STDIN || !cleaned_args[1].starts_with('-'))
                && cleaned_args[1] != "inspect"
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "help"
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_tracing(matches.get_flag("verbose"));

    if let Err(err) = run(&matches, &mut extra_params) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// `--verbose` enables DEBUG level, otherwise use RUST_LOG or default to WARN.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches, extra_params: &mut HashMap<String, String>) -> Result<(), CliError> {
    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return Ok(());
    }
    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return Ok(());
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(String::as_str))?;
    apply_config_overrides(&mut config, extra_params)?;

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let path = required(sub_matches, "path");
            let transform = sub_matches
                .get_one::<String>("transform")
                .unwrap_or(&config.inspect.transform);
            handle_inspect_command(path, transform, extra_params, &config)
        }
        Some(("convert", sub_matches)) => {
            let input = required(sub_matches, "input");
            let registry = FormatRegistry::with_options(TranscodeOptions::from(&config.transcode));

            let from = match sub_matches.get_one::<String>("from") {
                Some(from) => from.clone(),
                None => registry
                    .detect_format_from_filename(input)
                    .ok_or_else(|| CliError::UndetectedFormat(input.to_string()))?,
            };
            let to = match sub_matches.get_one::<String>("to") {
                Some(to) => to.clone(),
                None => config
                    .convert
                    .target_for(&from)
                    .map(str::to_string)
                    .ok_or_else(|| CliError::NoTarget(from.clone()))?,
            };

            let output = sub_matches.get_one::<String>("output").map(String::as_str);
            handle_convert_command(&registry, input, &from, &to, output)
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

// Positional args marked `.required(true)` are always present once clap has matched.
fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .unwrap_or_default()
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &WikiConfig,
) -> Result<(), CliError> {
    let source = read_input(path)?;
    let options = TranscodeOptions::from(&config.transcode);
    let output = transforms::execute_transform(&source, transform, &options, extra_params)
        .map_err(CliError::Transform)?;
    print!("{output}");
    Ok(())
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
) -> Result<(), CliError> {
    // Validate formats exist before touching the input
    registry.get(from)?;
    registry.get(to)?;

    let source = read_input(input)?;
    let result = registry.convert(&source, from, to)?;
    tracing::debug!(from, to, input, "converted");

    match output {
        Some(path) => fs::write(path, result).map_err(|source| CliError::WriteOutput {
            path: path.to_string(),
            source,
        }),
        None => {
            print!("{result}");
            Ok(())
        }
    }
}

fn read_input(path: &str) -> Result<String, CliError> {
    let read_error = |source| CliError::ReadInput {
        path: path.to_string(),
        source,
    };

    if path == STDIN {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(read_error)?;
        Ok(source)
    } else {
        fs::read_to_string(path).map_err(read_error)
    }
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
    println!("\nConversion formats:");
    handle_list_formats_command();
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        if let Ok(format) = registry.get(&format_name) {
            println!(
                "  {format_name:<6} {} (.{})",
                format.description(),
                format.file_extensions().join(", .")
            );
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> Result<WikiConfig, CliError> {
    let loader = Loader::new().with_optional_file("wiki.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    Ok(loader.build()?)
}

fn apply_config_overrides(
    config: &mut WikiConfig,
    extra_params: &mut HashMap<String, String>,
) -> Result<(), CliError> {
    if let Some(raw) = take_override(extra_params, &["max-depth", "depth"]) {
        config.transcode.max_depth = raw.parse().map_err(|_| CliError::InvalidOverride {
            flag: "max-depth".to_string(),
            value: raw.clone(),
        })?;
    }
    if let Some(raw) = take_override(extra_params, &["balance-tags", "balance"]) {
        config.transcode.balance_tags = parse_bool_arg("balance-tags", &raw)?;
    }
    Ok(())
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> Result<bool, CliError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => Err(CliError::InvalidOverride {
            flag: flag.to_string(),
            value: raw.to_string(),
        }),
    }
}
