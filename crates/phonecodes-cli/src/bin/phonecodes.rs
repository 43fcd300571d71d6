use clap::{Args, Parser, Subcommand};

use phonecodes_cli::commands::{config_ops, convert_ops, reduction_ops};
use phonecodes_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "phonecodes", about = "Convert between IPA and corpus phone codes")]
struct Cli {
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Log as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ReductionArgs {
    /// Reduction map TOML applied after conversion (ordered "key" = "value" lines)
    #[arg(long, conflicts_with = "preset")]
    reduce: Option<String>,
    /// Shipped reduction map: standard-timit, timit-shared, buckeye-shared
    #[arg(long)]
    preset: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert one string
    Convert {
        /// Input code (ipa, arpabet, xsampa, disc, callhome, buckeye, timit)
        from: String,
        /// Output code
        to: String,
        /// Text to convert
        text: String,
        /// Language (ISO 639-3), selects language-specific tables
        #[arg(short, long)]
        language: Option<String>,
        #[command(flatten)]
        reduction: ReductionArgs,
        /// Output text, hit flags and diagnostics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert a file, one string per line
    Batch {
        /// Input code
        from: String,
        /// Output code
        to: String,
        /// Path to the input file
        input_file: String,
        /// Language (ISO 639-3)
        #[arg(short, long)]
        language: Option<String>,
        #[command(flatten)]
        reduction: ReductionArgs,
    },
    /// Show the segmentation path and reattachment for one string
    Explain {
        /// Input code
        from: String,
        /// Output code
        to: String,
        /// Text to explain
        text: String,
        /// Language (ISO 639-3)
        #[arg(short, long)]
        language: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List phone codes, languages and supported conversions
    Codes,
    /// List shipped reduction presets
    Presets,
    /// Report cascading and extra keys of a reduction map
    CheckReduction {
        /// Reduction map TOML
        file: String,
        /// Conversion whose output the map reduces, as FROM:TO or FROM:TO:LANG
        #[arg(long)]
        against: String,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Settings TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);
    if let Some(ref file) = cli.settings {
        config_ops::settings_load(file);
    }

    match cli.command {
        Command::Convert {
            from,
            to,
            text,
            language,
            reduction,
            json,
        } => {
            let map = load(&reduction);
            convert_ops::convert_cmd(&from, &to, &text, language.as_deref(), map.as_ref(), json);
        }
        Command::Batch {
            from,
            to,
            input_file,
            language,
            reduction,
        } => {
            let map = load(&reduction);
            convert_ops::batch_cmd(&from, &to, &input_file, language.as_deref(), map.as_ref());
        }
        Command::Explain {
            from,
            to,
            text,
            language,
            json,
        } => convert_ops::explain_cmd(&from, &to, &text, language.as_deref(), json),
        Command::Codes => convert_ops::codes_cmd(),
        Command::Presets => reduction_ops::presets_cmd(),
        Command::CheckReduction { file, against } => {
            reduction_ops::check_reduction_cmd(&file, &against)
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}

fn load(args: &ReductionArgs) -> Option<phonecodes_core::ReductionMap> {
    reduction_ops::load_reduction(args.reduce.as_deref(), args.preset.as_deref()).unwrap_or_else(
        |e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        },
    )
}
