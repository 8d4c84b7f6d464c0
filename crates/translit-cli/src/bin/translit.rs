use clap::{Parser, Subcommand};

use translit_cli::commands::{config_ops, translit_ops};

#[derive(Parser)]
#[command(name = "translit", about = "Chechen Cyrillic to Latin transliteration")]
struct Cli {
    /// Custom mapping table TOML (see `table-export`)
    #[arg(long, global = true)]
    table: Option<String>,
    /// Custom lexicon TOML (see `lexicon-export`)
    #[arg(long, global = true)]
    lexicon: Option<String>,
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text (reads stdin when omitted)
    Text {
        /// Text to transliterate
        text: Option<String>,
    },
    /// Transliterate single words, one result per line
    Word {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Transliterate a text file
    File {
        /// Input file
        input: String,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show which cluster and rule produced each part of a word
    Explain {
        /// Word to explain
        word: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the default mapping table TOML
    TableExport,
    /// Validate a mapping table TOML file
    TableValidate {
        /// Path to TOML file
        file: String,
    },
    /// Print the default lexicon TOML
    LexiconExport,
    /// Validate a lexicon TOML file
    LexiconValidate {
        /// Path to TOML file
        file: String,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Path to TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    config_ops::load_custom(
        cli.table.as_deref(),
        cli.lexicon.as_deref(),
        cli.settings.as_deref(),
    );

    match cli.command {
        Command::Text { text } => translit_ops::text_cmd(text.as_deref()),
        Command::Word { words } => translit_ops::word_cmd(&words),
        Command::File { input, output } => translit_ops::file_cmd(&input, output.as_deref()),
        Command::Explain { word, json } => translit_ops::explain_cmd(&word, json),
        Command::TableExport => config_ops::table_export(),
        Command::TableValidate { file } => config_ops::table_validate(&file),
        Command::LexiconExport => config_ops::lexicon_export(),
        Command::LexiconValidate { file } => config_ops::lexicon_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
