use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use mdnote::cli::{
    handle_history_command, handle_list_command, handle_note_command, handle_template_command,
    NoteArgs, TemplateCommands,
};
use mdnote::config::{ConfigPaths, Settings};
use mdnote::storage::Storage;

#[derive(Parser)]
#[command(
    name = "mdnote",
    author = "Morten Johansen",
    version,
    about = "Create markdown notes from YAML templates",
    long_about = "mdnote renders YAML templates into markdown notes, filling in \
                  {{TITLE}}, {{DATE}}, {{TIME}} and {{TAGS}}. Templates live in a \
                  templates directory that is created with a default template on \
                  first use."
)]
struct Cli {
    /// Print diagnostic logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of searching for .md_config.yaml
    #[arg(long, global = true, env = "MD_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Template management commands
    #[command(subcommand)]
    Template(TemplateCommands),

    /// Create a new note from a template
    Note(NoteArgs),

    /// List notes with their tags
    List,

    /// Show recently written templates and notes
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    mdnote::logging::init(cli.verbose)?;

    let paths = ConfigPaths::new(cli.config)?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(&settings);

    match cli.command {
        Some(Commands::Template(cmd)) => handle_template_command(&storage, cmd)?,
        Some(Commands::Note(args)) => handle_note_command(&storage, args)?,
        Some(Commands::List) => handle_list_command(&storage)?,
        Some(Commands::History { limit }) => handle_history_command(&storage, limit)?,
        Some(Commands::Config) => {
            println!("mdnote Configuration");
            println!("====================");
            match paths.locate() {
                Some(path) => println!("Config file:   {}", path.display()),
                None => println!("Config file:   (none)"),
            }
            println!("Templates dir: {}", settings.templates_dir.display());
            println!("Notes dir:     {}", settings.notes_dir().display());
            match &settings.activity_log {
                Some(path) => println!("Activity log:  {}", path.display()),
                None => println!("Activity log:  disabled"),
            }
        }
        None => {
            println!("mdnote - markdown notes from YAML templates");
            println!();
            println!("Run 'mdnote --help' for usage information.");
            println!("Run 'mdnote note --title \"My Note\"' to create your first note.");
        }
    }

    Ok(())
}
