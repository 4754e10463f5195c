//! Template CLI commands

use clap::Subcommand;

use crate::display::format_template_list;
use crate::error::MdResult;
use crate::services::TemplateService;
use crate::storage::Storage;

/// Template subcommands
#[derive(Subcommand)]
pub enum TemplateCommands {
    /// Create a new template from the default content
    Create {
        /// Template name (sanitized into the file name)
        name: String,
    },

    /// Show all available templates
    #[command(alias = "show")]
    List,
}

/// Handle a template command
pub fn handle_template_command(storage: &Storage, cmd: TemplateCommands) -> MdResult<()> {
    let service = TemplateService::new(storage);

    if service.ensure_templates()? {
        println!(
            "Created templates directory {} with a default template.",
            storage.templates.dir().display()
        );
    }

    match cmd {
        TemplateCommands::Create { name } => {
            let created = service.create_template(&name)?;
            if created.outcome.is_overwrite() {
                println!("Template file '{}' overwritten.", created.path.display());
            } else {
                println!("Template file '{}' created successfully.", created.path.display());
            }
        }

        TemplateCommands::List => {
            let names = service.list_templates()?;
            print!("{}", format_template_list(&names));
        }
    }

    Ok(())
}
