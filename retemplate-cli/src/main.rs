use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use retemplate_codegen::CodegenOptions;

#[derive(Parser)]
#[command(name = "retemplate", version, about = "Regenerate template source from render trees")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the template for a JSON render-tree fixture.
    Generate {
        /// Path to the .json fixture
        input: PathBuf,
        /// Write the template to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Spaces per nesting level
        #[arg(long, default_value_t = 2)]
        indent: usize,
        /// Qualifier stripped from serialized expressions
        #[arg(long, default_value = "$setup.")]
        scope_prefix: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            input,
            out,
            indent,
            scope_prefix,
        } => {
            let options = CodegenOptions {
                indent,
                scope_prefix,
            };
            let code = retemplate_cli::generate_cmd(&input, out.as_deref(), options)?;
            match out {
                Some(path) => println!("Generated: {}", path.display()),
                None => println!("{code}"),
            }
        }
    }
    Ok(())
}
