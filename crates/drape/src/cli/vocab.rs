//! The `drape vocab` command for inspecting the label vocabulary.

use clap::{Args, Subcommand, ValueEnum};
use drape_core::{Config, Vocabulary};

/// Arguments for the `vocab` command.
#[derive(Args, Debug)]
pub struct VocabArgs {
    #[command(subcommand)]
    pub command: VocabCommand,
}

/// Which list to print.
#[derive(Clone, Copy, Debug, ValueEnum, Default)]
pub enum VocabList {
    /// Both lists
    #[default]
    All,
    /// Apparel terms that admit labels
    Allow,
    /// Terms that reject labels outright
    Block,
}

/// Subcommands for vocabulary inspection.
#[derive(Subcommand, Debug)]
pub enum VocabCommand {
    /// Print the effective vocabulary (built-in plus configured extensions)
    Show {
        /// Restrict output to one list
        #[arg(long, value_enum, default_value = "all")]
        list: VocabList,
    },

    /// Show the configured vocabulary extension directory
    Path,
}

/// Execute the vocab command.
pub fn execute(args: VocabArgs, config: &Config) -> anyhow::Result<()> {
    match args.command {
        VocabCommand::Show { list } => {
            let vocabulary = match config.vocabulary_dir() {
                Some(dir) => Vocabulary::load(&dir)?,
                None => Vocabulary::builtin().clone(),
            };
            print!("{}", render(&vocabulary, list));
        }

        VocabCommand::Path => match config.vocabulary_dir() {
            Some(dir) => println!("{}", dir.display()),
            None => println!("(built-in vocabulary only; set labels.vocabulary_dir to extend it)"),
        },
    }

    Ok(())
}

fn render(vocabulary: &Vocabulary, list: VocabList) -> String {
    let mut out = String::new();
    if matches!(list, VocabList::All | VocabList::Allow) {
        out.push_str("# allowlist\n");
        for term in vocabulary.allowlist() {
            out.push_str(term);
            out.push('\n');
        }
    }
    if matches!(list, VocabList::All | VocabList::Block) {
        out.push_str("# blacklist\n");
        for term in vocabulary.blacklist() {
            out.push_str(term);
            out.push('\n');
        }
    }
    out
}
