use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, info, instrument};

use crate::arena::MansionArena;
use crate::builder;
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::errors::MansionError;
use crate::navigator::{self, Exploration};
use crate::output;
use crate::tree_traits::TreeNodeConvert;

pub const BANNER: &str = "--- Simulador de Exploracao da Mansao (Arvore Binaria) ---";

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Completion { shell }) => _completion(*shell),
        None if cli.map => _map(),
        None => _explore(),
    }
}

fn build_mansion() -> CliResult<MansionArena> {
    builder::build().map_err(CliError::Build)
}

#[instrument]
fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

#[instrument]
fn _map() -> CliResult<()> {
    let mansion = build_mansion()?;
    let mut out = io::stdout().lock();
    write!(out, "{}", mansion.to_tree_string()).map_err(MansionError::from)?;
    output::detail(&mut out, &map_footer(&mansion)).map_err(MansionError::from)?;
    Ok(())
}

/// Summary line printed under the `--map` tree.
pub fn map_footer(mansion: &MansionArena) -> String {
    format!(
        "{} comodos, profundidade {}, sem saida: {}",
        mansion.len(),
        mansion.depth(),
        mansion.leaf_names().join(", ")
    )
}

#[instrument]
fn _explore() -> CliResult<()> {
    let mut out = io::stdout().lock();
    output::header(&mut out, BANNER).map_err(MansionError::from)?;

    let mansion = build_mansion()?;
    debug!("mansion built with {} rooms", mansion.len());

    match navigator::explore(&mansion, io::stdin().lock(), &mut out)? {
        Exploration::Completed { leaf, trail } => {
            info!("reached {} after {} moves", leaf, trail.len().saturating_sub(1));
        }
        Exploration::InputClosed { room, .. } => {
            info!("input closed in {}", room);
        }
        Exploration::NoMansion => {
            info!("nothing to explore");
        }
    }
    Ok(())
}
