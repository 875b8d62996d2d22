//! Superficie de línea de comandos.
//!
//! `pokedex <mode> (-d <inputdata> | -f <inputfile>) [-e] [-o <output>]`
use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};
use dex_adapters::{OutputTarget, RequestContext};
use dex_domain::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Pokemon,
    Ability,
    Move,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pokemon => Mode::Creature,
            ModeArg::Ability => Mode::Ability,
            ModeArg::Move => Mode::Move,
        }
    }
}

/// Consulta el catálogo Pokémon por nombre o id.
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Look up pokemon, abilities and moves by name or id")]
#[command(group(ArgGroup::new("input").required(true).args(["inputdata", "inputfile"])))]
pub struct Args {
    /// Tipo de registro a consultar.
    #[arg(value_enum)]
    pub mode: ModeArg,

    /// Nombres o ids separados por espacios
    #[arg(short = 'd', long = "inputdata")]
    pub inputdata: Option<String>,

    /// Archivo .txt con un nombre o id por línea
    #[arg(short = 'f', long = "inputfile")]
    pub inputfile: Option<PathBuf>,

    /// Resuelve stats, habilidades y movimientos de cada pokemon
    #[arg(short = 'e', long)]
    pub expanded: bool,

    /// "print" para consola o ruta a un archivo .txt
    #[arg(short = 'o', long, default_value = "print")]
    pub output: String,
}

impl Args {
    /// Contexto inicial de la petición; las etapas lo completan.
    pub fn into_request(self) -> RequestContext {
        let mut ctx = RequestContext::new(self.mode.into()).expanded(self.expanded)
                                                           .with_output(OutputTarget::parse(&self.output));
        ctx.input_data = self.inputdata;
        ctx.input_file = self.inputfile;
        ctx
    }
}
