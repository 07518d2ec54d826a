//! Command-line interface: schema → generated declarations.
use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand};
use shapegen::codegen::naming::struct_name;
use shapegen::codegen::{Generator, Templates, discovery_order};
use shapegen::schema::{TypeDef, parse_file, validate_type_def};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate one type declaration per distinct type reachable from a schema's root
#[derive(Parser, Debug)]
#[command(name = "shapegen", version)]
pub struct CommandLineInterface {
    /// more logging (-v debug, -vv trace); otherwise RUST_LOG applies
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// render declarations for the schema
    Generate(GenerateOut),
    /// print the name of every generated type, in emission order
    Names(NamesOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON schema document describing the root type
    #[arg(long, short)]
    input: PathBuf,
}

#[derive(Args, Debug)]
struct GenerateOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// package name written into the header
    #[arg(long, short)]
    package: String,

    /// directory holding one *.tmpl file per template kind
    #[arg(long)]
    templates: Option<PathBuf>,

    /// use bundled templates for kinds missing from --templates
    #[arg(long, requires = "templates")]
    fill_with_builtin: bool,

    /// prefix of references to primitive types
    #[arg(long, default_value = shapegen::codegen::naming::DEFAULT_PRIMITIVE_PREFIX)]
    prefix: String,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// skip schema validation
    #[arg(long)]
    no_validate: bool,
}

#[derive(Args, Debug)]
struct NamesOut {
    #[command(flatten)]
    input_settings: InputSettings,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load(&self) -> Result<TypeDef> {
        parse_file(&self.input)
            .with_context(|| format!("failed to load schema {}", self.input.display()))
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn init_logging(&self) {
        let filter = match self.verbose {
            0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Generate(target) => {
                let root = target.input_settings.load()?;

                let templates = match target.templates.as_ref() {
                    Some(dir) if target.fill_with_builtin => Templates::from_dir_or_builtin(dir)
                        .with_context(|| format!("failed to load templates from {}", dir.display()))?,
                    Some(dir) => Templates::from_dir(dir)
                        .with_context(|| format!("failed to load templates from {}", dir.display()))?,
                    None => Templates::builtin(),
                };
                let generator = Generator::builder()
                    .templates(templates)
                    .primitive_prefix(target.prefix.as_str())
                    .validate(!target.no_validate)
                    .build();

                let source = generator
                    .generate(&root, &target.package)
                    .context("code generation failed")?;
                write_output(target.out.as_deref(), &source)
            }
            Command::Names(target) => {
                let root = target.input_settings.load()?;
                validate_type_def(&root)?;
                for def in discovery_order(&root) {
                    println!("{}", struct_name(&def));
                }
                Ok(())
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_output(out: Option<&Path>, source: &str) -> Result<()> {
    let Some(out) = out else {
        print!("{source}");
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(out, source).with_context(|| format!("failed to write {}", out.display()))?;
    tracing::info!("wrote {}", out.display());
    Ok(())
}
