use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "reflector-gen")]
#[command(author, version, about = "Derives a client code model from an OpenAPI document")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information derived from an OpenAPI document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Derive the code model and write it as JSON
  Reflect(ReflectCommand),
}

#[derive(Args, Debug, Clone)]
pub struct ReflectCommand {
  /// Path to the OpenAPI document (JSON, or YAML by .yaml/.yml extension)
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Path where the code model JSON will be written
  #[arg(short, long, value_name = "FILE")]
  pub output: PathBuf,

  /// Naming configuration file (JSON)
  #[arg(short, long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Extra word to drop when deriving entity names (repeatable)
  #[arg(long = "filter-word", value_name = "WORD")]
  pub filter_words: Vec<String>,

  /// Pretty-print the written JSON
  #[arg(long, default_value_t = false)]
  pub pretty: bool,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List every operation with its derived module and method names
  Operations {
    /// Path to the OpenAPI document
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}
