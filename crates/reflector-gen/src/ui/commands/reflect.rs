use std::{
  io::Write,
  path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use reflector_gen::{
  generator::{
    config::ReflectorConfig,
    document::OpenApiDocument,
    metrics::GenerationStats,
    model::CodeModel,
    orchestrator::Reflector,
  },
  utils::spec::SpecLoader,
};

use crate::ui::{Colors, ReflectCommand};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct ReflectConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub config_path: Option<PathBuf>,
  pub filter_words: Vec<String>,
  pub pretty: bool,
  pub verbose: bool,
  pub quiet: bool,
}

impl ReflectConfig {
  pub fn from_command(command: ReflectCommand) -> anyhow::Result<Self> {
    let ReflectCommand {
      input,
      output,
      config,
      filter_words,
      pretty,
      verbose,
      quiet,
    } = command;

    if verbose && quiet {
      anyhow::bail!("--verbose and --quiet cannot be used together");
    }

    Ok(Self {
      input,
      output,
      config_path: config,
      filter_words: parse_filter_words(filter_words)?,
      pretty,
      verbose,
      quiet,
    })
  }

  async fn load_document(&self) -> anyhow::Result<OpenApiDocument> {
    SpecLoader::open(&self.input).await?.parse()
  }

  /// File configuration first, then `--filter-word` additions.
  async fn load_reflector_config(&self) -> anyhow::Result<ReflectorConfig> {
    let mut config = match &self.config_path {
      Some(path) => read_config_file(path).await?,
      None => ReflectorConfig::default(),
    };
    config.extend_filter_words(self.filter_words.iter().cloned());
    Ok(config)
  }

  fn render(&self, model: &CodeModel) -> anyhow::Result<String> {
    let json = if self.pretty {
      serde_json::to_string_pretty(model)?
    } else {
      serde_json::to_string(model)?
    };
    Ok(json)
  }

  async fn write_output(&self, json: String) -> anyhow::Result<()> {
    if let Some(parent) = self.output.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&self.output, json)
      .await
      .with_context(|| format!("failed to write {}", self.output.display()))?;
    Ok(())
  }
}

async fn read_config_file(path: &Path) -> anyhow::Result<ReflectorConfig> {
  let json = tokio::fs::read_to_string(path)
    .await
    .with_context(|| format!("failed to read config {}", path.display()))?;
  ReflectorConfig::from_json_str(&json).with_context(|| format!("invalid config {}", path.display()))
}

/// Filter words match whole tokens, so each must be a single non-empty word.
fn parse_filter_words(words: Vec<String>) -> anyhow::Result<Vec<String>> {
  words
    .into_iter()
    .map(|word| {
      let trimmed = word.trim();
      if trimmed.is_empty() || trimmed.chars().any(|ch| !ch.is_alphanumeric()) {
        anyhow::bail!("Invalid filter word '{word}': expected a single alphanumeric word (e.g., Dto)");
      }
      Ok(trimmed.to_string())
    })
    .collect()
}

struct ReflectLogger<'a> {
  config: &'a ReflectConfig,
  colors: &'a Colors,
}

impl<'a> ReflectLogger<'a> {
  fn new(config: &'a ReflectConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading OpenAPI document from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_filter_words(&self, config: &ReflectorConfig) {
    if self.config.verbose {
      self.stat("Filter words:", config.naming.filter_words.join(", "));
    }
  }

  fn log_reflecting(&self) {
    self.info(&"Deriving code model...".with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Schemas processed:", stats.schemas_processed.to_string());
    self.stat("", format!("{} properties", stats.properties_described));
    self.stat("Modules generated:", stats.modules_generated.to_string());
    self.stat("Methods generated:", stats.methods_generated.to_string());
    if stats.invalid_methods > 0 {
      self.stat("", format!("{} without a response type", stats.invalid_methods));
    }
    self.stat("Enums registered:", stats.enums_registered.to_string());
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    let _ = self.write_warnings(&mut std::io::stderr().lock(), stats);
  }

  /// Skipped items always, other warnings only when verbose, all on one stream.
  fn write_warnings(&self, out: &mut impl Write, stats: &GenerationStats) -> std::io::Result<()> {
    let mut printed_header = false;
    for warning in &stats.warnings {
      if !warning.is_skipped_item() && !self.config.verbose {
        continue;
      }

      if !printed_header {
        writeln!(out)?;
        printed_header = true;
      }

      let prefix = if warning.is_skipped_item() {
        "Skipped:"
      } else {
        "Warning:"
      };
      writeln!(
        out,
        "{} {}",
        prefix.with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      )?;
    }
    Ok(())
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully wrote code model".with(self.colors.success())
      );
    }
  }
}

pub async fn reflect_document(config: ReflectConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = ReflectLogger::new(&config, colors);

  logger.log_loading();
  let document = config.load_document().await?;
  let reflector_config = config.load_reflector_config().await?;
  logger.log_filter_words(&reflector_config);

  logger.log_reflecting();
  let output = Reflector::new(reflector_config).reflect(&document)?;
  logger.print_statistics(&output.stats);

  logger.log_writing();
  let json = config.render(&output.model)?;
  config.write_output(json).await?;

  logger.log_success();
  Ok(())
}
