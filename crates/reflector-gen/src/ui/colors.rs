use std::io::IsTerminal;

use clap::{
  ValueEnum,
  builder::styling::{Color as ClapColor, RgbColor, Style, Styles},
};
use comfy_table::Color as TableColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// Terminal palette. Every role resolves to [`Color::Reset`] when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn pick(&self, dark: (u8, u8, u8), light: (u8, u8, u8)) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    let (r, g, b) = match self.theme {
      Theme::Dark => dark,
      Theme::Light => light,
    };
    Color::Rgb { r, g, b }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick((124, 144, 160), (96, 104, 112))
  }

  pub const fn primary(&self) -> Color {
    self.pick((102, 178, 204), (22, 96, 136))
  }

  pub const fn accent(&self) -> Color {
    self.pick((232, 120, 96), (186, 64, 44))
  }

  pub const fn success(&self) -> Color {
    self.pick((126, 196, 140), (30, 132, 72))
  }

  pub const fn label(&self) -> Color {
    self.pick((176, 160, 220), (92, 70, 156))
  }

  pub const fn value(&self) -> Color {
    self.pick((236, 214, 130), (150, 110, 24))
  }

  /// Table cells take comfy-table colors; the palette is always RGB or reset.
  pub const fn table(color: Color) -> TableColor {
    match color {
      Color::Rgb { r, g, b } => TableColor::Rgb { r, g, b },
      _ => TableColor::Reset,
    }
  }

  const fn clap(color: Color) -> Option<ClapColor> {
    match color {
      Color::Rgb { r, g, b } => Some(ClapColor::Rgb(RgbColor(r, g, b))),
      _ => None,
    }
  }

  pub const fn clap_styles() -> Styles {
    let colors = Self::new(true, Theme::Dark);

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(Self::clap(colors.label())))
      .usage(Style::new().bold().fg_color(Self::clap(colors.label())))
      .literal(Style::new().fg_color(Self::clap(colors.primary())))
      .placeholder(Style::new().fg_color(Self::clap(colors.value())))
      .error(Style::new().bold().fg_color(Self::clap(colors.accent())))
      .valid(Style::new().fg_color(Self::clap(colors.success())))
      .invalid(Style::new().bold().fg_color(Self::clap(colors.accent())))
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => detect_terminal_theme(),
  }
}

/// `COLORFGBG` ends with the background palette index; 8 and above are light backgrounds.
fn detect_terminal_theme() -> Theme {
  if let Ok(colorfgbg) = std::env::var("COLORFGBG")
    && let Some(background) = colorfgbg.split(';').next_back()
    && let Ok(index) = background.parse::<u8>()
  {
    return if index >= 8 { Theme::Light } else { Theme::Dark };
  }

  Theme::Dark
}
