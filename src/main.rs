mod commands;
mod core;
mod ui;

use crate::core::error::{StevedoreError, print_error};
use clap::Parser;

/// Package release binaries for every configured platform target
#[derive(Parser)]
#[command(name = "cargo")]
#[command(bin_name = "cargo")]
#[command(styles = get_styles())]
enum CargoCli {
  Stevedore(StevedoreCli),
}

/// Build the full release matrix and collect renamed artifacts into dist/
#[derive(clap::Args)]
#[command(name = "stevedore")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct StevedoreCli {}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
}

fn main() {
  let CargoCli::Stevedore(_cli) = CargoCli::parse();

  if let Err(err) = commands::run_package() {
    handle_error(err);
  }
}

fn handle_error(err: StevedoreError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
