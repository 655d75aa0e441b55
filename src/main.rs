use formcalc::config::{self, Action, Invocation, Verbosity};
use formcalc::page::PageDispatchTable;

use anyhow::Context;
use tracing::level_filters::LevelFilter;

use std::process::ExitCode;

fn main() -> ExitCode {
  let invocation = match config::parse_args(std::env::args().skip(1)) {
    Ok(invocation) => invocation,
    Err(err) => {
      eprintln!("{err}");
      eprintln!("{}", config::USAGE);
      return ExitCode::from(2);
    }
  };
  init_logging(invocation.settings.verbosity);
  match run(invocation) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("{err:#}");
      ExitCode::FAILURE
    }
  }
}

fn run(invocation: Invocation) -> anyhow::Result<()> {
  match invocation.action {
    Action::Help => {
      println!("{} {}\n\n{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), config::USAGE);
    }
    Action::Version => {
      println!("{}", env!("CARGO_PKG_VERSION"));
    }
    Action::Serve { route, request, json } => {
      let pages = PageDispatchTable::default_pages();
      let response = pages.handle(&route, &request, &invocation.settings)
        .with_context(|| format!("failed to serve {route}"))?;
      if json {
        println!("{}", serde_json::to_string(&response)?);
      } else {
        println!("{}", response.template);
        if let Some(result) = response.result {
          println!("{result}");
        }
      }
    }
  }
  Ok(())
}

fn init_logging(verbosity: Verbosity) {
  use tracing_subscriber::{
    fmt::Layer, layer::SubscriberExt, prelude::*,
    filter::Targets,
  };

  let crate_level = match verbosity {
    Verbosity::Quiet => LevelFilter::WARN,
    Verbosity::Verbose => LevelFilter::TRACE,
  };

  tracing_subscriber::registry()
    .with(Layer::new()
      .with_writer(std::io::stderr)
      .with_filter(Targets::new()
        .with_default(LevelFilter::WARN)
        .with_target("formcalc", crate_level)
      )
    )
    .init();
}
