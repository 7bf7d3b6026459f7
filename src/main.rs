//! Route manifest tool.
//!
//! ```text
//! spa-router -c routes.toml check
//! spa-router -c routes.toml resolve /home/55 /about/
//! printf 'go /home/1\nback\n' | spa-router -c routes.toml replay
//! ```
//!
//! `resolve` and `replay` print one JSON object per line on stdout; logs go
//! to stderr.

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use spa_router::config::{load_config, shadowed_routes, RouterConfig};
use spa_router::navigation::{LinkClick, NavigationSource};
use spa_router::observability::init_logging;
use spa_router::{App, Params, Router};

#[derive(Parser)]
#[command(name = "spa-router")]
#[command(about = "Check route manifests and replay navigation against them", long_about = None)]
struct Cli {
    /// Route manifest (TOML).
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    /// Log level; overrides the manifest. `RUST_LOG` overrides both.
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the manifest and list its routes
    Check,
    /// Print the route each path resolves to
    Resolve {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Read navigation commands from stdin and print every dispatch
    Replay {
        /// Path the history starts at.
        #[arg(short, long, default_value = "/")]
        initial: String,
    },
}

/// One line of `resolve` output.
#[derive(Debug, Serialize)]
struct Resolution<'a> {
    path: &'a str,
    /// Manifest name of the matched route, or its pattern when unnamed.
    route: Option<&'a str>,
    /// The matched pattern as registered.
    pattern: Option<String>,
    params: Params,
}

impl<'a> Resolution<'a> {
    fn lookup(config: &'a RouterConfig, router: &Router, path: &'a str) -> Self {
        let Some(resolved) = router.resolve(path) else {
            return Self {
                path,
                route: None,
                pattern: None,
                params: Params::new(),
            };
        };
        let route = config
            .routes
            .iter()
            .find(|c| c.pattern == resolved.route)
            .map(|c| c.label());

        Self {
            path,
            route,
            pattern: Some(resolved.route),
            params: resolved.params,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.observability.log_level);
    init_logging(level)?;

    tracing::info!(
        config = ?cli.config,
        routes = config.routes.len(),
        mode = ?config.mode,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Check => check(&config),
        Commands::Resolve { paths } => resolve(&config, &paths),
        Commands::Replay { initial } => replay(&config, &initial),
    }
}

fn check(config: &RouterConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("{} route(s), mode {:?}", config.routes.len(), config.mode);
    for (i, route) in config.routes.iter().enumerate() {
        match &route.name {
            Some(name) => println!("{:>3}  {}  ({})", i, route.pattern, name),
            None => println!("{:>3}  {}", i, route.pattern),
        }
    }
    for hidden in shadowed_routes(config) {
        println!(
            "warning: '{}' is never selected, '{}' matches first",
            hidden.pattern, hidden.shadowed_by
        );
    }
    Ok(())
}

fn resolve(config: &RouterConfig, paths: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let app = App::from_config(config, "/", |_| {})?;

    for path in paths {
        let line = Resolution::lookup(config, app.router(), path);
        println!("{}", serde_json::to_string(&line)?);
    }
    Ok(())
}

fn replay(config: &RouterConfig, initial: &str) -> Result<(), Box<dyn std::error::Error>> {
    let app = App::from_config(config, initial, |dispatch| {
        match serde_json::to_string(&dispatch) {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::error!(error = %e, "Failed to encode dispatch"),
        }
    })?;
    app.router().start()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };
        match (command, arg) {
            ("go", path) if !path.is_empty() => app.router().navigate(path),
            ("visit", path) if !path.is_empty() => app.history().visit(path),
            ("back", "") => app.router().back(),
            ("forward", "") => app.history().go_forward(),
            ("click", href) if !href.is_empty() => {
                if !app.click(&LinkClick::new(href)) {
                    tracing::info!(href = %href, "Link not intercepted");
                }
            }
            _ => tracing::warn!(line = %line, "Unknown command"),
        }
        tracing::debug!(path = %app.history().current_path(), "Command applied");
    }

    app.router().stop();
    Ok(())
}
