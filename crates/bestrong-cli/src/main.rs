//! BeStrong CLI application.
//!
//! Terminal front end and MCP stdio server for the workout planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use bestrong_core::{params::ListWorkouts, PlannerBuilder};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, BestrongMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        catalog_file,
        templates_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .with_catalog_file(catalog_file)
        .with_templates_file(templates_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("BeStrong started");

    match command {
        Some(Generate(args)) => Cli::new(planner, renderer).generate(args).await,
        Some(Workout { command }) => {
            Cli::new(planner, renderer)
                .handle_workout_command(command)
                .await
        }
        Some(Catalog) => Cli::new(planner, renderer).show_catalog(),
        Some(Template(args)) => Cli::new(planner, renderer).show_template(&args),
        Some(Serve) => {
            info!("Starting BeStrong MCP server");
            run_stdio_server(BestrongMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(planner, renderer)
                .list_workouts(&ListWorkouts::default())
                .await
        }
    }
}
