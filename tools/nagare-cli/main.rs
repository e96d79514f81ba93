use clap::{Parser, Subcommand};
use nagare::prelude::*;
use nagare::workflow::workflow_to_csv;
use std::fs;
use std::time::Instant;

/// A workflow graph validation and simulation engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a workflow file against every structural rule
    Validate {
        /// Path to the workflow JSON file
        path: String,
    },
    /// Dry-run a workflow file and print its step trace
    Simulate {
        /// Path to the workflow JSON file
        path: String,

        /// Print the raw JSON report instead of the trace
        #[arg(long)]
        json: bool,
    },
    /// Export the node table of a workflow file as CSV
    ExportCsv {
        /// Path to the workflow JSON file
        path: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List the built-in automation actions
    Actions,
    /// List the built-in workflow templates
    Templates,
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Validate { path } => run_validate(&path),
        Command::Simulate { path, json } => run_simulate(&path, json),
        Command::ExportCsv { path, output } => run_export_csv(&path, output.as_deref()),
        Command::Actions => run_actions(),
        Command::Templates => run_templates(),
    }
}

fn load_workflow(path: &str) -> Workflow {
    Workflow::from_file(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load workflow '{}': {}", path, e)))
}

fn run_validate(path: &str) {
    let load_start = Instant::now();
    let workflow = load_workflow(path);
    let load_duration = load_start.elapsed();

    let issues = validate(&workflow);
    println!(
        "Checked '{}' ({} nodes, {} edges, loaded in {:?})",
        workflow.name,
        workflow.nodes.len(),
        workflow.edges.len(),
        load_duration
    );

    if issues.is_empty() {
        println!("Workflow is well-formed.");
        return;
    }
    println!("Found {} issue(s):", issues.len());
    for issue in &issues {
        println!("  - {}", issue);
    }
    std::process::exit(1);
}

fn run_simulate(path: &str, json: bool) {
    let workflow = load_workflow(path);
    let report = simulate(&workflow);

    if json {
        let rendered = serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to render report: {}", e)));
        println!("{}", rendered);
        if report.status == SimulationStatus::Error {
            std::process::exit(1);
        }
        return;
    }

    match report.status {
        SimulationStatus::Success => {
            println!("Simulation Finished!");
            for step in &report.steps {
                println!("  {}. [{}] {}", step.step, step.node_type, step.message);
            }
            println!("\n--- Run Summary ---");
            println!("Total Steps:    {}", report.total_steps);
            println!("Execution Time: {}ms", report.execution_time_ms);
        }
        SimulationStatus::Error => {
            println!("Simulation rejected:");
            for error in &report.errors {
                println!("  - {}", error);
            }
            std::process::exit(1);
        }
    }
}

fn run_export_csv(path: &str, output: Option<&str>) {
    let workflow = load_workflow(path);
    let csv = workflow_to_csv(&workflow)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to render CSV: {}", e)));

    match output {
        Some(target) => {
            fs::write(target, csv).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", target, e))
            });
            println!("Wrote node table to '{}'", target);
        }
        None => print!("{}", csv),
    }
}

fn run_actions() {
    for action in actions() {
        println!(
            "{:<18} {:<22} params: {}",
            action.id,
            action.label,
            action.params.join(", ")
        );
    }
}

fn run_templates() {
    for template in templates() {
        println!("{:<24} {:<24} {}", template.id, template.name, template.description);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
