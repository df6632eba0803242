//! clasp-runner: batch push/pull for Google Apps Script projects
//!
//! Discovers every directory under `./projects` that carries a `.clasp.json`
//! marker and runs the external `clasp` tool across them in bounded chunks.

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use std::collections::BTreeSet;

use clasp_runner::commands::list::handle_list_command;
use clasp_runner::commands::run::{handle_run_command, RunRequest, ToolCommand};
use clasp_runner::core::{resolve_concurrency, PARALLEL_JOBS_ENV};

fn build_cli() -> ClapCommand {
    let jobs_arg = Arg::new("jobs")
        .long("jobs")
        .short('j')
        .value_name("N")
        .value_parser(clap::value_parser!(usize))
        .help("Number of projects per chunk (default: PARALLEL_JOBS or 3)");
    let project_arg = Arg::new("project")
        .long("project")
        .short('p')
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Restrict the run to the named project (repeatable)");
    let names_arg = Arg::new("names")
        .value_name("PROJECT")
        .action(ArgAction::Append)
        .help("Additional project names to restrict the run to");

    ClapCommand::new("clasp-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Batch push/pull runner for Google Apps Script projects")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            ClapCommand::new("push")
                .about("Push all projects to Apps Script")
                .arg(
                    Arg::new("force")
                        .long("force")
                        .short('f')
                        .action(ArgAction::SetTrue)
                        .help("Forcibly overwrite the remote manifest"),
                )
                .arg(jobs_arg.clone())
                .arg(project_arg.clone())
                .arg(names_arg.clone()),
        )
        .subcommand(
            ClapCommand::new("pull")
                .about("Pull all projects from Apps Script")
                .arg(jobs_arg)
                .arg(project_arg)
                .arg(names_arg),
        )
        .subcommand(ClapCommand::new("list").about("List discovered projects"))
}

/// Builds the immutable run request from parsed subcommand arguments
fn run_request(command: ToolCommand, matches: &ArgMatches) -> RunRequest {
    let mut requested: BTreeSet<String> = BTreeSet::new();
    for id in ["project", "names"] {
        if let Some(values) = matches.get_many::<String>(id) {
            requested.extend(values.cloned());
        }
    }

    let env_jobs = std::env::var(PARALLEL_JOBS_ENV).ok();
    let jobs = resolve_concurrency(matches.get_one::<usize>("jobs").copied(), env_jobs.as_deref());
    let force = command == ToolCommand::Push && matches.get_flag("force");

    RunRequest {
        command,
        jobs,
        requested,
        force,
    }
}

#[tokio::main]
async fn main() {
    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            // Help and version exit 0; every rejected invocation exits 1
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let outcome = match matches.subcommand() {
        Some(("push", sub)) => handle_run_command(run_request(ToolCommand::Push, sub)).await,
        Some(("pull", sub)) => handle_run_command(run_request(ToolCommand::Pull, sub)).await,
        Some(("list", _)) => handle_list_command().await,
        _ => unreachable!("subcommand_required guarantees a match"),
    };

    // Any internal failure surfaces here rather than crashing silently
    let exit_code = match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            eprintln!("Error: {e:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
