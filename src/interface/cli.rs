use crate::domain::graph::Graph;
use crate::infrastructure::edge_list_reader::{read_relations_file, read_relations_stdin};
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::longest_path_memo::MemoLongestPathSolver;
use crate::infrastructure::scc_tarjan::TarjanSccDecomposer;
use crate::usecase::chain::longest_relation_chain;
use crate::usecase::components::component_report;
use crate::usecase::event::AppEvent;
use anyhow::{anyhow, Context, Result};
use std::env;
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::Chain { input, emit_events } => {
            let graph = load_graph(input.as_deref()).await?;

            let (tx, rx) = mpsc::channel::<AppEvent>(64);
            let printer = if emit_events {
                Some(spawn_ndjson_printer(rx))
            } else {
                drop(rx);
                None
            };

            let decomposer = TarjanSccDecomposer;
            let solver = MemoLongestPathSolver;
            let stats = longest_relation_chain(&graph, &decomposer, &solver, Some(tx)).await;

            if let Some(handle) = printer {
                handle.await.ok();
            }

            eprintln!(
                "summary: people={} relations={} components={} condensed_relations={} longest_chain={}",
                stats.people,
                stats.relations,
                stats.components,
                stats.condensed_relations,
                stats.longest_chain
            );
            println!("{}", stats.longest_chain);
            Ok(())
        }

        Cli::Components { input } => {
            let graph = load_graph(input.as_deref()).await?;
            let report = component_report(&graph, &TarjanSccDecomposer);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}

async fn load_graph(input: Option<&str>) -> Result<Graph> {
    let relations = match input {
        Some(path) => read_relations_file(path)
            .await
            .with_context(|| format!("reading relations: {path}"))?,
        None => read_relations_stdin().await?,
    };
    relations.to_graph()
}

#[derive(Debug, PartialEq, Eq)]
enum Cli {
    Chain {
        input: Option<String>,
        emit_events: bool,
    },
    Components {
        input: Option<String>,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> chain [--in/--input <relations.txt>] [--emit-events]
        // <bin> components [--in/--input <relations.txt>]
        if args.len() < 2 {
            return Err(anyhow!(usage()));
        }

        match args[1].as_str() {
            "chain" => Self::parse_chain(args),
            "components" => Self::parse_components(args),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_chain(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut emit_events = false;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = Some(path_arg(args, i)?);
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        Ok(Cli::Chain { input, emit_events })
    }

    fn parse_components(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = Some(path_arg(args, i)?);
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        Ok(Cli::Components { input })
    }
}

fn path_arg(args: &[String], i: usize) -> Result<String> {
    args.get(i)
        .cloned()
        .ok_or_else(|| anyhow!(format!("missing value for --in/--input\n\n{}", usage())))
}

fn usage() -> &'static str {
    "Usage:\n  relation-chain chain [--in/--input <relations.txt>] [--emit-events]\n  relation-chain components [--in/--input <relations.txt>]\n\nInput:\n  `n m` followed by m pairs `x y` (people numbered 1..=n). Read from stdin when no --in is given.\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout before the answer; summary goes to stderr."
}
