use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::SccComputed {
            nodes,
            edges,
            components,
            cyclic_components,
        } => {
            json!({"type":"scc_computed","nodes":nodes,"edges":edges,"components":components,"cyclic_components":cyclic_components})
        }
        AppEvent::CondensationBuilt {
            nodes,
            edges,
            dropped_edges,
        } => {
            json!({"type":"condensation_built","nodes":nodes,"edges":edges,"dropped_edges":dropped_edges})
        }
        AppEvent::LongestPathSolved { longest_chain } => {
            json!({"type":"longest_path_solved","longest_chain":longest_chain})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}
