//! Binario de demo: imprime la definición del flow de ejemplo y ejecuta sus
//! dos steps contra runs en memoria.
use std::io::Write;
use std::sync::Arc;

use log::info;
use slims_flow::config::{init_dotenv, FlowConfig};
use slims_flow::demo::demo_flow;
use slims_flow::{Execution, FlowRun, InMemoryFlowRun};

fn main() {
    if let Err(e) = run() {
        eprintln!("[slims-flow-demo] {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_dotenv();
    let config = FlowConfig::from_env()?;

    env_logger::Builder::new().format(|buf, record| {
                                  writeln!(buf,
                                           "{} - {} - {}",
                                           chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                                           record.level(),
                                           record.args())
                              })
                              .filter(None, config.log_level)
                              .init();

    let flow = demo_flow(&config)?;
    println!("{}", serde_json::to_string_pretty(&flow.to_value())?);
    info!("flow {} definition hash {}", flow.id(), flow.definition_hash());

    // Step 0: síncrono, devuelve el valor de la acción.
    let sync_run = Arc::new(InMemoryFlowRun::new());
    if let Execution::Completed(value) = flow.execute_route(&flow.route_for(0), sync_run.clone())? {
        info!("run {} -> {:?}: {value}", sync_run.id(), sync_run.status());
    }

    // Step 1: asíncrono; se espera al task sólo para que la demo muestre el final.
    let async_run = Arc::new(InMemoryFlowRun::new());
    async_run.update_status(slims_flow::Status::Running);
    if let Some(task) = flow.execute_route(&flow.route_for(1), async_run.clone())?.into_task() {
        info!("step {} dispatched", task.step());
        task.join()?;
    }
    info!("run {} -> {:?}", async_run.id(), async_run.status());
    for entry in async_run.log_entries() {
        info!("[{}] {}", entry.ts.to_rfc3339(), entry.text);
    }
    Ok(())
}
