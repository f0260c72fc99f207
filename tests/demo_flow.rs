use std::sync::Arc;

use serde_json::json;
use slims_flow::config::FlowConfig;
use slims_flow::demo::demo_flow;
use slims_flow::{InMemoryFlowRun, Status};

fn config() -> FlowConfig {
    FlowConfig::from_lookup(|var| match var {
        "SLIMS_FLOW_ID" => Some("qc_flow".to_string()),
        _ => None,
    }).expect("valid config")
}

#[test]
fn demo_flow_definition_uses_configured_id() {
    let flow = demo_flow(&config()).expect("demo flow builds");
    let v = flow.to_value();

    assert_eq!(v["id"], json!("qc_flow"));
    assert_eq!(v["name"], json!("Rust demo flow"));
    assert_eq!(v["steps"][0]["process"], json!({"asynchronous": false, "route": "qc_flow/0"}));
    assert_eq!(v["steps"][1]["process"], json!({"asynchronous": true, "route": "qc_flow/1"}));
    assert_eq!(v["steps"][0]["input"]["parameters"][0]["valueMap"]["table"], json!("Content"));
    assert_eq!(v["steps"][1]["input"]["parameters"][0]["fieldList"]["entries"][1],
               json!({"type": "STRING", "field": "csv"}));
    assert_eq!(v["steps"][1]["output"]["parameters"], json!([{"name": "file", "type": "FILE"}]));
}

#[test]
fn demo_flow_runs_both_steps() {
    let flow = demo_flow(&config()).unwrap();

    let run = Arc::new(InMemoryFlowRun::new());
    let value = flow.execute_route("qc_flow/0", run.clone()).unwrap().into_value().unwrap();
    assert_eq!(value["sample_ids"], json!(["S-001", "S-002"]));
    assert_eq!(run.status(), Status::Done);
    assert_eq!(run.log_text(), "selecting samples");

    let run = Arc::new(InMemoryFlowRun::new());
    let task = flow.execute_route("qc_flow/1", run.clone()).unwrap().into_task().expect("export is async");
    assert_eq!(task.join().unwrap(), json!({"file": "report.pdf"}));
    assert_eq!(run.status(), Status::Done);
}
