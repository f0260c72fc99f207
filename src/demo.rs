//! Flow de ejemplo: selección de muestras + exportación de un informe.
//!
//! Step 0 (síncrono): el usuario elige muestras de la tabla `Content` y el
//! step devuelve sus ids. Step 1 (asíncrono): genera el informe en segundo
//! plano y deja el progreso en el log del run.

use serde_json::{json, Value};
use slims_core::{BoxError, FlowDefinition, FlowRun, Step};
use slims_params::{
    boolean_input, date_input, file_output, multiple_choice_with_field_list_input,
    multiple_choice_with_value_map_input, rich_text_input, value_map_output, FieldList, ParamError, ValueMap,
};

use crate::config::FlowConfig;

fn select_samples(run: &dyn FlowRun) -> Result<Value, BoxError> {
    run.log("selecting samples");
    Ok(json!({ "sample_ids": ["S-001", "S-002"] }))
}

fn export_report(run: &dyn FlowRun) -> Result<Value, BoxError> {
    run.log("rendering report");
    Ok(json!({ "file": "report.pdf" }))
}

pub fn demo_flow(config: &FlowConfig) -> Result<FlowDefinition, ParamError> {
    let select = Step::new("Select samples", select_samples)
        .input(vec![multiple_choice_with_value_map_input("samples", "Samples", ValueMap::new().table("Content")),
                    date_input("received", "Received on"),
                    rich_text_input("comment", "Comment").with("defaultValue", "")])
        .output(vec![value_map_output("sample_ids", "TEXT")]);

    let formats = FieldList::new(["pdf", "csv"]).with_types(["STRING", "STRING"]);
    let export = Step::new("Export report", export_report)
        .asynchronous(true)
        .input(vec![multiple_choice_with_field_list_input("formats", "Formats", formats)?,
                    boolean_input("notify", "Notify when done").with("defaultValue", true)])
        .output(vec![file_output()]);

    Ok(FlowDefinition::new(config.flow_id.clone(), config.flow_name.clone(), config.usage.clone())
        .add_step(select)
        .add_step(export))
}
