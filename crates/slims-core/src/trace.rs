use std::error::Error;

/// Traza legible de un fallo: mensaje del error y su cadena de causas. Es el
/// texto que se escribe en el log del run.
pub fn format_trace(step: &str, err: &(dyn Error + 'static)) -> String {
    let mut out = format!("Step '{step}' failed: {err}");
    let mut causes: Vec<String> = Vec::new();
    let mut cur = err.source();
    while let Some(e) = cur {
        causes.push(e.to_string());
        cur = e.source();
    }
    if !causes.is_empty() {
        out.push_str("\nCaused by:");
        for (i, cause) in causes.iter().enumerate() {
            out.push_str(&format!("\n    {i}: {cause}"));
        }
    }
    out
}
