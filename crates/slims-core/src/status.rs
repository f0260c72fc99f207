/// Estado visible de una ejecución (flow run).
///
/// Transiciones por ejecución de un step:
/// - `Pending` -> `Running`
/// - `Running` -> `Done`
/// - `Running` -> `Failed`
///
/// Este crate sólo escribe los estados terminales; `Pending` y `Running` los
/// gestiona quien crea el run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Pending,
    Running,
    Done,
    Failed,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Done | Status::Failed)
    }
}
