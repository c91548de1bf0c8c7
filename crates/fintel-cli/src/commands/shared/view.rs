use fintel_views::QueryState;

/// Data of a settled view, or its stored error message as a command error.
pub fn settled<T>(state: &QueryState<T>) -> anyhow::Result<&T> {
    match &state.error {
        Some(message) => Err(anyhow::anyhow!("{message}")),
        None => Ok(&state.data),
    }
}
