// Full cause chain, used by the Debug impls of our error types.
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

// Same chain on a single line, for places a human reads it in one glance.
pub fn error_chain_line(e: &impl std::error::Error) -> String {
    let mut line = e.to_string();
    let mut current = e.source();
    while let Some(cause) = current {
        line.push_str(": ");
        line.push_str(&cause.to_string());
        current = cause.source();
    }
    line
}
