//! Utilidades de formato compartidas por los `Display` de los registros.

pub(crate) const INDENT: &str = "    ";

/// Antepone `INDENT` a cada línea no vacía.
pub(crate) fn indent(text: &str) -> String {
    text.lines()
        .map(|l| if l.is_empty() { String::new() } else { format!("{INDENT}{l}") })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn join<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let joined = names.collect::<Vec<_>>().join(", ");
    if joined.is_empty() { "-".to_string() } else { joined }
}

pub(crate) fn or_na(v: Option<u32>) -> String {
    v.map(|n| n.to_string()).unwrap_or_else(|| "N/A".to_string())
}
