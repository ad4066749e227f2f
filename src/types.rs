use serde::Deserialize;

/// What the edge-list reader does when a statement is malformed
/// (an arrow other than `->`, or a destination without its `;`).
///
/// - `Stop`: stop reading edges; everything parsed so far is kept (default).
/// - `Skip`: drop tokens up to and including the next `;`-terminated token
///   and carry on with the following statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedEdgePolicy {
    #[default]
    Stop,
    Skip,
}

/// Whether a node came from the input or was synthesised to split a long edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Regular,
    Dummy,
}
