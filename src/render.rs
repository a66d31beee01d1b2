//! Text renderers for topology and history.
//!
//! These only read the public introspection surface (`&Network`,
//! `&History`); nothing here can reach driver-owned state.

use std::borrow::Cow;

use crate::history::History;
use crate::network::Network;

/// Render the topology as a Graphviz `digraph`.
///
/// Boundary ports become `rarrow` shapes, nodes become `n_<index>`.
/// Edges run from network inputs into listening nodes, between nodes for
/// every variable one outputs and another inputs, and from nodes to
/// network outputs. Port names are written bare unless they are not
/// plain DOT identifiers.
pub fn to_dot(net: &Network) -> String {
    let mut lines = vec!["digraph G {".to_owned(), " rankdir=LR;".to_owned()];
    for port in net.inputs().iter().chain(net.outputs().iter()) {
        lines.push(format!(" {} [shape=rarrow];", dot_id(port.name)));
    }
    for (i, node) in net.nodes().iter().enumerate() {
        lines.push(format!(" n_{} [label=\"{}\"];", i, escape(node.name())));
    }

    for (i, node) in net.nodes().iter().enumerate() {
        for var in node.inputs().names() {
            if net.inputs().contains(var) {
                lines.push(format!(" {} -> n_{};", dot_id(var), i));
            }
        }
        for (j, source) in net.nodes().iter().enumerate() {
            if i == j {
                continue;
            }
            for var in node.inputs().names() {
                if source.outputs().contains(var) {
                    lines.push(format!(" n_{} -> n_{} [label=\"{}\"];", j, i, escape(var)));
                }
            }
        }
        for var in node.outputs().names() {
            if net.outputs().contains(var) {
                lines.push(format!(" n_{} -> {};", i, dot_id(var)));
            }
        }
    }
    lines.push("}".to_owned());
    lines.join("\n")
}

/// `name` as a DOT node ID: bare when it is `[A-Za-z_][A-Za-z0-9_]*`,
/// quoted otherwise.
fn dot_id(name: &str) -> Cow<'_, str> {
    let mut chars = name.chars();
    let plain = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("\"{}\"", escape(name)))
    }
}

fn escape(text: &str) -> Cow<'_, str> {
    if text.contains('"') {
        Cow::Owned(text.replace('"', "\\\""))
    } else {
        Cow::Borrowed(text)
    }
}

/// Render the State History as a Markdown table, one row per snapshot.
pub fn to_markdown(history: &History) -> String {
    let mut rows = vec!["| Clock | State |".to_owned(), "| --- | --- |".to_owned()];
    for (clock, state) in history.states() {
        rows.push(format!("| {} | {} |", clock.ticks(), state));
    }
    rows.join("\n")
}
