//! Text rendering for tourist trees.

use crate::ordered_tree::OrderedTree;
use crate::tourist::Tourist;

const SURNAME_WIDTH: usize = 20;
const PASSPORT_WIDTH: usize = 12;
const DAYS_WIDTH: usize = 8;
const RULE_WIDTH: usize = 40;
const INDENT: usize = 4;

/// Returns the column titles followed by a dashed rule.
pub fn render_header() -> String {
    let mut output = format!(
        "{:<sw$}{:<pw$}{:<dw$}",
        "Surname",
        "Passport",
        "Days",
        sw = SURNAME_WIDTH,
        pw = PASSPORT_WIDTH,
        dw = DAYS_WIDTH,
    );
    output.push('\n');
    output.push_str(&"-".repeat(RULE_WIDTH));
    output
}

/// Renders one tourist in the header's column layout.
pub fn render_row(tourist: &Tourist) -> String {
    format!(
        "{:<sw$}{:<pw$}{:<dw$}",
        tourist.surname,
        tourist.passport_code,
        tourist.days,
        sw = SURNAME_WIDTH,
        pw = PASSPORT_WIDTH,
        dw = DAYS_WIDTH,
    )
}

/// Draws the tree sideways under the header, larger keys first.
pub fn render_tree<O>(tree: &OrderedTree<Tourist, O>) -> String {
    let mut output = render_header();
    output.push('\n');
    if tree.is_empty() {
        output.push_str("(empty tree)");
        return output;
    }
    let mut first = true;
    for (depth, tourist) in tree.traverse() {
        if !first {
            output.push('\n');
        }
        first = false;
        output.push_str(&" ".repeat(depth * INDENT));
        output.push_str("-> ");
        output.push_str(render_row(tourist).trim_end());
    }
    output
}

/// Formats the mean stay with two decimals.
pub fn render_average<O>(tree: &OrderedTree<Tourist, O>) -> String {
    if tree.is_empty() {
        "Average days: n/a (empty tree)".to_string()
    } else {
        format!("Average days: {:.2}", tree.average(Tourist::days_f64))
    }
}
