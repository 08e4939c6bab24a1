//! `campus groups`: partition names read from arguments or stdin.

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use campus_core::{partition_by, GroupSize};
use clap::Args;

/// Arguments for `campus groups`.
#[derive(Args, Debug)]
pub struct GroupsArgs {
    /// Members per group. Must be a positive integer.
    #[arg(long, short)]
    pub size: GroupSize,

    /// Print a JSON array of arrays instead of one group per line.
    #[arg(long)]
    pub json: bool,

    /// Names to group, in order. Read one per line from stdin when omitted.
    pub names: Vec<String>,
}

/// Render `names` split into groups of `size`.
///
/// Text output is one comma-separated group per line; an empty list
/// produces no lines.
pub fn format_groups(names: &[String], size: GroupSize, json: bool) -> Result<String> {
    let groups = partition_by(names, size);
    if json {
        return serde_json::to_string(&groups).context("failed to encode groups");
    }
    Ok(groups
        .iter()
        .map(|group| group.join(", "))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn run_groups(args: &GroupsArgs) -> Result<u8> {
    let names = if args.names.is_empty() {
        read_names(io::stdin().lock())?
    } else {
        args.names.clone()
    };
    tracing::debug!(count = names.len(), size = %args.size, "grouping names");

    let output = format_groups(&names, args.size, args.json)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(0)
}

/// Non-blank trimmed lines.
fn read_names(reader: impl BufRead) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read names from stdin")?;
        let name = line.trim();
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn size(n: usize) -> GroupSize {
        GroupSize::new(n).unwrap()
    }

    #[test]
    fn text_output_one_group_per_line() {
        let out = format_groups(&names(&["Ada", "Grace", "Linus", "Ken", "Barbara"]), size(2), false)
            .unwrap();
        assert_eq!(out, "Ada, Grace\nLinus, Ken\nBarbara");
    }

    #[test]
    fn json_output_is_array_of_arrays() {
        let out = format_groups(&names(&["a", "b", "c"]), size(2), true).unwrap();
        assert_eq!(out, r#"[["a","b"],["c"]]"#);
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(format_groups(&[], size(3), false).unwrap(), "");
        assert_eq!(format_groups(&[], size(3), true).unwrap(), "[]");
    }

    #[test]
    fn stdin_names_skip_blank_lines() {
        let input = "Ada\n\n  Grace  \n";
        assert_eq!(read_names(input.as_bytes()).unwrap(), names(&["Ada", "Grace"]));
    }

    #[test]
    fn zero_size_is_rejected_at_parse() {
        assert!("0".parse::<GroupSize>().is_err());
        assert!("-1".parse::<GroupSize>().is_err());
    }
}
