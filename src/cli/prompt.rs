// src/cli/prompt.rs
//! Interactive stdin prompt for node ids.

use std::io::{self, Write};

use anyhow::{bail, Result};

use crate::graph::NodeId;

/// Prompts until a line parses as a node id.
///
/// Rejected lines get a retry message. A closed stdin is an error rather
/// than an endless re-prompt loop.
///
/// # Errors
/// Returns an error on stdin/stdout failure or end of input.
pub fn read_node(prompt: &str) -> Result<NodeId> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            bail!("no input: stdin closed while waiting for a node id");
        }
        match input.trim().parse::<NodeId>() {
            Ok(node) => return Ok(node),
            Err(_) => println!("Invalid input. Please enter a valid number."),
        }
    }
}
