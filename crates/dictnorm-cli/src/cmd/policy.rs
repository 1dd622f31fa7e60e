// crates/dictnorm-cli/src/cmd/policy.rs

use dictnorm_core::header::DELIMITER_LEN;
use dictnorm_core::policy::{pass_through_chars, DROP_SET};

pub fn run() -> anyhow::Result<()> {
    let pass: Vec<String> = pass_through_chars().map(|c| format!("{c:?}")).collect();
    let drop: Vec<String> = DROP_SET.iter().map(|c| format!("{c:?}")).collect();

    println!("delimiter     = {} x '-'", DELIMITER_LEN);
    println!("pass_through  = {}", pass.join(" "));
    println!("drop          = {}", drop.join(" "));
    println!("reject        = everything else");
    Ok(())
}
