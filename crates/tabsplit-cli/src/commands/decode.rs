use std::fs;
use std::path::Path;

use anyhow::Result;

use tabsplit_core::receipt::decode_receipt;

use super::utils::print_ledger;

pub fn run(file: &Path) -> Result<()> {
    let raw = fs::read_to_string(file)?;
    let ledger = decode_receipt(&raw)?;
    print_ledger(&ledger);
    Ok(())
}
