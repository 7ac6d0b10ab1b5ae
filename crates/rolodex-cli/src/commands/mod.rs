use anyhow::Result;
use rolodex_store::ContactStore;
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod contacts;
pub mod menu;

pub struct Context<'a> {
    pub store: &'a mut ContactStore,
    pub json: bool,
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
