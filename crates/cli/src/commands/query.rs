use anyhow::Result;
use std::path::Path;
use webshelf_core::Page;
use webshelf_storage::{BookListQuery, Storage};

use crate::ensure_db_dir;

fn open(db_path: &Path) -> Result<Storage> {
    ensure_db_dir(db_path)?;
    Ok(Storage::new(db_path)?)
}

pub(crate) fn run_list(db_path: &Path, page: Page, query: Option<String>) -> Result<()> {
    let storage = open(db_path)?;
    let list_query = match query {
        Some(q) => BookListQuery::search(q).with_page(page),
        None => BookListQuery::page(page),
    };
    let books = storage.list_books(&list_query)?;
    println!("{}", serde_json::to_string_pretty(&books)?);
    Ok(())
}

pub(crate) fn run_history(db_path: &Path, limit: Option<usize>) -> Result<()> {
    let storage = open(db_path)?;
    let entries = storage.list_history(limit)?;
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
