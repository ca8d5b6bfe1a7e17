use anyhow::Result;
use owo_colors::OwoColorize;
use uniplan_core::error::UniplanError;
use uniplan_core::store::EventStore;

pub fn run(id: &str) -> Result<()> {
    let store = EventStore::open()?;
    let existed = store.load()?.iter().any(|e| e.id == id);

    // Refuses synthetic (course/assignment) ids with an explanation.
    store.delete(id)?;

    if !existed {
        return Err(UniplanError::EventNotFound(id.to_string()).into());
    }

    println!("{}", format!("Deleted: {}", id).green());
    Ok(())
}
