use journalicious_core::controllers::SearchController;
use journalicious_core::Session;

use crate::ui::format::preview;
use crate::ui::prompt::{prompt_confirm, prompt_select, prompt_text};
use crate::ui::{badge, hint, kv, simple_table, Badge, Column, UiContext};

use super::{show_feedback, Step};

const ACTIONS: [&str; 4] = ["New query", "Edit an entry", "Delete an entry", "Back"];

const COLUMNS: [Column; 4] = [
    Column::new("#"),
    Column::new("Date"),
    Column::new("Time"),
    Column::new("Title"),
];

pub fn show(
    ui: &UiContext,
    session: &Session,
    search: &mut SearchController,
) -> anyhow::Result<Step> {
    if !search.query().is_empty() {
        println!("{}", kv(ui, "Query", search.query()));
        println!(
            "{}",
            badge(
                ui,
                Badge::Info,
                &format!("{} matching entries", search.results().len())
            )
        );
    }
    if search.results().is_empty() {
        println!("{}", hint(ui, "No matching entries."));
    } else {
        let rows: Vec<Vec<String>> = search
            .results()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                vec![
                    (index + 1).to_string(),
                    entry.date_string(),
                    entry.time(),
                    preview(entry.title(), 48),
                ]
            })
            .collect();
        println!("{}", simple_table(ui, &COLUMNS, &rows));
    }

    let step = match prompt_select(ui, "Choose", &ACTIONS, 0)? {
        0 => {
            let query = prompt_text(ui, "Keyword", search.query())?;
            let _ = search.search(session, &query);
            Step::Stay
        }
        1 => match pick_result(ui, search, "Entry to edit")? {
            Some(index) => search.edit_entry(index).map_or(Step::Stay, Step::Go),
            None => Step::Stay,
        },
        2 => {
            if let Some(index) = pick_result(ui, search, "Entry to delete")? {
                if prompt_confirm(ui, "Delete this entry?", false)?
                    && search.delete_entry(session, index).is_ok()
                {
                    println!("{}", badge(ui, Badge::Ok, "Entry deleted"));
                }
            }
            Step::Stay
        }
        _ => Step::Go(search.back()),
    };
    show_feedback(ui, search.error());
    Ok(step)
}

fn pick_result(
    ui: &UiContext,
    search: &SearchController,
    prompt: &str,
) -> anyhow::Result<Option<usize>> {
    if search.results().is_empty() {
        println!("{}", hint(ui, "Run a query with results first."));
        return Ok(None);
    }
    let labels: Vec<String> = search
        .results()
        .iter()
        .map(|entry| format!("{} {}  {}", entry.date_string(), entry.time(), entry.title()))
        .collect();
    Ok(Some(prompt_select(ui, prompt, &labels, 0)?))
}
