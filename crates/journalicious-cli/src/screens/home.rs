use journalicious_core::controllers::HomeController;

use crate::ui::format::preview;
use crate::ui::prompt::prompt_select;
use crate::ui::{hint, simple_table, Column, UiContext};

use super::{show_feedback, Step};

const ACTIONS: [&str; 5] = ["New entry", "Search", "Change password", "Log out", "Quit"];

const COLUMNS: [Column; 3] = [Column::new("Date"), Column::new("Time"), Column::new("Title")];

pub fn show(ui: &UiContext, home: &mut HomeController) -> anyhow::Result<Step> {
    show_feedback(ui, home.error());
    if home.entries().is_empty() {
        println!("{}", hint(ui, "No entries yet. Choose \"New entry\" to write one."));
    } else {
        let rows: Vec<Vec<String>> = home
            .entries()
            .iter()
            .map(|entry| vec![entry.date_string(), entry.time(), preview(entry.title(), 48)])
            .collect();
        println!("{}", simple_table(ui, &COLUMNS, &rows));
    }

    let step = match prompt_select(ui, "Choose", &ACTIONS, 0)? {
        0 => Step::Go(home.new_entry()),
        1 => Step::Go(home.search()),
        2 => Step::Go(home.change_password()),
        3 => Step::Go(home.logout()),
        _ => Step::Quit,
    };
    Ok(step)
}
