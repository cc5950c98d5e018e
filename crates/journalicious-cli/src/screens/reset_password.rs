use journalicious_core::controllers::ResetPasswordController;
use journalicious_core::Session;

use crate::ui::prompt::{prompt_secret, prompt_select};
use crate::ui::{kv, UiContext};

use super::{show_feedback, Step};

const ACTIONS: [&str; 2] = ["Answer", "Back"];

pub fn show(
    ui: &UiContext,
    session: &Session,
    reset: &mut ResetPasswordController,
) -> anyhow::Result<Step> {
    println!("{}", kv(ui, "Question", reset.question()));

    let step = match prompt_select(ui, "Choose", &ACTIONS, 0)? {
        0 => {
            let answer = prompt_secret(ui, "Answer")?;
            reset.submit(session, &answer).map_or(Step::Stay, Step::Go)
        }
        _ => Step::Go(reset.back()),
    };
    show_feedback(ui, reset.error());
    Ok(step)
}
