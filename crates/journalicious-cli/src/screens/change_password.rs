use journalicious_core::controllers::ChangePasswordController;
use journalicious_core::Session;

use crate::ui::prompt::{prompt_secret, prompt_select, prompt_text};
use crate::ui::{badge, hint, Badge, UiContext};

use super::{show_feedback, Step};

const ACTIONS: [&str; 3] = ["Set new password", "Set security question", "Back"];

pub fn show(
    ui: &UiContext,
    session: &mut Session,
    change: &mut ChangePasswordController,
) -> anyhow::Result<Step> {
    if change.needs_security_question() {
        println!(
            "{}",
            badge(ui, Badge::Warn, "No security question is set")
        );
        println!(
            "{}",
            hint(ui, "Add one so a forgotten password can be reset.")
        );
    }

    let step = match prompt_select(ui, "Choose", &ACTIONS, 0)? {
        0 => {
            let new_password = prompt_secret(ui, "New password")?;
            let confirmation = prompt_secret(ui, "Confirm new password")?;
            match change.submit(session, &new_password, &confirmation) {
                Ok(event) => {
                    println!("{}", badge(ui, Badge::Ok, "Password changed"));
                    Step::Go(event)
                }
                Err(_) => Step::Stay,
            }
        }
        1 => {
            let question = prompt_text(ui, "Security question", session.user().security_question())?;
            let answer = prompt_secret(ui, "Answer")?;
            if change
                .set_security_question(session, &question, &answer)
                .is_ok()
            {
                println!("{}", badge(ui, Badge::Ok, "Security question saved"));
            }
            Step::Stay
        }
        _ => Step::Go(change.back()),
    };
    show_feedback(ui, change.error());
    Ok(step)
}
