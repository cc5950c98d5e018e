use journalicious_core::controllers::LoginController;
use journalicious_core::Session;

use crate::ui::prompt::{prompt_secret, prompt_select};
use crate::ui::UiContext;

use super::{show_feedback, Step};

const ACTIONS: [&str; 3] = ["Log in", "Forgot password", "Quit"];

pub fn show(
    ui: &UiContext,
    session: &Session,
    login: &mut LoginController,
) -> anyhow::Result<Step> {
    let step = match prompt_select(ui, "Choose", &ACTIONS, 0)? {
        0 => {
            let password = prompt_secret(ui, "Password")?;
            match login.submit(session, &password) {
                Ok(event) => Step::Go(event),
                Err(_) => Step::Stay,
            }
        }
        1 => match login.forgot_password(session) {
            Ok(event) => Step::Go(event),
            Err(_) => Step::Stay,
        },
        _ => Step::Quit,
    };
    show_feedback(ui, login.error());
    Ok(step)
}
