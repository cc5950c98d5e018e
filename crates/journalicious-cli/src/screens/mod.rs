//! Terminal front-end for the interactive app.
//!
//! Each core [`View`] is rendered by one screen function. A screen draws its
//! controller's state, reads one action from the user, and reports a
//! [`Step`]. The loop hands any navigation event to the [`Navigator`] and
//! swaps in the controller it returns.

mod change_password;
mod editor;
mod home;
mod login;
mod reset_password;
mod search;

use log::info;

use journalicious_core::controllers::{feedback_message, Controller};
use journalicious_core::{NavEvent, Navigator, Session, Storage, View};

use crate::ui::{blank_line, divider, header, print_error, UiContext};

/// Outcome of one round of a screen.
#[derive(Debug)]
pub enum Step {
    /// Stay on the current screen and draw it again.
    Stay,
    /// Hand an event to the navigator.
    Go(NavEvent),
    /// Leave the application.
    Quit,
}

/// Run the app from LOGIN until the user quits.
pub fn run(ui: &UiContext, storage: &Storage) -> anyhow::Result<()> {
    let mut session = Session::start(storage)?;
    let mut navigator = Navigator::default();
    let mut controller = navigator.start(&session)?;

    loop {
        blank_line(ui);
        println!("{}", header(ui, navigator.current().title(), None));
        println!("{}", divider(ui));

        let step = match &mut controller {
            Controller::Login(login) => login::show(ui, &session, login)?,
            Controller::Home(home) => home::show(ui, home)?,
            Controller::Create(create) => editor::show(ui, &session, create)?,
            Controller::Search(search) => search::show(ui, &session, search)?,
            Controller::ChangePassword(change) => {
                change_password::show(ui, &mut session, change)?
            }
            Controller::ResetPassword(reset) => reset_password::show(ui, &session, reset)?,
        };

        match step {
            Step::Stay => {}
            Step::Go(event) => match navigator.dispatch(&mut session, event) {
                Ok(next) => controller = next,
                Err(err) => print_error(ui, &feedback_message(&err), None),
            },
            Step::Quit => break,
        }
    }

    info!(
        "event=app_exit module=cli status=ok view={}",
        navigator.current().resource_name()
    );
    Ok(())
}

/// Print the controller's last error, if any.
fn show_feedback(ui: &UiContext, error: Option<&str>) {
    if let Some(message) = error {
        print_error(ui, message, None);
    }
}

/// Title shown for the entry form, which serves two views.
fn editor_view(editing: bool) -> View {
    if editing {
        View::Edit
    } else {
        View::Create
    }
}
