use journalicious_core::controllers::{BackRequest, CreateController};
use journalicious_core::Session;

use crate::ui::format::preview;
use crate::ui::prompt::{
    prompt_confirm, prompt_long_text, prompt_number, prompt_select, prompt_text,
};
use crate::ui::{kv, receipt, UiContext};

use super::{editor_view, show_feedback, Step};

const ACTIONS: [&str; 6] = [
    "Edit title",
    "Edit date",
    "Edit time",
    "Edit context",
    "Save",
    "Back",
];

pub fn show(
    ui: &UiContext,
    session: &Session,
    create: &mut CreateController,
) -> anyhow::Result<Step> {
    let form = create.form().clone();
    println!("{}", kv(ui, "Mode", editor_view(create.is_editing()).title()));
    println!("{}", kv(ui, "Title", &form.title));
    println!("{}", kv(ui, "Date", &form.date));
    println!(
        "{}",
        kv(ui, "Time", &format!("{:02}:{:02}", form.hour, form.minute))
    );
    println!("{}", kv(ui, "Context", &preview(&form.context, 60)));

    let step = match prompt_select(ui, "Choose", &ACTIONS, 0)? {
        0 => {
            create.set_title(prompt_text(ui, "Title", &form.title)?);
            Step::Stay
        }
        1 => {
            create.set_date(prompt_text(ui, "Date (YYYY-MM-DD)", &form.date)?);
            Step::Stay
        }
        2 => {
            let hour = prompt_number(ui, "Hour (0-23)", form.hour)?;
            let minute = prompt_number(ui, "Minute (0-59)", form.minute)?;
            let _ = create.set_time(hour, minute);
            Step::Stay
        }
        3 => {
            create.set_context(prompt_long_text(&form.context)?);
            Step::Stay
        }
        4 => match create.save(session) {
            Ok(event) => {
                if let (Some(message), Some(saved)) = (create.success_message(), create.saved()) {
                    let id = saved.id().to_string();
                    println!("{}", receipt(ui, &message, &[("ID", &id)]));
                }
                Step::Go(event)
            }
            Err(_) => Step::Stay,
        },
        _ => match create.back() {
            BackRequest::Leave(event) => Step::Go(event),
            BackRequest::Confirm(question) => {
                let confirmed = prompt_confirm(ui, question, false)?;
                create.confirm_back(confirmed).map_or(Step::Stay, Step::Go)
            }
        },
    };
    show_feedback(ui, create.error());
    Ok(step)
}
