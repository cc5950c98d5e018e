//! Navigation state machine.
//!
//! The current [`View`] is the state. Controllers emit [`NavEvent`]s and the
//! [`Navigator`] resolves each one against a fixed transition table, builds and
//! initializes the next controller, and only then commits the new state. A
//! transition whose next controller fails to initialize changes nothing.
//!
//! History is a single slot held by the [`Session`]: Back returns to the most
//! recent origin only.

use log::{info, warn};

use crate::controllers::Controller;
use crate::error::{JournalError, Result};
use crate::model::JournalEntry;
use crate::session::Session;
use crate::view::{View, ViewRegistry};

/// Named events emitted by controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    LoginOk,
    FirstTime,
    ForgotPassword,
    NewEntry,
    Search,
    ChangePassword,
    Logout,
    Back,
    Save,
    EditEntry(JournalEntry),
    PasswordChanged,
    Answered,
}

impl NavEvent {
    pub fn name(&self) -> &'static str {
        match self {
            NavEvent::LoginOk => "login_ok",
            NavEvent::FirstTime => "first_time",
            NavEvent::ForgotPassword => "forgot_password",
            NavEvent::NewEntry => "new_entry",
            NavEvent::Search => "search",
            NavEvent::ChangePassword => "change_password",
            NavEvent::Logout => "logout",
            NavEvent::Back => "back",
            NavEvent::Save => "save",
            NavEvent::EditEntry(_) => "edit_entry",
            NavEvent::PasswordChanged => "password_changed",
            NavEvent::Answered => "answered",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    View(View),
    Previous,
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    target: Target,
    /// Record the origin view in the session before entering the target.
    remember: bool,
}

impl Rule {
    const fn to(view: View) -> Self {
        Self {
            target: Target::View(view),
            remember: false,
        }
    }

    const fn remembering(view: View) -> Self {
        Self {
            target: Target::View(view),
            remember: true,
        }
    }

    const fn previous() -> Self {
        Self {
            target: Target::Previous,
            remember: false,
        }
    }
}

fn rule(from: View, event: &NavEvent) -> Option<Rule> {
    use NavEvent as E;

    let rule = match (from, event) {
        (View::Login, E::LoginOk) => Rule::to(View::Home),
        (View::Login, E::FirstTime) => Rule::remembering(View::ChangePassword),
        (View::Login, E::ForgotPassword) => Rule::remembering(View::ResetPassword),

        (View::Home, E::NewEntry) => Rule::remembering(View::Create),
        (View::Home, E::Search) => Rule::remembering(View::Search),
        (View::Home, E::ChangePassword) => Rule::remembering(View::ChangePassword),
        (View::Home, E::Logout) => Rule::to(View::Login),

        (View::Create, E::Back | E::Save) => Rule::previous(),

        (View::Search, E::EditEntry(_)) => Rule::remembering(View::Edit),
        // The slot holds SEARCH after returning from EDIT, so Back is fixed.
        (View::Search, E::Back) => Rule::to(View::Home),

        (View::Edit, E::Back | E::Save) => Rule::to(View::Search),

        (View::ChangePassword, E::PasswordChanged | E::Back) => Rule::previous(),

        (View::ResetPassword, E::Answered) => Rule::to(View::ChangePassword),
        (View::ResetPassword, E::Back) => Rule::previous(),

        _ => return None,
    };
    Some(rule)
}

/// A resolved move between views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: View,
    pub to: View,
    /// View recorded as the Back target, if this transition records one.
    pub remember: Option<View>,
}

/// Owns the current view and drives transitions between controllers.
#[derive(Debug)]
pub struct Navigator {
    current: View,
    registry: ViewRegistry,
}

impl Navigator {
    /// A navigator in the initial LOGIN state.
    pub fn new(registry: ViewRegistry) -> Self {
        Self {
            current: View::Login,
            registry,
        }
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Enter the initial view and return its controller.
    pub fn start(&mut self, session: &Session) -> Result<Controller> {
        let controller = self.registry.instantiate(View::Login, session)?;
        self.current = View::Login;
        info!("event=navigate module=navigation status=ok to=Login trigger=start");
        Ok(controller)
    }

    /// Work out where `event` leads from the current view without moving.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Navigation` if the event is not valid in the
    /// current view, or if it targets the previous view and none is recorded.
    pub fn resolve(&self, session: &Session, event: &NavEvent) -> Result<Transition> {
        let from = self.current;
        let rule = rule(from, event).ok_or_else(|| {
            JournalError::Navigation(format!(
                "Event `{}` is not valid in view {}",
                event.name(),
                from
            ))
        })?;

        let to = match rule.target {
            Target::View(view) => view,
            Target::Previous => session.previous_view().ok_or_else(|| {
                JournalError::Navigation(format!(
                    "Event `{}` in view {} needs a previous view, but none is recorded",
                    event.name(),
                    from
                ))
            })?,
        };

        Ok(Transition {
            from,
            to,
            remember: rule.remember.then_some(from),
        })
    }

    /// Apply `event`, returning the initialized controller for the new view.
    ///
    /// On error the current view and the session history are unchanged.
    pub fn dispatch(&mut self, session: &mut Session, event: NavEvent) -> Result<Controller> {
        let transition = match self.resolve(session, &event) {
            Ok(transition) => transition,
            Err(err) => {
                warn!(
                    "event=navigate module=navigation status=error from={} trigger={} error={}",
                    self.current,
                    event.name(),
                    err
                );
                return Err(err);
            }
        };

        let mut controller = self.registry.instantiate(transition.to, session)?;
        if let (Controller::Create(create), NavEvent::EditEntry(entry)) = (&mut controller, &event)
        {
            create.initialize_old_journal(entry.clone());
        }

        if let Some(origin) = transition.remember {
            session.set_previous_view(origin);
        }
        self.current = transition.to;

        info!(
            "event=navigate module=navigation status=ok from={} to={} trigger={}",
            transition.from,
            transition.to,
            event.name()
        );
        Ok(controller)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(ViewRegistry::standard())
    }
}
