//! Views and the registry that binds each one to its controller.

use std::fmt;

use crate::controllers::{
    ChangePasswordController, Controller, CreateController, HomeController, LoginController,
    ResetPasswordController, SearchController,
};
use crate::error::Result;
use crate::session::Session;

/// A named screen. These are the states of the navigation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Home,
    ChangePassword,
    ResetPassword,
    Create,
    Edit,
    Search,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Login,
        View::Home,
        View::ChangePassword,
        View::ResetPassword,
        View::Create,
        View::Edit,
        View::Search,
    ];

    /// Name of the layout resource this view is rendered from.
    pub fn resource_name(&self) -> &'static str {
        match self {
            View::Login => "Login",
            View::Home => "Home",
            View::ChangePassword => "ChangePassword",
            View::ResetPassword => "ResetPassword",
            View::Create => "Create",
            View::Edit => "Edit",
            View::Search => "Search",
        }
    }

    /// Human-readable screen title.
    pub fn title(&self) -> &'static str {
        match self {
            View::Login => "Log in",
            View::Home => "Home",
            View::ChangePassword => "Change password",
            View::ResetPassword => "Reset password",
            View::Create => "New entry",
            View::Edit => "Edit entry",
            View::Search => "Search",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource_name())
    }
}

/// Layout and controller factory for one view.
#[derive(Debug, Clone, Copy)]
pub struct ViewBinding {
    pub view: View,
    pub layout: &'static str,
    pub factory: fn() -> Controller,
}

/// Explicit mapping from every view to its binding.
#[derive(Debug, Clone)]
pub struct ViewRegistry {
    bindings: Vec<ViewBinding>,
}

impl ViewRegistry {
    /// The registry used by the application.
    pub fn standard() -> Self {
        let bindings = View::ALL
            .iter()
            .map(|&view| ViewBinding {
                view,
                layout: view.resource_name(),
                factory: match view {
                    View::Login => || Controller::Login(LoginController::new()),
                    View::Home => || Controller::Home(HomeController::new()),
                    View::ChangePassword => {
                        || Controller::ChangePassword(ChangePasswordController::new())
                    }
                    View::ResetPassword => {
                        || Controller::ResetPassword(ResetPasswordController::new())
                    }
                    View::Create | View::Edit => || Controller::Create(CreateController::new()),
                    View::Search => || Controller::Search(SearchController::new()),
                },
            })
            .collect();
        Self { bindings }
    }

    pub fn binding(&self, view: View) -> Option<&ViewBinding> {
        self.bindings.iter().find(|binding| binding.view == view)
    }

    /// Construct the controller for `view`, then run its I/O initialization.
    pub fn instantiate(&self, view: View, session: &Session) -> Result<Controller> {
        let binding = self.binding(view).ok_or_else(|| {
            crate::error::JournalError::Navigation(format!("No binding for view {}", view))
        })?;
        let mut controller = (binding.factory)();
        controller.initialize(session)?;
        Ok(controller)
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_view_has_a_binding() {
        let registry = ViewRegistry::standard();
        for view in View::ALL {
            let binding = registry.binding(view).expect("binding should exist");
            assert_eq!(binding.layout, view.resource_name());
        }
    }

    #[test]
    fn test_factories_construct_without_io() {
        let registry = ViewRegistry::standard();
        let login = (registry.binding(View::Login).unwrap().factory)();
        assert!(matches!(login, Controller::Login(_)));

        let edit = (registry.binding(View::Edit).unwrap().factory)();
        assert!(matches!(edit, Controller::Create(_)));
    }

    #[test]
    fn test_resource_names() {
        assert_eq!(View::Login.to_string(), "Login");
        assert_eq!(View::Create.resource_name(), "Create");
        assert_eq!(View::Edit.resource_name(), "Edit");
    }
}
