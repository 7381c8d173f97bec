// ============================================================================
// SESSION STATE - logged-in flag as an immutable reducer value
// ============================================================================

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionAction {
    Login,
    Logout,
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let logged_in = matches!(action, SessionAction::Login);
        if self.logged_in == logged_in {
            // Same value: keep the Rc so consumers are not re-rendered
            return self;
        }
        Rc::new(Session { logged_in })
    }
}
