/// What a protected view should do given the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Session restore has not finished; show a neutral placeholder and
    /// make no routing decision yet.
    Waiting,
    /// No session: send the caller to the login page. The attempted
    /// destination is not remembered.
    RedirectToLogin,
    /// Session present: show the protected content unchanged.
    Render,
}

impl GateDecision {
    pub fn decide(resolved: bool, has_identity: bool) -> Self {
        match (resolved, has_identity) {
            (false, _) => GateDecision::Waiting,
            (true, false) => GateDecision::RedirectToLogin,
            (true, true) => GateDecision::Render,
        }
    }
}
