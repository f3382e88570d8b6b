use crate::app::{App, Message, Model};

impl App {
    /// Side effects that accompany a state transition.
    ///
    /// Theme changes write the chosen value back to the config file so
    /// the preference survives the session. A failed write is logged
    /// and otherwise swallowed; the applied theme stays in effect.
    pub(super) fn handle_message_side_effects(&self, model: &mut Model, msg: &Message) {
        let _ = self;
        match msg {
            Message::SetTheme(_) | Message::ToggleTheme => persist_theme(model),
            _ => {}
        }
    }
}

fn persist_theme(model: &Model) {
    let Some(path) = model.config_global_path.as_deref() else {
        return;
    };
    if let Err(err) = crate::config::save_theme(path, model.theme) {
        tracing::warn!(
            theme = model.theme.as_str(),
            path = %path.display(),
            "failed to persist theme: {err:#}"
        );
    }
}
