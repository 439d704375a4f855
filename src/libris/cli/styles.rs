use console::Style;
use libris::api::MessageLevel;
use once_cell::sync::Lazy;

pub struct Theme {
    pub header: Style,
    pub command: Style,
    pub index: Style,
    pub prompt: Style,
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
}

impl Theme {
    pub fn for_level(&self, level: MessageLevel) -> &Style {
        match level {
            MessageLevel::Info => &self.info,
            MessageLevel::Success => &self.success,
            MessageLevel::Warning => &self.warning,
            MessageLevel::Error => &self.error,
        }
    }
}

pub static THEME: Lazy<Theme> = Lazy::new(|| Theme {
    header: Style::new().bold().cyan(),
    command: Style::new().yellow(),
    index: Style::new().dim(),
    prompt: Style::new().bold(),
    info: Style::new().dim(),
    success: Style::new().green(),
    warning: Style::new().yellow(),
    error: Style::new().red().bold(),
});
