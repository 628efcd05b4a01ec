use console::style;
use std::fmt::Display;

/// Green bold: confirmations, the final "sent" line
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// Red: inline field errors, failed submissions
pub fn error<D: Display>(text: D) -> String {
    style(text).red().to_string()
}

/// Yellow: non-blocking notices (KPI limit, truncation)
pub fn warning<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// White bold: step titles, section headers
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: hints, descriptions, rules
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Green: values the user entered
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan bold: step counters, bullets
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Cyan: field labels on the review screen
pub fn label<D: Display>(text: D) -> String {
    style(text).cyan().to_string()
}

/// Magenta bold: computed KPI values
pub fn kpi_value<D: Display>(text: D) -> String {
    style(text).magenta().bold().to_string()
}

/// `✗ Email: Please enter a valid email`
pub fn field_error(field: impl Display, message: impl Display) -> String {
    format!("{} {}", error("✗"), error(format!("{field}: {message}")))
}

/// Placeholder for optional fields left blank.
pub fn or_placeholder(text: &str) -> String {
    if text.trim().is_empty() {
        dim("(not provided)")
    } else {
        value(text)
    }
}
