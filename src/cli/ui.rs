use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    TotalValue,
    Warning,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Warning => style(text).yellow().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Formats a monetary amount with two decimals.
pub fn money(symbol: &str, value: f64) -> String {
    if value < 0.0 {
        format!("-{symbol}{:.2}", -value)
    } else {
        format!("{symbol}{value:.2}")
    }
}

/// Right-aligned cell holding a monetary amount.
pub fn money_cell(symbol: &str, value: f64) -> Cell {
    Cell::new(money(symbol, value)).set_alignment(CellAlignment::Right)
}

/// Right-aligned cell holding a percentage.
pub fn percent_cell(value: f64) -> Cell {
    Cell::new(format!("{value:.1}%")).set_alignment(CellAlignment::Right)
}

/// Creates a cell for a gain (green) or loss (red).
pub fn change_cell(symbol: &str, change: f64) -> Cell {
    let color = if change >= 0.0 {
        Color::Green
    } else {
        Color::Red
    };
    money_cell(symbol, change).fg(color)
}

/// Cell for a value that should stand out, such as the amount lost.
pub fn highlight_cell(text: String, color: Color) -> Cell {
    Cell::new(text)
        .fg(color)
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Right)
}

/// Renders a horizontal bar `width` characters wide, filled to `percent`.
///
/// Percentages outside 0..=100 (or NaN) are clamped so the bar never
/// overflows its track.
pub fn bar(percent: f64, width: usize) -> String {
    let fraction = if percent.is_nan() {
        0.0
    } else {
        (percent / 100.0).clamp(0.0, 1.0)
    };
    let filled = (fraction * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_fill() {
        assert_eq!(bar(0.0, 4), "░░░░");
        assert_eq!(bar(50.0, 4), "██░░");
        assert_eq!(bar(100.0, 4), "████");
    }

    #[test]
    fn test_bar_clamps_out_of_range() {
        assert_eq!(bar(250.0, 3), "███");
        assert_eq!(bar(-10.0, 3), "░░░");
        assert_eq!(bar(f64::NAN, 3), "░░░");
    }

    #[test]
    fn test_money_formatting() {
        assert_eq!(money("$", 888.4878), "$888.49");
        assert_eq!(money("$", -12.5), "-$12.50");
        assert_eq!(money("€", 0.0), "€0.00");
    }
}
