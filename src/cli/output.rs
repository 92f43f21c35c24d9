use crossterm::style::{Color, Stylize};
use std::collections::BTreeMap;
use std::io::IsTerminal;
use std::path::Path;

const NAME_COLOR: Color = Color::DarkGreen;

pub fn print_mappings(mappings: &BTreeMap<String, String>, config_path: &Path) {
    let use_color = std::io::stdout().is_terminal();
    print!("{}", render_mappings(mappings, config_path, use_color));
}

fn render_mappings(
    mappings: &BTreeMap<String, String>,
    config_path: &Path,
    use_color: bool,
) -> String {
    if mappings.is_empty() {
        return format!("No mappings found in {}.\n", config_path.display());
    }

    let mut out = String::from("Command mappings:\n");
    for (name, command) in mappings {
        out.push_str(&format!(
            "{} {}\n",
            colorize(name, NAME_COLOR, use_color),
            command
        ));
    }
    out
}

fn colorize(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        format!("{}", text.with(color))
    } else {
        text.to_string()
    }
}
