//! Command results rendered as text lines or one JSON object

use serde_json::{Map, Value};

/// Collects a command's result in both forms and prints the selected one
pub struct Output {
    json_mode: bool,
    fields: Map<String, Value>,
    lines: Vec<String>,
}

impl Output {
    /// Create an empty output; `json_mode` selects the printed form
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            fields: Map::new(),
            lines: Vec::new(),
        }
    }

    /// Add a field to the JSON form
    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Add a line to the text form
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    /// Add several lines to the text form
    pub fn lines(mut self, lines: impl IntoIterator<Item = String>) -> Self {
        self.lines.extend(lines);
        self
    }

    /// Render the selected form
    pub fn render(&self) -> String {
        if self.json_mode {
            serde_json::to_string_pretty(&self.fields).unwrap_or_default()
        } else {
            self.lines.join("\n")
        }
    }

    /// Print the selected form to stdout, nothing for empty text
    pub fn print(self) {
        let text = self.render();
        if !text.is_empty() {
            println!("{}", text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(json: bool) -> Output {
        Output::new(json)
            .field("selector", "0x4b40e901")
            .field("size", 64usize)
            .field("dynamic", false)
            .line("0x4b40e901  transfer(address,uint256)")
            .lines(vec!["  address to".to_string()])
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            sample(false).render(),
            "0x4b40e901  transfer(address,uint256)\n  address to"
        );
    }

    #[test]
    fn test_render_json() {
        let value: Value = serde_json::from_str(&sample(true).render()).unwrap();
        assert_eq!(value["selector"], "0x4b40e901");
        assert_eq!(value["size"], 64);
        assert_eq!(value["dynamic"], false);
        assert!(value.get("lines").is_none());
    }

    #[test]
    fn test_render_empty_text() {
        assert_eq!(Output::new(false).field("status", "saved").render(), "");
    }
}
