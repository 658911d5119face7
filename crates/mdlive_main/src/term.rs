use colored::Colorize;
use mdlive_hast::Attributes;
use mdlive_render::ViewBuilder;

/// Terminal backend: builds view nodes as ANSI-styled strings.
///
/// Styling is deliberately thin; it exists to exercise every
/// construction primitive end to end, not to be a full Markdown skin.
pub struct TermView;

impl ViewBuilder for TermView {
    type Node = String;

    fn text(&self, value: &str) -> String {
        value.to_string()
    }

    fn element(&self, tag_name: &str, _attributes: &Attributes, children: Vec<String>) -> String {
        let body = children.concat();
        match tag_name {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => format!("{}\n\n", body.as_str().bold()),
            "p" => format!("{body}\n\n"),
            "strong" | "b" => body.as_str().bold().to_string(),
            "em" | "i" => body.as_str().italic().to_string(),
            "del" | "s" => body.as_str().strikethrough().to_string(),
            "code" => body.as_str().cyan().to_string(),
            "li" => format!("• {body}\n"),
            "ul" | "ol" => format!("{body}\n"),
            "blockquote" => format!("{}\n\n", quoted(&body)),
            "br" => "\n".to_string(),
            "hr" => format!("{}\n\n", "─".repeat(32).as_str().dimmed()),
            _ => body,
        }
    }

    fn container(&self, children: Vec<String>) -> String {
        children.concat()
    }

    fn code_block(&self, code: &str, language: &str) -> String {
        let header = if language.is_empty() {
            "───".to_string()
        } else {
            format!("─── {language} ───")
        };
        format!(
            "{}\n{}\n{}\n\n",
            header.as_str().dimmed(),
            code.trim_end(),
            "───".dimmed()
        )
    }

    fn math(&self, formula: &str, inline: bool) -> String {
        if inline {
            format!("⟨{}⟩", formula.yellow())
        } else {
            format!("    {}\n\n", formula.yellow())
        }
    }
}

fn quoted(body: &str) -> String {
    body.trim_end()
        .lines()
        .map(|line| format!("│ {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
