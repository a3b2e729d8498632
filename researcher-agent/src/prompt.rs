//! System prompt assembly.

use chrono::{DateTime, Local};

pub const MARKDOWN_INSTRUCTION: &str = "Use markdown to format your answers.";
pub const DATETIME_INSTRUCTION_PREFIX: &str = "The current time is ";

pub(crate) struct PromptParts<'a> {
    pub description: Option<&'a str>,
    pub instructions: &'a [String],
    pub markdown: bool,
    pub add_datetime: bool,
    pub additional: Option<&'a str>,
}

/// Render the system prompt as seen by the model at `now`.
///
/// Layout: description, then `## Instructions` (numbered when there is more
/// than one entry) followed by a blank line, then the additional block.
pub(crate) fn render(parts: &PromptParts<'_>, now: DateTime<Local>) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(description) = parts.description.filter(|d| !d.is_empty()) {
        lines.push(description.to_string());
    }

    let mut instructions: Vec<String> = parts.instructions.to_vec();
    if parts.markdown {
        instructions.push(MARKDOWN_INSTRUCTION.to_string());
    }
    if parts.add_datetime {
        instructions.push(format!(
            "{DATETIME_INSTRUCTION_PREFIX}{}",
            now.format("%Y-%m-%d %H:%M:%S%.6f")
        ));
    }

    match instructions.as_slice() {
        [] => {}
        [only] => {
            lines.push("## Instructions".to_string());
            lines.push(only.clone());
            lines.push(String::new());
        }
        many => {
            lines.push("## Instructions".to_string());
            lines.extend(many.iter().enumerate().map(|(i, text)| format!("{}. {}", i + 1, text)));
            lines.push(String::new());
        }
    }

    if let Some(additional) = parts.additional {
        lines.push(additional.to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 9, 3, 14, 30, 0).unwrap()
    }

    #[test]
    fn numbers_multiple_instructions() {
        let instructions = vec!["Read the notes.".to_string(), "Write the report.".to_string()];
        let prompt = render(
            &PromptParts {
                description: Some("You are an analyst."),
                instructions: &instructions,
                markdown: false,
                add_datetime: false,
                additional: Some("<report_format>\n</report_format>"),
            },
            fixed_now(),
        );

        assert_eq!(
            prompt,
            "You are an analyst.\n## Instructions\n1. Read the notes.\n2. Write the report.\n\n<report_format>\n</report_format>"
        );
    }

    #[test]
    fn single_instruction_is_not_numbered() {
        let instructions = vec!["Be brief.".to_string()];
        let prompt = render(
            &PromptParts {
                description: None,
                instructions: &instructions,
                markdown: false,
                add_datetime: false,
                additional: None,
            },
            fixed_now(),
        );
        assert_eq!(prompt, "## Instructions\nBe brief.\n");
    }

    #[test]
    fn markdown_and_datetime_are_appended_last() {
        let instructions = vec!["Be brief.".to_string()];
        let prompt = render(
            &PromptParts {
                description: None,
                instructions: &instructions,
                markdown: true,
                add_datetime: true,
                additional: None,
            },
            fixed_now(),
        );

        assert!(prompt.contains("1. Be brief."));
        assert!(prompt.contains("2. Use markdown to format your answers."));
        assert!(prompt.contains("3. The current time is 2024-09-03 14:30:00"));
    }

    #[test]
    fn empty_configuration_renders_empty_prompt() {
        let prompt = render(
            &PromptParts {
                description: None,
                instructions: &[],
                markdown: false,
                add_datetime: false,
                additional: None,
            },
            fixed_now(),
        );
        assert!(prompt.is_empty());
    }
}
