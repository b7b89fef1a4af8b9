//! Plain-text rendering of the wizard for the terminal.

use relation::{RelationResponse, RelationResult, WordSet};

use crate::command::command_hint;
use crate::wizard::{ResultView, Step, Wizard, WizardState};

const INDENT: &str = "  ";

fn subtitle(step: Step) -> &'static str {
    match step {
        Step::Input => "Add words to discover connections between them",
        Step::Review => "Review your words and find relationships",
        Step::Result => "Discover the connections between your words",
    }
}

/// `[1] Add Words -- 2 Review -- 3 Results`, current step in brackets.
fn progress(step: Step) -> String {
    [(Step::Input, "Add Words"), (Step::Review, "Review"), (Step::Result, "Results")]
        .iter()
        .map(|(s, label)| {
            if *s == step {
                format!("[{}] {}", s.number(), label)
            } else {
                format!("{} {}", s.number(), label)
            }
        })
        .collect::<Vec<_>>()
        .join(" -- ")
}

fn word_list(words: &WordSet) -> Vec<String> {
    words
        .iter()
        .enumerate()
        .map(|(i, w)| format!("{}{}. {}", INDENT, i + 1, w))
        .collect()
}

fn relation_lines(data: &RelationResult) -> Vec<String> {
    let mut lines = Vec::new();
    if !data.edges.is_empty() {
        lines.push("Relationships".to_string());
        for (i, e) in data.edges.iter().enumerate() {
            lines.push(format!("{}{}. {} → {} ({})", INDENT, i + 1, e.from, e.to, e.relation));
            lines.push(format!("{}{}{}", INDENT, INDENT, e.why));
        }
    }
    if !data.isolated.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("Isolated Words".to_string());
        lines.push(format!("{}{}", INDENT, data.isolated.join(", ")));
    }
    if lines.is_empty() {
        lines.push("No relationships found.".to_string());
    }
    lines
}

/// Lines describing a service response in the result step.
pub fn response_lines(resp: &RelationResponse) -> Vec<String> {
    match resp {
        RelationResponse::Success { data, .. } => relation_lines(data),
        RelationResponse::Unparsed { raw, error } => {
            let mut lines = vec![format!("error: {}", error), "Model output:".to_string()];
            lines.extend(raw.lines().map(|l| format!("{}{}", INDENT, l)));
            lines
        }
        RelationResponse::Error { error } => vec![format!("error: {}", error)],
    }
}

/// Full screen for the current state: header, step body, available commands.
pub fn render(wizard: &Wizard) -> String {
    let step = wizard.step();
    let mut lines = vec![
        "Word Relation Finder".to_string(),
        subtitle(step).to_string(),
        progress(step),
        String::new(),
    ];

    match wizard.state() {
        WizardState::Input => {
            lines.push("Add words (separate with commas), e.g. dog, animal, pet, tree".to_string());
            if !wizard.words().is_empty() {
                lines.push(String::new());
                lines.push("Your Words".to_string());
                lines.extend(word_list(wizard.words()));
            }
        }
        WizardState::Review => {
            lines.push("Review Your Words".to_string());
            lines.push("You've added the following words:".to_string());
            lines.extend(word_list(wizard.words()));
        }
        WizardState::Result(ResultView::Loading) => {
            lines.push("Analyzing...".to_string());
        }
        WizardState::Result(view) => {
            lines.push("Analysis Results".to_string());
            let analyzed: Vec<&str> = wizard.words().iter().collect();
            lines.push(format!("Analyzed words: {}", analyzed.join(", ")));
            lines.push(String::new());
            if let Some(resp) = view.response() {
                lines.extend(response_lines(&resp));
            }
        }
    }

    let actions = wizard.available_actions();
    if !actions.is_empty() {
        lines.push(String::new());
        let hints: Vec<String> = actions
            .iter()
            .map(|a| format!("{} ({})", a, command_hint(*a)))
            .collect();
        lines.push(format!("> {} | /quit", hints.join(" | ")));
    }
    lines.join("\n")
}
