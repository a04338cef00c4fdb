//! Data Doctor - Strategy consultation
//!
//! Maps a free-text fine-tuning goal to a recommended data strategy.

use regex::Regex;
use std::io::{self, BufRead, Write};

/// Data strategies the consultant can recommend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    InstructionTuning,
    StyleTransfer,
    CodeTuning,
    /// Fallback; carries the goal as typed
    General(String),
}

impl Strategy {
    pub fn title(&self) -> String {
        match self {
            Strategy::InstructionTuning => "Instruction Tuning".to_string(),
            Strategy::StyleTransfer => "Continued Pre-training (Style Transfer)".to_string(),
            Strategy::CodeTuning => "Code Tuning".to_string(),
            Strategy::General(goal) => format!("General Fine-Tuning for '{}'", goal),
        }
    }

    /// Bullet points describing format and volume
    pub fn guidance(&self) -> &'static [&'static str] {
        match self {
            Strategy::InstructionTuning => &[
                "Format: JSON files with 'instruction', 'input' (optional), and 'output' fields.",
                "Volume: 500+ high-quality examples for a robust conversationalist.",
                "Example: {\"instruction\": \"Explain quantum physics\", \"output\": \"...\"}",
            ],
            Strategy::StyleTransfer => &[
                "Format: Raw text (.txt) files containing the target writing style.",
                "Volume: 2,000+ lines of text (approx 1MB+).",
                "Note: This is simpler but requires more data to be effective.",
            ],
            Strategy::CodeTuning => &[
                "Format: JSONL with 'instruction' (problem) and 'output' (solution code).",
                "Volume: 100-500 examples of pure code solutions.",
            ],
            Strategy::General(_) => &[
                "Start with **Instruction Tuning** (JSONL format) as it's the most versatile.",
                "Aim for at least 100 diverse examples to see a change in behavior.",
            ],
        }
    }
}

/// Goal classifier. Rules are checked in order; first match wins.
pub struct Consultant {
    rules: Vec<(Regex, Strategy)>,
}

impl Default for Consultant {
    fn default() -> Self {
        Self::new()
    }
}

impl Consultant {
    pub fn new() -> Self {
        Self {
            rules: vec![
                (
                    Regex::new(r"(?i)chat|assistant").expect("valid regex: chat|assistant"),
                    Strategy::InstructionTuning,
                ),
                (
                    Regex::new(r"(?i)style|mimic").expect("valid regex: style|mimic"),
                    Strategy::StyleTransfer,
                ),
                (Regex::new(r"(?i)code").expect("valid regex: code"), Strategy::CodeTuning),
            ],
        }
    }

    /// Recommend a strategy for `goal`
    pub fn recommend(&self, goal: &str) -> Strategy {
        let goal = goal.trim();
        self.rules
            .iter()
            .find(|(pattern, _)| pattern.is_match(goal))
            .map(|(_, strategy)| strategy.clone())
            .unwrap_or_else(|| Strategy::General(goal.to_lowercase()))
    }
}

/// Prompt for a goal on `input`, echoing the question to `out`
pub fn ask_goal<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<String> {
    write!(
        out,
        "1. What is your main goal? (e.g., 'Chatbot', 'Code Assistant', 'Style Mimic', 'Reasoner'): "
    )?;
    out.flush()?;
    let mut goal = String::new();
    input.read_line(&mut goal)?;
    Ok(goal.trim().to_string())
}

/// Print the recommendation block
pub fn render<W: Write>(out: &mut W, strategy: &Strategy) -> io::Result<()> {
    writeln!(out, "\n--- Recommendation ---")?;
    writeln!(out, "🎯 Strategy: **{}**", strategy.title())?;
    for line in strategy.guidance() {
        writeln!(out, "   - {}", line)?;
    }
    writeln!(
        out,
        "\nNext Step: Organise your data into a folder and run: `data-doctor audit <folder_path>`"
    )
}
