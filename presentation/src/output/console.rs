//! Console rendering of interview output and final reports.

use acumen_application::{EvaluationSummary, InterviewProgress};
use acumen_domain::InterviewSession;
use colored::Colorize;
use serde_json::json;

/// Formats interviewer text and assessment reports for the terminal.
pub struct ConsoleFormatter {
    color: bool,
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleFormatter {
    pub fn new() -> Self {
        Self { color: true }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Print one interviewer message.
    pub fn print_interviewer(&self, text: &str) {
        if self.color {
            println!("\n{}\n{}\n", "Interviewer:".cyan().bold(), text);
        } else {
            println!("\nInterviewer:\n{text}\n");
        }
    }

    /// Print a mid-interview progress snapshot.
    pub fn print_progress(&self, progress: &InterviewProgress) {
        println!();
        println!("{}", self.heading("Progress"));
        println!("  Phase:           {}", progress.phase);
        println!("  Answered:        {}", progress.questions_answered);
        println!("  Running average: {:.1}", progress.current_score);
        println!("  Difficulty:      {}", progress.current_difficulty);
        println!("  Elapsed:         {} min", progress.elapsed_minutes);
        if !progress.category_performance.is_empty() {
            println!("  By category:");
            let mut entries: Vec<_> = progress.category_performance.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            for (category, score) in entries {
                println!("    {:<28} {:>5.1}", category, score);
            }
        }
        println!();
    }

    /// Print the final assessment report as colored text.
    pub fn print_report(&self, session: &InterviewSession, summary: &EvaluationSummary) {
        println!();
        println!("{}", self.heading("Assessment Report"));
        println!("  Candidate:   {}", session.candidate_name());
        if let Some(email) = session.candidate_email() {
            println!("  Email:       {}", email);
        }
        println!("  Questions:   {}", session.responses().len());
        println!("  Overall:     {}", self.score_colored(summary.overall));
        println!("  Skill level: {}", summary.skill_level);
        println!("  Recommendation: {}", summary.hiring_recommendation);
        println!("  Readiness:   {}", summary.readiness_assessment);

        let mut performance: Vec<_> = session.category_performance().into_iter().collect();
        performance.sort_by(|a, b| a.0.cmp(&b.0));
        if !performance.is_empty() {
            println!("\n  Category performance:");
            for (category, score) in performance {
                println!("    {:<28} {:>5.1}", category, score);
            }
        }

        Self::print_list("Key strengths", &summary.key_strengths);
        Self::print_list("Areas for improvement", &summary.areas_for_improvement);
        Self::print_list("Recommendations", &summary.recommendations);
        println!();
    }

    /// Print the final report as pretty JSON.
    pub fn print_report_json(&self, session: &InterviewSession, summary: &EvaluationSummary) {
        let report = json!({
            "candidate_name": session.candidate_name(),
            "candidate_email": session.candidate_email(),
            "started_at": session.started_at().to_rfc3339(),
            "ended_at": session.ended_at().map(|t| t.to_rfc3339()),
            "questions_answered": session.responses().len(),
            "category_performance": session.category_performance(),
            "evaluation": summary,
        });
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("Could not serialize report: {e}"),
        }
    }

    fn print_list(title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        println!("\n  {title}:");
        for item in items {
            println!("    - {item}");
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            format!("=== {} ===", text.bold())
        } else {
            format!("=== {text} ===")
        }
    }

    fn score_colored(&self, score: f64) -> String {
        let text = format!("{score:.1}/100");
        if !self.color {
            return text;
        }
        if score >= 75.0 {
            text.green().to_string()
        } else if score >= 55.0 {
            text.yellow().to_string()
        } else {
            text.red().to_string()
        }
    }
}
