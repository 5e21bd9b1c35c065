//! REPL (Read-Eval-Print Loop) for the interactive interview

use crate::ConsoleFormatter;
use crate::cli::ReportFormat;
use acumen_application::InterviewOrchestrator;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;

/// Interactive interview REPL.
///
/// Drives one candidate session through the orchestrator until the interview
/// completes or the candidate quits.
pub struct InterviewRepl {
    orchestrator: Arc<InterviewOrchestrator>,
    candidate_name: String,
    candidate_email: Option<String>,
    report_format: ReportFormat,
    formatter: ConsoleFormatter,
}

impl InterviewRepl {
    pub fn new(
        orchestrator: Arc<InterviewOrchestrator>,
        candidate_name: impl Into<String>,
        candidate_email: Option<String>,
    ) -> Self {
        Self {
            orchestrator,
            candidate_name: candidate_name.into(),
            candidate_email,
            report_format: ReportFormat::Text,
            formatter: ConsoleFormatter::new(),
        }
    }

    pub fn with_report_format(mut self, format: ReportFormat) -> Self {
        self.report_format = format;
        self
    }

    /// Run the interview loop.
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("acumen").join("history.txt"));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        let session_id = self
            .orchestrator
            .start_interview(&self.candidate_name, self.candidate_email.clone())
            .await;

        self.print_banner();
        self.formatter
            .print_interviewer(&self.orchestrator.welcome_message(&self.candidate_name));

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line, &session_id).await {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    match self.orchestrator.process_response(&session_id, line).await {
                        Ok(reply) => {
                            self.formatter.print_interviewer(&reply.text);
                            if let Some(follow_up) = &reply.metadata.follow_up {
                                println!("(A good follow-up to think about: {follow_up})");
                            }
                            if let Some(summary) = &reply.metadata.evaluation {
                                if let Ok(session) =
                                    self.orchestrator.interview_state(&session_id).await
                                {
                                    match self.report_format {
                                        ReportFormat::Text => {
                                            self.formatter.print_report(&session, summary)
                                        }
                                        ReportFormat::Json => {
                                            self.formatter.print_report_json(&session, summary)
                                        }
                                    }
                                }
                                break;
                            }
                        }
                        Err(e) => {
                            eprintln!("Error: {e}");
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        self.orchestrator.cleanup_session(&session_id).await;

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_banner(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Acumen - Skills Interview          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Commands:");
        println!("  /progress - Show interview progress");
        println!("  /help     - Show this help");
        println!("  /quit     - End the interview");
        println!();
    }

    /// Handle slash commands. Returns true if the REPL should exit.
    async fn handle_command(&self, cmd: &str, session_id: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Interview ended. Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /progress        - Show interview progress");
                println!("  /help, /h, /?    - Show this help");
                println!("  /quit, /exit, /q - End the interview");
                println!();
                false
            }
            "/progress" => {
                match self.orchestrator.progress(session_id).await {
                    Ok(progress) => self.formatter.print_progress(&progress),
                    Err(e) => eprintln!("Error: {e}"),
                }
                false
            }
            other => {
                println!("Unknown command: {other} (try /help)");
                false
            }
        }
    }
}
