use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};

use recall_lib::{achievements, personas, LearningEngine};

#[derive(Parser)]
#[command(name = "recall-cli", about = "Personal learning companion CLI", version)]
struct Cli {
    /// Use a specific data directory (default: per-user data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record a question/answer exchange
    Log {
        /// The question that was asked
        query: String,
        /// The answer that was given
        response: String,
        /// Topic label
        #[arg(long)]
        topic: Option<String>,
        /// Persona id (see `personas`)
        #[arg(long)]
        persona: Option<String>,
    },

    /// Show the next question due for review
    Review,

    /// Grade the answer to a review question
    Grade {
        /// Query text of the reviewed question
        query: String,
        /// Whether the answer was correct
        result: GradeResult,
    },

    /// Show the interaction history
    History,

    /// Show profile statistics
    Stats,

    /// List achievements and unlock status
    Achievements,

    /// List available personas
    Personas,

    /// Clear the interaction history (the profile is kept)
    Clear,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GradeResult {
    Correct,
    Incorrect,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let engine = match cli.data_dir {
        Some(dir) => LearningEngine::new(dir)?,
        None => LearningEngine::open_default()?,
    };

    match cli.command {
        Command::Log {
            query,
            response,
            topic,
            persona,
        } => {
            if let Some(id) = persona.as_deref() {
                if personas::find(id).is_none() {
                    bail!("Unknown persona '{}'; run `recall-cli personas`", id);
                }
            }
            let unlocked =
                engine.submit_interaction(&query, &response, topic.as_deref(), persona.as_deref())?;
            println!("Logged.");
            for name in unlocked {
                println!("Achievement unlocked: {}", name);
            }
        }

        Command::Review => match engine.next_due_item(Utc::now())? {
            Some(record) => {
                println!("Due for review (level {}):", record.level);
                println!("  {}", record.query);
                if let Some(topic) = &record.topic {
                    println!("  topic: {}", topic);
                }
                println!("  last reviewed: {}", record.last_reviewed.format("%Y-%m-%d %H:%M"));
            }
            None => println!("No questions due for review right now."),
        },

        Command::Grade { query, result } => {
            let correct = matches!(result, GradeResult::Correct);
            let found = engine
                .history()?
                .iter()
                .any(|r| r.query == query);
            let unlocked = engine.grade_answer(&query, correct)?;
            if found {
                println!("Graded '{}' as {:?}.", query, result);
            } else {
                println!("No record matches '{}'; nothing graded.", query);
            }
            for name in unlocked {
                println!("Achievement unlocked: {}", name);
            }
        }

        Command::History => {
            let records = engine.history()?;
            if records.is_empty() {
                println!("No interactions recorded.");
            }
            for record in records {
                println!(
                    "[L{}] {}  ({})",
                    record.level,
                    record.query,
                    record.last_reviewed.format("%Y-%m-%d %H:%M")
                );
            }
        }

        Command::Stats => {
            let profile = engine.profile_snapshot()?;
            println!("Level {}  ({} points)", profile.level, profile.total_points);
            println!("Messages:  {}", profile.total_messages);
            println!("Streak:    {} days", profile.streak_days);
            println!(
                "Quiz:      {}/{}",
                profile.quiz_score, profile.quiz_attempts
            );
            println!("Topics:    {}", profile.topics.len());
            println!("Personas:  {}", profile.personalities_used.len());
        }

        Command::Achievements => {
            let profile = engine.profile_snapshot()?;
            for achievement in achievements::CATALOG {
                let marker = if profile.has_achievement(achievement.id) {
                    "[x]"
                } else {
                    "[ ]"
                };
                println!(
                    "{} {} (+{} pts) - {}",
                    marker, achievement.name, achievement.points, achievement.description
                );
            }
        }

        Command::Personas => {
            for persona in personas::CATALOG {
                println!("{:<16} {} - {}", persona.id, persona.name, persona.description);
            }
        }

        Command::Clear => {
            engine.clear_history()?;
            println!("History cleared.");
        }
    }

    Ok(())
}
