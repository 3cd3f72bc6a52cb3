//! Interfaz de línea de comandos (clap).

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::algorithm::grades::grade_breakdown;
use crate::catalog::lookup;
use crate::models::{CourseView, ProgressReport};
use crate::session::{Session, ToggleOutcome};

#[derive(Debug, Parser)]
#[command(name = "coursegraph", version, about = "Course prerequisite map and degree progress tracker")]
pub struct Cli {
    /// Catalog file (.json, .xlsx, .xls, .ods). Overrides COURSEGRAPH_CATALOG.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// More log output (debug).
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every course with its current state.
    Courses {
        #[arg(long, value_delimiter = ',')]
        completed: Vec<String>,
    },
    /// Credit progress per requirement category.
    Progress {
        #[arg(long, value_delimiter = ',')]
        completed: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Select courses in order, printing each outcome.
    Toggle {
        #[arg(required = true)]
        courses: Vec<String>,
    },
    /// Description, prerequisites and grade distribution of a course.
    Details { course: String },
    /// JSON payload for the graph renderer.
    Snapshot {
        #[arg(long, value_delimiter = ',')]
        completed: Vec<String>,
    },
    /// Export the prerequisite graph.
    Graph {
        #[arg(long, value_enum, default_value_t = GraphFormat::Dot)]
        format: GraphFormat,
    },
    /// Line-oriented session on stdin.
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphFormat {
    Dot,
    Json,
}

impl Cli {
    /// Filtro de logs por defecto según las banderas.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "coursegraph=debug"
        } else if self.quiet {
            "coursegraph=warn"
        } else {
            "coursegraph=info"
        }
    }
}

pub fn run(cli: Cli, mut session: Session) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Courses { completed } => {
            apply_selections(&mut session, &completed, &mut out)?;
            print_courses(&session.views(), &mut out)?;
        }
        Command::Progress { completed, json } => {
            apply_selections(&mut session, &completed, &mut out)?;
            let report = session.progress();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                print_progress(&report, &mut out)?;
            }
        }
        Command::Toggle { courses } => {
            for query in courses.iter() {
                let outcome = session.toggle(&resolve_id(&session, query));
                writeln!(out, "{}", outcome.describe())?;
            }
            writeln!(out)?;
            print_progress(&session.progress(), &mut out)?;
        }
        Command::Details { course } => match lookup::resolve(session.catalog(), &course) {
            Some(c) => {
                writeln!(out, "{}: {}", c.code, c.title)?;
                writeln!(out, "{} credits, {}", c.credits, c.department)?;
                if !c.description.is_empty() {
                    writeln!(out, "\n{}", c.description)?;
                }
                if !c.prerequisites.is_empty() {
                    writeln!(out, "\nPrerequisites: {}", c.prerequisites.join(", "))?;
                }
                let dependents = session.graph().dependents(&c.id);
                if !dependents.is_empty() {
                    writeln!(out, "Required by:   {}", dependents.join(", "))?;
                }
                let shares = grade_breakdown(c);
                if !shares.is_empty() {
                    writeln!(out, "\nGrade distribution ({} students):", c.grade_distribution.total())?;
                    for s in shares.iter() {
                        writeln!(out, "  {:<3} {:>5.1}%  {}", s.grade, s.percent, bar(s.percent / 100.0, 20))?;
                    }
                }
            }
            None => {
                let suggestions = lookup::suggest(session.catalog(), &course, 3);
                return Err(format!("unknown course '{}' (close matches: {})", course, suggestions.join(", ")).into());
            }
        },
        Command::Snapshot { completed } => {
            let mut sink = std::io::sink();
            apply_selections(&mut session, &completed, &mut sink)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&session.snapshot())?)?;
        }
        Command::Graph { format } => match format {
            GraphFormat::Dot => writeln!(out, "{}", session.graph().to_dot())?,
            GraphFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&session.graph().edges())?)?,
        },
        Command::Interactive => {
            let stdin = std::io::stdin();
            run_interactive(&mut session, stdin.lock(), &mut out)?;
        }
    }

    Ok(())
}

/// Bucle interactivo: una línea = un evento. `list`, `progress`, `quit`.
pub fn run_interactive<R: BufRead, W: Write>(session: &mut Session, input: R, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Type a course to toggle it, or: list, progress, quit")?;
    for line in input.lines() {
        let line = line?;
        let cmd = line.trim();
        match cmd {
            "" => continue,
            "quit" | "exit" => break,
            "list" => print_courses(&session.views(), out)?,
            "progress" => print_progress(&session.progress(), out)?,
            query => {
                let outcome = session.toggle(&resolve_id(session, query));
                writeln!(out, "{}", outcome.describe())?;
            }
        }
    }
    Ok(())
}

/// Texto libre -> id del catálogo, sin coincidencias aproximadas: un id mal
/// escrito se devuelve tal cual y el Toggle Controller lo trata como desconocido.
fn resolve_id(session: &Session, query: &str) -> String {
    lookup::resolve_exact(session.catalog(), query)
        .map(|c| c.id.clone())
        .unwrap_or_else(|| query.trim().to_string())
}

fn apply_selections<W: Write>(session: &mut Session, completed: &[String], out: &mut W) -> std::io::Result<()> {
    for query in completed.iter() {
        let outcome = session.toggle(&resolve_id(session, query));
        if !matches!(outcome, ToggleOutcome::Completed { .. }) {
            writeln!(out, "{}", outcome.describe())?;
        }
    }
    Ok(())
}

fn print_courses<W: Write>(views: &[CourseView], out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{:<10} {:<36} {:>3}  {:<10} {:<22} {}", "CODE", "TITLE", "CR", "STATUS", "CATEGORY", "NOTE")?;
    for v in views.iter() {
        writeln!(
            out,
            "{:<10} {:<36} {:>3}  {:<10} {:<22} {}",
            v.code,
            truncate(&v.title, 36),
            v.credits,
            v.status.to_string(),
            v.category.to_string(),
            v.hint
        )?;
    }
    Ok(())
}

fn print_progress<W: Write>(report: &ProgressReport, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Academic Progress")?;
    for c in report.categories.iter() {
        writeln!(
            out,
            "  {:<18} {:>3}/{:<3} credits  {}",
            c.label,
            c.completed_credits,
            c.target_credits,
            bar(c.ratio, 20)
        )?;
    }
    writeln!(
        out,
        "  {:<18} {:>3}/{:<3}",
        "Total completed", report.total_completed_credits, report.degree_target_credits
    )?;
    Ok(())
}

// La barra sí se recorta a 100%: es presentación.
fn bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0)) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
