//! Terminal rendering for API results.

use anyhow::Result;
use colored::Colorize;
use console::Term;
use snaplabs_client::{Comment, Project, UploadResult, UserMessage, Visibility};

pub fn project_table(projects: &[Project]) -> Result<()> {
    let term = Term::stdout();
    if projects.is_empty() {
        term.write_line(&"No projects shared yet.".dimmed().to_string())?;
        return Ok(());
    }
    for project in projects {
        term.write_line(&format!(
            "{:>6}  {} {} {}",
            project.id,
            project.title.bold(),
            "by".dimmed(),
            project.author_name()
        ))?;
    }
    Ok(())
}

pub fn project_detail(project: &Project) -> Result<()> {
    let term = Term::stdout();
    let visibility = match project.visibility {
        Visibility::Visible => "visible".green(),
        Visibility::Unshared => "unshared".yellow(),
    };

    term.write_line(&format!(
        "{} {}",
        project.title.bold(),
        format!("(#{})", project.id).dimmed()
    ))?;
    term.write_line(&format!("by {}  [{}]", project.author_name(), visibility))?;
    if !project.description.is_empty() {
        term.write_line("")?;
        term.write_line(&project.description)?;
    }
    term.write_line("")?;
    term.write_line(&format!(
        "views {}  loves {}  favorites {}  remixes {}",
        project.stats.views.to_string().bright_blue(),
        project.stats.loves.to_string().bright_red(),
        project.stats.favorites.to_string().bright_yellow(),
        project.stats.remixes.to_string().bright_green(),
    ))?;
    if let Some(image) = &project.image {
        term.write_line(&format!("thumbnail: {}", image.dimmed()))?;
    }
    Ok(())
}

pub fn comment_tree(comments: &[Comment]) -> Result<()> {
    let term = Term::stdout();
    if comments.is_empty() {
        term.write_line(&"No comments yet.".dimmed().to_string())?;
        return Ok(());
    }
    for comment in comments {
        write_comment(&term, comment, 0)?;
    }
    Ok(())
}

fn write_comment(term: &Term, comment: &Comment, depth: usize) -> Result<()> {
    let indent = "  ".repeat(depth);
    let stamp = comment
        .created_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    term.write_line(&format!(
        "{}{} {}  {}",
        indent,
        comment.author().bold(),
        stamp.dimmed(),
        comment.text
    ))?;
    for reply in &comment.replies {
        write_comment(term, reply, depth + 1)?;
    }
    Ok(())
}

pub fn message_list(messages: &[UserMessage]) -> Result<()> {
    let term = Term::stdout();
    if messages.is_empty() {
        term.write_line(&"Inbox is empty.".dimmed().to_string())?;
        return Ok(());
    }
    for (index, message) in messages.iter().enumerate() {
        let marker = if message.read {
            " ".normal()
        } else {
            "●".bright_yellow()
        };
        let stamp = message
            .timestamp
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        term.write_line(&format!(
            "{} {:>3}  {} {}  {}",
            marker,
            index,
            message.sender.bold(),
            stamp.dimmed(),
            message.content
        ))?;
    }
    Ok(())
}

pub fn unread_count(count: u64) -> Result<()> {
    let term = Term::stdout();
    if count == 0 {
        term.write_line(&"No unread messages.".dimmed().to_string())?;
    } else {
        term.write_line(&format!("{} unread", count.to_string().bright_yellow()))?;
    }
    Ok(())
}

pub fn upload_result(result: &UploadResult) -> Result<()> {
    let term = Term::stdout();
    if result.success {
        term.write_line(&format!("{} thumbnail uploaded", "✓".green()))?;
    } else {
        term.write_line(&format!("{} upload rejected", "✗".red()))?;
    }
    if let Some(message) = &result.message {
        term.write_line(&message.dimmed().to_string())?;
    }
    Ok(())
}

pub fn created(label: &str, id: u64) -> Result<()> {
    let term = Term::stdout();
    term.write_line(&format!(
        "{} {} {}",
        "✓".green(),
        label,
        id.to_string().bright_blue()
    ))?;
    Ok(())
}

/// Confirmation plus whatever the server sent back, for acknowledgement-style
/// endpoints with no documented response shape.
pub fn ack(label: &str, body: &serde_json::Value) -> Result<()> {
    let term = Term::stdout();
    term.write_line(&format!("{} {}", "✓".green(), label))?;

    let is_empty = body.is_null() || body.as_object().is_some_and(|o| o.is_empty());
    if !is_empty {
        term.write_line(&serde_json::to_string_pretty(body)?.dimmed().to_string())?;
    }
    Ok(())
}
