//! # Rendering
//!
//! Every `render_*` function returns the finished text so it can be tested
//! without a terminal; handlers print it. Layout math (width, truncation,
//! padding) is Unicode-aware. Styles come from `styles` and are dropped
//! automatically when stdout is not a terminal.

use super::styles::{DETAIL, HEADING, INDEX, TIME, TITLE};
use campusdesk::api::{CmdMessage, MessageLevel, Summary};
use campusdesk::config::DeskConfig;
use campusdesk::index::DisplayRecord;
use campusdesk::model::{FacultyMember, GalleryItem, Record};
use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
const LEFT_PAD: &str = "    ";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub fn render_dashboard(summary: &Summary) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", HEADING.apply_to("Campus Desk")));
    out.push_str(&format!(
        "  Gallery items    {}\n",
        TITLE.apply_to(summary.gallery_count)
    ));
    out.push_str(&format!(
        "  Faculty members  {}\n",
        TITLE.apply_to(summary.faculty_count)
    ));
    out.push('\n');
    out.push_str(&format!("{}\n", HEADING.apply_to("Quick actions")));
    out.push_str("  campusdesk gallery add --name <NAME> --image <PATH>\n");
    out.push_str("  campusdesk faculty add --name <NAME> --email <EMAIL> --department <DEPT>\n");
    out
}

pub fn render_gallery_list(items: &[DisplayRecord<GalleryItem>]) -> String {
    if items.is_empty() {
        return "No images in the gallery yet.\n".to_string();
    }
    items
        .iter()
        .map(|dr| {
            let item = &dr.record;
            let text = if item.description.is_empty() {
                item.name.clone()
            } else {
                format!("{}  {}", item.name, one_line(&item.description))
            };
            list_line(dr.index, &text, item.created_at())
        })
        .collect()
}

pub fn render_faculty_list(members: &[DisplayRecord<FacultyMember>]) -> String {
    if members.is_empty() {
        return "No faculty members yet.\n".to_string();
    }
    let mut out = String::new();
    for dr in members {
        let member = &dr.record;
        out.push_str(&list_line(dr.index, member.name(), member.created_at()));

        let role = [member.position.as_str(), member.department.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        let contact = [member.email.as_str(), member.phone.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("  ");
        let detail_width = LINE_WIDTH.saturating_sub(LEFT_PAD.width() * 2);
        for detail in [role, contact, member.specialization_list().join(" · ")] {
            if detail.is_empty() {
                continue;
            }
            out.push_str(&format!(
                "{}{}{}\n",
                LEFT_PAD,
                LEFT_PAD,
                DETAIL.apply_to(truncate_to_width(&detail, detail_width))
            ));
        }
    }
    out
}

pub fn render_reference_list(entries: &[&str]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}{}\n", LEFT_PAD, entry))
        .collect()
}

pub fn render_config(config: &DeskConfig) -> String {
    config
        .list_all()
        .into_iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

fn list_line(index: usize, text: &str, created_at: DateTime<Utc>) -> String {
    let idx_str = format!("{}. ", index);
    let fixed_width = LEFT_PAD.width() + idx_str.width() + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let title = truncate_to_width(text, available);
    let padding = available.saturating_sub(title.width());

    format!(
        "{}{}{}{}{}\n",
        LEFT_PAD,
        INDEX.apply_to(idx_str),
        title,
        " ".repeat(padding),
        TIME.apply_to(format_time_ago(created_at))
    )
}

fn one_line(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
