use auditline_core::{
    format_full, format_short, format_timestamp, AuditableRecord, DisplayConfig, LayoutMode,
    ResolvedAudit, TimestampConfig,
};

use crate::layout::{CompactLine, Layout, Section, Tone};

/// Builds the audit layout for `record`. Never fails; a record without
/// audit data yields an empty layout.
pub fn render(record: &AuditableRecord, config: &DisplayConfig) -> Layout {
    let resolved = ResolvedAudit::from_record(record);
    let mode = config.mode();
    let layout = match mode {
        LayoutMode::Compact => Layout::Compact(render_compact(&resolved, config)),
        LayoutMode::Expanded => Layout::Expanded(render_expanded(&resolved, config)),
    };
    tracing::trace!(event = "audit_layout_built", mode = ?mode, entries = layout.len());
    layout
}

/// `"{label}: {user}"`, with `" - {timestamp}"` appended when known.
pub fn render_compact(resolved: &ResolvedAudit<'_>, config: &DisplayConfig) -> Vec<CompactLine> {
    resolved
        .visible(config.show_deleted)
        .map(|entry| {
            let mut text = format!("{}: {}", entry.role.label(), format_short(Some(entry.user)));
            if let Some(timestamp) = formatted(entry.timestamp, &config.timestamps) {
                text.push_str(" - ");
                text.push_str(&timestamp);
            }
            CompactLine {
                role: entry.role,
                tone: Tone::for_role(entry.role),
                text,
            }
        })
        .collect()
}

pub fn render_expanded(resolved: &ResolvedAudit<'_>, config: &DisplayConfig) -> Vec<Section> {
    resolved
        .visible(config.show_deleted)
        .map(|entry| Section {
            role: entry.role,
            tone: Tone::for_role(entry.role),
            label: entry.role.label(),
            user: format_full(Some(entry.user)),
            timestamp: formatted(entry.timestamp, &config.timestamps),
        })
        .collect()
}

fn formatted(timestamp: Option<&str>, config: &TimestampConfig) -> Option<String> {
    timestamp.map(|raw| format_timestamp(raw, config))
}
