use std::fmt;

use auditline_core::AuditRole;

/// Visual category of an entry. Deletions render as `Danger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Neutral,
    Danger,
}

impl Tone {
    pub fn for_role(role: AuditRole) -> Self {
        if role.is_deletion() {
            Tone::Danger
        } else {
            Tone::Neutral
        }
    }

    fn marker(self) -> &'static str {
        match self {
            Tone::Neutral => "",
            Tone::Danger => "! ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactLine {
    pub role: AuditRole,
    pub tone: Tone,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub role: AuditRole,
    pub tone: Tone,
    pub label: &'static str,
    pub user: String,
    pub timestamp: Option<String>,
}

impl Section {
    /// Heading, user line and, when known, the timestamp line.
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = vec![self.label, self.user.as_str()];
        if let Some(timestamp) = self.timestamp.as_deref() {
            lines.push(timestamp);
        }
        lines
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    Compact(Vec<CompactLine>),
    Expanded(Vec<Section>),
}

impl Layout {
    pub fn len(&self) -> usize {
        match self {
            Layout::Compact(lines) => lines.len(),
            Layout::Expanded(sections) => sections.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn roles(&self) -> Vec<AuditRole> {
        match self {
            Layout::Compact(lines) => lines.iter().map(|line| line.role).collect(),
            Layout::Expanded(sections) => sections.iter().map(|section| section.role).collect(),
        }
    }

    /// Text content without tone markers or blank separators.
    pub fn text_lines(&self) -> Vec<&str> {
        match self {
            Layout::Compact(lines) => lines.iter().map(|line| line.text.as_str()).collect(),
            Layout::Expanded(sections) => sections.iter().flat_map(Section::lines).collect(),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Compact(lines) => {
                for line in lines {
                    writeln!(f, "{}{}", line.tone.marker(), line.text)?;
                }
            }
            Layout::Expanded(sections) => {
                for (idx, section) in sections.iter().enumerate() {
                    if idx > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "{}{}", section.tone.marker(), section.label)?;
                    writeln!(f, "  {}", section.user)?;
                    if let Some(timestamp) = &section.timestamp {
                        writeln!(f, "  {timestamp}")?;
                    }
                }
            }
        }
        Ok(())
    }
}
