//! Best-effort extraction of the summary and outlook sections

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Summary,
    Outlook,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub summary: Option<String>,
    pub outlook: Option<String>,
}

// Headers are short and never end a sentence; body text may still mention
// "outlook" in passing.
const MAX_HEADER_WORDS: usize = 4;
// A header with neither a colon nor markdown decoration must be this short.
const MAX_BARE_HEADER_WORDS: usize = 2;

fn header_keyword(head: &str) -> Option<Section> {
    let head = head.trim().to_lowercase();
    let words: Vec<&str> = head.split_whitespace().collect();
    if words.is_empty() || words.len() > MAX_HEADER_WORDS || head.ends_with('.') {
        return None;
    }

    words.iter().take(2).find_map(|word| {
        match word.trim_matches(|c: char| !c.is_alphanumeric()) {
            "summary" => Some(Section::Summary),
            "outlook" => Some(Section::Outlook),
            _ => None,
        }
    })
}

fn strip_list_marker(line: &str) -> &str {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix(&['-', '*', '•'][..]) {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return rest.trim_start();
        }
    }
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(after) = rest.strip_prefix(&['.', ')'][..]) {
            if after.is_empty() || after.starts_with(char::is_whitespace) {
                return after.trim_start();
            }
        }
    }
    line
}

/// Recognize `Summary`, `## Outlook`, `1. **Summary**:` and the inline form
/// `Summary: text...`. Returns the section and any text after the header.
fn split_header(line: &str) -> Option<(Section, &str)> {
    let stripped = strip_list_marker(line);
    let decorated = stripped.starts_with('#') || stripped.starts_with("**");
    let body = stripped.trim_start_matches('#').trim();

    if let Some((head, rest)) = body.split_once(':') {
        if let Some(section) = header_keyword(head.trim_matches(|c| c == '*' || c == ' ')) {
            return Some((section, rest.trim_start_matches('*').trim()));
        }
    }

    let bare = body.trim_matches(|c| c == '*' || c == ':' || c == ' ');
    if bare.contains(':') {
        return None;
    }
    if !decorated && bare.split_whitespace().count() > MAX_BARE_HEADER_WORDS {
        return None;
    }
    header_keyword(bare).map(|s| (s, ""))
}

/// Split free model text into its summary and outlook sections.
///
/// Text before the first recognized header is ignored. Sections that end up
/// empty are `None`.
pub fn extract_sections(text: &str) -> Sections {
    let mut summary: Vec<&str> = Vec::new();
    let mut outlook: Vec<&str> = Vec::new();
    let mut current = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let content = match split_header(line) {
            Some((section, rest)) => {
                current = Some(section);
                rest
            }
            None => strip_list_marker(line),
        };
        if content.is_empty() {
            continue;
        }
        match current {
            Some(Section::Summary) => summary.push(content),
            Some(Section::Outlook) => outlook.push(content),
            None => {}
        }
    }

    let join = |parts: Vec<&str>| (!parts.is_empty()).then(|| parts.join(" "));
    Sections {
        summary: join(summary),
        outlook: join(outlook),
    }
}
