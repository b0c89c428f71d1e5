//! Parsing of pasted job postings into title, company and description
//!
//! Parsing walks an ordered rule table; the first rule that produces a result
//! wins. Every input yields a populated `ParsedJobInfo`, in the worst case the
//! "Job Application" placeholder with the input as description.

use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

pub const DEFAULT_JOB_TITLE: &str = "Job Application";

/// Longest first line still treated as a title.
const MAX_TITLE_LINE_CHARS: usize = 150;
/// Longest second line still treated as a company name.
const MAX_COMPANY_LINE_CHARS: usize = 100;

/// Words that mark a second line as posting body rather than a company name.
const BODY_MARKERS: &[&str] = &["responsibilities", "requirements"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedJobInfo {
    pub job_title: String,
    pub company: String,
    pub job_description: String,
}

impl ParsedJobInfo {
    fn placeholder(user_input: &str) -> Self {
        Self {
            job_title: DEFAULT_JOB_TITLE.to_string(),
            company: String::new(),
            job_description: user_input.to_string(),
        }
    }
}

/// Normalised view of the raw input shared by all rules.
struct JobInput<'a> {
    raw: &'a str,
    lines: Vec<&'a str>,
    fallback_url: Option<&'a str>,
}

impl<'a> JobInput<'a> {
    fn new(raw: &'a str, fallback_url: Option<&'a str>) -> Self {
        let lines = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        Self {
            raw,
            lines,
            fallback_url,
        }
    }

    fn first_line(&self) -> Option<&'a str> {
        self.lines
            .first()
            .copied()
            .filter(|line| line.chars().count() < MAX_TITLE_LINE_CHARS)
    }

    /// Non-blank lines from `index` on; the whole input when there are none.
    fn description_from(&self, index: usize) -> String {
        let rest = self.lines.get(index..).unwrap_or_default().join("\n");
        if rest.is_empty() {
            self.raw.trim().to_string()
        } else {
            rest
        }
    }
}

type RuleFn = fn(&JobPostingFieldParser, &JobInput<'_>) -> Option<ParsedJobInfo>;

struct JobRule {
    name: &'static str,
    apply: RuleFn,
}

/// Rules in precedence order.
const JOB_RULES: &[JobRule] = &[
    JobRule { name: "title-at-company", apply: JobPostingFieldParser::title_at_company },
    JobRule { name: "company-dash-title", apply: JobPostingFieldParser::company_dash_title },
    JobRule { name: "title-then-company", apply: JobPostingFieldParser::title_then_company },
    JobRule { name: "first-line-title", apply: JobPostingFieldParser::first_line_title },
    JobRule { name: "url-slug", apply: JobPostingFieldParser::url_slug_title },
];

pub struct JobPostingFieldParser {
    at_regex: Regex,
    dash_regex: Regex,
    boilerplate_regex: Regex,
    qualifier_regex: Regex,
}

impl Default for JobPostingFieldParser {
    fn default() -> Self {
        Self::new()
    }
}

impl JobPostingFieldParser {
    pub fn new() -> Self {
        let at_regex = Regex::new(r"(?i)^(.+?)\s+at\s+(.+)$")
            .expect("Invalid title-at-company regex");

        let dash_regex = Regex::new(r"^(.+?)\s+[-\u{2013}\u{2014}]\s+(.+)$")
            .expect("Invalid company-dash-title regex");

        let boilerplate_regex = Regex::new(
            r"(?i)^(?:job category|category|company name|hiring company|company|employer|organi[sz]ation)\s*:\s*",
        )
        .expect("Invalid boilerplate prefix regex");

        let qualifier_regex = Regex::new(r"\b(?:AI|Cloud|Labs|Team|Group|Division)\b")
            .expect("Invalid company qualifier regex");

        Self {
            at_regex,
            dash_regex,
            boilerplate_regex,
            qualifier_regex,
        }
    }

    /// Parse pasted posting text, using the posting URL's slug as a title
    /// source of last resort.
    pub fn parse(&self, user_input: &str, fallback_url: Option<&str>) -> ParsedJobInfo {
        let input = JobInput::new(user_input, fallback_url);

        for rule in JOB_RULES {
            if let Some(info) = (rule.apply)(self, &input) {
                debug!("Job posting parsed with rule '{}'", rule.name);
                return info;
            }
        }

        warn!("No job title found, using '{}'", DEFAULT_JOB_TITLE);
        ParsedJobInfo::placeholder(user_input)
    }

    fn title_at_company(&self, input: &JobInput<'_>) -> Option<ParsedJobInfo> {
        let caps = self.at_regex.captures(input.first_line()?)?;
        let title = caps.get(1)?.as_str().trim();
        let company = caps.get(2)?.as_str().trim();
        if title.is_empty() || company.is_empty() {
            return None;
        }

        Some(ParsedJobInfo {
            job_title: title.to_string(),
            company: company.to_string(),
            job_description: input.description_from(1),
        })
    }

    fn company_dash_title(&self, input: &JobInput<'_>) -> Option<ParsedJobInfo> {
        let caps = self.dash_regex.captures(input.first_line()?)?;
        let company = caps.get(1)?.as_str().trim();
        let title = caps.get(2)?.as_str().trim();
        if title.is_empty() || company.is_empty() {
            return None;
        }

        Some(ParsedJobInfo {
            job_title: title.to_string(),
            company: company.to_string(),
            job_description: input.description_from(1),
        })
    }

    fn title_then_company(&self, input: &JobInput<'_>) -> Option<ParsedJobInfo> {
        let title = input.first_line()?;
        let second = *input.lines.get(1)?;

        let lowered = second.to_lowercase();
        if second.chars().count() >= MAX_COMPANY_LINE_CHARS
            || BODY_MARKERS.iter().any(|marker| lowered.contains(marker))
        {
            return None;
        }

        Some(ParsedJobInfo {
            job_title: title.to_string(),
            company: self.clean_company(second),
            job_description: input.description_from(2),
        })
    }

    fn first_line_title(&self, input: &JobInput<'_>) -> Option<ParsedJobInfo> {
        if input.lines.len() < 2 {
            return None;
        }
        let title = input.first_line()?;

        Some(ParsedJobInfo {
            job_title: title.to_string(),
            company: String::new(),
            job_description: input.description_from(1),
        })
    }

    fn url_slug_title(&self, input: &JobInput<'_>) -> Option<ParsedJobInfo> {
        let title = title_from_url(input.fallback_url?)?;
        debug!("Derived job title '{}' from posting URL", title);

        Some(ParsedJobInfo {
            job_title: title,
            company: String::new(),
            job_description: input.raw.to_string(),
        })
    }

    /// Strip label prefixes and cut the name before a trailing qualifier, so
    /// "Company: Nimbus Cloud Services" becomes "Nimbus".
    pub fn clean_company(&self, line: &str) -> String {
        let cleaned = self.boilerplate_regex.replace(line.trim(), "");
        let cleaned = cleaned.trim();

        let bare = match self.qualifier_regex.find(cleaned) {
            Some(m) => cleaned[..m.start()].trim_end_matches(|c: char| c.is_whitespace() || c == ',' || c == '-'),
            None => cleaned,
        };

        if bare.is_empty() {
            cleaned.to_string()
        } else {
            bare.to_string()
        }
    }
}

/// Title derived from the last path segment of a posting URL.
///
/// `/careers/senior-backend_engineer-4821` gives "Senior Backend Engineer".
pub fn title_from_url(url: &str) -> Option<String> {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    let without_scheme = without_query
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(without_query);
    let (_, path) = without_scheme.split_once('/')?;
    let segment = path.trim_end_matches('/').rsplit('/').next()?;

    let spaced: String = segment
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();

    let title = spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

fn capitalize(word: &str) -> String {
    let mut graphemes = word.graphemes(true);
    match graphemes.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), graphemes.as_str()),
        None => String::new(),
    }
}
