//! Task record definition and validation

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{Error, Result};

/// Due dates are entered and stored as `YYYY-MM-DD`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single tracked task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task ID (16 hex chars), assigned at creation
    pub id: String,

    /// Task title
    pub title: String,

    /// Free-form details
    #[serde(default)]
    pub description: String,

    /// Due date (if any)
    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    /// Whether the task is done
    #[serde(default)]
    pub completed: bool,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last modified
    pub updated_at: DateTime<Utc>,
}

/// Raw input for creating a task, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Raw `YYYY-MM-DD` text; empty or missing means no due date.
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Raw `YYYY-MM-DD` text; an empty string clears the due date.
    #[serde(default)]
    pub due_date: Option<String>,

    #[serde(default)]
    pub completed: Option<bool>,
}

impl Task {
    /// Validate raw input and build a new task with a fresh id.
    pub fn create(input: NewTask) -> Result<Self> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }

        let due_date = match &input.due_date {
            Some(raw) => parse_due_date(raw)?,
            None => None,
        };

        let now = Utc::now();
        Ok(Self {
            id: generate_id(),
            title: title.to_string(),
            description: input.description.trim().to_string(),
            due_date,
            completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Check if the task is overdue
    pub fn is_overdue(&self) -> bool {
        if let Some(due) = &self.due_date {
            let today = Utc::now().date_naive();
            due < &today && !self.completed
        } else {
            false
        }
    }

    /// Set completion and bump the modification time
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
        self.touch();
    }

    /// Bump the modification time
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// True if the keyword appears in the title or description, ignoring case.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.title.to_lowercase().contains(&keyword)
            || self.description.to_lowercase().contains(&keyword)
    }

    /// Apply a validated patch. Everything except `id` and `created_at`
    /// can change. Validation happens before any field is written, so a
    /// failed patch leaves the task untouched.
    pub(crate) fn apply(&mut self, patch: TaskPatch) -> Result<()> {
        let title = match &patch.title {
            Some(raw) => {
                let title = raw.trim();
                if title.is_empty() {
                    return Err(Error::EmptyTitle);
                }
                Some(title.to_string())
            }
            None => None,
        };
        let due_date = match &patch.due_date {
            Some(raw) => Some(parse_due_date(raw)?),
            None => None,
        };

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description.trim().to_string();
        }
        if let Some(due_date) = due_date {
            self.due_date = due_date;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        self.touch();
        Ok(())
    }
}

/// Completion filter for list queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Everything
    #[default]
    All,
    /// Not yet completed
    Active,
    /// Completed
    Completed,
}

impl StatusFilter {
    /// Parse a filter from query or CLI text
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Some(Self::All),
            "active" | "open" | "todo" => Some(Self::Active),
            "completed" | "done" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Get the text label
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Whether a task passes this filter
    pub fn accepts(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

/// Parse a raw due date; blank input means no due date.
pub fn parse_due_date(raw: &str) -> Result<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| Error::InvalidDueDate(raw.to_string()))
}

fn generate_id() -> String {
    Uuid::new_v4().to_string().replace('-', "")[..16].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, due: Option<&str>) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: String::new(),
            due_date: due.map(String::from),
        }
    }

    #[test]
    fn test_create_assigns_id_and_timestamps() {
        let task = Task::create(draft("Buy milk", None)).unwrap();
        assert_eq!(task.id.len(), 16);
        assert!(task.id.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!task.completed);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_create_rejects_empty_title() {
        assert!(matches!(Task::create(draft("", None)), Err(Error::EmptyTitle)));
        assert!(matches!(
            Task::create(draft("   ", None)),
            Err(Error::EmptyTitle)
        ));
    }

    #[test]
    fn test_create_rejects_malformed_due_date() {
        let err = Task::create(draft("Test", Some("01/02/2026"))).unwrap_err();
        assert!(matches!(err, Error::InvalidDueDate(_)));
        assert!(err.is_validation());
    }

    #[test]
    fn test_blank_due_date_means_none() {
        let task = Task::create(draft("Test", Some("  "))).unwrap();
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_task_overdue() {
        let mut task = Task::create(draft("Test", Some("2020-01-01"))).unwrap();
        assert!(task.is_overdue());

        task.set_completed(true);
        assert!(!task.is_overdue());
    }

    #[test]
    fn test_future_due_date_is_not_overdue() {
        let task = Task::create(draft("Test", Some("2999-12-31"))).unwrap();
        assert!(!task.is_overdue());

        let undated = Task::create(draft("Test", None)).unwrap();
        assert!(!undated.is_overdue());
    }

    #[test]
    fn test_patch_clears_due_date_on_empty_string() {
        let mut task = Task::create(draft("Test", Some("2026-06-01"))).unwrap();
        task.apply(TaskPatch {
            due_date: Some(String::new()),
            ..TaskPatch::default()
        })
        .unwrap();
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_failed_patch_leaves_task_untouched() {
        let mut task = Task::create(draft("Keep me", Some("2026-06-01"))).unwrap();
        let before = task.clone();
        let err = task
            .apply(TaskPatch {
                title: Some("New title".to_string()),
                due_date: Some("not-a-date".to_string()),
                ..TaskPatch::default()
            })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDueDate(_)));
        assert_eq!(task, before);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let mut task = Task::create(draft("Buy Milk", None)).unwrap();
        task.description = "from the Corner shop".to_string();

        assert!(task.matches_keyword("milk"));
        assert!(task.matches_keyword("CORNER"));
        assert!(!task.matches_keyword("bread"));
    }

    #[test]
    fn test_status_filter() {
        assert_eq!(
            StatusFilter::parse("completed"),
            Some(StatusFilter::Completed)
        );
        assert_eq!(StatusFilter::parse("Active"), Some(StatusFilter::Active));
        assert_eq!(StatusFilter::parse(""), Some(StatusFilter::All));
        assert_eq!(StatusFilter::parse("bogus"), None);

        let active = Task::create(draft("a", None)).unwrap();
        let mut done = Task::create(draft("b", None)).unwrap();
        done.set_completed(true);

        assert!(StatusFilter::Active.accepts(&active));
        assert!(!StatusFilter::Active.accepts(&done));
        assert!(StatusFilter::Completed.accepts(&done));
        assert!(!StatusFilter::Completed.accepts(&active));
        assert!(StatusFilter::All.accepts(&active) && StatusFilter::All.accepts(&done));
    }

    #[test]
    fn test_serde_round_trip() {
        let raw = serde_json::json!({
            "id": "abcdef0123456789",
            "title": "Write report",
            "description": "quarterly numbers",
            "due_date": "2026-03-01",
            "completed": false,
            "created_at": "2026-01-02T03:04:05Z",
            "updated_at": "2026-01-02T03:04:05Z",
        });

        let task: Task = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&task).unwrap(), raw);
    }

    #[test]
    fn test_deserialize_rejects_missing_title() {
        let raw = serde_json::json!({
            "id": "abcdef0123456789",
            "created_at": "2026-01-02T03:04:05Z",
            "updated_at": "2026-01-02T03:04:05Z",
        });
        assert!(serde_json::from_value::<Task>(raw).is_err());
    }
}
