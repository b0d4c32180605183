use serde::{Deserialize, Deserializer, Serialize};

/// Number of task slots on every day
pub const TASK_SLOTS: usize = 3;

/// Shown in place of an empty task or empty notes
pub const PLACEHOLDER: &str = "—";

/// Stored content of a single day: three short tasks and free-form notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    #[serde(default, deserialize_with = "deserialize_tasks")]
    pub tasks: [String; TASK_SLOTS],
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub notes: String,
}

impl DayRecord {
    pub fn new<I, T>(tasks: I, notes: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            tasks: fill_slots(tasks.into_iter().map(Into::into)),
            notes: notes.into(),
        }
    }

    /// Copy with surrounding whitespace stripped from every task.
    /// Notes are kept verbatim.
    pub fn normalized(&self) -> Self {
        Self {
            tasks: self.tasks.clone().map(|task| task.trim().to_string()),
            notes: self.notes.clone(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.tasks.iter().all(|task| task.trim().is_empty()) && self.notes.trim().is_empty()
    }

    /// Task text for display, [`PLACEHOLDER`] when the slot is empty or out of range
    pub fn task_label(&self, slot: usize) -> &str {
        match self.tasks.get(slot) {
            Some(task) if !task.is_empty() => task.as_str(),
            _ => PLACEHOLDER,
        }
    }

    pub fn notes_label(&self) -> &str {
        if self.notes.is_empty() {
            PLACEHOLDER
        } else {
            &self.notes
        }
    }
}

fn fill_slots(tasks: impl Iterator<Item = String>) -> [String; TASK_SLOTS] {
    let mut slots: [String; TASK_SLOTS] = Default::default();
    for (slot, task) in slots.iter_mut().zip(tasks) {
        *slot = task;
    }
    slots
}

// Documents written by older versions may carry fewer than three tasks,
// extra entries, or nulls.
fn deserialize_tasks<'de, D>(deserializer: D) -> Result<[String; TASK_SLOTS], D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(fill_slots(
        raw.unwrap_or_default()
            .into_iter()
            .map(Option::unwrap_or_default),
    ))
}

fn deserialize_nullable<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
