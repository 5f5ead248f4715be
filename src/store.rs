use anyhow::{Result, Context};
use log::debug;
use std::fs;
use std::path::PathBuf;

use crate::task::{Priority, Task};

pub struct Store {
    pub path: PathBuf,
}

impl Store {
    pub fn new(work_dir: PathBuf) -> Self {
        Self {
            path: work_dir.join("tasks.json"),
        }
    }

    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, content)?;
        debug!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let tasks: Vec<Task> = serde_json::from_str(&content)
            .with_context(|| format!("Corrupted task file: {}", self.path.display()))?;
        debug!("Loaded {} tasks from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    pub fn add(&self, title: &str, priority: Priority) -> Result<()> {
        let mut tasks = self.load()?;
        let id = next_id(&tasks)?;
        debug!("Assigned id {} to new task", id);
        tasks.push(Task::new(id, title.to_string(), priority));
        self.save(&tasks)
    }

    pub fn list(&self, include_done: bool) -> Result<Vec<Task>> {
        let tasks = self.load()?;
        if include_done {
            return Ok(tasks);
        }
        Ok(tasks.into_iter().filter(|t| !t.done).collect())
    }

    pub fn complete(&self, id: u64) -> Result<bool> {
        let mut tasks = self.load()?;
        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.done = true;
        self.save(&tasks)?;
        Ok(true)
    }

    pub fn remove(&self, id: u64) -> Result<bool> {
        let mut tasks = self.load()?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Ok(false);
        }
        self.save(&tasks)?;
        Ok(true)
    }
}

fn next_id(tasks: &[Task]) -> Result<u64> {
    let max = tasks.iter().map(|t| t.id).max().unwrap_or(0);
    max.checked_add(1).context("Task ids exhausted")
}
