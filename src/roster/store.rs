use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;

use crate::roster::student::{Student, StudentPatch};

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("error reading or writing the roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("error parsing roster JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no student with roll number {0}")]
    NotFound(String),
}

/// File-backed roster. Mutations hold `write_lock` across the whole
/// read-modify-write cycle, so in-process callers cannot lose updates to
/// each other.
pub struct RosterStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl RosterStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<Student>, RosterError> {
        let data = fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&data)?)
    }

    async fn save(&self, students: &[Student]) -> Result<(), RosterError> {
        // whole-file rewrite, pretty-printed with 2-space indentation
        let data = serde_json::to_string_pretty(students)?;
        fs::write(&self.path, data).await?;
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Student>, RosterError> {
        self.load().await
    }

    pub async fn add(&self, student: Student) -> Result<(), RosterError> {
        let _guard = self.write_lock.lock().await;
        let mut students = self.load().await?;
        students.push(student);
        self.save(&students).await?;
        info!("student added");
        Ok(())
    }

    /// Shallow-merge `patch` into the first student whose roll number
    /// matches; returns the merged record.
    pub async fn update(
        &self,
        roll_no: &str,
        patch: StudentPatch,
    ) -> Result<Student, RosterError> {
        let _guard = self.write_lock.lock().await;
        let mut students = self.load().await?;

        let student = students
            .iter_mut()
            .find(|s| s.roll_no == roll_no)
            .ok_or_else(|| RosterError::NotFound(roll_no.to_string()))?;
        student.apply(patch);
        let updated = student.clone();

        self.save(&students).await?;
        info!("student {} updated", roll_no);
        Ok(updated)
    }

    /// Remove every student whose roll number matches, keeping the rest in
    /// their original order; returns how many were removed.
    pub async fn remove(&self, roll_no: &str) -> Result<usize, RosterError> {
        let _guard = self.write_lock.lock().await;
        let mut students = self.load().await?;

        let before = students.len();
        students.retain(|s| s.roll_no != roll_no);
        let removed = before - students.len();
        if removed == 0 {
            return Err(RosterError::NotFound(roll_no.to_string()));
        }

        self.save(&students).await?;
        info!("removed {} student(s) with roll number {}", removed, roll_no);
        Ok(removed)
    }
}
