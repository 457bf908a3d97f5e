use serde::{Deserialize, Serialize};

/// One roster entry. Field names stay camelCase on disk to match the
/// `students.json` format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub name: String,
    pub roll_no: String,
    pub dept: String,
    pub dob: String,
}

/// Partial update; absent fields are left untouched by the merge.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    pub name: Option<String>,
    pub roll_no: Option<String>,
    pub dept: Option<String>,
    pub dob: Option<String>,
}

impl Student {
    pub fn apply(&mut self, patch: StudentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(roll_no) = patch.roll_no {
            self.roll_no = roll_no;
        }
        if let Some(dept) = patch.dept {
            self.dept = dept;
        }
        if let Some(dob) = patch.dob {
            self.dob = dob;
        }
    }
}
