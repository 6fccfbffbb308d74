// src/view_models.rs

#[derive(Clone, Debug)]
pub struct UnitProgress {
    pub idx: usize,        // 0-based index into course.units
    pub completed: usize,
    pub total: usize,
    pub percent: u32,
    pub complete: bool,
}

impl UnitProgress {
    pub fn summary(&self, pyq_count: usize) -> String {
        format!("{} topics • {} key questions", self.total, pyq_count)
    }
}

#[derive(Clone, Debug)]
pub struct OverallProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: u32,
}

impl OverallProgress {
    pub fn label(&self) -> String {
        format!("{} / {} topics completed", self.completed, self.total)
    }
}
