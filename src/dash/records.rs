/// Weekly test counts as published by the scraper. Unknown fields are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WeekRecord {
    /// Students who tested positive.
    pub students_positive: u64,
    /// Students who tested negative.
    pub students_negative: u64,
    /// Employees who tested positive.
    pub employees_positive: u64,
    /// Employees who tested negative.
    pub employees_negative: u64,
}

/// Which part of the campus population a figure describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Population {
    /// Students and employees together.
    Overall,
    /// Students only.
    Students,
    /// Employees only.
    Employees,
}

impl WeekRecord {
    /// Positive results for `pop`.
    pub fn positive(&self, pop: Population) -> u64 {
        match pop {
            Population::Overall => self.students_positive.saturating_add(self.employees_positive),
            Population::Students => self.students_positive,
            Population::Employees => self.employees_positive,
        }
    }

    /// Tests processed for `pop`.
    pub fn tested(&self, pop: Population) -> u64 {
        match pop {
            Population::Overall => {
                self.tested(Population::Students)
                    .saturating_add(self.tested(Population::Employees))
            }
            Population::Students => self.students_positive.saturating_add(self.students_negative),
            Population::Employees => {
                self.employees_positive.saturating_add(self.employees_negative)
            }
        }
    }

    /// Fraction of tests that came back positive, or `None` if nobody was tested.
    pub fn positivity(&self, pop: Population) -> Option<f64> {
        let tested = self.tested(pop);
        if tested == 0 {
            return None;
        }
        Some(self.positive(pop) as f64 / tested as f64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dash/records.rs"]
mod tests;
