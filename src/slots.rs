use std::collections::HashMap;

/// Free time labels per date label.
///
/// Dates that were never touched report the default template. Lists keep
/// insertion order; a released slot goes to the back.
#[derive(Debug, Clone)]
pub struct SlotCalendar {
    template: Vec<String>,
    free: HashMap<String, Vec<String>>,
}

impl SlotCalendar {
    pub fn new(template: Vec<String>) -> Self {
        Self {
            template,
            free: HashMap::new(),
        }
    }

    /// Copy of the free list for `date`. Unknown dates are not materialized.
    pub fn available(&self, date: &str) -> Vec<String> {
        self.free
            .get(date)
            .cloned()
            .unwrap_or_else(|| self.template.clone())
    }

    pub fn is_free(&self, date: &str, time: &str) -> bool {
        match self.free.get(date) {
            Some(list) => list.iter().any(|t| t == time),
            None => self.template.iter().any(|t| t == time),
        }
    }

    /// Materialize `date` from the template if it has never been seen.
    pub fn seed(&mut self, date: &str) -> &mut Vec<String> {
        let template = &self.template;
        self.free
            .entry(date.to_string())
            .or_insert_with(|| template.clone())
    }

    /// Remove the first `time` match from `date`'s list. Returns false if it was not free.
    pub fn take(&mut self, date: &str, time: &str) -> bool {
        let list = self.seed(date);
        match list.iter().position(|t| t == time) {
            Some(idx) => {
                list.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Append `time` back onto `date`'s list (no dedup, no sort).
    pub fn release(&mut self, date: &str, time: &str) {
        self.free
            .entry(date.to_string())
            .or_default()
            .push(time.to_string());
    }

    #[cfg(test)]
    pub fn is_known(&self, date: &str) -> bool {
        self.free.contains_key(date)
    }
}
