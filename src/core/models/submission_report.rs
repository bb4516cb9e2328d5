use crate::core::models::UploadResult;

#[derive(Debug)]
pub struct ImageUploadOutcome {
    /// Position of the image in the session, in capture order.
    pub position: usize,
    pub result: UploadResult,
}

impl ImageUploadOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Default)]
pub struct SubmissionReport {
    pub outcomes: Vec<ImageUploadOutcome>,
}

impl SubmissionReport {
    pub fn from_outcomes(outcomes: Vec<ImageUploadOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn uploaded_urls(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_deref().ok())
            .collect()
    }
}
