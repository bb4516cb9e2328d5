mod submission_session;

pub use submission_session::SubmissionSession;
