use serde::Serialize;

/// The eight offerings shown in the services grid; also the options of the
/// content-type selector in the request form.
pub const CONTENT_TYPES: &[&str] = &[
    "Blog Posts & Articles",
    "Social Media Content",
    "Email Campaigns",
    "Product Descriptions",
    "Website Copy",
    "Press Releases",
    "Video Scripts",
    "Ad Copy",
];

/// One lead-capture submission. `company` is the only optional field.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContentRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(rename = "contentType")]
    pub content_type: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Company,
    ContentType,
    Message,
}

impl ContentRequest {
    /// Replaces exactly one field, leaving the rest untouched.
    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Name => self.name = value,
            LeadField::Email => self.email = value,
            LeadField::Company => self.company = value,
            LeadField::ContentType => self.content_type = value,
            LeadField::Message => self.message = value,
        }
    }

    /// Mirrors the browser's `required` gate: every field except company
    /// must be non-empty before a submission can go out.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.content_type.is_empty()
            && !self.message.is_empty()
    }
}

/// What became of one submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx from the backend.
    Accepted,
    /// Non-2xx status.
    Rejected,
    /// The request never completed (network down, DNS, aborted).
    Unreachable,
    /// Preview mode: acknowledged locally without any network call.
    PreviewAck,
}

/// Maps an HTTP status code onto an outcome. Only the 2xx class counts as
/// accepted; no response body is consulted.
pub fn classify_status(status: u16) -> SubmitOutcome {
    if (200..300).contains(&status) {
        SubmitOutcome::Accepted
    } else {
        SubmitOutcome::Rejected
    }
}

/// Submission state machine for the form. `Submitting` blocks re-entry so a
/// double click cannot dispatch two concurrent requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitStatus {
    pub fn can_submit(&self) -> bool {
        !matches!(self, SubmitStatus::Submitting)
    }
}

/// Whether the form talks to the backend or acknowledges locally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Backend,
    Preview,
}

/// Applies an outcome to the record. Only a confirmed backend success clears
/// the fields; every other outcome keeps them so the visitor can retry
/// without re-typing.
pub fn settle(record: ContentRequest, outcome: SubmitOutcome) -> (ContentRequest, SubmitStatus) {
    match outcome {
        SubmitOutcome::Accepted => (ContentRequest::default(), SubmitStatus::Succeeded),
        SubmitOutcome::PreviewAck => (record, SubmitStatus::Succeeded),
        SubmitOutcome::Rejected | SubmitOutcome::Unreachable => (record, SubmitStatus::Failed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> ContentRequest {
        let mut record = ContentRequest::default();
        record.set(LeadField::Name, "Ada".to_string());
        record.set(LeadField::Email, "ada@x.com".to_string());
        record.set(LeadField::ContentType, "blog".to_string());
        record.set(LeadField::Message, "need 5 posts".to_string());
        record
    }

    #[test]
    fn field_updates_are_independent_and_last_write_wins() {
        let mut record = ContentRequest::default();
        record.set(LeadField::Name, "Ada".to_string());
        record.set(LeadField::Email, "ada@x.com".to_string());
        record.set(LeadField::Name, "Ada Lovelace".to_string());

        assert_eq!(record.name, "Ada Lovelace");
        assert_eq!(record.email, "ada@x.com");
        assert_eq!(record.company, "");
        assert_eq!(record.content_type, "");
        assert_eq!(record.message, "");
    }

    #[test]
    fn blank_required_field_makes_record_incomplete() {
        let complete = ada();
        assert!(complete.is_complete());

        for field in [
            LeadField::Name,
            LeadField::Email,
            LeadField::ContentType,
            LeadField::Message,
        ] {
            let mut record = ada();
            record.set(field, String::new());
            assert!(!record.is_complete(), "{field:?} should be required");
        }
    }

    #[test]
    fn company_is_optional() {
        let mut record = ada();
        record.set(LeadField::Company, String::new());
        assert!(record.is_complete());
    }

    #[test]
    fn wire_shape_uses_camel_cased_content_type_key() {
        let mut record = ada();
        record.set(LeadField::Company, "Analytical Engines Ltd".to_string());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["name"], "Ada");
        assert_eq!(value["email"], "ada@x.com");
        assert_eq!(value["company"], "Analytical Engines Ltd");
        assert_eq!(value["contentType"], "blog");
        assert_eq!(value["message"], "need 5 posts");
        assert_eq!(value.as_object().unwrap().len(), 5);
    }

    #[test]
    fn only_2xx_statuses_are_accepted() {
        assert_eq!(classify_status(200), SubmitOutcome::Accepted);
        assert_eq!(classify_status(201), SubmitOutcome::Accepted);
        assert_eq!(classify_status(299), SubmitOutcome::Accepted);
        assert_eq!(classify_status(301), SubmitOutcome::Rejected);
        assert_eq!(classify_status(400), SubmitOutcome::Rejected);
        assert_eq!(classify_status(500), SubmitOutcome::Rejected);
        assert_eq!(classify_status(503), SubmitOutcome::Rejected);
    }

    #[test]
    fn accepted_submission_clears_the_record() {
        let (record, status) = settle(ada(), classify_status(201));
        assert_eq!(record, ContentRequest::default());
        assert_eq!(status, SubmitStatus::Succeeded);
    }

    #[test]
    fn rejected_submission_keeps_the_record_for_retry() {
        let (record, status) = settle(ada(), classify_status(503));
        assert_eq!(record, ada());
        assert_eq!(status, SubmitStatus::Failed);
    }

    #[test]
    fn network_failure_keeps_the_record_for_retry() {
        let (record, status) = settle(ada(), SubmitOutcome::Unreachable);
        assert_eq!(record, ada());
        assert_eq!(status, SubmitStatus::Failed);
    }

    #[test]
    fn preview_acknowledgment_never_clears() {
        let (record, status) = settle(ada(), SubmitOutcome::PreviewAck);
        assert_eq!(record, ada());
        assert_eq!(status, SubmitStatus::Succeeded);
    }

    #[test]
    fn submitting_blocks_reentry() {
        assert!(SubmitStatus::Idle.can_submit());
        assert!(SubmitStatus::Succeeded.can_submit());
        assert!(SubmitStatus::Failed.can_submit());
        assert!(!SubmitStatus::Submitting.can_submit());
    }
}
