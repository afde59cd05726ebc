use chrono::NaiveDate;
use thiserror::Error;

pub const CONTACT_SUBMIT_DELAY_MS: u64 = 2000;
pub const CONTACT_CONFIRMATION: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }
}

/// Contact form with a simulated send: nothing leaves the page.
#[derive(Debug, Clone, Default)]
pub struct ContactState {
    pub form: ContactForm,
    pub focused: Option<ContactField>,
    submitting: bool,
    confirmation: Option<&'static str>,
}

impl ContactState {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn confirmation(&self) -> Option<&'static str> {
        self.confirmation
    }

    pub fn edit(&mut self, field: ContactField, value: String) {
        *self.form.field_mut(field) = value;
        self.confirmation = None;
    }

    /// Returns `false` when a send is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.confirmation = None;
        true
    }

    pub fn finish_submit(&mut self) {
        if !self.submitting {
            return;
        }
        log::debug!("contact message from {} accepted", self.form.email);
        self.submitting = false;
        self.form = ContactForm::default();
        self.confirmation = Some(CONTACT_CONFIRMATION);
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CertificationError {
    #[error("Certification title is required")]
    MissingTitle,
    #[error("Issuing organization is required")]
    MissingIssuer,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificationDraft {
    pub title: String,
    pub issuer: String,
    /// `YYYY-MM-DD` as produced by a date input, or empty.
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certification {
    pub id: u64,
    pub title: String,
    pub issuer: String,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl Certification {
    pub fn display_date(&self) -> Option<String> {
        self.date.map(|d| d.format("%b %e, %Y").to_string())
    }
}

/// Session-only list; certifications are not persisted.
#[derive(Debug, Clone, Default)]
pub struct CertificationList {
    items: Vec<Certification>,
    next_id: u64,
}

impl CertificationList {
    pub fn items(&self) -> &[Certification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add(&mut self, draft: &CertificationDraft) -> Result<&Certification, CertificationError> {
        let title = draft.title.trim();
        let issuer = draft.issuer.trim();
        if title.is_empty() {
            return Err(CertificationError::MissingTitle);
        }
        if issuer.is_empty() {
            return Err(CertificationError::MissingIssuer);
        }
        let date = match draft.date.trim() {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| CertificationError::InvalidDate(raw.to_string()))?,
            ),
        };
        let description = Some(draft.description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        self.next_id += 1;
        self.items.push(Certification {
            id: self.next_id,
            title: title.to_string(),
            issuer: issuer.to_string(),
            date,
            description,
        });
        Ok(&self.items[self.items.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, issuer: &str, date: &str) -> CertificationDraft {
        CertificationDraft {
            title: title.to_string(),
            issuer: issuer.to_string(),
            date: date.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_contact_submit_cycle() {
        let mut state = ContactState::default();
        state.edit(ContactField::Name, "Ada".to_string());
        state.edit(ContactField::Email, "ada@example.com".to_string());
        state.edit(ContactField::Message, "Hello".to_string());
        assert_eq!(state.form.field(ContactField::Email), "ada@example.com");

        assert!(state.begin_submit());
        assert!(state.is_submitting());
        // double click while sending is ignored
        assert!(!state.begin_submit());

        state.finish_submit();
        assert!(!state.is_submitting());
        assert_eq!(state.form, ContactForm::default());
        assert_eq!(state.confirmation(), Some(CONTACT_CONFIRMATION));

        // typing again hides the confirmation
        state.edit(ContactField::Name, "B".to_string());
        assert_eq!(state.confirmation(), None);
    }

    #[test]
    fn test_finish_without_begin_is_ignored() {
        let mut state = ContactState::default();
        state.edit(ContactField::Message, "draft".to_string());
        state.finish_submit();
        assert_eq!(state.form.message, "draft");
        assert_eq!(state.confirmation(), None);
    }

    #[test]
    fn test_add_certification() {
        let mut list = CertificationList::default();
        assert!(list.is_empty());
        let cert = list
            .add(&CertificationDraft {
                description: "  Containers  ".to_string(),
                ..draft(" Docker Foundations ", "Docker", "2024-03-05")
            })
            .unwrap();
        assert_eq!(cert.title, "Docker Foundations");
        assert_eq!(cert.description.as_deref(), Some("Containers"));
        assert_eq!(cert.display_date().as_deref(), Some("Mar  5, 2024"));

        let second = list.add(&draft("AWS Cloud Practitioner", "AWS", "")).unwrap();
        assert_eq!(second.date, None);
        assert_eq!(second.description, None);

        let ids: Vec<_> = list.items().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_certification_requires_title_and_issuer() {
        let mut list = CertificationList::default();
        assert_eq!(
            list.add(&draft("   ", "AWS", "")),
            Err(CertificationError::MissingTitle)
        );
        assert_eq!(
            list.add(&draft("Linux", "", "")),
            Err(CertificationError::MissingIssuer)
        );
        assert_eq!(
            list.add(&draft("Linux", "LF", "05/03/2024")),
            Err(CertificationError::InvalidDate("05/03/2024".to_string()))
        );
        assert!(list.is_empty());
    }
}
