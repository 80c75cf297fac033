// src/domain/attorney/entity.rs
use crate::domain::attorney::value_objects::{
    FirmEmail, LinkedInUrl, PersonName, PhoneNumber, Position, YearsOfExperience,
};
use crate::domain::errors::DomainResult;
use crate::domain::shared::{
    DocumentId, Slug, bounded_text, normalize_list, optional_text, parse_ids,
};
use chrono::{DateTime, Utc};

pub const BIOGRAPHY_MAX: usize = 2000;
pub const SHORT_DESCRIPTION_MAX: usize = 200;

/// Editable attorney fields in their raw, unvalidated form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttorneyProfile {
    pub name: String,
    pub position: String,
    pub specializations: Vec<String>,
    pub service_ids: Vec<String>,
    pub years_of_experience: i64,
    pub education: Vec<String>,
    pub languages: Vec<String>,
    pub email: String,
    pub phone: Option<String>,
    pub biography: String,
    pub achievements: Vec<String>,
    pub notable_cases: Vec<String>,
    pub image_url: Option<String>,
    pub linkedin: Option<String>,
    pub is_partner: bool,
    pub short_description: String,
    pub is_active: bool,
}

/// Partial update; `None` leaves a field untouched. Optional contact fields
/// use `Some(None)` to clear.
#[derive(Debug, Clone, Default)]
pub struct AttorneyPatch {
    pub name: Option<String>,
    pub position: Option<String>,
    pub specializations: Option<Vec<String>>,
    pub service_ids: Option<Vec<String>>,
    pub years_of_experience: Option<i64>,
    pub education: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub biography: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub notable_cases: Option<Vec<String>>,
    pub image_url: Option<Option<String>>,
    pub linkedin: Option<Option<String>>,
    pub is_partner: Option<bool>,
    pub short_description: Option<String>,
    pub is_active: Option<bool>,
}

impl AttorneyPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.position.is_none()
            && self.specializations.is_none()
            && self.service_ids.is_none()
            && self.years_of_experience.is_none()
            && self.education.is_none()
            && self.languages.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.biography.is_none()
            && self.achievements.is_none()
            && self.notable_cases.is_none()
            && self.image_url.is_none()
            && self.linkedin.is_none()
            && self.is_partner.is_none()
            && self.short_description.is_none()
            && self.is_active.is_none()
    }

    fn apply(self, mut profile: AttorneyProfile) -> AttorneyProfile {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if let Some(value) = self.$field { profile.$field = value; })*
            };
        }
        take!(
            name,
            position,
            specializations,
            service_ids,
            years_of_experience,
            education,
            languages,
            email,
            phone,
            biography,
            achievements,
            notable_cases,
            image_url,
            linkedin,
            is_partner,
            short_description,
            is_active
        );
        profile
    }
}

/// Team member shown on the public site. Value-style: every change goes
/// through [`Attorney::update`] and yields a freshly validated instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Attorney {
    id: DocumentId,
    slug: Option<Slug>,
    name: PersonName,
    position: Position,
    specializations: Vec<String>,
    service_ids: Vec<DocumentId>,
    years_of_experience: YearsOfExperience,
    education: Vec<String>,
    languages: Vec<String>,
    email: FirmEmail,
    phone: Option<PhoneNumber>,
    biography: String,
    achievements: Vec<String>,
    notable_cases: Vec<String>,
    image_url: Option<String>,
    linkedin: Option<LinkedInUrl>,
    is_partner: bool,
    short_description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Attorney {
    pub fn new(
        id: DocumentId,
        profile: AttorneyProfile,
        slug: Option<Slug>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let AttorneyProfile {
            name,
            position,
            specializations,
            service_ids,
            years_of_experience,
            education,
            languages,
            email,
            phone,
            biography,
            achievements,
            notable_cases,
            image_url,
            linkedin,
            is_partner,
            short_description,
            is_active,
        } = profile;

        Ok(Self {
            id,
            slug,
            name: PersonName::new(name)?,
            position: Position::new(position)?,
            specializations: normalize_list(specializations),
            service_ids: parse_ids(service_ids)?,
            years_of_experience: YearsOfExperience::new(years_of_experience)?,
            education: education
                .into_iter()
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty())
                .collect(),
            languages: normalize_list(languages),
            email: FirmEmail::new(email)?,
            phone: optional_text(phone).map(PhoneNumber::new).transpose()?,
            biography: bounded_text("biography", biography, BIOGRAPHY_MAX)?,
            achievements: normalize_list(achievements),
            notable_cases: normalize_list(notable_cases),
            image_url: optional_text(image_url),
            linkedin: optional_text(linkedin).map(LinkedInUrl::new).transpose()?,
            is_partner,
            short_description: bounded_text(
                "short description",
                short_description,
                SHORT_DESCRIPTION_MAX,
            )?,
            is_active,
            created_at,
            updated_at,
        })
    }

    /// Apply a partial update, returning a new validated attorney. `self` is
    /// left untouched, so a failed update never leaves a half-edited value.
    pub fn update(&self, patch: AttorneyPatch, now: DateTime<Utc>) -> DomainResult<Self> {
        let profile = patch.apply(self.to_profile());
        Self::new(
            self.id.clone(),
            profile,
            self.slug.clone(),
            self.created_at,
            now,
        )
    }

    pub fn with_slug(&self, slug: Slug, now: DateTime<Utc>) -> Self {
        Self {
            slug: Some(slug),
            updated_at: now,
            ..self.clone()
        }
    }

    pub fn with_active(&self, is_active: bool, now: DateTime<Utc>) -> Self {
        Self {
            is_active,
            updated_at: now,
            ..self.clone()
        }
    }

    pub fn to_profile(&self) -> AttorneyProfile {
        AttorneyProfile {
            name: self.name.as_str().to_string(),
            position: self.position.as_str().to_string(),
            specializations: self.specializations.clone(),
            service_ids: self.service_ids.iter().map(|id| id.to_string()).collect(),
            years_of_experience: i64::from(self.years_of_experience.get()),
            education: self.education.clone(),
            languages: self.languages.clone(),
            email: self.email.as_str().to_string(),
            phone: self.phone.as_ref().map(|p| p.as_str().to_string()),
            biography: self.biography.clone(),
            achievements: self.achievements.clone(),
            notable_cases: self.notable_cases.clone(),
            image_url: self.image_url.clone(),
            linkedin: self.linkedin.as_ref().map(|l| l.as_str().to_string()),
            is_partner: self.is_partner,
            short_description: self.short_description.clone(),
            is_active: self.is_active,
        }
    }

    pub fn serves(&self, service_id: &DocumentId) -> bool {
        self.service_ids.contains(service_id)
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn slug(&self) -> Option<&Slug> {
        self.slug.as_ref()
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn specializations(&self) -> &[String] {
        &self.specializations
    }

    pub fn service_ids(&self) -> &[DocumentId] {
        &self.service_ids
    }

    pub fn years_of_experience(&self) -> u8 {
        self.years_of_experience.get()
    }

    pub fn education(&self) -> &[String] {
        &self.education
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn email(&self) -> &FirmEmail {
        &self.email
    }

    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    pub fn biography(&self) -> &str {
        &self.biography
    }

    pub fn achievements(&self) -> &[String] {
        &self.achievements
    }

    pub fn notable_cases(&self) -> &[String] {
        &self.notable_cases
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn linkedin(&self) -> Option<&LinkedInUrl> {
        self.linkedin.as_ref()
    }

    pub fn is_partner(&self) -> bool {
        self.is_partner
    }

    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn id() -> DocumentId {
        DocumentId::new("65a1f0c2e4b0a1b2c3d4e5f6").unwrap()
    }

    fn profile() -> AttorneyProfile {
        AttorneyProfile {
            name: "María Vásquez".into(),
            position: "Socia Directora".into(),
            specializations: vec!["Derecho Fiscal".into(), "derecho fiscal".into()],
            service_ids: vec!["65a1f0c2e4b0a1b2c3d4e5f7".into()],
            years_of_experience: 15,
            education: vec!["UNAM".into()],
            languages: vec!["Español".into(), "Inglés".into()],
            email: "maria@altumlegal.mx".into(),
            phone: Some("+52 55 1234 5678".into()),
            biography: "Abogada fiscalista.".into(),
            short_description: "Fiscal".into(),
            is_active: true,
            ..AttorneyProfile::default()
        }
    }

    #[test]
    fn new_normalises_lists() {
        let now = Utc::now();
        let attorney = Attorney::new(id(), profile(), None, now, now).unwrap();
        assert_eq!(attorney.specializations(), ["Derecho Fiscal".to_string()]);
        assert_eq!(attorney.service_ids().len(), 1);
        assert_eq!(attorney.email().as_str(), "maria@altumlegal.mx");
    }

    #[test]
    fn foreign_email_is_rejected() {
        let now = Utc::now();
        let mut input = profile();
        input.email = "maria@gmail.com".into();
        assert!(Attorney::new(id(), input, None, now, now).is_err());
    }

    #[test]
    fn length_bounds_are_enforced() {
        let now = Utc::now();
        let mut long_bio = profile();
        long_bio.biography = "a".repeat(BIOGRAPHY_MAX + 1);
        assert!(Attorney::new(id(), long_bio, None, now, now).is_err());

        let mut long_summary = profile();
        long_summary.short_description = "a".repeat(SHORT_DESCRIPTION_MAX + 1);
        assert!(Attorney::new(id(), long_summary, None, now, now).is_err());

        let mut short_name = profile();
        short_name.name = "M".into();
        assert!(Attorney::new(id(), short_name, None, now, now).is_err());
    }

    #[test]
    fn update_returns_new_instance_and_keeps_original() {
        let now = Utc::now();
        let original = Attorney::new(id(), profile(), None, now, now).unwrap();
        let later = now + Duration::minutes(5);
        let patch = AttorneyPatch {
            position: Some("Socia".into()),
            years_of_experience: Some(16),
            phone: Some(None),
            ..AttorneyPatch::default()
        };
        let updated = original.update(patch, later).unwrap();

        assert_eq!(updated.position().as_str(), "Socia");
        assert_eq!(updated.years_of_experience(), 16);
        assert!(updated.phone().is_none());
        assert_eq!(updated.updated_at(), later);
        assert_eq!(updated.created_at(), now);
        assert_eq!(original.position().as_str(), "Socia Directora");
    }

    #[test]
    fn invalid_update_is_rejected() {
        let now = Utc::now();
        let original = Attorney::new(id(), profile(), None, now, now).unwrap();
        let patch = AttorneyPatch {
            years_of_experience: Some(99),
            ..AttorneyPatch::default()
        };
        assert!(original.update(patch, now).is_err());
    }

    #[test]
    fn soft_delete_flips_flag() {
        let now = Utc::now();
        let attorney = Attorney::new(id(), profile(), None, now, now).unwrap();
        let inactive = attorney.with_active(false, now);
        assert!(!inactive.is_active());
        assert!(attorney.is_active());
    }
}
