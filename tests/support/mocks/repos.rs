// tests/support/mocks/repos.rs
//! In-memory stand-ins for the MongoDB repositories, with the same unique
//! keys and orderings.
use altum_legal::domain::{
    attorney::{
        Attorney, AttorneyFilter, AttorneyRepository, StoredAttorney, value_objects::FirmEmail,
    },
    blog::{BlogPost, BlogPostFilter, BlogPostRepository},
    category::{Category, CategoryRepository},
    errors::{DomainError, DomainResult},
    legal::{LegalContent, LegalContentRepository},
    service::{Service, ServiceRepository},
    shared::{DocumentId, PageRequest, Paged, Slug},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use std::sync::Mutex;

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}

fn page_of<T: Clone>(items: Vec<T>, page: PageRequest) -> Paged<T> {
    let total = items.len() as u64;
    let slice = items
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect();
    Paged::new(slice, total, page)
}

fn missing(entity: &str, id: &DocumentId) -> DomainError {
    DomainError::NotFound(format!("{entity} {id}"))
}

// ---------------------------------------------------------------- attorneys

#[derive(Default)]
pub struct MemoryAttorneyRepo {
    items: Mutex<Vec<Attorney>>,
    unreadable: Vec<(String, String)>,
}

impl MemoryAttorneyRepo {
    pub fn with(items: Vec<Attorney>) -> Self {
        Self {
            items: Mutex::new(items),
            unreadable: Vec::new(),
        }
    }

    /// Adds a stored record that no longer decodes. Listings never see it;
    /// `scan` reports it as invalid.
    pub fn with_unreadable(mut self, id: &str, name: &str) -> Self {
        self.unreadable.push((id.to_string(), name.to_string()));
        self
    }

    pub fn snapshot(&self) -> Vec<Attorney> {
        self.items.lock().unwrap().clone()
    }

    fn sorted(&self, keep: impl Fn(&Attorney) -> bool) -> Vec<Attorney> {
        let mut items: Vec<Attorney> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|a| keep(*a))
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            b.is_partner()
                .cmp(&a.is_partner())
                .then_with(|| a.name().as_str().cmp(b.name().as_str()))
                .then_with(|| a.id().as_str().cmp(b.id().as_str()))
        });
        items
    }

    fn check_unique(items: &[Attorney], attorney: &Attorney) -> DomainResult<()> {
        let clash = items.iter().any(|other| {
            other.id() != attorney.id()
                && (other
                    .email()
                    .as_str()
                    .eq_ignore_ascii_case(attorney.email().as_str())
                    || (attorney.slug().is_some() && other.slug() == attorney.slug()))
        });
        if clash {
            return Err(DomainError::Conflict("attorney already exists".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl AttorneyRepository for MemoryAttorneyRepo {
    async fn find_by_id(&self, id: &DocumentId) -> DomainResult<Option<Attorney>> {
        Ok(self.sorted(|a| a.id() == id).into_iter().next())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Attorney>> {
        Ok(self.sorted(|a| a.slug() == Some(slug)).into_iter().next())
    }

    async fn find_by_email(&self, email: &FirmEmail) -> DomainResult<Option<Attorney>> {
        Ok(self
            .sorted(|a| a.email().as_str().eq_ignore_ascii_case(email.as_str()))
            .into_iter()
            .next())
    }

    async fn find_all(
        &self,
        filter: &AttorneyFilter,
        page: PageRequest,
    ) -> DomainResult<Paged<Attorney>> {
        let items = self.sorted(|a| {
            filter.active.is_none_or(|v| a.is_active() == v)
                && filter.partner.is_none_or(|v| a.is_partner() == v)
                && filter
                    .search
                    .as_deref()
                    .filter(|s| !s.trim().is_empty())
                    .is_none_or(|s| {
                        contains_ci(a.name().as_str(), s)
                            || contains_ci(a.position().as_str(), s)
                            || a.specializations().iter().any(|sp| contains_ci(sp, s))
                    })
        });
        Ok(page_of(items, page))
    }

    async fn find_active(&self) -> DomainResult<Vec<Attorney>> {
        Ok(self.sorted(Attorney::is_active))
    }

    async fn find_partners(&self) -> DomainResult<Vec<Attorney>> {
        Ok(self.sorted(|a| a.is_active() && a.is_partner()))
    }

    async fn find_by_specialization(&self, specialization: &str) -> DomainResult<Vec<Attorney>> {
        Ok(self.sorted(|a| {
            a.is_active()
                && a.specializations()
                    .iter()
                    .any(|s| contains_ci(s, specialization))
        }))
    }

    async fn find_by_service(&self, service_id: &DocumentId) -> DomainResult<Vec<Attorney>> {
        Ok(self.sorted(|a| a.is_active() && a.serves(service_id)))
    }

    async fn scan(&self, page: PageRequest) -> DomainResult<Paged<StoredAttorney>> {
        let mut records: Vec<StoredAttorney> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .cloned()
            .map(StoredAttorney::Valid)
            .collect();
        records.extend(self.unreadable.iter().map(|(id, name)| StoredAttorney::Invalid {
            id: id.clone(),
            name: name.clone(),
            reason: "years of experience must be between 0 and 60".into(),
        }));
        Ok(page_of(records, page))
    }

    async fn insert(&self, attorney: &Attorney) -> DomainResult<()> {
        let mut items = self.items.lock().unwrap();
        Self::check_unique(&items, attorney)?;
        items.push(attorney.clone());
        Ok(())
    }

    async fn update(&self, attorney: &Attorney) -> DomainResult<()> {
        let mut items = self.items.lock().unwrap();
        Self::check_unique(&items, attorney)?;
        let slot = items
            .iter_mut()
            .find(|a| a.id() == attorney.id())
            .ok_or_else(|| missing("attorney", attorney.id()))?;
        *slot = attorney.clone();
        Ok(())
    }

    async fn delete(&self, id: &DocumentId) -> DomainResult<()> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|a| a.id() != id);
        if items.len() == before {
            return Err(missing("attorney", id));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------- blog posts

#[derive(Default)]
pub struct MemoryBlogPostRepo {
    items: Mutex<Vec<BlogPost>>,
}

impl MemoryBlogPostRepo {
    pub fn with(items: Vec<BlogPost>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    pub fn snapshot(&self) -> Vec<BlogPost> {
        self.items.lock().unwrap().clone()
    }

    fn sorted(&self, keep: impl Fn(&BlogPost) -> bool) -> Vec<BlogPost> {
        let mut items: Vec<BlogPost> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|p| keep(*p))
            .cloned()
            .collect();
        items.sort_by_key(|p| (Reverse(p.published_at), Reverse(p.created_at)));
        items
    }

    fn matches(post: &BlogPost, filter: &BlogPostFilter) -> bool {
        filter.status.is_none_or(|s| post.status == s)
            && filter
                .category_id
                .as_ref()
                .is_none_or(|c| post.category_id.as_ref() == Some(c))
            && filter.author_id.as_ref().is_none_or(|a| &post.author_id == a)
            && filter
                .tag
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .is_none_or(|t| post.tags.iter().any(|tag| tag == &t.to_lowercase()))
            && filter
                .search
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .is_none_or(|s| {
                    contains_ci(post.title.as_str(), s)
                        || contains_ci(&post.excerpt, s)
                        || post.tags.iter().any(|t| contains_ci(t, s))
                })
            && filter
                .visible_at
                .is_none_or(|now| post.is_publicly_visible(now))
    }

    fn check_unique(items: &[BlogPost], post: &BlogPost) -> DomainResult<()> {
        if items.iter().any(|p| p.id != post.id && p.slug == post.slug) {
            return Err(DomainError::Conflict("blog post already exists".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl BlogPostRepository for MemoryBlogPostRepo {
    async fn find_by_id(&self, id: &DocumentId) -> DomainResult<Option<BlogPost>> {
        Ok(self.sorted(|p| &p.id == id).into_iter().next())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<BlogPost>> {
        Ok(self.sorted(|p| &p.slug == slug).into_iter().next())
    }

    async fn find_all(
        &self,
        filter: &BlogPostFilter,
        page: PageRequest,
    ) -> DomainResult<Paged<BlogPost>> {
        Ok(page_of(self.sorted(|p| Self::matches(p, filter)), page))
    }

    async fn find_related(
        &self,
        post: &BlogPost,
        now: DateTime<Utc>,
        limit: u32,
    ) -> DomainResult<Vec<BlogPost>> {
        let related = self.sorted(|p| {
            p.id != post.id
                && p.is_publicly_visible(now)
                && ((post.category_id.is_some() && p.category_id == post.category_id)
                    || p.tags.iter().any(|t| post.tags.contains(t)))
        });
        Ok(related.into_iter().take(limit as usize).collect())
    }

    async fn insert(&self, post: &BlogPost) -> DomainResult<()> {
        let mut items = self.items.lock().unwrap();
        Self::check_unique(&items, post)?;
        items.push(post.clone());
        Ok(())
    }

    async fn update(&self, post: &BlogPost) -> DomainResult<()> {
        let mut items = self.items.lock().unwrap();
        Self::check_unique(&items, post)?;
        let slot = items
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or_else(|| missing("blog post", &post.id))?;
        *slot = post.clone();
        Ok(())
    }

    async fn delete(&self, id: &DocumentId) -> DomainResult<()> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|p| &p.id != id);
        if items.len() == before {
            return Err(missing("blog post", id));
        }
        Ok(())
    }

    async fn increment_view_count(&self, id: &DocumentId) -> DomainResult<Option<u64>> {
        let mut items = self.items.lock().unwrap();
        Ok(items.iter_mut().find(|p| &p.id == id).map(|post| {
            post.increment_view_count();
            post.view_count
        }))
    }
}

// ------------------------------------------------------ categories, services

macro_rules! memory_tree_repo {
    ($name:ident, $entity:ty, $trait:ident, $label:literal) => {
        #[derive(Default)]
        pub struct $name {
            items: Mutex<Vec<$entity>>,
        }

        impl $name {
            pub fn with(items: Vec<$entity>) -> Self {
                Self {
                    items: Mutex::new(items),
                }
            }

            pub fn snapshot(&self) -> Vec<$entity> {
                self.items.lock().unwrap().clone()
            }

            fn sorted(&self, keep: impl Fn(&$entity) -> bool) -> Vec<$entity> {
                let mut items: Vec<$entity> = self
                    .items
                    .lock()
                    .unwrap()
                    .iter()
                    .filter(|i| keep(*i))
                    .cloned()
                    .collect();
                items.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
                items
            }

            fn check_unique(items: &[$entity], item: &$entity) -> DomainResult<()> {
                if items.iter().any(|i| i.id != item.id && i.slug == item.slug) {
                    return Err(DomainError::Conflict(concat!($label, " already exists").into()));
                }
                Ok(())
            }
        }

        #[async_trait]
        impl $trait for $name {
            async fn find_by_id(&self, id: &DocumentId) -> DomainResult<Option<$entity>> {
                Ok(self.sorted(|i| &i.id == id).into_iter().next())
            }

            async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<$entity>> {
                Ok(self.sorted(|i| &i.slug == slug).into_iter().next())
            }

            async fn find_all(&self, active_only: bool) -> DomainResult<Vec<$entity>> {
                Ok(self.sorted(|i| !active_only || i.is_active))
            }

            async fn find_children(&self, parent_id: &DocumentId) -> DomainResult<Vec<$entity>> {
                Ok(self.sorted(|i| i.parent_id.as_ref() == Some(parent_id)))
            }

            async fn insert(&self, item: &$entity) -> DomainResult<()> {
                let mut items = self.items.lock().unwrap();
                Self::check_unique(&items, item)?;
                items.push(item.clone());
                Ok(())
            }

            async fn update(&self, item: &$entity) -> DomainResult<()> {
                let mut items = self.items.lock().unwrap();
                Self::check_unique(&items, item)?;
                let slot = items
                    .iter_mut()
                    .find(|i| i.id == item.id)
                    .ok_or_else(|| missing($label, &item.id))?;
                *slot = item.clone();
                Ok(())
            }

            async fn delete(&self, id: &DocumentId) -> DomainResult<()> {
                let mut items = self.items.lock().unwrap();
                let before = items.len();
                items.retain(|i| &i.id != id);
                if items.len() == before {
                    return Err(missing($label, id));
                }
                Ok(())
            }
        }
    };
}

memory_tree_repo!(MemoryCategoryRepo, Category, CategoryRepository, "category");
memory_tree_repo!(MemoryServiceRepo, Service, ServiceRepository, "service");

// ---------------------------------------------------------------- legal

#[derive(Default)]
pub struct MemoryLegalRepo {
    items: Mutex<Vec<LegalContent>>,
}

#[async_trait]
impl LegalContentRepository for MemoryLegalRepo {
    async fn find_by_key(&self, key: &Slug) -> DomainResult<Option<LegalContent>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|c| &c.key == key)
            .cloned())
    }

    async fn upsert(&self, content: &LegalContent) -> DomainResult<()> {
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|c| c.key == content.key) {
            Some(slot) => *slot = content.clone(),
            None => items.push(content.clone()),
        }
        Ok(())
    }
}
