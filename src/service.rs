// Entity fetch service.
// Resolves posts and users by id: cache first, then one transport call, logging around both.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::api::{ApiRequest, Entity, EntityKind, Post, Transport, User};
use crate::cache::{CacheCounters, EntityCache};
use crate::error::{PostieError, Result};
use crate::logging::LogSink;

/// Counters for both caches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub posts: CacheCounters,
    pub users: CacheCounters,
}

/// Cached lookup of posts and users.
///
/// The caches belong to this instance and live as long as it does. Lookups take
/// `&mut self`, so callers are serialized and a cache miss is fetched once.
pub struct EntityService {
    transport: Arc<dyn Transport>,
    log: Arc<dyn LogSink>,
    posts: EntityCache<Post>,
    users: EntityCache<User>,
}

impl EntityService {
    pub fn new(transport: Arc<dyn Transport>, log: Arc<dyn LogSink>) -> Self {
        Self {
            transport,
            log,
            posts: EntityCache::new(),
            users: EntityCache::new(),
        }
    }

    /// Fetch a post by id.
    pub async fn fetch_post(&mut self, id: i64) -> Result<Post> {
        resolve(self.transport.as_ref(), self.log.as_ref(), &mut self.posts, id).await
    }

    /// Fetch a user by id.
    pub async fn fetch_user(&mut self, id: i64) -> Result<User> {
        resolve(self.transport.as_ref(), self.log.as_ref(), &mut self.users, id).await
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            posts: self.posts.counters(),
            users: self.users.counters(),
        }
    }

    /// When an entity was cached, if it is.
    pub fn cached_at(&self, kind: EntityKind, id: i64) -> Option<DateTime<Utc>> {
        match kind {
            EntityKind::Post => self.posts.peek(id).map(|entry| entry.cached_at),
            EntityKind::User => self.users.peek(id).map(|entry| entry.cached_at),
        }
    }
}

async fn resolve<E: Entity>(
    transport: &dyn Transport,
    log: &dyn LogSink,
    cache: &mut EntityCache<E>,
    id: i64,
) -> Result<E> {
    let kind = E::KIND;
    log.log_info(&format!("fetch {kind} called with argument: {id}"));

    let cached = cache.lookup(id).cloned();
    let entity = match cached {
        Some(entity) => {
            debug!(%kind, id, "cache hit");
            entity
        }
        None => match fetch_one::<E>(transport, id).await {
            Ok(fetched) => {
                cache.insert(id, fetched.clone());
                fetched
            }
            Err(err) => {
                log.log_error(&format!("fetch {kind} failed to fetch {kind} {id}: {err}"));
                return Err(err);
            }
        },
    };

    log.log_info(&format!(
        "fetch {kind} returned {kind} with {}",
        entity.describe()
    ));
    Ok(entity)
}

/// One GET for `?id={id}`, expecting a single-element array.
async fn fetch_one<E: Entity>(transport: &dyn Transport, id: i64) -> Result<E> {
    let request = ApiRequest::get(E::KIND.route()).param("id", id);
    let response = transport.execute(&request).await?;
    debug!(kind = %E::KIND, id, status = response.status, "fetched");

    let records: Vec<E> = serde_json::from_str(&response.body)?;
    records
        .into_iter()
        .next()
        .ok_or(PostieError::EntityNotFound { kind: E::KIND, id })
}
